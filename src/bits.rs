//! Storage of the bit-vectors used by monomials.
//!
//! A [BitField] is an ordered sequence of booleans indexed from 0. It does not know its own length:
//! the number of variables is carried by the [Monomial](crate::Monomial) owning it, and all positions
//! beyond this width are kept unset.
//!
//! Two implementations are available and can be picked for each run:
//! * [PackedBits] stores up to 64 bits in a single integer, so that most operations are a few bitwise instructions.
//! * [GrowableBits] uses a [BitSet] and has no capacity limit.

use crate::QuiennyError;
use bit_set::BitSet;
use std::cmp::Ordering;
use std::fmt;

/// Common API of the bit-vectors used to store monomials.
///
/// The order of bit-fields is lexicographic over their positions, the position 0 being the most significant
/// one and a set bit being larger than an unset bit.
pub trait BitField: Clone + Default + fmt::Debug + Eq + Ord {
    /// The number of bits this representation can hold, `None` if unbounded.
    const CAPACITY: Option<usize>;

    /// Create a bit-field with all bits unset, checking that it can hold `width` bits.
    fn zeroed(width: usize) -> Result<Self, QuiennyError> {
        Self::check_width(width)?;
        Ok(Self::default())
    }

    /// Fail if this representation can not hold `width` bits.
    fn check_width(width: usize) -> Result<(), QuiennyError> {
        match Self::CAPACITY {
            Some(capacity) if width > capacity => {
                Err(QuiennyError::CapacityExceeded { width, capacity })
            }
            _ => Ok(()),
        }
    }

    /// Retrieve the bit at a given position
    fn get(&self, idx: usize) -> bool;

    /// Set or clear the bit at a given position
    fn set(&mut self, idx: usize, value: bool);

    /// Count the set bits which are also set in the mask
    fn count_masked(&self, mask: &Self) -> usize;

    /// Find the first position at or after `from` where the two fields differ, considering only
    /// positions set in the mask.
    fn next_difference(&self, other: &Self, mask: &Self, from: usize) -> Option<usize>;
}

/// Fixed capacity bit-field packed in a single 64 bits integer.
///
/// The position 0 is stored in the most significant bit: the natural order of the integers
/// is then the lexicographic order of the bit-vectors.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PackedBits(u64);

impl PackedBits {
    const WIDTH: usize = u64::BITS as usize;

    fn bit(idx: usize) -> u64 {
        debug_assert!(idx < Self::WIDTH);
        1 << (Self::WIDTH - 1 - idx)
    }
}

impl BitField for PackedBits {
    const CAPACITY: Option<usize> = Some(Self::WIDTH);

    fn get(&self, idx: usize) -> bool {
        self.0 & Self::bit(idx) != 0
    }

    fn set(&mut self, idx: usize, value: bool) {
        if value {
            self.0 |= Self::bit(idx);
        } else {
            self.0 &= !Self::bit(idx);
        }
    }

    fn count_masked(&self, mask: &Self) -> usize {
        (self.0 & mask.0).count_ones() as usize
    }

    fn next_difference(&self, other: &Self, mask: &Self, from: usize) -> Option<usize> {
        if from >= Self::WIDTH {
            return None;
        }
        let diff = (self.0 ^ other.0) & mask.0 & (u64::MAX >> from);
        match diff {
            0 => None,
            _ => Some(diff.leading_zeros() as usize),
        }
    }
}

impl fmt::Debug for PackedBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PackedBits({:064b})", self.0)
    }
}

/// Unbounded bit-field backed by a [BitSet].
#[derive(Clone, Default)]
pub struct GrowableBits(BitSet);

impl GrowableBits {
    /// Position of the first bit set in exactly one of the two fields
    fn first_difference(&self, other: &Self) -> Option<usize> {
        self.0.symmetric_difference(&other.0).next()
    }
}

impl BitField for GrowableBits {
    const CAPACITY: Option<usize> = None;

    fn get(&self, idx: usize) -> bool {
        self.0.contains(idx)
    }

    fn set(&mut self, idx: usize, value: bool) {
        if value {
            self.0.insert(idx);
        } else {
            self.0.remove(idx);
        }
    }

    fn count_masked(&self, mask: &Self) -> usize {
        self.0.intersection(&mask.0).count()
    }

    fn next_difference(&self, other: &Self, mask: &Self, from: usize) -> Option<usize> {
        self.0
            .symmetric_difference(&other.0)
            .find(|idx| *idx >= from && mask.0.contains(*idx))
    }
}

// The bit-set may keep trailing empty blocks after removals: compare the content only

impl PartialEq for GrowableBits {
    fn eq(&self, other: &Self) -> bool {
        self.first_difference(other).is_none()
    }
}

impl Eq for GrowableBits {}

impl PartialOrd for GrowableBits {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GrowableBits {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.first_difference(other) {
            None => Ordering::Equal,
            Some(idx) if self.0.contains(idx) => Ordering::Greater,
            Some(_) => Ordering::Less,
        }
    }
}

impl fmt::Debug for GrowableBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("GrowableBits")
            .field(&self.0.iter().collect::<Vec<_>>())
            .finish()
    }
}
