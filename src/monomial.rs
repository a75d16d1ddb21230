use crate::bits::{BitField, PackedBits};
use crate::QuiennyError;

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A product of literals over a fixed number of variables.
///
/// A monomial is represented by a pair of bit-fields: the `mask` selects the significant positions and
/// the `values` give the value of each significant position. Other positions are "don't care".
/// The number of significant positions set to 1 (`ones`) is cached as it is the primary key of the
/// canonical order used to group monomials during the generation of prime implicants.
///
/// The values of don't care positions are always kept unset: they never affect equality, order or display.
///
/// Monomials can be parsed from strings where each character gives the state of the next variable:
/// `0` or `1` for significant positions and `-` for don't care positions.
///
/// ```
/// use quienny::Monomial;
/// # use quienny::QuiennyError;
/// # fn main() -> Result<(), QuiennyError> {
/// let m: Monomial = "1-01".parse()?;
/// assert_eq!(m.width(), 4);
/// assert_eq!(m.ones(), 2);
/// assert_eq!(m.get(1), None);
/// assert_eq!(m.to_string(), "1-01");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Monomial<B: BitField = PackedBits> {
    width: usize,
    ones: usize,
    mask: B,
    values: B,
}

impl<B: BitField> Monomial<B> {
    /// Create a fully specified monomial (a minterm)
    pub fn from_bits(bits: &[bool]) -> Result<Self, QuiennyError> {
        let width = bits.len();
        let mut mask = B::zeroed(width)?;
        let mut values = B::zeroed(width)?;
        let mut ones = 0;
        for (idx, b) in bits.iter().enumerate() {
            mask.set(idx, true);
            if *b {
                values.set(idx, true);
                ones += 1;
            }
        }
        Ok(Self {
            width,
            ones,
            mask,
            values,
        })
    }

    /// The number of variables
    pub fn width(&self) -> usize {
        self.width
    }

    /// The number of significant positions set to 1
    pub fn ones(&self) -> usize {
        self.ones
    }

    pub fn mask(&self) -> &B {
        &self.mask
    }

    pub fn values(&self) -> &B {
        &self.values
    }

    /// Get the value of a variable, `None` if it is a don't care position or out of range
    pub fn get(&self, idx: usize) -> Option<bool> {
        if idx >= self.width {
            return None;
        }
        match self.mask.get(idx) {
            true => Some(self.values.get(idx)),
            false => None,
        }
    }

    /// Number of don't care positions
    pub fn free_count(&self) -> usize {
        self.width - self.mask.count_masked(&self.mask)
    }

    /// Find the single significant position where this monomial has a 0 and the other a 1.
    ///
    /// Both monomials must share the same mask and the other monomial must have exactly one more
    /// significant 1, other pairs never match. Finding a position going from 1 to 0 then means that the
    /// pair differs in more than one position, this direction is thus rejected straight away.
    pub fn find_match(&self, other: &Self) -> Option<usize> {
        if self.width != other.width || self.ones + 1 != other.ones || self.mask != other.mask {
            return None;
        }
        let idx = self.values.next_difference(&other.values, &self.mask, 0)?;
        if self.values.get(idx) {
            return None;
        }
        match self.values.next_difference(&other.values, &self.mask, idx + 1) {
            None => Some(idx),
            Some(_) => None,
        }
    }

    /// Find the single significant position where the two monomials differ, in any direction.
    ///
    /// Unlike [Self::find_match], this makes no assumption on the pair of monomials.
    pub fn find_any_match(&self, other: &Self) -> Option<usize> {
        if self.width != other.width || self.mask != other.mask {
            return None;
        }
        let idx = self.values.next_difference(&other.values, &self.mask, 0)?;
        match self.values.next_difference(&other.values, &self.mask, idx + 1) {
            None => Some(idx),
            Some(_) => None,
        }
    }

    /// Create a copy of this monomial where a variable becomes a don't care position
    pub fn with_free_variable(&self, idx: usize) -> Self {
        let mut result = self.clone();
        if idx < self.width && result.mask.get(idx) {
            result.mask.set(idx, false);
            if result.values.get(idx) {
                result.values.set(idx, false);
                result.ones -= 1;
            }
        }
        result
    }

    /// Test if a minterm (given as the values of all variables) is covered by this monomial
    pub fn covers(&self, minterm: &[bool]) -> bool {
        minterm.len() == self.width
            && minterm
                .iter()
                .enumerate()
                .all(|(idx, v)| self.get(idx).map_or(true, |b| b == *v))
    }

    /// Test if all minterms of another monomial are covered by this one
    pub fn contains(&self, other: &Self) -> bool {
        self.width == other.width
            && (0..self.width).all(|idx| match self.get(idx) {
                None => true,
                Some(v) => other.get(idx) == Some(v),
            })
    }

    /// List all minterms covered by this monomial.
    ///
    /// The result has `2^k` elements, where `k` is the number of don't care positions.
    pub fn expand(&self) -> Vec<Self> {
        let mut result = vec![self.clone()];
        for idx in (0..self.width).filter(|idx| !self.mask.get(*idx)) {
            let mut extended = Vec::with_capacity(result.len() * 2);
            for m in result {
                let mut high = m.clone();
                high.mask.set(idx, true);
                high.values.set(idx, true);
                high.ones += 1;
                let mut low = m;
                low.mask.set(idx, true);
                extended.push(low);
                extended.push(high);
            }
            result = extended;
        }
        result
    }
}

impl<B: BitField> PartialEq for Monomial<B> {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.mask == other.mask
            && self
                .values
                .next_difference(&other.values, &self.mask, 0)
                .is_none()
    }
}

impl<B: BitField> Eq for Monomial<B> {}

impl<B: BitField> PartialOrd for Monomial<B> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Canonical order: by number of ones, then by mask, then by values.
impl<B: BitField> Ord for Monomial<B> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ones
            .cmp(&other.ones)
            .then_with(|| self.mask.cmp(&other.mask))
            .then_with(|| self.values.cmp(&other.values))
            .then_with(|| self.width.cmp(&other.width))
    }
}

impl<B: BitField> FromStr for Monomial<B> {
    type Err = QuiennyError;

    fn from_str(descr: &str) -> Result<Self, Self::Err> {
        let descr = descr.trim();
        let width = descr.chars().count();
        let mut mask = B::zeroed(width)?;
        let mut values = B::zeroed(width)?;
        let mut ones = 0;
        for (idx, c) in descr.chars().enumerate() {
            match c {
                '-' => (),
                '0' => mask.set(idx, true),
                '1' => {
                    mask.set(idx, true);
                    values.set(idx, true);
                    ones += 1;
                }
                _ => return Err(QuiennyError::InvalidMonomial(descr.to_string())),
            }
        }
        Ok(Self {
            width,
            ones,
            mask,
            values,
        })
    }
}

impl<B: BitField> fmt::Display for Monomial<B> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for idx in 0..self.width {
            let c = match self.get(idx) {
                None => '-',
                Some(false) => '0',
                Some(true) => '1',
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
