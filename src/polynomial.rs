//! Manipulate collections of monomials.

use crate::bits::{BitField, PackedBits};
use crate::tools::runs_by;
use crate::{Monomial, QuiennyError};

use std::fmt;
use std::ops::{Index, Range};
use std::slice::Iter;
use std::str::FromStr;
use std::vec::IntoIter;

static MONOMIAL_SEPARATORS: [char; 4] = [',', ';', '|', '\n'];

/// Boolean function represented as a sum of monomials.
///
/// All monomials of a polynomial share the same number of variables, fixed by the first inserted monomial
/// (or explicitly at construction).
///
/// Monomials are stored in insertion order until the polynomial is [normalized](Self::normalize): it is then
/// sorted in the canonical order of monomials (number of ones, mask, values) and free of duplicates.
/// In a normalized polynomial, monomials with the same number of ones form contiguous *blocks*, and
/// inside a block monomials sharing the same mask form contiguous *slices*.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Polynomial<B: BitField = PackedBits> {
    width: Option<usize>,
    monomials: Vec<Monomial<B>>,
}

impl<B: BitField> Polynomial<B> {
    /// Create an empty polynomial, the width will be defined by the first monomial
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty polynomial over a fixed number of variables
    pub fn with_width(width: usize) -> Self {
        Self {
            width: Some(width),
            monomials: Vec::new(),
        }
    }

    /// The number of variables, if it is already known
    pub fn width(&self) -> Option<usize> {
        self.width
    }

    pub fn iter(&self) -> Iter<'_, Monomial<B>> {
        self.monomials.iter()
    }

    pub fn as_slice(&self) -> &[Monomial<B>] {
        &self.monomials
    }

    /// Get the number of monomials in this polynomial
    pub fn len(&self) -> usize {
        self.monomials.len()
    }

    /// Return whether there is no monomial (the function is always false)
    pub fn is_empty(&self) -> bool {
        self.monomials.is_empty()
    }

    /// Remove all monomials, the width is preserved
    pub fn clear(&mut self) {
        self.monomials.clear();
    }

    fn check_width(&mut self, m: &Monomial<B>) -> Result<(), QuiennyError> {
        match self.width {
            None => {
                self.width = Some(m.width());
                Ok(())
            }
            Some(expected) if expected != m.width() => Err(QuiennyError::WidthMismatch {
                expected,
                found: m.width(),
            }),
            Some(_) => Ok(()),
        }
    }

    /// Append a monomial, without any check for duplicates.
    pub fn push(&mut self, m: Monomial<B>) -> Result<(), QuiennyError> {
        self.check_width(&m)?;
        self.monomials.push(m);
        Ok(())
    }

    /// Append a monomial built from a member of this polynomial
    pub(crate) fn push_unchecked(&mut self, m: Monomial<B>) {
        debug_assert!(self.width.map_or(true, |w| w == m.width()));
        self.monomials.push(m);
    }

    /// Append a monomial if it is not already present.
    ///
    /// Returns whether the monomial was added. This performs a linear scan of the polynomial,
    /// use [Self::push] and [Self::normalize] to add many monomials at once.
    pub fn insert(&mut self, m: Monomial<B>) -> Result<bool, QuiennyError> {
        self.check_width(&m)?;
        if self.contains(&m) {
            return Ok(false);
        }
        self.monomials.push(m);
        Ok(true)
    }

    /// Test if this polynomial contains a monomial equal to the given one
    pub fn contains(&self, m: &Monomial<B>) -> bool {
        self.monomials.iter().any(|t| t == m)
    }

    /// Sort the monomials in canonical order and remove duplicates.
    pub fn normalize(&mut self) {
        self.monomials.sort();
        self.monomials.dedup();
    }

    /// Test if the monomials are strictly increasing in canonical order
    pub fn is_normalized(&self) -> bool {
        self.monomials.windows(2).all(|w| w[0] < w[1])
    }

    /// Split a normalized polynomial into blocks of monomials with the same number of ones.
    pub fn blocks(&self) -> Vec<Range<usize>> {
        debug_assert!(self.is_normalized());
        runs_by(&self.monomials, |a, b| a.ones() == b.ones())
    }

    /// Split a range of a normalized polynomial into slices of monomials sharing the same mask.
    pub fn slices(&self, block: Range<usize>) -> Vec<Range<usize>> {
        let offset = block.start;
        runs_by(&self.monomials[block], |a, b| a.mask() == b.mask())
            .into_iter()
            .map(|r| r.start + offset..r.end + offset)
            .collect()
    }
}

impl<B: BitField> Index<usize> for Polynomial<B> {
    type Output = Monomial<B>;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.monomials[idx]
    }
}

impl<'a, B: BitField> IntoIterator for &'a Polynomial<B> {
    type Item = &'a Monomial<B>;
    type IntoIter = Iter<'a, Monomial<B>>;

    fn into_iter(self) -> Self::IntoIter {
        self.monomials.iter()
    }
}

impl<B: BitField> IntoIterator for Polynomial<B> {
    type Item = Monomial<B>;
    type IntoIter = IntoIter<Monomial<B>>;

    fn into_iter(self) -> Self::IntoIter {
        self.monomials.into_iter()
    }
}

impl<B: BitField> FromStr for Polynomial<B> {
    type Err = QuiennyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut result = Polynomial::default();
        for elt in s.split(&MONOMIAL_SEPARATORS[..]) {
            let elt = elt.trim();
            if elt.is_empty() {
                continue;
            }
            result.push(elt.parse()?)?;
        }
        Ok(result)
    }
}

impl<B: BitField> fmt::Display for Polynomial<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for m in &self.monomials {
            writeln!(f, "{}", m)?;
        }
        Ok(())
    }
}
