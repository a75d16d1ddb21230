use crate::bits::{BitField, PackedBits};
use crate::{Generator, Monomial, Polynomial};

use delegate::delegate;
use std::fmt;
use std::slice::Iter;
use std::vec::IntoIter;

/// Boolean function represented as the set of all its prime implicants.
///
/// This is a special case of [Polynomial], always normalized.
/// An implicant is "prime" if it is not contained in any other implicant.
/// Note that this is the complete list of prime implicants, not a minimal cover of the function.
///
/// ```
/// use quienny::{Polynomial, Primes};
/// # use quienny::QuiennyError;
/// # fn main() -> Result<(), QuiennyError> {
/// let minterms: Polynomial = "00;01;10;11".parse()?;
/// let primes = Primes::from(minterms);
/// assert_eq!(primes.len(), 1);
/// assert!(primes.covers(&[true, false]));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Primes<B: BitField = PackedBits> {
    monomials: Polynomial<B>,
}

impl<B: BitField> Primes<B> {
    pub(crate) fn from_normalized(monomials: Polynomial<B>) -> Self {
        debug_assert!(monomials.is_normalized());
        Self { monomials }
    }

    delegate! {
        to self.monomials {
            /// Get the number of prime implicants
            pub fn len(&self) -> usize;
            /// Return whether there is no prime implicant (the function is always false)
            pub fn is_empty(&self) -> bool;
            /// The number of variables, if it is known
            pub fn width(&self) -> Option<usize>;
            pub fn iter(&self) -> Iter<'_, Monomial<B>>;
            pub fn as_slice(&self) -> &[Monomial<B>];
            /// Test if a monomial is one of the prime implicants
            pub fn contains(&self, m: &Monomial<B>) -> bool;
        }
    }

    pub fn as_polynomial(&self) -> &Polynomial<B> {
        &self.monomials
    }

    pub fn into_polynomial(self) -> Polynomial<B> {
        self.monomials
    }

    /// Test if the function is true for the given minterm
    pub fn covers(&self, minterm: &[bool]) -> bool {
        self.iter().any(|m| m.covers(minterm))
    }

    /// Test if all minterms of a monomial are covered by a single prime implicant
    pub fn subsumes(&self, m: &Monomial<B>) -> bool {
        self.iter().any(|p| p.contains(m))
    }
}

impl<B: BitField> From<Polynomial<B>> for Primes<B> {
    fn from(polynomial: Polynomial<B>) -> Self {
        Generator::default().generate(polynomial)
    }
}

impl<B: BitField> From<&Polynomial<B>> for Primes<B> {
    fn from(polynomial: &Polynomial<B>) -> Self {
        Self::from(polynomial.clone())
    }
}

impl<B: BitField> From<Primes<B>> for Polynomial<B> {
    fn from(primes: Primes<B>) -> Self {
        primes.into_polynomial()
    }
}

impl<'a, B: BitField> IntoIterator for &'a Primes<B> {
    type Item = &'a Monomial<B>;
    type IntoIter = Iter<'a, Monomial<B>>;

    fn into_iter(self) -> Self::IntoIter {
        self.monomials.iter()
    }
}

impl<B: BitField> IntoIterator for Primes<B> {
    type Item = Monomial<B>;
    type IntoIter = IntoIter<Monomial<B>>;

    fn into_iter(self) -> Self::IntoIter {
        self.monomials.into_iter()
    }
}

// delegate Display impl to the polynomial
impl<B: BitField> fmt::Display for Primes<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.monomials.fmt(f)
    }
}
