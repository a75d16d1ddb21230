//! Merge pairs of monomials differing in a single significant position.

use crate::bits::BitField;
use crate::{Monomial, Polynomial};

/// Merge a pair of monomials from adjacent slices and append the result to `next`.
///
/// Only pairs where the second monomial shares the mask of the first one and has exactly one more
/// significant 1 are considered, other pairs are never merged.
/// If they differ in a single position, this position becomes a don't care in a copy of the first monomial.
/// As this position is a 0 in the first monomial, the number of ones of the merged monomial is unchanged.
///
/// Returns whether the pair was merged, `next` is left untouched otherwise.
pub fn consensus<B: BitField>(mi: &Monomial<B>, mj: &Monomial<B>, next: &mut Polynomial<B>) -> bool {
    match mi.find_match(mj) {
        None => false,
        Some(k) => {
            let merged = mi.with_free_variable(k);
            debug_assert_eq!(merged.ones(), mi.ones());
            log::trace!("merge {} and {} into {}", mi, mj, merged);
            next.push_unchecked(merged);
            true
        }
    }
}

/// Merge an arbitrary pair of monomials.
///
/// This makes no assumption on the two monomials and is used by the exhaustive generator.
pub fn consensus_any<B: BitField>(
    mi: &Monomial<B>,
    mj: &Monomial<B>,
    next: &mut Polynomial<B>,
) -> bool {
    match mi.find_any_match(mj) {
        None => false,
        Some(k) => {
            next.push_unchecked(mi.with_free_variable(k));
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QuiennyError;

    #[test]
    fn merge_pairs() -> Result<(), QuiennyError> {
        let mut next: Polynomial = Polynomial::with_width(4);

        assert!(consensus(&"0-10".parse()?, &"0-11".parse()?, &mut next));
        assert!(!consensus(&"0-10".parse()?, &"1-01".parse()?, &mut next));
        assert_eq!(next.len(), 1);
        assert_eq!(next[0].to_string(), "0-1-");
        assert_eq!(next[0].ones(), 1);

        assert!(consensus_any(&"1-11".parse()?, &"0-11".parse()?, &mut next));
        assert!(!consensus_any(&"1-11".parse()?, &"1--1".parse()?, &mut next));
        assert_eq!(next[1].to_string(), "--11");
        assert_eq!(next[1].ones(), 2);
        Ok(())
    }

    #[test]
    fn reject_unrelated_pairs() -> Result<(), QuiennyError> {
        let mut next: Polynomial = Polynomial::with_width(2);

        // Different masks
        assert!(!consensus(&"-0".parse()?, &"01".parse()?, &mut next));
        // Same block
        assert!(!consensus(&"01".parse()?, &"10".parse()?, &mut next));
        // Non adjacent blocks
        assert!(!consensus(&"00".parse()?, &"11".parse()?, &mut next));
        // Wrong direction
        assert!(!consensus(&"01".parse()?, &"00".parse()?, &mut next));
        assert!(next.is_empty());

        // The undirected merge accepts the reversed pair
        assert!(consensus_any(&"01".parse()?, &"00".parse()?, &mut next));
        assert_eq!(next.to_string(), "0-\n");
        Ok(())
    }
}
