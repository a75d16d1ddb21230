//! Property-based checks of the prime implicant generation.

use proptest::prelude::*;
use quienny::{BitField, Generator, GrowableBits, Monomial, PackedBits, Polynomial, Primes};
use std::collections::BTreeSet;

const MAX_WIDTH: usize = 6;

/// A number of variables with a list of minterms (possibly with duplicates)
fn minterms() -> impl Strategy<Value = (usize, Vec<u64>)> {
    (1..=MAX_WIDTH).prop_flat_map(|w| (Just(w), prop::collection::vec(0..(1u64 << w), 0..48)))
}

fn bits(width: usize, row: u64) -> Vec<bool> {
    (0..width).map(|i| row & (1 << (width - i - 1)) != 0).collect()
}

fn polynomial<B: BitField>(width: usize, rows: &[u64]) -> Polynomial<B> {
    let mut p = Polynomial::with_width(width);
    for row in rows {
        p.push(Monomial::from_bits(&bits(width, *row)).unwrap()).unwrap();
    }
    p
}

fn primes_with<B: BitField>(width: usize, rows: &[u64], strategy: quienny::Strategy) -> Primes<B> {
    Generator::new(strategy).generate(polynomial(width, rows))
}

fn primes(width: usize, rows: &[u64]) -> Primes {
    primes_with(width, rows, quienny::Strategy::Sliced)
}

proptest! {
    #[test]
    fn covers_exactly_the_minterms((width, rows) in minterms()) {
        let primes = primes(width, &rows);
        let expected: BTreeSet<String> = rows.iter().map(|r| Monomial::<PackedBits>::from_bits(&bits(width, *r)).unwrap().to_string()).collect();
        let covered: BTreeSet<String> = primes.iter().flat_map(|p| p.expand()).map(|m| m.to_string()).collect();
        prop_assert_eq!(covered, expected);
    }

    #[test]
    fn primes_can_not_be_extended((width, rows) in minterms()) {
        let primes = primes(width, &rows);
        let minterms = polynomial::<PackedBits>(width, &rows);
        for p in &primes {
            for idx in (0..width).filter(|idx| p.get(*idx).is_some()) {
                let larger = p.with_free_variable(idx);
                prop_assert!(!larger.expand().iter().all(|m| minterms.contains(m)), "{} is not prime", p);
            }
        }
    }

    #[test]
    fn sliced_matches_exhaustive((width, rows) in minterms()) {
        let sliced: Primes = primes_with(width, &rows, quienny::Strategy::Sliced);
        let exhaustive: Primes = primes_with(width, &rows, quienny::Strategy::Exhaustive);
        prop_assert_eq!(sliced, exhaustive);
    }

    #[test]
    fn packed_matches_growable((width, rows) in minterms()) {
        let packed: Primes<PackedBits> = primes_with(width, &rows, quienny::Strategy::Sliced);
        let growable: Primes<GrowableBits> = primes_with(width, &rows, quienny::Strategy::Sliced);
        prop_assert_eq!(packed.to_string(), growable.to_string());
    }

    #[test]
    fn order_does_not_matter(
        (width, rows, shuffled) in minterms().prop_flat_map(|(w, rows)| (Just(w), Just(rows.clone()), Just(rows).prop_shuffle()))
    ) {
        prop_assert_eq!(primes(width, &rows), primes(width, &shuffled));
    }

    #[test]
    fn normalize_is_idempotent(
        rows in (1..=MAX_WIDTH).prop_flat_map(|w| prop::collection::vec(prop::collection::vec(prop::sample::select(vec!['0', '1', '-']), w), 0..32))
    ) {
        let mut p: Polynomial = Polynomial::new();
        for row in &rows {
            p.push(row.iter().collect::<String>().parse().unwrap()).unwrap();
        }
        p.normalize();
        prop_assert!(p.is_normalized());
        let once = p.clone();
        p.normalize();
        prop_assert_eq!(p, once);
    }
}
