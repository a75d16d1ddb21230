//! Compute all prime implicants of a polynomial with the Quine-McCluskey method.
//!
//! The generation proceeds in rounds. Each round tries to merge all pairs of monomials of the current
//! polynomial. Monomials which are never merged are prime implicants, the merged monomials form the
//! polynomial of the next round. The generation stops when a round produces no merged monomial.
//!
//! Two monomials can only be merged if they share the same mask and if their number of ones differ
//! by exactly one. In a normalized polynomial, these candidates are found in the slices of adjacent
//! blocks (see [Polynomial]): the [sliced](Strategy::Sliced) strategy only compares these pairs of slices.
//! The [exhaustive](Strategy::Exhaustive) strategy compares all pairs of monomials and serves as a reference.

use crate::bits::BitField;
use crate::consensus::{consensus, consensus_any};
use crate::{Polynomial, Primes, QuiennyError};

use itertools::Itertools;
use log::{debug, info};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// Selection of the candidate pairs of monomials in each round
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Compare matching slices of adjacent blocks only
    #[default]
    Sliced,
    /// Compare all pairs of monomials
    Exhaustive,
}

/// Summary of a single round of the generation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoundStats {
    /// Index of the round, starting at 1
    pub round: usize,
    /// Number of monomials at the start of the round
    pub candidates: usize,
    /// Number of successful merges
    pub merges: usize,
    /// Number of monomials which were not merged
    pub primes: usize,
    /// Number of distinct merged monomials passed to the next round
    pub next: usize,
}

/// Drive the rounds of the Quine-McCluskey method.
///
/// ```
/// use quienny::{Generator, Polynomial, Strategy};
/// # use quienny::QuiennyError;
/// # fn main() -> Result<(), QuiennyError> {
/// let minterms: Polynomial = "000;001;010;011".parse()?;
///
/// let mut generator = Generator::new(Strategy::Sliced);
/// let primes = generator.generate(minterms);
/// assert_eq!(primes.to_string(), "0--\n");
/// assert_eq!(generator.rounds().len(), 3);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct Generator {
    strategy: Strategy,
    rounds: Vec<RoundStats>,
}

impl Generator {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            rounds: Vec::new(),
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Statistics of the rounds of the last generation
    pub fn rounds(&self) -> &[RoundStats] {
        &self.rounds
    }

    /// Compute the prime implicants of a polynomial.
    pub fn generate<B: BitField>(&mut self, mut current: Polynomial<B>) -> Primes<B> {
        self.rounds.clear();
        let width = current.width();
        let mut primes = width.map(Polynomial::with_width).unwrap_or_default();

        // The partition in blocks and slices is only valid in canonical order
        current.normalize();

        while !current.is_empty() {
            assert!(current.is_normalized(), "unordered polynomial in round");
            let mut stats = RoundStats {
                round: self.rounds.len() + 1,
                candidates: current.len(),
                ..RoundStats::default()
            };

            let mut merged = vec![false; current.len()];
            let mut next = width.map(Polynomial::with_width).unwrap_or_default();
            stats.merges = match self.strategy {
                Strategy::Sliced => sliced_round(&current, &mut merged, &mut next),
                Strategy::Exhaustive => exhaustive_round(&current, &mut merged, &mut next),
            };

            for (m, merged) in current.into_iter().zip(merged) {
                if !merged {
                    primes.push_unchecked(m);
                    stats.primes += 1;
                }
            }

            next.normalize();
            stats.next = next.len();
            info!(
                "round {}: {} monomials, {} merges, {} primes, {} for next round",
                stats.round, stats.candidates, stats.merges, stats.primes, stats.next
            );
            self.rounds.push(stats);
            current = next;
        }

        primes.normalize();
        Primes::from_normalized(primes)
    }
}

/// Merge the matching slices of adjacent blocks.
fn sliced_round<B: BitField>(
    p: &Polynomial<B>,
    merged: &mut [bool],
    next: &mut Polynomial<B>,
) -> usize {
    let mut merges = 0;
    let mut pairs = 0;
    for (low, high) in p.blocks().into_iter().tuple_windows() {
        if p[low.start].ones() + 1 != p[high.start].ones() {
            continue;
        }

        // Slices are sorted by mask in both blocks: walk them together
        let low_slices = p.slices(low);
        let high_slices = p.slices(high);
        let (mut i, mut j) = (0, 0);
        while i < low_slices.len() && j < high_slices.len() {
            let (ls, hs) = (&low_slices[i], &high_slices[j]);
            match p[ls.start].mask().cmp(p[hs.start].mask()) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    merges += merge_slices(p, ls.clone(), hs.clone(), merged, next);
                    pairs += 1;
                    i += 1;
                    j += 1;
                }
            }
        }
    }
    debug!("{} pairs of slices compared", pairs);
    merges
}

/// Try to merge all pairs from two slices sharing the same mask.
fn merge_slices<B: BitField>(
    p: &Polynomial<B>,
    low: Range<usize>,
    high: Range<usize>,
    merged: &mut [bool],
    next: &mut Polynomial<B>,
) -> usize {
    let mut merges = 0;
    for i in low {
        for j in high.clone() {
            if consensus(&p[i], &p[j], next) {
                merged[i] = true;
                merged[j] = true;
                merges += 1;
            }
        }
    }
    merges
}

/// Try to merge all pairs of monomials.
fn exhaustive_round<B: BitField>(
    p: &Polynomial<B>,
    merged: &mut [bool],
    next: &mut Polynomial<B>,
) -> usize {
    let mut merges = 0;
    for (i, j) in (0..p.len()).tuple_combinations() {
        if consensus_any(&p[i], &p[j], next) {
            merged[i] = true;
            merged[j] = true;
            merges += 1;
        }
    }
    merges
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Sliced => write!(f, "sliced"),
            Strategy::Exhaustive => write!(f, "exhaustive"),
        }
    }
}

impl FromStr for Strategy {
    type Err = QuiennyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sliced" => Ok(Strategy::Sliced),
            "exhaustive" => Ok(Strategy::Exhaustive),
            _ => Err(QuiennyError::InvalidOption("strategy", s.to_string())),
        }
    }
}
