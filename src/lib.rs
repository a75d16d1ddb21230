//! Compute all prime implicants of a Boolean function given by its truth table.
//!
//! A Boolean function over `N` variables is given as the list of its satisfying assignments (minterms).
//! The prime implicants are computed with the Quine-McCluskey method: pairs of monomials differing
//! in a single variable are merged repeatedly, until no merge is possible.
//!
//! # Monomials and polynomials
//!
//! A [Monomial] is a product of literals, represented by a mask of significant variables and the values of these
//! variables. Other variables are "don't care" and noted `-`.
//! A [Polynomial] is a list of monomials over the same variables, i.e. a Boolean function in disjunctive normal form.
//!
//! ```
//! use quienny::{Monomial, Polynomial};
//! # use quienny::QuiennyError;
//! # fn main() -> Result<(), QuiennyError> {
//!
//! let m: Monomial = "1-0".parse()?;
//! assert!(m.covers(&[true, true, false]));
//! assert!(!m.covers(&[true, true, true]));
//!
//! // Duplicates are removed when normalizing
//! let mut p: Polynomial = "110 ; 011 ; 110".parse()?;
//! p.normalize();
//! assert_eq!(p.len(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! # Prime implicants
//!
//! An implicant of a function is a monomial covering only true assignments of the function, it is *prime*
//! if it is not contained in any other implicant. The [list of all prime implicants](Primes) of a function
//! is computed by a [Generator], which selects the candidate pairs of monomials according to a [Strategy].
//!
//! ```
//! use quienny::{Generator, Polynomial, Strategy};
//! # use quienny::QuiennyError;
//! # fn main() -> Result<(), QuiennyError> {
//!
//! let minterms: Polynomial = "0100;1000;1001;1010;1011;1100;1110;1111".parse()?;
//! let primes = Generator::new(Strategy::Sliced).generate(minterms);
//! assert_eq!(primes.to_string(), "-100\n1--0\n10--\n1-1-\n");
//! # Ok(())
//! # }
//! ```
//!
//! # Bit-fields
//!
//! Monomials are generic over the [storage of their bit-vectors](BitField). The default [PackedBits] handles up to
//! 64 variables, [GrowableBits] has no limit. The choice for a batch run is part of its [Config].
//!
//! # Text format
//!
//! The [batch] module reads minterms as lines of `0` and `1` (see [MintermReader]) and writes the prime implicants
//! one per line, using `-` for don't care positions.

mod bits;
mod config;
mod consensus;
mod error;
mod generator;
mod monomial;
mod parse;
mod polynomial;
mod primes;

pub mod batch;
pub mod tools;

// Export public structures and API
pub use bits::{BitField, GrowableBits, PackedBits};
pub use config::{Config, Representation};
pub use consensus::{consensus, consensus_any};
pub use error::{ParseError, QuiennyError};
pub use generator::{Generator, RoundStats, Strategy};
pub use monomial::Monomial;
pub use parse::MintermReader;
pub use polynomial::Polynomial;
pub use primes::Primes;
