//! Run the whole pipeline: read minterms, generate prime implicants, write them.

use crate::bits::{BitField, GrowableBits, PackedBits};
use crate::config::{Config, Representation};
use crate::{Generator, Polynomial, QuiennyError, RoundStats};

use log::debug;
use std::io::{BufRead, Write};

/// Outcome of a batch run
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    /// Number of variables, `None` for an empty input
    pub width: Option<usize>,
    /// Number of distinct minterms
    pub minterms: usize,
    /// Number of prime implicants written
    pub primes: usize,
    pub rounds: Vec<RoundStats>,
}

/// Read a list of minterms, and write all its prime implicants in canonical order.
///
/// The `path` is only used to report parse errors. Nothing is written if the input is malformed.
///
/// ```
/// use quienny::{batch, Config};
/// # use quienny::QuiennyError;
/// # fn main() -> Result<(), QuiennyError> {
/// let mut output = Vec::new();
/// let report = batch::run("00\n01\n10\n11\n".as_bytes(), "<stdin>", &mut output, &Config::default())?;
/// assert_eq!(output, b"--\n");
/// assert_eq!(report.primes, 1);
/// # Ok(())
/// # }
/// ```
pub fn run<R: BufRead, W: Write>(
    input: R,
    path: &str,
    output: W,
    config: &Config,
) -> Result<Report, QuiennyError> {
    debug!(
        "minimizing '{}' with {} bit-fields and {} rounds",
        path, config.representation, config.strategy
    );
    match config.representation {
        Representation::Packed => run_with::<PackedBits, R, W>(input, path, output, config),
        Representation::Growable => run_with::<GrowableBits, R, W>(input, path, output, config),
    }
}

fn run_with<B: BitField, R: BufRead, W: Write>(
    input: R,
    path: &str,
    mut output: W,
    config: &Config,
) -> Result<Report, QuiennyError> {
    let minterms = Polynomial::<B>::read_minterms(input, path)?;
    let width = minterms.width();
    let count = minterms.len();

    let mut generator = Generator::new(config.strategy);
    let primes = generator.generate(minterms);

    write!(output, "{}", primes)?;
    output.flush()?;

    Ok(Report {
        width,
        minterms: count,
        primes: primes.len(),
        rounds: generator.rounds().to_vec(),
    })
}
