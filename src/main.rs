//! `quienny` — print all prime implicants of a Boolean function given by its minterms.
//!
//! **Usage:**
//! ```text
//! quienny [-v]... [--bits packed|growable] [--exhaustive] [INPUT [OUTPUT]]
//! ```
//!
//! The input and output default to the standard input and output, `-` can also be used for both.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser};
use log::{info, LevelFilter};
use quienny::{batch, Config, QuiennyError, Representation, Strategy};

/// Compute all prime implicants of a list of minterms (lines of '0' and '1').
#[derive(Parser, Debug)]
#[command(name = "quienny", disable_help_flag = true)]
struct Args {
    /// Print this help message
    #[arg(short, long)]
    help: bool,

    /// Report the progress of each round on stderr (repeat for more details)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Storage of the bit-vectors: 'packed' (up to 64 variables) or 'growable'
    #[arg(long, value_name = "REPR", default_value_t = Representation::Packed)]
    bits: Representation,

    /// Compare all pairs of monomials instead of matching slices only
    #[arg(long)]
    exhaustive: bool,

    /// Input file, '-' for stdin
    #[arg(value_name = "INPUT")]
    input: Option<String>,

    /// Output file, '-' for stdout
    #[arg(value_name = "OUTPUT")]
    output: Option<String>,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };
    if args.help {
        eprintln!("{}", Args::command().render_help());
        return ExitCode::FAILURE;
    }

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<QuiennyError>() {
                Some(parse @ QuiennyError::Parse { .. }) => eprintln!("quienny: {}", parse),
                _ => eprintln!("quienny: error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let strategy = match args.exhaustive {
        true => Strategy::Exhaustive,
        false => Strategy::Sliced,
    };
    let config = Config::new(args.bits, strategy);

    let (input, path): (Box<dyn BufRead>, &str) = match args.input.as_deref() {
        None | Some("-") => (Box::new(io::stdin().lock()), "<stdin>"),
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("can not read input file '{}'", path))?;
            (Box::new(BufReader::new(file)), path)
        }
    };

    // The output file is only created once all prime implicants are known
    let mut buffer = Vec::new();
    let report = batch::run(input, path, &mut buffer, &config)?;

    match args.output.as_deref() {
        None | Some("-") => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&buffer)?;
            stdout.flush()?;
        }
        Some(path) => {
            let context = || format!("can not write output file '{}'", path);
            let mut file = BufWriter::new(File::create(path).with_context(context)?);
            file.write_all(&buffer).with_context(context)?;
            file.flush().with_context(context)?;
        }
    }
    info!(
        "{} prime implicants from {} minterms in {} rounds",
        report.primes,
        report.minterms,
        report.rounds.len()
    );
    Ok(())
}
