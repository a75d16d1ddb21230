use std::io;
use thiserror::Error;

/// Errors raised while reading, building or writing polynomials.
#[derive(Error, Debug)]
pub enum QuiennyError {
    /// Malformed input text
    #[error("parse error: at line {line} in '{path}': {kind}")]
    Parse {
        path: String,
        line: usize,
        kind: ParseError,
    },

    /// The fixed-width representation can not hold this many variables
    #[error("{width} variables exceed the capacity of {capacity} bits")]
    CapacityExceeded { width: usize, capacity: usize },

    /// Monomials of different widths can not live in the same polynomial
    #[error("expected a monomial over {expected} variables, found {found}")]
    WidthMismatch { expected: usize, found: usize },

    /// The description of a monomial is invalid
    #[error("'{0}' is not a valid monomial")]
    InvalidMonomial(String),

    /// Unknown configuration value
    #[error("unknown {0} '{1}'")]
    InvalidOption(&'static str, String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Reason for rejecting a line of input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected '0' or '1' or new-line")]
    FirstLine,

    #[error("expected '0' or '1'")]
    Digit,

    #[error("expected new-line")]
    NewLine,

    #[error("more than {capacity} variables")]
    Capacity { capacity: usize },
}
