//! Options of a batch run.

use crate::{QuiennyError, Strategy};
use std::fmt;
use std::str::FromStr;

/// Storage used for the bit-vectors of the monomials
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Representation {
    /// Packed in a 64 bits integer ([PackedBits](crate::PackedBits)), limited to 64 variables
    #[default]
    Packed,
    /// Bit-set without size limit ([GrowableBits](crate::GrowableBits))
    Growable,
}

/// Configuration of a batch run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub representation: Representation,
    pub strategy: Strategy,
}

impl Config {
    pub fn new(representation: Representation, strategy: Strategy) -> Self {
        Self {
            representation,
            strategy,
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Representation::Packed => write!(f, "packed"),
            Representation::Growable => write!(f, "growable"),
        }
    }
}

impl FromStr for Representation {
    type Err = QuiennyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "packed" | "fixed" => Ok(Representation::Packed),
            "growable" | "bitset" => Ok(Representation::Growable),
            _ => Err(QuiennyError::InvalidOption("representation", s.to_string())),
        }
    }
}
