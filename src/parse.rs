//! Read truth tables given as lines of `0` and `1`.

use crate::bits::BitField;
use crate::error::ParseError;
use crate::{Monomial, Polynomial, QuiennyError};

use log::debug;
use std::io::{BufRead, Bytes, Read};

/// Strict reader for lists of minterms.
///
/// Each line contains exactly one character (`0` or `1`) per variable and is terminated by a new-line.
/// The number of variables is given by the length of the first line, all following lines must have the same length.
/// An empty input denotes the constant false function.
pub struct MintermReader<R> {
    bytes: Bytes<R>,
    path: String,
    line: usize,
}

impl<R: BufRead> MintermReader<R> {
    /// Create a reader, the path is only used to report errors
    pub fn new(input: R, path: &str) -> Self {
        Self {
            bytes: input.bytes(),
            path: path.to_string(),
            line: 1,
        }
    }

    fn next_byte(&mut self) -> Result<Option<u8>, QuiennyError> {
        Ok(self.bytes.next().transpose()?)
    }

    fn error(&self, kind: ParseError) -> QuiennyError {
        QuiennyError::Parse {
            path: self.path.clone(),
            line: self.line,
            kind,
        }
    }

    /// Read the first line, which defines the number of variables.
    ///
    /// Returns `None` at the end of the input.
    fn first<B: BitField>(&mut self) -> Result<Option<Vec<bool>>, QuiennyError> {
        let mut ch = match self.next_byte()? {
            None => return Ok(None),
            Some(ch) => ch,
        };
        let mut bits = Vec::new();
        while ch != b'\n' {
            let value = match ch {
                b'0' => false,
                b'1' => true,
                _ => return Err(self.error(ParseError::FirstLine)),
            };
            if let Some(capacity) = B::CAPACITY {
                if bits.len() == capacity {
                    return Err(self.error(ParseError::Capacity { capacity }));
                }
            }
            bits.push(value);
            ch = match self.next_byte()? {
                None => return Err(self.error(ParseError::FirstLine)),
                Some(ch) => ch,
            };
        }
        self.line += 1;
        Ok(Some(bits))
    }

    /// Read a following line into the buffer, of the same width as the first line.
    ///
    /// Returns `false` at the end of the input.
    fn next_row(&mut self, bits: &mut [bool]) -> Result<bool, QuiennyError> {
        let mut ch = self.next_byte()?;
        if ch.is_none() {
            return Ok(false);
        }
        for b in bits.iter_mut() {
            *b = match ch {
                Some(b'0') => false,
                Some(b'1') => true,
                _ => return Err(self.error(ParseError::Digit)),
            };
            ch = self.next_byte()?;
        }
        if ch != Some(b'\n') {
            return Err(self.error(ParseError::NewLine));
        }
        self.line += 1;
        Ok(true)
    }

    /// Read all lines into a normalized polynomial.
    ///
    /// Duplicate lines collapse into a single monomial.
    pub fn read<B: BitField>(mut self) -> Result<Polynomial<B>, QuiennyError> {
        let mut bits = match self.first::<B>()? {
            None => {
                debug!("empty input in '{}'", self.path);
                return Ok(Polynomial::new());
            }
            Some(bits) => bits,
        };

        let mut result = Polynomial::with_width(bits.len());
        result.push(Monomial::from_bits(&bits)?)?;
        while self.next_row(&mut bits)? {
            result.push(Monomial::from_bits(&bits)?)?;
        }

        let rows = result.len();
        result.normalize();
        debug!(
            "read {} rows over {} variables from '{}', {} distinct",
            rows,
            bits.len(),
            self.path,
            result.len()
        );
        Ok(result)
    }
}

impl<B: BitField> Polynomial<B> {
    /// Parse a list of minterms, see [MintermReader].
    pub fn read_minterms<R: BufRead>(input: R, path: &str) -> Result<Self, QuiennyError> {
        MintermReader::new(input, path).read()
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ParseError;
    use crate::*;

    fn read(s: &str) -> Result<Polynomial, QuiennyError> {
        Polynomial::read_minterms(s.as_bytes(), "<test>")
    }

    fn parse_error(s: &str) -> (usize, ParseError) {
        match read(s) {
            Err(QuiennyError::Parse { line, kind, .. }) => (line, kind),
            r => panic!("expected a parse error, got {:?}", r),
        }
    }

    #[test]
    fn read_rows() -> Result<(), QuiennyError> {
        let p = read("01\n11\n00\n01\n")?;
        assert_eq!(p.width(), Some(2));
        assert_eq!(p.to_string(), "00\n01\n11\n");

        let p = read("")?;
        assert!(p.is_empty());
        assert_eq!(p.width(), None);

        let p = read("\n\n")?;
        assert_eq!(p.width(), Some(0));
        assert_eq!(p.len(), 1);
        Ok(())
    }

    #[test]
    fn malformed_rows() {
        assert_eq!(parse_error("0x1\n"), (1, ParseError::FirstLine));
        assert_eq!(parse_error("01"), (1, ParseError::FirstLine));
        assert_eq!(parse_error("01\n10\n1\n"), (3, ParseError::Digit));
        assert_eq!(parse_error("01\n10\n100\n"), (3, ParseError::NewLine));
        assert_eq!(parse_error("01\n10"), (2, ParseError::NewLine));
        assert_eq!(parse_error("01\n1-\n"), (2, ParseError::Digit));
    }

    #[test]
    fn capacity() {
        let wide = format!("{}\n", "01".repeat(40));
        assert_eq!(parse_error(&wide), (1, ParseError::Capacity { capacity: 64 }));

        let p = Polynomial::<GrowableBits>::read_minterms(wide.as_bytes(), "<test>").unwrap();
        assert_eq!(p.width(), Some(80));
    }

    #[test]
    fn error_message() {
        let err = read("01\n0\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "parse error: at line 2 in '<test>': expected '0' or '1'"
        );
    }
}
