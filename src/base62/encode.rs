use super::{radix, Encoding, Radix, STANDARD};
use num_bigint::BigUint;
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// Only non-negative values have a base62 encoding.
    NegativeValue { value: i64 },
    /// The output buffer was too small to contain the entire encoding.
    BufferTooSmall,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NegativeValue { value } => write!(f, "Cannot encode negative value {}", value),
            Error::BufferTooSmall => write!(f, "Output buffer too small"),
        }
    }
}

impl Encoding {
    /// Glyphs of `value` in output order, padded to the minimum width.
    fn glyphs<T: Radix>(&self, value: &T) -> Vec<u8> {
        let mut output = radix::digits(value);
        for digit in &mut output {
            *digit = self.alphabet().encode(*digit as usize);
        }
        if output.len() < self.padding() {
            output.resize(self.padding(), self.alphabet().zero());
        }
        output.reverse();
        output
    }

    pub fn encode<T: Radix>(&self, value: &T) -> String {
        self.glyphs(value).into_iter().map(char::from).collect()
    }

    pub fn encode_into<T: Radix>(&self, value: &T, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let glyphs = self.glyphs(value);
        let output = output.as_mut().get_mut(..glyphs.len()).ok_or(Error::BufferTooSmall)?;
        output.copy_from_slice(&glyphs);
        Ok(glyphs.len())
    }

    pub fn encode_i64(&self, value: i64) -> Result<String, Error> {
        let value = u64::try_from(value).map_err(|_| Error::NegativeValue { value })?;
        Ok(self.encode(&value))
    }

    pub fn encode_u32(&self, value: u32) -> String {
        self.encode(&value)
    }

    pub fn encode_u64(&self, value: u64) -> String {
        self.encode(&value)
    }

    pub fn encode_u128(&self, value: u128) -> String {
        self.encode(&value)
    }

    pub fn encode_u64_into(&self, value: u64, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        self.encode_into(&value, output)
    }

    pub fn encode_big(&self, value: &BigUint) -> String {
        self.encode(value)
    }
}

pub fn encode_i64(value: i64) -> Result<String, Error> {
    STANDARD.encode_i64(value)
}

pub fn encode_u32(value: u32) -> String {
    STANDARD.encode_u32(value)
}

pub fn encode_u64(value: u64) -> String {
    STANDARD.encode_u64(value)
}

pub fn encode_u128(value: u128) -> String {
    STANDARD.encode_u128(value)
}

pub fn encode_u64_into(value: u64, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    STANDARD.encode_u64_into(value, output)
}

pub fn encode_big(value: &BigUint) -> String {
    STANDARD.encode_big(value)
}
