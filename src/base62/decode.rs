use super::{alphabet, Encoding, Radix, STANDARD};
use num_bigint::BigUint;
use std::{error, fmt};
use tracing::trace;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// `index` is the byte offset of `character` in the input.
    InvalidCharacter { character: char, index: usize },
    /// The decoded value does not fit the requested integer type.
    Overflow,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
            Error::Overflow => write!(f, "Decoded value overflows the target integer type"),
        }
    }
}

impl From<alphabet::DecodeError> for Error {
    fn from(error: alphabet::DecodeError) -> Self {
        match error {
            alphabet::DecodeError::InvalidCharacter { character, index } => Error::InvalidCharacter { character, index },
        }
    }
}

impl Encoding {
    pub fn decode<T: Radix>(&self, input: &str) -> Result<T, Error> {
        let mut value = T::zero();
        for (index, character) in input.char_indices() {
            let digit = self.alphabet().decode(character, index).map_err(|error| {
                trace!(%error, input, "base62 decode failed");
                Error::from(error)
            })?;
            value = value.mul_add_base(digit).ok_or_else(|| {
                trace!(input, index, "base62 decode overflowed");
                Error::Overflow
            })?;
        }
        Ok(value)
    }

    pub fn decode_i64(&self, input: &str) -> Result<i64, Error> {
        let value: u64 = self.decode(input)?;
        i64::try_from(value).map_err(|_| {
            trace!(input, value, "base62 decode overflowed i64");
            Error::Overflow
        })
    }

    pub fn decode_u32(&self, input: &str) -> Result<u32, Error> {
        self.decode(input)
    }

    pub fn decode_u64(&self, input: &str) -> Result<u64, Error> {
        self.decode(input)
    }

    pub fn decode_u128(&self, input: &str) -> Result<u128, Error> {
        self.decode(input)
    }

    pub fn decode_big(&self, input: &str) -> Result<BigUint, Error> {
        self.decode(input)
    }

    /// Like [`Encoding::decode_i64`], for input already known to be valid.
    ///
    /// # Panics
    ///
    /// Panics if `input` contains a character outside the alphabet or
    /// overflows an `i64`.
    pub fn must_decode_i64(&self, input: &str) -> i64 {
        match self.decode_i64(input) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }

    pub fn must_decode_u64(&self, input: &str) -> u64 {
        match self.decode_u64(input) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }

    pub fn must_decode_big(&self, input: &str) -> BigUint {
        match self.decode_big(input) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

pub fn decode_i64(input: &str) -> Result<i64, Error> {
    STANDARD.decode_i64(input)
}

pub fn decode_u32(input: &str) -> Result<u32, Error> {
    STANDARD.decode_u32(input)
}

pub fn decode_u64(input: &str) -> Result<u64, Error> {
    STANDARD.decode_u64(input)
}

pub fn decode_u128(input: &str) -> Result<u128, Error> {
    STANDARD.decode_u128(input)
}

pub fn decode_big(input: &str) -> Result<BigUint, Error> {
    STANDARD.decode_big(input)
}

pub fn must_decode_i64(input: &str) -> i64 {
    STANDARD.must_decode_i64(input)
}

pub fn must_decode_u64(input: &str) -> u64 {
    STANDARD.must_decode_u64(input)
}

pub fn must_decode_big(input: &str) -> BigUint {
    STANDARD.must_decode_big(input)
}

#[cfg(test)]
mod tests {
    use super::Error;
    use crate::base62::{Encoding, STANDARD};
    use num_bigint::BigUint;

    #[test]
    fn decode_i64() {
        assert_eq!(super::decode_i64(""), Ok(0));
        assert_eq!(super::decode_i64("0"), Ok(0));
        assert_eq!(super::decode_i64("z"), Ok(61));
        assert_eq!(super::decode_i64("10"), Ok(62));
        assert_eq!(super::decode_i64("3D7"), Ok(12345));
        assert_eq!(super::decode_i64("0003D7"), Ok(12345));
        assert_eq!(super::decode_i64("AzL8n0Y58m7"), Ok(i64::MAX));
    }

    #[test]
    fn decode_i64_overflow() {
        assert_eq!(super::decode_i64("AzL8n0Y58m8"), Err(Error::Overflow));
        assert_eq!(super::decode_i64("LygHa16AHYF"), Err(Error::Overflow));
        assert_eq!(super::decode_i64("LygHa16AHYG"), Err(Error::Overflow));
        assert_eq!(super::decode_i64(&"z".repeat(40)), Err(Error::Overflow));
    }

    #[test]
    fn decode_unsigned() {
        assert_eq!(super::decode_u32("4gfFC3"), Ok(u32::MAX));
        assert_eq!(super::decode_u32("4gfFC4"), Err(Error::Overflow));
        assert_eq!(super::decode_u64("LygHa16AHYF"), Ok(u64::MAX));
        assert_eq!(super::decode_u64("LygHa16AHYG"), Err(Error::Overflow));
        assert_eq!(super::decode_u128("7n42DGM5Tflk9n8mt7Fhc7"), Ok(u128::MAX));
        assert_eq!(super::decode_u128("7n42DGM5Tflk9n8mt7Fhc8"), Err(Error::Overflow));
    }

    #[test]
    fn decode_big() {
        assert_eq!(super::decode_big(""), Ok(BigUint::from(0u8)));
        assert_eq!(super::decode_big("3D7"), Ok(BigUint::from(12345u32)));
        assert_eq!(
            super::decode_big(&format!("1{}", "0".repeat(20))),
            Ok(BigUint::from(62u8).pow(20u32))
        );
        assert_eq!(super::decode_big("KyXecRaPqzvjQ8BcW"), Ok(BigUint::from(10u8).pow(30u32)));
        assert_eq!(
            super::decode_big("7n42DGM5Tflk9n8mt7Fhc8"),
            Ok(BigUint::from(u128::MAX) + 1u32)
        );
    }

    #[test]
    fn decode_invalid_character() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
        let error = Error::InvalidCharacter { character: '!', index: 2 };
        assert_eq!(super::decode_i64("1A!2"), Err(error));
        assert_eq!(super::decode_big("1A!2"), Err(error));
        assert_eq!(error.to_string(), "Invalid character '!' at index 2");
        assert_eq!(
            super::decode_u64("-1"),
            Err(Error::InvalidCharacter { character: '-', index: 0 })
        );
        assert_eq!(
            super::decode_u64("12é"),
            Err(Error::InvalidCharacter { character: 'é', index: 2 })
        );
    }

    #[test]
    fn decode_with_custom_alphabet() {
        let encoding = Encoding::with_alphabet("abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789").unwrap();
        assert_eq!(encoding.decode_i64("bb"), Ok(63));
        assert_eq!(encoding.decode_i64("aabb"), Ok(63));
        assert_eq!(
            encoding.decode_i64("b-"),
            Err(Error::InvalidCharacter { character: '-', index: 1 })
        );
    }

    #[test]
    fn must_decode() {
        assert_eq!(super::must_decode_i64("3D7"), 12345);
        assert_eq!(super::must_decode_u64("LygHa16AHYF"), u64::MAX);
        assert_eq!(super::must_decode_big("10"), BigUint::from(62u8));
        assert_eq!(STANDARD.with_padding(5).must_decode_i64("00010"), 62);
    }

    #[test]
    #[should_panic(expected = "Invalid character '!' at index 2")]
    fn must_decode_panics_on_invalid_character() {
        super::must_decode_i64("1A!2");
    }

    #[test]
    #[should_panic(expected = "overflows")]
    fn must_decode_panics_on_overflow() {
        super::must_decode_i64("AzL8n0Y58m8");
    }

    #[test]
    fn round_trip() {
        let values = [0u64, 1, 61, 62, 63, 3843, 3844, 12345, 1 << 32, (1 << 62) + 7, i64::MAX as u64];
        for padding in [0, 1, 5, 11, 20] {
            let encoding = STANDARD.with_padding(padding);
            for &value in &values {
                let signed = value as i64;
                let encoded = encoding.encode_i64(signed).unwrap();
                assert_eq!(encoding.decode_i64(&encoded), Ok(signed));
                let big = BigUint::from(value);
                let encoded_big = encoding.encode_big(&big);
                assert_eq!(encoded_big, encoded);
                assert_eq!(encoding.decode_big(&encoded_big), Ok(big));
            }
        }
        for exponent in [64u32, 100, 200, 500] {
            let value = BigUint::from(3u8).pow(exponent) + 17u32;
            assert_eq!(STANDARD.decode_big(&STANDARD.encode_big(&value)), Ok(value));
        }
    }

    #[test]
    fn fixed_and_big_agree() {
        for input in ["", "0", "z", "10", "3D7", "zzzzzz", "AzL8n0Y58m7", "000abc"] {
            let fixed = super::decode_i64(input).unwrap();
            let big = super::decode_big(input).unwrap();
            assert_eq!(BigUint::from(fixed as u64), big);
        }
    }
}
