use std::{error, fmt, str::FromStr};
use tracing::debug;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    DuplicateCharacter { character: char, first: usize, second: usize },
    NonAsciiCharacter { character: char, index: usize },
    InvalidLength { length: usize, expected: usize },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DecodeError {
    InvalidCharacter { character: char, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateCharacter { character, first, second } => {
                write!(f, "Duplicate character '{}' at indexes {} and {}", character, first, second)
            }
            Self::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:?} at index {}", character, index),
            Self::InvalidLength { length, expected } => {
                write!(f, "Alphabet has {} characters ({} expected)", length, expected)
            }
        }
    }
}

impl error::Error for DecodeError {}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
        }
    }
}

/// Bidirectional mapping between digit values and ascii glyphs.
///
/// The glyph at index 0 is the zero digit.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Alphabet<const N: usize> {
    encode: [u8; N],
    decode: [Option<u8>; 128],
}

impl<const N: usize> Alphabet<N> {
    pub fn encode(&self, value: usize) -> u8 {
        self.encode[value]
    }

    pub fn decode(&self, character: char, index: usize) -> Result<u8, DecodeError> {
        let value = if character.is_ascii() { self.decode[character as usize] } else { None };
        value.ok_or(DecodeError::InvalidCharacter { character, index })
    }

    pub fn zero(&self) -> u8 {
        self.encode[0]
    }

    pub const fn new(characters: &[u8; N]) -> Result<Self, Error> {
        let mut encode = [0u8; N];
        let mut decode: [Option<u8>; 128] = [None; 128];

        let mut index = 0;
        while index < encode.len() {
            let character = characters[index];
            if character >= 128 {
                return Err(Error::NonAsciiCharacter {
                    character: character as char,
                    index,
                });
            }
            if let Some(v) = decode[character as usize] {
                return Err(Error::DuplicateCharacter {
                    character: character as char,
                    first: v as usize,
                    second: index,
                });
            }
            encode[index] = character;
            decode[character as usize] = Some(index as u8);
            index += 1;
        }

        Ok(Self { encode, decode })
    }

    pub const fn len(&self) -> usize {
        self.encode.len()
    }

    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.encode).unwrap_or_default()
    }
}

impl<const N: usize> FromStr for Alphabet<N> {
    type Err = Error;

    fn from_str(characters: &str) -> Result<Self, Error> {
        let length = characters.chars().count();
        if length != N {
            debug!(length, expected = N, "rejecting alphabet");
            return Err(Error::InvalidLength { length, expected: N });
        }
        let mut buffer = [0u8; N];
        for (index, (slot, character)) in buffer.iter_mut().zip(characters.chars()).enumerate() {
            if !character.is_ascii() {
                debug!(?character, index, "rejecting alphabet");
                return Err(Error::NonAsciiCharacter { character, index });
            }
            *slot = character as u8;
        }
        Self::new(&buffer).map_err(|error| {
            debug!(%error, "rejecting alphabet");
            error
        })
    }
}

impl<const N: usize> fmt::Display for Alphabet<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
