use crate::base62::{alphabet, decode, encode};
use std::{error, fmt};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    Alphabet(alphabet::Error),
    Encode(encode::Error),
    Decode(decode::Error),
    MissingVariable(String),
    InvalidVariable { key: String, value: String },
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Alphabet(error) => Some(error),
            Error::Encode(error) => Some(error),
            Error::Decode(error) => Some(error),
            Error::MissingVariable(_) | Error::InvalidVariable { .. } => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Alphabet(error) => write!(f, "{}", error),
            Error::Encode(error) => write!(f, "{}", error),
            Error::Decode(error) => write!(f, "{}", error),
            Error::MissingVariable(key) => write!(f, "Missing {}", key),
            Error::InvalidVariable { key, value } => write!(f, "Invalid {} {}", key, value),
        }
    }
}

impl From<alphabet::Error> for Error {
    fn from(error: alphabet::Error) -> Self {
        Error::Alphabet(error)
    }
}

impl From<encode::Error> for Error {
    fn from(error: encode::Error) -> Self {
        Error::Encode(error)
    }
}

impl From<decode::Error> for Error {
    fn from(error: decode::Error) -> Self {
        Error::Decode(error)
    }
}
