use crate::base62::{Encoding, ALPHABET};
use crate::error::Error;
use std::{env, error};
use tracing::debug;

/// Base62 settings read from the environment.
///
/// `BASE62_ALPHABET` replaces the standard alphabet and `BASE62_PADDING` sets
/// the minimum width of encoded strings. Both are optional.
#[derive(Debug, Clone)]
pub struct Configuration {
    alphabet: String,
    padding: usize,
    encoding: Encoding,
}

fn var(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: Option<String>) -> Result<String, Error> {
    match lookup(key) {
        Some(value) => Ok(value),
        None => default.ok_or_else(|| Error::MissingVariable(key.to_string())),
    }
}

fn var_map<T, E: error::Error>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    mut f: impl FnMut(&str) -> Result<T, E>,
    default: Option<T>,
) -> Result<T, Error> {
    match var(lookup, key, None) {
        Ok(value) => f(&value).map_err(|_| Error::InvalidVariable {
            key: key.to_string(),
            value,
        }),
        Err(err) => default.ok_or(err),
    }
}

impl Configuration {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let alphabet = var(&lookup, "BASE62_ALPHABET", Some(ALPHABET.to_string()))?;
        let padding = var_map(&lookup, "BASE62_PADDING", |padding| padding.parse(), Some(0))?;
        let encoding = Encoding::with_alphabet(&alphabet)?.with_padding(padding);
        debug!(%alphabet, padding, "loaded base62 configuration");
        Ok(Self {
            alphabet,
            padding,
            encoding,
        })
    }

    pub fn alphabet(&self) -> &str {
        &self.alphabet
    }

    pub fn padding(&self) -> usize {
        self.padding
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }
}
