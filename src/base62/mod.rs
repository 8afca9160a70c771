pub mod decode;
pub mod encode;
pub mod radix;

pub use crate::base_common::{alphabet, Alphabet};
pub use radix::Radix;

pub use decode::{decode_big, decode_i64, decode_u128, decode_u32, decode_u64, must_decode_big, must_decode_i64, must_decode_u64};
pub use encode::{encode_big, encode_i64, encode_u128, encode_u32, encode_u64, encode_u64_into};

pub const ALPHABET: Alphabet<62> = match Alphabet::new(b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

pub const STANDARD: Encoding = Encoding::new(ALPHABET);

/// A base62 alphabet together with a minimum output width.
///
/// Options never mutate an `Encoding` in place: `with_padding` hands back a
/// new value, so a shared instance always encodes the same way.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Encoding {
    alphabet: Alphabet<62>,
    padding: usize,
}

impl Encoding {
    pub const fn new(alphabet: Alphabet<62>) -> Self {
        Self { alphabet, padding: 0 }
    }

    pub fn with_alphabet(characters: &str) -> Result<Self, alphabet::Error> {
        Ok(Self::new(characters.parse()?))
    }

    /// Encoded strings shorter than `padding` are left padded with the zero digit.
    pub const fn with_padding(self, padding: usize) -> Self {
        Self { padding, ..self }
    }

    pub const fn alphabet(&self) -> &Alphabet<62> {
        &self.alphabet
    }

    pub const fn padding(&self) -> usize {
        self.padding
    }

    pub fn standard() -> &'static Self {
        &STANDARD
    }
}

impl Default for Encoding {
    fn default() -> Self {
        STANDARD
    }
}
