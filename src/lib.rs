//! Base62 encoding between integers and strings over a 62-character alphabet.
//!
//! ```
//! use base62_ids::base62;
//!
//! assert_eq!(base62::encode_u64(12345), "3D7");
//! assert_eq!(base62::decode_i64("10"), Ok(62));
//! assert_eq!(base62::STANDARD.with_padding(6).encode_u64(62), "000010");
//! ```

pub mod base62;
pub mod base_common;
pub mod configuration;
pub mod error;
pub mod id;
pub mod serde_helpers;

pub use self::{
    base62::{Encoding, Radix, STANDARD},
    base_common::Alphabet,
    configuration::Configuration,
    error::Error,
    id::Id,
};
