//! `#[serde(with = "...")]` adapters storing integer fields as standard base62 strings.

pub mod base62_u64 {
    use crate::base62;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&base62::encode_u64(*value))
    }

    pub fn deserialize<'a, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'a>,
    {
        let string = String::deserialize(deserializer)?;
        base62::decode_u64(&string).map_err(de::Error::custom)
    }
}

pub mod base62_big {
    use crate::base62;
    use num_bigint::BigUint;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&base62::encode_big(value))
    }

    pub fn deserialize<'a, D>(deserializer: D) -> Result<BigUint, D::Error>
    where
        D: Deserializer<'a>,
    {
        let string = String::deserialize(deserializer)?;
        base62::decode_big(&string).map_err(de::Error::custom)
    }
}
