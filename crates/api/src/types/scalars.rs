//! GraphQL scalar type conversions to Rust/alloy types.
//!
//! The vaults subgraph encodes `BigInt` as decimal strings and `Int` as JSON
//! numbers, and some deployments disagree on which fields are which. The
//! `flex` deserializers accept either form.

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Deserializer, Serializer};
use std::str::FromStr;

/// Parse a GraphQL Address string into an alloy Address.
pub fn parse_address(s: &str) -> Option<Address> {
    Address::from_str(s).ok()
}

/// Parse a GraphQL BigInt string into a U256.
pub fn parse_bigint(s: &str) -> Option<U256> {
    U256::from_str(s).ok()
}

/// Lower-case `0x`-prefixed hex form of an address, as indexed by the subgraph.
pub fn lowercase_hex(address: &Address) -> String {
    address.to_string().to_lowercase()
}

/// A numeric scalar that arrived either as a JSON number or a string.
#[derive(Deserialize)]
#[serde(untagged)]
enum FlexScalar {
    Number(u64),
    Text(String),
}

impl FlexScalar {
    fn into_u256(self) -> Option<U256> {
        match self {
            FlexScalar::Number(n) => Some(U256::from(n)),
            FlexScalar::Text(s) => parse_bigint(s.trim()),
        }
    }

    fn into_u64(self) -> Option<u64> {
        match self {
            FlexScalar::Number(n) => Some(n),
            FlexScalar::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// Deserialize an address from GraphQL response.
pub fn deserialize_address<'de, D>(deserializer: D) -> Result<Address, D::Error>
where
    D: Deserializer<'de>,
{
    let s: String = String::deserialize(deserializer)?;
    parse_address(&s).ok_or_else(|| serde::de::Error::custom(format!("Invalid address: {}", s)))
}

/// Deserialize a `u64` sent as a number or a decimal string.
pub fn deserialize_flex_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = FlexScalar::deserialize(deserializer)?;
    raw.into_u64()
        .ok_or_else(|| serde::de::Error::custom("Invalid unsigned integer"))
}

/// Deserialize an optional `u64` sent as a number or a decimal string.
pub fn deserialize_optional_flex_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<FlexScalar> = Option::deserialize(deserializer)?;
    match raw {
        Some(value) => value
            .into_u64()
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom("Invalid unsigned integer")),
        None => Ok(None),
    }
}

/// Deserialize a BigInt sent as a number or a string into U256.
pub fn deserialize_flex_bigint<'de, D>(deserializer: D) -> Result<U256, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = FlexScalar::deserialize(deserializer)?;
    raw.into_u256()
        .ok_or_else(|| serde::de::Error::custom("Invalid BigInt"))
}

/// Serialize a U256 as a decimal string rather than alloy's default hex.
pub fn serialize_u256_decimal<S>(value: &U256, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(value)
}

/// Serialize an address in EIP-55 checksummed form.
pub fn serialize_checksummed<S>(address: &Address, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(address)
}

/// Serialize an optional address in EIP-55 checksummed form.
pub fn serialize_optional_checksummed<S>(
    address: &Option<Address>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match address {
        Some(address) => serializer.collect_str(address),
        None => serializer.serialize_none(),
    }
}
