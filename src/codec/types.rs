// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Value types that cross the engine boundary.
//!
//! Every type here owns the encoding rule for its field: cells and configs
//! travel as base64, seeds as lowercase hex, large integers as decimal text.
//! Validation happens once, at construction, so an encoded request can never
//! carry a blob in the wrong encoding.

use crate::errors::{BridgeError, BridgeResult};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use primitive_types::U256;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

fn validate_base64(field: &str, value: &str) -> BridgeResult<()> {
    if value.is_empty() {
        return Err(BridgeError::InvalidArgument(format!(
            "{} must not be empty",
            field
        )));
    }
    STANDARD
        .decode(value)
        .map(|_| ())
        .map_err(|e| BridgeError::InvalidArgument(format!("{} is not valid base64: {}", field, e)))
}

/// Serialized blockchain configuration (base64 BOC).
///
/// Compared by value to decide whether a cached engine handle can be reused.
/// Cloning is cheap; the text is shared.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigBlob(Arc<str>);

impl ConfigBlob {
    pub fn new(value: impl Into<String>) -> BridgeResult<Self> {
        let value = value.into();
        validate_base64("config", &value)?;
        Ok(Self(Arc::from(value)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for ConfigBlob {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ConfigBlob {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        ConfigBlob::new(value).map_err(serde::de::Error::custom)
    }
}

/// A serialized cell tree (bag of cells) in base64.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Boc(String);

impl Boc {
    pub fn new(value: impl Into<String>) -> BridgeResult<Self> {
        let value = value.into();
        validate_base64("cell", &value)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for Boc {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Boc {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Boc::new(value).map_err(serde::de::Error::custom)
    }
}

/// Engine-side VM log detail level.
///
/// The symbolic names are what callers and option files use; the engine only
/// ever sees the ordinal. Each level includes everything below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verbosity {
    #[default]
    None,
    VmLogs,
    VmLogsLocation,
    VmLogsGas,
    VmLogsFull,
    VmLogsVerbose,
}

impl Verbosity {
    pub const fn ordinal(self) -> i32 {
        match self {
            Verbosity::None => 0,
            Verbosity::VmLogs => 1,
            Verbosity::VmLogsLocation => 2,
            Verbosity::VmLogsGas => 3,
            Verbosity::VmLogsFull => 4,
            Verbosity::VmLogsVerbose => 5,
        }
    }

    pub const fn from_ordinal(ordinal: i32) -> Option<Self> {
        match ordinal {
            0 => Some(Verbosity::None),
            1 => Some(Verbosity::VmLogs),
            2 => Some(Verbosity::VmLogsLocation),
            3 => Some(Verbosity::VmLogsGas),
            4 => Some(Verbosity::VmLogsFull),
            5 => Some(Verbosity::VmLogsVerbose),
            _ => None,
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Verbosity::None => "none",
            Verbosity::VmLogs => "vm_logs",
            Verbosity::VmLogsLocation => "vm_logs_location",
            Verbosity::VmLogsGas => "vm_logs_gas",
            Verbosity::VmLogsFull => "vm_logs_full",
            Verbosity::VmLogsVerbose => "vm_logs_verbose",
        };
        write!(f, "{}({})", name, self.ordinal())
    }
}

/// 32-byte random seed, hex on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RandSeed(pub [u8; 32]);

impl fmt::Display for RandSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl FromStr for RandSeed {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut seed = [0u8; 32];
        hex::decode_to_slice(s, &mut seed).map_err(|e| {
            BridgeError::InvalidArgument(format!("random seed must be 32 hex-encoded bytes: {}", e))
        })?;
        Ok(Self(seed))
    }
}

/// Unsigned currency amount wider than any native integer the engine accepts.
///
/// Always decimal text on the wire: `Display` and `FromStr` are both base 10,
/// unlike `U256`'s own `FromStr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(pub U256);

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Amount {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        U256::from_dec_str(s)
            .map(Amount)
            .map_err(|e| BridgeError::InvalidArgument(format!("invalid amount '{}': {:?}", s, e)))
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Amount(U256::from(value))
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Amount(U256::from(value))
    }
}

/// Checks a standard account address in raw (`wc:hex`) or user-friendly
/// (48 base64 characters) form.
pub fn validate_address(address: &str) -> BridgeResult<()> {
    let invalid = |reason: &str| {
        BridgeError::InvalidArgument(format!("invalid address '{}': {}", address, reason))
    };

    if let Some((workchain, account)) = address.split_once(':') {
        workchain
            .parse::<i32>()
            .map_err(|_| invalid("workchain is not an integer"))?;
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(account, &mut bytes)
            .map_err(|_| invalid("account id must be 64 hex characters"))?;
        return Ok(());
    }

    let well_formed = address.len() == 48
        && address
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'/' | b'-' | b'_'));
    if well_formed {
        Ok(())
    } else {
        Err(invalid("expected 'workchain:hex' or a 48-character friendly address"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_CELL: &str = "te6cckEBAQEAAgAAAEysuc0=";

    #[test]
    fn test_config_blob_rejects_non_base64() {
        assert!(ConfigBlob::new(EMPTY_CELL).is_ok());
        assert!(matches!(
            ConfigBlob::new("not base64!"),
            Err(BridgeError::InvalidArgument(_))
        ));
        assert!(ConfigBlob::new("").is_err());
    }

    #[test]
    fn test_config_blob_compares_by_value() {
        let a = ConfigBlob::new(EMPTY_CELL.to_string()).unwrap();
        let b = ConfigBlob::new(EMPTY_CELL).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_verbosity_ladder() {
        for ordinal in 0..=5 {
            let level = Verbosity::from_ordinal(ordinal).unwrap();
            assert_eq!(level.ordinal(), ordinal);
        }
        assert_eq!(Verbosity::from_ordinal(6), None);
        assert_eq!(Verbosity::default(), Verbosity::None);
    }

    #[test]
    fn test_verbosity_symbolic_names() {
        let level: Verbosity = serde_json::from_str("\"vm_logs_gas\"").unwrap();
        assert_eq!(level, Verbosity::VmLogsGas);
        assert_eq!(level.to_string(), "vm_logs_gas(3)");
    }

    #[test]
    fn test_rand_seed_is_lowercase_hex() {
        let seed = RandSeed([0xAB; 32]);
        let text = seed.to_string();
        assert_eq!(text.len(), 64);
        assert_eq!(text, "ab".repeat(32));
        assert_eq!(text.parse::<RandSeed>().unwrap(), seed);
        assert!("abcd".parse::<RandSeed>().is_err());
    }

    #[test]
    fn test_amount_is_decimal_beyond_u128() {
        let big = "340282366920938463463374607431768211456"; // 2^128
        let amount: Amount = big.parse().unwrap();
        assert_eq!(amount.to_string(), big);
        assert!("0x10".parse::<Amount>().is_err());
    }

    #[test]
    fn test_validate_address_forms() {
        let raw = format!("0:{}", "00".repeat(32));
        assert!(validate_address(&raw).is_ok());
        assert!(validate_address(&format!("-1:{}", "ff".repeat(32))).is_ok());
        assert!(validate_address("EQAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAM9c").is_ok());
        assert!(validate_address("0:abc").is_err());
        assert!(validate_address("").is_err());
    }
}
