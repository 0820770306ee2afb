
pub mod errors;

use crate::contracts::claim_set::wire_format::{ClaimSetSeed, WireClaims};
use crate::contracts::claim_set::{ClaimSet, GROUPS_KEY};
use crate::contracts::claims_codec::errors::{DecodeError, EncodeError};
use serde::de::DeserializeSeed;
use serde_json::Value;

/// Converts claim sets to and from JSON, reading and writing group membership
/// under a configurable claim name.
///
/// Identity providers publish group membership under their own keys (`ad_groups`, `memberOf`, ...).
/// The codec maps that key onto [`ClaimSet::groups`] when decoding and back when encoding.
/// With a custom name configured the literal `groups` key is neither read nor written.
///
/// The codec is immutable once built and can be shared between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimsCodec {
    groups_key: String,
}

impl ClaimsCodec {
    /// Creates a codec reading group membership from `custom_group_claim_name`.
    /// An empty name selects the canonical `groups` key.
    ///
    /// If the name matches another recognized claim (e.g. `email`), the group claim takes
    /// precedence for that key in both directions.
    pub fn new(custom_group_claim_name: impl Into<String>) -> Self {
        let custom_group_claim_name = custom_group_claim_name.into();
        let groups_key = if custom_group_claim_name.is_empty() {
            GROUPS_KEY.to_string()
        } else {
            custom_group_claim_name
        };
        Self { groups_key }
    }

    /// The wire key holding group membership.
    pub fn groups_key(&self) -> &str {
        &self.groups_key
    }

    pub fn decode(&self, data: &[u8]) -> Result<ClaimSet, DecodeError> {
        let mut deserializer = serde_json::Deserializer::from_slice(data);
        ClaimSetSeed::new(&self.groups_key)
            .deserialize(&mut deserializer)
            .and_then(|claims| deserializer.end().map(|_| claims))
            .map_err(|e| DecodeError::from_bytes(data, e))
    }

    pub fn decode_str(&self, data: &str) -> Result<ClaimSet, DecodeError> {
        self.decode(data.as_bytes())
    }

    /// Reads a claim set from an already parsed JSON document.
    pub fn decode_value(&self, value: Value) -> Result<ClaimSet, DecodeError> {
        let is_object = value.is_object();
        ClaimSetSeed::new(&self.groups_key).deserialize(value).map_err(|e| {
            if is_object {
                DecodeError::from_object(e)
            } else {
                DecodeError::Malformed(e)
            }
        })
    }

    pub fn encode(&self, claims: &ClaimSet) -> Result<Vec<u8>, EncodeError> {
        Ok(serde_json::to_vec(&WireClaims::new(claims, &self.groups_key))?)
    }

    pub fn encode_to_string(&self, claims: &ClaimSet) -> Result<String, EncodeError> {
        Ok(serde_json::to_string(&WireClaims::new(claims, &self.groups_key))?)
    }

    pub fn encode_to_value(&self, claims: &ClaimSet) -> Result<Value, EncodeError> {
        Ok(serde_json::to_value(WireClaims::new(claims, &self.groups_key))?)
    }
}

impl Default for ClaimsCodec {
    fn default() -> Self {
        Self::new(GROUPS_KEY)
    }
}
