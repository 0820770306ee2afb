#[cfg(test)]
mod tests;

pub mod audience;
pub mod claim_set_builder;
pub mod numeric_date;
pub(crate) mod wire_format;

use crate::contracts::claim_set::audience::Audience;
use crate::contracts::claim_set::claim_set_builder::ClaimSetBuilder;
use crate::contracts::claim_set::numeric_date::NumericDate;
use crate::contracts::claim_set::wire_format::{ClaimSetSeed, WireClaims};
use serde::de::DeserializeSeed;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub(crate) const ISSUER_KEY: &str = "iss";
pub(crate) const SUBJECT_KEY: &str = "sub";
pub(crate) const AUDIENCE_KEY: &str = "aud";
pub(crate) const EXPIRY_KEY: &str = "exp";
pub(crate) const NOT_BEFORE_KEY: &str = "nbf";
pub(crate) const ISSUED_AT_KEY: &str = "iat";
pub(crate) const ID_KEY: &str = "jti";
pub(crate) const EMAIL_KEY: &str = "email";
pub(crate) const EMAIL_VERIFIED_KEY: &str = "email_verified";
pub(crate) const SERVICE_ACCOUNT_NAME_KEY: &str = "service_account_name";

/// The canonical wire key of the group membership claim.
pub const GROUPS_KEY: &str = "groups";

/// Every claim key the claim set understands, except the group membership claim.
pub(crate) const RECOGNIZED_KEYS: [&str; 10] = [
    ISSUER_KEY,
    SUBJECT_KEY,
    AUDIENCE_KEY,
    EXPIRY_KEY,
    NOT_BEFORE_KEY,
    ISSUED_AT_KEY,
    ID_KEY,
    EMAIL_KEY,
    EMAIL_VERIFIED_KEY,
    SERVICE_ACCOUNT_NAME_KEY,
];

/// The canonical representation of a token payload.
///
/// Only the fields below survive a decode/encode round trip, any other claim found
/// in the input is dropped. Fields holding their zero value are omitted from the wire form.
///
/// The `Serialize` and `Deserialize` implementations use the literal `groups` key.
/// Use [`crate::contracts::claims_codec::ClaimsCodec`] to read or write group membership
/// under a provider specific key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimSet {
    pub issuer: String,
    pub subject: String,
    pub audience: Audience,
    pub expiry: Option<NumericDate>,
    pub not_before: Option<NumericDate>,
    pub issued_at: Option<NumericDate>,
    pub id: String,
    pub groups: Vec<String>,
    pub email: String,
    pub email_verified: bool,
    pub service_account_name: String,
}

impl ClaimSet {
    pub fn builder() -> ClaimSetBuilder {
        ClaimSetBuilder::new()
    }
}

impl Serialize for ClaimSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        WireClaims::new(self, GROUPS_KEY).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ClaimSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        ClaimSetSeed::new(GROUPS_KEY).deserialize(deserializer)
    }
}
