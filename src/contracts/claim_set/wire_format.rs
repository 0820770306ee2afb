use crate::contracts::claim_set::audience::Audience;
use crate::contracts::claim_set::numeric_date::NumericDate;
use crate::contracts::claim_set::{
    AUDIENCE_KEY, ClaimSet, EMAIL_KEY, EMAIL_VERIFIED_KEY, EXPIRY_KEY, ID_KEY, ISSUED_AT_KEY, ISSUER_KEY,
    NOT_BEFORE_KEY, SERVICE_ACCOUNT_NAME_KEY, SUBJECT_KEY,
};
use serde::de::{DeserializeSeed, IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Formatter;

/// Writes a claim set with group membership under `groups_key`.
pub(crate) struct WireClaims<'a> {
    claims: &'a ClaimSet,
    groups_key: &'a str,
}

impl<'a> WireClaims<'a> {
    pub(crate) fn new(claims: &'a ClaimSet, groups_key: &'a str) -> Self {
        Self { claims, groups_key }
    }

    fn entries(&self) -> Vec<(&'a str, ClaimValue<'a>)> {
        let claims = self.claims;
        let mut entries = Vec::with_capacity(11);

        if !claims.issuer.is_empty() {
            entries.push((ISSUER_KEY, ClaimValue::Text(&claims.issuer)));
        }
        if !claims.subject.is_empty() {
            entries.push((SUBJECT_KEY, ClaimValue::Text(&claims.subject)));
        }
        if !claims.audience.is_empty() {
            entries.push((AUDIENCE_KEY, ClaimValue::Audience(&claims.audience)));
        }
        if let Some(expiry) = claims.expiry {
            entries.push((EXPIRY_KEY, ClaimValue::Date(expiry)));
        }
        if let Some(not_before) = claims.not_before {
            entries.push((NOT_BEFORE_KEY, ClaimValue::Date(not_before)));
        }
        if let Some(issued_at) = claims.issued_at {
            entries.push((ISSUED_AT_KEY, ClaimValue::Date(issued_at)));
        }
        if !claims.id.is_empty() {
            entries.push((ID_KEY, ClaimValue::Text(&claims.id)));
        }
        if !claims.email.is_empty() {
            entries.push((EMAIL_KEY, ClaimValue::Text(&claims.email)));
        }
        if claims.email_verified {
            entries.push((EMAIL_VERIFIED_KEY, ClaimValue::Flag(true)));
        }
        if !claims.service_account_name.is_empty() {
            entries.push((SERVICE_ACCOUNT_NAME_KEY, ClaimValue::Text(&claims.service_account_name)));
        }

        // The group claim shadows any other claim configured under the same key
        entries.retain(|(key, _)| *key != self.groups_key);
        if !claims.groups.is_empty() {
            entries.push((self.groups_key, ClaimValue::List(&claims.groups)));
        }

        entries.sort_by(|(left, _), (right, _)| left.cmp(right));
        entries
    }
}

impl Serialize for WireClaims<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let entries = self.entries();
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (key, value) in &entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

enum ClaimValue<'a> {
    Text(&'a str),
    List(&'a [String]),
    Audience(&'a Audience),
    Date(NumericDate),
    Flag(bool),
}

impl Serialize for ClaimValue<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ClaimValue::Text(value) => serializer.serialize_str(value),
            ClaimValue::List(values) => serializer.collect_seq(values.iter()),
            ClaimValue::Audience(audience) => audience.serialize(serializer),
            ClaimValue::Date(date) => date.serialize(serializer),
            ClaimValue::Flag(value) => serializer.serialize_bool(*value),
        }
    }
}

/// Reads a claim set, taking group membership from `groups_key`.
///
/// Unknown claims are skipped, `null` and absent claims both leave the field at its zero value.
pub(crate) struct ClaimSetSeed<'a> {
    groups_key: &'a str,
}

impl<'a> ClaimSetSeed<'a> {
    pub(crate) fn new(groups_key: &'a str) -> Self {
        Self { groups_key }
    }
}

impl<'de> DeserializeSeed<'de> for ClaimSetSeed<'_> {
    type Value = ClaimSet;

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(self)
    }
}

impl<'de> Visitor<'de> for ClaimSetSeed<'_> {
    type Value = ClaimSet;

    fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
        formatter.write_str("a JSON object holding token claims")
    }

    fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut claims = ClaimSet::default();

        while let Some(key) = map.next_key::<String>()? {
            if key == self.groups_key {
                claims.groups = next_or_default(&mut map)?;
                continue;
            }
            match key.as_str() {
                ISSUER_KEY => claims.issuer = next_or_default(&mut map)?,
                SUBJECT_KEY => claims.subject = next_or_default(&mut map)?,
                AUDIENCE_KEY => claims.audience = next_or_default(&mut map)?,
                EXPIRY_KEY => claims.expiry = map.next_value()?,
                NOT_BEFORE_KEY => claims.not_before = map.next_value()?,
                ISSUED_AT_KEY => claims.issued_at = map.next_value()?,
                ID_KEY => claims.id = next_or_default(&mut map)?,
                EMAIL_KEY => claims.email = next_or_default(&mut map)?,
                EMAIL_VERIFIED_KEY => claims.email_verified = next_or_default(&mut map)?,
                SERVICE_ACCOUNT_NAME_KEY => claims.service_account_name = next_or_default(&mut map)?,
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(claims)
    }
}

fn next_or_default<'de, M, T>(map: &mut M) -> Result<T, M::Error>
where
    M: MapAccess<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(map.next_value::<Option<T>>()?.unwrap_or_default())
}
