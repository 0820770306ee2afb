use super::ClaimSet;
use crate::contracts::claim_set::audience::Audience;
use crate::contracts::claim_set::numeric_date::NumericDate;
use crate::testing::claims_codec_context::{AD_GROUPS, full_claims, identity_provider_claims, identity_provider_payload};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::time::{Duration, UNIX_EPOCH};

#[test]
fn test_deserialize_uses_literal_groups_claim() {
    let claims: ClaimSet = serde_json::from_str(&identity_provider_payload("groups")).unwrap();
    assert_eq!(claims, identity_provider_claims());

    let claims: ClaimSet = serde_json::from_str(&identity_provider_payload(AD_GROUPS)).unwrap();
    assert!(claims.groups.is_empty());
}

#[test]
fn test_serialize_uses_literal_groups_claim() {
    let value = serde_json::to_value(full_claims()).unwrap();
    assert_eq!(value["groups"], json!(["admins", "readers"]));
    assert!(value.get(AD_GROUPS).is_none());
}

#[test]
fn test_nested_claim_set() {
    #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
    struct Session {
        claims: ClaimSet,
    }

    let session = Session { claims: full_claims() };
    let data = serde_json::to_string(&session).unwrap();
    assert_eq!(serde_json::from_str::<Session>(&data).unwrap(), session);
}

#[test]
fn test_audience_from_single_string() {
    let claims: ClaimSet = serde_json::from_value(json!({ "aud": "api" })).unwrap();
    assert_eq!(claims.audience, Audience::from("api"));
    assert_eq!(serde_json::to_value(&claims.audience).unwrap(), json!(["api"]));
}

#[test]
fn test_audience_from_array() {
    let audience: Audience = serde_json::from_value(json!(["api", "ui"])).unwrap();
    assert_eq!(audience.len(), 2);
    assert!(audience.contains("ui"));
    assert!(!audience.contains("admin"));
    assert_eq!(audience.iter().collect::<Vec<_>>(), vec!["api", "ui"]);
}

#[test]
fn test_audience_rejects_other_types() {
    assert!(serde_json::from_value::<Audience>(json!(42)).is_err());
    assert!(serde_json::from_value::<Audience>(json!([42])).is_err());
    assert!(serde_json::from_value::<Audience>(json!({ "aud": "api" })).is_err());
}

#[test]
fn test_numeric_date_accepts_numbers() {
    assert_eq!(serde_json::from_str::<NumericDate>("1626527469").unwrap(), NumericDate::new(1626527469));
    assert_eq!(serde_json::from_str::<NumericDate>("-10").unwrap(), NumericDate::new(-10));
    assert_eq!(serde_json::from_str::<NumericDate>("1626527469.9").unwrap(), NumericDate::new(1626527469));
    assert_eq!(serde_json::from_str::<NumericDate>("1.5e3").unwrap(), NumericDate::new(1500));
}

#[test]
fn test_numeric_date_rejects_invalid_values() {
    assert!(serde_json::from_str::<NumericDate>(r#""1626527469""#).is_err());
    assert!(serde_json::from_str::<NumericDate>("true").is_err());
    assert!(serde_json::from_str::<NumericDate>("18446744073709551615").is_err());
    assert!(serde_json::from_str::<NumericDate>("1e300").is_err());
}

#[test]
fn test_numeric_date_serializes_as_integer() {
    assert_eq!(serde_json::to_string(&NumericDate::new(1626527469)).unwrap(), "1626527469");
}

#[test]
fn test_numeric_date_system_time_conversions() {
    let time = UNIX_EPOCH + Duration::from_secs(1626527469);
    let date = NumericDate::from(time);

    assert_eq!(date.seconds(), 1626527469);
    assert_eq!(date.to_system_time(), Some(time));
    assert_eq!(NumericDate::from(UNIX_EPOCH - Duration::from_secs(5)).seconds(), -5);
    assert_eq!(NumericDate::new(10) + Duration::from_secs(5), NumericDate::new(15));
    assert_eq!(NumericDate::new(i64::MAX) + Duration::from_secs(5), NumericDate::new(i64::MAX));
}

#[test]
fn test_builder_populates_claims() {
    let claims = ClaimSet::builder()
        .issuer("https://identity.example.com".to_string())
        .subject("alice".to_string())
        .audience(vec!["api".to_string(), "ui".to_string()])
        .expiry(NumericDate::new(1626527469))
        .not_before(NumericDate::new(1626467000))
        .issued_at(NumericDate::new(1626467469))
        .id("token-1".to_string())
        .groups(vec!["admins".to_string(), "readers".to_string()])
        .email("alice@example.com".to_string())
        .email_verified(true)
        .service_account_name("alice-sa".to_string())
        .build();

    assert_eq!(claims, full_claims());
}

#[test]
fn test_builder_expiry_relative_to_issued_at() {
    let claims = ClaimSet::builder()
        .issued_at(NumericDate::new(1000))
        .expiry(NumericDate::new(1))
        .expires_in(Duration::from_secs(600))
        .build();

    assert_eq!(claims.expiry, Some(NumericDate::new(1600)));
}

#[test]
fn test_builder_expiry_relative_to_now() {
    let before = NumericDate::now();
    let claims = ClaimSet::builder().expires_in(Duration::from_secs(600)).build();
    let after = NumericDate::now();

    let expiry = claims.expiry.expect("expiry is set");
    assert!(expiry >= before + Duration::from_secs(600));
    assert!(expiry <= after + Duration::from_secs(600));
    assert_eq!(claims.issued_at, None);
}

#[test]
fn test_builder_defaults_to_empty_claims() {
    assert_eq!(ClaimSet::builder().build(), ClaimSet::default());
}
