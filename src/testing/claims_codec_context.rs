use crate::contracts::claim_set::ClaimSet;
use crate::contracts::claim_set::audience::Audience;
use crate::contracts::claim_set::numeric_date::NumericDate;
use crate::contracts::claims_codec::ClaimsCodec;
use test_context::TestContext;

pub const AD_GROUPS: &str = "ad_groups";

/// A codec reading group membership from the canonical `groups` claim.
pub struct DefaultCodecContext {
    pub codec: ClaimsCodec,
}

impl TestContext for DefaultCodecContext {
    fn setup() -> Self {
        Self {
            codec: ClaimsCodec::default(),
        }
    }
}

/// A codec reading group membership from the `ad_groups` claim.
pub struct AdGroupsCodecContext {
    pub codec: ClaimsCodec,
}

impl TestContext for AdGroupsCodecContext {
    fn setup() -> Self {
        Self {
            codec: ClaimsCodec::new(AD_GROUPS),
        }
    }
}

/// An access token payload as issued by an identity provider, with group membership
/// under `groups_key` and a lot of provider specific noise around it.
pub fn identity_provider_payload(groups_key: &str) -> String {
    format!(
        r#"{{"user_tz":"America\/Chicago","sub":"test-user@example.com","user_locale":"en","idp_name":"UserNamePassword","user.tenant.name":"test-user","onBehalfOfUser":true,"amr":["USERNAME_PASSWORD"],"iss":"https:\/\/identity.example.com","client_id":"tokenGenerator","user_isAdmin":true,"scope":"","userAppRoles":["Authenticated","Global Viewer"],"exp":1626527469,"iat":1626467469,"tenant":"test-tenant","jti":"345sd435d454356","{groups_key}":["argo_admin", "argo_readonly"],"gtp":"jwt","primTenant":true,"tok_type":"AT","aud":["example-aud"],"user_id":"8948923893458945234","clientAppRoles":["Authenticated Client"]}}"#
    )
}

/// The claims of [`identity_provider_payload`] when its group claim is picked up.
pub fn identity_provider_claims() -> ClaimSet {
    ClaimSet {
        id: "345sd435d454356".to_string(),
        audience: Audience::from("example-aud"),
        issuer: "https://identity.example.com".to_string(),
        subject: "test-user@example.com".to_string(),
        expiry: Some(NumericDate::new(1626527469)),
        not_before: None,
        issued_at: Some(NumericDate::new(1626467469)),
        groups: vec!["argo_admin".to_string(), "argo_readonly".to_string()],
        ..Default::default()
    }
}

/// A claim set with every field populated.
pub fn full_claims() -> ClaimSet {
    ClaimSet {
        issuer: "https://identity.example.com".to_string(),
        subject: "alice".to_string(),
        audience: Audience::new(vec!["api".to_string(), "ui".to_string()]),
        expiry: Some(NumericDate::new(1626527469)),
        not_before: Some(NumericDate::new(1626467000)),
        issued_at: Some(NumericDate::new(1626467469)),
        id: "token-1".to_string(),
        groups: vec!["admins".to_string(), "readers".to_string()],
        email: "alice@example.com".to_string(),
        email_verified: true,
        service_account_name: "alice-sa".to_string(),
    }
}
