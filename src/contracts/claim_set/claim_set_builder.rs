use crate::contracts::claim_set::ClaimSet;
use crate::contracts::claim_set::audience::Audience;
use crate::contracts::claim_set::numeric_date::NumericDate;
use std::time::Duration;

pub struct ClaimSetBuilder {
    claims: ClaimSet,
    validity_period: Option<Duration>,
}

impl ClaimSetBuilder {
    pub fn new() -> Self {
        Self {
            claims: ClaimSet::default(),
            validity_period: None,
        }
    }

    pub fn issuer(mut self, issuer: String) -> Self {
        self.claims.issuer = issuer;
        self
    }

    pub fn subject(mut self, subject: String) -> Self {
        self.claims.subject = subject;
        self
    }

    pub fn audience(mut self, audience: Vec<String>) -> Self {
        self.claims.audience = Audience::new(audience);
        self
    }

    pub fn expiry(mut self, expiry: NumericDate) -> Self {
        self.claims.expiry = Some(expiry);
        self
    }

    pub fn not_before(mut self, not_before: NumericDate) -> Self {
        self.claims.not_before = Some(not_before);
        self
    }

    pub fn issued_at(mut self, issued_at: NumericDate) -> Self {
        self.claims.issued_at = Some(issued_at);
        self
    }

    /// Sets the expiry relative to the issued-at time, or to the current time if none is set.
    /// Overrides any explicit expiry.
    pub fn expires_in(mut self, validity_period: Duration) -> Self {
        self.validity_period = Some(validity_period);
        self
    }

    pub fn id(mut self, id: String) -> Self {
        self.claims.id = id;
        self
    }

    pub fn groups(mut self, groups: Vec<String>) -> Self {
        self.claims.groups = groups;
        self
    }

    pub fn email(mut self, email: String) -> Self {
        self.claims.email = email;
        self
    }

    pub fn email_verified(mut self, email_verified: bool) -> Self {
        self.claims.email_verified = email_verified;
        self
    }

    pub fn service_account_name(mut self, service_account_name: String) -> Self {
        self.claims.service_account_name = service_account_name;
        self
    }

    pub fn build(self) -> ClaimSet {
        let mut claims = self.claims;
        if let Some(validity_period) = self.validity_period {
            let start = claims.issued_at.unwrap_or_else(NumericDate::now);
            claims.expiry = Some(start + validity_period);
        }
        claims
    }
}

impl Default for ClaimSetBuilder {
    fn default() -> Self {
        Self::new()
    }
}
