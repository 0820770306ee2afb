
use crate::contracts::claim_set::{GROUPS_KEY, RECOGNIZED_KEYS};
use crate::contracts::claims_codec::ClaimsCodec;
use anyhow::bail;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ClaimsSettings {
    /// The claim carrying group membership in tokens of the configured identity provider.
    /// Leave empty to use the `groups` claim.
    #[serde(default)]
    pub custom_group_claim_name: String,
}

impl TryFrom<&ClaimsSettings> for ClaimsCodec {
    type Error = anyhow::Error;

    fn try_from(settings: &ClaimsSettings) -> Result<Self, Self::Error> {
        let name = settings.custom_group_claim_name.as_str();
        if RECOGNIZED_KEYS.contains(&name) {
            bail!("Custom group claim name {:?} collides with another recognized claim", name);
        }

        let codec = ClaimsCodec::new(name);
        let is_custom = codec.groups_key() != GROUPS_KEY;
        log::info!(
            group_claim = codec.groups_key(),
            is_custom = is_custom;
            "Group membership is read from the {:?} claim", codec.groups_key());

        Ok(codec)
    }
}
