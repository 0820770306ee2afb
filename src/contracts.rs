pub mod claim_set;
pub mod claims_codec;
