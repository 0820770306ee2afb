pub mod claims_settings;
