pub mod claims_codec_context;
