use serde_json::error::Category;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// The error returned when a claim set cannot be read from its JSON form.
#[derive(Debug)]
pub enum DecodeError {
    /// The input is not valid JSON, or its top-level value is not an object.
    Malformed(serde_json::Error),
    /// A recognized claim holds a value of an incompatible type.
    TypeMismatch(serde_json::Error),
}

impl DecodeError {
    pub fn is_malformed(&self) -> bool {
        matches!(self, DecodeError::Malformed(_))
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, DecodeError::TypeMismatch(_))
    }

    /// Classifies a failure to read `data`.
    ///
    /// A data error can only come from a claim value once the document is known to be an object.
    pub(crate) fn from_bytes(data: &[u8], error: serde_json::Error) -> Self {
        match error.classify() {
            Category::Data if data.trim_ascii_start().starts_with(b"{") => DecodeError::TypeMismatch(error),
            _ => DecodeError::Malformed(error),
        }
    }

    pub(crate) fn from_object(error: serde_json::Error) -> Self {
        match error.classify() {
            Category::Data => DecodeError::TypeMismatch(error),
            _ => DecodeError::Malformed(error),
        }
    }
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::Malformed(cause) => write!(f, "Malformed claim set: {}", cause),
            DecodeError::TypeMismatch(cause) => write!(f, "Claim has an unexpected type: {}", cause),
        }
    }
}

impl Error for DecodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DecodeError::Malformed(cause) => Some(cause),
            DecodeError::TypeMismatch(cause) => Some(cause),
        }
    }
}

/// The error returned when a claim set cannot be written to its JSON form.
#[derive(Debug)]
pub struct EncodeError(serde_json::Error);

impl From<serde_json::Error> for EncodeError {
    fn from(error: serde_json::Error) -> Self {
        EncodeError(error)
    }
}

impl Display for EncodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to encode claim set: {}", self.0)
    }
}

impl Error for EncodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}
