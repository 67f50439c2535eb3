//! Interchange configuration.
//!
//! This module selects the structured text format used to persist and
//! exchange decoded [`MessagePart`](crate::MessagePart)s and
//! [`FragmentSet`](crate::FragmentSet)s.
use serde::{Serialize, de::DeserializeOwned};

use crate::error::InterchangeError;

/// Structured text formats supported for interchange.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InterchangeFormat {
    /// JSON documents keyed by the part attribute names.
    #[default]
    Json,
}

impl InterchangeFormat {
    /// The library default (currently [`Json`](Self::Json)).
    pub const DEFAULT: InterchangeFormat = InterchangeFormat::Json;

    /// Serialize a value into a text document.
    ///
    /// # Errors
    ///
    /// Returns an [`InterchangeError`] if serialization fails.
    pub fn serialize<T: Serialize + ?Sized>(self, value: &T) -> Result<String, InterchangeError> {
        match self {
            InterchangeFormat::Json => Ok(serde_json::to_string(value)?),
        }
    }

    /// Deserialize a value from a text document.
    ///
    /// # Errors
    ///
    /// Returns an [`InterchangeError`] if the document is malformed.
    pub fn deserialize<T: DeserializeOwned>(self, input: &str) -> Result<T, InterchangeError> {
        match self {
            InterchangeFormat::Json => Ok(serde_json::from_str(input)?),
        }
    }
}
