// src/error.rs
// Failure modes of a fact lookup. None of these are fatal to the query loop.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("no encyclopedia page found for '{subject}'")]
    NotFound { subject: String },

    #[error("page '{title}' has no infobox")]
    NoInfobox { title: String },

    /// The infobox exists but the expected property could not be extracted.
    #[error("{property}")]
    MissingProperty { property: String },

    #[error("no subject given")]
    MissingSubject,

    #[error("'{value}' is not a valid calendar date")]
    InvalidDate { value: String },

    #[error("request to the knowledge source failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid extraction pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl LookupError {
    pub fn missing(property: impl Into<String>) -> Self {
        Self::MissingProperty {
            property: property.into(),
        }
    }
}
