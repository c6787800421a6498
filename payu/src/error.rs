//! Error types for building PayU requests.

use payu_proto::XmlError;

/// Errors raised while building a request, resolving its URL or encoding it.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// A URL template placeholder had no identifier to fill it.
    ///
    /// Absent and empty identifiers are both rejected; a URL with an empty
    /// path segment is never produced.
    #[error("missing identifier for URL placeholder `{0}`")]
    MissingIdentifier(&'static str),

    /// A required per-call parameter was not supplied.
    #[error("missing required parameter `{0}`")]
    MissingParameter(&'static str),

    /// A per-call parameter was supplied but could not be parsed.
    #[error("invalid value {value:?} for parameter `{name}`")]
    InvalidParameter {
        /// Parameter key.
        name: &'static str,
        /// Value as supplied.
        value: String,
    },

    /// The request payload could not be encoded.
    #[error(transparent)]
    Xml(#[from] XmlError),
}

impl RequestError {
    /// Creates an [`InvalidParameter`](Self::InvalidParameter) error.
    #[must_use]
    pub fn invalid(name: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            value: value.into(),
        }
    }
}
