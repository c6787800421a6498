//! XML wire format types for the PayU Latam API.
//!
//! This crate defines the serialization-level data structures exchanged with
//! the PayU gateway: enumerations mirroring gateway-side codes, the merchant,
//! transaction and order models carried inside requests, the payment response
//! models, and the XML codec that moves them on and off the wire.
//!
//! It has minimal dependencies (`serde`, `serde_with`, `quick-xml`) and is the
//! shared vocabulary of the `payu` crate.
//!
//! # Modules
//!
//! - [`codes`] - Languages, commands, transaction types, sources and states
//! - [`payment_method`] - The payment method type catalog
//! - [`model`] - Merchant, transaction and order elements
//! - [`responses`] - Gateway responses (`PaymentResponse`, `TransactionResponse`)
//! - [`additional_info`] - Lossy structural adapter for the `additionalInfo` element
//! - [`schema`] - Declarative per-type XML schema tables
//! - [`xml`] - Generic XML codec driven by the schema tables

pub mod additional_info;
pub mod codes;
pub mod model;
pub mod payment_method;
pub mod responses;
pub mod schema;
pub mod xml;

pub use additional_info::{AdditionalInfo, AdditionalInfoElement, CARD_TYPE_KEY};
pub use codes::{
    Command, Language, ResponseCode, TransactionSource, TransactionState, TransactionType,
};
pub use model::{Merchant, Order, Transaction};
pub use payment_method::{AntiFraudSkipping, PaymentMethodType};
pub use responses::{PaymentResponse, TransactionResponse};
pub use schema::{FieldSpec, XmlSchema};

/// Errors that can occur when moving PayU messages on and off the wire.
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    /// The value could not be written as XML.
    #[error("XML serialization failed: {0}")]
    Serialize(String),

    /// The document is malformed or does not match the target type.
    #[error("XML deserialization failed: {0}")]
    Deserialize(String),

    /// The document contains no root element.
    #[error("XML document has no root element")]
    MissingRoot,

    /// The document's root element differs from the one the type declares.
    #[error("unexpected root element <{found}>, expected <{expected}>")]
    UnexpectedRoot {
        /// Root element declared by the target type's schema.
        expected: &'static str,
        /// Root element found in the document.
        found: String,
    },
}

/// Error returned when a gateway code is not part of a known catalog.
///
/// Lookups are exact-match: no case folding, no trimming, and never a
/// fallback to a default entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value:?}")]
pub struct UnknownValueError {
    kind: &'static str,
    value: String,
}

impl UnknownValueError {
    /// Creates a new error for `value` not found in the `kind` catalog.
    #[must_use]
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Returns the name of the catalog that was searched.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        self.kind
    }

    /// Returns the value that was not found.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}
