//! Gateway response types.
//!
//! A command posted to the service endpoint is answered with a
//! [`PaymentResponse`]; submitted transactions come back wrapped in a
//! [`TransactionResponse`].

use serde::{Deserialize, Serialize};

use crate::additional_info::{self, AdditionalInfo};
use crate::codes::{ResponseCode, TransactionState};
use crate::schema::{FieldSpec, XmlSchema};

/// Top-level response to a payments command.
///
/// # XML Format
///
/// ```xml
/// <paymentResponse>
///   <code>SUCCESS</code>
///   <transactionResponse>
///     <orderId>844181298</orderId>
///     <transactionId>6f5d1a8e-...</transactionId>
///     <state>APPROVED</state>
///     <additionalInfo><cardType>CREDIT</cardType></additionalInfo>
///   </transactionResponse>
/// </paymentResponse>
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentResponse {
    /// Whether the request as a whole succeeded.
    pub code: ResponseCode,

    /// Error message when [`Self::code`] is [`ResponseCode::Error`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Result of a submitted transaction.
    #[serde(
        rename = "transactionResponse",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub transaction_response: Option<TransactionResponse>,
}

impl PaymentResponse {
    /// Creates a successful response carrying a transaction result.
    #[must_use]
    pub const fn success(transaction_response: TransactionResponse) -> Self {
        Self {
            code: ResponseCode::Success,
            error: None,
            transaction_response: Some(transaction_response),
        }
    }

    /// Creates an error response.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            code: ResponseCode::Error,
            error: Some(message.into()),
            transaction_response: None,
        }
    }

    /// Returns `true` if the gateway processed the request.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.code == ResponseCode::Success
    }
}

impl XmlSchema for PaymentResponse {
    const ROOT: &'static str = "paymentResponse";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::element("code", "code").required(),
        FieldSpec::element("error", "error"),
        FieldSpec::element("transactionResponse", "transaction_response"),
    ];
}

/// Result of a single transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionResponse {
    /// Gateway order identifier.
    #[serde(rename = "orderId", default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,

    /// Gateway transaction identifier.
    #[serde(rename = "transactionId", default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,

    /// Transaction state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<TransactionState>,

    /// Response code returned by the payment network.
    #[serde(
        rename = "paymentNetworkResponseCode",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub payment_network_response_code: Option<String>,

    /// Authorization code issued by the network.
    #[serde(
        rename = "authorizationCode",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub authorization_code: Option<String>,

    /// Detailed response code, e.g. `APPROVED` or `ANTIFRAUD_REJECTED`.
    #[serde(rename = "responseCode", default, skip_serializing_if = "Option::is_none")]
    pub response_code: Option<String>,

    /// Human-readable response message.
    #[serde(
        rename = "responseMessage",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub response_message: Option<String>,

    /// Extra data; only `cardType` survives serialization.
    #[serde(
        rename = "additionalInfo",
        with = "additional_info",
        default,
        skip_serializing_if = "additional_info::is_absent"
    )]
    pub additional_info: Option<AdditionalInfo>,
}

impl XmlSchema for TransactionResponse {
    const ROOT: &'static str = "transactionResponse";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::element("orderId", "order_id"),
        FieldSpec::element("transactionId", "transaction_id"),
        FieldSpec::element("state", "state"),
        FieldSpec::element("paymentNetworkResponseCode", "payment_network_response_code"),
        FieldSpec::element("authorizationCode", "authorization_code"),
        FieldSpec::element("responseCode", "response_code"),
        FieldSpec::element("responseMessage", "response_message"),
        FieldSpec::element("additionalInfo", "additional_info"),
    ];
}
