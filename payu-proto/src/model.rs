//! Elements nested inside PayU requests.

use serde::{Deserialize, Serialize};

use crate::codes::{Language, TransactionSource, TransactionType};
use crate::payment_method::PaymentMethodType;
use crate::schema::{FieldSpec, XmlSchema};

/// Merchant credentials attached to every command request.
///
/// # XML Format
///
/// ```xml
/// <merchant>
///   <apiKey>4Vj8eK4rloUd272L48hsrarnUA</apiKey>
///   <apiLogin>pRRXKOl8ikMmt9u</apiLogin>
/// </merchant>
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Merchant {
    /// API key issued by PayU.
    #[serde(rename = "apiKey", default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// API login issued by PayU.
    #[serde(rename = "apiLogin", default, skip_serializing_if = "Option::is_none")]
    pub api_login: Option<String>,
}

impl Merchant {
    /// Creates a merchant element with both credentials set.
    #[must_use]
    pub fn new(api_key: impl Into<String>, api_login: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            api_login: Some(api_login.into()),
        }
    }
}

impl XmlSchema for Merchant {
    const ROOT: &'static str = "merchant";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::element("apiKey", "api_key").required(),
        FieldSpec::element("apiLogin", "api_login").required(),
    ];
}

/// Order carried by transactions that create or modify a charge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Merchant account identifier.
    #[serde(rename = "accountId", default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<u32>,

    /// Merchant-side reference code.
    #[serde(rename = "referenceCode", default, skip_serializing_if = "Option::is_none")]
    pub reference_code: Option<String>,

    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Language for gateway messages about this order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
}

impl XmlSchema for Order {
    const ROOT: &'static str = "order";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::element("accountId", "account_id"),
        FieldSpec::element("referenceCode", "reference_code"),
        FieldSpec::element("description", "description"),
        FieldSpec::element("language", "language"),
    ];
}

/// A payment transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<TransactionType>,

    /// Where the transaction originates.
    #[serde(default)]
    pub source: TransactionSource,

    /// Payment method used.
    #[serde(rename = "paymentMethod", default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethodType>,

    /// The order, for transaction types that carry one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,

    /// Identifier of the transaction this one acts upon (captures, refunds, voids).
    #[serde(
        rename = "parentTransactionId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub parent_transaction_id: Option<String>,
}

impl XmlSchema for Transaction {
    const ROOT: &'static str = "transaction";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::element("type", "transaction_type"),
        FieldSpec::element("source", "source").required(),
        FieldSpec::element("paymentMethod", "payment_method"),
        FieldSpec::element("order", "order"),
        FieldSpec::element("parentTransactionId", "parent_transaction_id"),
    ];
}
