//! Payment plan requests: recurring bills and their payment retries.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use payu_proto::{FieldSpec, XmlSchema};

use super::Request;
use crate::pattern::UrlPattern;
use crate::resources::{
    PAYMENT_PLAN_VERSION, RequestMethod, URI_RECURRING_BILL, URI_RECURRING_BILL_PAYMENT_RETRY,
};

/// Retries the pending payment of a recurring bill.
///
/// # XML Format
///
/// ```xml
/// <paymentRetry>
///   <recurringBillId>abc123</recurringBillId>
/// </paymentRetry>
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringBillPaymentRetry {
    /// Recurring bill whose payment is retried.
    #[serde(rename = "recurringBillId", default)]
    pub recurring_bill_id: String,
}

impl RecurringBillPaymentRetry {
    /// Creates a retry for `recurring_bill_id`.
    #[must_use]
    pub fn new(recurring_bill_id: impl Into<String>) -> Self {
        Self {
            recurring_bill_id: recurring_bill_id.into(),
        }
    }
}

impl XmlSchema for RecurringBillPaymentRetry {
    const ROOT: &'static str = "paymentRetry";
    const FIELDS: &'static [FieldSpec] =
        &[FieldSpec::element("recurringBillId", "recurring_bill_id")];
}

impl Request for RecurringBillPaymentRetry {
    fn url_pattern(&self, _method: RequestMethod) -> UrlPattern {
        UrlPattern::DependentEntity {
            version: PAYMENT_PLAN_VERSION,
            parent: URI_RECURRING_BILL,
            placeholder: "recurringBillId",
            child: URI_RECURRING_BILL_PAYMENT_RETRY,
        }
    }

    fn resource_id(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.recurring_bill_id.as_str()))
    }
}

/// Reads or lists recurring bills.
///
/// A `GET` with an identifier addresses one bill; any other combination
/// addresses the collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringBillRequest {
    /// Bill identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl RecurringBillRequest {
    /// Creates a request addressing the bill `id`.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: Some(id.into()) }
    }
}

impl XmlSchema for RecurringBillRequest {
    const ROOT: &'static str = "recurringBill";
    const FIELDS: &'static [FieldSpec] = &[FieldSpec::element("id", "id")];
}

impl Request for RecurringBillRequest {
    fn url_pattern(&self, method: RequestMethod) -> UrlPattern {
        if method == RequestMethod::Get && self.id.is_some() {
            UrlPattern::ParamEntity {
                version: PAYMENT_PLAN_VERSION,
                resource: URI_RECURRING_BILL,
                placeholder: "recurringBillId",
            }
        } else {
            UrlPattern::Entity {
                version: PAYMENT_PLAN_VERSION,
                resource: URI_RECURRING_BILL,
            }
        }
    }

    fn resource_id(&self) -> Option<Cow<'_, str>> {
        self.id.as_deref().map(Cow::Borrowed)
    }
}
