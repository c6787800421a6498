//! Gateway routing constants.
//!
//! Versions and collection names are part of the gateway's routing contract
//! and must match it exactly.

use std::fmt;

/// REST API version for payment requests.
pub const V4_3: &str = "v4.3";

/// REST API version for payment plans (subscriptions, recurring bills).
pub const PAYMENT_PLAN_VERSION: &str = "rest/v4.9";

/// Version of the command service endpoint.
pub const SERVICE_VERSION: &str = "4.0";

/// Path of the command service endpoint under its version.
pub const SERVICE_PATH: &str = "service.cgi";

/// Recurring bills collection.
pub const URI_RECURRING_BILL: &str = "recurringBill";

/// Payment retries, nested under a recurring bill.
pub const URI_RECURRING_BILL_PAYMENT_RETRY: &str = "paymentRetry";

/// Payment requests collection.
pub const URI_PAYMENT_REQUEST: &str = "paymentRequest";

/// Transactions, nested under a payment request.
pub const URI_TRANSACTION: &str = "transaction";

/// Confirmation page resend endpoint.
pub const URI_SEND_CONFIRMATION_PAGE: &str = "sendConfirmationPage";

/// HTTP method a request is sent with.
///
/// Some request kinds select their URL template by method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestMethod {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
}

impl RequestMethod {
    /// Returns the method name as sent on the request line.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
