//! Request descriptors.
//!
//! Every request kind is a small struct holding only the fields it sends and
//! the identifiers that address it. Each one implements [`Request`], which
//! picks a [`UrlPattern`] and supplies the identifier that fills it.
//! [`RequestDescriptor`] is the tagged union over all of them.

mod command;
mod payment_plan;

use std::borrow::Cow;

pub use command::{
    ConfirmationPageRequest, PaymentAttemptRequest, PaymentRequest, ReportingDetails,
    ReportingRequest,
};
pub use payment_plan::{RecurringBillPaymentRetry, RecurringBillRequest};

use payu_proto::{Command, Language, Merchant, xml};

#[cfg(feature = "telemetry")]
use tracing::instrument;

use crate::config::{Config, Settings};
use crate::error::RequestError;
use crate::pattern::UrlPattern;
use crate::resources::RequestMethod;

/// One outbound gateway call.
///
/// URL computation depends only on the base URL, the method and the
/// request's own fields. It never mutates the request.
pub trait Request {
    /// Returns the URL template for `method`.
    fn url_pattern(&self, method: RequestMethod) -> UrlPattern;

    /// Returns the identifier that fills the template's placeholder.
    fn resource_id(&self) -> Option<Cow<'_, str>> {
        None
    }

    /// Composes the target URL.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::MissingIdentifier`] if the selected template
    /// needs an identifier the request does not have.
    #[cfg_attr(
        feature = "telemetry",
        instrument(name = "payu.request_url", skip_all, fields(method = %method), err)
    )]
    fn request_url(&self, base: &str, method: RequestMethod) -> Result<String, RequestError> {
        self.url_pattern(method)
            .build(base, self.resource_id().as_deref())
    }
}

/// A request that carries the command header.
pub trait CommandRequest: Request {
    /// Command to execute.
    fn command(&self) -> Option<Command>;

    /// Language for gateway messages.
    fn language(&self) -> Option<Language>;

    /// Merchant credentials.
    fn merchant(&self) -> Option<&Merchant>;

    /// Test flag.
    fn is_test(&self) -> bool;

    /// Sets the command.
    fn set_command(&mut self, command: Command);

    /// Overwrites the header with resolved settings. The command is kept.
    fn apply(&mut self, settings: &Settings);
}

/// Any request the SDK can build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestDescriptor {
    /// Payments command.
    Payment(PaymentRequest),
    /// Transaction posted under a payment request.
    PaymentAttempt(PaymentAttemptRequest),
    /// Reports command.
    Reporting(ReportingRequest),
    /// Confirmation page resend.
    ConfirmationPage(ConfirmationPageRequest),
    /// Recurring bill read or listing.
    RecurringBill(RecurringBillRequest),
    /// Recurring bill payment retry.
    RecurringBillPaymentRetry(RecurringBillPaymentRetry),
}

impl RequestDescriptor {
    fn as_request(&self) -> &dyn Request {
        match self {
            Self::Payment(r) => r,
            Self::PaymentAttempt(r) => r,
            Self::Reporting(r) => r,
            Self::ConfirmationPage(r) => r,
            Self::RecurringBill(r) => r,
            Self::RecurringBillPaymentRetry(r) => r,
        }
    }

    /// Returns the configured base URL this request is sent to.
    ///
    /// Payments commands and payment attempts go to the payments API,
    /// reports commands to the reports API, and the `rest/v4.9` resources to
    /// the payment plan API.
    #[must_use]
    pub fn base_url<'a>(&self, config: &'a Config) -> &'a str {
        match self {
            Self::Payment(_) | Self::PaymentAttempt(_) => &config.payments_url,
            Self::Reporting(_) => &config.reports_url,
            Self::ConfirmationPage(_)
            | Self::RecurringBill(_)
            | Self::RecurringBillPaymentRetry(_) => &config.payment_plan_url,
        }
    }

    /// Resolves the target URL against the matching base URL of `config`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::MissingIdentifier`] if the selected template
    /// needs an identifier the request does not have.
    pub fn url_in(&self, config: &Config, method: RequestMethod) -> Result<String, RequestError> {
        self.request_url(self.base_url(config), method)
    }

    /// Returns the XML root element of the payload.
    #[must_use]
    pub const fn root(&self) -> &'static str {
        use payu_proto::XmlSchema;
        match self {
            Self::Payment(_) => PaymentRequest::ROOT,
            Self::PaymentAttempt(_) => PaymentAttemptRequest::ROOT,
            Self::Reporting(_) => ReportingRequest::ROOT,
            Self::ConfirmationPage(_) => ConfirmationPageRequest::ROOT,
            Self::RecurringBill(_) => RecurringBillRequest::ROOT,
            Self::RecurringBillPaymentRetry(_) => RecurringBillPaymentRetry::ROOT,
        }
    }

    /// Encodes the payload as a complete XML document.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Xml`] if the payload cannot be serialized.
    pub fn to_xml(&self) -> Result<String, RequestError> {
        let doc = match self {
            Self::Payment(r) => xml::to_document(r),
            Self::PaymentAttempt(r) => xml::to_document(r),
            Self::Reporting(r) => xml::to_document(r),
            Self::ConfirmationPage(r) => xml::to_document(r),
            Self::RecurringBill(r) => xml::to_document(r),
            Self::RecurringBillPaymentRetry(r) => xml::to_document(r),
        }?;
        Ok(doc)
    }
}

impl Request for RequestDescriptor {
    fn url_pattern(&self, method: RequestMethod) -> UrlPattern {
        self.as_request().url_pattern(method)
    }

    fn resource_id(&self) -> Option<Cow<'_, str>> {
        self.as_request().resource_id()
    }
}

macro_rules! impl_from {
    ($($variant:ident($ty:ty)),+ $(,)?) => {
        $(
            impl From<$ty> for RequestDescriptor {
                fn from(request: $ty) -> Self {
                    Self::$variant(request)
                }
            }
        )+
    };
}

impl_from!(
    Payment(PaymentRequest),
    PaymentAttempt(PaymentAttemptRequest),
    Reporting(ReportingRequest),
    ConfirmationPage(ConfirmationPageRequest),
    RecurringBill(RecurringBillRequest),
    RecurringBillPaymentRetry(RecurringBillPaymentRetry),
);

#[cfg(test)]
mod tests {
    use payu_proto::schema::{transient_fields, wire_fields};
    use payu_proto::{Transaction, TransactionType, XmlSchema};
    use serde::Serialize;

    use super::*;

    const BASE: &str = "https://api.example.com";

    #[test]
    fn test_descriptor_delegates_url() {
        let cases: [(RequestDescriptor, &str); 4] = [
            (
                RecurringBillPaymentRetry::new("abc123").into(),
                "https://api.example.com/rest/v4.9/recurringBill/abc123/paymentRetry",
            ),
            (
                PaymentAttemptRequest::new(42).into(),
                "https://api.example.com/v4.3/paymentRequest/42/transaction",
            ),
            (
                ConfirmationPageRequest::new("tx-1").into(),
                "https://api.example.com/rest/v4.9/sendConfirmationPage/tx-1",
            ),
            (
                PaymentRequest::default().into(),
                "https://api.example.com/4.0/service.cgi",
            ),
        ];
        for (descriptor, expected) in cases {
            assert_eq!(
                descriptor.request_url(BASE, RequestMethod::Post).unwrap(),
                expected
            );
        }
    }

    #[test]
    fn test_descriptor_respects_method_sensitive_templates() {
        let descriptor = RequestDescriptor::from(RecurringBillRequest::new("rb-1"));
        assert_eq!(
            descriptor.request_url(BASE, RequestMethod::Get).unwrap(),
            "https://api.example.com/rest/v4.9/recurringBill/rb-1"
        );
        assert_eq!(
            descriptor.request_url(BASE, RequestMethod::Delete).unwrap(),
            "https://api.example.com/rest/v4.9/recurringBill"
        );
    }

    #[test]
    fn test_descriptor_selects_base_url() {
        let config = Config::default()
            .with_payments_url("https://pay.example.com")
            .with_reports_url("https://reports.example.com")
            .with_payment_plan_url("https://plans.example.com");
        let cases: [(RequestDescriptor, &str); 6] = [
            (PaymentRequest::default().into(), "https://pay.example.com"),
            (PaymentAttemptRequest::new(1).into(), "https://pay.example.com"),
            (ReportingRequest::default().into(), "https://reports.example.com"),
            (ConfirmationPageRequest::new("tx-1").into(), "https://plans.example.com"),
            (RecurringBillRequest::default().into(), "https://plans.example.com"),
            (RecurringBillPaymentRetry::new("rb").into(), "https://plans.example.com"),
        ];
        for (descriptor, expected) in cases {
            assert_eq!(descriptor.base_url(&config), expected);
        }
    }

    #[test]
    fn test_descriptor_url_in_config() {
        let config = Config::default()
            .with_reports_url("https://reports.example.com")
            .with_payments_url("https://pay.example.com");
        let reporting = RequestDescriptor::from(ReportingRequest::default());
        assert_eq!(
            reporting.url_in(&config, RequestMethod::Post).unwrap(),
            "https://reports.example.com/4.0/service.cgi"
        );
        let attempt = RequestDescriptor::from(PaymentAttemptRequest::default());
        assert!(matches!(
            attempt.url_in(&config, RequestMethod::Post),
            Err(RequestError::MissingIdentifier("paymentRequestId"))
        ));
    }

    #[test]
    fn test_descriptor_to_xml() {
        let descriptor = RequestDescriptor::from(RecurringBillPaymentRetry::new("abc123"));
        assert_eq!(descriptor.root(), "paymentRetry");
        let doc = descriptor.to_xml().unwrap();
        assert!(doc.starts_with(xml::XML_DECLARATION));
        assert!(
            doc.ends_with("<paymentRetry><recurringBillId>abc123</recurringBillId></paymentRetry>")
        );
    }

    fn assert_layout<T: XmlSchema + Serialize>(value: &T) {
        let out = xml::to_string(value).unwrap();
        let expected: Vec<_> = wire_fields::<T>().map(|f| f.wire_name).collect();
        assert_eq!(xml::child_elements(&out).unwrap(), expected, "{}", T::ROOT);
        for spec in transient_fields::<T>() {
            assert!(!out.contains(&format!("<{}", spec.wire_name)), "{out}");
        }
    }

    fn header<T: CommandRequest + Default>(command: Command) -> T {
        let mut request = T::default();
        request.apply(&Settings {
            merchant: Merchant::new("key", "login"),
            language: Some(Language::Es),
            is_test: true,
        });
        request.set_command(command);
        request
    }

    #[test]
    fn test_request_tables_match_written_layout() {
        let transaction = Transaction {
            transaction_type: Some(TransactionType::AuthorizationAndCapture),
            ..Transaction::default()
        };

        let mut payment: PaymentRequest = header(Command::SubmitTransaction);
        payment.transaction = Some(transaction.clone());
        assert_layout(&payment);

        let mut reporting: ReportingRequest = header(Command::OrderDetail);
        let details = ReportingDetails {
            order_id: Some(1),
            reference_code: Some("ref-1".to_owned()),
            transaction_id: Some("tx-1".to_owned()),
        };
        assert_layout(&details);
        reporting.details = Some(details);
        assert_layout(&reporting);

        let mut confirmation: ConfirmationPageRequest = header(Command::Ping);
        confirmation.transaction_id = "tx-1".to_owned();
        assert_layout(&confirmation);

        let mut attempt: PaymentAttemptRequest = header(Command::SubmitTransaction);
        attempt.transaction = Some(transaction);
        attempt.payment_request_id = Some(4242);
        assert_layout(&attempt);

        assert_layout(&RecurringBillRequest::new("rb-1"));
        assert_layout(&RecurringBillPaymentRetry::new("abc123"));
    }

    #[test]
    fn test_descriptor_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RequestDescriptor>();
    }
}
