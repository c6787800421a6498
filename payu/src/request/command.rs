//! Command requests.
//!
//! A command request carries a common header (language, command, merchant
//! credentials and the test flag) ahead of its own fields. All of them share
//! the XML root `request`.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use payu_proto::{Command, FieldSpec, Language, Merchant, Transaction, XmlSchema};

use super::{CommandRequest, Request};
use crate::config::Settings;
use crate::pattern::UrlPattern;
use crate::resources::{
    PAYMENT_PLAN_VERSION, RequestMethod, SERVICE_VERSION, URI_PAYMENT_REQUEST,
    URI_SEND_CONFIRMATION_PAGE, URI_TRANSACTION, V4_3,
};

macro_rules! command_request {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $( $(#[$fmeta:meta])* pub $field:ident: $ty:ty => $spec:expr, )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $name {
            /// Language for gateway messages.
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub language: Option<Language>,

            /// Command to execute.
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub command: Option<Command>,

            /// Merchant credentials.
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub merchant: Option<Merchant>,

            /// Whether the gateway should treat the request as a test.
            #[serde(rename = "isTest", default)]
            pub is_test: bool,

            $( $(#[$fmeta])* pub $field: $ty, )*
        }

        impl XmlSchema for $name {
            const ROOT: &'static str = "request";
            const FIELDS: &'static [FieldSpec] = &[
                FieldSpec::element("language", "language"),
                FieldSpec::element("command", "command"),
                FieldSpec::element("merchant", "merchant").required(),
                FieldSpec::element("isTest", "is_test"),
                $( $spec, )*
            ];
        }

        impl CommandRequest for $name {
            fn command(&self) -> Option<Command> {
                self.command
            }

            fn language(&self) -> Option<Language> {
                self.language
            }

            fn merchant(&self) -> Option<&Merchant> {
                self.merchant.as_ref()
            }

            fn is_test(&self) -> bool {
                self.is_test
            }

            fn set_command(&mut self, command: Command) {
                self.command = Some(command);
            }

            fn apply(&mut self, settings: &Settings) {
                self.language = settings.language;
                self.merchant = Some(settings.merchant.clone());
                self.is_test = settings.is_test;
            }
        }
    };
}

command_request! {
    /// A payments command, posted to the payments service endpoint.
    pub struct PaymentRequest {
        /// Transaction to submit, for `SUBMIT_TRANSACTION`.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub transaction: Option<Transaction> => FieldSpec::element("transaction", "transaction"),
    }
}

impl Request for PaymentRequest {
    fn url_pattern(&self, _method: RequestMethod) -> UrlPattern {
        UrlPattern::Service {
            version: SERVICE_VERSION,
        }
    }
}

command_request! {
    /// A reports command, posted to the reports service endpoint.
    pub struct ReportingRequest {
        /// Query arguments.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub details: Option<ReportingDetails> => FieldSpec::element("details", "details"),
    }
}

impl Request for ReportingRequest {
    fn url_pattern(&self, _method: RequestMethod) -> UrlPattern {
        UrlPattern::Service {
            version: SERVICE_VERSION,
        }
    }
}

/// Arguments of a reports query. Each command reads exactly one of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingDetails {
    /// Order to look up, for `ORDER_DETAIL`.
    #[serde(rename = "orderId", default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,

    /// Merchant reference code, for `ORDER_DETAIL_BY_REFERENCE_CODE`.
    #[serde(rename = "referenceCode", default, skip_serializing_if = "Option::is_none")]
    pub reference_code: Option<String>,

    /// Transaction to look up, for `TRANSACTION_RESPONSE_DETAIL`.
    #[serde(rename = "transactionId", default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
}

impl XmlSchema for ReportingDetails {
    const ROOT: &'static str = "details";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::element("orderId", "order_id"),
        FieldSpec::element("referenceCode", "reference_code"),
        FieldSpec::element("transactionId", "transaction_id"),
    ];
}

command_request! {
    /// Asks the gateway to resend the confirmation page of a transaction.
    pub struct ConfirmationPageRequest {
        /// Transaction whose confirmation page is resent.
        #[serde(rename = "transactionId", default)]
        pub transaction_id: String =>
            FieldSpec::element("transactionId", "transaction_id").required(),
    }
}

impl ConfirmationPageRequest {
    /// Creates a request for `transaction_id`.
    #[must_use]
    pub fn new(transaction_id: impl Into<String>) -> Self {
        Self {
            transaction_id: transaction_id.into(),
            ..Self::default()
        }
    }
}

impl Request for ConfirmationPageRequest {
    fn url_pattern(&self, _method: RequestMethod) -> UrlPattern {
        UrlPattern::ParamEntity {
            version: PAYMENT_PLAN_VERSION,
            resource: URI_SEND_CONFIRMATION_PAGE,
            placeholder: "transactionId",
        }
    }

    fn resource_id(&self) -> Option<Cow<'_, str>> {
        Some(self.transaction_id.as_str().into())
    }
}

command_request! {
    /// Pays a payment request, i.e. posts a transaction under it.
    pub struct PaymentAttemptRequest {
        /// Transaction to submit.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub transaction: Option<Transaction> => FieldSpec::element("transaction", "transaction"),

        /// Payment request being paid. Addresses the resource only; never
        /// serialized.
        #[serde(skip)]
        pub payment_request_id: Option<u32> =>
            FieldSpec::element("paymentRequestId", "payment_request_id").transient(),
    }
}

impl PaymentAttemptRequest {
    /// Creates an attempt against `payment_request_id`.
    #[must_use]
    pub fn new(payment_request_id: u32) -> Self {
        Self {
            payment_request_id: Some(payment_request_id),
            ..Self::default()
        }
    }
}

impl Request for PaymentAttemptRequest {
    fn url_pattern(&self, _method: RequestMethod) -> UrlPattern {
        UrlPattern::DependentEntity {
            version: V4_3,
            parent: URI_PAYMENT_REQUEST,
            placeholder: "paymentRequestId",
            child: URI_TRANSACTION,
        }
    }

    fn resource_id(&self) -> Option<Cow<'_, str>> {
        self.payment_request_id.map(|id| id.to_string().into())
    }
}
