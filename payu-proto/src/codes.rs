//! Gateway code enumerations.
//!
//! Every enumeration here travels on the wire as a bare string (the gateway's
//! own spelling) and parses back exact-match. Unknown codes are rejected with
//! [`UnknownValueError`] rather than mapped to a default.

use std::fmt;
use std::str::FromStr;

use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::UnknownValueError;

macro_rules! wire_code {
    (
        $(#[$meta:meta])*
        pub enum $name:ident as $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Returns the code exactly as the gateway spells it.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $wire, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownValueError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $wire => Ok(Self::$variant), )+
                    other => Err(UnknownValueError::new($kind, other)),
                }
            }
        }
    };
}

wire_code! {
    /// Language used by the gateway for messages and order descriptions.
    pub enum Language as "language" {
        /// Spanish.
        Es => "es",
        /// English.
        En => "en",
        /// Portuguese.
        Pt => "pt",
    }
}

wire_code! {
    /// Command carried by requests posted to the service endpoint.
    pub enum Command as "command" {
        /// Connectivity check.
        Ping => "PING",
        /// Submit a payment transaction.
        SubmitTransaction => "SUBMIT_TRANSACTION",
        /// List the payment methods enabled for the merchant.
        GetPaymentMethods => "GET_PAYMENT_METHODS",
        /// Query an order by its identifier.
        OrderDetail => "ORDER_DETAIL",
        /// Query orders by merchant reference code.
        OrderDetailByReferenceCode => "ORDER_DETAIL_BY_REFERENCE_CODE",
        /// Query a transaction response by transaction identifier.
        TransactionResponseDetail => "TRANSACTION_RESPONSE_DETAIL",
    }
}

wire_code! {
    /// Kind of payment transaction.
    pub enum TransactionType as "transaction type" {
        /// Authorize funds without capturing them.
        Authorization => "AUTHORIZATION",
        /// Authorize and capture in one step.
        AuthorizationAndCapture => "AUTHORIZATION_AND_CAPTURE",
        /// Capture previously authorized funds.
        Capture => "CAPTURE",
        /// Cancel a pending transaction.
        Cancellation => "CANCELLATION",
        /// Void an authorization.
        Void => "VOID",
        /// Refund a captured transaction.
        Refund => "REFUND",
        /// Credit the payer.
        Credit => "CREDIT",
        /// Refund part of a captured transaction.
        PartialRefund => "PARTIAL_REFUND",
    }
}

impl TransactionType {
    /// Returns `true` if transactions of this type carry an order element.
    #[must_use]
    pub const fn carries_order(&self) -> bool {
        matches!(
            self,
            Self::Authorization
                | Self::AuthorizationAndCapture
                | Self::Capture
                | Self::Void
                | Self::Refund
                | Self::PartialRefund
        )
    }
}

wire_code! {
    /// Origin of a transaction as reported to the gateway.
    pub enum TransactionSource as "transaction source" {
        /// Created through this SDK.
        PayuSdk => "PAYU_SDK",
        /// Created through the OCCS API.
        OccsApi => "OCCS_API",
    }
}

impl Default for TransactionSource {
    fn default() -> Self {
        Self::PayuSdk
    }
}

wire_code! {
    /// State of a transaction as reported by the gateway.
    pub enum TransactionState as "transaction state" {
        /// Approved.
        Approved => "APPROVED",
        /// Declined by the network or the gateway.
        Declined => "DECLINED",
        /// Failed with an error.
        Error => "ERROR",
        /// Expired before completion.
        Expired => "EXPIRED",
        /// Awaiting confirmation.
        Pending => "PENDING",
        /// Submitted to the network.
        Submitted => "SUBMITTED",
    }
}

wire_code! {
    /// Outcome of a request as a whole, independent of any transaction state.
    pub enum ResponseCode as "response code" {
        /// The gateway processed the request.
        Success => "SUCCESS",
        /// The gateway rejected the request; see the error message.
        Error => "ERROR",
    }
}
