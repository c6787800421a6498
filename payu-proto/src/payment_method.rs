//! Payment method type catalog.
//!
//! Each [`PaymentMethodType`] maps a symbolic name to the numeric identifier
//! the gateway uses, a wire description, and an optional anti-fraud skipping
//! flag. The table is fixed at compile time.
//!
//! Three lookups are provided, all exact-match:
//!
//! - [`PaymentMethodType::from_name`] - by symbolic name (`"PAYU_GLOBAL_PAYMENT"`)
//! - [`PaymentMethodType::from_id`] - by numeric identifier (`12`)
//! - [`PaymentMethodType::from_description`] - by wire description (`"GLOBAL_PAYMENT"`)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::UnknownValueError;

/// Whether fraud screening is skipped for a payment method.
///
/// The catalog leaves this unset for most entries. [`Self::Unspecified`] is
/// not the same as [`Self::NotSkipped`]; callers must decide what an unset
/// flag means for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AntiFraudSkipping {
    /// Fraud screening is skipped.
    Skipped,
    /// Fraud screening is never skipped.
    NotSkipped,
    /// The catalog does not say.
    Unspecified,
}

impl AntiFraudSkipping {
    /// Returns the flag as an optional boolean, `None` when unspecified.
    #[must_use]
    pub const fn as_bool(self) -> Option<bool> {
        match self {
            Self::Skipped => Some(true),
            Self::NotSkipped => Some(false),
            Self::Unspecified => None,
        }
    }
}

impl From<Option<bool>> for AntiFraudSkipping {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Self::Skipped,
            Some(false) => Self::NotSkipped,
            None => Self::Unspecified,
        }
    }
}

/// A payment method type known to the gateway.
///
/// # Serialization
///
/// Serializes to its wire description, which differs from the symbolic name
/// for [`Self::PayuGlobalPayment`]:
///
/// ```xml
/// <paymentMethod>GLOBAL_PAYMENT</paymentMethod>
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentMethodType {
    /// Credit card.
    CreditCard,
    /// PSE bank transfer.
    Pse,
    /// Cash.
    Cash,
    /// Cash on delivery.
    CashOnDelivery,
    /// Lending.
    Lending,
    /// Referenced payment.
    Referenced,
    /// Check account.
    CheckAccount,
    /// Verified by Visa.
    VerifiedByVisa,
    /// ACH transfer.
    Ach,
    /// Debit card.
    DebitCard,
    /// Special card.
    SpecialCard,
    /// Online referenced payment.
    BankReferenced,
    /// PayU global network payment.
    PayuGlobalPayment,
    /// Bank transfer.
    BankTransfer,
    /// External wallet.
    Wallet,
}

impl PaymentMethodType {
    /// Every catalog entry, in declaration order.
    pub const ALL: &'static [Self] = &[
        Self::CreditCard,
        Self::Pse,
        Self::Cash,
        Self::CashOnDelivery,
        Self::Lending,
        Self::Referenced,
        Self::CheckAccount,
        Self::VerifiedByVisa,
        Self::Ach,
        Self::DebitCard,
        Self::SpecialCard,
        Self::BankReferenced,
        Self::PayuGlobalPayment,
        Self::BankTransfer,
        Self::Wallet,
    ];

    /// Returns the symbolic name of this entry.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CreditCard => "CREDIT_CARD",
            Self::Pse => "PSE",
            Self::Cash => "CASH",
            Self::CashOnDelivery => "CASH_ON_DELIVERY",
            Self::Lending => "LENDING",
            Self::Referenced => "REFERENCED",
            Self::CheckAccount => "CHECK_ACCOUNT",
            Self::VerifiedByVisa => "VERIFIED_BY_VISA",
            Self::Ach => "ACH",
            Self::DebitCard => "DEBIT_CARD",
            Self::SpecialCard => "SPECIAL_CARD",
            Self::BankReferenced => "BANK_REFERENCED",
            Self::PayuGlobalPayment => "PAYU_GLOBAL_PAYMENT",
            Self::BankTransfer => "BANK_TRANSFER",
            Self::Wallet => "WALLET",
        }
    }

    /// Returns the numeric identifier used by the gateway.
    #[must_use]
    pub const fn id(&self) -> u32 {
        match self {
            Self::CheckAccount => 1,
            Self::CreditCard => 2,
            Self::VerifiedByVisa => 3,
            Self::Pse => 4,
            Self::Ach => 5,
            Self::DebitCard => 6,
            Self::Cash => 7,
            Self::Referenced => 8,
            Self::SpecialCard => 9,
            Self::BankReferenced => 10,
            Self::CashOnDelivery => 11,
            Self::PayuGlobalPayment => 12,
            Self::Lending => 13,
            Self::BankTransfer => 14,
            Self::Wallet => 15,
        }
    }

    /// Returns the wire description.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::PayuGlobalPayment => "GLOBAL_PAYMENT",
            other => other.name(),
        }
    }

    /// Returns the anti-fraud skipping flag.
    #[must_use]
    pub const fn anti_fraud_skipping(&self) -> AntiFraudSkipping {
        match self {
            Self::Cash
            | Self::CashOnDelivery
            | Self::Ach
            | Self::BankReferenced
            | Self::PayuGlobalPayment
            | Self::BankTransfer
            | Self::Wallet => AntiFraudSkipping::Skipped,
            Self::Lending => AntiFraudSkipping::NotSkipped,
            Self::CreditCard
            | Self::Pse
            | Self::Referenced
            | Self::CheckAccount
            | Self::VerifiedByVisa
            | Self::DebitCard
            | Self::SpecialCard => AntiFraudSkipping::Unspecified,
        }
    }

    /// Looks up an entry by its symbolic name.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownValueError`] if no entry has this exact name.
    pub fn from_name(name: &str) -> Result<Self, UnknownValueError> {
        Self::ALL
            .iter()
            .copied()
            .find(|ty| ty.name() == name)
            .ok_or_else(|| UnknownValueError::new("payment method type", name))
    }

    /// Looks up an entry by its numeric identifier.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownValueError`] if no entry has this identifier.
    pub fn from_id(id: u32) -> Result<Self, UnknownValueError> {
        Self::ALL
            .iter()
            .copied()
            .find(|ty| ty.id() == id)
            .ok_or_else(|| UnknownValueError::new("payment method type id", id.to_string()))
    }

    /// Looks up an entry by its wire description.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownValueError`] if no entry has this exact description.
    pub fn from_description(description: &str) -> Result<Self, UnknownValueError> {
        Self::ALL
            .iter()
            .copied()
            .find(|ty| ty.description() == description)
            .ok_or_else(|| UnknownValueError::new("payment method description", description))
    }
}

impl fmt::Display for PaymentMethodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaymentMethodType {
    type Err = UnknownValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl Serialize for PaymentMethodType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.description())
    }
}

impl<'de> Deserialize<'de> for PaymentMethodType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_description(&s).map_err(de::Error::custom)
    }
}
