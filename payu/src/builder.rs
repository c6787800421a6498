//! Request builders.
//!
//! Each builder merges an explicit [`Config`] with per-call [`Parameters`]
//! and returns a ready request. Parameter keys are listed in
//! [`parameters`](crate::config::parameters).

use std::str::FromStr;

use payu_proto::{
    Command, Order, PaymentMethodType, Transaction, TransactionSource, TransactionType,
};

#[cfg(feature = "telemetry")]
use tracing::instrument;

use crate::config::{Config, Parameters, parameters, resolve};
use crate::error::RequestError;
use crate::request::{
    CommandRequest, ConfirmationPageRequest, PaymentAttemptRequest, PaymentRequest,
    RecurringBillPaymentRetry, RecurringBillRequest, ReportingDetails, ReportingRequest,
};

/// Builds a payments `PING`.
///
/// # Errors
///
/// Returns [`RequestError::InvalidParameter`] for an unknown language.
#[cfg_attr(feature = "telemetry", instrument(name = "payu.build.payments_ping", skip_all, err))]
pub fn payments_ping(config: &Config, params: &Parameters) -> Result<PaymentRequest, RequestError> {
    command(config, params, Command::Ping)
}

/// Builds a `GET_PAYMENT_METHODS` request.
///
/// # Errors
///
/// Returns [`RequestError::InvalidParameter`] for an unknown language.
#[cfg_attr(
    feature = "telemetry",
    instrument(name = "payu.build.payment_methods_list", skip_all, err)
)]
pub fn payment_methods_list(
    config: &Config,
    params: &Parameters,
) -> Result<PaymentRequest, RequestError> {
    command(config, params, Command::GetPaymentMethods)
}

/// Builds a `SUBMIT_TRANSACTION` of type `transaction_type`.
///
/// For transaction types that carry an order, the resolved language is
/// also set on the order.
///
/// # Errors
///
/// Returns [`RequestError::InvalidParameter`] if a parameter cannot be parsed.
#[cfg_attr(
    feature = "telemetry",
    instrument(
        name = "payu.build.payment_request",
        skip_all,
        fields(transaction_type = %transaction_type),
        err
    )
)]
pub fn payment_request(
    config: &Config,
    params: &Parameters,
    transaction_type: TransactionType,
) -> Result<PaymentRequest, RequestError> {
    let mut request: PaymentRequest = command(config, params, Command::SubmitTransaction)?;
    let mut tx = transaction(params, Some(transaction_type))?;
    if let Some(order) = tx.order.as_mut() {
        order.language = request.language;
    }
    request.transaction = Some(tx);
    Ok(request)
}

/// Builds a transaction from `params`.
///
/// The source is taken from the `transactionSource` parameter and defaults
/// to [`TransactionSource::PayuSdk`], whatever the type. An order is attached
/// when `transaction_type` carries one.
///
/// # Errors
///
/// Returns [`RequestError::InvalidParameter`] if the source, the payment
/// method or the account id cannot be parsed.
pub fn transaction(
    params: &Parameters,
    transaction_type: Option<TransactionType>,
) -> Result<Transaction, RequestError> {
    let source: Option<TransactionSource> = parse(params, parameters::TRANSACTION_SOURCE)?;
    let payment_method: Option<PaymentMethodType> = parse(params, parameters::PAYMENT_METHOD)?;

    let order = match transaction_type {
        Some(ty) if ty.carries_order() => Some(Order {
            account_id: parse(params, parameters::ACCOUNT_ID)?,
            reference_code: params.get(parameters::REFERENCE_CODE).cloned(),
            description: params.get(parameters::DESCRIPTION).cloned(),
            language: None,
        }),
        _ => None,
    };

    Ok(Transaction {
        transaction_type,
        source: source.unwrap_or_default(),
        payment_method,
        order,
        parent_transaction_id: params.get(parameters::TRANSACTION_ID).cloned(),
    })
}

/// Builds a reports `PING`.
///
/// # Errors
///
/// Returns [`RequestError::InvalidParameter`] for an unknown language.
#[cfg_attr(feature = "telemetry", instrument(name = "payu.build.reporting_ping", skip_all, err))]
pub fn reporting_ping(
    config: &Config,
    params: &Parameters,
) -> Result<ReportingRequest, RequestError> {
    command(config, params, Command::Ping)
}

/// Builds an `ORDER_DETAIL` query from the `orderId` parameter.
///
/// Unlike the Java SDK, which sends the query with a null order id when the
/// parameter is missing, the order id is required here: a detail query
/// without one addresses nothing.
///
/// # Errors
///
/// Returns [`RequestError::MissingParameter`] without an order id, or
/// [`RequestError::InvalidParameter`] if it is not numeric.
#[cfg_attr(
    feature = "telemetry",
    instrument(name = "payu.build.order_reporting_details", skip_all, err)
)]
pub fn order_reporting_details(
    config: &Config,
    params: &Parameters,
) -> Result<ReportingRequest, RequestError> {
    let order_id: u64 = parse(params, parameters::ORDER_ID)?
        .ok_or(RequestError::MissingParameter(parameters::ORDER_ID))?;
    reporting(
        config,
        params,
        Command::OrderDetail,
        ReportingDetails {
            order_id: Some(order_id),
            ..ReportingDetails::default()
        },
    )
}

/// Builds an `ORDER_DETAIL_BY_REFERENCE_CODE` query from the
/// `referenceCode` parameter.
///
/// # Errors
///
/// Returns [`RequestError::MissingParameter`] without a reference code.
#[cfg_attr(
    feature = "telemetry",
    instrument(name = "payu.build.order_reporting_by_reference_code", skip_all, err)
)]
pub fn order_reporting_by_reference_code(
    config: &Config,
    params: &Parameters,
) -> Result<ReportingRequest, RequestError> {
    let reference_code = required(params, parameters::REFERENCE_CODE)?;
    reporting(
        config,
        params,
        Command::OrderDetailByReferenceCode,
        ReportingDetails {
            reference_code: Some(reference_code.to_owned()),
            ..ReportingDetails::default()
        },
    )
}

/// Builds a `TRANSACTION_RESPONSE_DETAIL` query from the `transactionId`
/// parameter.
///
/// # Errors
///
/// Returns [`RequestError::MissingParameter`] without a transaction id.
#[cfg_attr(
    feature = "telemetry",
    instrument(name = "payu.build.transaction_response", skip_all, err)
)]
pub fn transaction_response(
    config: &Config,
    params: &Parameters,
) -> Result<ReportingRequest, RequestError> {
    let transaction_id = required(params, parameters::TRANSACTION_ID)?;
    reporting(
        config,
        params,
        Command::TransactionResponseDetail,
        ReportingDetails {
            transaction_id: Some(transaction_id.to_owned()),
            ..ReportingDetails::default()
        },
    )
}

/// Builds a confirmation page resend for the `transactionId` parameter.
///
/// # Errors
///
/// Returns [`RequestError::MissingParameter`] without a transaction id.
#[cfg_attr(
    feature = "telemetry",
    instrument(name = "payu.build.confirmation_page", skip_all, err)
)]
pub fn confirmation_page(
    config: &Config,
    params: &Parameters,
) -> Result<ConfirmationPageRequest, RequestError> {
    let transaction_id = required(params, parameters::TRANSACTION_ID)?;
    let mut request = ConfirmationPageRequest::new(transaction_id);
    request.apply(&resolve(config, params)?);
    Ok(request)
}

/// Builds a payment attempt against the `paymentRequestId` parameter.
///
/// # Errors
///
/// Returns [`RequestError::MissingParameter`] without a payment request id,
/// or [`RequestError::InvalidParameter`] if a parameter cannot be parsed.
#[cfg_attr(
    feature = "telemetry",
    instrument(name = "payu.build.payment_attempt", skip_all, err)
)]
pub fn payment_attempt(
    config: &Config,
    params: &Parameters,
) -> Result<PaymentAttemptRequest, RequestError> {
    let payment_request_id: u32 = parse(params, parameters::PAYMENT_REQUEST_ID)?
        .ok_or(RequestError::MissingParameter(parameters::PAYMENT_REQUEST_ID))?;
    let mut request = PaymentAttemptRequest::new(payment_request_id);
    request.apply(&resolve(config, params)?);
    request.set_command(Command::SubmitTransaction);
    request.transaction = Some(transaction(params, None)?);
    Ok(request)
}

/// Builds a payment retry for the `recurringBillId` parameter.
///
/// # Errors
///
/// Returns [`RequestError::MissingParameter`] without a recurring bill id.
pub fn recurring_bill_payment_retry(
    params: &Parameters,
) -> Result<RecurringBillPaymentRetry, RequestError> {
    required(params, parameters::RECURRING_BILL_ID).map(RecurringBillPaymentRetry::new)
}

/// Builds a recurring bill request; the `recurringBillId` parameter is
/// optional.
#[must_use]
pub fn recurring_bill(params: &Parameters) -> RecurringBillRequest {
    RecurringBillRequest {
        id: params.get(parameters::RECURRING_BILL_ID).cloned(),
    }
}

fn command<T>(config: &Config, params: &Parameters, code: Command) -> Result<T, RequestError>
where
    T: CommandRequest + Default,
{
    let settings = resolve(config, params)?;
    let mut request = T::default();
    request.apply(&settings);
    request.set_command(code);
    Ok(request)
}

fn reporting(
    config: &Config,
    params: &Parameters,
    command_code: Command,
    details: ReportingDetails,
) -> Result<ReportingRequest, RequestError> {
    let mut request: ReportingRequest = command(config, params, command_code)?;
    request.details = Some(details);
    Ok(request)
}

fn required<'a>(params: &'a Parameters, key: &'static str) -> Result<&'a str, RequestError> {
    params
        .get(key)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
        .ok_or(RequestError::MissingParameter(key))
}

fn parse<T: FromStr>(params: &Parameters, key: &'static str) -> Result<Option<T>, RequestError> {
    params
        .get(key)
        .map(|value| {
            value
                .parse()
                .map_err(|_| RequestError::invalid(key, value.as_str()))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use payu_proto::{Language, Merchant};

    use super::*;

    const ORDER_TYPES: [TransactionType; 6] = [
        TransactionType::Authorization,
        TransactionType::AuthorizationAndCapture,
        TransactionType::Capture,
        TransactionType::Void,
        TransactionType::Refund,
        TransactionType::PartialRefund,
    ];

    fn params(entries: &[(&str, &str)]) -> Parameters {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    fn language_cases() -> Vec<(Option<Language>, Parameters, Option<Language>)> {
        vec![
            (None, Parameters::new(), None),
            (Some(Language::En), Parameters::new(), Some(Language::En)),
            (None, params(&[("language", "pt")]), Some(Language::Pt)),
            (Some(Language::Es), params(&[("language", "en")]), Some(Language::Es)),
        ]
    }

    fn config_with(language: Option<Language>) -> Config {
        let mut config = Config::default();
        config.language = language;
        config
    }

    #[test]
    fn test_order_reporting_details_credentials_from_config() {
        let config = Config::default().with_api_key("apikey").with_api_login("apilogin");
        let request = order_reporting_details(&config, &params(&[("orderId", "1")])).unwrap();
        assert_eq!(request.merchant, Some(Merchant::new("apikey", "apilogin")));
    }

    #[test]
    fn test_order_reporting_details_credentials_from_parameters() {
        let request = order_reporting_details(
            &Config::default(),
            &params(&[
                ("orderId", "1"),
                ("apiKey", "apikeyParam"),
                ("apiLogin", "apiloginParam"),
            ]),
        )
        .unwrap();
        assert_eq!(
            request.merchant,
            Some(Merchant::new("apikeyParam", "apiloginParam"))
        );
    }

    #[test]
    fn test_order_reporting_details_config_credentials_win() {
        let config = Config::default().with_api_key("apikey").with_api_login("apilogin");
        let request = order_reporting_details(
            &config,
            &params(&[
                ("orderId", "1"),
                ("apiKey", "apikeyParams"),
                ("apiLogin", "apiloginParams"),
            ]),
        )
        .unwrap();
        assert_eq!(request.merchant, Some(Merchant::new("apikey", "apilogin")));
        assert_eq!(request.command, Some(Command::OrderDetail));
        assert_eq!(request.details.unwrap().order_id, Some(1));
    }

    #[test]
    fn test_transaction_source_resolution() {
        let types = std::iter::once(None).chain(TransactionType::ALL.iter().copied().map(Some));
        for ty in types {
            let cases = [
                (Parameters::new(), TransactionSource::PayuSdk),
                (
                    params(&[("transactionSource", "PAYU_SDK")]),
                    TransactionSource::PayuSdk,
                ),
                (
                    params(&[("transactionSource", "OCCS_API")]),
                    TransactionSource::OccsApi,
                ),
            ];
            for (call, expected) in cases {
                assert_eq!(transaction(&call, ty).unwrap().source, expected, "{ty:?}");
            }
        }
    }

    #[test]
    fn test_invalid_transaction_source() {
        let err = transaction(&params(&[("transactionSource", "occs_api")]), None).unwrap_err();
        assert!(matches!(
            err,
            RequestError::InvalidParameter { name: "transactionSource", .. }
        ));
    }

    #[test]
    fn test_command_builders_resolve_language() {
        for (configured, call, expected) in language_cases() {
            let config = config_with(configured);
            let with_ids = {
                let mut p = call.clone();
                p.insert("orderId".to_owned(), "1".to_owned());
                p.insert("referenceCode".to_owned(), "ref".to_owned());
                p.insert("transactionId".to_owned(), "tx".to_owned());
                p.insert("paymentRequestId".to_owned(), "9".to_owned());
                p
            };

            assert_eq!(reporting_ping(&config, &call).unwrap().language, expected);
            assert_eq!(payments_ping(&config, &call).unwrap().language, expected);
            assert_eq!(payment_methods_list(&config, &call).unwrap().language, expected);
            assert_eq!(
                order_reporting_details(&config, &with_ids).unwrap().language,
                expected
            );
            assert_eq!(
                order_reporting_by_reference_code(&config, &with_ids)
                    .unwrap()
                    .language,
                expected
            );
            assert_eq!(
                transaction_response(&config, &with_ids).unwrap().language,
                expected
            );
            assert_eq!(confirmation_page(&config, &with_ids).unwrap().language, expected);
            assert_eq!(payment_attempt(&config, &with_ids).unwrap().language, expected);
        }
    }

    #[test]
    fn test_payment_request_propagates_language_to_order() {
        for (configured, call, expected) in language_cases() {
            let config = config_with(configured);
            for ty in TransactionType::ALL.iter().copied() {
                let request = payment_request(&config, &call, ty).unwrap();
                assert_eq!(request.language, expected);
                assert_eq!(request.command, Some(Command::SubmitTransaction));

                let tx = request.transaction.unwrap();
                assert_eq!(tx.transaction_type, Some(ty));
                if ORDER_TYPES.contains(&ty) {
                    assert_eq!(tx.order.unwrap().language, expected, "{ty}");
                } else {
                    assert!(tx.order.is_none(), "{ty}");
                }
            }
        }
    }

    #[test]
    fn test_payment_request_reads_transaction_parameters() {
        let call = params(&[
            ("accountId", "512321"),
            ("referenceCode", "ord-7"),
            ("description", "test order"),
            ("paymentMethod", "CREDIT_CARD"),
            ("transactionId", "tx-parent"),
        ]);
        let request = payment_request(&Config::default(), &call, TransactionType::Refund).unwrap();
        let tx = request.transaction.unwrap();
        assert_eq!(tx.payment_method, Some(PaymentMethodType::CreditCard));
        assert_eq!(tx.parent_transaction_id.as_deref(), Some("tx-parent"));
        let order = tx.order.unwrap();
        assert_eq!(order.account_id, Some(512_321));
        assert_eq!(order.reference_code.as_deref(), Some("ord-7"));
        assert_eq!(order.description.as_deref(), Some("test order"));
    }

    #[test]
    fn test_invalid_numeric_parameters() {
        let err = payment_request(
            &Config::default(),
            &params(&[("accountId", "abc")]),
            TransactionType::Authorization,
        )
        .unwrap_err();
        assert!(matches!(err, RequestError::InvalidParameter { name: "accountId", .. }));

        let err = order_reporting_details(&Config::default(), &params(&[("orderId", "-1")]))
            .unwrap_err();
        assert!(matches!(err, RequestError::InvalidParameter { name: "orderId", .. }));
    }

    #[test]
    fn test_missing_parameters() {
        let config = Config::default();
        let empty = Parameters::new();
        let missing = |err: RequestError| match err {
            RequestError::MissingParameter(name) => name,
            other => panic!("unexpected error: {other}"),
        };

        assert_eq!(missing(order_reporting_details(&config, &empty).unwrap_err()), "orderId");
        assert_eq!(
            missing(order_reporting_by_reference_code(&config, &empty).unwrap_err()),
            "referenceCode"
        );
        assert_eq!(missing(transaction_response(&config, &empty).unwrap_err()), "transactionId");
        assert_eq!(missing(confirmation_page(&config, &empty).unwrap_err()), "transactionId");
        assert_eq!(missing(payment_attempt(&config, &empty).unwrap_err()), "paymentRequestId");
        assert_eq!(
            missing(recurring_bill_payment_retry(&params(&[("recurringBillId", "")])).unwrap_err()),
            "recurringBillId"
        );
    }

    #[test]
    fn test_payment_plan_builders() {
        let retry =
            recurring_bill_payment_retry(&params(&[("recurringBillId", "abc123")])).unwrap();
        assert_eq!(retry.recurring_bill_id, "abc123");

        assert_eq!(recurring_bill(&Parameters::new()).id, None);
        assert_eq!(
            recurring_bill(&params(&[("recurringBillId", "rb-1")])).id.as_deref(),
            Some("rb-1")
        );
    }

    #[test]
    fn test_payment_attempt_builder() {
        let config = Config::default().with_test(true);
        let request = payment_attempt(&config, &params(&[("paymentRequestId", "42")])).unwrap();
        assert_eq!(request.payment_request_id, Some(42));
        assert_eq!(request.command, Some(Command::SubmitTransaction));
        assert!(request.is_test);
        assert_eq!(
            request.transaction.unwrap().source,
            TransactionSource::PayuSdk
        );
    }
}
