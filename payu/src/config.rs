//! SDK configuration and the precedence merge.
//!
//! The SDK holds no process-wide state. A [`Config`] value is passed into
//! every builder call and merged with the per-call [`Parameters`] by
//! [`resolve`]: a value set on the config wins, otherwise the parameter is
//! used, otherwise the setting stays unset.

use std::collections::HashMap;

use payu_proto::{Language, Merchant};
use url::Url;

use crate::error::RequestError;

/// Per-call parameters, keyed by the names in [`parameters`].
pub type Parameters = HashMap<String, String>;

/// Well-known parameter keys.
pub mod parameters {
    /// Merchant API key.
    pub const API_KEY: &str = "apiKey";
    /// Merchant API login.
    pub const API_LOGIN: &str = "apiLogin";
    /// Language code (`es`, `en`, `pt`).
    pub const LANGUAGE: &str = "language";
    /// Transaction source (`PAYU_SDK`, `OCCS_API`).
    pub const TRANSACTION_SOURCE: &str = "transactionSource";
    /// Transaction identifier.
    pub const TRANSACTION_ID: &str = "transactionId";
    /// Order identifier.
    pub const ORDER_ID: &str = "orderId";
    /// Merchant reference code of an order.
    pub const REFERENCE_CODE: &str = "referenceCode";
    /// Merchant account identifier.
    pub const ACCOUNT_ID: &str = "accountId";
    /// Order description.
    pub const DESCRIPTION: &str = "description";
    /// Payment method name, e.g. `CREDIT_CARD`.
    pub const PAYMENT_METHOD: &str = "paymentMethod";
    /// Payment request identifier.
    pub const PAYMENT_REQUEST_ID: &str = "paymentRequestId";
    /// Recurring bill identifier.
    pub const RECURRING_BILL_ID: &str = "recurringBillId";
}

/// Production payments API.
pub const PRODUCTION_PAYMENTS_URL: &str = "https://api.payulatam.com/payments-api";
/// Production reports API.
pub const PRODUCTION_REPORTS_URL: &str = "https://api.payulatam.com/reports-api";
/// Sandbox payments API.
pub const SANDBOX_PAYMENTS_URL: &str = "https://sandbox.api.payulatam.com/payments-api";
/// Sandbox reports API.
pub const SANDBOX_REPORTS_URL: &str = "https://sandbox.api.payulatam.com/reports-api";

/// Gateway deployment the base URLs point at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    /// Live gateway.
    #[default]
    Production,
    /// Test gateway.
    Sandbox,
}

impl Environment {
    /// Base URL of the payments API.
    #[must_use]
    pub const fn payments_url(&self) -> &'static str {
        match self {
            Self::Production => PRODUCTION_PAYMENTS_URL,
            Self::Sandbox => SANDBOX_PAYMENTS_URL,
        }
    }

    /// Base URL of the reports API.
    #[must_use]
    pub const fn reports_url(&self) -> &'static str {
        match self {
            Self::Production => PRODUCTION_REPORTS_URL,
            Self::Sandbox => SANDBOX_REPORTS_URL,
        }
    }

    /// Base URL of the payment plan API. Payment plans are served by the
    /// payments API under their own version.
    #[must_use]
    pub const fn payment_plan_url(&self) -> &'static str {
        self.payments_url()
    }
}

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable held a value that could not be parsed.
    #[error("invalid value {value:?} for {name}")]
    InvalidValue {
        /// Variable name.
        name: &'static str,
        /// Value as found.
        value: String,
    },

    /// A base URL override is not a valid URL.
    #[error("invalid URL in {name}: {source}")]
    InvalidUrl {
        /// Variable name.
        name: &'static str,
        /// Parse failure.
        #[source]
        source: url::ParseError,
    },
}

/// Explicit SDK configuration.
///
/// Credentials and language set here take precedence over per-call
/// parameters. Base URLs are stored verbatim, without trailing-slash
/// normalization.
///
/// # Example
///
/// ```rust
/// use payu::config::{Config, Environment};
/// use payu_proto::Language;
///
/// let config = Config::new(Environment::Sandbox)
///     .with_api_key("4Vj8eK4rloUd272L48hsrarnUA")
///     .with_api_login("pRRXKOl8ikMmt9u")
///     .with_language(Language::Es)
///     .with_test(true);
/// assert_eq!(config.reports_url, "https://sandbox.api.payulatam.com/reports-api");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Merchant API key.
    pub api_key: Option<String>,
    /// Merchant API login.
    pub api_login: Option<String>,
    /// Merchant identifier.
    pub merchant_id: Option<String>,
    /// Default language.
    pub language: Option<Language>,
    /// Whether requests are flagged as tests.
    pub is_test: bool,
    /// Payments API base URL.
    pub payments_url: String,
    /// Reports API base URL.
    pub reports_url: String,
    /// Payment plan API base URL.
    pub payment_plan_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Environment::default())
    }
}

impl Config {
    /// Creates an empty configuration pointing at `environment`.
    #[must_use]
    pub fn new(environment: Environment) -> Self {
        Self {
            api_key: None,
            api_login: None,
            merchant_id: None,
            language: None,
            is_test: false,
            payments_url: environment.payments_url().to_owned(),
            reports_url: environment.reports_url().to_owned(),
            payment_plan_url: environment.payment_plan_url().to_owned(),
        }
    }

    /// Sets the API key.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the API login.
    #[must_use]
    pub fn with_api_login(mut self, api_login: impl Into<String>) -> Self {
        self.api_login = Some(api_login.into());
        self
    }

    /// Sets the merchant identifier.
    #[must_use]
    pub fn with_merchant_id(mut self, merchant_id: impl Into<String>) -> Self {
        self.merchant_id = Some(merchant_id.into());
        self
    }

    /// Sets the default language.
    #[must_use]
    pub const fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Sets the test flag.
    #[must_use]
    pub const fn with_test(mut self, is_test: bool) -> Self {
        self.is_test = is_test;
        self
    }

    /// Overrides the payments API base URL.
    #[must_use]
    pub fn with_payments_url(mut self, url: impl Into<String>) -> Self {
        self.payments_url = url.into();
        self
    }

    /// Overrides the reports API base URL.
    #[must_use]
    pub fn with_reports_url(mut self, url: impl Into<String>) -> Self {
        self.reports_url = url.into();
        self
    }

    /// Overrides the payment plan API base URL.
    #[must_use]
    pub fn with_payment_plan_url(mut self, url: impl Into<String>) -> Self {
        self.payment_plan_url = url.into();
        self
    }

    /// Loads configuration from the process environment.
    ///
    /// Reads `PAYU_API_KEY`, `PAYU_API_LOGIN`, `PAYU_MERCHANT_ID`,
    /// `PAYU_LANGUAGE` and `PAYU_TEST`. When `PAYU_TEST` is `true` the sandbox
    /// URLs are used, unless overridden by `PAYU_PAYMENTS_URL`,
    /// `PAYU_REPORTS_URL` or `PAYU_PAYMENT_PLAN_URL`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set to an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through `lookup`, with the same variables as
    /// [`Config::from_env`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set to an unparseable value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let is_test = match lookup("PAYU_TEST") {
            Some(value) => value
                .parse::<bool>()
                .map_err(|_| ConfigError::InvalidValue {
                    name: "PAYU_TEST",
                    value,
                })?,
            None => false,
        };
        let environment = if is_test {
            Environment::Sandbox
        } else {
            Environment::Production
        };

        let mut config = Self::new(environment).with_test(is_test);
        config.api_key = lookup("PAYU_API_KEY");
        config.api_login = lookup("PAYU_API_LOGIN");
        config.merchant_id = lookup("PAYU_MERCHANT_ID");

        if let Some(value) = lookup("PAYU_LANGUAGE") {
            let language = value.parse().map_err(|_| ConfigError::InvalidValue {
                name: "PAYU_LANGUAGE",
                value,
            })?;
            config.language = Some(language);
        }

        if let Some(url) = base_url_override(&lookup, "PAYU_PAYMENTS_URL")? {
            config.payments_url = url;
        }
        if let Some(url) = base_url_override(&lookup, "PAYU_REPORTS_URL")? {
            config.reports_url = url;
        }
        if let Some(url) = base_url_override(&lookup, "PAYU_PAYMENT_PLAN_URL")? {
            config.payment_plan_url = url;
        }

        Ok(config)
    }
}

fn base_url_override<F>(lookup: &F, name: &'static str) -> Result<Option<String>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(name) else {
        return Ok(None);
    };
    Url::parse(&value).map_err(|source| ConfigError::InvalidUrl { name, source })?;
    Ok(Some(value))
}

/// Settings in effect for one request, after the precedence merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Merchant credentials. Either credential may be unset.
    pub merchant: Merchant,
    /// Language, if set anywhere.
    pub language: Option<Language>,
    /// Test flag, from the config.
    pub is_test: bool,
}

/// Merges `config` with per-call `params`.
///
/// For the API key, the API login and the language: the config value wins
/// when set, otherwise the parameter is used, otherwise the setting is unset.
/// A language parameter is only parsed when the config has no language.
///
/// # Errors
///
/// Returns [`RequestError::InvalidParameter`] if the language parameter is
/// consulted and is not a known language code.
pub fn resolve(config: &Config, params: &Parameters) -> Result<Settings, RequestError> {
    let api_key = pick(config.api_key.as_deref(), params, parameters::API_KEY);
    let api_login = pick(config.api_login.as_deref(), params, parameters::API_LOGIN);

    let language = match config.language {
        Some(language) => Some(language),
        None => params
            .get(parameters::LANGUAGE)
            .map(|value| {
                value
                    .parse::<Language>()
                    .map_err(|_| RequestError::invalid(parameters::LANGUAGE, value.as_str()))
            })
            .transpose()?,
    };

    Ok(Settings {
        merchant: Merchant { api_key, api_login },
        language,
        is_test: config.is_test,
    })
}

fn pick(configured: Option<&str>, params: &Parameters, key: &'static str) -> Option<String> {
    match configured {
        Some(value) => {
            #[cfg(feature = "telemetry")]
            {
                if params.contains_key(key) {
                    tracing::debug!(parameter = key, "configured value overrides call parameter");
                }
            }
            Some(value.to_owned())
        }
        None => params.get(key).cloned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(entries: &[(&str, &str)]) -> Parameters {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    fn env(entries: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |name| {
            entries
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| (*v).to_owned())
        }
    }

    #[test]
    fn test_credentials_from_config_only() {
        let config = Config::default().with_api_key("apikey").with_api_login("apilogin");
        let settings = resolve(&config, &Parameters::new()).unwrap();
        assert_eq!(settings.merchant, Merchant::new("apikey", "apilogin"));
    }

    #[test]
    fn test_credentials_from_parameters_only() {
        let settings = resolve(
            &Config::default(),
            &params(&[("apiKey", "apikeyParam"), ("apiLogin", "apiloginParam")]),
        )
        .unwrap();
        assert_eq!(settings.merchant, Merchant::new("apikeyParam", "apiloginParam"));
    }

    #[test]
    fn test_config_credentials_win_over_parameters() {
        let config = Config::default().with_api_key("apikey").with_api_login("apilogin");
        let settings = resolve(
            &config,
            &params(&[("apiKey", "apikeyParams"), ("apiLogin", "apiloginParams")]),
        )
        .unwrap();
        assert_eq!(settings.merchant, Merchant::new("apikey", "apilogin"));
    }

    #[test]
    fn test_credentials_resolve_independently() {
        let config = Config::default().with_api_key("apikey");
        let settings = resolve(&config, &params(&[("apiLogin", "apiloginParam")])).unwrap();
        assert_eq!(settings.merchant, Merchant::new("apikey", "apiloginParam"));
    }

    #[test]
    fn test_language_precedence() {
        let cases = [
            (None, None, None),
            (Some(Language::En), None, Some(Language::En)),
            (None, Some("pt"), Some(Language::Pt)),
            (Some(Language::Es), Some("en"), Some(Language::Es)),
        ];
        for (configured, param, expected) in cases {
            let mut config = Config::default();
            config.language = configured;
            let call = param.map_or_else(Parameters::new, |p| params(&[("language", p)]));
            assert_eq!(resolve(&config, &call).unwrap().language, expected);
        }
    }

    #[test]
    fn test_invalid_language_parameter() {
        let err = resolve(&Config::default(), &params(&[("language", "ES")])).unwrap_err();
        assert!(matches!(
            err,
            RequestError::InvalidParameter { name: "language", ref value } if value == "ES"
        ));
    }

    #[test]
    fn test_invalid_language_parameter_ignored_when_configured() {
        let config = Config::default().with_language(Language::Es);
        let settings = resolve(&config, &params(&[("language", "klingon")])).unwrap();
        assert_eq!(settings.language, Some(Language::Es));
    }

    #[test]
    fn test_defaults_point_at_production() {
        let config = Config::default();
        assert_eq!(config.payments_url, PRODUCTION_PAYMENTS_URL);
        assert_eq!(config.reports_url, PRODUCTION_REPORTS_URL);
        assert_eq!(config.payment_plan_url, PRODUCTION_PAYMENTS_URL);
        assert!(!config.is_test);
    }

    #[test]
    fn test_setters_override_environment_urls() {
        let config = Config::new(Environment::Sandbox)
            .with_merchant_id("508029")
            .with_payments_url("http://localhost:8080/payments")
            .with_payment_plan_url("http://localhost:8080/plans");
        assert_eq!(config.merchant_id.as_deref(), Some("508029"));
        assert_eq!(config.payments_url, "http://localhost:8080/payments");
        assert_eq!(config.payment_plan_url, "http://localhost:8080/plans");
        assert_eq!(config.reports_url, SANDBOX_REPORTS_URL);
    }

    #[test]
    fn test_from_lookup_reads_variables() {
        let config = Config::from_lookup(env(&[
            ("PAYU_API_KEY", "key"),
            ("PAYU_API_LOGIN", "login"),
            ("PAYU_MERCHANT_ID", "508029"),
            ("PAYU_LANGUAGE", "en"),
            ("PAYU_TEST", "true"),
            ("PAYU_REPORTS_URL", "http://localhost:8080/reports/"),
        ]))
        .unwrap();

        assert_eq!(config.api_key.as_deref(), Some("key"));
        assert_eq!(config.api_login.as_deref(), Some("login"));
        assert_eq!(config.merchant_id.as_deref(), Some("508029"));
        assert_eq!(config.language, Some(Language::En));
        assert!(config.is_test);
        assert_eq!(config.payments_url, SANDBOX_PAYMENTS_URL);
        assert_eq!(config.reports_url, "http://localhost:8080/reports/");
    }

    #[test]
    fn test_from_lookup_empty_environment() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_from_lookup_rejects_bad_values() {
        let err = Config::from_lookup(env(&[("PAYU_TEST", "yes")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { name: "PAYU_TEST", .. }));

        let err = Config::from_lookup(env(&[("PAYU_LANGUAGE", "fr")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { name: "PAYU_LANGUAGE", .. }));

        let err = Config::from_lookup(env(&[("PAYU_PAYMENTS_URL", "not a url")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { name: "PAYU_PAYMENTS_URL", .. }));
    }
}
