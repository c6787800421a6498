#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Request models and URL construction for the PayU Latam API.
//!
//! This crate prepares requests for the PayU gateway and leaves sending them
//! to the caller's HTTP client. Wire types live in [`payu_proto`].
//!
//! # Overview
//!
//! Every request kind implements [`Request`], which composes the target URL
//! from a base URL and an HTTP method. Command requests post to the gateway's
//! service endpoint; payment plan and payment request resources are addressed
//! by REST paths built from [`UrlPattern`] templates.
//!
//! Builders in [`builder`] merge an explicit [`Config`] with per-call
//! parameters. Credentials and language set on the config win over the
//! parameters.
//!
//! ```rust
//! use payu::{Config, Request, RequestMethod, builder, config::Parameters};
//!
//! let config = Config::default().with_api_key("key").with_api_login("login");
//! let mut params = Parameters::new();
//! params.insert("transactionId".to_owned(), "tx-1".to_owned());
//!
//! let request = builder::confirmation_page(&config, &params)?;
//! let url = request.request_url(&config.payment_plan_url, RequestMethod::Post)?;
//! assert_eq!(url, "https://api.payulatam.com/payments-api/rest/v4.9/sendConfirmationPage/tx-1");
//! # Ok::<(), payu::RequestError>(())
//! ```
//!
//! # Modules
//!
//! - [`builder`] - Request builders driven by config and parameters
//! - [`config`] - Configuration and the precedence merge
//! - [`pattern`] - URL templates
//! - [`request`] - Request kinds and the [`RequestDescriptor`] union
//! - [`resources`] - API versions and collection names
//!
//! # Feature Flags
//!
//! - `telemetry` - Enables tracing instrumentation of builders and URL resolution

pub mod builder;
pub mod config;
pub mod error;
pub mod pattern;
pub mod request;
pub mod resources;

pub use config::{Config, Environment};
pub use error::RequestError;
pub use pattern::UrlPattern;
pub use request::{CommandRequest, Request, RequestDescriptor};
pub use resources::RequestMethod;

pub use payu_proto as proto;
