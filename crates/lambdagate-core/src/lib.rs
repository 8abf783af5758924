//! lambdagate-core — transport-agnostic request/response model.
//!
//! Defines the records an HTTP operation engine consumes and produces,
//! independent of any serverless platform:
//!
//! - [`RawRequest`]: method, path, query and headers as [`StringParams`],
//!   and a decoded [`Body`].
//! - [`RawResponse`]: status code, headers, optional JSON body.
//! - [`Engine`]: the dispatch contract transports drive.
//!
//! Header and query values are [`ParamValue`]s: a single string, or an
//! ordered list when a parameter was repeated. Transport crates (such as
//! `lambdagate-apigw`) convert their wire shapes into these records.

pub mod body;
pub mod config;
pub mod engine;
pub mod error;
pub mod params;
pub mod request;
pub mod response;
pub mod telemetry;

pub use body::{Body, MAX_JSON_DEPTH};
pub use config::{AdapterConfig, LogFormat, LoggingConfig};
pub use engine::{engine_fn, Engine, FnEngine};
pub use error::{ConfigError, ConfigResult, TelemetryError};
pub use params::{ParamValue, StringParams};
pub use request::RawRequest;
pub use response::RawResponse;
