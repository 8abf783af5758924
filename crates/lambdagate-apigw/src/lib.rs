//! lambdagate-apigw — API Gateway proxy adapter for lambdagate engines.
//!
//! Drives an [`Engine`](lambdagate_core::Engine) from AWS API Gateway REST
//! proxy events delivered to a Lambda function.
//!
//! # Architecture
//!
//! ```text
//! Lambda runtime
//!   │  ApiGatewayProxyEvent + InvocationContext
//!   ▼
//! LambdaApi::handle
//!   │
//!   ├── from_lambda_event: merge single/multi-value maps, decode body
//!   ├── Engine::handle_request(RawRequest, LambdaParams<T>)
//!   ├── to_lambda_result: split headers by arity, JSON-encode body
//!   │
//!   ▼
//! ApiGatewayProxyResult
//! ```
//!
//! With the `runtime` feature, [`runtime::run`] registers a handler with
//! the `lambda_runtime` crate and [`runtime::run_with_config`] installs
//! logging from an `AdapterConfig` first.

pub mod convert;
pub mod event;
pub mod handler;
#[cfg(feature = "runtime")]
pub mod runtime;

pub use convert::{from_lambda_event, to_lambda_result};
pub use event::{ApiGatewayProxyEvent, ApiGatewayProxyResult, InvocationContext};
pub use handler::{event_handler, LambdaApi, LambdaHandler, LambdaParams, LambdaSource};
