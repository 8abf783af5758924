//! Registration with the AWS Lambda runtime (feature `runtime`).

use std::sync::Arc;

use lambda_runtime::{service_fn, LambdaEvent};
use lambdagate_core::{telemetry, AdapterConfig};

pub use lambda_runtime::Error;

use crate::event::{ApiGatewayProxyEvent, InvocationContext};
use crate::handler::LambdaHandler;

impl From<&lambda_runtime::Context> for InvocationContext {
    fn from(ctx: &lambda_runtime::Context) -> Self {
        Self {
            aws_request_id: ctx.request_id.clone(),
            function_name: ctx.env_config.function_name.clone(),
            function_version: ctx.env_config.version.clone(),
            invoked_function_arn: ctx.invoked_function_arn.clone(),
            memory_limit_in_mb: ctx.env_config.memory,
            log_group_name: ctx.env_config.log_group.clone(),
            log_stream_name: ctx.env_config.log_stream.clone(),
            deadline_ms: ctx.deadline,
            xray_trace_id: ctx.xray_trace_id.clone(),
        }
    }
}

/// Serve `handler` until the runtime shuts the process down.
///
/// Events that do not deserialize as [`ApiGatewayProxyEvent`] are rejected
/// by the runtime before the handler runs. Handler errors are boxed and
/// reported as invocation failures.
pub async fn run<E>(handler: LambdaHandler<E>) -> Result<(), Error>
where
    E: std::error::Error + Send + Sync + 'static,
{
    lambda_runtime::run(service_fn(move |event: LambdaEvent<ApiGatewayProxyEvent>| {
        let handler = Arc::clone(&handler);
        async move {
            let (payload, context) = event.into_parts();
            handler(payload, InvocationContext::from(&context))
                .await
                .map_err(Error::from)
        }
    }))
    .await
}

/// Install logging from `config`, then serve `handler`.
///
/// Use [`run`] instead when the process already installs its own
/// subscriber.
pub async fn run_with_config<E>(config: &AdapterConfig, handler: LambdaHandler<E>) -> Result<(), Error>
where
    E: std::error::Error + Send + Sync + 'static,
{
    install_logging(config)?;
    run(handler).await
}

fn install_logging(config: &AdapterConfig) -> Result<(), Error> {
    telemetry::init(&config.logging)?;
    tracing::debug!(format = ?config.logging.format, "tracing subscriber installed");
    Ok(())
}
