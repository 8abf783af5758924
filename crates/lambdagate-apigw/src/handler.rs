//! Lambda event handler.
//!
//! [`LambdaApi`] pairs an engine with optional caller data and turns each
//! API Gateway event into one engine dispatch. [`event_handler`] wraps it in
//! a cloneable callback that a runtime can register.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use lambdagate_core::Engine;

use crate::convert::{from_lambda_event, to_lambda_result};
use crate::event::{ApiGatewayProxyEvent, ApiGatewayProxyResult, InvocationContext};

/// The platform data attached to every dispatch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LambdaSource {
    pub event: ApiGatewayProxyEvent,
    pub context: InvocationContext,
}

/// Per-call parameters handed to the engine.
///
/// Platform data lives under `lambda`; the caller's data is flattened next
/// to it when serialized, so `T` must not have a field named `lambda`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LambdaParams<T = ()> {
    pub lambda: LambdaSource,
    #[serde(flatten)]
    pub data: T,
}

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// A registered Lambda handler.
///
/// Engine errors are returned unchanged; the runtime decides how to
/// report them.
pub type LambdaHandler<E> = Arc<
    dyn Fn(ApiGatewayProxyEvent, InvocationContext) -> BoxFuture<Result<ApiGatewayProxyResult, E>>
        + Send
        + Sync,
>;

/// An engine served through API Gateway proxy events.
pub struct LambdaApi<E, T = ()> {
    engine: Arc<E>,
    data: T,
}

impl<E, T> LambdaApi<E, T>
where
    E: Engine<LambdaParams<T>>,
    T: Clone,
{
    pub fn new(engine: E, data: T) -> Self {
        Self::from_arc(Arc::new(engine), data)
    }

    /// Share an engine that is also used elsewhere.
    pub fn from_arc(engine: Arc<E>, data: T) -> Self {
        Self { engine, data }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Handle one event: convert, dispatch, convert back.
    pub async fn handle(
        &self,
        event: ApiGatewayProxyEvent,
        context: InvocationContext,
    ) -> Result<ApiGatewayProxyResult, E::Error> {
        self.engine
            .debug(&format!("Lambda event:\n{}", pretty_json(&event)));

        let request = from_lambda_event(&event);
        let params = LambdaParams {
            lambda: LambdaSource { event, context },
            data: self.data.clone(),
        };

        let res = self.engine.handle_request(request, params).await?;
        debug!(status = res.status_code, "engine responded");

        Ok(to_lambda_result(res))
    }

    /// Wrap this API in a registrable handler.
    pub fn event_handler(self) -> LambdaHandler<E::Error>
    where
        E: 'static,
        T: Send + Sync + 'static,
    {
        let api = Arc::new(self);
        Arc::new(
            move |event: ApiGatewayProxyEvent,
                  context: InvocationContext|
                  -> BoxFuture<Result<ApiGatewayProxyResult, E::Error>> {
                let api = Arc::clone(&api);
                Box::pin(async move { api.handle(event, context).await })
            },
        )
    }
}

/// Build a handler for `engine`, attaching `data` to every dispatch.
///
/// Pass `()` when there is no caller data.
pub fn event_handler<E, T>(engine: E, data: T) -> LambdaHandler<E::Error>
where
    E: Engine<LambdaParams<T>> + 'static,
    T: Clone + Send + Sync + 'static,
{
    LambdaApi::new(engine, data).event_handler()
}

fn pretty_json(event: &ApiGatewayProxyEvent) -> String {
    serde_json::to_string_pretty(event).unwrap_or_else(|e| format!("<unserializable event: {e}>"))
}
