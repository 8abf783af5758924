//! The engine contract.
//!
//! An engine owns routing, validation and operation dispatch. Transport
//! adapters only ever talk to it through [`Engine::handle_request`] and the
//! [`Engine::debug`] logging sink.

use std::future::Future;

use tracing::debug;

use crate::request::RawRequest;
use crate::response::RawResponse;

/// An HTTP operation dispatcher driven by normalized requests.
///
/// `P` is the per-call parameter bag a transport attaches to each request.
/// Bounding an adapter on `Engine<P>` expresses "this engine accepts the
/// context shape this transport produces".
pub trait Engine<P>: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Dispatch one request.
    fn handle_request(
        &self,
        request: RawRequest,
        params: P,
    ) -> impl Future<Output = Result<RawResponse, Self::Error>> + Send;

    /// Debug-level logging sink.
    fn debug(&self, message: &str) {
        debug!(target: "lambdagate::engine", "{message}");
    }
}

/// An [`Engine`] backed by an async closure. See [`engine_fn`].
#[derive(Clone)]
pub struct FnEngine<F> {
    f: F,
}

/// Adapt an async closure into an [`Engine`].
///
/// ```
/// use lambdagate_core::{engine_fn, RawResponse};
///
/// let engine = engine_fn(|req: lambdagate_core::RawRequest, _params: ()| async move {
///     Ok::<_, std::io::Error>(RawResponse::json(200, serde_json::json!({ "path": req.path })))
/// });
/// # let _ = engine;
/// ```
pub fn engine_fn<F>(f: F) -> FnEngine<F> {
    FnEngine { f }
}

impl<P, F, Fut, E> Engine<P> for FnEngine<F>
where
    F: Fn(RawRequest, P) -> Fut + Send + Sync,
    Fut: Future<Output = Result<RawResponse, E>> + Send,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn handle_request(
        &self,
        request: RawRequest,
        params: P,
    ) -> impl Future<Output = Result<RawResponse, E>> + Send {
        (self.f)(request, params)
    }
}
