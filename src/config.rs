//! Typed route configuration.
//!
//! [`RouteConfig`] is the explicit alternative to chaining mutators on
//! [`Route`](crate::Route): collect every optional field up front, then hand
//! the record to [`Route::with_config`](crate::Route::with_config). Both
//! construction paths produce identical trees.
//!
//! Defaults: no handler (the route answers 404), no method restriction
//! (any verb matches), no middlewares, propagation on, no children.

use std::future::Future;
use std::sync::Arc;

use crate::handler::{BoxedHandler, Handler};
use crate::method::Method;
use crate::middleware::{BoxedMiddleware, Middleware};
use crate::request::Request;
use crate::response::IntoResponse;
use crate::route::Route;

/// Everything a [`Route`](crate::Route) can be born with.
#[derive(Default)]
pub struct RouteConfig {
    pub(crate) handler: Option<BoxedHandler>,
    pub(crate) method: Option<Method>,
    pub(crate) middlewares: Vec<BoxedMiddleware>,
    pub(crate) stop_propagation: bool,
    pub(crate) children: Vec<Route>,
}

impl RouteConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the handler from any [`Handler`] implementor.
    pub fn handler(mut self, handler: impl Handler) -> Self {
        self.handler = Some(Arc::new(handler));
        self
    }

    /// Sets the handler from a bare async function or closure.
    pub fn handler_fn<F, Fut, R>(mut self, f: F) -> Self
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
        R: IntoResponse + Send + 'static,
    {
        self.handler = Some(crate::handler::from_fn(f));
        self
    }

    /// Restricts the route to one method. Leave unset to match any method.
    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Appends one middleware to the declared chain. Call order is
    /// declaration order.
    pub fn middleware(mut self, mw: impl Middleware) -> Self {
        self.middlewares.push(Arc::new(mw));
        self
    }

    /// Keeps ancestor middlewares out of this route's effective chain.
    pub fn stop_propagation(mut self) -> Self {
        self.stop_propagation = true;
        self
    }

    /// Attaches a child route.
    pub fn child(mut self, route: Route) -> Self {
        self.children.push(route);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::Response;

    #[test]
    fn defaults_match_an_unconfigured_route() {
        let config = RouteConfig::new();
        assert!(config.handler.is_none());
        assert!(config.method.is_none());
        assert!(config.middlewares.is_empty());
        assert!(!config.stop_propagation);
        assert!(config.children.is_empty());
    }

    #[test]
    fn setters_populate_every_field() {
        let config = RouteConfig::new()
            .handler_fn(|_req: Request| async { Response::text("ok") })
            .method(Method::Post)
            .middleware(crate::middleware::Trace)
            .stop_propagation()
            .child(Route::new("/leaf"));

        assert!(config.handler.is_some());
        assert_eq!(config.method, Some(Method::Post));
        assert_eq!(config.middlewares.len(), 1);
        assert!(config.stop_propagation);
        assert_eq!(config.children.len(), 1);
    }
}
