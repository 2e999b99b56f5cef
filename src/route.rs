//! The route tree node and its fluent builders.
//!
//! A [`Route`] is one position in the path hierarchy: a relative path
//! segment, an optional method restriction, an optional handler, an ordered
//! middleware chain, a propagation-stop flag, and child routes. Trees are
//! assembled single-threaded with chained mutators, then handed to a
//! [`Router`](crate::Router) which flattens them onto a [`Mux`](crate::Mux).
//!
//! Segments concatenate as-is: a child `"/users"` under `"/api"` registers
//! at `"/api/users"`. No separator is inserted and no slashes are deduced or
//! removed, so `"/api/"` with child `"/users"` registers `"/api//users"`.
//! Spell segments the way you want them on the wire.
//!
//! Each node is owned by exactly one parent. `Route` is not `Clone` and
//! children are moved in, so a node cannot sit under two parents and the
//! structure is a tree by construction.
//!
//! The chain declared here is never mutated by registration. The walk
//! computes each node's effective chain (ancestor middlewares plus its own)
//! as a fresh value, so a declared chain can be inspected after `build` and
//! still reads exactly as written.

use std::future::Future;
use std::sync::Arc;

use crate::config::RouteConfig;
use crate::handler::{BoxedHandler, Handler};
use crate::method::Method;
use crate::middleware::{BoxedMiddleware, Middleware, from_fn};
use crate::request::Request;
use crate::response::IntoResponse;

/// One node of the route tree.
pub struct Route {
    pub(crate) segment: String,
    pub(crate) method: Option<Method>,
    pub(crate) handler: Option<BoxedHandler>,
    pub(crate) middlewares: Vec<BoxedMiddleware>,
    pub(crate) stop_propagation: bool,
    pub(crate) children: Vec<Route>,
}

impl Route {
    /// A bare node: no handler (answers 404), any method, no middlewares,
    /// propagation on, no children.
    pub fn new(segment: impl Into<String>) -> Self {
        Self::with_config(segment, RouteConfig::new())
    }

    /// A node with every field spelled out up front. Produces the same tree
    /// shape as [`Route::new`] followed by the equivalent mutator calls.
    pub fn with_config(segment: impl Into<String>, config: RouteConfig) -> Self {
        Self {
            segment: segment.into(),
            method: config.method,
            handler: config.handler,
            middlewares: config.middlewares,
            stop_propagation: config.stop_propagation,
            children: config.children,
        }
    }

    /// Replaces the path segment.
    pub fn path(mut self, segment: impl Into<String>) -> Self {
        self.segment = segment.into();
        self
    }

    /// Sets the handler from any [`Handler`] implementor.
    pub fn handler(mut self, handler: impl Handler) -> Self {
        self.handler = Some(Arc::new(handler));
        self
    }

    /// Sets the handler from a bare async function or closure, adapting it
    /// into the [`Handler`] capability via [`crate::handler::from_fn`].
    pub fn handler_fn<F, Fut, R>(mut self, f: F) -> Self
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
        R: IntoResponse + Send + 'static,
    {
        self.handler = Some(crate::handler::from_fn(f));
        self
    }

    /// Restricts this route to one method. Don't call it to match any method.
    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Attaches a child route.
    pub fn child(mut self, route: Route) -> Self {
        self.children.push(route);
        self
    }

    /// Appends a middleware to this route's declared chain.
    pub fn middleware(mut self, mw: impl Middleware) -> Self {
        self.middlewares.push(Arc::new(mw));
        self
    }

    /// Appends a bare wrapping closure to this route's declared chain.
    pub fn middleware_fn<F>(self, f: F) -> Self
    where
        F: Fn(BoxedHandler) -> BoxedHandler + Send + Sync + 'static,
    {
        self.middleware(from_fn(f))
    }

    /// Keeps ancestor middlewares out of this route's effective chain.
    ///
    /// The flag binds to this node only; its own children inherit this
    /// node's effective chain as usual.
    pub fn stop_propagation(mut self) -> Self {
        self.stop_propagation = true;
        self
    }
}
