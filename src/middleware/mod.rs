//! Middleware capability and chain composition.
//!
//! A middleware is a transformation from one handler into another: it
//! receives the `next` handler and returns a wrapped one. Cross-cutting
//! behavior (tracing, auth, response rewriting) layers around a terminal
//! handler this way.
//!
//! Declaration order is outer-to-inner: in a chain `[a, b]`, `a` sees the
//! request first and the response last. [`compose`] folds a chain and a
//! terminal handler into a single [`BoxedHandler`].
//!
//! Both styles compose uniformly: implement [`Middleware`] on a struct when
//! the middleware carries state, or wrap a bare closure with [`from_fn`]:
//!
//! ```rust
//! use std::sync::Arc;
//! use arbor::{handler, middleware, BoxedHandler, Handler, Request};
//!
//! let uppercase = middleware::from_fn(|next: BoxedHandler| -> BoxedHandler {
//!     handler::from_fn(move |req: Request| {
//!         let next = Arc::clone(&next);
//!         async move {
//!             let mut res = next.call(req).await;
//!             res.body_mut().make_ascii_uppercase();
//!             res
//!         }
//!     })
//! });
//! ```

mod trace;

pub use trace::Trace;

use std::sync::Arc;

use crate::handler::BoxedHandler;

/// The middleware capability: wrap a handler, get a handler back.
///
/// The returned handler owns whatever it needs from `next`; it must not leak
/// state across unrelated requests.
pub trait Middleware: Send + Sync + 'static {
    fn handle(&self, next: BoxedHandler) -> BoxedHandler;
}

/// A shared, type-erased middleware. Chains clone these by reference count
/// when a parent's chain is inherited by its children.
pub type BoxedMiddleware = Arc<dyn Middleware>;

/// Adapts a bare `Fn(next) -> handler` closure into the [`Middleware`]
/// capability. See the module docs for the usual shape.
pub fn from_fn<F>(f: F) -> FnMiddleware<F>
where
    F: Fn(BoxedHandler) -> BoxedHandler + Send + Sync + 'static,
{
    FnMiddleware(f)
}

/// A closure wearing the [`Middleware`] capability. Built by [`from_fn`].
pub struct FnMiddleware<F>(F);

impl<F> Middleware for FnMiddleware<F>
where
    F: Fn(BoxedHandler) -> BoxedHandler + Send + Sync + 'static,
{
    fn handle(&self, next: BoxedHandler) -> BoxedHandler {
        (self.0)(next)
    }
}

/// Folds an ordered middleware chain and a terminal handler into one handler.
///
/// The chain is walked in reverse declaration order so the first-declared
/// middleware ends up outermost: for `[a, b]` and terminal `h` the result
/// behaves as `a.handle(b.handle(h))`. An empty chain returns `terminal`
/// unchanged.
pub fn compose(chain: &[BoxedMiddleware], terminal: BoxedHandler) -> BoxedHandler {
    let mut handler = terminal;
    for mw in chain.iter().rev() {
        handler = mw.handle(handler);
    }
    handler
}
