//! The handler capability and its type erasure.
//!
//! A handler consumes one [`Request`] and produces one [`Response`]. The
//! route tree stores handlers of *different* concrete types in one place, so
//! they live behind trait objects: [`BoxedHandler`] is the currency the
//! whole crate trades in. Middlewares receive a `BoxedHandler` and return
//! another one, which is why [`Handler`] is object safe and open for anyone
//! to implement.
//!
//! Two ways to produce a handler:
//!
//! - implement [`Handler`] on a type, when the handler carries state;
//! - wrap a bare `async fn` or closure with [`from_fn`], or let
//!   [`Route::handler_fn`](crate::Route::handler_fn) do it for you.
//!
//! ```rust
//! use arbor::{BoxFuture, Handler, Request, Response};
//!
//! struct Greeter { greeting: &'static str }
//!
//! impl Handler for Greeter {
//!     fn call(&self, _req: Request) -> BoxFuture {
//!         let greeting = self.greeting;
//!         Box::pin(async move { Response::text(greeting) })
//!     }
//! }
//! ```

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use http::StatusCode;

use crate::request::Request;
use crate::response::{IntoResponse, Response};

/// A heap-allocated, type-erased future resolving to a [`Response`].
///
/// `Pin<Box<…>>` because the runtime polls the future in place; it must not
/// move in memory after the first poll. `Send + 'static` lets tokio move it
/// across worker threads.
pub type BoxFuture = Pin<Box<dyn Future<Output = Response> + Send + 'static>>;

/// The handler capability: one request in, one response out.
///
/// Object safe on purpose. The composed value a middleware chain produces is
/// itself a `dyn Handler`, and middlewares call `next.call(req)` to hand the
/// request inward.
pub trait Handler: Send + Sync + 'static {
    fn call(&self, req: Request) -> BoxFuture;
}

/// A shared, type-erased handler.
///
/// `Arc` because the same handler serves every matching request concurrently
/// and middleware chains hold on to their `next` link. Cloning is one atomic
/// increment.
pub type BoxedHandler = Arc<dyn Handler>;

/// Adapts a bare async function or closure into a [`BoxedHandler`].
///
/// Accepts any `Fn(Request) -> impl Future<Output = impl IntoResponse>`:
/// named `async fn` items, closures returning async blocks, structs
/// implementing `Fn`.
pub fn from_fn<F, Fut, R>(f: F) -> BoxedHandler
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    Arc::new(FnHandler(f))
}

/// Newtype bridging the typed function world to the trait-object world.
struct FnHandler<F>(F);

impl<F, Fut, R> Handler for FnHandler<F>
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn call(&self, req: Request) -> BoxFuture {
        let fut = (self.0)(req);
        Box::pin(async move { fut.await.into_response() })
    }
}

/// The handler a route falls back to when none was set: respond `404 Not
/// Found` with an empty body.
///
/// Inherited middlewares still wrap it, so an unset handler deep in a traced
/// subtree produces a traced 404.
pub fn not_found() -> BoxedHandler {
    Arc::new(NotFound)
}

struct NotFound;

impl Handler for NotFound {
    fn call(&self, _req: Request) -> BoxFuture {
        Box::pin(async { Response::status(StatusCode::NOT_FOUND) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::method::Method;

    #[tokio::test]
    async fn async_fns_adapt_into_handlers() {
        async fn hello(_req: Request) -> Response {
            Response::text("hello")
        }

        let handler = from_fn(hello);
        let res = handler.call(Request::new(Method::Get, "/")).await;
        assert_eq!(res.body(), b"hello");
    }

    #[tokio::test]
    async fn bare_status_returns_adapt_too() {
        let handler = from_fn(|_req: Request| async { StatusCode::NO_CONTENT });
        let res = handler.call(Request::new(Method::Delete, "/thing")).await;
        assert_eq!(res.status_code(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn unset_handler_answers_404() {
        let res = not_found().call(Request::new(Method::Get, "/missing")).await;
        assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
        assert!(res.body().is_empty());
    }
}
