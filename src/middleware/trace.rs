//! Built-in request-tracing middleware.

use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use crate::handler::{BoxFuture, BoxedHandler, Handler};
use crate::middleware::Middleware;
use crate::request::Request;

/// Emits one `tracing` event per request with method, path, status, and
/// latency. Attach it high in the tree and every descendant inherits it:
///
/// ```rust
/// use arbor::{middleware, Route};
///
/// let tree = Route::new("/api")
///     .middleware(middleware::Trace)
///     .child(Route::new("/users"));
/// ```
pub struct Trace;

impl Middleware for Trace {
    fn handle(&self, next: BoxedHandler) -> BoxedHandler {
        Arc::new(Traced { next })
    }
}

struct Traced {
    next: BoxedHandler,
}

impl Handler for Traced {
    fn call(&self, req: Request) -> BoxFuture {
        let next = Arc::clone(&self.next);
        Box::pin(async move {
            let method = req.method();
            let path = req.path().to_owned();
            let start = Instant::now();

            let res = next.call(req).await;

            info!(
                method = %method,
                path = %path,
                status = res.status_code().as_u16(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "request served"
            );
            res
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::method::Method;
    use crate::response::Response;

    #[tokio::test]
    async fn passes_the_response_through_untouched() {
        let terminal = crate::handler::from_fn(|_req: Request| async {
            Response::builder()
                .status(http::StatusCode::CREATED)
                .text("made")
        });

        let wrapped = Trace.handle(terminal);
        let res = wrapped.call(Request::new(Method::Post, "/things")).await;

        assert_eq!(res.status_code(), http::StatusCode::CREATED);
        assert_eq!(res.body(), b"made");
    }
}
