//! Radix-tree request multiplexer.
//!
//! The registration target the route tree flattens onto: one [`matchit`]
//! tree per HTTP method plus one any-method tree, O(path-length) lookup.
//! Patterns use `{name}` captures; `req.param("name")` retrieves them.
//!
//! Built once at startup by [`Router::build`](crate::Router::build), then
//! shared immutably across connection tasks. Nothing here locks: all
//! mutation happens before the mux is handed to the server.
//!
//! Re-binding an already-registered `(method, pattern)` pair replaces the
//! earlier handler. Last write wins, silently. Callers own uniqueness; the
//! mux performs no duplicate detection.

use std::collections::HashMap;
use std::sync::Arc;

use matchit::Router as Tree;

use crate::error::Error;
use crate::handler::{BoxedHandler, Handler};
use crate::method::Method;
use crate::request::Request;
use crate::response::Response;

/// The request multiplexer.
#[derive(Default)]
pub struct Mux {
    verbs: HashMap<Method, Tree<BoxedHandler>>,
    any: Tree<BoxedHandler>,
}

impl Mux {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `handler` at `path` for `method`; `None` binds for any method.
    ///
    /// A pattern already present in the tree is re-bound to the new handler.
    /// A syntactically malformed pattern is an [`Error::InvalidRoute`].
    pub fn bind(
        &mut self,
        method: Option<Method>,
        path: &str,
        handler: BoxedHandler,
    ) -> Result<(), Error> {
        let tree = match method {
            Some(m) => self.verbs.entry(m).or_default(),
            None => &mut self.any,
        };

        let replacement = Arc::clone(&handler);
        match tree.insert(path, handler) {
            Ok(()) => Ok(()),
            // The pattern is already bound. Point the existing entry at the
            // new handler: last write wins.
            Err(matchit::InsertError::Conflict { .. }) => match tree.at_mut(path) {
                Ok(found) => {
                    *found.value = replacement;
                    Ok(())
                }
                Err(e) => Err(Error::InvalidRoute {
                    path: path.to_owned(),
                    reason: e.to_string(),
                }),
            },
            Err(e) => Err(Error::InvalidRoute {
                path: path.to_owned(),
                reason: e.to_string(),
            }),
        }
    }

    /// Finds the handler for a `(method, path)` pair.
    ///
    /// The method's own tree is consulted first; the any-method tree is the
    /// fallback, so an exact-method binding shadows an any-method binding on
    /// the same path for that verb only.
    pub(crate) fn lookup(
        &self,
        method: Method,
        path: &str,
    ) -> Option<(BoxedHandler, HashMap<String, String>)> {
        self.verbs
            .get(&method)
            .and_then(|tree| Self::find(tree, path))
            .or_else(|| Self::find(&self.any, path))
    }

    fn find(
        tree: &Tree<BoxedHandler>,
        path: &str,
    ) -> Option<(BoxedHandler, HashMap<String, String>)> {
        let matched = tree.at(path).ok()?;
        let handler = Arc::clone(matched.value);
        let params = matched
            .params
            .iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Some((handler, params))
    }

    /// Routes one request to its handler and awaits the response.
    ///
    /// Path captures are injected into the request before the handler runs.
    /// A request nothing matches gets a bare `404 Not Found`.
    pub async fn dispatch(&self, mut req: Request) -> Response {
        match self.lookup(req.method(), req.path()) {
            Some((handler, params)) => {
                req.set_params(params);
                handler.call(req).await
            }
            None => Response::status(http::StatusCode::NOT_FOUND),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::handler::from_fn;

    fn answering(tag: &'static str) -> BoxedHandler {
        from_fn(move |_req: Request| async move { Response::text(tag) })
    }

    #[tokio::test]
    async fn exact_method_shadows_any_method() {
        let mut mux = Mux::new();
        mux.bind(None, "/things", answering("any")).unwrap();
        mux.bind(Some(Method::Post), "/things", answering("post")).unwrap();

        let get = mux.dispatch(Request::new(Method::Get, "/things")).await;
        assert_eq!(get.body(), b"any");

        let post = mux.dispatch(Request::new(Method::Post, "/things")).await;
        assert_eq!(post.body(), b"post");
    }

    #[tokio::test]
    async fn rebinding_replaces_the_handler() {
        let mut mux = Mux::new();
        mux.bind(Some(Method::Get), "/dup", answering("first")).unwrap();
        mux.bind(Some(Method::Get), "/dup", answering("second")).unwrap();

        let res = mux.dispatch(Request::new(Method::Get, "/dup")).await;
        assert_eq!(res.body(), b"second");
    }

    #[tokio::test]
    async fn captures_reach_the_handler() {
        let mut mux = Mux::new();
        mux.bind(
            Some(Method::Get),
            "/users/{id}",
            from_fn(|req: Request| async move {
                Response::text(req.param("id").unwrap_or("none").to_owned())
            }),
        )
        .unwrap();

        let res = mux.dispatch(Request::new(Method::Get, "/users/42")).await;
        assert_eq!(res.body(), b"42");
    }

    #[tokio::test]
    async fn unmatched_requests_get_404() {
        let mux = Mux::new();
        let res = mux.dispatch(Request::new(Method::Get, "/nowhere")).await;
        assert_eq!(res.status_code(), http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn malformed_patterns_fail_binding() {
        let mut mux = Mux::new();
        let err = mux
            .bind(Some(Method::Get), "/broken/{", answering("x"))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidRoute { .. }));
    }
}
