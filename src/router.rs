//! Flattens a route tree onto a [`Mux`].
//!
//! The [`Router`] owns the multiplexer and the tree root. [`Router::build`]
//! walks the tree depth-first and, per node:
//!
//! 1. resolves the absolute path: the parent's absolute path with the
//!    node's segment concatenated onto it, nothing inserted or removed;
//! 2. resolves the effective middleware chain: the chain inherited from the
//!    parent followed by the node's own declared chain, unless the node
//!    stops propagation, in which case its declared chain stands alone;
//! 3. composes the effective chain around the node's handler (or the 404
//!    fallback) and binds the result at `(method, absolute path)`;
//! 4. recurses into the children, handing them the absolute path and the
//!    effective chain.
//!
//! The walk runs on the calling thread and visits children in declaration
//! order. When `build` returns, every node in the tree is bound: there is
//! no window in which the returned mux is partially populated, so it can be
//! handed to a server immediately. Sequential order also pins down the
//! duplicate-binding rule: when two nodes resolve to the same
//! `(method, path)` key, the one declared later wins, deterministically.

use crate::error::Error;
use crate::handler;
use crate::middleware::{BoxedMiddleware, compose};
use crate::mux::Mux;
use crate::route::Route;

/// Owns the registration target and the tree root.
pub struct Router {
    mux: Mux,
    root: Route,
}

impl Router {
    /// A router that will register `root` onto a fresh [`Mux`].
    pub fn new(root: Route) -> Self {
        Self { mux: Mux::new(), root }
    }

    /// A router that registers onto an existing mux, e.g. one that already
    /// carries bindings from elsewhere.
    pub fn with_mux(mux: Mux, root: Route) -> Self {
        Self { mux, root }
    }

    /// Registers the whole tree and returns the finished mux.
    ///
    /// The root is visited with an empty path prefix and an empty inherited
    /// chain. Fails only on a malformed route pattern; duplicates are not
    /// an error (see [`Mux::bind`]).
    pub fn build(self) -> Result<Mux, Error> {
        let Self { mut mux, root } = self;
        register(&root, "", &[], &mut mux)?;
        Ok(mux)
    }
}

/// Visits one node: bind it, then its subtree.
///
/// `inherited` is the parent's effective chain. The node's own effective
/// chain is computed as a fresh vector; declared chains are never touched,
/// so reusing a middleware list across nodes cannot alias.
fn register(
    route: &Route,
    prefix: &str,
    inherited: &[BoxedMiddleware],
    mux: &mut Mux,
) -> Result<(), Error> {
    let absolute = format!("{prefix}{}", route.segment);

    // stop_propagation is honored unconditionally. With an empty inherited
    // chain both branches produce the same chain, which keeps the flag
    // behaviorally invisible in that case.
    let effective: Vec<BoxedMiddleware> = if route.stop_propagation {
        route.middlewares.clone()
    } else {
        inherited.iter().chain(&route.middlewares).cloned().collect()
    };

    let terminal = route.handler.clone().unwrap_or_else(handler::not_found);
    mux.bind(route.method, &absolute, compose(&effective, terminal))?;

    for child in &route.children {
        register(child, &absolute, &effective, mux)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::handler::{BoxedHandler, Handler};
    use crate::method::Method;
    use crate::middleware::from_fn;
    use crate::request::Request;
    use crate::response::Response;

    fn tagging(tag: &'static str) -> impl crate::middleware::Middleware {
        from_fn(move |next: BoxedHandler| -> BoxedHandler {
            crate::handler::from_fn(move |req: Request| {
                let next = Arc::clone(&next);
                async move {
                    let mut res = next.call(req).await;
                    let mut body = tag.as_bytes().to_vec();
                    body.extend_from_slice(res.body());
                    *res.body_mut() = body;
                    res
                }
            })
        })
    }

    async fn handle(_req: Request) -> Response {
        Response::text("h")
    }

    async fn body_of(mux: &Mux, path: &str) -> Vec<u8> {
        mux.dispatch(Request::new(Method::Get, path)).await.body().to_vec()
    }

    #[tokio::test]
    async fn children_inherit_the_parent_chain_in_order() {
        let tree = Route::new("/p")
            .middleware(tagging("A::"))
            .child(Route::new("/c").middleware(tagging("B::")).handler_fn(handle));

        let mux = Router::new(tree).build().unwrap();
        assert_eq!(body_of(&mux, "/p/c").await, b"A::B::h");
    }

    #[tokio::test]
    async fn stop_propagation_keeps_only_the_declared_chain() {
        let tree = Route::new("/p").middleware(tagging("A::")).child(
            Route::new("/c")
                .middleware(tagging("B::"))
                .stop_propagation()
                .handler_fn(handle),
        );

        let mux = Router::new(tree).build().unwrap();
        assert_eq!(body_of(&mux, "/p/c").await, b"B::h");
    }

    #[tokio::test]
    async fn stop_propagation_under_an_empty_parent_chain_is_invisible() {
        let make = |stopped: bool| {
            let mut child = Route::new("/c").middleware(tagging("B::")).handler_fn(handle);
            if stopped {
                child = child.stop_propagation();
            }
            Route::new("/p").child(child)
        };

        let stopped = Router::new(make(true)).build().unwrap();
        let flowing = Router::new(make(false)).build().unwrap();
        assert_eq!(body_of(&stopped, "/p/c").await, b"B::h");
        assert_eq!(body_of(&flowing, "/p/c").await, b"B::h");
    }

    #[tokio::test]
    async fn grandchildren_inherit_the_effective_chain() {
        let tree = Route::new("/a").middleware(tagging("A::")).child(
            Route::new("/b")
                .middleware(tagging("B::"))
                .child(Route::new("/c").middleware(tagging("C::")).handler_fn(handle)),
        );

        let mux = Router::new(tree).build().unwrap();
        assert_eq!(body_of(&mux, "/a/b/c").await, b"A::B::C::h");
    }

    #[tokio::test]
    async fn absolute_paths_concatenate_without_separators() {
        let tree = Route::new("/root").child(
            Route::new("/test1").child(Route::new("/mw").handler_fn(handle)),
        );

        let mux = Router::new(tree).build().unwrap();
        assert_eq!(body_of(&mux, "/root/test1/mw").await, b"h");

        // Slashes are preserved verbatim, never deduplicated.
        let doubled = Route::new("/api/").child(Route::new("/users").handler_fn(handle));
        let mux = Router::new(doubled).build().unwrap();
        assert_eq!(body_of(&mux, "/api//users").await, b"h");
        let miss = mux.dispatch(Request::new(Method::Get, "/api/users")).await;
        assert_eq!(miss.status_code(), http::StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn malformed_pattern_in_a_child_aborts_the_build() {
        let tree = Route::new("/ok").child(Route::new("/{unclosed"));
        let err = Router::new(tree).build().unwrap_err();
        assert!(matches!(err, Error::InvalidRoute { .. }));
    }

    #[tokio::test]
    async fn declared_chains_survive_the_walk_untouched() {
        // Two subtrees share nothing; registering the first must not leak
        // its inherited chain into the second.
        let tree = Route::new("/r")
            .middleware(tagging("R::"))
            .child(Route::new("/x").handler_fn(handle))
            .child(Route::new("/y").stop_propagation().handler_fn(handle));

        let mux = Router::new(tree).build().unwrap();
        assert_eq!(body_of(&mux, "/r/x").await, b"R::h");
        assert_eq!(body_of(&mux, "/r/y").await, b"h");
    }
}
