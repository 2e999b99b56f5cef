//! # arbor
//!
//! Declarative route trees for async HTTP services.
//!
//! Describe your routes as a tree. Attach a handler, a method restriction,
//! and middlewares to any node. Build. arbor flattens the hierarchy into
//! `METHOD path → handler` bindings on a radix-tree multiplexer, composing
//! each node's middleware chain around its handler on the way.
//!
//! ## The rules
//!
//! The tree has exactly three behaviors worth memorizing:
//!
//! - **Paths concatenate.** A node's absolute path is every ancestor
//!   segment glued together in order, verbatim. No separators are inserted,
//!   no slashes deduplicated.
//! - **Middlewares flow down.** A node's effective chain is its ancestors'
//!   chain followed by its own, unless the node calls
//!   [`stop_propagation`](Route::stop_propagation). Declaration order is
//!   outer-to-inner: the first middleware sees the request first and the
//!   response last.
//! - **Last binding wins.** Two nodes resolving to the same
//!   `(method, path)` key are not an error; the one declared later is the
//!   one that serves.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use arbor::{middleware, Method, Request, Response, Route, Router, Server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let tree = Route::new("/api")
//!         .middleware(middleware::Trace)
//!         .child(Route::new("/users").method(Method::Get).handler_fn(list_users))
//!         .child(Route::new("/users/{id}").method(Method::Get).handler_fn(get_user));
//!
//!     let mux = Router::new(tree).build().unwrap();
//!     Server::bind("0.0.0.0:3000").serve(mux).await.unwrap();
//! }
//!
//! async fn list_users(_req: Request) -> Response {
//!     Response::json(br#"[]"#.to_vec())
//! }
//!
//! async fn get_user(req: Request) -> Response {
//!     let id = req.param("id").unwrap_or("unknown");
//!     Response::json(format!(r#"{{"id":"{id}"}}"#).into_bytes())
//! }
//! ```
//!
//! When [`Router::build`] returns, every node is registered; the mux is
//! never observable half-populated. Assembly is a startup activity: build
//! the tree, build the mux, then serve.

mod config;
mod error;
mod method;
mod mux;
mod request;
mod response;
mod route;
mod router;
mod server;

pub mod handler;
pub mod middleware;

pub use config::RouteConfig;
pub use error::Error;
pub use handler::{BoxFuture, BoxedHandler, Handler};
pub use method::Method;
pub use mux::Mux;
pub use request::Request;
pub use response::{ContentType, IntoResponse, Response, ResponseBuilder};
pub use route::Route;
pub use router::Router;
pub use server::Server;

pub use http::StatusCode;
