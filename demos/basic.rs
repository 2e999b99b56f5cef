//! Minimal arbor example: a small API tree with traced routes and an
//! untraced admin subtree.
//!
//! Run with:
//!   RUST_LOG=info cargo run --example basic
//!
//! Try:
//!   curl http://localhost:3000/api/users
//!   curl http://localhost:3000/api/users/42
//!   curl -X POST http://localhost:3000/api/users -d '{"name":"alice"}'
//!   curl http://localhost:3000/api/admin/stats

use arbor::{Method, Request, Response, Route, Router, Server, StatusCode, middleware};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // /api carries the trace middleware; every descendant inherits it.
    // /admin opts out with stop_propagation and brings its own chain.
    let tree = Route::new("/api")
        .middleware(middleware::Trace)
        .child(Route::new("/users").method(Method::Get).handler_fn(list_users))
        .child(Route::new("/users").method(Method::Post).handler_fn(create_user))
        .child(Route::new("/users/{id}").method(Method::Get).handler_fn(get_user))
        .child(
            Route::new("/admin")
                .stop_propagation()
                .child(Route::new("/stats").method(Method::Get).handler_fn(stats)),
        );

    let mux = Router::new(tree).build().expect("route tree should register");

    Server::bind("0.0.0.0:3000")
        .serve(mux)
        .await
        .expect("server error");
}

// GET /api/users
async fn list_users(_req: Request) -> Response {
    Response::json(br#"[{"id":"1","name":"alice"}]"#.to_vec())
}

// GET /api/users/{id}
async fn get_user(req: Request) -> Response {
    let id = req.param("id").unwrap_or("unknown");
    Response::json(format!(r#"{{"id":"{id}","name":"alice"}}"#).into_bytes())
}

// POST /api/users
async fn create_user(req: Request) -> Response {
    if req.body().is_empty() {
        return Response::status(StatusCode::BAD_REQUEST);
    }

    Response::builder()
        .status(StatusCode::CREATED)
        .header("location", "/api/users/99")
        .json(br#"{"id":"99"}"#.to_vec())
}

// GET /api/admin/stats. /api/admin itself has no handler, so it answers 404.
async fn stats(_req: Request) -> Response {
    Response::json(br#"{"requests":0}"#.to_vec())
}
