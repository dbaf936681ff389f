//! HTTP surface: routes, request handlers, and server lifecycle.

pub mod handlers;
pub mod http;

pub use handlers::AppState;
pub use http::{HttpServer, router};
