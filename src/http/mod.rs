//! HTTP API surface.
//!
//! # Data Flow
//! ```text
//! request
//!     → server.rs (router, CORS, timeout, trace layers)
//!     → handlers.rs (cache lookup, ranking service, JSON response)
//!     → rankings::service (remote or fallback data)
//! ```

pub mod handlers;
pub mod server;
pub mod trinkets;

pub use server::{AppState, HttpServer};
