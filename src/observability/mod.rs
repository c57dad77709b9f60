//! Metrics exposition. Structured logging is initialized in `main` via
//! `tracing-subscriber`; the rest of the crate emits through `tracing`
//! macros directly.

pub mod metrics;
