//! Warcraft Logs provider integration.
//!
//! # Data Flow
//! ```text
//! rankings::service
//!     → client.rs (fixed GraphQL ranking query, bearer auth)
//!     → token.rs (client-credentials exchange, cached token)
//!     → provider API
//! ```
//!
//! Every failure mode in this subsystem folds into `Unavailable`; nothing
//! here surfaces past the ranking service.

pub mod client;
pub mod token;

pub use client::{RemoteRanking, Unavailable, WclClient};
pub use token::{TokenError, TokenManager};
