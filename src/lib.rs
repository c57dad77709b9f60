//! WoW: Midnight Rankings API Library

pub mod cache;
pub mod config;
pub mod http;
pub mod observability;
pub mod rankings;
pub mod specs;
pub mod wcl;

pub use config::AppConfig;
pub use http::HttpServer;
pub use rankings::RankingService;
