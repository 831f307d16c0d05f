//! Minimal HTTP demo service.
//!
//! Serves a single route, `GET /`, which responds with a greeting that
//! includes the character length of the API key configured through the
//! environment.

pub mod config;
pub mod http;

pub use config::AppConfig;
pub use http::HttpServer;
