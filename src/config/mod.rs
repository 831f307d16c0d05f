//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! environment (PORT, API_KEY)
//!     → loader.rs (read & resolve defaults)
//!     → validation (required values checked eagerly)
//!     → AppConfig (validated, immutable)
//!     → shared via Arc into the request handler
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload.
//! - Missing port falls back to a default; a missing API key fails startup
//!   with a descriptive error instead of faulting on first use.

pub mod loader;
pub mod schema;

pub use loader::ConfigError;
pub use schema::AppConfig;
pub use schema::DEFAULT_PORT;
