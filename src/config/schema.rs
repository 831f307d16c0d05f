//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Default listening port when `PORT` is absent or unparseable.
pub const DEFAULT_PORT: u16 = 5000;

/// Application configuration.
///
/// Built once at process startup from the environment and immutable for the
/// process lifetime. Shared into handlers via `Arc` rather than held as
/// global state, so handlers stay unit-testable with arbitrary values.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Listening port.
    pub port: u16,

    /// API key read from the environment. Only its length is ever used.
    pub api_key: String,
}
