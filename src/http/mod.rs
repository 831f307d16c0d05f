//! HTTP subsystem: server bootstrap and the single route handler.

pub mod server;

pub use server::{AppState, HttpServer};
