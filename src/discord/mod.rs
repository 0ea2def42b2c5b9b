//! Discord REST API surface.

mod client;
pub mod routes;
pub mod types;

pub use client::Discord;
