//! HTTP plumbing: request descriptors and the transport that sends them.

mod client;
mod request;

pub use client::{HttpTransport, Transport};
#[cfg(test)]
pub use client::MockTransport;
pub use request::ApiRequest;
