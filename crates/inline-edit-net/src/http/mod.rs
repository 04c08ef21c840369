//! HTTP persistence for editable tables.
//!
//! [`HttpClient`] posts a row's fields form-urlencoded and reads the JSON
//! answer; [`HttpSaveTransport`] plugs it into the edit lifecycle.

mod client;
mod transport;

pub use client::{HttpClient, HttpClientBuilder, HttpClientConfig};
pub use transport::HttpSaveTransport;
