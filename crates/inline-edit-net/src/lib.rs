//! Networking for inline table editing.
//!
//! This crate provides an HTTP implementation of
//! [`SaveTransport`](inline_edit::SaveTransport): a row's named fields are
//! POSTed form-urlencoded to the configured save URL and the JSON answer
//! decides whether the save succeeded.
//!
//! ```ignore
//! use inline_edit_net::{HttpClient, HttpSaveTransport};
//!
//! let client = HttpClient::builder()
//!     .timeout(std::time::Duration::from_secs(10))
//!     .base_url("https://shop.example/")?
//!     .build()?;
//! let transport = HttpSaveTransport::new(client, runtime.handle().clone());
//! ```
//!
//! Requests run on a tokio runtime supplied by the host. Answers are applied
//! to the table when the host pumps
//! [`InlineEdit::process_completions`](inline_edit::InlineEdit::process_completions).

mod error;
pub mod http;

pub use error::{NetworkError, Result};
pub use http::{HttpClient, HttpClientBuilder, HttpClientConfig, HttpSaveTransport};
