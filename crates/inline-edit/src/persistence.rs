//! Save requests and the transports that carry them.
//!
//! The controller never persists anything itself. When a row passes
//! validation it builds a [`SaveRequest`] and hands it, together with a
//! one-shot [`SaveReply`], to the configured [`SaveTransport`]. The transport
//! answers whenever it likes, from whatever thread it likes; answers travel
//! back over a channel and are applied to the table only when the host calls
//! [`InlineEdit::process_completions`](crate::InlineEdit::process_completions)
//! on the UI thread.
//!
//! A transport answers in one of three ways:
//!
//! - [`SaveReply::respond`] with a [`SaveResponse`] whose `success` is true
//! - [`SaveReply::respond`] with `success` false (an application-level failure)
//! - [`SaveReply::fail`] with a [`TransportError`] when no well-formed answer
//!   could be obtained
//!
//! [`ManualTransport`] just queues requests for the host (or a test) to
//! answer later. The `inline-edit-net` crate provides an HTTP transport.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use crossbeam_channel::Sender;
use parking_lot::Mutex;
use serde::Serialize;

use crate::model::RowId;

/// Field name/value pairs submitted for a row, in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Payload(Vec<(String, String)>);

impl Payload {
    /// Creates an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.push((name.into(), value.into()));
    }

    /// Get the first value submitted under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    /// Iterate over the fields in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// The field names in order.
    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if no fields were submitted.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for Payload {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

/// A save handed to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    /// Where to save (the configured save URL).
    pub endpoint: String,
    /// The row's named fields.
    pub payload: Payload,
}

/// A well-formed answer to a save.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveResponse {
    /// Whether the application accepted the save.
    pub success: bool,
    /// The full response body.
    pub data: serde_json::Value,
}

impl SaveResponse {
    /// Interpret a response body.
    ///
    /// The save succeeded if the body's `success` member is truthy: `true`, a
    /// non-zero number, a non-empty string, an array or an object. A missing
    /// member, `null` or a body that is not an object means failure.
    pub fn from_json(data: serde_json::Value) -> Self {
        let success = data.get("success").is_some_and(is_truthy);
        Self { success, data }
    }

    /// A successful response with the given body.
    pub fn succeeded(data: serde_json::Value) -> Self {
        Self {
            success: true,
            data,
        }
    }

    /// An application-level failure with the given body.
    pub fn failed(data: serde_json::Value) -> Self {
        Self {
            success: false,
            data,
        }
    }
}

fn is_truthy(value: &serde_json::Value) -> bool {
    use serde_json::Value;

    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// A save that could not be completed at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError {
    /// HTTP-style status code, when the transport got that far.
    pub status: Option<u16>,
    /// What went wrong.
    pub message: String,
}

impl TransportError {
    /// Creates an error without a status code.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    /// Creates an error carrying a status code.
    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "save failed with status {status}: {}", self.message),
            None => write!(f, "save failed: {}", self.message),
        }
    }
}

impl std::error::Error for TransportError {}

/// Identifies one submitted save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SaveTicket(u64);

impl SaveTicket {
    /// Creates a ticket from a raw sequence number.
    pub fn new(sequence: u64) -> Self {
        Self(sequence)
    }

    /// The raw sequence number.
    pub fn sequence(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SaveTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The answer to one save, on its way back to the UI thread.
#[derive(Debug, Clone)]
pub struct SaveCompletion {
    /// The save being answered.
    pub ticket: SaveTicket,
    /// The row that submitted it.
    pub row: RowId,
    /// The transport's answer.
    pub result: Result<SaveResponse, TransportError>,
}

/// One-shot continuation for a save.
///
/// Consumed by [`respond`](Self::respond) or [`fail`](Self::fail). A reply
/// dropped without either (a transport task that panicked or was cancelled)
/// answers with a transport failure, so the row never stays waiting.
#[derive(Debug)]
pub struct SaveReply {
    ticket: SaveTicket,
    row: RowId,
    sender: Option<Sender<SaveCompletion>>,
}

impl SaveReply {
    /// Creates a reply that delivers to `sender`.
    pub fn new(ticket: SaveTicket, row: RowId, sender: Sender<SaveCompletion>) -> Self {
        Self {
            ticket,
            row,
            sender: Some(sender),
        }
    }

    /// The save being answered.
    pub fn ticket(&self) -> SaveTicket {
        self.ticket
    }

    /// The row that submitted the save.
    pub fn row(&self) -> RowId {
        self.row
    }

    /// Answer with a well-formed response.
    pub fn respond(mut self, response: SaveResponse) {
        self.complete(Ok(response));
    }

    /// Answer with a transport failure.
    pub fn fail(mut self, error: TransportError) {
        self.complete(Err(error));
    }

    fn complete(&mut self, result: Result<SaveResponse, TransportError>) {
        let Some(sender) = self.sender.take() else {
            return;
        };
        let completion = SaveCompletion {
            ticket: self.ticket,
            row: self.row,
            result,
        };
        if sender.send(completion).is_err() {
            tracing::debug!(
                target: "inline_edit::controller",
                ticket = %self.ticket,
                "save answered after the table was dropped"
            );
        }
    }
}

impl Drop for SaveReply {
    fn drop(&mut self) {
        if self.sender.is_some() {
            tracing::warn!(target: "inline_edit::controller", ticket = %self.ticket, "save reply dropped unanswered");
            self.complete(Err(TransportError::new("save abandoned without an answer")));
        }
    }
}

/// Carries save requests to wherever rows are persisted.
pub trait SaveTransport: Send + Sync {
    /// Start a save. Must not block; the answer goes through `reply`.
    fn save(&self, request: SaveRequest, reply: SaveReply);
}

impl<T: SaveTransport + ?Sized> SaveTransport for Arc<T> {
    fn save(&self, request: SaveRequest, reply: SaveReply) {
        (**self).save(request, reply)
    }
}

impl<T: SaveTransport + ?Sized> SaveTransport for Box<T> {
    fn save(&self, request: SaveRequest, reply: SaveReply) {
        (**self).save(request, reply)
    }
}

/// A save waiting in a [`ManualTransport`].
#[derive(Debug)]
pub struct PendingSave {
    /// What was submitted.
    pub request: SaveRequest,
    /// How to answer it.
    pub reply: SaveReply,
}

impl PendingSave {
    /// Answer with a well-formed response.
    pub fn respond(self, response: SaveResponse) {
        self.reply.respond(response);
    }

    /// Answer with a transport failure.
    pub fn fail(self, error: TransportError) {
        self.reply.fail(error);
    }
}

#[derive(Debug, Default)]
struct ManualState {
    pending: VecDeque<PendingSave>,
    submitted: usize,
}

/// A transport that queues saves for the host to answer.
///
/// Clones share the same queue, so the host can keep one handle while the
/// controller owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualTransport {
    state: Arc<Mutex<ManualState>>,
}

impl ManualTransport {
    /// Creates an empty transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the oldest unanswered save.
    pub fn next(&self) -> Option<PendingSave> {
        self.state.lock().pending.pop_front()
    }

    /// Take every unanswered save, oldest first.
    pub fn drain(&self) -> Vec<PendingSave> {
        self.state.lock().pending.drain(..).collect()
    }

    /// Number of unanswered saves.
    pub fn pending_count(&self) -> usize {
        self.state.lock().pending.len()
    }

    /// Number of saves ever submitted.
    pub fn submitted_count(&self) -> usize {
        self.state.lock().submitted
    }
}

impl SaveTransport for ManualTransport {
    fn save(&self, request: SaveRequest, reply: SaveReply) {
        let mut state = self.state.lock();
        state.submitted += 1;
        state.pending.push_back(PendingSave { request, reply });
    }
}

static_assertions::assert_impl_all!(SaveReply: Send);
static_assertions::assert_impl_all!(ManualTransport: Send, Sync);
