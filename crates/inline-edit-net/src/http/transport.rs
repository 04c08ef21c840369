//! Save transport over HTTP.

use inline_edit::{SaveReply, SaveRequest, SaveResponse, SaveTransport};
use tokio::runtime::Handle;

use super::client::HttpClient;
use crate::error::{NetworkError, Result};

/// Persists rows by POSTing them to the save endpoint.
///
/// Each save runs as a task on a tokio runtime; the controller's thread is
/// never blocked. The endpoint's JSON answer is checked for a truthy
/// `success` member. Error statuses, connection failures, timeouts, invalid
/// URLs and bodies that are not JSON are reported as transport failures.
///
/// # Example
///
/// ```ignore
/// use inline_edit::{InlineEdit, InlineEditConfig};
/// use inline_edit_net::{HttpClient, HttpSaveTransport};
///
/// let runtime = tokio::runtime::Runtime::new()?;
/// let client = HttpClient::builder().base_url("https://shop.example/")?.build()?;
/// let transport = HttpSaveTransport::new(client, runtime.handle().clone());
///
/// let config = InlineEditConfig::new().with_save_url("/orders/save");
/// let mut table = InlineEdit::attach(document, root, config, transport)?;
/// ```
#[derive(Debug, Clone)]
pub struct HttpSaveTransport {
    client: HttpClient,
    runtime: Handle,
}

impl HttpSaveTransport {
    /// Create a transport that runs requests on `runtime`.
    pub fn new(client: HttpClient, runtime: Handle) -> Self {
        Self { client, runtime }
    }

    /// Create a transport on the runtime of the calling context.
    pub fn current(client: HttpClient) -> Result<Self> {
        let runtime = Handle::try_current().map_err(|err| NetworkError::Runtime(err.to_string()))?;
        Ok(Self::new(client, runtime))
    }

    /// The underlying client.
    pub fn client(&self) -> &HttpClient {
        &self.client
    }
}

impl SaveTransport for HttpSaveTransport {
    fn save(&self, request: SaveRequest, reply: SaveReply) {
        let client = self.client.clone();
        self.runtime.spawn(async move {
            let ticket = reply.ticket();
            match client.post_form(&request.endpoint, &request.payload).await {
                Ok(body) => {
                    tracing::trace!(target: "inline_edit_net::http", %ticket, %body, "save answered");
                    reply.respond(SaveResponse::from_json(body));
                }
                Err(err) => {
                    tracing::debug!(
                        target: "inline_edit_net::http",
                        %ticket,
                        endpoint = %request.endpoint,
                        error = %err,
                        "save request failed"
                    );
                    reply.fail(err.into());
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_requires_runtime() {
        let client = HttpClient::new().unwrap();
        assert!(matches!(
            HttpSaveTransport::current(client.clone()),
            Err(NetworkError::Runtime(_))
        ));

        let runtime = tokio::runtime::Runtime::new().unwrap();
        let _guard = runtime.enter();
        assert!(HttpSaveTransport::current(client).is_ok());
    }
}
