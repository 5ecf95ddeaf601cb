//! Outbound gateway to the WhatsApp messaging relay.
//!
//! The relay is an external process that owns the actual WhatsApp
//! session; this module only speaks its HTTP contract: POST
//! `{phone, message}`, answer with a delivery status and optional JSON
//! body. Dispatch logic depends on the [`MessageRelay`] trait so tests
//! can substitute a scripted double.

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Fixed upper bound on a single relay call
const RELAY_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

/// What the relay said about one delivery attempt.
#[derive(Debug, Clone)]
pub struct RelayReceipt {
    /// True when the relay answered with a success status
    pub accepted: bool,
    /// HTTP status code reported by the relay
    pub status: u16,
    /// Response body: JSON when possible, wrapped raw text otherwise
    pub detail: Value,
}

/// Delivery seam between dispatch logic and the external relay.
#[async_trait]
pub trait MessageRelay: Send + Sync {
    /// Hand one message to the relay. `Err` means the call itself could
    /// not complete (timeout, refused connection); a non-success answer
    /// is an `Ok` receipt with `accepted == false`.
    async fn send(&self, phone: &str, message: &str) -> Result<RelayReceipt>;
}

/// HTTP client for the configured relay endpoint
pub struct HttpRelay {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpRelay {
    pub fn new(endpoint: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(RELAY_TIMEOUT)
            .build()
            .expect("failed to build reqwest client");
        Self { client, endpoint }
    }
}

#[async_trait]
impl MessageRelay for HttpRelay {
    async fn send(&self, phone: &str, message: &str) -> Result<RelayReceipt> {
        let payload = serde_json::json!({ "phone": phone, "message": message });
        let response = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        let detail = match serde_json::from_str::<Value>(&text) {
            Ok(value) => value,
            Err(_) => serde_json::json!({ "raw_text": text }),
        };

        Ok(RelayReceipt {
            accepted: status.is_success(),
            status: status.as_u16(),
            detail,
        })
    }
}
