use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::server::config::ServerConfig;
use crate::web::models::credit_models::VmCostView;
use crate::web::models::message_models::MessageBatch;
use crate::web::models::network_models::ResourceNode;

const MESSAGE_INDEX_TIMEOUT: Duration = Duration::from_secs(15);
const ACCOUNTING_TIMEOUT: Duration = Duration::from_secs(10);
const SCHEDULER_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Error, Debug)]
pub enum FetchError {
    #[error(transparent)]
    Request(#[from] reqwest::Error),
    #[error("failed to decode upstream response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Gateway to the three public Aleph APIs.
///
/// One outbound GET per call, no retries. The inner `reqwest::Client` owns
/// the connection pool for the process lifetime; timeouts are applied per
/// request since the upstreams have different deadlines.
#[derive(Clone)]
pub struct AlephClient {
    client: Client,
    message_api_url: String,
    accounting_api_url: String,
    scheduler_api_url: String,
}

impl AlephClient {
    pub fn new(config: &ServerConfig) -> Self {
        AlephClient {
            client: Client::new(),
            message_api_url: config.message_api_url.trim_end_matches('/').to_string(),
            accounting_api_url: config.accounting_api_url.trim_end_matches('/').to_string(),
            scheduler_api_url: config.scheduler_api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Most-recent messages from the index, newest first, optionally
    /// filtered by sender address and message type.
    pub async fn recent_messages(
        &self,
        address: Option<&str>,
        msg_type: Option<&str>,
        limit: u32,
    ) -> Result<MessageBatch, FetchError> {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(address) = address {
            params.push(("addresses", address.to_string()));
        }
        if let Some(msg_type) = msg_type {
            params.push(("msgType", msg_type.to_string()));
        }
        params.push(("limit", limit.to_string()));

        let response = self
            .client
            .get(format!("{}/messages.json", self.message_api_url))
            .query(&params)
            .timeout(MESSAGE_INDEX_TIMEOUT)
            .send()
            .await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Cost/balance view for one address from the accounting service.
    /// A non-200 upstream status yields `Ok(None)` so the caller can shape
    /// its own error body instead of reporting a transport failure.
    pub async fn vm_cost_view(&self, address: &str) -> Result<Option<VmCostView>, FetchError> {
        let response = self
            .client
            .get(format!("{}/vm_cost_views/{address}", self.accounting_api_url))
            .timeout(ACCOUNTING_TIMEOUT)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            debug!(status = %response.status(), address, "accounting service returned non-success");
            return Ok(None);
        }

        let body = response.bytes().await?;
        Ok(Some(serde_json::from_slice(&body)?))
    }

    /// Compute resource nodes from the scheduler, in upstream order.
    pub async fn resource_nodes(&self) -> Result<Vec<ResourceNode>, FetchError> {
        let response = self
            .client
            .get(format!("{}/allocation/resource_nodes", self.scheduler_api_url))
            .timeout(SCHEDULER_TIMEOUT)
            .send()
            .await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
