use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::web::models::message_models::IndexedMessage;

/// Message type recorded when an indexed message carries none.
pub const UNKNOWN_MESSAGE_TYPE: &str = "UNKNOWN";

// --- Upstream shape (scheduler `/allocation/resource_nodes`) ---

#[derive(Debug, Default, Clone, Deserialize)]
pub struct ResourceNode {
    pub name: Option<String>,
    pub score: Option<f64>,
    pub version: Option<String>,
    pub url: Option<String>,
    pub available_cpu: Option<Value>,
    pub available_memory: Option<Value>,
}

// --- Projection ---

#[derive(Debug, Clone, Serialize)]
pub struct NodeSummary {
    pub name: Option<String>,
    pub score: f64,
    pub version: Option<String>,
    pub url: Option<String>,
    pub available_cpu: Option<Value>,
    pub available_memory: Option<Value>,
}

impl NodeSummary {
    pub fn from_node(node: &ResourceNode) -> Self {
        NodeSummary {
            name: node.name.clone(),
            score: rescale_score(node.score.unwrap_or(0.0)),
            version: node.version.clone(),
            url: node.url.clone(),
            available_cpu: node.available_cpu.clone(),
            available_memory: node.available_memory.clone(),
        }
    }
}

/// Scheduler scores are reported in [0, 1]; clients see a 0-100 scale
/// rounded to two decimals.
pub fn rescale_score(raw: f64) -> f64 {
    (raw * 100.0 * 100.0).round() / 100.0
}

/// Frequency table of message types over one batch.
pub fn tally_message_types(messages: &[IndexedMessage]) -> HashMap<String, u64> {
    let mut counts: HashMap<String, u64> = HashMap::new();
    for msg in messages {
        let kind = msg
            .message_type
            .clone()
            .unwrap_or_else(|| UNKNOWN_MESSAGE_TYPE.to_string());
        *counts.entry(kind).or_insert(0) += 1;
    }
    counts
}
