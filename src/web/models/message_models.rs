use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Name shown for instances and programs that carry no metadata.
pub const DEFAULT_NAME: &str = "Unnamed";

const RUNTIME_REF_WIDTH: usize = 16;
const ITEM_HASH_WIDTH: usize = 20;

// --- Upstream shapes (message index `/messages.json`) ---
//
// Every field is optional: the index mixes message kinds in one list, and a
// missing key must project as null rather than fail the whole batch.

#[derive(Debug, Default, Clone, Deserialize)]
pub struct MessageBatch {
    #[serde(default)]
    pub messages: Vec<IndexedMessage>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct IndexedMessage {
    pub item_hash: Option<String>,
    #[serde(rename = "type")]
    pub message_type: Option<String>,
    pub time: Option<f64>,
    pub channel: Option<String>,
    pub size: Option<u64>,
    pub content: Option<MessageContent>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct MessageContent {
    pub metadata: Option<ContentMetadata>,
    pub resources: Option<ContentResources>,
    pub rootfs: Option<ContentRootfs>,
    pub payment: Option<ContentPayment>,
    pub runtime: Option<ContentRuntime>,
    pub code: Option<ContentCode>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct ContentMetadata {
    pub name: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct ContentResources {
    pub vcpus: Option<u64>,
    pub memory: Option<u64>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct ContentRootfs {
    pub size_mib: Option<u64>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct ContentPayment {
    #[serde(rename = "type")]
    pub payment_type: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct ContentRuntime {
    #[serde(rename = "ref")]
    pub reference: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct ContentCode {
    pub entrypoint: Option<String>,
}

// --- Projections ---

#[derive(Debug, Clone, Serialize)]
pub struct InstanceSummary {
    pub item_hash: Option<String>,
    pub name: String,
    pub created: DateTime<Utc>,
    pub vcpus: Option<u64>,
    pub memory: Option<u64>,
    pub rootfs_size: Option<u64>,
    pub payment: Option<String>,
}

impl InstanceSummary {
    pub fn from_message(msg: &IndexedMessage) -> Self {
        let content = msg.content.as_ref();
        InstanceSummary {
            item_hash: msg.item_hash.clone(),
            name: display_name(content),
            created: instant_from_epoch(msg.time.unwrap_or(0.0)),
            vcpus: content
                .and_then(|c| c.resources.as_ref())
                .and_then(|r| r.vcpus),
            memory: content
                .and_then(|c| c.resources.as_ref())
                .and_then(|r| r.memory),
            rootfs_size: content
                .and_then(|c| c.rootfs.as_ref())
                .and_then(|r| r.size_mib),
            payment: content
                .and_then(|c| c.payment.as_ref())
                .and_then(|p| p.payment_type.clone()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgramSummary {
    pub item_hash: Option<String>,
    pub name: String,
    pub created: DateTime<Utc>,
    pub runtime: String,
    pub entrypoint: Option<String>,
}

impl ProgramSummary {
    pub fn from_message(msg: &IndexedMessage) -> Self {
        let content = msg.content.as_ref();
        let reference = content
            .and_then(|c| c.runtime.as_ref())
            .and_then(|r| r.reference.as_deref())
            .unwrap_or("");
        ProgramSummary {
            item_hash: msg.item_hash.clone(),
            name: display_name(content),
            created: instant_from_epoch(msg.time.unwrap_or(0.0)),
            runtime: truncate_with_ellipsis(reference, RUNTIME_REF_WIDTH),
            entrypoint: content
                .and_then(|c| c.code.as_ref())
                .and_then(|c| c.entrypoint.clone()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageSummary {
    #[serde(rename = "type")]
    pub message_type: Option<String>,
    pub item_hash: String,
    pub time: DateTime<Utc>,
    pub channel: Option<String>,
    pub size: Option<u64>,
}

impl MessageSummary {
    pub fn from_message(msg: &IndexedMessage) -> Self {
        MessageSummary {
            message_type: msg.message_type.clone(),
            item_hash: truncate_with_ellipsis(msg.item_hash.as_deref().unwrap_or(""), ITEM_HASH_WIDTH),
            time: instant_from_epoch(msg.time.unwrap_or(0.0)),
            channel: msg.channel.clone(),
            size: msg.size,
        }
    }
}

fn display_name(content: Option<&MessageContent>) -> String {
    content
        .and_then(|c| c.metadata.as_ref())
        .and_then(|m| m.name.clone())
        .unwrap_or_else(|| DEFAULT_NAME.to_string())
}

/// Fixed-width truncation: the suffix is appended even when the value is
/// already shorter than `width`.
pub fn truncate_with_ellipsis(value: &str, width: usize) -> String {
    let head: String = value.chars().take(width).collect();
    format!("{head}...")
}

/// Epoch seconds (possibly fractional) to an instant; out-of-range values
/// collapse to the epoch itself, matching the `time`-defaults-to-0 rule.
pub fn instant_from_epoch(seconds: f64) -> DateTime<Utc> {
    let secs = seconds.trunc() as i64;
    let nanos = (seconds.fract() * 1e9) as u32;
    DateTime::from_timestamp(secs, nanos).unwrap_or(DateTime::UNIX_EPOCH)
}
