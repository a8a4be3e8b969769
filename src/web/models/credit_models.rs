use serde::Deserialize;
use serde_json::Value;

/// Accounting view for one address (`/vm_cost_views/{address}`).
///
/// The fields are passed through to clients unchanged, so they stay untyped
/// JSON values rather than committing to a number representation the
/// accounting service does not guarantee.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct VmCostView {
    pub balance: Option<Value>,
    pub total_cost: Option<Value>,
    pub vms: Option<Vec<Value>>,
}
