// ── Hub device ──

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reserved device id of the hub's own record.
pub const HUB_DEVICE_ID: u64 = 1;

/// A device as reported by the hub.
///
/// Only the ids are lifted out of the payload; `raw_data` is the untouched
/// vendor JSON and is what diagnostics expose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub fibaro_id: u64,
    /// `None` for top-level devices.
    pub parent_fibaro_id: Option<u64>,
    pub raw_data: Value,
}

impl Device {
    /// Whether this is the record representing the hub itself.
    pub fn is_hub(&self) -> bool {
        self.fibaro_id == HUB_DEVICE_ID
    }

    /// Whether this device is `id` itself or one of its direct children.
    pub fn belongs_to(&self, id: u64) -> bool {
        self.fibaro_id == id || self.parent_fibaro_id == Some(id)
    }
}
