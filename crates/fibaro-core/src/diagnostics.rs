// ── Diagnostics handlers ──
//
// Config-entry and device diagnostics for a hub. Both read the device list
// fresh from the controller, optionally narrow it to one device, and return
// a redacted snapshot. Failures propagate as-is; there is no partial result.

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::controller::Controller;
use crate::error::CoreError;
use crate::model::{ConfigEntry, Device, DeviceEntry, HubIdentity};
use crate::redact::Redactor;

// ── Snapshot ─────────────────────────────────────────────────────

/// A redacted diagnostics document.
///
/// Serializes as `{ "config": …, "software_version": …, "fibaro_devices": […] }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Snapshot(Value);

impl Snapshot {
    /// The redacted config entry.
    pub fn config(&self) -> &Value {
        &self.0["config"]
    }

    pub fn software_version(&self) -> Option<&str> {
        self.0["software_version"].as_str()
    }

    /// Redacted raw device payloads, in hub order.
    pub fn devices(&self) -> &[Value] {
        self.0["fibaro_devices"]
            .as_array()
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

#[derive(Serialize)]
struct DiagnosticsData<'a> {
    config: Value,
    software_version: &'a str,
    fibaro_devices: Vec<&'a Value>,
}

/// Combine the config entry, hub firmware version and device payloads,
/// then redact the result.
pub fn build_snapshot<C: Controller>(
    entry: &ConfigEntry,
    controller: &C,
    devices: &[Device],
) -> Result<Snapshot, CoreError> {
    let data = DiagnosticsData {
        config: entry.as_value()?,
        software_version: controller.hub_software_version(),
        fibaro_devices: devices.iter().map(|d| &d.raw_data).collect(),
    };
    let value = serde_json::to_value(&data)?;
    Ok(Snapshot(Redactor::diagnostics().redact(value)))
}

// ── Filtering ────────────────────────────────────────────────────

/// Narrow a device list to the registry target.
///
/// The hub serial selects the hub record (device id 1) only. A device id
/// selects that device plus its direct children; grandchildren are not
/// followed. Any other identity selects nothing.
pub fn filter_devices(devices: Vec<Device>, target: &HubIdentity, hub_serial: &str) -> Vec<Device> {
    if target.as_serial() == Some(hub_serial) {
        return devices.into_iter().filter(Device::is_hub).collect();
    }

    let Some(id) = target.as_device_id() else {
        debug!(%target, "identity matches no hub device");
        return Vec::new();
    };

    devices.into_iter().filter(|d| d.belongs_to(id)).collect()
}

// ── Entry points ─────────────────────────────────────────────────

/// Diagnostics for a whole config entry: every device the hub reports.
pub async fn get_config_entry_diagnostics<C: Controller>(
    controller: &C,
    entry: &ConfigEntry,
) -> Result<Snapshot, CoreError> {
    let devices = controller.read_devices().await?;
    let snapshot = build_snapshot(entry, controller, &devices)?;

    info!(
        entry_id = %entry.entry_id,
        devices = devices.len(),
        "config entry diagnostics collected"
    );
    Ok(snapshot)
}

/// Diagnostics for one registry device and its direct children, or for the
/// hub record when the device is the hub itself.
pub async fn get_device_diagnostics<C: Controller>(
    controller: &C,
    entry: &ConfigEntry,
    device: &DeviceEntry,
) -> Result<Snapshot, CoreError> {
    let target = device
        .hub_identity()
        .ok_or_else(|| CoreError::MissingIdentifier {
            device_id: device.id.clone(),
        })?;

    let devices = controller.read_devices().await?;
    let total = devices.len();
    let filtered = filter_devices(devices, target, controller.hub_serial());
    let snapshot = build_snapshot(entry, controller, &filtered)?;

    info!(
        entry_id = %entry.entry_id,
        %target,
        matched = filtered.len(),
        total,
        "device diagnostics collected"
    );
    Ok(snapshot)
}
