// ── Domain model ──
//
// Host-side records (config entry, device registry entry) and the hub's
// device list, as consumed by the diagnostics handlers.

pub mod config_entry;
pub mod device;
pub mod device_entry;

pub use config_entry::{ConfigEntry, DOMAIN};
pub use device::{Device, HUB_DEVICE_ID};
pub use device_entry::{DeviceEntry, HubIdentity};
