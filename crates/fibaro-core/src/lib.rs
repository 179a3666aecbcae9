//! Diagnostics layer between `fibaro-api` and support tooling.
//!
//! - **[`Controller`]**: Seam over a connected hub: serial, firmware
//!   version and a fresh device read. [`HubController`] is the HTTP-backed
//!   implementation; handlers take any `Controller` by reference.
//!
//! - **[`diagnostics`]**: The two request handlers
//!   ([`get_config_entry_diagnostics`], [`get_device_diagnostics`]), the
//!   device filter they share, and the snapshot builder.
//!
//! - **[`Redactor`]**: Recursive key-based masking over `serde_json::Value`
//!   trees. Snapshots leave this crate already redacted.
//!
//! - **Domain model** ([`model`]): [`ConfigEntry`], [`Device`],
//!   [`DeviceEntry`] and [`HubIdentity`].

pub mod config;
pub mod controller;
pub mod convert;
pub mod diagnostics;
pub mod error;
pub mod model;
pub mod redact;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{ControllerConfig, TlsVerification};
pub use controller::{Controller, HubController};
pub use diagnostics::{
    Snapshot, build_snapshot, filter_devices, get_config_entry_diagnostics,
    get_device_diagnostics,
};
pub use error::CoreError;
pub use model::{ConfigEntry, DOMAIN, Device, DeviceEntry, HUB_DEVICE_ID, HubIdentity};
pub use redact::{REDACTED, Redactor, TO_REDACT};
