// ── Controller abstraction ──
//
// The seam between diagnostics and a live hub. Handlers receive the
// controller explicitly instead of looking it up in shared state.

use std::future::Future;

use tracing::{debug, info, warn};

use fibaro_api::transport::{TlsMode, TransportConfig};
use fibaro_api::{HubClient, HubInfo};

use crate::config::{ControllerConfig, TlsVerification};
use crate::convert::devices_from_raw;
use crate::error::CoreError;
use crate::model::Device;

/// Read access to a connected hub.
pub trait Controller {
    /// Serial number identifying the hub itself.
    fn hub_serial(&self) -> &str;

    /// Firmware version the hub reports.
    fn hub_software_version(&self) -> &str;

    /// Read the current device list from the hub.
    ///
    /// Every call goes to the hub; nothing is cached or retried.
    fn read_devices(&self) -> impl Future<Output = Result<Vec<Device>, CoreError>> + Send;
}

// ── HubController ────────────────────────────────────────────────

/// HTTP-backed [`Controller`].
///
/// Hub identity and firmware version are read once by
/// [`connect()`](Self::connect); devices are read on demand.
pub struct HubController {
    client: HubClient,
    info: HubInfo,
    software_version: String,
}

impl HubController {
    /// Build the HTTP client and read the hub's identity.
    pub async fn connect(config: &ControllerConfig) -> Result<Self, CoreError> {
        let transport = build_transport(config);
        let client = HubClient::new(
            &config.url,
            config.username.clone(),
            config.password.clone(),
            &transport,
        )?;
        debug!(url = %client.base_url(), "connecting to hub");

        let controller = Self::from_client(client).await?;
        info!(
            serial = controller.hub_serial(),
            version = controller.hub_software_version(),
            "connected to hub"
        );
        Ok(controller)
    }

    /// Wrap an existing client, reading the hub's identity through it.
    pub async fn from_client(client: HubClient) -> Result<Self, CoreError> {
        let info = client.hub_info().await?;
        let software_version = info.software_version().unwrap_or_default().to_owned();
        Ok(Self {
            client,
            info,
            software_version,
        })
    }

    /// The hub information captured at connect time.
    pub fn info(&self) -> &HubInfo {
        &self.info
    }
}

impl Controller for HubController {
    fn hub_serial(&self) -> &str {
        &self.info.serial_number
    }

    fn hub_software_version(&self) -> &str {
        &self.software_version
    }

    async fn read_devices(&self) -> Result<Vec<Device>, CoreError> {
        let raw = self.client.list_devices().await.inspect_err(|e| {
            if e.is_transient() {
                warn!(error = %e, "device read failed, hub may be temporarily unavailable");
            } else {
                debug!(error = %e, "device read failed");
            }
        })?;
        devices_from_raw(raw)
    }
}

fn build_transport(config: &ControllerConfig) -> TransportConfig {
    let tls = match &config.tls {
        TlsVerification::SystemDefaults => TlsMode::System,
        TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
        TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
    };
    TransportConfig {
        tls,
        timeout: config.timeout,
    }
}
