// Device endpoints
//
// `GET /api/devices` returns every device the hub knows about, including
// the reserved hub device (id 1) and plugin/child devices.

use tracing::debug;

use crate::client::HubClient;
use crate::error::Error;

impl HubClient {
    /// List all devices as raw JSON payloads.
    ///
    /// `GET /api/devices`
    pub async fn list_devices(&self) -> Result<Vec<serde_json::Value>, Error> {
        debug!("listing devices");
        let devices: Vec<serde_json::Value> = self.get("devices").await?;
        debug!(count = devices.len(), "devices received");
        Ok(devices)
    }
}
