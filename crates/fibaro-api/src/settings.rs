// Settings endpoints
//
// Hub identity and firmware information.

use tracing::debug;

use crate::client::HubClient;
use crate::error::Error;
use crate::models::HubInfo;

impl HubClient {
    /// Read the hub's identity and firmware information.
    ///
    /// `GET /api/settings/info`
    pub async fn hub_info(&self) -> Result<HubInfo, Error> {
        debug!("reading hub info");
        self.get("settings/info").await
    }
}
