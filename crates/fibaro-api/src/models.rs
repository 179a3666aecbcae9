// Hub API response types
//
// Only `settings/info` gets a typed model. Device payloads stay as raw
// `serde_json::Value`s because diagnostics must carry every vendor field,
// including the ones no firmware documents.

use serde::{Deserialize, Serialize};

/// Hub information from `GET /api/settings/info`.
///
/// Home Center 2 reports `softVersion`; Home Center 3 and Yubii report a
/// `currentVersion` object instead. Everything else lands in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HubInfo {
    pub serial_number: String,
    #[serde(default)]
    pub hc_name: Option<String>,
    #[serde(default)]
    pub soft_version: Option<String>,
    #[serde(default)]
    pub current_version: Option<CurrentVersion>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub mac: Option<String>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Firmware version block reported by newer hubs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentVersion {
    pub version: String,
    #[serde(default, rename = "type")]
    pub release_type: Option<String>,
}

impl HubInfo {
    /// The running firmware version, whichever field the hub reports it in.
    pub fn software_version(&self) -> Option<&str> {
        self.current_version
            .as_ref()
            .map(|v| v.version.as_str())
            .or(self.soft_version.as_deref())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn software_version_prefers_current_version() {
        let info: HubInfo = serde_json::from_value(json!({
            "serialNumber": "HC3-00012345",
            "softVersion": "4.600",
            "currentVersion": { "version": "5.150.27", "type": "stable" }
        }))
        .unwrap();

        assert_eq!(info.software_version(), Some("5.150.27"));
    }

    #[test]
    fn software_version_falls_back_to_soft_version() {
        let info: HubInfo = serde_json::from_value(json!({
            "serialNumber": "HC2-011111",
            "softVersion": "4.600",
            "zwaveRegion": "EU"
        }))
        .unwrap();

        assert_eq!(info.software_version(), Some("4.600"));
        assert_eq!(info.extra.get("zwaveRegion"), Some(&json!("EU")));
    }
}
