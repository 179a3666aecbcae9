// ── Config entry ──

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CoreError;

/// Integration domain under which hub config entries are registered.
pub const DOMAIN: &str = "fibaro";

/// One configured integration instance, as persisted by the host.
///
/// `data` holds the connection settings the entry was created with
/// (`url`, `username`, `password`, `import_plugins`); `options` holds
/// user-tunable settings. Read-only to diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigEntry {
    pub entry_id: String,
    pub version: u32,
    pub minor_version: u32,
    pub domain: String,
    pub title: String,
    #[serde(default)]
    pub data: Map<String, Value>,
    #[serde(default)]
    pub options: Map<String, Value>,
    #[serde(default)]
    pub pref_disable_new_entities: bool,
    #[serde(default)]
    pub pref_disable_polling: bool,
    pub source: String,
    #[serde(default)]
    pub unique_id: Option<String>,
    #[serde(default)]
    pub disabled_by: Option<String>,
}

impl ConfigEntry {
    /// A user-created entry for the hub domain with empty options.
    pub fn new(
        entry_id: impl Into<String>,
        title: impl Into<String>,
        data: Map<String, Value>,
    ) -> Self {
        Self {
            entry_id: entry_id.into(),
            version: 1,
            minor_version: 1,
            domain: DOMAIN.into(),
            title: title.into(),
            data,
            options: Map::new(),
            pref_disable_new_entities: false,
            pref_disable_polling: false,
            source: "user".into(),
            unique_id: None,
            disabled_by: None,
        }
    }

    pub fn with_unique_id(mut self, unique_id: impl Into<String>) -> Self {
        self.unique_id = Some(unique_id.into());
        self
    }

    /// Full structured representation, every field included.
    pub fn as_value(&self) -> Result<Value, CoreError> {
        Ok(serde_json::to_value(self)?)
    }
}
