// ── Device registry entry ──
//
// The host's registry maps each physical device to identifier tuples of
// `(domain, identity)`. For hub devices the identity is either the numeric
// device id or, for the hub itself, its serial number.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── HubIdentity ─────────────────────────────────────────────────────

/// Hub-side identity carried in a registry identifier.
///
/// Comparison is strict: a numeric id never equals a serial, even when
/// the serial happens to be all digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HubIdentity {
    DeviceId(u64),
    Serial(String),
}

impl HubIdentity {
    pub fn as_device_id(&self) -> Option<u64> {
        match self {
            Self::DeviceId(id) => Some(*id),
            Self::Serial(_) => None,
        }
    }

    pub fn as_serial(&self) -> Option<&str> {
        match self {
            Self::Serial(s) => Some(s),
            Self::DeviceId(_) => None,
        }
    }
}

impl fmt::Display for HubIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeviceId(id) => write!(f, "{id}"),
            Self::Serial(s) => write!(f, "{s}"),
        }
    }
}

/// Parses user input: all digits is a device id, anything else a serial.
impl FromStr for HubIdentity {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse::<u64>()
            .map_or_else(|_| Self::Serial(s.to_owned()), Self::DeviceId))
    }
}

impl From<u64> for HubIdentity {
    fn from(id: u64) -> Self {
        Self::DeviceId(id)
    }
}

impl From<String> for HubIdentity {
    fn from(s: String) -> Self {
        Self::Serial(s)
    }
}

impl From<&str> for HubIdentity {
    fn from(s: &str) -> Self {
        Self::Serial(s.to_owned())
    }
}

// ── DeviceEntry ─────────────────────────────────────────────────────

/// A device registry record targeted by a device diagnostics request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceEntry {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    /// `(domain, identity)` tuples in registration order.
    pub identifiers: Vec<(String, HubIdentity)>,
}

impl DeviceEntry {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            identifiers: Vec::new(),
        }
    }

    pub fn with_identifier(
        mut self,
        domain: impl Into<String>,
        identity: impl Into<HubIdentity>,
    ) -> Self {
        self.identifiers.push((domain.into(), identity.into()));
        self
    }

    /// The identity of the first identifier tuple.
    pub fn hub_identity(&self) -> Option<&HubIdentity> {
        self.identifiers.first().map(|(_, identity)| identity)
    }
}
