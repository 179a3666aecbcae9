// ── API-to-domain type conversions ──
//
// Bridges raw `fibaro_api` device payloads into `Device`. Only `id` and
// `parentId` are read; the payload itself is kept verbatim.

use serde_json::Value;

use crate::error::CoreError;
use crate::model::Device;

const PAYLOAD_PREVIEW_CHARS: usize = 120;

/// The hub reports `parentId: 0` for devices without a parent.
const NO_PARENT: u64 = 0;

impl TryFrom<Value> for Device {
    type Error = CoreError;

    fn try_from(raw: Value) -> Result<Self, Self::Error> {
        let Some(fibaro_id) = raw.get("id").and_then(Value::as_u64) else {
            let preview: String = raw.to_string().chars().take(PAYLOAD_PREVIEW_CHARS).collect();
            return Err(CoreError::InvalidDevice {
                reason: format!("missing numeric `id` in {preview}"),
            });
        };

        let parent_fibaro_id = raw
            .get("parentId")
            .and_then(Value::as_u64)
            .filter(|&id| id != NO_PARENT);

        Ok(Self {
            fibaro_id,
            parent_fibaro_id,
            raw_data: raw,
        })
    }
}

/// Convert a raw `GET devices` response, preserving order.
pub fn devices_from_raw(raw: Vec<Value>) -> Result<Vec<Device>, CoreError> {
    raw.into_iter().map(Device::try_from).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_ids_and_keeps_payload() {
        let raw = json!({ "id": 34, "parentId": 33, "name": "Lamp", "properties": { "value": 0 } });

        let device = Device::try_from(raw.clone()).unwrap();

        assert_eq!(device.fibaro_id, 34);
        assert_eq!(device.parent_fibaro_id, Some(33));
        assert_eq!(device.raw_data, raw);
    }

    #[test]
    fn zero_or_missing_parent_is_top_level() {
        let zero = Device::try_from(json!({ "id": 1, "parentId": 0 })).unwrap();
        let missing = Device::try_from(json!({ "id": 5 })).unwrap();

        assert_eq!(zero.parent_fibaro_id, None);
        assert_eq!(missing.parent_fibaro_id, None);
        assert!(zero.is_hub());
    }

    #[test]
    fn missing_id_is_rejected() {
        let err = Device::try_from(json!({ "name": "ghost" })).unwrap_err();
        assert!(matches!(err, CoreError::InvalidDevice { .. }), "got: {err:?}");
    }

    #[test]
    fn devices_from_raw_preserves_order() {
        let devices =
            devices_from_raw(vec![json!({ "id": 9 }), json!({ "id": 3 }), json!({ "id": 7 })])
                .unwrap();

        let ids: Vec<u64> = devices.iter().map(|d| d.fibaro_id).collect();
        assert_eq!(ids, vec![9, 3, 7]);
    }
}
