// ── Redaction ──
//
// Key-based masking over arbitrary JSON trees. Every map entry whose key is
// in the list has its value replaced by `REDACTED`, wherever it sits and
// whatever its type. Keys, list lengths and all other values are untouched.

use serde_json::Value;

/// Marker written in place of a redacted value.
pub const REDACTED: &str = "**REDACTED**";

/// Keys masked in hub diagnostics: credentials, the hub URL and anything
/// that names or identifies the installation.
pub const TO_REDACT: [&str; 5] = ["password", "username", "url", "unique_id", "title"];

/// A borrowed list of keys to mask.
#[derive(Debug, Clone, Copy, Default)]
pub struct Redactor<'k> {
    keys: &'k [&'k str],
}

impl<'k> Redactor<'k> {
    pub const fn new(keys: &'k [&'k str]) -> Self {
        Self { keys }
    }

    /// The redactor applied to every diagnostics snapshot.
    pub const fn diagnostics() -> Redactor<'static> {
        Redactor::new(&TO_REDACT)
    }

    pub fn is_redacted_key(&self, key: &str) -> bool {
        self.keys.iter().any(|k| *k == key)
    }

    /// Mask every occurrence of a configured key, at any depth.
    pub fn redact(&self, value: Value) -> Value {
        match value {
            Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, value)| {
                        let value = if self.is_redacted_key(&key) {
                            Value::String(REDACTED.to_owned())
                        } else {
                            self.redact(value)
                        };
                        (key, value)
                    })
                    .collect(),
            ),
            Value::Array(items) => {
                Value::Array(items.into_iter().map(|item| self.redact(item)).collect())
            }
            scalar => scalar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn masks_keys_at_every_depth() {
        let input = json!({
            "title": "Home",
            "data": {
                "url": "http://10.0.0.2/api/",
                "username": "admin",
                "password": "hunter2",
                "import_plugins": true
            },
            "devices": [
                { "id": 2, "title": "Lamp", "nested": [{ "unique_id": "abc" }] }
            ]
        });

        let output = Redactor::diagnostics().redact(input);

        assert_eq!(
            output,
            json!({
                "title": REDACTED,
                "data": {
                    "url": REDACTED,
                    "username": REDACTED,
                    "password": REDACTED,
                    "import_plugins": true
                },
                "devices": [
                    { "id": 2, "title": REDACTED, "nested": [{ "unique_id": REDACTED }] }
                ]
            })
        );
    }

    #[test]
    fn masks_non_string_and_container_values() {
        let input = json!({
            "unique_id": null,
            "title": { "text": "Lamp" },
            "username": ["a", "b"],
            "password": ""
        });

        let output = Redactor::diagnostics().redact(input);

        assert_eq!(
            output,
            json!({
                "unique_id": REDACTED,
                "title": REDACTED,
                "username": REDACTED,
                "password": REDACTED
            })
        );
    }

    #[test]
    fn leaves_other_values_untouched() {
        let input = json!({
            "id": 7,
            "properties": { "value": 21.5, "dead": false, "log": ["x", 1, null] },
            "name": "password"
        });

        let output = Redactor::diagnostics().redact(input.clone());

        assert_eq!(output, input);
    }

    #[test]
    fn is_idempotent() {
        let redactor = Redactor::diagnostics();
        let input = json!([{ "title": "a", "x": { "url": "b" } }, 3, "title"]);

        let once = redactor.redact(input);
        let twice = redactor.redact(once.clone());

        assert_eq!(once, twice);
    }

    #[test]
    fn custom_key_set() {
        let redactor = Redactor::new(&["token"]);

        let output = redactor.redact(json!({ "token": "t", "title": "kept" }));

        assert_eq!(output, json!({ "token": REDACTED, "title": "kept" }));
    }

    #[test]
    fn empty_key_set_is_identity() {
        let input = json!({ "password": "p", "nested": [{ "title": "t" }] });

        assert_eq!(Redactor::default().redact(input.clone()), input);
    }

    #[test]
    fn top_level_scalar_passes_through() {
        assert_eq!(Redactor::diagnostics().redact(json!("title")), json!("title"));
    }
}
