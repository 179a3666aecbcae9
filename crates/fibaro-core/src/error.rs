// ── Core error types ──
//
// User-facing errors from fibaro-core. Consumers never see HTTP status
// codes or JSON parse failures directly; the `From<fibaro_api::Error>`
// impl translates transport-layer errors into domain variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot connect to hub at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Hub request timed out")]
    Timeout,

    // ── Data errors ──────────────────────────────────────────────────
    #[error("Invalid device payload: {reason}")]
    InvalidDevice { reason: String },

    #[error("Device entry {device_id} has no identifiers")]
    MissingIdentifier { device_id: String },

    #[error("Failed to serialize diagnostics: {0}")]
    Serialization(#[from] serde_json::Error),

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("API error: {message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<fibaro_api::Error> for CoreError {
    fn from(err: fibaro_api::Error) -> Self {
        match err {
            fibaro_api::Error::Authentication { message } => {
                CoreError::AuthenticationFailed { message }
            }
            fibaro_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            fibaro_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            fibaro_api::Error::Tls(msg) => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {msg}"),
            },
            fibaro_api::Error::Http { status, message } => CoreError::Api {
                message,
                status: Some(status),
            },
            fibaro_api::Error::Deserialization { message, body: _ } => CoreError::Api {
                message: format!("Unexpected hub response: {message}"),
                status: None,
            },
        }
    }
}
