// Hub HTTP client
//
// Wraps `reqwest::Client` with Home Center URL construction, basic auth
// and status mapping. Endpoint methods (devices, settings) live in their
// own modules as inherent impls to keep this one about transport.

use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

const BODY_PREVIEW_CHARS: usize = 200;

/// Raw HTTP client for a Fibaro Home Center.
///
/// Every request is authenticated with HTTP basic auth; the hub keeps no
/// session between calls. Paths are resolved against the `/api/` root, so
/// `devices` becomes `{base}/api/devices`.
pub struct HubClient {
    http: reqwest::Client,
    base_url: Url,
    username: String,
    password: SecretString,
}

impl HubClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// `base_url` may point either at the hub root (`http://192.168.1.10`)
    /// or at the API root (`http://192.168.1.10/api/`); both are normalized
    /// to the latter.
    pub fn new(
        base_url: &Url,
        username: String,
        password: SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self::with_client(http, base_url, username, password))
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(
        http: reqwest::Client,
        base_url: &Url,
        username: String,
        password: SecretString,
    ) -> Self {
        Self {
            http,
            base_url: normalize_base_url(base_url),
            username,
            password,
        }
    }

    /// The normalized API root (always ends in `/api/`).
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build a full URL for an API path relative to the `/api/` root.
    pub(crate) fn api_url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send an authenticated GET request and decode the JSON body.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.api_url(path)?;
        debug!("GET {}", url);

        let resp = self
            .http
            .get(url)
            .basic_auth(&self.username, Some(self.password.expose_secret()))
            .send()
            .await?;

        Self::parse_response(resp).await
    }

    /// Map the HTTP status to an error or decode the body.
    async fn parse_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();
        trace!(%status, "hub response");

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(Error::Authentication {
                message: "invalid username or password".into(),
            });
        }

        if status == reqwest::StatusCode::FORBIDDEN {
            return Err(Error::Authentication {
                message: "insufficient permissions (HTTP 403)".into(),
            });
        }

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Http {
                status: status.as_u16(),
                message: preview(&body),
            });
        }

        let body = resp.text().await?;

        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: format!("{e} (body preview: {:?})", preview(&body)),
            body,
        })
    }
}

/// Point a user-supplied hub URL at the `/api/` root.
pub fn normalize_base_url(url: &Url) -> Url {
    let mut url = url.clone();
    let path = url.path().trim_end_matches('/');
    let path = if path.ends_with("/api") {
        format!("{path}/")
    } else {
        format!("{path}/api/")
    };
    url.set_path(&path);
    url
}

fn preview(body: &str) -> String {
    body.chars().take(BODY_PREVIEW_CHARS).collect()
}
