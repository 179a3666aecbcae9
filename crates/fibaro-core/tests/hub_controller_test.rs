#![allow(clippy::unwrap_used)]
// End-to-end diagnostics through `HubController` against a mocked hub.

use pretty_assertions::assert_eq;
use secrecy::SecretString;
use serde_json::{Map, json};
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use fibaro_core::{
    ConfigEntry, Controller, ControllerConfig, CoreError, DeviceEntry, HubController, REDACTED,
    get_config_entry_diagnostics, get_device_diagnostics,
};

const SERIAL: &str = "HC3-00012345";

// ── Helpers ─────────────────────────────────────────────────────────

async fn mock_hub() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/settings/info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "serialNumber": SERIAL,
            "hcName": "Living room HC3",
            "currentVersion": { "version": "5.150.27", "type": "stable" }
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/devices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "parentId": 0, "title": "Hub" },
            { "id": 2, "parentId": 1, "username": "u", "title": "Light" },
            { "id": 3, "parentId": 2, "title": "Child" }
        ])))
        .mount(&server)
        .await;

    server
}

fn config_for(server: &MockServer) -> ControllerConfig {
    ControllerConfig::new(
        Url::parse(&server.uri()).unwrap(),
        "admin",
        SecretString::from("hunter2".to_string()),
    )
}

fn entry(server: &MockServer) -> ConfigEntry {
    let mut data = Map::new();
    data.insert("url".into(), json!(format!("{}/api/", server.uri())));
    data.insert("username".into(), json!("admin"));
    data.insert("password".into(), json!("hunter2"));
    data.insert("import_plugins".into(), json!(false));
    ConfigEntry::new("entry-1", "Living room HC3", data).with_unique_id(SERIAL)
}

// ── Tests ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_connect_reads_hub_identity() {
    let server = mock_hub().await;

    let controller = HubController::connect(&config_for(&server)).await.unwrap();

    assert_eq!(controller.hub_serial(), SERIAL);
    assert_eq!(controller.hub_software_version(), "5.150.27");
    assert_eq!(controller.info().hc_name.as_deref(), Some("Living room HC3"));
}

#[tokio::test]
async fn test_config_entry_diagnostics() {
    let server = mock_hub().await;
    let controller = HubController::connect(&config_for(&server)).await.unwrap();

    let snapshot = get_config_entry_diagnostics(&controller, &entry(&server))
        .await
        .unwrap();

    assert_eq!(snapshot.software_version(), Some("5.150.27"));
    assert_eq!(snapshot.devices().len(), 3);
    assert_eq!(snapshot.config()["data"]["password"], REDACTED);
    assert_eq!(snapshot.config()["data"]["url"], REDACTED);
    assert_eq!(snapshot.config()["data"]["import_plugins"], false);
}

#[tokio::test]
async fn test_device_diagnostics_device_and_children() {
    let server = mock_hub().await;
    let controller = HubController::connect(&config_for(&server)).await.unwrap();
    let device = DeviceEntry::new("reg-2").with_identifier("fibaro", 2_u64);

    let snapshot = get_device_diagnostics(&controller, &entry(&server), &device)
        .await
        .unwrap();

    assert_eq!(
        snapshot.devices(),
        &[
            json!({ "id": 2, "parentId": 1, "username": REDACTED, "title": REDACTED }),
            json!({ "id": 3, "parentId": 2, "title": REDACTED }),
        ]
    );
}

#[tokio::test]
async fn test_device_diagnostics_hub() {
    let server = mock_hub().await;
    let controller = HubController::connect(&config_for(&server)).await.unwrap();
    let device = DeviceEntry::new("reg-hub").with_identifier("fibaro", SERIAL);

    let snapshot = get_device_diagnostics(&controller, &entry(&server), &device)
        .await
        .unwrap();

    assert_eq!(
        snapshot.devices(),
        &[json!({ "id": 1, "parentId": 0, "title": REDACTED })]
    );
}

#[tokio::test]
async fn test_device_read_failure_surfaces() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/settings/info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "serialNumber": SERIAL,
            "softVersion": "4.600"
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/devices"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .expect(1)
        .mount(&server)
        .await;

    let controller = HubController::connect(&config_for(&server)).await.unwrap();
    let err = get_config_entry_diagnostics(&controller, &entry(&server))
        .await
        .unwrap_err();

    assert!(
        matches!(err, CoreError::Api { status: Some(500), .. }),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn test_bad_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/settings/info"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = HubController::connect(&config_for(&server)).await;

    assert!(
        matches!(result, Err(CoreError::AuthenticationFailed { .. })),
        "expected AuthenticationFailed"
    );
}
