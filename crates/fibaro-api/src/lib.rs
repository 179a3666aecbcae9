// fibaro-api: Async Rust client for the Fibaro Home Center REST API

pub mod client;
pub mod devices;
pub mod error;
pub mod models;
pub mod settings;
pub mod transport;

pub use client::HubClient;
pub use error::Error;
pub use models::{CurrentVersion, HubInfo};
pub use transport::{TlsMode, TransportConfig};
