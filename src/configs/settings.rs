use std::error::Error;
use std::{env, fs};

use serde::{Deserialize, Serialize};

use crate::configs::normalize_path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logger {
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gateway {
    pub host: String,
    pub port: u16,
    pub client_id: String,
    pub auth: Option<GatewayAuth>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayAuth {
    pub cert_path: String,
    pub key_path: String,
}

/// Topic strings are deployment configuration, not behavior; the bridge
/// only cares about "legacy in", "normalized out" and "override out".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topics {
    pub legacy_schedule: String,
    pub schedule: String,
    #[serde(rename = "override")]
    pub override_command: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub logger: Logger,
    pub gateway: Gateway,
    pub topics: Topics,
}

impl Settings {
    pub fn new() -> Result<Self, Box<dyn Error>> {
        let path =
            env::var("SCHEDULE_BRIDGE_CONFIG").unwrap_or_else(|_| "configs/default.toml".into());

        let mut settings: Settings = toml::from_str(&fs::read_to_string(&path)?)?;

        if let Some(auth) = &settings.gateway.auth {
            let cert_path = normalize_path(&auth.cert_path)?.to_string_lossy().to_string();
            let key_path = normalize_path(&auth.key_path)?.to_string_lossy().to_string();

            settings.gateway.auth = Some(GatewayAuth { cert_path, key_path });
        }

        Ok(settings)
    }
}
