use anyhow::Result;

use crate::api;
use crate::core::AppConfig;

pub async fn run(host: Option<String>, port: Option<u16>) -> Result<()> {
    let mut config = AppConfig::from_env()?;
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port.to_string();
    }
    api::serve(config).await
}
