mod types;

pub use types::*;

use crate::Result;
use std::env;
use std::io::ErrorKind;
use tracing::debug;

/// Loads the configuration once at startup. The YAML file is optional;
/// when it is absent every setting falls back to its default. Agent
/// addressing always comes from the environment afterwards.
pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    let mut config = load_file(&config_path).await?;
    apply_env(&mut config.agent);

    Ok(config)
}

async fn load_file(path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", path);

    match tokio::fs::read_to_string(path).await {
        Ok(raw) => Ok(serde_yaml::from_str(&raw)?),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No configuration file at {}, using defaults", path);
            Ok(Config::default())
        }
        Err(e) => Err(e.into()),
    }
}

fn apply_env(agent: &mut AgentConfig) {
    if let Ok(agent_id) = env::var("BEDROCK_AGENT_ID") {
        agent.agent_id = Some(agent_id);
    }
    if let Ok(agent_alias_id) = env::var("BEDROCK_AGENT_ALIAS_ID") {
        agent.agent_alias_id = Some(agent_alias_id);
    }
    if let Ok(region) = env::var("AWS_REGION") {
        agent.region = region;
    }
}
