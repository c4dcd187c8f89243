use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub agent: AgentConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Bedrock Agents addressing. Both ids are optional so that an unset
/// environment never prevents the server from starting; requests fail
/// with a configuration error instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    #[serde(default)]
    pub agent_id: Option<String>,
    #[serde(default)]
    pub agent_alias_id: Option<String>,
    #[serde(default = "default_region")]
    pub region: String,
}

impl AgentConfig {
    pub fn is_configured(&self) -> bool {
        self.agent_id.is_some() && self.agent_alias_id.is_some()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logs: LogsConfig::default(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            agent_id: None,
            agent_alias_id: None,
            region: default_region(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_region() -> String {
    "us-east-1".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_config_defaults() {
        let config: Config = serde_yaml::from_str("{}").unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.logs.level, "info");
        assert_eq!(config.agent.agent_id, None);
        assert_eq!(config.agent.agent_alias_id, None);
        assert_eq!(config.agent.region, "us-east-1");
    }

    #[test]
    fn test_config_from_yaml() {
        let yaml = r#"
server:
  host: "127.0.0.1"
  port: 5000
  logs:
    level: debug
agent:
  agent_id: AGENT123
  agent_alias_id: ALIAS456
  region: eu-west-1
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.logs.level, "debug");
        assert_eq!(config.agent.agent_id.as_deref(), Some("AGENT123"));
        assert_eq!(config.agent.agent_alias_id.as_deref(), Some("ALIAS456"));
        assert_eq!(config.agent.region, "eu-west-1");
    }

    #[test]
    fn test_is_configured_requires_both_ids() {
        let mut agent = AgentConfig::default();
        assert!(!agent.is_configured());

        agent.agent_id = Some("AGENT123".to_string());
        assert!(!agent.is_configured());

        agent.agent_alias_id = Some("ALIAS456".to_string());
        assert!(agent.is_configured());
    }
}
