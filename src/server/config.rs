use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Deserialize, Debug, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    #[serde(default = "default_message_api_url")]
    pub message_api_url: String,

    #[serde(default = "default_accounting_api_url")]
    pub accounting_api_url: String,

    #[serde(default = "default_scheduler_api_url")]
    pub scheduler_api_url: String,

    #[serde(default = "default_dashboard_address")]
    pub dashboard_address: String,

    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

// Partial config for layering
#[derive(Deserialize, Default, Debug)]
struct PartialServerConfig {
    listen_addr: Option<String>,
    message_api_url: Option<String>,
    accounting_api_url: Option<String>,
    scheduler_api_url: Option<String>,
    dashboard_address: Option<String>,
    log_dir: Option<String>,
}

fn default_listen_addr() -> String {
    "0.0.0.0:8001".to_string()
}

fn default_message_api_url() -> String {
    "https://api2.aleph.im/api/v0".to_string()
}

fn default_accounting_api_url() -> String {
    "https://accounting.api.aleph.cloud".to_string()
}

fn default_scheduler_api_url() -> String {
    "https://scheduler.api.aleph.cloud/api/v0".to_string()
}

fn default_dashboard_address() -> String {
    // Sample address shown when the dashboard is opened without a query.
    "0x929D09350230AB5Da6A6feE3bd967882118B0Ac4".to_string()
}

fn default_log_dir() -> String {
    "logs".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            listen_addr: default_listen_addr(),
            message_api_url: default_message_api_url(),
            accounting_api_url: default_accounting_api_url(),
            scheduler_api_url: default_scheduler_api_url(),
            dashboard_address: default_dashboard_address(),
            log_dir: default_log_dir(),
        }
    }
}

impl ServerConfig {
    pub fn load(config_path: Option<&str>) -> Result<Self, String> {
        dotenv::dotenv().ok();

        // 1. Load from file (optional)
        let file_config: PartialServerConfig = if let Some(path_str) = config_path {
            let path = Path::new(path_str);
            if path.exists() {
                let contents = fs::read_to_string(path)
                    .map_err(|e| format!("Failed to read config file at {path:?}: {e}"))?;
                toml::from_str(&contents)
                    .map_err(|e| format!("Failed to parse TOML from config file at {path:?}: {e}"))?
            } else {
                PartialServerConfig::default()
            }
        } else {
            PartialServerConfig::default()
        };

        // 2. Load from environment variables
        let env_config: PartialServerConfig = envy::from_env::<PartialServerConfig>()
            .map_err(|e| format!("Failed to load config from environment: {e}"))?;

        // 3. Merge: environment overrides file, defaults fill the rest
        let final_config = ServerConfig {
            listen_addr: env_config
                .listen_addr
                .or(file_config.listen_addr)
                .unwrap_or_else(default_listen_addr),
            message_api_url: env_config
                .message_api_url
                .or(file_config.message_api_url)
                .unwrap_or_else(default_message_api_url),
            accounting_api_url: env_config
                .accounting_api_url
                .or(file_config.accounting_api_url)
                .unwrap_or_else(default_accounting_api_url),
            scheduler_api_url: env_config
                .scheduler_api_url
                .or(file_config.scheduler_api_url)
                .unwrap_or_else(default_scheduler_api_url),
            dashboard_address: env_config
                .dashboard_address
                .or(file_config.dashboard_address)
                .unwrap_or_else(default_dashboard_address),
            log_dir: env_config
                .log_dir
                .or(file_config.log_dir)
                .unwrap_or_else(default_log_dir),
        };

        Ok(final_config)
    }
}
