use std::path::PathBuf;

use tracing::trace;

use crate::util::get_token_from_env;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// Display name used in the report header (defaults to the hostname
    /// placeholder "Raspberry Pi")
    pub display: Option<String>,

    /// Wireless interface monitored for signal strength and traffic
    #[serde(default = "default_interface")]
    pub interface: String,

    /// Record file appended by the recorder and tailed by the status report
    #[serde(default = "default_record_file")]
    pub record_file: PathBuf,

    /// Snapshot file overwritten by the pre-reboot hook
    #[serde(default = "default_snapshot_file")]
    pub snapshot_file: PathBuf,

    /// Thermal zone pseudo-file exposing millidegrees Celsius
    #[serde(default = "default_thermal_zone")]
    pub thermal_zone: PathBuf,

    pub telegram: TelegramConfig,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct TelegramConfig {
    /// Bot token; the TELEGRAM_BOT_TOKEN environment variable wins over this
    pub token: Option<String>,

    /// Destination chat ids, delivered to in order
    pub chat_ids: Vec<String>,

    /// API base, overridable so tests can point at a local mock
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

impl Config {
    pub fn display_name(&self) -> String {
        self.display
            .clone()
            .unwrap_or_else(|| String::from("Raspberry Pi"))
    }
}

impl TelegramConfig {
    /// Resolve the bot token, preferring the environment over the config file.
    pub fn resolved_token(&self) -> Option<String> {
        get_token_from_env().or_else(|| {
            self.token
                .as_ref()
                .map(|token| token.trim().to_string())
                .filter(|token| !token.is_empty())
        })
    }
}

fn default_interface() -> String {
    String::from("wlan0")
}

fn default_record_file() -> PathBuf {
    PathBuf::from("/home/pi/record.txt")
}

fn default_snapshot_file() -> PathBuf {
    PathBuf::from("/home/pi/pre_reboot_logs.txt")
}

fn default_thermal_zone() -> PathBuf {
    PathBuf::from("/sys/class/thermal/thermal_zone0/temp")
}

fn default_api_base() -> String {
    String::from("https://api.telegram.org")
}

pub fn read_config_file(path: &str) -> anyhow::Result<Config> {
    let file_content = std::fs::read_to_string(path)?;
    serde_json::from_str(&file_content)
        .map_err(|_| anyhow::anyhow!("Invalid configuration file provided!"))
        .inspect(|config| trace!("loaded config: {config:?}"))
}
