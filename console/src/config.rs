use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::tictactoe::GameMode;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "tictactoe_config.yaml";

pub type ConsoleConfigManager = ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;

pub fn get_config_manager(file_path: &str) -> ConsoleConfigManager {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub clear_screen: bool,
    pub default_mode: Option<GameMode>,
    pub seed: Option<u64>,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            clear_screen: true,
            default_mode: None,
            seed: None,
            logging: LoggingConfig::default(),
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.logging.validate()?;
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub enabled: bool,
    pub prefix: Option<String>,
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.prefix.as_deref().is_some_and(|p| p.trim().is_empty()) {
            return Err("logging prefix must not be blank".to_string());
        }
        Ok(())
    }
}
