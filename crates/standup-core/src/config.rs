use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Populate the store with demo data on startup. Defaults to true.
    #[serde(default)]
    pub seed_demo_data: Option<bool>,

    /// How many entries the dashboard's recent-activity panel shows.
    #[serde(default)]
    pub recent_activity_limit: Option<usize>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/standup/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("standup/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("standup\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Load the config file, falling back to defaults when it is missing
    /// or unreadable.
    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                if let Ok(content) = std::fs::read_to_string(&config_path) {
                    if let Ok(config) = toml::from_str(&content) {
                        return config;
                    }
                }
            }
        }
        Self::default()
    }

    pub fn effective_seed_demo_data(&self) -> bool {
        self.seed_demo_data.unwrap_or(true)
    }

    pub fn effective_recent_activity_limit(&self) -> usize {
        self.recent_activity_limit.unwrap_or(5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(config.effective_seed_demo_data());
        assert_eq!(config.effective_recent_activity_limit(), 5);
    }

    #[test]
    fn test_parse_overrides() {
        let config: AppConfig =
            toml::from_str("seed_demo_data = false\nrecent_activity_limit = 10\n").unwrap();
        assert!(!config.effective_seed_demo_data());
        assert_eq!(config.effective_recent_activity_limit(), 10);
    }

    #[test]
    fn test_parse_partial() {
        let config: AppConfig = toml::from_str("recent_activity_limit = 3\n").unwrap();
        assert!(config.effective_seed_demo_data());
        assert_eq!(config.effective_recent_activity_limit(), 3);
    }
}
