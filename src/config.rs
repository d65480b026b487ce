use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const CONFIG_VERSION: u64 = 1;

pub const APP_ID: &str = "dev.taskly.app";

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api/";

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("~/.local/share"))
        .join("taskly")
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, CosmicConfigEntry)]
pub struct TasklyConfig {
    /// Root of the REST API, e.g. `http://127.0.0.1:8000/api/`.
    pub api_base_url: String,
    pub data_dir: PathBuf,
    pub debug_logging: bool,
}

impl Default for TasklyConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            data_dir: default_data_dir(),
            debug_logging: false,
        }
    }
}

impl TasklyConfig {
    /// Load the persisted config, falling back to defaults for missing or invalid entries.
    pub fn load() -> (Self, Option<cosmic_config::Config>) {
        match cosmic_config::Config::new(APP_ID, CONFIG_VERSION) {
            Ok(handle) => {
                let config = Self::get_entry(&handle).unwrap_or_else(|(errors, cfg)| {
                    for e in errors {
                        log::warn!("Config entry error: {:?}", e);
                    }
                    cfg
                });
                (config, Some(handle))
            }
            Err(e) => {
                log::error!("Failed to open config: {:?}", e);
                (Self::default(), None)
            }
        }
    }

    /// Base URL with exactly one trailing slash so endpoint paths can be appended.
    pub fn api_base(&self) -> String {
        let trimmed = self.api_base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            DEFAULT_API_BASE_URL.to_string()
        } else {
            format!("{}/", trimmed)
        }
    }

    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join("local_store.json")
    }
}
