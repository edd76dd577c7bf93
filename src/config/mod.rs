use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_TEMPLATE: &str = include_str!("../../config.example.toml");

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub staging: StagingConfig,
    pub quiet: bool,
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StagingConfig {
    pub dir: Option<PathBuf>,
}

impl Config {
    /// Loads the config file, creating a default one on first run.
    ///
    /// The file lives at `LCP_CONFIG_PATH` when set, otherwise at
    /// `<user-config-dir>/lcp/config.toml`.
    pub fn load() -> Result<Self, String> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| format!("lcp: failed to read config file: {e}"))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| format!("lcp: failed to parse config file: {e}"))?;
        config.validate()?;

        Ok(config)
    }

    /// Resolves the staging directory.
    ///
    /// Precedence: `LCP_STAGING_DIR`, then `staging.dir` from the config
    /// file, then `<user-cache-dir>/lcp-copy`.
    pub fn staging_dir(&self) -> Result<PathBuf, String> {
        if let Ok(dir) = env::var("LCP_STAGING_DIR") {
            return Ok(PathBuf::from(dir));
        }

        if let Some(dir) = &self.staging.dir {
            return Ok(dir.clone());
        }

        let cache = dirs::cache_dir()
            .ok_or_else(|| String::from("lcp: cannot determine user cache directory"))?;
        Ok(cache.join("lcp-copy"))
    }

    fn validate(&self) -> Result<(), String> {
        if let Some(dir) = &self.staging.dir {
            if !dir.is_absolute() {
                return Err(format!(
                    "lcp: invalid config: staging.dir must be an absolute path: {}",
                    dir.display()
                ));
            }
        }

        Ok(())
    }

    fn config_path() -> Result<PathBuf, String> {
        if let Ok(path) = env::var("LCP_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let base = dirs::config_dir()
            .ok_or_else(|| String::from("lcp: cannot determine user config directory"))?;
        Ok(base.join("lcp").join("config.toml"))
    }

    fn create_default_config(path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("lcp: failed to create config directory: {e}"))?;
        }

        fs::write(path, DEFAULT_CONFIG_TEMPLATE)
            .map_err(|e| format!("lcp: failed to create default config file: {e}"))
    }
}
