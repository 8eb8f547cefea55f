//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

const PROJECT_FILES: [&str; 2] = ["roundtable.toml", ".roundtable.toml"];

/// Environment variable prefix; `__` separates nested keys
pub const ENV_PREFIX: &str = "ROUNDTABLE_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment: `ROUNDTABLE_ORCHESTRATION__STRATEGY=custom`
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./roundtable.toml` or `./.roundtable.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/roundtable/config.toml`
    /// 5. Default values
    ///
    /// CLI flags are applied on top by the binary.
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path).extract().map_err(Box::new)
    }

    /// The merged provider chain, before extraction
    pub fn figment(config_path: Option<&PathBuf>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// `$XDG_CONFIG_HOME/roundtable/config.toml`, or the platform config
    /// directory equivalent.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("roundtable").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Describe the config file locations, in priority order
    pub fn describe_sources() -> Vec<String> {
        let mut lines = Vec::new();

        match Self::project_config_path() {
            Some(path) => lines.push(format!("[FOUND] Project: {}", path.display())),
            None => lines.push(format!(
                "[     ] Project: ./{} or ./{}",
                PROJECT_FILES[0], PROJECT_FILES[1]
            )),
        }

        if let Some(path) = Self::global_config_path() {
            let marker = if path.exists() { "FOUND" } else { "     " };
            lines.push(format!("[{}] Global:  {}", marker, path.display()));
        }

        lines.push("[     ] Default: built-in defaults".to_string());
        lines
    }
}
