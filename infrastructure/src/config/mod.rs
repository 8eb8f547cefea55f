//! Configuration file loading for roundtable
//!
//! This module handles file I/O and merging of configuration from multiple
//! sources. The priority order (highest to lowest):
//!
//! 1. `ROUNDTABLE_*` environment variables (`__` separates nesting)
//! 2. `--config <path>` specified file
//! 3. Project root: `./roundtable.toml` or `./.roundtable.toml`
//! 4. Global: `$XDG_CONFIG_HOME/roundtable/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileLoggingConfig, FileOrchestrationConfig,
    FileOutputConfig, FileProviderConfig, FileReplConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
