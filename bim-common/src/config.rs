//! Configuration loading and root folder resolution
//!
//! Resolution priority for every setting:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. OS-dependent compiled default (fallback)
//!
//! A missing or unreadable config file never aborts startup. It is logged and
//! the compiled defaults are used instead.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Application directory name used under the platform config/data dirs
pub const APP_DIR_NAME: &str = "bulk-image-meta";

/// Environment variable overriding the root folder
pub const ROOT_FOLDER_ENV: &str = "BIM_ROOT_FOLDER";

/// Database file name inside the root folder
pub const DATABASE_FILE_NAME: &str = "bim.db";

/// Logging section of the TOML config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log level when RUST_LOG is not set ("error" .. "trace")
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// `[commit]` section of the TOML config
///
/// Unset keys fall through to environment overrides and then to the
/// processor's built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitSettings {
    pub overwrite_description: Option<bool>,
    pub overwrite_caption: Option<bool>,
}

/// Contents of `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TomlConfig {
    pub root_folder: Option<PathBuf>,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub commit: CommitSettings,
}

/// Compiled defaults for the current platform
#[derive(Debug, Clone)]
pub struct CompiledDefaults {
    pub root_folder: PathBuf,
}

impl CompiledDefaults {
    pub fn for_current_platform() -> Self {
        Self {
            root_folder: default_root_folder(),
        }
    }
}

/// Get OS-dependent default root folder path
fn default_root_folder() -> PathBuf {
    if cfg!(target_os = "linux") {
        // ~/.local/share/bulk-image-meta (or /var/lib for system-wide)
        dirs::data_local_dir()
            .map(|d| d.join(APP_DIR_NAME))
            .unwrap_or_else(|| PathBuf::from("/var/lib").join(APP_DIR_NAME))
    } else if cfg!(target_os = "macos") {
        dirs::data_dir()
            .map(|d| d.join(APP_DIR_NAME))
            .unwrap_or_else(|| PathBuf::from("/Library/Application Support").join(APP_DIR_NAME))
    } else if cfg!(target_os = "windows") {
        dirs::data_local_dir()
            .map(|d| d.join(APP_DIR_NAME))
            .unwrap_or_else(|| PathBuf::from("C:\\ProgramData").join(APP_DIR_NAME))
    } else {
        PathBuf::from("./bim_data")
    }
}

/// Locate the default config file for the platform
///
/// Linux checks the user config dir first, then `/etc`. Returns `None` when no
/// file exists.
pub fn default_config_path() -> Option<PathBuf> {
    let user_config = dirs::config_dir().map(|d| d.join(APP_DIR_NAME).join("config.toml"));

    if let Some(path) = user_config {
        if path.exists() {
            return Some(path);
        }
    }

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc").join(APP_DIR_NAME).join("config.toml");
        if system_config.exists() {
            return Some(system_config);
        }
    }

    None
}

/// Read and parse a TOML config file
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Read TOML failed ({}): {}", path.display(), e)))?;
    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Parse TOML failed ({}): {}", path.display(), e)))
}

/// Load the config file if there is one, falling back to defaults
///
/// Never fails: a missing default file yields the defaults with no error, an
/// explicit or default file that cannot be loaded yields the defaults plus the
/// error, so the caller can report it once logging is up.
pub fn load_toml_config_or_default(explicit: Option<&Path>) -> (TomlConfig, Option<Error>) {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) => path,
            None => return (TomlConfig::default(), None),
        },
    };

    match load_toml_config(&path) {
        Ok(config) => {
            debug!("Loaded config file: {}", path.display());
            (config, None)
        }
        Err(e) => (TomlConfig::default(), Some(e)),
    }
}

/// Parse a boolean environment override ("1/0", "true/false", "yes/no", "on/off")
pub fn env_bool(var_name: &str) -> Option<bool> {
    let raw = std::env::var(var_name).ok()?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        other => {
            warn!("Ignoring {}={:?}: not a boolean", var_name, other);
            None
        }
    }
}

/// Root folder resolution (CLI > ENV > TOML > compiled default)
#[derive(Debug, Clone, Default)]
pub struct RootFolderResolver {
    cli_arg: Option<PathBuf>,
    toml_root: Option<PathBuf>,
}

impl RootFolderResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Command-line value (priority 1)
    pub fn with_cli_arg(mut self, cli_arg: Option<PathBuf>) -> Self {
        self.cli_arg = cli_arg;
        self
    }

    /// Value taken from a loaded TOML config (priority 3)
    pub fn with_toml_config(mut self, config: &TomlConfig) -> Self {
        self.toml_root = config.root_folder.clone();
        self
    }

    pub fn resolve(&self) -> PathBuf {
        if let Some(path) = &self.cli_arg {
            return path.clone();
        }

        if let Ok(path) = std::env::var(ROOT_FOLDER_ENV) {
            if !path.trim().is_empty() {
                return PathBuf::from(path);
            }
        }

        if let Some(path) = &self.toml_root {
            return path.clone();
        }

        CompiledDefaults::for_current_platform().root_folder
    }
}

/// Prepares the root folder and knows where the database lives inside it
#[derive(Debug, Clone)]
pub struct RootFolderInitializer {
    root_folder: PathBuf,
}

impl RootFolderInitializer {
    pub fn new(root_folder: PathBuf) -> Self {
        Self { root_folder }
    }

    /// Create the root folder if missing (idempotent)
    pub fn ensure_directory_exists(&self) -> Result<()> {
        if !self.root_folder.exists() {
            std::fs::create_dir_all(&self.root_folder)?;
            debug!("Created root folder: {}", self.root_folder.display());
        }
        Ok(())
    }

    pub fn database_path(&self) -> PathBuf {
        self.root_folder.join(DATABASE_FILE_NAME)
    }

    pub fn database_exists(&self) -> bool {
        self.database_path().exists()
    }
}
