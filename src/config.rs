//! Shell settings: defaults, optional TOML file, command line overrides.

use crate::error::ConfigError;
use cellshare_engine::OperatorRule;
use directories::ProjectDirs;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const MAX_CONFIG_FILE_BYTES: u64 = 1_048_576; // 1 MiB
pub const MAX_PRECISION: usize = 15;
const DEFAULT_PRECISION: usize = 6;
const DEFAULT_PROMPT: &str = "> ";

/// Which store call the shell uses for "change a sheet's access right".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionPolicy {
    /// Anyone may set any user's access on any sheet name, unchecked.
    #[default]
    Permissive,
    /// The acting user must be able to edit the sheet and every name must exist.
    Strict,
}

impl FromStr for PermissionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "permissive" => Ok(PermissionPolicy::Permissive),
            "strict" => Ok(PermissionPolicy::Strict),
            other => Err(format!(
                "Unknown permission policy: {} (expected permissive or strict)",
                other
            )),
        }
    }
}

impl fmt::Display for PermissionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PermissionPolicy::Permissive => write!(f, "permissive"),
            PermissionPolicy::Strict => write!(f, "strict"),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    operator_rule: Option<OperatorRule>,
    permission_policy: Option<PermissionPolicy>,
    precision: Option<usize>,
    prompt: Option<String>,
}

/// Effective shell settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub operator_rule: OperatorRule,
    pub permission_policy: PermissionPolicy,
    /// Decimal places shown for cell values
    pub precision: usize,
    pub prompt: String,
    /// Suppress the menu banner and prompts
    pub quiet: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            operator_rule: OperatorRule::default(),
            permission_policy: PermissionPolicy::default(),
            precision: DEFAULT_PRECISION,
            prompt: DEFAULT_PROMPT.to_string(),
            quiet: false,
        }
    }
}

impl Settings {
    /// Load settings from `path`, or from the user config file when `path` is None.
    ///
    /// A missing user config file yields the defaults; a missing explicit path
    /// is an error.
    pub fn load(path: Option<&Path>) -> Result<Settings, ConfigError> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match user_config_path() {
                Some(p) => (p, false),
                None => return Ok(Settings::default()),
            },
        };
        if !required && !path.exists() {
            return Ok(Settings::default());
        }

        let meta = std::fs::metadata(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        if meta.len() > MAX_CONFIG_FILE_BYTES {
            return Err(ConfigError::TooLarge {
                path,
                size: meta.len(),
                max: MAX_CONFIG_FILE_BYTES,
            });
        }
        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Settings::from_toml(&content, &path)
    }

    /// Build settings from TOML text. `path` is only used in error messages.
    pub fn from_toml(content: &str, path: &Path) -> Result<Settings, ConfigError> {
        let file: ConfigFile = toml::from_str(content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;

        let defaults = Settings::default();
        let precision = file.precision.unwrap_or(defaults.precision);
        if precision > MAX_PRECISION {
            return Err(ConfigError::Precision(precision));
        }
        Ok(Settings {
            operator_rule: file.operator_rule.unwrap_or(defaults.operator_rule),
            permission_policy: file.permission_policy.unwrap_or(defaults.permission_policy),
            precision,
            prompt: file.prompt.unwrap_or(defaults.prompt),
            quiet: defaults.quiet,
        })
    }
}

fn user_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "cellshare")?;
    Some(proj.config_dir().join("config.toml"))
}
