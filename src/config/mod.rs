mod settings;

pub use settings::{Config, DisplaySettings, ProrationSettings};

use crate::error::{BreakdownError, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the config directory path (~/.breakdown/)
pub fn config_dir() -> Result<PathBuf> {
    // First try XDG-style directories
    if let Some(proj_dirs) = ProjectDirs::from("", "", "breakdown") {
        return Ok(proj_dirs.config_dir().to_path_buf());
    }

    // Fallback to ~/.breakdown/
    let home = dirs_home().ok_or_else(|| {
        BreakdownError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine home directory",
        ))
    })?;

    Ok(home.join(".breakdown"))
}

fn dirs_home() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

/// Path of config.toml inside a config directory
pub fn config_file(config_dir: &Path) -> PathBuf {
    config_dir.join("config.toml")
}

/// Load config.toml, falling back to defaults when it does not exist
pub fn load_config(config_dir: &Path) -> Result<Config> {
    let path = config_file(config_dir);
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    let content = fs::read_to_string(&path)?;
    parse_config(&content).map_err(|e| BreakdownError::ConfigParse { path, source: e })
}

fn parse_config(content: &str) -> std::result::Result<Config, toml::de::Error> {
    toml::from_str(content)
}

/// Create the config directory and write the template config.toml
pub fn init_config_dir(config_dir: &Path) -> Result<PathBuf> {
    if config_dir.exists() {
        return Err(BreakdownError::AlreadyInitialized(config_dir.to_path_buf()));
    }

    fs::create_dir_all(config_dir)?;
    let path = config_file(config_dir);
    fs::write(&path, CONFIG_TEMPLATE)?;
    Ok(path)
}

/// Template content for config.toml
pub const CONFIG_TEMPLATE: &str = r#"[display]
currency_symbol = "₹"
# Which rows the summary shows: "booking" (with GST and discount rows)
# or "proposal" (base costs only)
context = "booking"

[proration]
# How a trailing partial month counts toward per-month rates:
#   "exact" - fraction of that calendar month (15 of 31 days = 0.48)
#   "ceil"  - any partial month counts as a full month
partial_month = "exact"
"#;

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;
    use crate::breakdown::{Context, MonthPolicy};

    #[test]
    fn template_parses_to_defaults() {
        let config = parse_config(CONFIG_TEMPLATE).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let config = parse_config("[display]\ncontext = \"proposal\"\n").unwrap();

        assert_eq!(config.display.context, Context::Proposal);
        assert_eq!(config.display.currency_symbol, "₹");
        assert_eq!(config.proration.partial_month, MonthPolicy::Exact);
    }

    #[test]
    fn unknown_policy_is_a_parse_error() {
        let err = parse_config("[proration]\npartial_month = \"round\"\n");

        assert!(err.is_err());
    }

    #[test]
    fn missing_config_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();

        let config = load_config(temp_dir.path()).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn init_refuses_existing_directory() {
        let temp_dir = TempDir::new().unwrap();

        let err = init_config_dir(temp_dir.path()).unwrap_err();

        assert!(matches!(err, BreakdownError::AlreadyInitialized(_)));
    }

    #[test]
    fn init_writes_loadable_template() {
        let temp_dir = TempDir::new().unwrap();
        let cfg_dir = temp_dir.path().join("cfg");

        let path = init_config_dir(&cfg_dir).unwrap();

        assert!(path.exists());
        assert_eq!(load_config(&cfg_dir).unwrap(), Config::default());
    }
}
