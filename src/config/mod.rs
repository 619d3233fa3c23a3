use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::session::{DEFAULT_CHECK_MARK, DEFAULT_MAX_CODE_LEN, DEFAULT_MIN_CODE_LEN};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Column holding the identifying code
    pub id_column: String,
    /// Column the tool writes marks and annotations into
    pub marked_column: String,
    pub date_column: String,
    /// chrono format used for `date_column` after load
    pub date_format: String,
    pub check_mark: String,
    pub min_code_len: usize,
    pub max_code_len: usize,
    pub default_export_name: String,
    pub alert_bell: bool,
    pub show_rows: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            id_column: "Nº".to_string(),
            marked_column: "Marked".to_string(),
            date_column: "Fecha envio".to_string(),
            date_format: "%d/%m/%Y".to_string(),
            check_mark: DEFAULT_CHECK_MARK.to_string(),
            min_code_len: DEFAULT_MIN_CODE_LEN,
            max_code_len: DEFAULT_MAX_CODE_LEN,
            default_export_name: "albaranes_marcados".to_string(),
            alert_bell: true,
            show_rows: 50,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rmarker")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rmarker")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rmarker.conf")
    }

    /// Pick the config file: `--config` override first, then the default location.
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        custom.map(expand_tilde).unwrap_or_else(Self::config_file)
    }

    /// Load configuration from `path`, or return defaults if it does not exist.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.min_code_len == 0 || self.min_code_len > self.max_code_len {
            return Err(AppError::Config(format!(
                "invalid code length bounds {}..{}",
                self.min_code_len, self.max_code_len
            )));
        }
        if self.id_column.trim().is_empty() || self.marked_column.trim().is_empty() {
            return Err(AppError::Config("column names must not be empty".into()));
        }
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(AppError::Config(format!(
                "invalid date_format '{}'",
                self.date_format
            )));
        }
        if self.check_mark.is_empty() {
            return Err(AppError::Config("check_mark must not be empty".into()));
        }
        Ok(())
    }

    /// Write this configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = Config::load_from(&dir.path().join("none.conf")).expect("load");
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("rmarker.conf");
        fs::write(&path, "check_mark: OK\nmax_code_len: 10\n").expect("write");

        let cfg = Config::load_from(&path).expect("load");
        assert_eq!(cfg.check_mark, "OK");
        assert_eq!(cfg.max_code_len, 10);
        assert_eq!(cfg.id_column, "Nº");
    }

    #[test]
    fn bad_bounds_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("rmarker.conf");
        fs::write(&path, "min_code_len: 9\nmax_code_len: 3\n").expect("write");
        assert!(matches!(Config::load_from(&path), Err(AppError::Config(_))));
    }

    #[test]
    fn bad_date_format_rejected() {
        let cfg = Config {
            date_format: "%d/%Q".into(),
            ..Config::default()
        };
        assert!(cfg.validate().is_err());
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("rmarker.conf");
        let cfg = Config {
            alert_bell: false,
            ..Config::default()
        };
        cfg.save_to(&path).expect("save");
        assert_eq!(Config::load_from(&path).expect("load"), cfg);
    }
}
