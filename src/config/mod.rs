use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Every key of the configuration file, in file order.
pub const KNOWN_FIELDS: [&str; 4] = [
    "api_base_url",
    "refresh_interval_secs",
    "attendance_days",
    "check_enabled",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u64,
    #[serde(default = "default_attendance_days")]
    pub attendance_days: u32,
    #[serde(default)]
    pub check_enabled: bool,
}

fn default_api_base_url() -> String {
    "http://localhost:8000/api".to_string()
}
fn default_refresh_interval() -> u64 {
    60
}
fn default_attendance_days() -> u32 {
    7
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            refresh_interval_secs: default_refresh_interval(),
            attendance_days: default_attendance_days(),
            check_enabled: false,
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.coretime`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".coretime")
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("coretime.conf")
    }

    /// Resolve the config path: explicit override (with `~/` expanded) or the default.
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        match custom {
            Some(p) => expand_tilde(p),
            None => Self::config_file(),
        }
    }

    /// Load configuration from `path`, or return defaults if the file does not exist.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.refresh_interval_secs == 0 {
            return Err(AppError::Config(
                "refresh_interval_secs must be at least 1".into(),
            ));
        }
        if self.attendance_days == 0 {
            return Err(AppError::Config("attendance_days must be at least 1".into()));
        }
        if self.api_base_url.trim().is_empty() {
            return Err(AppError::Config("api_base_url is empty".into()));
        }
        Ok(())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::ConfigSave(e.to_string()))
    }

    /// Write the configuration, creating the parent directory if needed.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, self.to_yaml()?)
            .map_err(|e| AppError::ConfigSave(format!("{}: {e}", path.display())))
    }

    /// Keys absent from the file at `path` (they fall back to defaults).
    pub fn missing_fields(path: &Path) -> AppResult<Vec<&'static str>> {
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))?;
        let value: serde_yaml::Value = serde_yaml::from_str(&content)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))?;

        let mapping = value.as_mapping();
        Ok(KNOWN_FIELDS
            .into_iter()
            .filter(|k| !mapping.is_some_and(|m| m.contains_key(*k)))
            .collect())
    }
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("coretime_cfg_{}_{}.conf", name, std::process::id()));
        fs::remove_file(&p).ok();
        p
    }

    #[test]
    fn missing_file_gives_defaults() {
        let cfg = Config::load_from(&temp_path("missing")).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.refresh_interval_secs, 60);
        assert_eq!(cfg.attendance_days, 7);
        assert!(!cfg.check_enabled);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let path = temp_path("partial");
        fs::write(&path, "check_enabled: true\napi_base_url: http://lab.example/api\n").unwrap();

        let cfg = Config::load_from(&path).unwrap();
        assert!(cfg.check_enabled);
        assert_eq!(cfg.api_base_url, "http://lab.example/api");
        assert_eq!(cfg.refresh_interval_secs, 60);

        let missing = Config::missing_fields(&path).unwrap();
        assert_eq!(missing, vec!["refresh_interval_secs", "attendance_days"]);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn saved_config_loads_back() {
        let path = temp_path("save");
        let cfg = Config {
            refresh_interval_secs: 15,
            ..Config::default()
        };
        cfg.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), cfg);
        assert!(Config::missing_fields(&path).unwrap().is_empty());
        fs::remove_file(&path).ok();
    }

    #[test]
    fn invalid_values_are_rejected() {
        let path = temp_path("invalid");
        fs::write(&path, "refresh_interval_secs: 0\n").unwrap();
        assert!(matches!(Config::load_from(&path), Err(AppError::Config(_))));

        fs::write(&path, "refresh_interval_secs: [oops\n").unwrap();
        assert!(matches!(Config::load_from(&path), Err(AppError::ConfigLoad(_))));
        fs::remove_file(&path).ok();
    }

    #[test]
    fn explicit_path_wins() {
        assert_eq!(
            Config::resolve_path(Some("/tmp/x.conf")),
            PathBuf::from("/tmp/x.conf")
        );
        assert_eq!(Config::resolve_path(None), Config::config_file());
    }
}
