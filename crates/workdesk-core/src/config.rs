//! TOML-based application configuration.
//!
//! Stores user preferences:
//! - Backend connection (base URL, request timeout)
//! - Timer durations and long-break interval
//! - Notification toggles
//!
//! Configuration lives at `~/.config/workdesk/config.toml`; the
//! `WORKDESK_CONFIG_DIR` environment variable overrides the directory.
//! Timer values are clamped into their valid ranges on every load and set,
//! so a malformed edit can never reach the engine.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::timer::TimerConfig;

/// Backend connection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Notification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Ring the terminal bell alongside the desktop notification.
    #[serde(default = "default_true")]
    pub sound: bool,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/workdesk/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub timer: TimerConfig,
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

fn default_base_url() -> String {
    "http://localhost:5001".into()
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_true() -> bool {
    true
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            sound: true,
        }
    }
}

/// Returns the configuration directory, creating it if needed.
///
/// Honors `WORKDESK_CONFIG_DIR`, otherwise `~/.config/workdesk/`.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("WORKDESK_CONFIG_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("workdesk"),
    };
    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::LoadFailed {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}

impl Config {
    pub fn path() -> Result<PathBuf, ConfigError> {
        Ok(config_dir()?.join("config.toml"))
    }

    /// Load from disk, writing defaults on first run.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let mut cfg: Config =
                    toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                        path,
                        message: e.to_string(),
                    })?;
                cfg.timer = cfg.timer.clamped();
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Load from disk, returning defaults on any error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Persist to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Get a value as a string by dot-separated key, e.g.
    /// `timer.work_minutes`.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let value = lookup(&json, key)?;
        Some(match value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    /// Set a value by dot-separated key and persist.
    ///
    /// The new value must parse as the type already at that key. Timer
    /// values are re-clamped before saving.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json = serde_json::to_value(&*self).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        store(&mut json, key, value)?;
        *self = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        self.timer = self.timer.clamped();
        self.save()
    }
}

fn lookup<'a>(root: &'a serde_json::Value, key: &str) -> Option<&'a serde_json::Value> {
    if key.is_empty() {
        return None;
    }
    let mut current = root;
    for part in key.split('.') {
        current = current.get(part)?;
    }
    Some(current)
}

fn store(root: &mut serde_json::Value, key: &str, value: &str) -> Result<(), ConfigError> {
    let unknown = || ConfigError::UnknownKey(key.to_string());
    let invalid = |message: String| ConfigError::InvalidValue {
        key: key.to_string(),
        message,
    };

    let (parents, leaf) = match key.rsplit_once('.') {
        Some((parents, leaf)) => (Some(parents), leaf),
        None => (None, key),
    };
    if leaf.is_empty() {
        return Err(unknown());
    }

    let mut current = root;
    if let Some(parents) = parents {
        for part in parents.split('.') {
            current = current.get_mut(part).ok_or_else(unknown)?;
        }
    }

    let obj = current.as_object_mut().ok_or_else(unknown)?;
    let existing = obj.get(leaf).ok_or_else(unknown)?;
    let new_value = match existing {
        serde_json::Value::Bool(_) => serde_json::Value::Bool(
            value
                .parse::<bool>()
                .map_err(|_| invalid(format!("cannot parse '{value}' as bool")))?,
        ),
        serde_json::Value::Number(_) => {
            if let Ok(n) = value.parse::<u64>() {
                serde_json::Value::Number(n.into())
            } else if let Ok(n) = value.parse::<f64>() {
                serde_json::Number::from_f64(n)
                    .map(serde_json::Value::Number)
                    .ok_or_else(|| invalid(format!("cannot parse '{value}' as number")))?
            } else {
                return Err(invalid(format!("cannot parse '{value}' as number")));
            }
        }
        serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
            serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
        }
        _ => serde_json::Value::String(value.into()),
    };
    obj.insert(leaf.to_string(), new_value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrips_through_toml() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.api.base_url, "http://localhost:5001");
        assert_eq!(parsed.timer.work_minutes, 25);
        assert!(parsed.notifications.enabled);
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("timer.work_minutes").as_deref(), Some("25"));
        assert_eq!(
            cfg.get("api.base_url").as_deref(),
            Some("http://localhost:5001")
        );
        assert_eq!(cfg.get("notifications.sound").as_deref(), Some("true"));
        assert!(cfg.get("timer.missing").is_none());
        assert!(cfg.get("").is_none());
    }

    #[test]
    fn store_updates_nested_number() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        store(&mut json, "timer.work_minutes", "50").unwrap();
        assert_eq!(
            lookup(&json, "timer.work_minutes").unwrap(),
            &serde_json::Value::Number(50.into())
        );
    }

    #[test]
    fn store_updates_nested_bool_and_string() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        store(&mut json, "notifications.enabled", "false").unwrap();
        store(&mut json, "api.base_url", "http://10.0.0.2:5001").unwrap();
        assert_eq!(
            lookup(&json, "notifications.enabled").unwrap(),
            &serde_json::Value::Bool(false)
        );
        assert_eq!(
            lookup(&json, "api.base_url").unwrap(),
            &serde_json::Value::String("http://10.0.0.2:5001".into())
        );
    }

    #[test]
    fn store_rejects_unknown_key() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        assert!(matches!(
            store(&mut json, "timer.nonexistent", "1"),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(matches!(
            store(&mut json, "nope.work_minutes", "1"),
            Err(ConfigError::UnknownKey(_))
        ));
    }

    #[test]
    fn store_rejects_type_mismatch() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        assert!(matches!(
            store(&mut json, "notifications.enabled", "maybe"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            store(&mut json, "timer.work_minutes", "a lot"),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn save_load_and_set_clamp_timer_values() {
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var("WORKDESK_CONFIG_DIR", dir.path());

        let mut cfg = Config::load().unwrap();
        cfg.set("timer.work_minutes", "500").unwrap();
        assert_eq!(cfg.timer.work_minutes, 60);

        let reloaded = Config::load().unwrap();
        assert_eq!(reloaded.timer.work_minutes, 60);

        std::env::remove_var("WORKDESK_CONFIG_DIR");
    }
}
