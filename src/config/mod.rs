use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the reservation API, e.g. "http://localhost:8000/api".
    pub api_url: String,
    /// Identity used for login (and registration on first run).
    pub email: String,
    pub nom: String,
    pub prenom: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Maximum reservation length in days.
    #[serde(default = "default_max_days")]
    pub max_days: i64,
    /// Managers may reserve longer stretches.
    #[serde(default = "default_max_days_manager")]
    pub max_days_manager: i64,
}

fn default_timeout_secs() -> u64 {
    10
}
fn default_max_days() -> i64 {
    5
}
fn default_max_days_manager() -> i64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8000/api".to_string(),
            email: "test@test.com".to_string(),
            nom: "Test".to_string(),
            prenom: "User".to_string(),
            timeout_secs: default_timeout_secs(),
            max_days: default_max_days(),
            max_days_manager: default_max_days_manager(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("parkspot")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".parkspot")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("parkspot.conf")
    }

    /// Resolve the config path: explicit override (with `~` expansion)
    /// or the platform default.
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        match custom {
            Some(p) if p.starts_with("~/") => match dirs::home_dir() {
                Some(home) => home.join(p.trim_start_matches("~/")),
                None => PathBuf::from(p),
            },
            Some(p) => PathBuf::from(p),
            None => Self::config_file(),
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load_from(custom: Option<&str>) -> AppResult<Self> {
        let path = Self::resolve_path(custom);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    /// Write the default configuration file (used by `init`).
    pub fn init_all(custom: Option<&str>) -> AppResult<PathBuf> {
        let path = Self::resolve_path(custom);
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let config = Self::default();
        let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;

        Ok(path)
    }

    /// Sanity-check the loaded configuration; returns one message per
    /// suspicious field.
    pub fn check(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            problems.push(format!("api_url '{}' is not an http(s) URL", self.api_url));
        }
        if !self.email.contains('@') {
            problems.push(format!("email '{}' does not look valid", self.email));
        }
        if self.timeout_secs == 0 {
            problems.push("timeout_secs must be at least 1".to_string());
        }
        if self.max_days < 1 {
            problems.push("max_days must be at least 1".to_string());
        }
        if self.max_days_manager < self.max_days {
            problems.push("max_days_manager is lower than max_days".to_string());
        }
        problems
    }
}
