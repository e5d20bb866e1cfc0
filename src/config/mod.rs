use crate::core::calculator::{CalcOptions, DEFAULT_BASELINE_HOURS, Normalization};
use crate::core::scheduler::DEFAULT_OFFSET_MINUTES;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_baseline_hours")]
    pub baseline_hours: i64,
    #[serde(default = "default_notify_offset")]
    pub notify_offset_minutes: i64,
    #[serde(default)]
    pub normalization: Normalization,
    #[serde(default = "default_notifications")]
    pub notifications: bool,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_baseline_hours() -> i64 {
    DEFAULT_BASELINE_HOURS
}
fn default_notify_offset() -> i64 {
    DEFAULT_OFFSET_MINUTES
}
fn default_notifications() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            baseline_hours: default_baseline_hours(),
            notify_offset_minutes: default_notify_offset(),
            normalization: Normalization::default(),
            notifications: default_notifications(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rclockout")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rclockout")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rclockout.conf")
    }

    /// Return the full path of the SQLite database holding the internal log
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rclockout.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    /// Load and validate the configuration at `path`.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        let cfg = Self::read_from(path)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Configuration for the commands that repair or recreate the file
    /// (`init`, `config`). Values are not validated, and an unreadable file
    /// falls back to the defaults with a warning.
    pub fn load_unchecked() -> Self {
        let path = Self::config_file();
        Self::read_from(&path).unwrap_or_else(|e| {
            warning(format!("Ignoring {}: {}", path.display(), e));
            Config::default()
        })
    }

    fn read_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.baseline_hours <= 0 || self.baseline_hours > 24 {
            return Err(AppError::Config(format!(
                "baseline_hours must be between 1 and 24 (got {})",
                self.baseline_hours
            )));
        }
        if self.notify_offset_minutes < 0 || self.notify_offset_minutes > 24 * 60 {
            return Err(AppError::Config(format!(
                "notify_offset_minutes must be between 0 and 1440 (got {})",
                self.notify_offset_minutes
            )));
        }
        Ok(())
    }

    /// Database path with `~` expanded. Relative paths live in the config dir.
    pub fn database_path(&self) -> PathBuf {
        Self::resolve_db_path(&self.database)
    }

    pub fn resolve_db_path(name: &str) -> PathBuf {
        let p = expand_tilde(name);
        if p.is_absolute() {
            p
        } else {
            Self::config_dir().join(p)
        }
    }

    pub fn calc_options(&self) -> CalcOptions {
        CalcOptions {
            baseline_hours: self.baseline_hours,
            normalization: self.normalization,
        }
    }

    pub fn save(&self) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self)?;
        fs::write(Self::config_file(), yaml).map_err(|_| AppError::ConfigSave)
    }

    /// Initialize configuration directory, config file and database file.
    /// Returns the database path that was set up.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        fs::create_dir_all(Self::config_dir())?;

        // DB name: user provided or default
        let db_path = match custom_db {
            Some(name) => Self::resolve_db_path(&name),
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            config.save()?;
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(db_path)
    }
}
