use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub data_dir: String,
    #[serde(default = "default_backup_subdir")]
    pub backup_subdir: String,
}

fn default_backup_subdir() -> String {
    "backup".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: Self::timesheet_dir().to_string_lossy().to_string(),
            backup_subdir: default_backup_subdir(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtasklog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rtasklog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtasklog.conf")
    }

    /// Return the default directory holding the per-day sheets
    pub fn timesheet_dir() -> PathBuf {
        Self::config_dir().join("timesheets")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Initialize the configuration file and the timesheet directory
    pub fn init_all(custom_dir: Option<String>, is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Sheet directory: user provided or default
        let data_dir = match custom_dir {
            Some(d) => crate::utils::path::expand_tilde(&d),
            None => Self::timesheet_dir(),
        };

        let config = Config {
            data_dir: data_dir.to_string_lossy().to_string(),
            backup_subdir: default_backup_subdir(),
        };

        // Write config file, keeping an existing one untouched
        if !is_test {
            let config_path = Self::config_file();
            if config_path.exists() {
                warning(format!(
                    "Config file already exists, keeping it: {}",
                    config_path.display()
                ));
            } else {
                let yaml =
                    serde_yaml::to_string(&config).map_err(|e| AppError::Config(e.to_string()))?;
                let mut file = fs::File::create(&config_path)?;
                file.write_all(yaml.as_bytes())?;
                println!("✅ Config file: {:?}", config_path);
            }
        }

        fs::create_dir_all(&data_dir)?;
        println!("✅ Timesheets:  {:?}", data_dir);

        Ok(())
    }
}
