use crate::errors::{AppError, AppResult};
use crate::models::row::ColumnLayout;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub output_file: String,
    pub date_column: usize,
    pub start_column: usize,
    pub end_column: usize,
    pub duration_column: usize,
    pub placeholder: String,
    pub datetime_format: String,
}

impl Default for Config {
    fn default() -> Self {
        let layout = ColumnLayout::default();
        Self {
            output_file: "new_timelog.html".to_string(),
            date_column: layout.date,
            start_column: layout.start,
            end_column: layout.end,
            duration_column: layout.duration,
            placeholder: layout.placeholder,
            datetime_format: layout.datetime_format,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if let Some(dir) = dirs::config_dir() {
            return dir.join("timelog-reorder");
        }
        let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".timelog-reorder")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("timelog-reorder.conf")
    }

    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, the standard config file is
    /// read when present and defaults apply otherwise.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let cfg = match path {
            Some(p) if !p.exists() => {
                return Err(AppError::Config(format!(
                    "configuration file '{}' does not exist",
                    p.display()
                )));
            }
            Some(p) => Self::from_file(p)?,
            None => {
                let default_path = Self::config_file();
                if default_path.exists() {
                    Self::from_file(&default_path)?
                } else {
                    tracing::debug!("no configuration file, using defaults");
                    Self::default()
                }
            }
        };

        cfg.validate()?;
        Ok(cfg)
    }

    fn from_file(path: &Path) -> AppResult<Self> {
        tracing::debug!(path = %path.display(), "loading configuration");
        let content = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Reject layouts where two roles point at the same column.
    pub fn validate(&self) -> AppResult<()> {
        let columns = [
            ("date_column", self.date_column),
            ("start_column", self.start_column),
            ("end_column", self.end_column),
            ("duration_column", self.duration_column),
        ];

        for (i, (name_a, col_a)) in columns.iter().enumerate() {
            if let Some((name_b, _)) = columns[i + 1..].iter().find(|(_, col_b)| col_b == col_a) {
                return Err(AppError::Config(format!(
                    "{name_a} and {name_b} both point at column {col_a}"
                )));
            }
        }

        if self.output_file.trim().is_empty() {
            return Err(AppError::Config("output_file must not be empty".into()));
        }

        Ok(())
    }

    pub fn layout(&self) -> ColumnLayout {
        ColumnLayout {
            date: self.date_column,
            start: self.start_column,
            end: self.end_column,
            duration: self.duration_column,
            placeholder: self.placeholder.clone(),
            datetime_format: self.datetime_format.clone(),
        }
    }
}
