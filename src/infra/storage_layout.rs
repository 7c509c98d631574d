use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::infra::{config::LogConfig, error::AppError};

const APP_DIR_NAME: &str = "metaclaw";
const LOG_DIR_NAME: &str = "logs";
const LOG_FILE_NAME: &str = "metaclaw.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLayout {
    pub log_dir: PathBuf,
}

impl StorageLayout {
    pub fn resolve(config: &LogConfig) -> Result<Self, AppError> {
        if let Some(directory) = &config.directory {
            return Ok(Self::from_log_dir(directory));
        }

        let data_base = dirs::data_local_dir().ok_or_else(|| AppError::LogDirResolution {
            details: "unable to resolve local data directory (XDG_DATA_HOME/HOME)".into(),
        })?;

        Ok(Self::from_log_dir(
            &data_base.join(APP_DIR_NAME).join(LOG_DIR_NAME),
        ))
    }

    fn from_log_dir(log_dir: &Path) -> Self {
        Self {
            log_dir: log_dir.to_path_buf(),
        }
    }

    pub fn ensure_dirs(&self) -> Result<(), AppError> {
        fs::create_dir_all(&self.log_dir).map_err(|source| AppError::LogDirCreate {
            path: self.log_dir.clone(),
            source,
        })
    }

    pub fn log_file_name(&self) -> &'static str {
        LOG_FILE_NAME
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }
}
