use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::infra::config::{load, AppConfig};

/// Source of the application configuration.
pub trait ConfigAdapter {
    fn load(&self) -> Result<AppConfig>;
}

#[derive(Debug, Clone, Default)]
pub struct FileConfigAdapter {
    path: Option<PathBuf>,
}

impl FileConfigAdapter {
    pub fn new(path: Option<&Path>) -> Self {
        Self {
            path: path.map(Path::to_path_buf),
        }
    }
}

impl ConfigAdapter for FileConfigAdapter {
    fn load(&self) -> Result<AppConfig> {
        Ok(load(self.path.as_deref())?)
    }
}

/// Hands out a fixed configuration without touching the filesystem.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct StaticConfigAdapter {
    config: AppConfig,
}

#[cfg(test)]
impl StaticConfigAdapter {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}

#[cfg(test)]
impl ConfigAdapter for StaticConfigAdapter {
    fn load(&self) -> Result<AppConfig> {
        Ok(self.config.clone())
    }
}
