mod adapter;
mod app_config;
mod file_config;
mod loader;

#[cfg(test)]
pub use adapter::StaticConfigAdapter;
pub use adapter::{ConfigAdapter, FileConfigAdapter};
pub use app_config::{AppConfig, LogConfig, UiConfig};
pub use loader::load;
