use std::{path::Path, time::Duration};

use crate::{
    infra::{
        self,
        config::{AppConfig, ConfigAdapter, FileConfigAdapter},
        error::AppError,
        storage_layout::StorageLayout,
    },
    ui::CrosstermEventSource,
    usecases::{
        context::AppContext,
        contracts::{AppEventSource, ShellOrchestrator},
        shell::DefaultShellOrchestrator,
    },
};

pub struct ShellComposition {
    pub event_source: Box<dyn AppEventSource>,
    pub orchestrator: Box<dyn ShellOrchestrator>,
}

pub fn bootstrap(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let context = build_context(&FileConfigAdapter::new(config_path))?;
    let log_guard = infra::logging::init(&context.config.logging, &context.layout)?;

    tracing::info!(
        log_file = %context.layout.log_file().display(),
        "logging initialized"
    );

    Ok(context.with_log_guard(log_guard))
}

pub fn compose_shell(context: &AppContext) -> ShellComposition {
    ShellComposition {
        event_source: Box::new(CrosstermEventSource::new(
            Duration::from_millis(context.config.ui.event_poll_ms),
            context.config.ui.mouse,
        )),
        orchestrator: Box::new(DefaultShellOrchestrator::new()),
    }
}

fn build_context(config_adapter: &dyn ConfigAdapter) -> Result<AppContext, AppError> {
    let config: AppConfig = config_adapter.load()?;
    let layout = StorageLayout::resolve(&config.logging)?;

    Ok(AppContext::new(config, layout))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::{
        domain::panel::Panel,
        infra::config::{LogConfig, StaticConfigAdapter},
    };

    #[test]
    fn builds_context_with_default_config_when_file_is_missing() {
        let adapter = FileConfigAdapter::new(Some(Path::new("./missing-config.toml")));
        let context = build_context(&adapter).expect("context should build from defaults");

        assert_eq!(context.config, AppConfig::default());
        assert!(!context.has_log_writer());
    }

    #[test]
    fn builds_context_from_static_config() {
        let dir = tempfile::tempdir().expect("temp dir must be created");
        let config = AppConfig {
            logging: LogConfig {
                level: "debug".to_owned(),
                directory: Some(dir.path().to_path_buf()),
            },
            ..AppConfig::default()
        };

        let context = build_context(&StaticConfigAdapter::new(config.clone()))
            .expect("context should build");

        assert_eq!(context.config, config);
        assert_eq!(context.layout.log_dir, dir.path());
    }

    #[test]
    fn configured_log_directory_reaches_layout() {
        let dir = tempfile::tempdir().expect("temp dir must be created");
        let config_path = dir.path().join("config.toml");
        let log_dir = dir.path().join("logs");
        fs::write(
            &config_path,
            format!("[logging]\ndirectory = {:?}\n", log_dir.display().to_string()),
        )
        .expect("must write test config");

        let context = build_context(&FileConfigAdapter::new(Some(&config_path)))
            .expect("context should build");

        assert_eq!(context.layout.log_dir, log_dir);
    }

    #[test]
    fn invalid_config_surfaces_as_error() {
        let dir = tempfile::tempdir().expect("temp dir must be created");
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "[ui]\nmouse = \"maybe\"\n").expect("must write test config");

        let result = build_context(&FileConfigAdapter::new(Some(&config_path)));

        assert!(result.is_err());
    }

    #[test]
    fn composed_shell_starts_on_chat_panel() {
        let context =
            build_context(&StaticConfigAdapter::default()).expect("context should build");
        let shell = compose_shell(&context);

        assert!(shell.orchestrator.state().is_running());
        assert_eq!(shell.orchestrator.state().active_panel(), Panel::Chat);
    }
}
