use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::infra::{
    config::{file_config::FileConfig, AppConfig},
    contracts::ConfigAdapter,
    error::AppError,
};

const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Reads the TOML config from an explicit path or `./config.toml`.
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
    fn load(&self) -> anyhow::Result<AppConfig> {
        Ok(load(self.path.as_deref())?)
    }
}

/// Loads the config file, falling back to defaults when it does not exist.
pub fn load(path: Option<&Path>) -> Result<AppConfig, AppError> {
    let config_path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    let mut config = AppConfig::default();

    if !config_path.exists() {
        return Ok(config);
    }

    let raw = fs::read_to_string(&config_path).map_err(|source| AppError::ConfigRead {
        path: config_path.clone(),
        source,
    })?;

    let file_config: FileConfig = toml::from_str(&raw).map_err(|source| AppError::ConfigParse {
        path: config_path,
        source,
    })?;

    file_config.merge_into(&mut config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let path = dir.path().join("config.toml");
        fs::write(&path, contents).expect("must write test config");
        (dir, path)
    }

    #[test]
    fn returns_defaults_when_file_is_missing() {
        let config = load(Some(Path::new("./missing-config.toml"))).expect("config must load");

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn merges_file_values_over_defaults() {
        let (_dir, path) = write_config(
            r#"[logging]
level = "debug"

[chat]
show_avatars = false
bubble_width_percent = 50
"#,
        );

        let config = load(Some(&path)).expect("config must load");

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.file, "chatpad.log");
        assert!(!config.chat.show_avatars);
        assert!(config.chat.submit_on_enter);
        assert_eq!(config.chat.bubble_width_percent, 50);
    }

    #[test]
    fn file_adapter_loads_from_its_path() {
        let (_dir, path) = write_config("[chat]\nsubmit_on_enter = false\n");

        let config = FileConfigAdapter::new(Some(&path))
            .load()
            .expect("adapter must load config");

        assert!(!config.chat.submit_on_enter);
    }

    #[test]
    fn reports_parse_errors_with_path() {
        let (_dir, path) = write_config("[chat]\nshow_avatars = \"sometimes\"\n");

        let error = load(Some(&path)).expect_err("invalid type must fail");

        assert!(matches!(error, AppError::ConfigParse { .. }));
        assert!(error.to_string().contains("config.toml"));
    }
}
