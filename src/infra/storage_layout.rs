use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::infra::error::AppError;

const APP_DIR_NAME: &str = "chatpad";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLayout {
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl StorageLayout {
    pub fn resolve() -> Result<Self, AppError> {
        let base = dirs::data_local_dir().ok_or_else(|| AppError::StoragePathResolution {
            details: "unable to resolve local data directory".into(),
        })?;

        Ok(Self::under(&base))
    }

    /// Lays the app directories out below `base`.
    pub fn under(base: &Path) -> Self {
        let data_dir = base.join(APP_DIR_NAME);
        let log_dir = data_dir.join("logs");

        Self { data_dir, log_dir }
    }

    pub fn ensure_dirs(&self) -> Result<(), AppError> {
        for dir in [&self.data_dir, &self.log_dir] {
            fs::create_dir_all(dir).map_err(|source| AppError::StorageDirCreate {
                path: dir.clone(),
                source,
            })?;
        }

        Ok(())
    }

    pub fn log_file(&self, file_name: &str) -> PathBuf {
        self.log_dir.join(file_name)
    }
}
