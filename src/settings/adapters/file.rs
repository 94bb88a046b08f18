//! JSON file settings store rooted in a capability directory.

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io::ErrorKind;
use std::sync::Arc;

use crate::settings::{
    domain::DashboardSettings,
    ports::{SettingsStore, SettingsStoreError, SettingsStoreResult},
};

/// Settings store writing one JSON document inside a directory.
///
/// Writes go to a sibling temporary file that is then renamed over the
/// document, so readers never observe a half-written file.
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    dir: Arc<Dir>,
    file_name: Utf8PathBuf,
}

impl FileSettingsStore {
    /// Default document name.
    pub const DEFAULT_FILE_NAME: &'static str = "realtyflow-settings.json";

    /// Uses `file_name` inside an already opened directory.
    #[must_use]
    pub fn new(dir: Dir, file_name: impl Into<Utf8PathBuf>) -> Self {
        Self {
            dir: Arc::new(dir),
            file_name: file_name.into(),
        }
    }

    /// Opens the parent directory of `path` with ambient authority.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsStoreError::Persistence`] when `path` has no file
    /// name or its directory cannot be opened.
    pub fn open(path: &Utf8Path) -> SettingsStoreResult<Self> {
        let file_name = path.file_name().ok_or_else(|| {
            SettingsStoreError::persistence(std::io::Error::other(
                "settings path must include a file name",
            ))
        })?;
        let parent = path
            .parent()
            .filter(|parent| !parent.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));
        let dir = Dir::open_ambient_dir(parent, ambient_authority())
            .map_err(SettingsStoreError::persistence)?;
        Ok(Self::new(dir, file_name))
    }

    async fn run_blocking<F, T>(&self, f: F) -> SettingsStoreResult<T>
    where
        F: FnOnce(&Dir, &Utf8Path) -> SettingsStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let dir = Arc::clone(&self.dir);
        let file_name = self.file_name.clone();
        tokio::task::spawn_blocking(move || f(&dir, &file_name))
            .await
            .map_err(SettingsStoreError::persistence)?
    }
}

#[async_trait]
impl SettingsStore for FileSettingsStore {
    async fn load(&self) -> SettingsStoreResult<Option<DashboardSettings>> {
        self.run_blocking(|dir, file_name| match dir.read_to_string(file_name) {
            Ok(contents) => Ok(Some(serde_json::from_str(&contents)?)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(SettingsStoreError::persistence(err)),
        })
        .await
    }

    async fn save(&self, settings: &DashboardSettings) -> SettingsStoreResult<()> {
        let contents = serde_json::to_vec_pretty(settings).map_err(SettingsStoreError::persistence)?;
        self.run_blocking(move |dir, file_name| {
            let staging = Utf8PathBuf::from(format!("{file_name}.tmp"));
            dir.write(&staging, &contents)
                .map_err(SettingsStoreError::persistence)?;
            dir.rename(&staging, dir, file_name)
                .map_err(SettingsStoreError::persistence)
        })
        .await
    }
}
