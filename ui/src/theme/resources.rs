use crate::error::{AppError, AppResult};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Logo shown on light windows.
pub const LOGO_LIGHT_WINDOW: &str = "img/logo_light.svg";
/// Logo shown on dark windows.
pub const LOGO_DARK_WINDOW: &str = "img/logo_dark.svg";

/// Source of named resources (stylesheets, images).
pub trait ResourceProvider {
    /// Text content of `id`, or `None` when absent.
    fn read(&self, id: &str) -> Option<String>;

    fn exists(&self, id: &str) -> bool {
        self.read(id).is_some()
    }
}

/// Resources resolved relative to a directory on disk.
#[derive(Debug, Clone)]
pub struct DirectoryResources {
    root: PathBuf,
}

impl DirectoryResources {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, id: &str) -> AppResult<PathBuf> {
        let relative = Path::new(id);
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
        {
            return Err(AppError::Resource(format!(
                "Resource id '{id}' must be a plain relative path"
            )));
        }
        Ok(self.root.join(relative))
    }
}

impl ResourceProvider for DirectoryResources {
    fn read(&self, id: &str) -> Option<String> {
        let path = match self.resolve(id) {
            Ok(path) => path,
            Err(e) => {
                log::warn!("{e}");
                return None;
            }
        };
        match fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(e) => {
                log::debug!("Resource {} unavailable: {e}", path.display());
                None
            }
        }
    }

    fn exists(&self, id: &str) -> bool {
        self.resolve(id).is_ok_and(|path| path.is_file())
    }
}

/// Resources held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryResources {
    entries: BTreeMap<String, String>,
}

impl MemoryResources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: &str, content: &str) -> Self {
        self.entries.insert(id.to_string(), content.to_string());
        self
    }
}

impl ResourceProvider for MemoryResources {
    fn read(&self, id: &str) -> Option<String> {
        self.entries.get(id).cloned()
    }
}
