//! Fetching lazy view bundles.

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

use crate::views::ViewId;

/// Code and assets for one lazily loaded view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewBundle {
    pub view: ViewId,
    pub source: String,
}

/// Errors from loading a view bundle.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The bundle file does not exist.
    #[error("bundle for view {view} not found at {}", .path.display())]
    NotFound { view: ViewId, path: PathBuf },

    /// Reading the bundle failed.
    #[error("failed to read bundle for view {view}: {source}")]
    Io {
        view: ViewId,
        #[source]
        source: std::io::Error,
    },

    /// The load task ended without producing a result.
    #[error("load of view {0} was interrupted")]
    Interrupted(ViewId),
}

/// Source of lazy view bundles.
#[async_trait]
pub trait ViewLoader: Send + Sync {
    async fn load(&self, view: ViewId) -> Result<ViewBundle, LoadError>;
}

/// Loads `{dir}/{view}.js` from disk.
#[derive(Debug, Clone)]
pub struct BundleDirLoader {
    dir: PathBuf,
}

impl BundleDirLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn bundle_path(&self, view: ViewId) -> PathBuf {
        self.dir.join(format!("{}.js", view.name()))
    }
}

#[async_trait]
impl ViewLoader for BundleDirLoader {
    async fn load(&self, view: ViewId) -> Result<ViewBundle, LoadError> {
        let path = self.bundle_path(view);
        match tokio::fs::read_to_string(&path).await {
            Ok(source) => Ok(ViewBundle { view, source }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(LoadError::NotFound { view, path })
            }
            Err(source) => Err(LoadError::Io { view, source }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_loads_bundle_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("driver.js"), "export default Driver;").unwrap();

        let loader = BundleDirLoader::new(dir.path());
        let bundle = loader.load(ViewId::Driver).await.unwrap();
        assert_eq!(bundle.view, ViewId::Driver);
        assert_eq!(bundle.source, "export default Driver;");
    }

    #[tokio::test]
    async fn test_missing_bundle_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let loader = BundleDirLoader::new(dir.path());

        match loader.load(ViewId::Car).await {
            Err(LoadError::NotFound { view, path }) => {
                assert_eq!(view, ViewId::Car);
                assert!(path.ends_with("car.js"));
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }
}
