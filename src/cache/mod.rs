mod local;

use std::path::{Path, PathBuf};

use crate::menu::Menu;

pub use local::FileStore;

/// Directory name under the platform cache dir.
pub const APP_DIR: &str = "dc-menu";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("refusing to use the cache with an empty location id")]
    EmptyIdentifier,
    #[error("no cache file at {}", .0.display())]
    NotFound(PathBuf),
    #[error("cache io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cache file is not a valid menu: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("could not serialize menu: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("could not find a cache directory for this platform")]
    NoCacheDir,
}

/// Where the per-location cache files live.
///
/// On android the OS-provided path is not usable, so when an application id is
/// known the app's private data dir is used instead.
pub fn cache_root(app_id: Option<&str>) -> Result<PathBuf, Error> {
    resolve_root(cfg!(target_os = "android"), app_id, dirs::cache_dir())
}

fn resolve_root(
    android: bool,
    app_id: Option<&str>,
    platform_cache: Option<PathBuf>,
) -> Result<PathBuf, Error> {
    if android {
        if let Some(id) = app_id.filter(|id| !id.is_empty()) {
            return Ok(Path::new("/data/data").join(id).join("cache"));
        }
    }
    platform_cache
        .map(|dir| dir.join(APP_DIR))
        .ok_or(Error::NoCacheDir)
}

#[derive(Debug)]
#[non_exhaustive]
pub enum Store {
    Local(FileStore),
    /// Nothing is persisted; every load misses.
    AdHoc,
}

impl Store {
    #[inline]
    pub fn local(p: impl AsRef<Path>) -> Self {
        Self::Local(FileStore::open(p))
    }

    /// `None` for the ad-hoc store.
    pub fn root(&self) -> Option<&Path> {
        match self {
            Self::Local(f) => Some(f.root()),
            Self::AdHoc => None,
        }
    }

    pub async fn load(&self, id: &str) -> Result<Menu, Error> {
        if id.is_empty() {
            return Err(Error::EmptyIdentifier);
        }
        match self {
            Self::Local(f) => f.load(id).await,
            Self::AdHoc => Err(Error::NotFound(PathBuf::from(id))),
        }
    }

    pub async fn save(&self, id: &str, menu: &Menu) -> Result<(), Error> {
        if id.is_empty() {
            return Err(Error::EmptyIdentifier);
        }
        match self {
            Self::Local(f) => f.save(id, menu).await,
            Self::AdHoc => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_identifier() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::local(dir.path().join("root"));
        assert!(matches!(
            store.load("").await,
            Err(Error::EmptyIdentifier)
        ));
        assert!(matches!(
            store.save("", &Menu::default()).await,
            Err(Error::EmptyIdentifier)
        ));
        // nothing was created
        assert!(!dir.path().join("root").exists());
        assert_eq!(store.root(), Some(dir.path().join("root").as_path()));
    }

    #[tokio::test]
    async fn test_adhoc() {
        let store = Store::AdHoc;
        assert_eq!(store.root(), None);
        store.save("segundo", &Menu::default()).await.unwrap();
        assert!(matches!(
            store.load("segundo").await,
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_resolve_root() {
        let platform = || Some(PathBuf::from("/home/aggie/.cache"));
        assert_eq!(
            resolve_root(true, Some("edu.ucdavis.dcmenu"), platform()).unwrap(),
            Path::new("/data/data/edu.ucdavis.dcmenu/cache")
        );
        // no usable app id on android falls back to the platform dir
        assert_eq!(
            resolve_root(true, Some(""), platform()).unwrap(),
            Path::new("/home/aggie/.cache/dc-menu")
        );
        assert_eq!(
            resolve_root(true, None, platform()).unwrap(),
            Path::new("/home/aggie/.cache/dc-menu")
        );
        // the app id only matters on android
        assert_eq!(
            resolve_root(false, Some("edu.ucdavis.dcmenu"), platform()).unwrap(),
            Path::new("/home/aggie/.cache/dc-menu")
        );
        assert!(matches!(
            resolve_root(false, None, None),
            Err(Error::NoCacheDir)
        ));
    }
}
