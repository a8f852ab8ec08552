use std::path::{Path, PathBuf};

use tokio::{fs, io::AsyncWriteExt};

use super::Error;
use crate::menu::Menu;

#[cfg(unix)]
const DIR_MODE: u32 = 0o750;
#[cfg(unix)]
const FILE_MODE: u32 = 0o640;

/// One JSON file per location under a root directory.
#[derive(Debug, Clone)]
pub struct FileStore(PathBuf);

impl FileStore {
    pub fn open(root: impl AsRef<Path>) -> Self {
        Self(root.as_ref().to_owned())
    }

    #[inline]
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.0
    }

    /// `<root>/<id>`
    #[must_use]
    pub fn path(&self, id: &str) -> PathBuf {
        self.0.join(id)
    }

    pub async fn load(&self, id: &str) -> Result<Menu, Error> {
        let path = self.path(id);
        let data = match fs::read(&path).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::NotFound(path))
            }
            Err(e) => return Err(e.into()),
        };
        serde_json::from_slice(&data).map_err(Error::Decode)
    }

    pub async fn save(&self, id: &str, menu: &Menu) -> Result<(), Error> {
        let data = serde_json::to_vec(menu).map_err(Error::Encode)?;
        let path = self.path(id);
        if let Some(dir) = path.parent() {
            let mut builder = fs::DirBuilder::new();
            builder.recursive(true);
            #[cfg(unix)]
            builder.mode(DIR_MODE);
            builder.create(dir).await?;
        }

        let mut options = fs::OpenOptions::new();
        options.create(true).write(true).truncate(true);
        #[cfg(unix)]
        options.mode(FILE_MODE);
        let mut f = options.open(&path).await?;
        f.write_all(&data).await?;
        f.flush().await?;
        log::debug!("Wrote {} bytes to {}", data.len(), path.display());
        Ok(())
    }
}
