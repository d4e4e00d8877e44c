use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::application::ports::storage_port::StoragePort;

/// Filesystem storage backend rooted at the configured uploads directory.
pub struct FsStorage {
    root: PathBuf,
}

impl FsStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    // Normalise a stored path and reject any traversal out of the root.
    fn resolve(&self, path: &str) -> anyhow::Result<PathBuf> {
        let mut relative = PathBuf::new();
        for component in Path::new(path).components() {
            match component {
                Component::Normal(part) => relative.push(part),
                Component::CurDir => continue,
                _ => anyhow::bail!("forbidden"),
            }
        }
        if relative.as_os_str().is_empty() {
            anyhow::bail!("forbidden");
        }
        let full = self.root.join(relative);
        if !full.starts_with(&self.root) {
            anyhow::bail!("forbidden");
        }
        Ok(full)
    }
}

#[async_trait]
impl StoragePort for FsStorage {
    async fn store(&self, filename: &str, bytes: &[u8]) -> anyhow::Result<String> {
        fs::create_dir_all(&self.root).await?;
        let (stem, ext) = match filename.rsplit_once('.') {
            Some((s, e)) if !s.is_empty() => (s, Some(e)),
            _ => (filename, None),
        };
        // create_new keeps the collision check and the write atomic; on a
        // taken name, retry with a counter before the extension.
        let mut attempt = 0u32;
        loop {
            let candidate = match (attempt, ext) {
                (0, _) => filename.to_string(),
                (n, Some(ext)) => format!("{stem}-{n}.{ext}"),
                (n, None) => format!("{stem}-{n}"),
            };
            let full = self.resolve(&candidate)?;
            match fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&full)
                .await
            {
                Ok(mut file) => {
                    file.write_all(bytes).await?;
                    file.flush().await?;
                    return Ok(candidate);
                }
                Err(err) if err.kind() == ErrorKind::AlreadyExists => {
                    attempt += 1;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    async fn read(&self, path: &str) -> anyhow::Result<Vec<u8>> {
        let full = self.resolve(path)?;
        Ok(fs::read(full).await?)
    }

    async fn delete(&self, path: &str) -> anyhow::Result<()> {
        let full = self.resolve(path)?;
        match fs::remove_file(full).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
