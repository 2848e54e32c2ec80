use crate::core::Storage;
use crate::utils::error::Result;
use std::path::Path;

/// Stores export files under a base directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(full_path, data).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_creates_missing_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested").join("out");
        let storage = LocalStorage::new(base.to_string_lossy().into_owned());

        storage.write_file("report.txt", b"hello").await.unwrap();
        assert!(base.join("report.txt").exists());
        assert_eq!(std::fs::read(base.join("report.txt")).unwrap(), b"hello".to_vec());
    }
}
