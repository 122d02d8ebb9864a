//! Raw file access used by the renderer for files outside the collections.

use std::io::ErrorKind;
use std::path::Path;

use con_core::{ConError, Result};
use serde_json::Value;
use tokio::fs;

/// Unscoped JSON file helpers on the local file system.
#[derive(Debug, Clone, Default)]
pub struct LocalFileAccess;

impl LocalFileAccess {
    pub fn new() -> Self {
        Self
    }

    /// Reads `path` and parses it as JSON.
    pub async fn read_json(&self, path: &Path) -> Result<Value> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| ConError::io(format!("Failed to read {}: {}", path.display(), e)))?;
        serde_json::from_str(&content).map_err(|e| ConError::corrupt(path, e))
    }

    /// Writes `data` to `path`, creating parent directories.
    ///
    /// String values are written verbatim; anything else as 2-space JSON.
    pub async fn write(&self, path: &Path, data: &Value) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let content = match data {
            Value::String(text) => text.clone(),
            other => serde_json::to_string_pretty(other)?,
        };
        fs::write(path, content)
            .await
            .map_err(|e| ConError::io(format!("Failed to write {}: {}", path.display(), e)))?;
        tracing::debug!("[FileAccess] Wrote {}", path.display());
        Ok(())
    }

    /// Entry names of a directory, sorted.
    pub async fn read_dir(&self, path: &Path) -> Result<Vec<String>> {
        let mut entries = fs::read_dir(path)
            .await
            .map_err(|e| ConError::io(format!("Failed to read directory {}: {}", path.display(), e)))?;
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }

    pub async fn exists(&self, path: &Path) -> Result<bool> {
        match fs::metadata(path).await {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_value_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/file.json");
        let files = LocalFileAccess::new();

        files.write(&path, &json!({"a": [1, 2]})).await.unwrap();
        assert_eq!(files.read_json(&path).await.unwrap(), json!({"a": [1, 2]}));
        assert!(std::fs::read_to_string(&path).unwrap().contains("\n  \"a\""));
    }

    #[tokio::test]
    async fn test_string_written_verbatim() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("raw.json");
        let files = LocalFileAccess::new();

        files.write(&path, &json!("{\"x\":1}")).await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{\"x\":1}");
    }

    #[tokio::test]
    async fn test_read_errors() {
        let temp_dir = TempDir::new().unwrap();
        let files = LocalFileAccess::new();
        let missing = temp_dir.path().join("missing.json");
        assert!(matches!(
            files.read_json(&missing).await,
            Err(ConError::Io { .. })
        ));

        let broken = temp_dir.path().join("broken.json");
        std::fs::write(&broken, "nope").unwrap();
        assert!(files.read_json(&broken).await.unwrap_err().is_corrupt());
    }

    #[tokio::test]
    async fn test_read_dir_sorted_and_exists() {
        let temp_dir = TempDir::new().unwrap();
        let files = LocalFileAccess::new();
        for name in ["b.json", "a.json", "c.json"] {
            std::fs::write(temp_dir.path().join(name), "{}").unwrap();
        }

        assert_eq!(
            files.read_dir(temp_dir.path()).await.unwrap(),
            vec!["a.json", "b.json", "c.json"]
        );
        assert!(files.exists(&temp_dir.path().join("a.json")).await.unwrap());
        assert!(!files.exists(&temp_dir.path().join("z.json")).await.unwrap());
    }
}
