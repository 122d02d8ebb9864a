//! Atomic JSON file operations.
//!
//! Collection files and the settings file are rewritten whole. Writes go to a
//! uniquely named temporary sibling that is persisted over the target;
//! read-modify-write cycles hold an advisory lock for their whole duration.
//!
//! Lock files live under the system temp directory, keyed by the target's
//! canonical path, so the website repository never sees them. They are never
//! deleted: unlinking a lock file while another handle waits on it would let
//! two writers hold "the" lock at once.

use std::collections::hash_map::DefaultHasher;
use std::fs::{self, File, OpenOptions};
use std::hash::{Hash, Hasher};
use std::io::{ErrorKind, Write as IoWrite};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use con_core::ConError;
use fs2::FileExt;
use serde::{Serialize, de::DeserializeOwned};
use tempfile::NamedTempFile;
use thiserror::Error;

const LOCK_DIR_NAME: &str = "con-desktop-locks";

/// Errors that can occur during atomic JSON operations.
#[derive(Debug, Error)]
pub enum AtomicJsonError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The file exists but is not JSON of the expected shape.
    #[error("JSON parse error: {0}")]
    Parse(#[source] serde_json::Error),
    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Serialize(#[source] serde_json::Error),
    /// File locking error.
    #[error("Lock error: {0}")]
    Lock(String),
}

impl AtomicJsonError {
    /// Converts into the domain error, attaching the file path to parse failures.
    pub fn into_con_error(self, path: &Path) -> ConError {
        match self {
            AtomicJsonError::Parse(e) => ConError::corrupt(path, e),
            AtomicJsonError::Io(e) => ConError::io(format!("{}: {}", path.display(), e)),
            AtomicJsonError::Serialize(e) => ConError::internal(e.to_string()),
            AtomicJsonError::Lock(e) => ConError::io(e),
        }
    }
}

/// A handle to a JSON document file.
///
/// Provides:
/// - **Atomicity**: writes are all-or-nothing via a unique temp file + persist
/// - **Isolation**: `update` holds an exclusive advisory lock across read, modify and write
/// - **Durability**: explicit fsync before rename
pub struct AtomicJsonFile<T> {
    path: PathBuf,
    _phantom: PhantomData<T>,
}

impl<T> AtomicJsonFile<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _phantom: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and deserializes the file.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(T))`: successfully loaded
    /// - `Ok(None)`: file doesn't exist or is blank
    /// - `Err(Parse)`: file content is not valid for `T`
    pub fn load(&self) -> Result<Option<T>, AtomicJsonError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&content)
            .map(Some)
            .map_err(AtomicJsonError::Parse)
    }

    /// Writes `data` as 2-space indented JSON with a trailing newline.
    pub fn save(&self, data: &T) -> Result<(), AtomicJsonError> {
        let parent = parent_dir(&self.path)?;
        fs::create_dir_all(parent)?;

        let mut json = serde_json::to_string_pretty(data).map_err(AtomicJsonError::Serialize)?;
        json.push('\n');

        let mut tmp_file = NamedTempFile::new_in(parent)?;
        tmp_file.write_all(json.as_bytes())?;
        tmp_file.as_file().sync_all()?;
        tmp_file.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }

    /// Performs a locked read-modify-write.
    ///
    /// A missing file starts from `default_value`. A malformed file aborts the
    /// update without touching it. The closure's return value is passed through.
    pub fn update<F, R>(&self, default_value: T, f: F) -> Result<R, AtomicJsonError>
    where
        F: FnOnce(&mut T) -> R,
    {
        let _lock = FileLock::acquire(&self.path)?;

        let mut data = self.load()?.unwrap_or(default_value);
        let result = f(&mut data);
        self.save(&data)?;

        Ok(result)
    }

    /// Locked read-modify-write of an existing file only.
    ///
    /// A missing file is left missing. The file is rewritten only when `f`
    /// reports a change. Returns whether a write happened.
    pub fn update_existing<F>(&self, f: F) -> Result<bool, AtomicJsonError>
    where
        F: FnOnce(&mut T) -> bool,
    {
        if !self.path.exists() {
            return Ok(false);
        }
        let _lock = FileLock::acquire(&self.path)?;

        let Some(mut data) = self.load()? else {
            return Ok(false);
        };
        if !f(&mut data) {
            return Ok(false);
        }
        self.save(&data)?;
        Ok(true)
    }

    /// Deletes the file. Returns `false` when it did not exist.
    pub fn remove(&self) -> Result<bool, AtomicJsonError> {
        if !self.path.exists() {
            return Ok(false);
        }
        let _lock = FileLock::acquire(&self.path)?;
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

fn parent_dir(path: &Path) -> Result<&Path, AtomicJsonError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => Ok(parent),
        Some(_) => Ok(Path::new(".")),
        None => Err(AtomicJsonError::Io(std::io::Error::new(
            ErrorKind::InvalidInput,
            "Path has no parent directory",
        ))),
    }
}

/// Lock file guarding `path`: `<temp>/con-desktop-locks/<hash>.lock`.
fn lock_path_for(path: &Path) -> Result<PathBuf, AtomicJsonError> {
    let parent = parent_dir(path)?;
    fs::create_dir_all(parent)?;
    let file_name = path.file_name().ok_or_else(|| {
        AtomicJsonError::Io(std::io::Error::new(
            ErrorKind::InvalidInput,
            "Path has no file name",
        ))
    })?;

    let mut hasher = DefaultHasher::new();
    fs::canonicalize(parent)?.join(file_name).hash(&mut hasher);
    Ok(std::env::temp_dir()
        .join(LOCK_DIR_NAME)
        .join(format!("{:016x}.lock", hasher.finish())))
}

/// An exclusive advisory lock, released when the handle is dropped.
struct FileLock {
    file: File,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self, AtomicJsonError> {
        let lock_path = lock_path_for(path)?;
        if let Some(dir) = lock_path.parent() {
            fs::create_dir_all(dir)?;
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;
        file.lock_exclusive().map_err(|e| {
            AtomicJsonError::Lock(format!(
                "Failed to lock {}: {}",
                lock_path.display(),
                e
            ))
        })?;

        Ok(FileLock { file })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    struct Counter {
        name: String,
        count: u32,
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicJsonFile::<Counter>::new(temp_dir.path().join("nested/counter.json"));

        let counter = Counter {
            name: "test".to_string(),
            count: 42,
        };
        file.save(&counter).unwrap();

        assert_eq!(file.load().unwrap(), Some(counter));
    }

    #[test]
    fn test_two_space_indent_and_newline() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("counter.json");
        let file = AtomicJsonFile::<Counter>::new(path.clone());
        file.save(&Counter::default()).unwrap();

        let written = fs::read_to_string(path).unwrap();
        assert_eq!(written, "{\n  \"name\": \"\",\n  \"count\": 0\n}\n");
    }

    #[test]
    fn test_load_missing_and_blank() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("counter.json");
        let file = AtomicJsonFile::<Counter>::new(path.clone());
        assert!(file.load().unwrap().is_none());

        fs::write(&path, "  \n").unwrap();
        assert!(file.load().unwrap().is_none());
    }

    #[test]
    fn test_malformed_is_parse_error_and_update_keeps_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("counter.json");
        fs::write(&path, "{ not json").unwrap();
        let file = AtomicJsonFile::<Counter>::new(path.clone());

        assert!(matches!(file.load(), Err(AtomicJsonError::Parse(_))));
        let result = file.update(Counter::default(), |c| c.count += 1);
        assert!(matches!(result, Err(AtomicJsonError::Parse(_))));
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn test_update_passes_result_through() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicJsonFile::<Counter>::new(temp_dir.path().join("counter.json"));

        let after = file
            .update(Counter::default(), |c| {
                c.count += 10;
                c.count
            })
            .unwrap();
        assert_eq!(after, 10);

        file.update(Counter::default(), |c| c.count += 5).unwrap();
        assert_eq!(file.load().unwrap().unwrap().count, 15);
    }

    #[test]
    fn test_only_the_target_is_left_in_its_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("counter.json");
        let file = AtomicJsonFile::<Counter>::new(path.clone());
        file.update(Counter::default(), |c| c.count = 1).unwrap();
        file.save(&Counter::default()).unwrap();

        let names: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec!["counter.json"]);
    }

    #[test]
    fn test_lock_path_is_stable_and_outside_the_directory() {
        let temp_dir = TempDir::new().unwrap();
        let a = lock_path_for(&temp_dir.path().join("a.json")).unwrap();
        let b = lock_path_for(&temp_dir.path().join("b.json")).unwrap();
        let a_again = lock_path_for(&temp_dir.path().join("./a.json")).unwrap();

        assert_ne!(a, b);
        assert_eq!(a, a_again);
        assert!(!a.starts_with(temp_dir.path()));
    }

    #[test]
    fn test_concurrent_updates_all_land() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ids.json");

        let writers: Vec<_> = (0..16)
            .map(|i| {
                let path = path.clone();
                std::thread::spawn(move || {
                    AtomicJsonFile::<Vec<u32>>::new(path)
                        .update(Vec::new(), |ids| ids.push(i))
                        .unwrap();
                })
            })
            .collect();
        for writer in writers {
            writer.join().unwrap();
        }

        let mut ids = AtomicJsonFile::<Vec<u32>>::new(path).load().unwrap().unwrap();
        ids.sort_unstable();
        assert_eq!(ids, (0..16).collect::<Vec<_>>());
    }

    #[test]
    fn test_update_existing_leaves_missing_file_alone() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("counter.json");
        let file = AtomicJsonFile::<Counter>::new(path.clone());

        assert!(!file.update_existing(|c| {
            c.count += 1;
            true
        })
        .unwrap());
        assert!(!path.exists());

        file.save(&Counter::default()).unwrap();
        assert!(!file.update_existing(|_| false).unwrap());
        assert!(file.update_existing(|c| {
            c.count = 7;
            true
        })
        .unwrap());
        assert_eq!(file.load().unwrap().unwrap().count, 7);
    }

    #[test]
    fn test_remove() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicJsonFile::<Counter>::new(temp_dir.path().join("counter.json"));
        assert!(!file.remove().unwrap());
        file.save(&Counter::default()).unwrap();
        assert!(file.remove().unwrap());
        assert!(file.load().unwrap().is_none());
    }
}
