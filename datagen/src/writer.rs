use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::DataGenError;
use crate::record::{build_records, Record};

pub const DEFAULT_BASE_DIR: &str = "/app/input_file";
pub const DEFAULT_FILE_NAME: &str = "generated_data.json";

/// Writes the generated batch as a JSON document to `<base_dir>/<file_name>`.
///
/// A run is a full overwrite of the target file, there is no temporary file and rename.
/// Concurrent runs against the same path must be serialized by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataWriter {
    base_dir: PathBuf,
    file_name: String,
}

impl Default for DataWriter {
    fn default() -> Self {
        DataWriter::new(DEFAULT_BASE_DIR, DEFAULT_FILE_NAME)
    }
}

impl DataWriter {
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        DataWriter {
            base_dir: base_dir.into(),
            file_name: file_name.into(),
        }
    }

    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.base_dir.join(&self.file_name)
    }

    /// Ensures the base directory exists, then writes the batch to [`output_path`](Self::output_path).
    /// Returns the path that was written.
    ///
    /// # Errors
    /// Errors when the directory cannot be created or the file cannot be written
    pub fn run(&self) -> Result<PathBuf, DataGenError> {
        ensure_output_directory(&self.base_dir)?;
        let records = build_records();
        let path = self.output_path();
        write_json(&records, &path)?;
        info!("Wrote {} records to {}", records.len(), path.display());
        Ok(path)
    }
}

/// Creates `path` and any missing parents. A directory that already exists is not an error.
///
/// # Errors
/// Errors when creation is blocked, e.g. by permissions or a file sitting on the path
pub fn ensure_output_directory(path: &Path) -> Result<(), DataGenError> {
    debug!("Ensuring output directory {}", path.display());
    fs::create_dir_all(path).map_err(|e| DataGenError::filesystem(path, e))
}

/// Serializes `records` as a JSON array, 2-space indented, to `file_path`.
/// Any existing file is truncated.
///
/// # Errors
/// Errors when the file cannot be created, written or flushed
pub fn write_json(records: &[Record], file_path: &Path) -> Result<(), DataGenError> {
    debug!("Writing {} records to {}", records.len(), file_path.display());
    let file = File::create(file_path).map_err(|e| DataGenError::filesystem(file_path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)
        .map_err(|e| DataGenError::from_json(file_path, e))?;
    writer
        .flush()
        .map_err(|e| DataGenError::filesystem(file_path, e))
}

#[cfg(test)]
mod test {
    use super::*;

    const EXPECTED: &str = r#"[
  {
    "id": 1,
    "name": "Sample Data 1",
    "value": 100
  },
  {
    "id": 2,
    "name": "Sample Data 2",
    "value": 200
  }
]"#;

    #[test]
    fn test_default_output_path() {
        let writer = DataWriter::default();
        assert_eq!(writer.base_dir(), Path::new("/app/input_file"));
        assert_eq!(
            writer.output_path(),
            PathBuf::from("/app/input_file/generated_data.json")
        );
    }

    #[test]
    fn test_write_json_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        write_json(&build_records(), &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), EXPECTED);
    }

    #[test]
    fn test_write_json_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        fs::write(&path, "x".repeat(4096)).unwrap();
        write_json(&build_records(), &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), EXPECTED);
    }

    #[test]
    fn test_write_json_empty_batch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");
        write_json(&[], &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_write_json_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");
        let res = write_json(&build_records(), &path);
        assert!(matches!(res, Err(DataGenError::Filesystem { .. })));
        assert!(!path.exists());
    }

    #[test]
    fn test_ensure_output_directory_existing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ensure_output_directory(dir.path()).is_ok());
        assert!(ensure_output_directory(dir.path()).is_ok());
    }

    #[test]
    fn test_ensure_output_directory_blocked_by_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"").unwrap();
        match ensure_output_directory(&blocker.join("nested")) {
            Err(DataGenError::Filesystem { path, .. }) => {
                assert_eq!(path, blocker.join("nested"));
            }
            other => panic!("expected a filesystem error, got {:?}", other),
        }
    }
}
