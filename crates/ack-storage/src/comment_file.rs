//! JSON export file of review comments

use ack_core::comment::{CommentRecord, PendingUpdate};
use ack_core::error::{AckError, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Cached comment export on disk
#[derive(Debug, Clone)]
pub struct CommentFile {
    path: PathBuf,
}

impl CommentFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every record, in file order.
    ///
    /// A missing file, malformed JSON, or a record without `body` fails the
    /// whole load.
    pub fn load(&self) -> Result<Vec<CommentRecord>> {
        let file = fs::File::open(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AckError::FileNotFound(self.path.clone())
            } else {
                AckError::Io(e)
            }
        })?;

        let records: Vec<CommentRecord> = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| AckError::Serde(e).with_context(format!("Failed to parse {}", self.path.display())))?;

        debug!("Loaded {} comments from {:?}", records.len(), self.path);
        Ok(records)
    }

    /// Replace the bodies of the given comments and save the file.
    ///
    /// Works on the raw JSON so that fields review-ack does not model keep
    /// their order and absent fields stay absent. Returns how many records
    /// were changed. Ids missing from the file are ignored.
    pub fn write_back(&self, updates: &[PendingUpdate]) -> Result<usize> {
        // Same validation as a normal load before anything is rewritten.
        self.load()?;

        let contents = fs::read_to_string(&self.path)?;
        let mut values: Vec<Value> = serde_json::from_str(&contents)?;
        let bodies: HashMap<String, &str> = updates
            .iter()
            .map(|u| (u.id.key(), u.new_body.as_str()))
            .collect();

        let mut changed = 0;
        for value in values.iter_mut() {
            let Some(body) = value_key(value).and_then(|key| bodies.get(&key)) else {
                continue;
            };
            if let Some(object) = value.as_object_mut() {
                object.insert("body".to_string(), Value::String(body.to_string()));
                changed += 1;
            }
        }

        if changed > 0 {
            self.save(&values)?;
        }
        Ok(changed)
    }

    /// Write records atomically (temp file, then rename)
    fn save(&self, values: &[Value]) -> Result<()> {
        let temp_path = self.temp_path();

        let file = fs::File::create(&temp_path).map_err(|e| {
            AckError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to create temp file: {}", e),
            ))
        })?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, values)?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            AckError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to rename temp file: {}", e),
            ))
        })?;

        debug!("Saved {} comments to {:?}", values.len(), self.path);
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "comments.json".to_string());
        self.path.with_file_name(format!(".{}.tmp", name))
    }
}

/// Lookup key of a raw record, matching [`CommentId::key`](ack_core::types::CommentId::key)
fn value_key(value: &Value) -> Option<String> {
    match value.get("id")? {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}
