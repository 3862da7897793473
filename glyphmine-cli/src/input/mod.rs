//! Input handling: partition discovery and record loading

use glyphmine_core::{MineError, Record, RecordSource};
use std::fs;
use std::path::{Path, PathBuf};

/// List partition directories (`ac=*`) under a state directory, sorted by
/// name so downstream processing order is stable.
pub fn discover_partitions(state_dir: &Path) -> std::io::Result<Vec<String>> {
    let mut partitions = Vec::new();
    for entry in fs::read_dir(state_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with("ac=") {
            partitions.push(name);
        }
    }
    partitions.sort();
    Ok(partitions)
}

/// Record source reading one JSON object per line from each partition's
/// records file, extracting the configured text fields.
///
/// Null or missing fields become empty strings; a missing file or an
/// unparseable line fails the partition (and only that partition).
pub struct JsonlRecordSource {
    state_dir: PathBuf,
    records_file: String,
    text_fields: Vec<String>,
}

impl JsonlRecordSource {
    /// Create a source rooted at the state directory.
    pub fn new(state_dir: PathBuf, records_file: String, text_fields: Vec<String>) -> Self {
        Self {
            state_dir,
            records_file,
            text_fields,
        }
    }

    /// Path of a partition's records file.
    pub fn records_path(&self, partition: &str) -> PathBuf {
        self.state_dir.join(partition).join(&self.records_file)
    }
}

impl RecordSource for JsonlRecordSource {
    fn records(&self, partition: &str) -> glyphmine_core::Result<Vec<Record>> {
        let path = self.records_path(partition);
        if !path.exists() {
            return Err(MineError::MissingInput {
                partition: partition.to_string(),
                path: path.display().to_string(),
            });
        }

        let content = fs::read_to_string(&path)?;
        let mut records = Vec::new();
        for (idx, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let value: serde_json::Value =
                serde_json::from_str(line).map_err(|e| MineError::MalformedRecord {
                    path: path.display().to_string(),
                    line: idx + 1,
                    reason: e.to_string(),
                })?;
            let fields = self
                .text_fields
                .iter()
                .map(|field| {
                    value
                        .get(field)
                        .and_then(serde_json::Value::as_str)
                        .unwrap_or_default()
                        .to_string()
                })
                .collect();
            records.push(Record { fields });
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn source_for(dir: &TempDir) -> JsonlRecordSource {
        JsonlRecordSource::new(
            dir.path().to_path_buf(),
            "voters.jsonl".to_string(),
            vec!["voter_name_norm".to_string(), "relative_name_norm".to_string()],
        )
    }

    #[test]
    fn discovers_sorted_partition_dirs() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("ac=010")).unwrap();
        fs::create_dir(dir.path().join("ac=002")).unwrap();
        fs::create_dir(dir.path().join("other")).unwrap();
        fs::write(dir.path().join("ac=notadir"), "").unwrap();

        let partitions = discover_partitions(dir.path()).unwrap();
        assert_eq!(partitions, vec!["ac=002".to_string(), "ac=010".to_string()]);
    }

    #[test]
    fn reads_configured_fields() {
        let dir = TempDir::new().unwrap();
        let ac = dir.path().join("ac=001");
        fs::create_dir(&ac).unwrap();
        fs::write(
            ac.join("voters.jsonl"),
            concat!(
                "{\"voter_name_norm\": \"राम कुमार\", \"relative_name_norm\": \"श्याम\"}\n",
                "{\"voter_name_norm\": null, \"age\": 44}\n",
                "\n",
            ),
        )
        .unwrap();

        let records = source_for(&dir).records("ac=001").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].fields, vec!["राम कुमार", "श्याम"]);
        // Null and missing fields arrive as empty strings
        assert_eq!(records[1].fields, vec!["", ""]);
    }

    #[test]
    fn missing_file_is_partition_error() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("ac=001")).unwrap();
        let err = source_for(&dir).records("ac=001").unwrap_err();
        assert!(matches!(err, MineError::MissingInput { .. }));
        assert!(err.to_string().contains("ac=001"));
    }

    #[test]
    fn malformed_line_is_partition_error() {
        let dir = TempDir::new().unwrap();
        let ac = dir.path().join("ac=001");
        fs::create_dir(&ac).unwrap();
        fs::write(ac.join("voters.jsonl"), "{not json}\n").unwrap();
        let err = source_for(&dir).records("ac=001").unwrap_err();
        assert!(matches!(err, MineError::MalformedRecord { line: 1, .. }));
    }
}
