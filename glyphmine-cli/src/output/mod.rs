//! Artifact writing

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write a value as pretty-printed JSON with a trailing newline.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .with_context(|| format!("Failed to serialize {}", path.display()))?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_pretty_json_with_newline() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.json");
        write_json(&path, &serde_json::json!({"ok": true})).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"ok\": true"));
        assert!(content.ends_with('\n'));
    }

    #[test]
    fn missing_parent_dir_fails_with_context() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope").join("out.json");
        let err = write_json(&path, &serde_json::json!({})).unwrap_err();
        assert!(err.to_string().contains("Failed to create"));
    }
}
