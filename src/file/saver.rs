//! Content file saving with atomic writes and optional backups.

use crate::config::Config;
use crate::document::node::ContentNode;
use crate::document::parser::to_json_string;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Saves a content document to a file.
///
/// The document is serialized with `config.indent_size` (0 = compact) and
/// written atomically: first to a temporary sibling file, then renamed over
/// the target, so the target is never left half-written. Paths ending in
/// `.gz` are gzip-compressed. When `config.create_backup` is set and the
/// target exists, it is first copied to `<name>.bak`.
///
/// # Examples
///
/// ```no_run
/// use contentquill::config::Config;
/// use contentquill::document::node::ContentNode;
/// use contentquill::file::saver::save_content_file;
///
/// let page = ContentNode::empty_object();
/// save_content_file("content/profile.json", &page, &Config::default()).unwrap();
/// ```
pub fn save_content_file<P: AsRef<Path>>(
    path: P,
    document: &ContentNode,
    config: &Config,
) -> Result<()> {
    let path = path.as_ref();
    let should_compress = path.to_string_lossy().ends_with(".gz");

    if config.create_backup && path.exists() {
        create_backup(path)?;
    }

    let mut json_str = to_json_string(document, config.indent_size)?;
    if config.indent_size > 0 {
        json_str.push('\n');
    }

    write_file_atomic(path, json_str.as_bytes(), should_compress)
}

/// Creates a backup of a file by copying it with a .bak extension.
fn create_backup(path: &Path) -> Result<()> {
    let mut backup_path = path.to_path_buf();
    let original_name = backup_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow::anyhow!("Invalid file name"))?;
    backup_path.set_file_name(format!("{}.bak", original_name));
    fs::copy(path, backup_path).context("Failed to create backup")?;
    Ok(())
}

/// Writes data to a temp file next to `path`, then renames it into place.
fn write_file_atomic(path: &Path, data: &[u8], compress: bool) -> Result<()> {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow::anyhow!("Invalid file name"))?;
    let temp_path = path.with_file_name(format!(".{}.tmp", file_name));

    if compress {
        let file = fs::File::create(&temp_path).context("Failed to create temp file")?;
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder
            .write_all(data)
            .context("Failed to write compressed data")?;
        encoder.finish().context("Failed to finish compression")?;
    } else {
        fs::write(&temp_path, data).context("Failed to write temp file")?;
    }

    fs::rename(&temp_path, path).context("Failed to rename temp file")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parser::parse_content;

    #[test]
    fn test_save_pretty_with_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.json");
        let doc = parse_content(r#"{"a": [1]}"#).unwrap();

        save_content_file(&path, &doc, &Config::default()).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "{\n  \"a\": [\n    1\n  ]\n}\n");
    }

    #[test]
    fn test_save_compact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.json");
        let doc = parse_content(r#"{"a": [1]}"#).unwrap();
        let config = Config {
            indent_size: 0,
            ..Config::default()
        };

        save_content_file(&path, &doc, &config).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"a":[1]}"#);
    }

    #[test]
    fn test_backup_keeps_previous_version() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.json");
        fs::write(&path, "{\"old\": true}").unwrap();
        let config = Config {
            create_backup: true,
            ..Config::default()
        };

        save_content_file(&path, &ContentNode::empty_object(), &config).unwrap();

        let backup = dir.path().join("page.json.bak");
        assert_eq!(fs::read_to_string(backup).unwrap(), "{\"old\": true}");
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}\n");
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.json");
        save_content_file(&path, &ContentNode::empty_object(), &Config::default()).unwrap();

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["page.json".to_string()]);
    }
}
