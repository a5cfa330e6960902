//! Content file loading.
//!
//! Content documents are JSON files, optionally gzip-compressed (detected by
//! a `.gz` suffix on disk, or by the gzip magic bytes on stdin).

use crate::document::node::ContentNode;
use crate::document::parser::parse_content;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Loads and parses a content file from the filesystem.
///
/// # Examples
///
/// ```no_run
/// use contentquill::file::loader::load_content_file;
///
/// let page = load_content_file("content/profile.json").unwrap();
/// ```
///
/// # Errors
///
/// Returns an error if the file cannot be read, cannot be decompressed, or
/// does not contain valid JSON.
pub fn load_content_file<P: AsRef<Path>>(path: P) -> Result<ContentNode> {
    let path = path.as_ref();

    let content = if is_gzipped(path) {
        read_gzipped_file(path)?
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read file {}", path.display()))?
    };

    parse_content(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Loads and parses content from standard input.
pub fn load_content_from_stdin() -> Result<ContentNode> {
    load_content_from_reader(std::io::stdin().lock()).context("Failed to read from stdin")
}

/// Reads `reader` to the end and parses it, plain or gzip-compressed.
pub fn load_content_from_reader<R: std::io::Read>(mut reader: R) -> Result<ContentNode> {
    let mut buffer = Vec::new();
    reader
        .read_to_end(&mut buffer)
        .context("Failed to read input")?;
    parse_bytes(buffer)
}

/// Parses raw bytes, decompressing them first if they start with the gzip
/// magic number (0x1f 0x8b).
pub fn parse_bytes(buffer: Vec<u8>) -> Result<ContentNode> {
    let content = if buffer.starts_with(&[0x1f, 0x8b]) {
        decompress_gzip_bytes(&buffer)?
    } else {
        String::from_utf8(buffer).context("Input is not valid UTF-8")?
    };
    parse_content(&content)
}

pub(crate) fn is_gzipped(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false)
}

/// Reads and decompresses a gzipped file.
fn read_gzipped_file(path: &Path) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let file = fs::File::open(path).context("Failed to open gzipped file")?;
    let mut decoder = GzDecoder::new(file);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped file - file may be corrupted")?;
    Ok(content)
}

fn decompress_gzip_bytes(bytes: &[u8]) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let mut decoder = GzDecoder::new(bytes);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped input")?;
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    #[test]
    fn test_is_gzipped() {
        assert!(is_gzipped(Path::new("profile.json.gz")));
        assert!(!is_gzipped(Path::new("profile.json")));
        assert!(!is_gzipped(Path::new("gz")));
    }

    #[test]
    fn test_parse_bytes_plain() {
        let node = parse_bytes(br#"{"a": 1}"#.to_vec()).unwrap();
        assert_eq!(node.get("a"), Some(&ContentNode::from(1)));
    }

    #[test]
    fn test_parse_bytes_gzip_magic() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(br#"{"hero": {"title": "A"}}"#).unwrap();
        let bytes = encoder.finish().unwrap();

        let node = parse_bytes(bytes).unwrap();
        assert!(node.get("hero").is_some());
    }

    #[test]
    fn test_load_from_reader_gzip() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(br#"{"missions": ["x"]}"#).unwrap();
        let bytes = encoder.finish().unwrap();

        let node = load_content_from_reader(std::io::Cursor::new(bytes)).unwrap();
        assert_eq!(node.get("missions").map(ContentNode::len), Some(1));
    }

    #[test]
    fn test_load_from_reader_invalid_json() {
        assert!(load_content_from_reader(&b"{broken"[..]).is_err());
    }

    #[test]
    fn test_parse_bytes_invalid_utf8() {
        assert!(parse_bytes(vec![0xff, 0xfe, 0x00]).is_err());
    }

    #[test]
    fn test_read_gzipped_file_corrupted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json.gz");
        fs::write(&path, b"not gzip at all").unwrap();
        assert!(load_content_file(&path).is_err());
    }
}
