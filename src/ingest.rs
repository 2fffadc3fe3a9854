use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::chunker::Chunk;
use crate::format::Format;

/// A text file loaded from disk, ready to be chunked
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Path relative to the walked root, with forward slashes
    pub path: String,
    pub format: Format,
    /// Hex SHA-256 of the file contents
    pub content_hash: String,
    pub text: String,
}

/// One chunk of one file, as emitted by the CLI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkRecord {
    pub path: String,
    pub format: Format,
    pub content_hash: String,
    pub index: usize,
    pub start_byte: usize,
    pub end_byte: usize,
    pub text: String,
}

/// Check if a path should be skipped while walking
pub fn should_ignore(path: &Path) -> bool {
    let ignored_dirs = [
        ".git",
        ".svn",
        ".hg",
        "target",
        "node_modules",
        "_build",
        "deps",
        "dist",
        "__pycache__",
        ".venv",
        "venv",
    ];

    path.components().any(|component| {
        component
            .as_os_str()
            .to_str()
            .is_some_and(|name| ignored_dirs.contains(&name))
    })
}

/// Hex-encoded SHA-256 of some bytes
pub fn hash_bytes(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Load a single text file.
///
/// `fallback` is used when the extension does not map to a known format.
pub fn load_file(path: &Path, root: &Path, fallback: Option<Format>) -> Result<Option<SourceFile>> {
    let format = match Format::from_path(path).or(fallback) {
        Some(format) => format,
        None => return Ok(None),
    };

    let bytes = fs::read(path).context(format!("Failed to read file: {}", path.display()))?;
    let content_hash = hash_bytes(&bytes);
    let text = String::from_utf8(bytes)
        .context(format!("File is not valid UTF-8: {}", path.display()))?;

    let relative = path.strip_prefix(root).unwrap_or(path);
    let relative = if relative.as_os_str().is_empty() {
        path
    } else {
        relative
    };
    let path = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");

    Ok(Some(SourceFile {
        path,
        format,
        content_hash,
        text,
    }))
}

/// Collect chunkable files under `root`.
///
/// A single file is always loaded (as plaintext if its extension is not
/// recognised). When walking a directory, files with unknown extensions
/// and files that cannot be read as UTF-8 are skipped.
pub fn collect_files(root: &Path) -> Result<Vec<SourceFile>> {
    if root.is_file() {
        let parent = root.parent().unwrap_or(root);
        let file = load_file(root, parent, Some(Format::Plaintext))?;
        return Ok(file.into_iter().collect());
    }

    info!("Scanning {}", root.display());
    let mut files = Vec::new();
    let mut total_bytes = 0usize;

    for entry in WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !should_ignore(Path::new(e.file_name())))
    {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();
        if !entry.file_type().is_file() {
            continue;
        }

        match load_file(path, root, None) {
            Ok(Some(file)) => {
                debug!(path = %file.path, format = %file.format, "loaded file");
                total_bytes += file.text.len();
                files.push(file);
            }
            Ok(None) => continue,
            Err(e) => warn!("Skipping {}: {:#}", path.display(), e),
        }
    }

    info!("Found {} files ({} bytes total)", files.len(), total_bytes);
    Ok(files)
}

/// Attach file provenance to the chunks produced for it
pub fn records(file: &SourceFile, chunks: Vec<Chunk>) -> Vec<ChunkRecord> {
    chunks
        .into_iter()
        .enumerate()
        .map(|(index, chunk)| ChunkRecord {
            path: file.path.clone(),
            format: file.format,
            content_hash: file.content_hash.clone(),
            index,
            start_byte: chunk.start_byte,
            end_byte: chunk.end_byte,
            text: chunk.text,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunker::Chunker;
    use crate::options::ChunkOptions;
    use tempfile::TempDir;

    #[test]
    fn test_should_ignore() {
        assert!(should_ignore(Path::new("target/debug/foo")));
        assert!(should_ignore(Path::new("node_modules/package/index.js")));
        assert!(should_ignore(Path::new(".git/config")));
        assert!(!should_ignore(Path::new("src/main.rs")));
        assert!(!should_ignore(Path::new("docs/targets.md")));
    }

    #[test]
    fn test_hash_bytes() {
        assert_eq!(
            hash_bytes(b"hello"),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn test_collect_files_walks_and_detects_formats() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::create_dir_all(dir.path().join("target")).unwrap();
        fs::write(dir.path().join("README.md"), "# Hi\n\nThere").unwrap();
        fs::write(dir.path().join("src/lib.rs"), "pub fn a() {}\n").unwrap();
        fs::write(dir.path().join("target/out.rs"), "fn skipped() {}").unwrap();
        fs::write(dir.path().join("image.bin"), [0u8, 159, 146, 150]).unwrap();

        let files = collect_files(dir.path()).unwrap();
        let paths: Vec<_> = files.iter().map(|f| f.path.as_str()).collect();

        assert_eq!(paths, vec!["README.md", "src/lib.rs"]);
        assert_eq!(files[0].format, Format::Markdown);
        assert_eq!(files[1].format, Format::Rust);
        assert_eq!(files[1].content_hash, hash_bytes(b"pub fn a() {}\n"));
    }

    #[test]
    fn test_single_file_defaults_to_plaintext() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("NOTES");
        fs::write(&path, "just some notes").unwrap();

        let files = collect_files(&path).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "NOTES");
        assert_eq!(files[0].format, Format::Plaintext);
    }

    #[test]
    fn test_invalid_utf8_file_is_skipped_when_walking() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("bad.txt"), [0xFFu8, 0xFE]).unwrap();
        fs::write(dir.path().join("good.txt"), "ok").unwrap();

        let files = collect_files(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "good.txt");
    }

    #[test]
    fn test_records_carry_provenance() {
        let file = SourceFile {
            path: "notes.txt".to_string(),
            format: Format::Plaintext,
            content_hash: hash_bytes(b"alpha beta gamma"),
            text: "alpha beta gamma".to_string(),
        };
        let chunker = Chunker::new(ChunkOptions::new(6, 0)).unwrap();
        let records = records(&file, chunker.chunk(&file.text));

        assert_eq!(records.len(), 3);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.index, i);
            assert_eq!(record.path, "notes.txt");
            assert_eq!(&file.text[record.start_byte..record.end_byte], record.text);
        }

        let json = serde_json::to_value(&records[0]).unwrap();
        assert_eq!(json["format"], "plaintext");
        assert_eq!(json["text"], "alpha");
    }
}
