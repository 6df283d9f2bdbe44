//! Tarball extraction with root-segment stripping.
//!
//! Extracts a gzip-compressed tar archive so that the archive's single
//! top-level folder does not appear in the extracted tree: every member has
//! its first path segment removed before unpacking, keeping release version
//! numbers out of the staged paths. Member paths are validated before
//! extraction to prevent zip-slip attacks.

use camino::Utf8Path;
use flate2::read::GzDecoder;
use std::path::{Component, Path, PathBuf};

/// Errors arising from archive extraction.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    /// I/O error during extraction, including malformed archive data.
    #[error("extraction I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A member path attempts to traverse outside the staging directory.
    #[error("unsafe member path: {path}")]
    UnsafeMemberPath {
        /// The offending path from the archive member.
        path: String,
    },

    /// The archive produced no extracted entries.
    #[error("archive contains no extractable members")]
    EmptyArchive,
}

/// Extract `bytes` as a gzip-compressed tar archive into `dest`.
///
/// Each member's first path segment is stripped before unpacking; a member
/// whose stripped path is empty (the top-level folder entry itself, or a
/// member with no separator at all) is skipped. Returns the stripped paths
/// that were extracted.
///
/// # Errors
///
/// Returns [`ExtractionError::UnsafeMemberPath`] if any member is absolute
/// or contains a parent-directory component, [`ExtractionError::EmptyArchive`]
/// if no member survives stripping, and [`ExtractionError::Io`] on malformed
/// archive data or filesystem failures.
pub fn extract_archive(bytes: &[u8], dest: &Utf8Path) -> Result<Vec<String>, ExtractionError> {
    let mut archive = tar::Archive::new(GzDecoder::new(bytes));
    let mut extracted = Vec::new();

    for entry_result in archive.entries()? {
        let mut entry = entry_result?;
        let member_path = entry.path()?.into_owned();

        validate_member_path(&member_path)?;

        let Some(stripped) = strip_root_segment(&member_path) else {
            continue;
        };

        let dest_path = dest.as_std_path().join(&stripped);
        if let Some(parent) = dest_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        entry.unpack(&dest_path)?;
        extracted.push(stripped.to_string_lossy().into_owned());
    }

    if extracted.is_empty() {
        return Err(ExtractionError::EmptyArchive);
    }

    Ok(extracted)
}

/// Remove the first path segment of a member path.
///
/// Returns `None` when nothing remains, which marks the member as one that
/// produces no extracted entry.
fn strip_root_segment(path: &Path) -> Option<PathBuf> {
    let stripped: PathBuf = path.components().skip(1).collect();
    if stripped.as_os_str().is_empty() {
        None
    } else {
        Some(stripped)
    }
}

/// Validate that a member path cannot escape the staging directory via
/// `..` components or an absolute path.
fn validate_member_path(path: &Path) -> Result<(), ExtractionError> {
    if path.is_absolute() {
        return Err(ExtractionError::UnsafeMemberPath {
            path: path.display().to_string(),
        });
    }
    for component in path.components() {
        if matches!(component, Component::ParentDir) {
            return Err(ExtractionError::UnsafeMemberPath {
                path: path.display().to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use rstest::rstest;

    /// Build a gzip-compressed tar archive in memory. A path ending in `/`
    /// becomes a directory entry.
    fn archive_with(members: &[(&str, &[u8])]) -> Vec<u8> {
        let encoder = GzEncoder::new(Vec::new(), Compression::default());
        let mut builder = tar::Builder::new(encoder);

        for (path, contents) in members {
            let mut header = tar::Header::new_gnu();
            // Write the member name directly into the header rather than via
            // `append_data`/`set_path`, which rejects `..` on write and so
            // would prevent building the traversal fixtures below.
            let name = path.as_bytes();
            header.as_gnu_mut().expect("gnu header").name[..name.len()].copy_from_slice(name);
            if path.ends_with('/') {
                header.set_entry_type(tar::EntryType::Directory);
                header.set_size(0);
                header.set_mode(0o755);
                header.set_cksum();
                builder
                    .append(&header, std::io::empty())
                    .expect("append dir");
            } else {
                header.set_size(contents.len() as u64);
                header.set_mode(0o644);
                header.set_cksum();
                builder.append(&header, *contents).expect("append file");
            }
        }

        let encoder = builder.into_inner().expect("tar finish");
        encoder.finish().expect("gzip finish")
    }

    fn temp_dest() -> (tempfile::TempDir, Utf8PathBuf) {
        let dir = tempfile::tempdir().expect("temp dir");
        let dest = Utf8PathBuf::from_path_buf(dir.path().join("staged")).expect("utf-8 temp path");
        std::fs::create_dir_all(&dest).expect("create dest");
        (dir, dest)
    }

    #[test]
    fn strips_first_segment_from_every_member() {
        let bytes = archive_with(&[
            ("tool-1.0/", b""),
            ("tool-1.0/entry.py", b"print('hi')\n"),
            ("tool-1.0/lib/x", b"x"),
        ]);
        let (_dir, dest) = temp_dest();

        let extracted = extract_archive(&bytes, &dest).expect("extract");

        assert_eq!(extracted, vec!["entry.py".to_owned(), "lib/x".to_owned()]);
        assert!(dest.join("entry.py").exists());
        assert!(dest.join("lib/x").exists());
        assert!(!dest.join("tool-1.0").exists());
    }

    #[test]
    fn root_directory_entry_is_skipped() {
        let bytes = archive_with(&[("tool-1.0/", b""), ("tool-1.0/a", b"a")]);
        let (_dir, dest) = temp_dest();

        let extracted = extract_archive(&bytes, &dest).expect("extract");
        assert_eq!(extracted, vec!["a".to_owned()]);
    }

    #[test]
    fn member_without_separator_is_skipped() {
        let bytes = archive_with(&[("loose-file", b"x"), ("tool-1.0/kept", b"y")]);
        let (_dir, dest) = temp_dest();

        let extracted = extract_archive(&bytes, &dest).expect("extract");
        assert_eq!(extracted, vec!["kept".to_owned()]);
        assert!(!dest.join("loose-file").exists());
    }

    #[test]
    fn extracted_file_contents_survive() {
        let bytes = archive_with(&[("tool-1.0/entry.py", b"#!/usr/bin/env python\n")]);
        let (_dir, dest) = temp_dest();

        extract_archive(&bytes, &dest).expect("extract");
        let contents = std::fs::read(dest.join("entry.py")).expect("read extracted");
        assert_eq!(contents, b"#!/usr/bin/env python\n");
    }

    #[rstest]
    #[case::parent_dir("../escape")]
    #[case::nested_parent("tool-1.0/../../escape")]
    fn rejects_traversal_members(#[case] member: &str) {
        let bytes = archive_with(&[(member, b"evil")]);
        let (_dir, dest) = temp_dest();

        let result = extract_archive(&bytes, &dest);
        assert!(
            matches!(result, Err(ExtractionError::UnsafeMemberPath { .. })),
            "expected UnsafeMemberPath for {member}"
        );
    }

    #[test]
    fn rejects_absolute_member_path() {
        let path = Path::new("/etc/passwd");
        assert!(matches!(
            validate_member_path(path),
            Err(ExtractionError::UnsafeMemberPath { .. })
        ));
    }

    #[test]
    fn accepts_normal_member_paths() {
        assert!(validate_member_path(Path::new("tool-1.0/lib/x")).is_ok());
    }

    #[test]
    fn empty_archive_is_an_error() {
        let bytes = archive_with(&[("tool-1.0/", b"")]);
        let (_dir, dest) = temp_dest();

        assert!(matches!(
            extract_archive(&bytes, &dest),
            Err(ExtractionError::EmptyArchive)
        ));
    }

    #[test]
    fn truncated_archive_is_an_io_error() {
        let bytes = archive_with(&[("tool-1.0/a", b"a")]);
        let truncated = &bytes[..bytes.len() / 2];
        let (_dir, dest) = temp_dest();

        assert!(matches!(
            extract_archive(truncated, &dest),
            Err(ExtractionError::Io(_))
        ));
    }
}
