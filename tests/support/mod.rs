//! Test support utilities for bootstrap behavioural tests.
//!
//! Provides an in-memory fixture archive builder and a stub downloader so
//! scenarios can exercise the full bootstrap sequence without network
//! access.

use camino::Utf8PathBuf;
use flate2::Compression;
use flate2::write::GzEncoder;
use virtualenv_bootstrap::download::{DownloadError, Downloader};

/// Build a gzip-compressed tar archive in memory. A path ending in `/`
/// becomes a directory entry.
pub fn fixture_archive(members: &[(&str, &[u8])]) -> Vec<u8> {
    let encoder = GzEncoder::new(Vec::new(), Compression::default());
    let mut builder = tar::Builder::new(encoder);

    for (path, contents) in members {
        let mut header = tar::Header::new_gnu();
        if path.ends_with('/') {
            header.set_entry_type(tar::EntryType::Directory);
            header.set_size(0);
            header.set_mode(0o755);
            header.set_cksum();
            builder
                .append_data(&mut header, *path, std::io::empty())
                .expect("append dir");
        } else {
            header.set_size(contents.len() as u64);
            header.set_mode(0o755);
            header.set_cksum();
            builder
                .append_data(&mut header, *path, *contents)
                .expect("append file");
        }
    }

    let encoder = builder.into_inner().expect("tar finish");
    encoder.finish().expect("gzip finish")
}

/// Downloader stub serving fixed bytes for every request.
pub struct FixtureDownloader {
    bytes: Vec<u8>,
}

impl FixtureDownloader {
    pub fn serving(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl Downloader for FixtureDownloader {
    fn fetch(&self, _url: &str) -> Result<Vec<u8>, DownloadError> {
        Ok(self.bytes.clone())
    }
}

/// Downloader stub that fails every request.
pub struct UnreachableDownloader;

impl Downloader for UnreachableDownloader {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, DownloadError> {
        Err(DownloadError::HttpError {
            url: url.to_owned(),
            reason: "connection refused".to_owned(),
        })
    }
}

/// Return a staging path inside `dir`, named like the conventional hidden
/// staging directory.
pub fn staging_path_in(dir: &tempfile::TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(dir.path().join(".virtualenv-pkg")).expect("utf-8 temp path")
}
