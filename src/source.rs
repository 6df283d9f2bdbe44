//! Archive source profiles and source-file loading.
//!
//! An [`ArchiveSource`] describes one pinned release of the packaging tool:
//! where to download it, the digest it must hash to, and where its entry
//! script sits inside the extracted tree. The built-in profiles mirror the
//! releases this bootstrapper has shipped against; a TOML source file can
//! select any other pinned archive without a code change.

use crate::digest::{DigestAlgorithm, ExpectedDigest};
use crate::error::{BootstrapError, Result};
use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;

/// Name of the built-in source used when none is requested.
pub const DEFAULT_SOURCE: &str = "virtualenv-16.0.0";

/// Entry script path used when a source file does not specify one.
const DEFAULT_ENTRY: &str = "virtualenv.py";

/// One pinned release archive of the packaging tool.
///
/// Immutable for the duration of a run; exactly one instance is selected per
/// run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveSource {
    /// Short name identifying this source in CLI output.
    pub name: String,
    /// URL of the gzip-compressed tar archive.
    pub url: String,
    /// Digest the downloaded bytes must hash to.
    pub digest: ExpectedDigest,
    /// Path of the tool's entry script, relative to the staging root.
    ///
    /// Archive layouts differ across releases (some place the entry script
    /// at the archive root, others inside a source subfolder), so this is
    /// per-source configuration rather than a constant.
    pub entry: Utf8PathBuf,
}

/// Return the built-in pinned sources, newest first.
///
/// # Examples
///
/// ```
/// use virtualenv_bootstrap::source::{builtin_sources, DEFAULT_SOURCE};
///
/// let sources = builtin_sources();
/// assert_eq!(sources[0].name, DEFAULT_SOURCE);
/// ```
#[must_use]
pub fn builtin_sources() -> Vec<ArchiveSource> {
    vec![
        ArchiveSource {
            name: "virtualenv-16.0.0".to_owned(),
            url: "https://files.pythonhosted.org/packages/33/bc/fa0b5347139cd9564f0d44ebd2b147ac97c36b2403943dbee8a25fd74012/virtualenv-16.0.0.tar.gz".to_owned(),
            digest: ExpectedDigest::new(
                DigestAlgorithm::Sha256,
                "ca07b4c0b54e14a91af9f34d0919790b016923d157afda5efdde55c96718f752",
            )
            .expect("pinned digest is valid hex"),
            entry: Utf8PathBuf::from(DEFAULT_ENTRY),
        },
        ArchiveSource {
            name: "virtualenv-15.1.0".to_owned(),
            url: "https://pypi.python.org/packages/d4/0c/9840c08189e030873387a73b90ada981885010dd9aea134d6de30cd24cb8/virtualenv-15.1.0.tar.gz".to_owned(),
            digest: ExpectedDigest::new(
                DigestAlgorithm::Md5,
                "44e19f4134906fe2d75124427dc9b716",
            )
            .expect("pinned digest is valid hex"),
            entry: Utf8PathBuf::from(DEFAULT_ENTRY),
        },
    ]
}

/// Look up a built-in source by name.
///
/// # Errors
///
/// Returns [`BootstrapError::UnknownSource`] listing the available names
/// when `name` does not match any built-in profile.
pub fn find_builtin(name: &str) -> Result<ArchiveSource> {
    let sources = builtin_sources();
    sources
        .iter()
        .find(|source| source.name == name)
        .cloned()
        .ok_or_else(|| BootstrapError::UnknownSource {
            name: name.to_owned(),
            available: sources
                .iter()
                .map(|source| source.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })
}

/// On-disk schema of a TOML source file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SourceFile {
    url: String,
    digest: String,
    algorithm: DigestAlgorithm,
    entry: Option<String>,
}

/// Load an [`ArchiveSource`] from a TOML source file.
///
/// The file carries `url`, `digest`, `algorithm` (`"md5"` or `"sha256"`) and
/// an optional `entry` path; the source name is derived from the file stem.
///
/// # Errors
///
/// Returns [`BootstrapError::SourceFile`] if the file cannot be read or does
/// not parse, and [`BootstrapError::InvalidDigest`] if the digest string is
/// malformed for the declared algorithm.
pub fn load_source_file(path: &Utf8Path) -> Result<ArchiveSource> {
    let contents = std::fs::read_to_string(path).map_err(|e| BootstrapError::SourceFile {
        path: path.to_owned(),
        reason: e.to_string(),
    })?;
    let file: SourceFile = toml::from_str(&contents).map_err(|e| BootstrapError::SourceFile {
        path: path.to_owned(),
        reason: e.to_string(),
    })?;

    let digest = ExpectedDigest::new(file.algorithm, &file.digest)?;
    let name = path.file_stem().unwrap_or("custom").to_owned();

    Ok(ArchiveSource {
        name,
        url: file.url,
        digest,
        entry: Utf8PathBuf::from(file.entry.as_deref().unwrap_or(DEFAULT_ENTRY)),
    })
}
