//! Error types for the bootstrap CLI.
//!
//! This module defines semantic error variants for each step of the bootstrap
//! sequence. Every variant is fatal: the run terminates with a diagnostic
//! identifying the step that failed, and nothing is retried.

use crate::digest::DigestAlgorithm;
use crate::download::DownloadError;
use crate::extract::ExtractionError;
use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur during a bootstrap run.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// The staging directory could not be removed or created.
    #[error("staging directory {path}: {reason}")]
    Staging {
        /// Path of the staging directory.
        path: Utf8PathBuf,
        /// Description of the underlying filesystem error.
        reason: String,
    },

    /// The archive download failed.
    #[error("download failed: {0}")]
    Download(#[from] DownloadError),

    /// The downloaded bytes did not match the pinned digest.
    #[error("{algorithm} digest mismatch: computed {computed}, expected {expected}")]
    DigestMismatch {
        /// The algorithm the source is pinned under.
        algorithm: DigestAlgorithm,
        /// Digest computed from the downloaded bytes.
        computed: String,
        /// Digest the source is pinned to.
        expected: String,
    },

    /// A configured digest string is not well-formed hex of the right length.
    #[error("invalid {algorithm} digest: {reason}")]
    InvalidDigest {
        /// The algorithm the digest was declared for.
        algorithm: DigestAlgorithm,
        /// Description of the validation failure.
        reason: String,
    },

    /// The archive could not be extracted.
    #[error("extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    /// The extracted tree does not contain the configured entry script.
    #[error("entry script not found at {path}")]
    EntryScriptMissing {
        /// Path where the entry script was expected.
        path: Utf8PathBuf,
    },

    /// The delegated tool could not be started.
    #[error("failed to invoke delegated tool: {reason}")]
    Delegation {
        /// Description of the spawn failure.
        reason: String,
    },

    /// The delegated tool was terminated by a signal and produced no exit code.
    #[error("delegated tool terminated by a signal")]
    Interrupted,

    /// The requested archive source name is not a built-in profile.
    #[error("unknown archive source {name}; available: {available}")]
    UnknownSource {
        /// The name that was requested.
        name: String,
        /// Comma-separated list of built-in source names.
        available: String,
    },

    /// A source file could not be read or parsed.
    #[error("invalid source file {path}: {reason}")]
    SourceFile {
        /// Path of the source file.
        path: Utf8PathBuf,
        /// Description of the read or parse failure.
        reason: String,
    },

    /// No usable Python interpreter was found.
    #[error("no python interpreter found (tried {tried}); pass one with --python")]
    InterpreterNotFound {
        /// Comma-separated list of candidate programs that were probed.
        tried: String,
    },

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using [`BootstrapError`].
pub type Result<T> = std::result::Result<T, BootstrapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_mismatch_reports_both_values() {
        let err = BootstrapError::DigestMismatch {
            algorithm: DigestAlgorithm::Sha256,
            computed: "aaaa".to_owned(),
            expected: "bbbb".to_owned(),
        };
        let msg = err.to_string();
        assert!(msg.contains("computed aaaa"));
        assert!(msg.contains("expected bbbb"));
        assert!(msg.contains("sha256"));
    }

    #[test]
    fn unknown_source_lists_alternatives() {
        let err = BootstrapError::UnknownSource {
            name: "virtualenv-1.0".to_owned(),
            available: "virtualenv-16.0.0, virtualenv-15.1.0".to_owned(),
        };
        let msg = err.to_string();
        assert!(msg.contains("virtualenv-1.0"));
        assert!(msg.contains("virtualenv-16.0.0"));
    }

    #[test]
    fn interpreter_not_found_suggests_flag() {
        let err = BootstrapError::InterpreterNotFound {
            tried: "python3, python".to_owned(),
        };
        assert!(err.to_string().contains("--python"));
    }

    #[test]
    fn entry_script_missing_names_path() {
        let err = BootstrapError::EntryScriptMissing {
            path: Utf8PathBuf::from(".virtualenv-pkg/virtualenv.py"),
        };
        assert!(err.to_string().contains("virtualenv.py"));
    }
}
