//! Transient staging directory lifecycle.
//!
//! The extracted tool lives in a fixed, hidden, relative directory for the
//! duration of a single run. The directory must not survive between runs:
//! leftovers from an aborted run are removed before starting, and the
//! directory is removed again on every exit path once created. Removal
//! failures during explicit cleanup are surfaced to the caller; the drop
//! backstop only covers panic and early-return paths and is best-effort.

use crate::error::{BootstrapError, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;

/// Fixed name of the staging directory, relative to the working directory.
pub const STAGING_DIR_NAME: &str = ".virtualenv-pkg";

/// The transient directory holding the extracted tool during one run.
#[derive(Debug)]
pub struct StagingDir {
    path: Utf8PathBuf,
    armed: bool,
}

impl StagingDir {
    /// Create a handle for the staging directory at `path`.
    ///
    /// Nothing is touched on disk until [`pre_clean`](Self::pre_clean) or
    /// [`create`](Self::create) is called.
    #[must_use]
    pub fn at(path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            path: path.into(),
            armed: false,
        }
    }

    /// Return the staging directory path.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Remove a leftover staging directory from a prior run.
    ///
    /// # Errors
    ///
    /// Returns [`BootstrapError::Staging`] if a leftover directory exists
    /// but cannot be removed.
    pub fn pre_clean(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_dir_all(&self.path).map_err(|e| self.staging_error(&e))?;
        }
        Ok(())
    }

    /// Create the staging directory and arm the drop backstop.
    ///
    /// # Errors
    ///
    /// Returns [`BootstrapError::Staging`] if the directory cannot be
    /// created.
    pub fn create(&mut self) -> Result<()> {
        fs::create_dir_all(&self.path).map_err(|e| self.staging_error(&e))?;
        self.armed = true;
        Ok(())
    }

    /// Remove the staging directory and disarm the drop backstop.
    ///
    /// # Errors
    ///
    /// Returns [`BootstrapError::Staging`] if the directory exists but
    /// cannot be removed.
    pub fn cleanup(&mut self) -> Result<()> {
        self.armed = false;
        if self.path.exists() {
            fs::remove_dir_all(&self.path).map_err(|e| self.staging_error(&e))?;
        }
        Ok(())
    }

    fn staging_error(&self, source: &std::io::Error) -> BootstrapError {
        BootstrapError::Staging {
            path: self.path.clone(),
            reason: source.to_string(),
        }
    }
}

impl Drop for StagingDir {
    fn drop(&mut self) {
        if self.armed {
            let _ = fs::remove_dir_all(&self.path);
        }
    }
}
