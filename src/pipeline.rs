//! Bootstrap run orchestration.
//!
//! Implements the one public operation of the bootstrapper: pre-clean →
//! download → verify → extract → delegate → cleanup. Every step before
//! delegation fails fast with no retry; cleanup runs on every exit path
//! once the staging directory has been created, and a cleanup failure after
//! an otherwise successful run is itself surfaced as the run's error.

use crate::download::{Downloader, HttpDownloader};
use crate::error::Result;
use crate::extract::extract_archive;
use crate::interpreter::PythonInterpreter;
use crate::invoke::invoke_entry;
use crate::output::write_line;
use crate::source::ArchiveSource;
use crate::staging::StagingDir;
use camino::Utf8PathBuf;
use std::io::Write;

/// Configuration for one bootstrap run.
#[derive(Debug)]
pub struct BootstrapContext<'a> {
    /// The pinned archive to bootstrap from.
    pub source: &'a ArchiveSource,
    /// Interpreter used to run the extracted entry script.
    pub interpreter: &'a PythonInterpreter,
    /// Path of the staging directory for this run.
    pub staging_path: Utf8PathBuf,
    /// When true, suppress status lines.
    pub quiet: bool,
}

/// Run the bootstrap sequence with the production HTTP downloader.
///
/// Returns the delegated tool's exit code.
///
/// # Errors
///
/// Returns the first fatal error of the failing step; see
/// [`run_bootstrap_with`] for the step-by-step contract.
pub fn run_bootstrap(
    context: &BootstrapContext<'_>,
    forwarded: &[String],
    stdout: &mut dyn Write,
) -> Result<i32> {
    run_bootstrap_with(context, forwarded, &HttpDownloader, stdout)
}

/// Testable inner function with an injected downloader.
///
/// The production entry point [`run_bootstrap`] delegates here with the
/// real HTTP implementation; tests inject stubs.
///
/// # Errors
///
/// Fails fast on the first failing step: staging pre-clean, download,
/// digest verification, extraction, or delegation. Once the staging
/// directory exists it is removed before returning, whatever the outcome;
/// if delegation succeeded but removal fails, the removal error is
/// returned instead of the exit code.
pub fn run_bootstrap_with(
    context: &BootstrapContext<'_>,
    forwarded: &[String],
    downloader: &dyn Downloader,
    stdout: &mut dyn Write,
) -> Result<i32> {
    let mut staging = StagingDir::at(context.staging_path.clone());
    staging.pre_clean()?;

    let result = run_pipeline(context, forwarded, downloader, &mut staging, stdout);
    finish(result, &mut staging)
}

/// The core sequence: download → verify → extract → delegate.
fn run_pipeline(
    context: &BootstrapContext<'_>,
    forwarded: &[String],
    downloader: &dyn Downloader,
    staging: &mut StagingDir,
    stdout: &mut dyn Write,
) -> Result<i32> {
    if !context.quiet {
        write_line(stdout, format!("Downloading {}", context.source.url));
    }
    let bytes = downloader.fetch(&context.source.url)?;

    // Never touch the filesystem before the digest has been checked.
    context.source.digest.verify(&bytes)?;

    staging.create()?;
    let extracted = extract_archive(&bytes, staging.path())?;
    log::debug!("extracted {} members", extracted.len());

    if !context.quiet {
        write_line(stdout, "Done.");
    }

    let entry_path = staging.path().join(&context.source.entry);
    invoke_entry(context.interpreter, &entry_path, forwarded)
}

/// Combine the pipeline outcome with the unconditional cleanup.
///
/// A pipeline error wins over a cleanup error; the latter is only logged
/// then.
fn finish(result: Result<i32>, staging: &mut StagingDir) -> Result<i32> {
    match (result, staging.cleanup()) {
        (Ok(code), Ok(())) => Ok(code),
        (Ok(_), Err(cleanup_err)) => Err(cleanup_err),
        (Err(err), Ok(())) => Err(err),
        (Err(err), Err(cleanup_err)) => {
            log::warn!("cleanup failed after error: {cleanup_err}");
            Err(err)
        }
    }
}
