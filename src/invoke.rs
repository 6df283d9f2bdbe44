//! Delegated execution of the extracted tool.
//!
//! The bootstrapper does not interpret the tool's output or arguments: the
//! entry script is run as a child process with inherited standard streams,
//! forwarded arguments passed through verbatim and in order, and its exit
//! code propagated as the run's own.

use crate::error::{BootstrapError, Result};
use crate::interpreter::PythonInterpreter;
use camino::Utf8Path;
use std::process::Command;

/// Run the entry script at `entry_path` under `interpreter`.
///
/// Standard input, output, and error are inherited from the calling
/// process; nothing is captured or buffered.
///
/// # Errors
///
/// Returns [`BootstrapError::EntryScriptMissing`] when `entry_path` does
/// not exist, [`BootstrapError::Delegation`] when the child cannot be
/// spawned, and [`BootstrapError::Interrupted`] when the child was killed
/// by a signal and produced no exit code.
pub fn invoke_entry(
    interpreter: &PythonInterpreter,
    entry_path: &Utf8Path,
    forwarded: &[String],
) -> Result<i32> {
    if !entry_path.exists() {
        return Err(BootstrapError::EntryScriptMissing {
            path: entry_path.to_owned(),
        });
    }

    let status = Command::new(interpreter.as_str())
        .arg(entry_path.as_std_path())
        .args(forwarded)
        .status()
        .map_err(|e| BootstrapError::Delegation {
            reason: format!("failed to run {interpreter}: {e}"),
        })?;

    status.code().ok_or(BootstrapError::Interrupted)
}
