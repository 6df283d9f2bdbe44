//! Python interpreter resolution.
//!
//! The extracted tool is a Python script, so a base interpreter is the one
//! external prerequisite of a bootstrap run. An explicit `--python` override
//! is accepted as-is; otherwise the conventional interpreter names are
//! probed on `PATH` in order.

use crate::error::{BootstrapError, Result};
use std::fmt;
use std::process::{Command, Output};

/// Interpreter programs probed, in order, when none is specified.
const INTERPRETER_CANDIDATES: [&str; 2] = ["python3", "python"];

/// Abstraction for running external commands.
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner {
    /// Runs a command with arguments and returns the captured output.
    ///
    /// # Errors
    ///
    /// Returns any I/O errors encountered while spawning the command.
    fn run(&self, program: &str, args: &[String]) -> std::io::Result<Output>;
}

/// Executes commands on the host system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[String]) -> std::io::Result<Output> {
        Command::new(program).args(args).output()
    }
}

/// The Python interpreter used to run the extracted tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PythonInterpreter(String);

impl PythonInterpreter {
    /// Use `program` without probing it.
    ///
    /// Callers are responsible for ensuring the program exists; a bad value
    /// surfaces later as a delegation error.
    #[must_use]
    pub fn explicit(program: impl Into<String>) -> Self {
        Self(program.into())
    }

    /// Resolve the interpreter to use for this run.
    ///
    /// An explicit override wins; otherwise the conventional candidates are
    /// probed on `PATH` in order.
    ///
    /// # Errors
    ///
    /// Returns [`BootstrapError::InterpreterNotFound`] when no override is
    /// given and no candidate responds.
    pub fn resolve(explicit: Option<&str>) -> Result<Self> {
        Self::resolve_with(explicit, &SystemCommandRunner)
    }

    fn resolve_with(explicit: Option<&str>, runner: &dyn CommandRunner) -> Result<Self> {
        if let Some(program) = explicit {
            return Ok(Self::explicit(program));
        }

        for candidate in INTERPRETER_CANDIDATES {
            if probe(runner, candidate) {
                log::debug!("resolved interpreter {candidate}");
                return Ok(Self(candidate.to_owned()));
            }
        }

        Err(BootstrapError::InterpreterNotFound {
            tried: INTERPRETER_CANDIDATES.join(", "),
        })
    }

    /// Return the interpreter program name or path.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PythonInterpreter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Check whether `program --version` runs successfully.
fn probe(runner: &dyn CommandRunner, program: &str) -> bool {
    runner
        .run(program, &["--version".to_owned()])
        .map(|output| output.status.success())
        .unwrap_or(false)
}
