//! CLI argument definitions for the bootstrap binary.
//!
//! This module defines the command-line interface using clap. It is
//! separated from the main entrypoint to keep the binary small and focused
//! on orchestration.

use camino::Utf8PathBuf;
use clap::Parser;

/// Bootstrap a virtualenv from only a base Python interpreter.
#[derive(Parser, Debug)]
#[command(name = "virtualenv-bootstrap")]
#[command(version, about)]
#[command(long_about = concat!(
    "Bootstrap a virtualenv from only a base Python interpreter.\n\n",
    "Downloads a pinned virtualenv release archive, verifies its digest, ",
    "extracts it to a transient staging directory, runs its entry script ",
    "with the forwarded arguments, and removes the staging directory ",
    "afterwards. The exit code of the entry script becomes the exit code ",
    "of this program.\n\n",
    "Arguments after `--` are forwarded to the entry script verbatim and ",
    "in order.",
))]
#[command(after_help = concat!(
    "EXAMPLES:\n",
    "  Create a virtualenv in ./venv with the default pinned release:\n",
    "    $ virtualenv-bootstrap -- venv\n\n",
    "  Forward flags to the tool:\n",
    "    $ virtualenv-bootstrap -- --python python3.12 venv\n\n",
    "  Bootstrap an older pinned release:\n",
    "    $ virtualenv-bootstrap --source virtualenv-15.1.0 -- venv\n\n",
    "  Bootstrap a custom pinned archive:\n",
    "    $ virtualenv-bootstrap --source-file pinned.toml -- venv\n\n",
    "  Show the built-in pinned releases:\n",
    "    $ virtualenv-bootstrap --list-sources\n",
))]
pub struct Cli {
    /// Built-in archive source to bootstrap [default: virtualenv-16.0.0].
    #[arg(short, long, value_name = "NAME", conflicts_with = "source_file")]
    pub source: Option<String>,

    /// TOML file describing a custom archive source.
    #[arg(long, value_name = "FILE")]
    pub source_file: Option<Utf8PathBuf>,

    /// Python interpreter for the entry script [default: probe python3, then python].
    #[arg(long, value_name = "PATH")]
    pub python: Option<String>,

    /// List built-in archive sources and exit.
    #[arg(long)]
    pub list_sources: bool,

    /// Suppress status output (errors still shown).
    #[arg(short, long)]
    pub quiet: bool,

    /// Arguments forwarded verbatim to the delegated tool.
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub forwarded: Vec<String>,
}

impl Default for Cli {
    /// Creates a `Cli` instance with all flags disabled and no forwarded
    /// arguments, useful for tests and programmatic construction.
    fn default() -> Self {
        Self {
            source: None,
            source_file: None,
            python: None,
            list_sources: false,
            quiet: false,
            forwarded: Vec::new(),
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
