//! Virtualenv bootstrap CLI entrypoint.
//!
//! Selects an archive source, resolves a Python interpreter, and runs the
//! bootstrap sequence, exiting with the delegated tool's exit code.

use clap::Parser;
use std::io::Write;
use virtualenv_bootstrap::cli::Cli;
use virtualenv_bootstrap::error::Result;
use virtualenv_bootstrap::interpreter::PythonInterpreter;
use virtualenv_bootstrap::output::{format_source_list, write_line};
use virtualenv_bootstrap::pipeline::{BootstrapContext, run_bootstrap};
use virtualenv_bootstrap::source::{
    ArchiveSource, DEFAULT_SOURCE, builtin_sources, find_builtin, load_source_file,
};
use virtualenv_bootstrap::staging::STAGING_DIR_NAME;

fn main() {
    let cli = Cli::parse();
    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();

    let exit_code = match run(&cli, &mut stdout) {
        Ok(code) => code,
        Err(err) => {
            write_line(&mut stderr, &err);
            1
        }
    };
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run(cli: &Cli, stdout: &mut dyn Write) -> Result<i32> {
    if cli.list_sources {
        write_line(stdout, format_source_list(&builtin_sources()));
        return Ok(0);
    }

    let source = resolve_source(cli)?;
    let interpreter = PythonInterpreter::resolve(cli.python.as_deref())?;
    let context = BootstrapContext {
        source: &source,
        interpreter: &interpreter,
        staging_path: camino::Utf8PathBuf::from(STAGING_DIR_NAME),
        quiet: cli.quiet,
    };

    run_bootstrap(&context, &cli.forwarded, stdout)
}

/// Determine the archive source from CLI flags, falling back to the
/// default built-in profile.
fn resolve_source(cli: &Cli) -> Result<ArchiveSource> {
    if let Some(path) = &cli.source_file {
        return load_source_file(path);
    }
    find_builtin(cli.source.as_deref().unwrap_or(DEFAULT_SOURCE))
}
