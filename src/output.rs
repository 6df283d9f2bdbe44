//! Status-line and source-listing formatting.

use crate::source::ArchiveSource;
use std::io::Write;

/// Write a single line to `out`.
///
/// Write failures are ignored; status output must never abort a run.
pub fn write_line(out: &mut dyn Write, message: impl std::fmt::Display) {
    let _ = writeln!(out, "{message}");
}

/// Format the built-in source table for `--list-sources`.
///
/// # Examples
///
/// ```
/// use virtualenv_bootstrap::output::format_source_list;
/// use virtualenv_bootstrap::source::builtin_sources;
///
/// let listing = format_source_list(&builtin_sources());
/// assert!(listing.contains("virtualenv-16.0.0"));
/// assert!(listing.contains("sha256"));
/// ```
#[must_use]
pub fn format_source_list(sources: &[ArchiveSource]) -> String {
    let name_width = sources
        .iter()
        .map(|source| source.name.len())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(sources.len() + 1);
    lines.push("Built-in archive sources:".to_owned());
    for source in sources {
        lines.push(format!(
            "  {:name_width$}  {:6}  {}",
            source.name,
            source.digest.algorithm().to_string(),
            source.url,
        ));
    }
    lines.join("\n")
}
