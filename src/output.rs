//! Output of rendered pages and view summaries.
//!
//! Supports pretty-printing, JSON serialization, and writing HTML pages.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

use crate::analyzers::Summary;

/// Logs a summary using Rust's debug pretty-print format.
pub fn print_pretty(summary: &Summary) {
    debug!("{:#?}", summary);
}

/// Writes a summary as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(mut writer: W, summary: &Summary) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, summary)?;
    writeln!(writer)?;
    Ok(())
}

/// Prints a summary as pretty-printed JSON on stdout.
pub fn print_json(summary: &Summary) -> Result<()> {
    write_json(std::io::stdout().lock(), summary)
}

/// Writes an HTML page to `path`, replacing any previous page.
///
/// Creates missing parent directories.
pub fn write_page(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    fs::write(path, html).with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), bytes = html.len(), "Page written");

    Ok(())
}
