use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Local};
use rubli_client::ExportFile;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output;

#[derive(Debug, Serialize)]
struct ExportReceipt<'a> {
    path: &'a Path,
    bytes: usize,
    content_type: Option<&'a str>,
}

/// Where an export lands: `--output`, else the file name the server
/// advertised, else `{stem}_{timestamp}.{ext}` in the current directory.
#[must_use]
pub fn export_path(
    output: Option<&str>,
    advertised: Option<&str>,
    stem: &str,
    ext: &str,
    now: DateTime<Local>,
) -> PathBuf {
    if let Some(output) = output {
        return PathBuf::from(output);
    }
    // Only the final component of a server-supplied name is trusted.
    advertised
        .and_then(|name| Path::new(name).file_name())
        .map_or_else(
            || PathBuf::from(format!("{stem}_{}.{ext}", now.format("%Y%m%d_%H%M%S"))),
            PathBuf::from,
        )
}

/// Write an export to disk and report where it went.
pub fn save_export(
    file: &ExportFile,
    output: Option<&str>,
    stem: &str,
    ext: &str,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let path = export_path(output, file.file_name.as_deref(), stem, ext, Local::now());
    std::fs::write(&path, &file.bytes)
        .with_context(|| format!("failed to write export to {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = file.bytes.len(), "export written");

    let receipt = ExportReceipt {
        path: &path,
        bytes: file.bytes.len(),
        content_type: file.content_type.as_deref(),
    };
    if flags.format == crate::cli::OutputFormat::Table {
        output::note(
            &format!("wrote {} bytes to {}", receipt.bytes, path.display()),
            flags.format,
            flags.quiet,
        );
        Ok(())
    } else {
        output::output(&receipt, flags.format)
    }
}
