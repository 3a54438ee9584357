use std::io::{self, Write};
use std::path::Path;
use std::process::Command;

use tempfile::NamedTempFile;

use crate::error::ReportError;

/// Writes `contents` next to `path` under a temporary name, then renames it into
/// place. A failed write leaves any previous file untouched.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), ReportError> {
    let write_err = |source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut tmp = NamedTempFile::new_in(output_dir(path)).map_err(write_err)?;
    tmp.write_all(contents.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}

pub fn output_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Runs `typst compile source pdf`.
///
/// Returns `Ok(false)` when no `typst` executable is installed; the report itself is
/// already written at that point.
pub fn compile_pdf(program: &str, source: &Path, pdf: &Path) -> Result<bool, ReportError> {
    let status = match Command::new(program).arg("compile").arg(source).arg(pdf).status() {
        Ok(status) => status,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("{program} not found, skipping PDF compilation");
            return Ok(false);
        }
        Err(e) => {
            return Err(ReportError::Typst(format!(
                "failed to run {program}: {e}; {} was still written",
                source.display()
            )));
        }
    };
    if !status.success() {
        return Err(ReportError::Typst(format!(
            "{program} exited with {status}; {} was still written",
            source.display()
        )));
    }
    log::info!("compiled {}", pdf.display());
    Ok(true)
}
