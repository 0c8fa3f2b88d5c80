use crate::{ExportError, Result};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Write a file so that `path` ends up either fully written or untouched.
///
/// The body is written to a temporary file in the destination directory and
/// renamed over `path` once flushed. An existing file at `path` is replaced.
pub fn write_atomically<F>(path: &Path, write_body: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let write_err = |source: std::io::Error| ExportError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tracing::debug!("Staging {} via {}", path.display(), tmp.path().display());

    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        write_body(&mut writer).map_err(|e| match e {
            ExportError::Io(source) => write_err(source),
            ExportError::Csv(e) if e.is_io_error() => write_err(csv_io_error(e)),
            ExportError::Json(e) if e.is_io() => write_err(std::io::Error::from(e)),
            other => other,
        })?;
        writer.flush().map_err(write_err)?;
    }

    tmp.as_file().sync_all().map_err(write_err)?;
    set_default_permissions(&tmp, path).map_err(write_err)?;

    tmp.persist(path).map_err(|e| write_err(e.error))?;

    Ok(())
}

fn csv_io_error(e: csv::Error) -> std::io::Error {
    match e.into_kind() {
        csv::ErrorKind::Io(source) => source,
        kind => std::io::Error::new(std::io::ErrorKind::Other, format!("{:?}", kind)),
    }
}

// Temporary files are created owner-only; give the result the permissions of
// the file it replaces, or the usual 0644 for a new file.
#[cfg(unix)]
fn set_default_permissions(tmp: &NamedTempFile, path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let permissions = match fs::metadata(path) {
        Ok(meta) => meta.permissions(),
        Err(_) => fs::Permissions::from_mode(0o644),
    };
    tmp.as_file().set_permissions(permissions)
}

#[cfg(not(unix))]
fn set_default_permissions(_tmp: &NamedTempFile, _path: &Path) -> std::io::Result<()> {
    Ok(())
}
