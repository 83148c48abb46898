//! File I/O for WAV containers.

use crate::codec::{decode, WavData};
use crate::error::Result;
use std::io::Write;
use std::path::Path;

/// Read and decode a WAV file.
pub fn read_wav(path: impl AsRef<Path>) -> Result<WavData> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read input file");
    decode(&bytes)
}

/// Write `bytes` to `path` so that the file either appears complete or not at all.
///
/// Data goes to a temporary file in the destination directory, which is
/// renamed over `path` once fully written and synced. On error the temporary
/// file is removed and any existing file at `path` is left alone.
///
/// A replaced file keeps its permissions. A new file gets the mode a plain
/// `File::create` would give it (`0o666` less the umask on Unix).
pub fn write_wav_atomic(path: impl AsRef<Path>, bytes: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = temp_file_builder().tempfile_in(dir)?;
    if let Ok(existing) = std::fs::metadata(path) {
        tmp.as_file().set_permissions(existing.permissions())?;
    }
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote output file");
    Ok(())
}

// tempfile defaults to 0o600; open(2) applies the umask to the mode asked for here.
#[cfg(unix)]
fn temp_file_builder() -> tempfile::Builder<'static, 'static> {
    use std::os::unix::fs::PermissionsExt;

    let mut builder = tempfile::Builder::new();
    builder.permissions(std::fs::Permissions::from_mode(0o666));
    builder
}

#[cfg(not(unix))]
fn temp_file_builder() -> tempfile::Builder<'static, 'static> {
    tempfile::Builder::new()
}
