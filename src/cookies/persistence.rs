//! Cookie persistence - load and store cookie files, export JSON.
//!
//! Stores never truncate the cookie file in place: the new contents are
//! written to a temporary file in the same directory, synced, and renamed
//! over the original.

use crate::base::jarerror::JarError;
use crate::cookies::canonical_cookie::JarRecord;
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// JSON shape of an exported cookie.
#[derive(Serialize, Debug, Clone)]
struct JsonCookie<'a> {
    name: &'a str,
    value: &'a str,
    expires: i64,
    domain: &'a str,
    path: &'a str,
    secure: bool,
    httponly: bool,
}

/// Render active cookies as a JSON array terminated by a `null` element.
///
/// The sentinel keeps the array non-empty, so an empty jar renders as
/// `[null]`. Consumers rely on it.
pub fn write_json(records: &[JarRecord<'_>]) -> Result<String, JarError> {
    let mut out = String::from("[");

    for cookie in records.iter().filter_map(|r| r.active_cookie()) {
        let entry = JsonCookie {
            name: cookie.name,
            value: cookie.value,
            expires: cookie.expires,
            domain: cookie.domain,
            path: cookie.path,
            secure: cookie.secure,
            httponly: cookie.http_only,
        };
        out.push_str(&serde_json::to_string(&entry)?);
        out.push(',');
    }

    out.push_str("null]");
    Ok(out)
}

/// Read a whole cookie file. An empty file yields an empty buffer.
pub fn load(path: &Path) -> Result<Vec<u8>, JarError> {
    let buf = fs::read(path)?;
    tracing::debug!(path = %path.display(), bytes = buf.len(), "loaded cookie file");
    Ok(buf)
}

/// Atomically replace the cookie file at `path` with `contents`.
///
/// Existing file permissions carry over to the replacement. A symlinked
/// cookie file is replaced at its target, leaving the link in place.
pub fn commit(path: &Path, contents: &[u8]) -> Result<(), JarError> {
    let target = match fs::canonicalize(path) {
        Ok(target) => target,
        Err(e) if e.kind() == io::ErrorKind::NotFound => path.to_path_buf(),
        Err(e) => return Err(e.into()),
    };
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    if let Ok(meta) = fs::metadata(&target) {
        tmp.as_file().set_permissions(meta.permissions())?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(&target).map_err(|e| JarError::Io(e.error))?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "stored cookie file");
    Ok(())
}
