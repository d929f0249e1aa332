use std::{io::Write as _, path::Path};

use crate::foundation::error::{ShowError, ShowResult};

/// Create the directories leading up to `path` if they do not exist yet.
pub fn ensure_parent_dir(path: &Path) -> ShowResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Write `contents` to `path` so that readers see either the old file or the
/// complete new one.
///
/// The bytes go to a temporary file next to `path`, which is then renamed
/// over it. On error the temporary file is removed and `path` is untouched.
pub fn write_atomic(path: &Path, contents: &[u8]) -> ShowResult<()> {
    ensure_parent_dir(path)?;
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::Builder::new()
        .prefix(".skyshow-")
        .suffix(".tmp")
        .tempfile_in(dir)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| ShowError::Io(e.error))?;
    Ok(())
}

/// Serialize `value` as JSON, pretty-printed with `indent` spaces or compact
/// when `indent` is `None`.
pub fn to_json_text<T: serde::Serialize>(value: &T, indent: Option<usize>) -> ShowResult<String> {
    let Some(width) = indent else {
        return Ok(serde_json::to_string(value)?);
    };

    let pad = vec![b' '; width];
    let formatter = serde_json::ser::PrettyFormatter::with_indent(&pad);
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|e| ShowError::serde(format!("non-utf8 json output: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/show/export.rs"]
mod tests;
