use std::io::Read;
use std::path::Path;

use crate::error::{Result, SipaError};
use crate::render::context::{UnresolvedPolicy, VariableBindings};
use crate::render::scanner::{scan, Segment};

/// A placeholder the `fail` policy refused to leave behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedName(pub String);

/// Replace every placeholder in `content` in a single left-to-right pass.
///
/// Substituted values are inserted verbatim and never rescanned.
pub fn substitute(
    content: &str,
    bindings: &VariableBindings,
    policy: UnresolvedPolicy,
) -> std::result::Result<String, UnresolvedName> {
    let mut output = String::with_capacity(content.len());

    for segment in scan(content) {
        match segment {
            Segment::Literal(text) => output.push_str(text),
            Segment::Placeholder(token) => match bindings.get(token.name) {
                Some(value) => output.push_str(value),
                None => match policy {
                    UnresolvedPolicy::Keep => output.push_str(token.raw),
                    UnresolvedPolicy::Remove => {}
                    UnresolvedPolicy::Fail => return Err(UnresolvedName(token.name.to_string())),
                },
            },
        }
    }

    Ok(output)
}

/// True when a file looks binary and substitution should leave it alone.
///
/// Only the first 8KB go through content_inspector (BOM-aware, null-byte scanning).
/// An unreadable file counts as text so that `read_text` reports the IO error.
pub fn is_binary_file(path: &Path) -> bool {
    let Ok(file) = std::fs::File::open(path) else {
        return false;
    };

    let mut buf = [0u8; 8192];
    let Ok(n) = file.take(8192).read(&mut buf) else {
        return false;
    };

    !content_inspector::inspect(&buf[..n]).is_text()
}

/// Read a file as UTF-8 text. `Ok(None)` means the bytes are not text.
pub fn read_text(path: &Path) -> Result<Option<String>> {
    if is_binary_file(path) {
        return Ok(None);
    }

    let bytes = std::fs::read(path).map_err(|e| SipaError::Io {
        context: format!("reading {}", path.display()),
        source: e,
    })?;

    Ok(String::from_utf8(bytes).ok())
}
