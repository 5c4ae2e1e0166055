use std::path::Path;

use sha2::Digest as _;

use crate::foundation::error::{TriAnimError, TriAnimResult};

/// Default destination, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "web/templates/tri_anim.html.tmpl";

/// Write `text` to `path`, creating missing parent directories.
#[tracing::instrument(skip_all, fields(path = %path.display(), bytes = text.len()))]
pub fn write_document(path: &Path, text: &str) -> TriAnimResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| TriAnimError::file_write(path, e))?;
    }
    std::fs::write(path, text).map_err(|e| TriAnimError::file_write(path, e))?;
    tracing::info!("wrote template");
    Ok(())
}

/// Lowercase hex SHA-256 of `text`.
pub fn document_digest(text: &str) -> String {
    let digest = sha2::Sha256::digest(text.as_bytes());
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}

#[cfg(test)]
#[path = "../tests/unit/output.rs"]
mod tests;
