use crate::foundation::error::{TriAnimError, TriAnimResult};

pub use kurbo::Point;

/// Reject values that would leak NaN/inf into the emitted markup.
pub(crate) fn ensure_finite(name: &str, v: f64) -> TriAnimResult<()> {
    if !v.is_finite() {
        return Err(TriAnimError::invalid_config(format!(
            "{name} must be finite (got {v})"
        )));
    }
    Ok(())
}

/// Identifiers are written verbatim into `id="…"`, `href="#…"` and the
/// template `define`, so they are restricted to `[A-Za-z0-9_-]`.
pub(crate) fn ensure_ident(name: &str, v: &str) -> TriAnimResult<()> {
    if v.is_empty() {
        return Err(TriAnimError::invalid_config(format!(
            "{name} must not be empty"
        )));
    }
    if let Some(c) = v
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-'))
    {
        return Err(TriAnimError::invalid_config(format!(
            "{name} contains unsupported character {c:?}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
