use std::path::Path;

use crate::{
    foundation::error::TriAnimResult,
    markup::{emit::emit, format::render, model::MarkupDocument},
    output::{document_digest, write_document},
    schedule::{
        config::AnimationConfig,
        plan::{Schedule, compute_schedule},
        summary::Summary,
    },
};

/// Result of one in-memory generation pass.
#[derive(Clone, Debug)]
pub struct Generated {
    pub schedule: Schedule,
    pub document: MarkupDocument,
    pub text: String,
}

/// Schedule, emit and serialize without touching the filesystem.
pub fn generate(cfg: &AnimationConfig, header_comment: Option<&str>) -> TriAnimResult<Generated> {
    let schedule = compute_schedule(cfg)?;
    let document = emit(cfg, &schedule, header_comment);
    let text = render(&document);
    Ok(Generated {
        schedule,
        document,
        text,
    })
}

/// Generate and write to `path`; the path is recorded in the header comment.
pub fn generate_to_file(cfg: &AnimationConfig, path: &Path) -> TriAnimResult<Summary> {
    let header = path.display().to_string();
    let generated = generate(cfg, Some(&header))?;
    write_document(path, &generated.text)?;
    Ok(Summary::new(
        &generated.schedule,
        path,
        document_digest(&generated.text),
    ))
}
