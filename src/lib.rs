//! trianim generates a looping, four-phase SVG animation of nested shapes and
//! wraps it in a Go `html/template` `define` block.
//!
//! # Pipeline overview
//!
//! 1. **Schedule**: `AnimationConfig -> Schedule` (level transforms, phase windows, cycle length)
//! 2. **Emit**: `Schedule -> MarkupDocument` (typed tree of timed directives)
//! 3. **Render**: `MarkupDocument -> String` (the template text)
//! 4. **Write**: text to disk, then a [`Summary`] for the console
//!
//! The phases are build-in, peel-in, peel-out (inverse of peel-in) and unwind
//! (inverse of build-in). Every directive begins relative to a repeating clock,
//! so the whole sequence restarts on its own.
//!
//! Generation is pure: the same config always yields byte-identical text.
#![forbid(unsafe_code)]

mod foundation;
mod markup;
mod output;
mod pipeline;
mod schedule;

pub use foundation::core::Point;
pub use foundation::error::{TriAnimError, TriAnimResult};
pub use markup::emit::emit;
pub use markup::format::render;
pub use markup::model::{
    FLIP_DURATION, LevelNode, LoopClock, MarkupDocument, OpacityDirective, TransformDirective,
    TransformKind,
};
pub use output::{DEFAULT_OUTPUT_PATH, document_digest, write_document};
pub use pipeline::{Generated, generate, generate_to_file};
pub use schedule::config::{AnimationConfig, MAX_COUNT};
pub use schedule::phase::{Phase, PhaseWindow};
pub use schedule::plan::{
    LevelState, LevelTimeline, Schedule, Transition, VisibilityCue, compute_schedule,
};
pub use schedule::summary::Summary;
