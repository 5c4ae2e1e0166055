use crate::{foundation::core::Point, schedule::phase::Phase};

/// Duration of an opacity flip, in seconds.
pub const FLIP_DURATION: f64 = 0.01;

/// Which transform attribute an `<animateTransform>` drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformKind {
    Scale,
    Rotate,
}

impl TransformKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scale => "scale",
            Self::Rotate => "rotate",
        }
    }
}

/// `<animate attributeName="opacity">` flipping once at `begin`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct OpacityDirective {
    pub phase: Phase,
    pub begin: f64,
    pub from: f64,
    pub to: f64,
}

/// `<animateTransform>` interpolating `from -> to` over `duration`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TransformDirective {
    pub phase: Phase,
    pub kind: TransformKind,
    pub begin: f64,
    pub duration: f64,
    pub from: f64,
    pub to: f64,
}

/// Repeating animation that every other directive is timed against.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LoopClock {
    pub id: String,
    pub duration: f64,
}

/// `rotate group > scale group > use` subtree for one level.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LevelNode {
    pub level: u32,
    pub initially_hidden: bool,
    pub opacity: Vec<OpacityDirective>,
    pub scale: Vec<TransformDirective>,
    pub rotate: Vec<TransformDirective>,
}

impl LevelNode {
    pub fn new(level: u32, initially_hidden: bool) -> Self {
        Self {
            level,
            initially_hidden,
            opacity: Vec::new(),
            scale: Vec::new(),
            rotate: Vec::new(),
        }
    }

    pub fn use_id(&self) -> String {
        format!("n{}", self.level)
    }

    pub fn push_transform(&mut self, d: TransformDirective) {
        match d.kind {
            TransformKind::Scale => self.scale.push(d),
            TransformKind::Rotate => self.rotate.push(d),
        }
    }
}

/// Typed form of the emitted template, built front to back.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct MarkupDocument {
    /// Written as a template comment on the first line.
    pub header_comment: Option<String>,
    pub template_name: String,
    pub placement: Point,
    pub overall_scale: f64,
    pub shape_href: String,
    pub clock: LoopClock,
    pub levels: Vec<LevelNode>,
}

impl MarkupDocument {
    pub fn push_level(&mut self, node: LevelNode) {
        self.levels.push(node);
    }

    /// Total number of timed directives, clock excluded.
    pub fn directive_count(&self) -> usize {
        self.levels
            .iter()
            .map(|l| l.opacity.len() + l.scale.len() + l.rotate.len())
            .sum()
    }
}
