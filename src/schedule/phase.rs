/// The four phases of one loop cycle, in playback order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Levels 2..=N appear one after another, each growing from the previous level.
    BuildIn,
    /// Outer to inner: each level collapses onto the next and hides.
    PeelIn,
    /// Inner to outer: exact inverse of [`Phase::PeelIn`].
    PeelOut,
    /// Levels step back to their predecessor; inverse of [`Phase::BuildIn`].
    Unwind,
}

impl Phase {
    pub const ALL: [Phase; 4] = [Self::BuildIn, Self::PeelIn, Self::PeelOut, Self::Unwind];

    /// 1-based phase number.
    pub fn number(self) -> u8 {
        match self {
            Self::BuildIn => 1,
            Self::PeelIn => 2,
            Self::PeelOut => 3,
            Self::Unwind => 4,
        }
    }

    pub(crate) fn index(self) -> usize {
        usize::from(self.number() - 1)
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::BuildIn => "build-in (staggered inward)",
            Self::PeelIn => "peel-in (outer→inner, hide each)",
            Self::PeelOut => "peel-out (inner→outer, show each)",
            Self::Unwind => "unwind (stagger back to original)",
        }
    }
}

/// A contiguous `[start, start + duration)` slice of the cycle, in seconds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PhaseWindow {
    pub phase: Phase,
    pub start: f64,
    pub duration: f64,
}

impl PhaseWindow {
    pub fn end(self) -> f64 {
        self.start + self.duration
    }

    pub fn is_empty(self) -> bool {
        self.duration <= 0.0
    }
}
