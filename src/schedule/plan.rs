use crate::{
    foundation::error::TriAnimResult,
    schedule::{
        config::AnimationConfig,
        phase::{Phase, PhaseWindow},
    },
};

/// Resting transform of one nesting level.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LevelState {
    /// 1-based level index.
    pub level: u32,
    /// Cumulative rotation in degrees.
    pub rotation_deg: f64,
    /// Cumulative scale.
    pub scale: f64,
}

/// One timed move of a level from one resting transform to another.
///
/// Scale and rotation share this record; they differ only in which
/// [`LevelState`] component is interpolated.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Transition {
    pub phase: Phase,
    pub level: u32,
    pub begin: f64,
    pub duration: f64,
    pub from: LevelState,
    pub to: LevelState,
}

/// An instantaneous opacity flip.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct VisibilityCue {
    pub phase: Phase,
    pub level: u32,
    pub at: f64,
    pub from_opacity: f64,
    pub to_opacity: f64,
}

impl VisibilityCue {
    pub fn shows(&self) -> bool {
        self.to_opacity > self.from_opacity
    }
}

/// Everything one level does during a cycle.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LevelTimeline {
    pub level: LevelState,
    pub visibility: Vec<VisibilityCue>,
    pub transitions: Vec<Transition>,
}

/// Closed-form timing for one loop cycle.
///
/// All begin times are seconds from cycle start. The per-level formulas live
/// only in [`Schedule::transition`] and [`Schedule::visibility`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Schedule {
    count: u32,
    base_delay: f64,
    base_duration: f64,
    levels: Vec<LevelState>,
    phases: [PhaseWindow; 4],
    total_duration: f64,
}

/// Validate `cfg` and derive its levels and phase windows.
#[tracing::instrument(skip(cfg), fields(count = cfg.count))]
pub fn compute_schedule(cfg: &AnimationConfig) -> TriAnimResult<Schedule> {
    cfg.validate()?;

    let n = cfg.count;
    let steps = f64::from(n - 1);

    let mut levels = Vec::with_capacity(n as usize);
    let mut rotation_deg = 0.0;
    let mut scale = 1.0;
    for level in 1..=n {
        levels.push(LevelState {
            level,
            rotation_deg,
            scale,
        });
        rotation_deg += cfg.rotation_increment;
        scale *= cfg.scale_factor;
    }

    let durations = [
        cfg.base_delay + cfg.base_duration * steps,
        cfg.base_duration * steps,
        cfg.base_duration * steps,
        if n > 2 {
            cfg.base_duration * f64::from(n - 2)
        } else {
            0.0
        },
    ];

    let mut start = 0.0;
    let phases = Phase::ALL.map(|phase| {
        let w = PhaseWindow {
            phase,
            start,
            duration: durations[phase.index()],
        };
        start = w.end();
        w
    });
    let total_duration = phases[3].end();

    tracing::debug!(total_duration, "computed schedule");

    Ok(Schedule {
        count: n,
        base_delay: cfg.base_delay,
        base_duration: cfg.base_duration,
        levels,
        phases,
        total_duration,
    })
}

impl Schedule {
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn base_duration(&self) -> f64 {
        self.base_duration
    }

    /// Levels in order 1..=N.
    pub fn levels(&self) -> &[LevelState] {
        &self.levels
    }

    /// 1-based lookup.
    pub fn level(&self, level: u32) -> Option<LevelState> {
        let idx = usize::try_from(level.checked_sub(1)?).ok()?;
        self.levels.get(idx).copied()
    }

    pub fn phases(&self) -> &[PhaseWindow; 4] {
        &self.phases
    }

    pub fn phase(&self, phase: Phase) -> PhaseWindow {
        self.phases[phase.index()]
    }

    pub fn total_duration(&self) -> f64 {
        self.total_duration
    }

    /// Reverse-order step index used by peel-out and unwind: `(N-1) - level`.
    /// Negative for level N.
    fn reverse_step(&self, level: u32) -> f64 {
        (i64::from(self.count) - 1 - i64::from(level)) as f64
    }

    /// The transform move `level` makes during `phase`, if any.
    pub fn transition(&self, phase: Phase, level: u32) -> Option<Transition> {
        let n = self.count;
        if level == 0 || level > n {
            return None;
        }
        let i = f64::from(level);
        let (begin, from, to) = match phase {
            Phase::BuildIn if level > 1 => (
                self.base_delay + self.base_duration * (i - 2.0),
                level - 1,
                level,
            ),
            Phase::PeelIn if level < n => (
                self.phase(Phase::PeelIn).start + self.base_duration * (i - 1.0),
                level,
                level + 1,
            ),
            Phase::PeelOut if level < n => (
                self.phase(Phase::PeelOut).start + self.base_duration * self.reverse_step(level),
                level + 1,
                level,
            ),
            Phase::Unwind if level > 1 && !self.phase(Phase::Unwind).is_empty() => (
                self.phase(Phase::Unwind).start + self.base_duration * self.reverse_step(level),
                level,
                level - 1,
            ),
            _ => return None,
        };

        Some(Transition {
            phase,
            level,
            begin,
            duration: self.base_duration,
            from: self.level(from)?,
            to: self.level(to)?,
        })
    }

    /// The opacity flip `level` makes during `phase`, if any.
    pub fn visibility(&self, phase: Phase, level: u32) -> Option<VisibilityCue> {
        let n = self.count;
        if level == 0 || level > n {
            return None;
        }
        let i = f64::from(level);
        let (at, show) = match phase {
            Phase::BuildIn if level > 1 => (self.base_delay + self.base_duration * (i - 2.0), true),
            Phase::PeelIn if level < n => {
                let begin = self.phase(Phase::PeelIn).start + self.base_duration * (i - 1.0);
                (begin + self.base_duration, false)
            }
            Phase::PeelOut if level < n => (
                self.phase(Phase::PeelOut).start + self.base_duration * self.reverse_step(level),
                true,
            ),
            Phase::Unwind if level > 1 && !self.phase(Phase::Unwind).is_empty() => (
                self.phase(Phase::Unwind).start
                    + self.base_duration * (self.reverse_step(level) + 1.0),
                false,
            ),
            _ => return None,
        };

        let (from_opacity, to_opacity) = if show { (0.0, 1.0) } else { (1.0, 0.0) };
        Some(VisibilityCue {
            phase,
            level,
            at,
            from_opacity,
            to_opacity,
        })
    }

    pub fn transitions(&self, level: u32) -> impl Iterator<Item = Transition> + '_ {
        Phase::ALL
            .into_iter()
            .filter_map(move |p| self.transition(p, level))
    }

    pub fn visibility_cues(&self, level: u32) -> impl Iterator<Item = VisibilityCue> + '_ {
        Phase::ALL
            .into_iter()
            .filter_map(move |p| self.visibility(p, level))
    }

    /// Levels start hidden unless they are level 1.
    pub fn initially_hidden(&self, level: u32) -> bool {
        level > 1
    }

    /// Per-level cues and transitions, in level order.
    pub fn timeline(&self) -> Vec<LevelTimeline> {
        self.levels
            .iter()
            .map(|l| LevelTimeline {
                level: *l,
                visibility: self.visibility_cues(l.level).collect(),
                transitions: self.transitions(l.level).collect(),
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/plan.rs"]
mod tests;
