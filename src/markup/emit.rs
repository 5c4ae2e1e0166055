use crate::{
    markup::model::{
        LevelNode, LoopClock, MarkupDocument, OpacityDirective, TransformDirective, TransformKind,
    },
    schedule::{
        config::AnimationConfig,
        plan::{Schedule, Transition},
    },
};

fn transform_directive(t: &Transition, kind: TransformKind) -> TransformDirective {
    let (from, to) = match kind {
        TransformKind::Scale => (t.from.scale, t.to.scale),
        TransformKind::Rotate => (t.from.rotation_deg, t.to.rotation_deg),
    };
    TransformDirective {
        phase: t.phase,
        kind,
        begin: t.begin,
        duration: t.duration,
        from,
        to,
    }
}

/// Build the document tree for `schedule`.
///
/// `cfg` supplies placement and identifiers only; every time and value comes
/// from `schedule`.
#[tracing::instrument(skip_all, fields(levels = schedule.count()))]
pub fn emit(
    cfg: &AnimationConfig,
    schedule: &Schedule,
    header_comment: Option<&str>,
) -> MarkupDocument {
    let mut doc = MarkupDocument {
        header_comment: header_comment.map(str::to_owned),
        template_name: cfg.template_name.clone(),
        placement: cfg.placement,
        overall_scale: cfg.overall_scale,
        shape_href: cfg.shape_href.clone(),
        clock: LoopClock {
            id: cfg.clock_id.clone(),
            duration: schedule.total_duration(),
        },
        levels: Vec::with_capacity(schedule.levels().len()),
    };

    for state in schedule.levels() {
        let level = state.level;
        let mut node = LevelNode::new(level, schedule.initially_hidden(level));

        node.opacity
            .extend(schedule.visibility_cues(level).map(|c| OpacityDirective {
                phase: c.phase,
                begin: c.at,
                from: c.from_opacity,
                to: c.to_opacity,
            }));

        for t in schedule.transitions(level) {
            node.push_transform(transform_directive(&t, TransformKind::Scale));
            node.push_transform(transform_directive(&t, TransformKind::Rotate));
        }

        doc.push_level(node);
    }

    tracing::debug!(directives = doc.directive_count(), "emitted markup tree");
    doc
}

#[cfg(test)]
#[path = "../../tests/unit/markup/emit.rs"]
mod tests;
