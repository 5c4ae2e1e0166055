use super::*;
use crate::schedule::{phase::Phase, plan::compute_schedule};

fn doc_for(count: u32) -> MarkupDocument {
    let cfg = AnimationConfig {
        count,
        ..AnimationConfig::default()
    };
    let s = compute_schedule(&cfg).unwrap();
    emit(&cfg, &s, None)
}

#[test]
fn one_node_per_level_and_only_level_one_starts_visible() {
    let doc = doc_for(6);
    assert_eq!(doc.levels.len(), 6);
    for (idx, node) in doc.levels.iter().enumerate() {
        assert_eq!(node.level as usize, idx + 1);
        assert_eq!(node.initially_hidden, idx > 0);
    }
}

#[test]
fn clock_spans_one_cycle() {
    let doc = doc_for(6);
    assert_eq!(doc.clock.id, "clock");
    assert!((doc.clock.duration - 15.55).abs() < 1e-9);
}

#[test]
fn scale_and_rotate_share_timing() {
    let doc = doc_for(6);
    for node in &doc.levels {
        assert_eq!(node.scale.len(), node.rotate.len());
        for (s, r) in node.scale.iter().zip(&node.rotate) {
            assert_eq!(s.kind, TransformKind::Scale);
            assert_eq!(r.kind, TransformKind::Rotate);
            assert_eq!(s.phase, r.phase);
            assert_eq!(s.begin, r.begin);
            assert_eq!(s.duration, r.duration);
        }
    }
}

#[test]
fn directive_counts_follow_level_position() {
    let doc = doc_for(6);
    let first = &doc.levels[0];
    assert_eq!(first.opacity.len(), 2);
    assert_eq!(first.scale.len(), 2);

    let middle = &doc.levels[2];
    assert_eq!(middle.opacity.len(), 4);
    assert_eq!(middle.scale.len(), 4);

    let last = &doc.levels[5];
    assert_eq!(last.opacity.len(), 2);
    assert_eq!(last.scale.len(), 2);

    // 2 + 4*4 + 2 opacity, 2 + 4*4 + 2 scale, same for rotate
    assert_eq!(doc.directive_count(), 60);
}

#[test]
fn build_in_rotation_steps_by_increment() {
    let doc = doc_for(6);
    let r = doc.levels[2]
        .rotate
        .iter()
        .find(|d| d.phase == Phase::BuildIn)
        .unwrap();
    assert_eq!(r.from, 12.0);
    assert_eq!(r.to, 24.0);

    let s = doc.levels[2]
        .scale
        .iter()
        .find(|d| d.phase == Phase::BuildIn)
        .unwrap();
    assert_eq!(s.from, 0.75);
    assert_eq!(s.to, 0.5625);
}

#[test]
fn two_levels_emit_no_unwind_directives() {
    let doc = doc_for(2);
    for node in &doc.levels {
        assert!(node.opacity.iter().all(|d| d.phase != Phase::Unwind));
        assert!(node.scale.iter().all(|d| d.phase != Phase::Unwind));
        assert!(node.rotate.iter().all(|d| d.phase != Phase::Unwind));
    }
}

#[test]
fn identifiers_come_from_config() {
    let cfg = AnimationConfig {
        template_name: "spiral".to_string(),
        shape_href: "sq".to_string(),
        clock_id: "loop".to_string(),
        ..AnimationConfig::default()
    };
    let s = compute_schedule(&cfg).unwrap();
    let doc = emit(&cfg, &s, Some("hdr"));
    assert_eq!(doc.template_name, "spiral");
    assert_eq!(doc.shape_href, "sq");
    assert_eq!(doc.clock.id, "loop");
    assert_eq!(doc.header_comment.as_deref(), Some("hdr"));
}
