use approx::assert_abs_diff_eq;

use super::*;

const EPS: f64 = 1e-9;

fn cfg(count: u32) -> AnimationConfig {
    AnimationConfig {
        count,
        ..AnimationConfig::default()
    }
}

fn sched(count: u32) -> Schedule {
    compute_schedule(&cfg(count)).unwrap()
}

#[test]
fn default_cycle_is_15_55_seconds() {
    let s = sched(6);
    let [p1, p2, p3, p4] = *s.phases();
    assert_abs_diff_eq!(p1.duration, 4.35, epsilon = EPS);
    assert_abs_diff_eq!(p2.duration, 4.0, epsilon = EPS);
    assert_abs_diff_eq!(p3.duration, 4.0, epsilon = EPS);
    assert_abs_diff_eq!(p4.duration, 3.2, epsilon = EPS);
    assert_abs_diff_eq!(s.total_duration(), 15.55, epsilon = EPS);
    assert_eq!(format!("{:.2}", s.total_duration()), "15.55");
}

#[test]
fn phases_are_contiguous_and_sum_to_total() {
    for count in 2..=9 {
        let s = sched(count);
        let phases = s.phases();
        assert_eq!(phases[0].start, 0.0);
        for w in phases.windows(2) {
            assert_eq!(w[1].start, w[0].end());
            assert!(w[1].start >= w[0].start);
        }
        let sum: f64 = phases.iter().map(|p| p.duration).sum();
        assert_abs_diff_eq!(s.total_duration(), sum, epsilon = EPS);
        assert_eq!(s.total_duration(), phases[3].end());
    }
}

#[test]
fn phase_order_matches_numbers() {
    let s = sched(4);
    for (idx, phase) in Phase::ALL.into_iter().enumerate() {
        assert_eq!(s.phase(phase).phase, phase);
        assert_eq!(usize::from(phase.number()), idx + 1);
    }
}

#[test]
fn level_one_is_identity_and_levels_are_geometric() {
    let s = sched(6);
    let l1 = s.level(1).unwrap();
    assert_eq!(l1.rotation_deg, 0.0);
    assert_eq!(l1.scale, 1.0);

    for l in s.levels() {
        let k = f64::from(l.level - 1);
        assert_abs_diff_eq!(l.rotation_deg, 12.0 * k, epsilon = EPS);
        assert_abs_diff_eq!(l.scale, 0.75f64.powf(k), epsilon = EPS);
    }
    assert!(s.level(0).is_none());
    assert!(s.level(7).is_none());
}

#[test]
fn two_levels_have_an_empty_unwind() {
    let s = sched(2);
    assert_eq!(s.phase(Phase::Unwind).duration, 0.0);
    for level in 1..=2 {
        assert!(s.transition(Phase::Unwind, level).is_none());
        assert!(s.visibility(Phase::Unwind, level).is_none());
    }
}

#[test]
fn peel_out_begins_mirror_peel_in_ends() {
    let s = sched(6);
    let p2_start = s.phase(Phase::PeelIn).start;
    let p3_start = s.phase(Phase::PeelOut).start;
    let n = s.count();

    let p2_end_offsets: Vec<f64> = (1..n)
        .map(|i| {
            let t = s.transition(Phase::PeelIn, i).unwrap();
            t.begin + t.duration - p2_start
        })
        .collect();
    let p3_begin_offsets: Vec<f64> = (1..n)
        .rev()
        .map(|i| s.transition(Phase::PeelOut, i).unwrap().begin - p3_start)
        .collect();

    // Peel-out step k starts where peel-in step k ended, shifted back one step.
    for (end, begin) in p2_end_offsets.iter().zip(&p3_begin_offsets) {
        assert_abs_diff_eq!(*end - s.base_duration(), *begin, epsilon = EPS);
    }
}

#[test]
fn peel_out_values_invert_peel_in() {
    let s = sched(5);
    for i in 1..s.count() {
        let a = s.transition(Phase::PeelIn, i).unwrap();
        let b = s.transition(Phase::PeelOut, i).unwrap();
        assert_eq!(a.from, b.to);
        assert_eq!(a.to, b.from);
    }
}

#[test]
fn unwind_values_reverse_build_in_for_shared_levels() {
    let s = sched(6);
    for i in 2..s.count() {
        let p1 = s.transition(Phase::BuildIn, i).unwrap();
        let p4 = s.transition(Phase::Unwind, i).unwrap();
        assert_eq!(p1.from, p4.to);
        assert_eq!(p1.to, p4.from);
    }
}

#[test]
fn build_in_is_staggered_from_base_delay() {
    let s = sched(6);
    assert!(s.transition(Phase::BuildIn, 1).is_none());
    let t2 = s.transition(Phase::BuildIn, 2).unwrap();
    assert_abs_diff_eq!(t2.begin, 0.35, epsilon = EPS);
    let t6 = s.transition(Phase::BuildIn, 6).unwrap();
    assert_abs_diff_eq!(t6.begin, 0.35 + 0.8 * 4.0, epsilon = EPS);
    assert_abs_diff_eq!(
        t6.begin + t6.duration,
        s.phase(Phase::BuildIn).end(),
        epsilon = EPS
    );
}

#[test]
fn outermost_level_has_no_peel_steps() {
    let s = sched(6);
    assert!(s.transition(Phase::PeelIn, 6).is_none());
    assert!(s.transition(Phase::PeelOut, 6).is_none());
    assert!(s.visibility(Phase::PeelIn, 6).is_none());
    assert!(s.visibility(Phase::PeelOut, 6).is_none());
}

#[test]
fn outermost_level_unwinds_one_step_early() {
    let s = sched(6);
    let t = s.transition(Phase::Unwind, 6).unwrap();
    assert_abs_diff_eq!(t.begin, s.phase(Phase::Unwind).start - 0.8, epsilon = EPS);
    let cue = s.visibility(Phase::Unwind, 6).unwrap();
    assert_abs_diff_eq!(cue.at, s.phase(Phase::Unwind).start, epsilon = EPS);
    assert!(!cue.shows());
}

#[test]
fn last_unwind_hide_lands_on_cycle_end() {
    let s = sched(6);
    let cue = s.visibility(Phase::Unwind, 2).unwrap();
    assert_abs_diff_eq!(cue.at, s.total_duration(), epsilon = EPS);
}

#[test]
fn level_one_is_only_hidden_between_peel_in_and_peel_out() {
    let s = sched(6);
    assert!(!s.initially_hidden(1));
    let cues: Vec<_> = s.visibility_cues(1).collect();
    assert_eq!(cues.len(), 2);
    assert_eq!(cues[0].phase, Phase::PeelIn);
    assert!(!cues[0].shows());
    assert_eq!(cues[1].phase, Phase::PeelOut);
    assert!(cues[1].shows());

    for level in 2..=s.count() {
        assert!(s.initially_hidden(level));
        assert!(s.visibility(Phase::Unwind, level).is_some());
    }
}

#[test]
fn visibility_cue_times_follow_the_table() {
    let s = sched(6);
    let p2 = s.phase(Phase::PeelIn).start;
    let p3 = s.phase(Phase::PeelOut).start;
    let p4 = s.phase(Phase::Unwind).start;

    assert_abs_diff_eq!(
        s.visibility(Phase::BuildIn, 3).unwrap().at,
        0.35 + 0.8,
        epsilon = EPS
    );
    assert_abs_diff_eq!(
        s.visibility(Phase::PeelIn, 2).unwrap().at,
        p2 + 0.8 * 2.0,
        epsilon = EPS
    );
    assert_abs_diff_eq!(
        s.visibility(Phase::PeelOut, 2).unwrap().at,
        p3 + 0.8 * 3.0,
        epsilon = EPS
    );
    assert_abs_diff_eq!(
        s.visibility(Phase::Unwind, 3).unwrap().at,
        p4 + 0.8 * 3.0,
        epsilon = EPS
    );
}

#[test]
fn timeline_covers_every_level() {
    let s = sched(4);
    let tl = s.timeline();
    assert_eq!(tl.len(), 4);
    assert_eq!(tl[0].transitions.len(), 2);
    assert_eq!(tl[1].transitions.len(), 4);
    assert_eq!(tl[3].transitions.len(), 2);
}

#[test]
fn invalid_config_never_yields_a_schedule() {
    assert!(compute_schedule(&cfg(1)).is_err());
    assert!(
        compute_schedule(&AnimationConfig {
            base_duration: 0.0,
            ..AnimationConfig::default()
        })
        .is_err()
    );
}
