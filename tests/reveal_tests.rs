// Host-side tests for the one-shot reveal state machine.

use landing_core::constants::REVEAL_DURATION_SEC;
use landing_core::*;

fn trigger_with_delay(delay: f64) -> RevealTrigger {
    RevealTrigger::new(RevealConfig::default().with_delay(delay))
}

#[test]
fn starts_hidden_and_unrevealed() {
    let t = trigger_with_delay(0.0);
    assert_eq!(t.phase(), RevealPhase::Hidden);
    assert!(!t.has_been_revealed());
    assert!(!t.is_visible());
    assert_eq!(t.style_at(100.0), VisualStyle::HIDDEN);
}

#[test]
fn never_intersecting_stays_hidden_forever() {
    let mut t = trigger_with_delay(0.0);
    for i in 0..1000 {
        let now = i as f64 * 0.016;
        assert!(!t.on_intersection(now, false));
        assert_eq!(t.tick(now), None);
    }
    assert_eq!(t.phase(), RevealPhase::Hidden);
    assert!(!t.has_been_revealed());
}

#[test]
fn first_intersection_fires_once() {
    let mut t = trigger_with_delay(0.0);
    assert!(t.on_intersection(1.0, true));
    assert!(t.has_been_revealed());
    assert_eq!(t.phase(), RevealPhase::Revealing { triggered_at: 1.0 });

    // Repeated observations are no-ops and keep the original trigger time.
    assert!(!t.on_intersection(1.1, true));
    assert!(!t.on_intersection(1.2, false));
    assert!(!t.on_intersection(1.3, true));
    assert_eq!(t.phase(), RevealPhase::Revealing { triggered_at: 1.0 });
}

#[test]
fn revealing_settles_after_delay_plus_duration() {
    let mut t = trigger_with_delay(0.3);
    t.on_intersection(2.0, true);

    // Still inside the delay: painted hidden.
    assert_eq!(t.tick(2.2), Some(VisualStyle::HIDDEN));
    assert!(!t.is_visible());

    // Mid-animation: partially shown.
    let mid = t.tick(2.3 + REVEAL_DURATION_SEC / 2.0).expect("running reveal paints");
    assert!(mid.opacity > 0.0 && mid.opacity < 1.0);
    assert!(mid.offset.y > 0.0 && mid.offset.y < VisualStyle::HIDDEN.offset.y);

    // Landing frame paints the final style exactly once.
    assert_eq!(t.tick(3.0), Some(VisualStyle::VISIBLE));
    assert!(t.is_visible());
    assert_eq!(t.tick(10.0), None);
}

#[test]
fn visible_is_terminal() {
    let mut t = trigger_with_delay(0.0);
    t.on_intersection(0.0, true);
    t.tick(5.0);
    assert!(t.is_visible());

    // Scrolling out and back in changes nothing.
    assert!(!t.on_intersection(6.0, false));
    assert!(!t.on_intersection(7.0, true));
    assert_eq!(t.phase(), RevealPhase::Visible);
    assert_eq!(t.style_at(8.0), VisualStyle::VISIBLE);
    assert!(t.has_been_revealed());
}

#[test]
fn opacity_is_monotonic_while_revealing() {
    let t = {
        let mut t = trigger_with_delay(0.0);
        t.on_intersection(0.0, true);
        t
    };
    let mut prev = -1.0_f32;
    for i in 0..=50 {
        let s = t.style_at(i as f64 * 0.01);
        assert!(s.opacity >= prev, "opacity dropped at step {i}");
        prev = s.opacity;
    }
}

#[test]
fn invalid_delay_is_clamped_to_zero() {
    let t = trigger_with_delay(-1.0);
    assert_eq!(t.config().delay_sec, 0.0);
    let t = trigger_with_delay(f64::NAN);
    assert_eq!(t.config().delay_sec, 0.0);
}

#[test]
fn zero_duration_jumps_to_visible() {
    let mut t = RevealTrigger::new(RevealConfig {
        duration_sec: 0.0,
        ..RevealConfig::default()
    });
    t.on_intersection(1.0, true);
    assert_eq!(t.tick(1.0), Some(VisualStyle::VISIBLE));
    assert!(t.is_visible());
}

#[test]
fn elapsed_since_start_waits_for_delay() {
    let mut t = trigger_with_delay(0.5);
    assert_eq!(t.elapsed_since_start(3.0), None);
    t.on_intersection(1.0, true);
    assert_eq!(t.elapsed_since_start(1.2), None);
    let e = t.elapsed_since_start(1.75).expect("started");
    assert!((e - 0.25).abs() < 1e-9);
}

#[test]
fn ease_endpoints_and_clamping() {
    for ease in [Ease::Linear, Ease::OutQuad, Ease::OutCubic, Ease::InOutCubic] {
        assert!(ease.apply(0.0).abs() < 1e-6);
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-6);
        assert!(ease.apply(-3.0).abs() < 1e-6);
        assert!((ease.apply(7.0) - 1.0).abs() < 1e-6);
    }
    // Out-eases run ahead of linear in the first half.
    assert!(Ease::OutCubic.apply(0.25) > Ease::Linear.apply(0.25));
}

#[test]
fn style_css_is_well_formed() {
    let css = VisualStyle::HIDDEN.to_css();
    assert_eq!(
        css,
        "opacity:0.000;transform:translate(0.00px,20.00px) scale(1.000)"
    );
    let over = VisualStyle::new(1.4, glam::Vec2::ZERO, 1.0).to_css();
    assert!(over.starts_with("opacity:1.000;"));
}

#[test]
fn phase_at_reports_finished_reveal_before_tick() {
    let mut t = trigger_with_delay(0.2);
    assert_eq!(t.phase_at(50.0), RevealPhase::Hidden);

    t.on_intersection(0.0, true);
    assert_eq!(t.phase_at(0.1), RevealPhase::Revealing { triggered_at: 0.0 });
    // Never ticked: the stored phase lags, the sampled one does not.
    assert_eq!(t.phase(), RevealPhase::Revealing { triggered_at: 0.0 });
    assert_eq!(t.phase_at(100.0), RevealPhase::Visible);
    assert_eq!(t.style_at(100.0), VisualStyle::VISIBLE);

    t.tick(100.0);
    assert_eq!(t.phase(), RevealPhase::Visible);
    assert_eq!(t.phase_at(0.0), RevealPhase::Visible);
}

#[test]
fn elapsed_keeps_counting_after_visible() {
    let mut t = trigger_with_delay(0.2);
    t.on_intersection(1.0, true);
    t.tick(5.0);
    assert!(t.is_visible());
    let e = t.elapsed_since_start(5.0).expect("started");
    assert!((e - 3.8).abs() < 1e-9);
}
