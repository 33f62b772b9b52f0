//! One-shot, viewport-triggered reveal.
//!
//! A [`RevealTrigger`] starts in [`RevealPhase::Hidden`]. The first
//! intersecting observation moves it to [`RevealPhase::Revealing`]; once
//! `delay + duration` has elapsed it settles in [`RevealPhase::Visible`] and
//! stays there. Later observations, including scrolling out and back in,
//! change nothing. A block that is never observed stays hidden forever,
//! which is a valid outcome rather than an error.
//!
//! Time is passed in explicitly as seconds on any monotonic clock, so the
//! machine can be driven from `requestAnimationFrame` or from a test.

use crate::constants::REVEAL_DURATION_SEC;
use crate::style::{Ease, VisualStyle};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
    pub hidden: VisualStyle,
    pub visible: VisualStyle,
    pub delay_sec: f64,
    pub duration_sec: f64,
    pub ease: Ease,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            hidden: VisualStyle::HIDDEN,
            visible: VisualStyle::VISIBLE,
            delay_sec: 0.0,
            duration_sec: REVEAL_DURATION_SEC,
            ease: Ease::default(),
        }
    }
}

impl RevealConfig {
    pub fn with_delay(mut self, delay_sec: f64) -> Self {
        self.delay_sec = delay_sec;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealPhase {
    Hidden,
    Revealing { triggered_at: f64 },
    Visible,
}

#[derive(Clone, Debug)]
pub struct RevealTrigger {
    config: RevealConfig,
    phase: RevealPhase,
    // One-way latch, set on the first intersection and never cleared.
    revealed: bool,
    // Kept past `Visible` so followers can keep timing off the reveal.
    triggered_at: Option<f64>,
}

impl RevealTrigger {
    pub fn new(mut config: RevealConfig) -> Self {
        config.delay_sec = sanitize_seconds("delay", config.delay_sec);
        config.duration_sec = sanitize_seconds("duration", config.duration_sec);
        Self {
            config,
            phase: RevealPhase::Hidden,
            revealed: false,
            triggered_at: None,
        }
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    /// Phase as of the last `tick`. A running reveal only records `Visible`
    /// once it is ticked past its end; use [`Self::phase_at`] for the phase
    /// at an arbitrary time.
    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// Phase at `now_sec`, including a reveal that has finished but not yet
    /// been ticked.
    pub fn phase_at(&self, now_sec: f64) -> RevealPhase {
        match self.phase {
            RevealPhase::Revealing { triggered_at } if now_sec >= self.end_of(triggered_at) => {
                RevealPhase::Visible
            }
            phase => phase,
        }
    }

    pub fn has_been_revealed(&self) -> bool {
        self.revealed
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.phase, RevealPhase::Visible)
    }

    /// Feed one intersection observation.
    ///
    /// Returns `true` only for the observation that fired the reveal; the
    /// caller should stop observing the element at that point.
    pub fn on_intersection(&mut self, now_sec: f64, is_intersecting: bool) -> bool {
        if !is_intersecting || self.revealed {
            return false;
        }
        self.revealed = true;
        self.triggered_at = Some(now_sec);
        self.phase = RevealPhase::Revealing {
            triggered_at: now_sec,
        };
        true
    }

    /// Advance the phase and report the style to paint, if any.
    ///
    /// Yields `Some` on every frame of a running reveal and on the frame that
    /// lands on `Visible`; `None` once the block is steady.
    pub fn tick(&mut self, now_sec: f64) -> Option<VisualStyle> {
        match self.phase {
            RevealPhase::Hidden | RevealPhase::Visible => None,
            RevealPhase::Revealing { triggered_at } => {
                if now_sec >= self.end_of(triggered_at) {
                    self.phase = RevealPhase::Visible;
                    Some(self.config.visible)
                } else {
                    Some(self.sample(triggered_at, now_sec))
                }
            }
        }
    }

    /// Style at `now_sec` without advancing the phase.
    pub fn style_at(&self, now_sec: f64) -> VisualStyle {
        match self.phase {
            RevealPhase::Hidden => self.config.hidden,
            RevealPhase::Visible => self.config.visible,
            RevealPhase::Revealing { triggered_at } => self.sample(triggered_at, now_sec),
        }
    }

    /// Seconds since the block finished its own delay, or `None` while the
    /// block has not started moving yet.
    pub fn elapsed_since_start(&self, now_sec: f64) -> Option<f64> {
        let t = now_sec - self.triggered_at? - self.config.delay_sec;
        (t >= 0.0).then_some(t)
    }

    fn end_of(&self, triggered_at: f64) -> f64 {
        triggered_at + self.config.delay_sec + self.config.duration_sec
    }

    fn sample(&self, triggered_at: f64, now_sec: f64) -> VisualStyle {
        let local = now_sec - triggered_at - self.config.delay_sec;
        if local <= 0.0 {
            return self.config.hidden;
        }
        let t = if self.config.duration_sec > 0.0 {
            (local / self.config.duration_sec) as f32
        } else {
            1.0
        };
        VisualStyle::lerp(
            self.config.hidden,
            self.config.visible,
            self.config.ease.apply(t),
        )
    }
}

fn sanitize_seconds(field: &str, value: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        log::warn!("[reveal] {} {} is not a valid duration, using 0", field, value);
        0.0
    }
}
