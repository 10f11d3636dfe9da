#![forbid(unsafe_code)]

//! Per-slot visibility transitions.
//!
//! Each button slot carries a small state machine:
//! `Hidden ↔ Revealing ↔ Shown ↔ Concealing`. A reveal makes the view
//! visible at animation start and grows its metrics from zero to natural; a
//! conceal shrinks them and hides the view only on completion. Issuing the
//! opposite transition mid-flight reverses the animation preserving
//! progress, so the latest request always wins and a slot's geometry is
//! driven by exactly one interpolation at a time.

use std::time::Duration;

/// Fixed duration of a reveal or conceal.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(250);

/// Interpolation curve for slot transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Accelerate then decelerate. Symmetric: `apply(1 - t) == 1 - apply(t)`,
    /// which keeps reversal-with-inverted-progress continuous.
    #[default]
    EaseInOut,
}

impl Easing {
    /// Apply the curve to a progress value, clamped to `[0.0, 1.0]`.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let inv = -2.0 * t + 2.0;
                    1.0 - inv * inv * inv / 2.0
                }
            }
        }
    }
}

/// Phase of a slot's visibility lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlotPhase {
    #[default]
    Hidden,
    Revealing,
    Shown,
    Concealing,
}

impl SlotPhase {
    /// Whether the slot's view should be rendered at all.
    pub fn is_visible(self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn is_animating(self) -> bool {
        matches!(self, Self::Revealing | Self::Concealing)
    }
}

/// Height and margins of a slot's view, in fractional cells.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SlotMetrics {
    pub height: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
}

impl SlotMetrics {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(height: f32, margin_top: f32, margin_bottom: f32) -> Self {
        Self {
            height,
            margin_top,
            margin_bottom,
        }
    }

    /// All components scaled by one factor, as during a transition.
    pub fn scaled(self, factor: f32) -> Self {
        let f = factor.clamp(0.0, 1.0);
        Self::new(self.height * f, self.margin_top * f, self.margin_bottom * f)
    }

    pub fn height_rows(self) -> u16 {
        self.height.round().max(0.0) as u16
    }

    pub fn margin_top_rows(self) -> u16 {
        self.margin_top.round().max(0.0) as u16
    }

    pub fn margin_bottom_rows(self) -> u16 {
        self.margin_bottom.round().max(0.0) as u16
    }

    /// Rows the slot occupies in a vertical bar.
    pub fn total_rows(self) -> u16 {
        self.height_rows() + self.margin_top_rows() + self.margin_bottom_rows()
    }
}

/// The visibility state machine of one button slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotTransition {
    phase: SlotPhase,
    progress: f32,
    duration: Duration,
    easing: Easing,
}

impl Default for SlotTransition {
    fn default() -> Self {
        Self::hidden()
    }
}

impl SlotTransition {
    /// A slot that starts hidden.
    pub fn hidden() -> Self {
        Self {
            phase: SlotPhase::Hidden,
            progress: 0.0,
            duration: TRANSITION_DURATION,
            easing: Easing::default(),
        }
    }

    /// A slot that starts fully shown.
    pub fn shown() -> Self {
        Self {
            phase: SlotPhase::Shown,
            progress: 1.0,
            ..Self::hidden()
        }
    }

    pub fn phase(&self) -> SlotPhase {
        self.phase
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_visible(&self) -> bool {
        self.phase.is_visible()
    }

    pub fn is_animating(&self) -> bool {
        self.phase.is_animating()
    }

    /// The state the slot is heading toward (or already in).
    pub fn target_present(&self) -> bool {
        matches!(self.phase, SlotPhase::Revealing | SlotPhase::Shown)
    }

    /// Start (or continue) animating toward Present.
    ///
    /// Reverses an in-flight conceal, preserving progress.
    pub fn reveal(&mut self) {
        match self.phase {
            SlotPhase::Hidden => {
                self.phase = SlotPhase::Revealing;
                self.progress = 0.0;
            }
            SlotPhase::Concealing => {
                self.phase = SlotPhase::Revealing;
                self.progress = 1.0 - self.progress;
            }
            SlotPhase::Revealing | SlotPhase::Shown => {}
        }
    }

    /// Start (or continue) animating toward Absent.
    ///
    /// Reverses an in-flight reveal, preserving progress.
    pub fn conceal(&mut self) {
        match self.phase {
            SlotPhase::Shown => {
                self.phase = SlotPhase::Concealing;
                self.progress = 0.0;
            }
            SlotPhase::Revealing => {
                self.phase = SlotPhase::Concealing;
                self.progress = 1.0 - self.progress;
            }
            SlotPhase::Concealing | SlotPhase::Hidden => {}
        }
    }

    /// Jump to Shown without animating.
    pub fn force_shown(&mut self) {
        self.phase = SlotPhase::Shown;
        self.progress = 1.0;
    }

    /// Jump to Hidden without animating.
    pub fn force_hidden(&mut self) {
        self.phase = SlotPhase::Hidden;
        self.progress = 0.0;
    }

    /// Advance the animation. Returns `true` when a phase completed.
    pub fn tick(&mut self, delta: Duration) -> bool {
        if !self.phase.is_animating() {
            return false;
        }

        let duration = self.duration.as_secs_f32();
        if duration > 0.0 {
            self.progress += delta.as_secs_f32().max(0.0) / duration;
        } else {
            self.progress = 1.0;
        }
        self.progress = self.progress.min(1.0);

        if self.progress >= 1.0 {
            match self.phase {
                SlotPhase::Revealing => self.force_shown(),
                SlotPhase::Concealing => self.force_hidden(),
                SlotPhase::Hidden | SlotPhase::Shown => {}
            }
            return true;
        }
        false
    }

    /// The eased size factor in `[0.0, 1.0]`: 0 hidden, 1 fully shown.
    pub fn factor(&self) -> f32 {
        match self.phase {
            SlotPhase::Hidden => 0.0,
            SlotPhase::Shown => 1.0,
            SlotPhase::Revealing => self.easing.apply(self.progress),
            SlotPhase::Concealing => 1.0 - self.easing.apply(self.progress),
        }
    }
}
