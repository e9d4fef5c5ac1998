use crate::channel::protocol::RendererInfo;
use crate::foundation::core::Viewport;
use crate::foundation::error::{CometError, CometResult};
use crate::motion::ease::Ease;

/// Traversal speed/duration multiplier for one logical window spanning
/// several physical displays.
///
/// `num_displays` when `is_single_window`, else 1.
pub fn wide_window_factor(info: &RendererInfo) -> f64 {
    if info.is_single_window {
        f64::from(info.num_displays)
    } else {
        1.0
    }
}

/// Fraction of total traversal time spent before the composite's leading
/// edge reaches the viewport's left boundary.
///
/// Strictly in `(0, 1)` for positive widths; approaches 1 as the
/// composite width approaches 0.
pub fn duration_ratio(composite_width: f64, factor: f64, viewport_width: f64) -> f64 {
    1.0 / (1.0 + composite_width * factor / viewport_width)
}

/// Phase of an active traversal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Leading edge between the right and left viewport edges.
    Entry,
    /// Leading edge past the left boundary, trailing edge still visible.
    Exit,
    /// Traversal complete; the composite is ready for destruction.
    Done,
}

/// Milestones crossed during one [`Trajectory::tick`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// The entry phase completed during this tick. Reported exactly once
    /// per trajectory, before any exit motion is sampled.
    pub boundary_reached: bool,
    /// The exit phase completed; the composite may be destroyed.
    pub finished: bool,
}

/// Two-phase horizontal trajectory of one composite.
///
/// Progress accrues only while running, so suspension keeps the position
/// continuous and a trajectory created suspended holds at its start until
/// resumed.
#[derive(Clone, Debug)]
pub struct Trajectory {
    viewport_width: f64,
    scaled_width: f64,
    entry_ms: f64,
    exit_ms: f64,
    progress_ms: f64,
    last_tick_ms: Option<f64>,
    suspended: bool,
    boundary_emitted: bool,
}

impl Trajectory {
    /// Start a trajectory for a composite of `composite_width`.
    ///
    /// The duration in effect is captured here; later configuration
    /// updates never affect a trajectory already started.
    pub fn start(
        composite_width: f64,
        viewport: Viewport,
        info: &RendererInfo,
        duration_per_display_ms: f64,
        suspended: bool,
    ) -> CometResult<Self> {
        if !composite_width.is_finite() || composite_width < 0.0 {
            return Err(CometError::validation(
                "composite_width must be finite and >= 0",
            ));
        }
        if !duration_per_display_ms.is_finite() || duration_per_display_ms <= 0.0 {
            return Err(CometError::validation(
                "duration_per_display_ms must be finite and > 0",
            ));
        }
        if info.num_displays == 0 {
            return Err(CometError::validation("num_displays must be >= 1"));
        }

        let factor = wide_window_factor(info);
        let ratio = duration_ratio(composite_width, factor, viewport.width_f64());
        let total_ms = duration_per_display_ms * factor;
        Ok(Self {
            viewport_width: viewport.width_f64(),
            scaled_width: composite_width * factor,
            entry_ms: total_ms * ratio,
            exit_ms: total_ms * (1.0 - ratio),
            progress_ms: 0.0,
            last_tick_ms: None,
            suspended,
            boundary_emitted: false,
        })
    }

    /// Suspend in place; progress stops accruing.
    pub fn suspend(&mut self) {
        self.suspended = true;
    }

    /// Resume from the suspended position; never restarts.
    ///
    /// The time base is dropped so the next tick re-establishes it without
    /// advancing; wall-clock time spent suspended never counts as
    /// traversal progress, even when no ticks arrived during suspension.
    pub fn resume(&mut self) {
        if self.suspended {
            self.suspended = false;
            self.last_tick_ms = None;
        }
    }

    /// Whether the trajectory is currently suspended.
    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        if self.progress_ms >= self.entry_ms + self.exit_ms {
            Phase::Done
        } else if self.progress_ms >= self.entry_ms {
            Phase::Exit
        } else {
            Phase::Entry
        }
    }

    /// Entry phase duration in milliseconds.
    pub fn entry_ms(&self) -> f64 {
        self.entry_ms
    }

    /// Exit phase duration in milliseconds.
    pub fn exit_ms(&self) -> f64 {
        self.exit_ms
    }

    /// Current horizontal position of the composite's leading edge.
    ///
    /// Entry runs linearly from the viewport width to 0; exit from 0 to
    /// minus the display-scaled composite width.
    pub fn x(&self) -> f64 {
        if self.progress_ms < self.entry_ms {
            let t = if self.entry_ms > 0.0 {
                self.progress_ms / self.entry_ms
            } else {
                1.0
            };
            self.viewport_width * (1.0 - Ease::Linear.apply(t))
        } else {
            let t = if self.exit_ms > 0.0 {
                (self.progress_ms - self.entry_ms) / self.exit_ms
            } else {
                1.0
            };
            -self.scaled_width * Ease::Linear.apply(t)
        }
    }

    /// Advance to `now_ms`. Progress accrues only while running; the
    /// first tick establishes the time base without advancing.
    pub fn tick(&mut self, now_ms: f64) -> TickOutcome {
        let dt = match self.last_tick_ms {
            Some(last) => (now_ms - last).max(0.0),
            None => 0.0,
        };
        self.last_tick_ms = Some(now_ms);
        if !self.suspended {
            self.progress_ms += dt;
        }

        let mut outcome = TickOutcome::default();
        if !self.boundary_emitted && self.progress_ms >= self.entry_ms {
            self.boundary_emitted = true;
            outcome.boundary_reached = true;
        }
        outcome.finished = self.progress_ms >= self.entry_ms + self.exit_ms;
        outcome
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/trajectory.rs"]
mod tests;
