use crate::foundation::core::Rgba;
use crate::motion::ease::Ease;

/// Base decay time of one acknowledgement flash, in milliseconds.
pub const FLASH_DECAY_MS: f64 = 1000.0;

/// Decay factor applied to configuration acknowledgement flashes.
pub const ACK_DECAY_FACTOR: f64 = 0.75;

/// Focus/resize/startup acknowledgement (green).
pub const ACK_WINDOW: Rgba = Rgba::new(0, 255, 0, 0.3);
/// Duration reset to the host default (magenta).
pub const ACK_DURATION_RESET: Rgba = Rgba::new(255, 0, 255, 0.2);
/// Duration shortened (red).
pub const ACK_DURATION_SHORTER: Rgba = Rgba::new(255, 0, 0, 0.15);
/// Duration lengthened (blue).
pub const ACK_DURATION_LONGER: Rgba = Rgba::new(0, 0, 255, 0.15);
/// Duration unchanged but updated (white).
pub const ACK_DURATION_SAME: Rgba = Rgba::new(255, 255, 255, 0.15);
/// Pause acknowledgement (cyan).
pub const ACK_PAUSE: Rgba = Rgba::new(0, 255, 255, 0.15);
/// Resume acknowledgement (yellow).
pub const ACK_RESUME: Rgba = Rgba::new(255, 255, 0, 0.15);

/// One transient full-surface flash decaying to transparent.
#[derive(Clone, Copy, Debug)]
pub struct Flash {
    color: Rgba,
    started_ms: f64,
    duration_ms: f64,
    ease: Ease,
    chain: u32,
}

impl Flash {
    fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.started_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Current color; fully transparent once finished.
    pub fn color_at(&self, now_ms: f64) -> Rgba {
        self.color.faded(self.ease.apply(self.progress(now_ms)))
    }

    /// Whether the flash has fully decayed at `now_ms`.
    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }
}

/// Overlapping, independent acknowledgement flashes.
///
/// Flashes are non-queued and never cancel one another; each decays on its
/// own schedule.
#[derive(Debug, Default)]
pub struct Flasher {
    flashes: Vec<Flash>,
}

impl Flasher {
    /// Create a flasher with no active flashes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start one flash of `color` over `FLASH_DECAY_MS x decay_factor`.
    pub fn flash(&mut self, now_ms: f64, color: Rgba, decay_factor: f64) {
        self.push(now_ms, color, decay_factor, 0);
    }

    /// Initial-load acknowledgement: one green flash that chains exactly
    /// one identical flash when it finishes.
    pub fn startup(&mut self, now_ms: f64) {
        self.push(now_ms, ACK_WINDOW, 1.0, 1);
    }

    fn push(&mut self, now_ms: f64, color: Rgba, decay_factor: f64, chain: u32) {
        self.flashes.push(Flash {
            color,
            started_ms: now_ms,
            duration_ms: FLASH_DECAY_MS * decay_factor.max(0.0),
            ease: Ease::Linear,
            chain,
        });
    }

    /// Retire finished flashes, spawning any pending chained flash.
    pub fn tick(&mut self, now_ms: f64) {
        let mut chained = Vec::new();
        self.flashes.retain(|f| {
            if f.is_finished(now_ms) {
                if f.chain > 0 {
                    chained.push((f.color, f.duration_ms, f.chain - 1));
                }
                false
            } else {
                true
            }
        });
        for (color, duration_ms, chain) in chained {
            self.flashes.push(Flash {
                color,
                started_ms: now_ms,
                duration_ms,
                ease: Ease::Linear,
                chain,
            });
        }
    }

    /// Colors of active flashes at `now_ms`, in start order.
    pub fn overlay(&self, now_ms: f64) -> Vec<Rgba> {
        self.flashes.iter().map(|f| f.color_at(now_ms)).collect()
    }

    /// Number of active flashes.
    pub fn active_count(&self) -> usize {
        self.flashes.len()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/flash/flasher.rs"]
mod tests;
