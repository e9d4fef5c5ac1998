use crate::{
    channel::protocol::{Comment, RendererInfo},
    channel::transport::{Notifier, publish_boundary_reached},
    composite::builder::build_composite,
    composite::media::MediaLoader,
    composite::metrics::TextMetrics,
    composite::model::Composite,
    config::settings::Settings,
    foundation::core::Viewport,
    foundation::error::CometResult,
    layout::placement::place,
    motion::trajectory::{Phase, Trajectory},
};

/// One comment currently traversing the stage.
#[derive(Clone, Debug)]
pub struct LiveComment {
    comment: Comment,
    window_index: u32,
    composite: Composite,
    trajectory: Trajectory,
}

impl LiveComment {
    /// The originating comment.
    pub fn comment(&self) -> &Comment {
        &self.comment
    }

    /// The traversing composite with its current position.
    pub fn composite(&self) -> &Composite {
        &self.composite
    }

    /// The driving trajectory.
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }
}

/// Registry of live composites and their trajectories on one window.
///
/// Pause/resume iterates the registry and suspends/resumes every handle
/// together; pause is a suspension, never a cancellation, and a composite
/// is destroyed only after its exit phase completes.
#[derive(Debug)]
pub struct Stage {
    viewport: Viewport,
    paused: bool,
    live: Vec<LiveComment>,
}

impl Stage {
    /// Create an empty stage for `viewport`.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            paused: false,
            live: Vec::new(),
        }
    }

    /// Current viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Adopt a new viewport for subsequently spawned comments.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Whether the stage is paused.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Live comments in arrival order.
    pub fn live(&self) -> &[LiveComment] {
        &self.live
    }

    /// Build, place, and start traversing one comment.
    ///
    /// A comment spawned while paused starts its trajectory suspended.
    #[tracing::instrument(skip_all, fields(id = comment.id.0))]
    pub fn spawn(
        &mut self,
        comment: Comment,
        info: &RendererInfo,
        settings: &Settings,
        loader: &mut dyn MediaLoader,
        metrics: &dyn TextMetrics,
    ) -> CometResult<()> {
        let mut composite = build_composite(&comment, settings, loader, metrics);
        composite.pos = place(self.viewport, comment.offset_top_ratio, composite.size);
        let trajectory = Trajectory::start(
            composite.size.width,
            self.viewport,
            info,
            settings.duration_per_display_ms,
            self.paused,
        )?;
        self.live.push(LiveComment {
            comment,
            window_index: info.window_index,
            composite,
            trajectory,
        });
        Ok(())
    }

    /// Advance every live trajectory to `now_ms`, publish boundary events,
    /// and drop composites whose traversal completed.
    ///
    /// Publish failures are logged and never interrupt other traversals.
    pub fn tick(&mut self, now_ms: f64, notifier: &mut dyn Notifier) {
        for entry in &mut self.live {
            let outcome = entry.trajectory.tick(now_ms);
            // On the boundary-crossing tick the composite is observed at
            // the edge; exit motion is sampled from the next tick on.
            entry.composite.pos.x = if outcome.boundary_reached {
                0.0
            } else {
                entry.trajectory.x()
            };
            if outcome.boundary_reached
                && let Err(err) =
                    publish_boundary_reached(notifier, &entry.comment, entry.window_index)
            {
                tracing::warn!(%err, id = entry.comment.id.0, "failed to publish boundary event");
            }
        }
        self.live.retain(|e| e.trajectory.phase() != Phase::Done);
    }

    /// Suspend every live trajectory in place.
    pub fn pause(&mut self) {
        self.paused = true;
        for entry in &mut self.live {
            entry.trajectory.suspend();
        }
    }

    /// Resume every live trajectory from its suspended position.
    pub fn resume(&mut self) {
        self.paused = false;
        for entry in &mut self.live {
            entry.trajectory.resume();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/stage.rs"]
mod tests;
