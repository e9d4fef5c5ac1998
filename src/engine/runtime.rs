use crate::{
    channel::protocol::HostEvent,
    channel::transport::{Notifier, Requester},
    composite::media::MediaLoader,
    composite::metrics::TextMetrics,
    config::settings::Settings,
    flash::flasher::{
        ACK_DECAY_FACTOR, ACK_DURATION_LONGER, ACK_DURATION_RESET, ACK_DURATION_SAME,
        ACK_DURATION_SHORTER, ACK_PAUSE, ACK_RESUME, ACK_WINDOW, Flasher,
    },
    foundation::core::Viewport,
    foundation::error::CometResult,
    motion::stage::Stage,
};

/// Top-level renderer state for one overlay window: settings, the stage of
/// live composites, and the feedback flasher, advanced cooperatively by
/// [`Engine::tick`].
#[derive(Debug)]
pub struct Engine {
    settings: Settings,
    stage: Stage,
    flasher: Flasher,
}

impl Engine {
    /// Seed settings through the startup round trips, then stand ready.
    ///
    /// No comment is handled before every startup response has resolved;
    /// an engine only exists fully seeded.
    pub fn new(viewport: Viewport, requester: &mut dyn Requester) -> CometResult<Self> {
        let settings = Settings::fetch(requester)?;
        Ok(Self::with_settings(viewport, settings))
    }

    /// Build an engine from an explicit settings snapshot.
    pub fn with_settings(viewport: Viewport, settings: Settings) -> Self {
        Self {
            settings,
            stage: Stage::new(viewport),
            flasher: Flasher::new(),
        }
    }

    /// Current settings snapshot.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The stage of live composites.
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// The feedback flasher, for hosts to render the overlay colors.
    pub fn flasher(&self) -> &Flasher {
        &self.flasher
    }

    /// Whether traversals are currently paused.
    pub fn is_paused(&self) -> bool {
        self.stage.is_paused()
    }

    /// Play the initial-load double-flash acknowledgement.
    pub fn startup_flash(&mut self, now_ms: f64) {
        self.flasher.startup(now_ms);
    }

    /// Window focus acknowledgement.
    pub fn on_focus(&mut self, now_ms: f64) {
        self.flasher.flash(now_ms, ACK_WINDOW, 1.0);
    }

    /// Viewport resize: acknowledge and adopt the new geometry for
    /// subsequently spawned comments.
    pub fn on_resize(&mut self, now_ms: f64, viewport: Viewport) {
        self.stage.set_viewport(viewport);
        self.flasher.flash(now_ms, ACK_WINDOW, 1.0);
    }

    /// Dispatch one host notification.
    #[tracing::instrument(skip_all)]
    pub fn handle_event(
        &mut self,
        event: HostEvent,
        now_ms: f64,
        loader: &mut dyn MediaLoader,
        metrics: &dyn TextMetrics,
    ) -> CometResult<()> {
        match event {
            HostEvent::Comment {
                comment,
                renderer_info,
            } => {
                self.stage
                    .spawn(comment, &renderer_info, &self.settings, loader, metrics)?;
            }
            HostEvent::TogglePause => {
                if self.stage.is_paused() {
                    self.stage.resume();
                    self.flasher.flash(now_ms, ACK_RESUME, ACK_DECAY_FACTOR);
                } else {
                    self.stage.pause();
                    self.flasher.flash(now_ms, ACK_PAUSE, ACK_DECAY_FACTOR);
                }
            }
            HostEvent::UpdateDuration(duration) => {
                // Classify against the values in effect before storing.
                let color = if duration == self.settings.default_duration_ms {
                    ACK_DURATION_RESET
                } else if duration < self.settings.duration_per_display_ms {
                    ACK_DURATION_SHORTER
                } else if duration > self.settings.duration_per_display_ms {
                    ACK_DURATION_LONGER
                } else {
                    ACK_DURATION_SAME
                };
                self.flasher.flash(now_ms, color, ACK_DECAY_FACTOR);
                self.settings.duration_per_display_ms = duration;
            }
            HostEvent::UpdateNewlineEnabled(v) => self.settings.newline_enabled = v,
            HostEvent::UpdateIconEnabled(v) => self.settings.icon_enabled = v,
            HostEvent::UpdateInlineImgEnabled(v) => self.settings.inline_img_enabled = v,
            HostEvent::UpdateImgEnabled(v) => self.settings.img_enabled = v,
            HostEvent::UpdateVideoEnabled(v) => self.settings.video_enabled = v,
            HostEvent::UpdateRoundIconEnabled(v) => self.settings.round_icon_enabled = v,
        }
        Ok(())
    }

    /// Advance all live trajectories and flashes to `now_ms`.
    pub fn tick(&mut self, now_ms: f64, notifier: &mut dyn Notifier) {
        self.stage.tick(now_ms, notifier);
        self.flasher.tick(now_ms);
    }
}
