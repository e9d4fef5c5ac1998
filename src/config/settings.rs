use crate::channel::protocol::topic;
use crate::channel::transport::Requester;
use crate::foundation::error::{CometError, CometResult};

/// Process-wide renderer settings seeded from the host at startup.
///
/// Reads happen at composite build time, never cached per comment; writes
/// are visible to subsequently built composites immediately and never
/// affect composites already in flight.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// Traversal duration for one display width, in milliseconds.
    pub duration_per_display_ms: f64,
    /// Host default duration, used to classify duration updates.
    pub default_duration_ms: f64,
    /// Ambient text color style applied when a comment has no override.
    pub text_color: String,
    /// Ambient text stroke style applied when a comment has no override.
    pub text_stroke: String,
    /// Keep line breaks in comment bodies.
    pub newline_enabled: bool,
    /// Render leading icons.
    pub icon_enabled: bool,
    /// Render inline images within the content block.
    pub inline_img_enabled: bool,
    /// Render trailing images.
    pub img_enabled: bool,
    /// Render trailing videos.
    pub video_enabled: bool,
    /// Render leading icons with round masking.
    pub round_icon_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            duration_per_display_ms: 5000.0,
            default_duration_ms: 5000.0,
            text_color: "white".to_string(),
            text_stroke: String::new(),
            newline_enabled: true,
            icon_enabled: true,
            inline_img_enabled: true,
            img_enabled: true,
            video_enabled: true,
            round_icon_enabled: true,
        }
    }
}

impl Settings {
    /// Seed settings through the startup request/response round trips.
    ///
    /// Every dependent response must resolve before comment handling is
    /// wired; callers construct the engine only from a fully seeded value.
    #[tracing::instrument(skip_all)]
    pub fn fetch(requester: &mut dyn Requester) -> CometResult<Self> {
        Ok(Self {
            duration_per_display_ms: request_f64(requester, topic::REQUEST_DURATION)?,
            default_duration_ms: request_f64(requester, topic::REQUEST_DEFAULT_DURATION)?,
            text_color: request_string(requester, topic::REQUEST_TEXT_COLOR_STYLE)?,
            text_stroke: request_string(requester, topic::REQUEST_TEXT_STROKE_STYLE)?,
            newline_enabled: request_bool(requester, topic::REQUEST_NEWLINE_ENABLED)?,
            icon_enabled: request_bool(requester, topic::REQUEST_ICON_ENABLED)?,
            inline_img_enabled: request_bool(requester, topic::REQUEST_INLINE_IMG_ENABLED)?,
            img_enabled: request_bool(requester, topic::REQUEST_IMG_ENABLED)?,
            video_enabled: request_bool(requester, topic::REQUEST_VIDEO_ENABLED)?,
            round_icon_enabled: request_bool(requester, topic::REQUEST_ROUND_ICON_ENABLED)?,
        })
    }
}

fn request_f64(requester: &mut dyn Requester, topic: &str) -> CometResult<f64> {
    requester
        .request(topic)?
        .as_f64()
        .ok_or_else(|| CometError::channel(format!("'{topic}' response must be a number")))
}

fn request_bool(requester: &mut dyn Requester, topic: &str) -> CometResult<bool> {
    requester
        .request(topic)?
        .as_bool()
        .ok_or_else(|| CometError::channel(format!("'{topic}' response must be a boolean")))
}

fn request_string(requester: &mut dyn Requester, topic: &str) -> CometResult<String> {
    requester
        .request(topic)?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| CometError::channel(format!("'{topic}' response must be a string")))
}

#[cfg(test)]
#[path = "../../tests/unit/config/settings.rs"]
mod tests;
