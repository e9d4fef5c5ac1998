use crate::foundation::core::CommentId;
use crate::foundation::error::{CometError, CometResult};

/// Topic names shared with the host messaging channel.
///
/// Dashed topics are notifications; underscored topics are startup
/// request/response commands.
pub mod topic {
    /// Inbound: one comment with its renderer placement info.
    pub const COMMENT: &str = "comment";
    /// Inbound: toggle the process-wide pause state (no payload).
    pub const TOGGLE_PAUSE: &str = "toggle-pause";
    /// Inbound: new traversal duration per display.
    pub const UPDATE_DURATION: &str = "update-duration";
    /// Inbound: newline feature toggle.
    pub const UPDATE_NEWLINE_ENABLED: &str = "update-newline-enabled";
    /// Inbound: icon feature toggle.
    pub const UPDATE_ICON_ENABLED: &str = "update-icon-enabled";
    /// Inbound: inline-image feature toggle.
    pub const UPDATE_INLINE_IMG_ENABLED: &str = "update-inline-img-enabled";
    /// Inbound: trailing-image feature toggle.
    pub const UPDATE_IMG_ENABLED: &str = "update-img-enabled";
    /// Inbound: trailing-video feature toggle.
    pub const UPDATE_VIDEO_ENABLED: &str = "update-video-enabled";
    /// Inbound: round-icon feature toggle.
    pub const UPDATE_ROUND_ICON_ENABLED: &str = "update-round-icon-enabled";

    /// Outbound: a comment's leading edge reached the left viewport edge.
    pub const COMMENT_ARRIVED_TO_LEFT_EDGE: &str = "comment-arrived-to-left-edge";

    /// Startup request: current traversal duration per display.
    pub const REQUEST_DURATION: &str = "request_duration";
    /// Startup request: host default duration.
    pub const REQUEST_DEFAULT_DURATION: &str = "request_default_duration";
    /// Startup request: ambient text color style.
    pub const REQUEST_TEXT_COLOR_STYLE: &str = "request_text_color_style";
    /// Startup request: ambient text stroke style.
    pub const REQUEST_TEXT_STROKE_STYLE: &str = "request_text_stroke_style";
    /// Startup request: newline feature toggle.
    pub const REQUEST_NEWLINE_ENABLED: &str = "request_newline_enabled";
    /// Startup request: icon feature toggle.
    pub const REQUEST_ICON_ENABLED: &str = "request_icon_enabled";
    /// Startup request: inline-image feature toggle.
    pub const REQUEST_INLINE_IMG_ENABLED: &str = "request_inline_img_enabled";
    /// Startup request: trailing-image feature toggle.
    pub const REQUEST_IMG_ENABLED: &str = "request_img_enabled";
    /// Startup request: trailing-video feature toggle.
    pub const REQUEST_VIDEO_ENABLED: &str = "request_video_enabled";
    /// Startup request: round-icon feature toggle.
    pub const REQUEST_ROUND_ICON_ENABLED: &str = "request_round_icon_enabled";
}

/// One overlay comment as delivered by the host.
///
/// Immutable once received; owned by the pipeline for the duration of one
/// traversal.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Unique, monotonic-ish identifier; also the stacking order.
    pub id: CommentId,
    /// Encoded comment string multiplexing text and media fields.
    pub text: String,
    /// Pre-computed vertical placement ratio in `[0, 1]` (host-owned).
    pub offset_top_ratio: f64,
}

/// This display's role in a multi-window layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RendererInfo {
    /// Index of this window among all overlay windows.
    pub window_index: u32,
    /// Number of physical displays backing the logical window.
    pub num_displays: u32,
    /// One logical window spans `num_displays` displays when `true`.
    pub is_single_window: bool,
}

/// Payload of the boundary-reached notification.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundaryReached {
    /// The comment whose leading edge crossed the left viewport edge.
    pub comment: Comment,
    /// Index of the window reporting the crossing.
    pub window_index: u32,
}

/// One subscribed notification from the host.
#[derive(Clone, Debug, PartialEq)]
pub enum HostEvent {
    /// A comment arrived for display.
    Comment {
        /// The comment payload.
        comment: Comment,
        /// Placement info for the receiving window.
        renderer_info: RendererInfo,
    },
    /// Toggle the process-wide pause state.
    TogglePause,
    /// New traversal duration per display, in milliseconds.
    UpdateDuration(f64),
    /// Newline feature toggle.
    UpdateNewlineEnabled(bool),
    /// Icon feature toggle.
    UpdateIconEnabled(bool),
    /// Inline-image feature toggle.
    UpdateInlineImgEnabled(bool),
    /// Trailing-image feature toggle.
    UpdateImgEnabled(bool),
    /// Trailing-video feature toggle.
    UpdateVideoEnabled(bool),
    /// Round-icon feature toggle.
    UpdateRoundIconEnabled(bool),
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentPayload {
    comment: Comment,
    renderer_info: RendererInfo,
}

#[derive(serde::Deserialize)]
struct DurationPayload {
    duration: f64,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct EnabledPayload {
    is_enabled: bool,
}

impl HostEvent {
    /// Decode one `(topic, payload)` pair received from the transport.
    pub fn parse(topic: &str, payload: &serde_json::Value) -> CometResult<Self> {
        fn decode<T: serde::de::DeserializeOwned>(
            topic: &str,
            payload: &serde_json::Value,
        ) -> CometResult<T> {
            serde_json::from_value(payload.clone())
                .map_err(|e| CometError::channel(format!("bad '{topic}' payload: {e}")))
        }

        match topic {
            topic::COMMENT => {
                let p: CommentPayload = decode(topic, payload)?;
                Ok(Self::Comment {
                    comment: p.comment,
                    renderer_info: p.renderer_info,
                })
            }
            topic::TOGGLE_PAUSE => Ok(Self::TogglePause),
            topic::UPDATE_DURATION => {
                let p: DurationPayload = decode(topic, payload)?;
                Ok(Self::UpdateDuration(p.duration))
            }
            topic::UPDATE_NEWLINE_ENABLED => {
                let p: EnabledPayload = decode(topic, payload)?;
                Ok(Self::UpdateNewlineEnabled(p.is_enabled))
            }
            topic::UPDATE_ICON_ENABLED => {
                let p: EnabledPayload = decode(topic, payload)?;
                Ok(Self::UpdateIconEnabled(p.is_enabled))
            }
            topic::UPDATE_INLINE_IMG_ENABLED => {
                let p: EnabledPayload = decode(topic, payload)?;
                Ok(Self::UpdateInlineImgEnabled(p.is_enabled))
            }
            topic::UPDATE_IMG_ENABLED => {
                let p: EnabledPayload = decode(topic, payload)?;
                Ok(Self::UpdateImgEnabled(p.is_enabled))
            }
            topic::UPDATE_VIDEO_ENABLED => {
                let p: EnabledPayload = decode(topic, payload)?;
                Ok(Self::UpdateVideoEnabled(p.is_enabled))
            }
            topic::UPDATE_ROUND_ICON_ENABLED => {
                let p: EnabledPayload = decode(topic, payload)?;
                Ok(Self::UpdateRoundIconEnabled(p.is_enabled))
            }
            other => Err(CometError::channel(format!("unknown topic '{other}'"))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/channel/protocol.rs"]
mod tests;
