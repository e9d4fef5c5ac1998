use crate::channel::protocol::{BoundaryReached, Comment, topic};
use crate::foundation::error::{CometError, CometResult};

/// Fire-and-forget publisher half of the host messaging channel.
pub trait Notifier {
    /// Publish one notification; delivery is best-effort.
    fn publish(&mut self, topic: &str, payload: serde_json::Value) -> CometResult<()>;
}

/// Request/response half of the host messaging channel.
///
/// Each topic is requested once, at startup, to seed process-wide state.
pub trait Requester {
    /// Issue one request and return the host's response payload.
    fn request(&mut self, topic: &str) -> CometResult<serde_json::Value>;
}

/// Publish the boundary-reached notification for `comment`, tagged with
/// the reporting window's index.
///
/// This is the sole cross-process signal the pipeline emits per comment.
pub fn publish_boundary_reached(
    notifier: &mut dyn Notifier,
    comment: &Comment,
    window_index: u32,
) -> CometResult<()> {
    let payload = serde_json::to_value(BoundaryReached {
        comment: comment.clone(),
        window_index,
    })
    .map_err(|e| CometError::channel(format!("encode boundary payload: {e}")))?;
    notifier.publish(topic::COMMENT_ARRIVED_TO_LEFT_EDGE, payload)
}
