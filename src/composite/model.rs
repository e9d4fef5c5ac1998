use kurbo::{Point, Size};

use crate::foundation::core::CommentId;

/// Media element resolved by the builder and scaled to its target height.
#[derive(Clone, Debug, PartialEq)]
pub struct Media {
    /// Source reference as it appeared in the encoded comment.
    pub src: String,
    /// Display size after scaling to the reference media height.
    pub size: Size,
}

/// Leading icon rendered ahead of the content block.
#[derive(Clone, Debug, PartialEq)]
pub struct Icon {
    /// Icon image.
    pub media: Media,
    /// Round masking per the round-icon toggle at build time.
    pub round: bool,
}

/// One run of styled text lines.
///
/// Lines are separated by explicit breaks when rendered; an empty line
/// contributes only its break, never an empty text node.
#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    /// Text lines in order.
    pub lines: Vec<String>,
    /// Color override; `None` inherits the ambient text color style.
    pub color: Option<String>,
    /// Stroke style, already resolved against the ambient fallback.
    pub stroke: String,
}

/// Ordered content-block segment: text runs and inline images interleave
/// in original token order.
#[derive(Clone, Debug, PartialEq)]
pub enum Segment {
    /// Styled text lines.
    Text(TextRun),
    /// Inline image scaled to one line height.
    InlineImage(Media),
}

/// The fully assembled, laid-out visual representation of one comment.
///
/// Created on comment arrival, animated for its full traversal, then
/// destroyed; a composite never outlives its own traversal.
#[derive(Clone, Debug, PartialEq)]
pub struct Composite {
    /// Owning comment's identifier; also the stacking order.
    pub id: CommentId,
    /// Leading icon, when present and enabled.
    pub icon: Option<Icon>,
    /// Content-block segments in original token order.
    pub segments: Vec<Segment>,
    /// Trailing images.
    pub images: Vec<Media>,
    /// Trailing videos.
    pub videos: Vec<Media>,
    /// Measured extent of the whole composite.
    pub size: Size,
    /// Current top-left position; `x` is advanced by the motion
    /// controller, `y` is fixed once placed.
    pub pos: Point,
}
