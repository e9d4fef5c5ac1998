//! Text segmentation of encoded comment strings.
//!
//! A single comment string multiplexes several logical fields via reserved
//! separator literals. Icon, color, and stroke are extracted by splitting at
//! most once; trailing video and image lists split at every occurrence.

/// Leading icon source separator.
pub const ICON_SEPARATOR: &str = "##ICON##";
/// Text color override separator.
pub const COLOR_SEPARATOR: &str = "##COLOR##";
/// Text stroke override separator.
pub const TEXT_STROKE_SEPARATOR: &str = "##TEXT_STROKE##";
/// Inline image separator; body segments alternate text/image around it.
pub const INLINE_IMG_SEPARATOR: &str = "##INLINE_IMG##";
/// Trailing image list separator.
pub const IMG_SEPARATOR: &str = "##IMG##";
/// Trailing video list separator.
pub const VIDEO_SEPARATOR: &str = "##VIDEO##";

/// Typed fields decoded from one encoded comment string.
///
/// Absent separators leave the corresponding field unset and the remainder
/// untouched. `body` may still contain [`INLINE_IMG_SEPARATOR`] tokens; the
/// composite builder resolves those against the inline-image toggle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParsedComment {
    /// Icon source, when an icon separator was present.
    pub icon_src: Option<String>,
    /// Color override, when a color separator was present.
    pub color: Option<String>,
    /// Stroke override, when a stroke separator was present.
    pub stroke: Option<String>,
    /// Remaining body text (may contain inline-image tokens).
    pub body: String,
    /// Trailing video sources in original order.
    pub video_srcs: Vec<String>,
    /// Trailing image sources in original order.
    pub img_srcs: Vec<String>,
}

/// Decode `text` in strict field order: icon, color, stroke (split once
/// each), then the video list, then the image list (split at every
/// occurrence).
///
/// The video list is extracted before the image list; an image separator
/// inside an unconsumed video remainder is therefore split as part of the
/// video list. This matches the wire protocol's field ordering.
pub fn parse_comment(text: &str) -> ParsedComment {
    let mut parsed = ParsedComment::default();
    let mut rest = text;

    if let Some((head, tail)) = rest.split_once(ICON_SEPARATOR) {
        parsed.icon_src = Some(head.to_string());
        rest = tail;
    }
    if let Some((head, tail)) = rest.split_once(COLOR_SEPARATOR) {
        parsed.color = Some(head.to_string());
        rest = tail;
    }
    if let Some((head, tail)) = rest.split_once(TEXT_STROKE_SEPARATOR) {
        parsed.stroke = Some(head.to_string());
        rest = tail;
    }

    let mut body = rest.to_string();
    if body.contains(VIDEO_SEPARATOR) {
        let (head, srcs) = split_list(&body, VIDEO_SEPARATOR);
        body = head;
        parsed.video_srcs = srcs;
    }
    if body.contains(IMG_SEPARATOR) {
        let (head, srcs) = split_list(&body, IMG_SEPARATOR);
        body = head;
        parsed.img_srcs = srcs;
    }
    parsed.body = body;
    parsed
}

fn split_list(text: &str, sep: &str) -> (String, Vec<String>) {
    let mut parts = text.split(sep).map(str::to_string);
    let head = parts.next().unwrap_or_default();
    (head, parts.collect())
}

/// Remove every `\r`/`\n` character, collapsing line-break runs to nothing.
///
/// Applied to the body only, after separator extraction, when the newline
/// toggle is disabled.
pub fn strip_newlines(text: &str) -> String {
    text.chars().filter(|c| *c != '\r' && *c != '\n').collect()
}

#[cfg(test)]
#[path = "../../tests/unit/parse/segment.rs"]
mod tests;
