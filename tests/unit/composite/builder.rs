use super::*;

use std::collections::HashSet;

use crate::composite::media::MediaProbe;
use crate::foundation::core::CommentId;
use crate::foundation::error::{CometError, CometResult};

/// Deterministic metrics: every char is 10 px wide, every line 20 px tall.
struct FixedMetrics;

impl TextMetrics for FixedMetrics {
    fn measure(&self, text: &str) -> Size {
        let text = if text.is_empty() { " " } else { text };
        let mut width = 0usize;
        let mut lines = 0usize;
        for line in text.split('\n') {
            width = width.max(line.chars().count());
            lines += 1;
        }
        Size::new((width * 10) as f64, (lines * 20) as f64)
    }
}

/// Probes every source as 40x20 unless scripted to fail.
#[derive(Default)]
struct FakeLoader {
    failing: HashSet<String>,
    attempts: Vec<String>,
}

impl FakeLoader {
    fn failing(srcs: &[&str]) -> Self {
        Self {
            failing: srcs.iter().map(|s| s.to_string()).collect(),
            attempts: Vec::new(),
        }
    }
}

impl MediaLoader for FakeLoader {
    fn load(&mut self, src: &str, _kind: MediaKind) -> CometResult<MediaProbe> {
        self.attempts.push(src.to_string());
        if self.failing.contains(src) {
            return Err(CometError::media("scripted failure"));
        }
        Ok(MediaProbe {
            width: 40,
            height: 20,
        })
    }
}

fn comment(text: &str) -> Comment {
    Comment {
        id: CommentId(1),
        text: text.to_string(),
        offset_top_ratio: 0.0,
    }
}

fn build(text: &str, settings: &Settings) -> (Composite, FakeLoader) {
    let mut loader = FakeLoader::default();
    let composite = build_composite(&comment(text), settings, &mut loader, &FixedMetrics);
    (composite, loader)
}

#[test]
fn plain_text_becomes_one_measured_run() {
    let (composite, loader) = build("hello", &Settings::default());
    assert_eq!(composite.id, CommentId(1));
    assert!(composite.icon.is_none());
    assert_eq!(
        composite.segments,
        vec![Segment::Text(TextRun {
            lines: vec!["hello".to_string()],
            color: None,
            stroke: String::new(),
        })]
    );
    assert_eq!(composite.size, Size::new(50.0, 20.0));
    assert!(loader.attempts.is_empty());
}

#[test]
fn disabled_media_are_never_attempted() {
    let settings = Settings {
        img_enabled: false,
        ..Settings::default()
    };
    let (composite, loader) = build("a##IMG##b.png##IMG##c.png", &settings);
    assert!(composite.images.is_empty());
    assert_eq!(
        composite.segments,
        vec![Segment::Text(TextRun {
            lines: vec!["a".to_string()],
            color: None,
            stroke: String::new(),
        })]
    );
    assert!(loader.attempts.is_empty());
}

#[test]
fn inline_images_alternate_with_text_runs() {
    let (composite, loader) = build("a##INLINE_IMG##x.png##INLINE_IMG##b", &Settings::default());
    assert_eq!(composite.segments.len(), 3);
    assert!(matches!(&composite.segments[0], Segment::Text(run) if run.lines == ["a"]));
    match &composite.segments[1] {
        Segment::InlineImage(media) => {
            assert_eq!(media.src, "x.png");
            // 40x20 probe scaled to the 20 px line height.
            assert_eq!(media.size, Size::new(40.0, 20.0));
        }
        other => panic!("unexpected segment: {other:?}"),
    }
    assert!(matches!(&composite.segments[2], Segment::Text(run) if run.lines == ["b"]));
    assert_eq!(loader.attempts, vec!["x.png"]);
    assert_eq!(composite.size, Size::new(60.0, 20.0));
}

#[test]
fn disabled_inline_images_collapse_to_surrounding_text() {
    let settings = Settings {
        inline_img_enabled: false,
        ..Settings::default()
    };
    let (composite, loader) = build("a##INLINE_IMG##x.png##INLINE_IMG##b", &settings);
    assert_eq!(
        composite.segments,
        vec![Segment::Text(TextRun {
            lines: vec!["ab".to_string()],
            color: None,
            stroke: String::new(),
        })]
    );
    assert!(loader.attempts.is_empty());
}

#[test]
fn icon_is_gated_by_its_toggle() {
    let (composite, loader) = build("icon.png##ICON##hi", &Settings::default());
    let icon = composite.icon.expect("icon should be loaded");
    assert_eq!(icon.media.src, "icon.png");
    assert!(icon.round);
    assert_eq!(loader.attempts, vec!["icon.png"]);

    let settings = Settings {
        icon_enabled: false,
        ..Settings::default()
    };
    let (composite, loader) = build("icon.png##ICON##hi", &settings);
    assert!(composite.icon.is_none());
    assert!(loader.attempts.is_empty());
}

#[test]
fn failed_loads_are_dropped_individually() {
    let mut loader = FakeLoader::failing(&["bad.png"]);
    let composite = build_composite(
        &comment("x##IMG##bad.png##IMG##good.png"),
        &Settings::default(),
        &mut loader,
        &FixedMetrics,
    );
    assert_eq!(composite.images.len(), 1);
    assert_eq!(composite.images[0].src, "good.png");
    // Both loads were still attempted and settled.
    assert_eq!(loader.attempts, vec!["bad.png", "good.png"]);
}

#[test]
fn trailing_media_scale_to_the_body_height() {
    let (composite, _) = build("ab\ncd##IMG##wide.png", &Settings::default());
    // Two-line body measures 40 px tall; the 40x20 probe doubles.
    assert_eq!(composite.images[0].size, Size::new(80.0, 40.0));
    assert_eq!(composite.size, Size::new(100.0, 40.0));
}

#[test]
fn newline_toggle_controls_line_splitting() {
    let (composite, _) = build("x\r\ny", &Settings::default());
    assert!(matches!(
        &composite.segments[0],
        Segment::Text(run) if run.lines == ["x", "", "y"]
    ));

    let settings = Settings {
        newline_enabled: false,
        ..Settings::default()
    };
    let (composite, _) = build("x\r\ny", &settings);
    assert!(matches!(
        &composite.segments[0],
        Segment::Text(run) if run.lines == ["xy"]
    ));
}

#[test]
fn empty_color_override_inherits_ambient_style() {
    let settings = Settings {
        text_stroke: "1px gray".to_string(),
        ..Settings::default()
    };
    let (composite, _) = build("##COLOR##hi", &settings);
    assert!(matches!(
        &composite.segments[0],
        Segment::Text(run) if run.color.is_none() && run.stroke == "1px gray"
    ));

    let (composite, _) = build("red##COLOR##hi", &settings);
    assert!(matches!(
        &composite.segments[0],
        Segment::Text(run) if run.color.as_deref() == Some("red")
    ));
}

#[test]
fn present_stroke_override_wins_even_when_empty() {
    let settings = Settings {
        text_stroke: "1px gray".to_string(),
        ..Settings::default()
    };
    let (composite, _) = build("##TEXT_STROKE##hi", &settings);
    assert!(matches!(
        &composite.segments[0],
        Segment::Text(run) if run.stroke.is_empty()
    ));
}

#[test]
fn media_only_comment_has_no_text_segment() {
    let (composite, loader) = build("##IMG##a.png", &Settings::default());
    assert!(composite.segments.is_empty());
    assert_eq!(composite.images.len(), 1);
    // An empty body still measures one blank line for media heights.
    assert_eq!(composite.images[0].size, Size::new(40.0, 20.0));
    assert_eq!(loader.attempts, vec!["a.png"]);
}
