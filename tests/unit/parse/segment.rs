use super::*;

#[test]
fn plain_text_passes_through_unchanged() {
    let parsed = parse_comment("hello world");
    assert_eq!(
        parsed,
        ParsedComment {
            body: "hello world".to_string(),
            ..ParsedComment::default()
        }
    );
}

#[test]
fn single_value_fields_split_once_in_order() {
    let parsed = parse_comment("icon.png##ICON##red##COLOR##1px black##TEXT_STROKE##hello");
    assert_eq!(parsed.icon_src.as_deref(), Some("icon.png"));
    assert_eq!(parsed.color.as_deref(), Some("red"));
    assert_eq!(parsed.stroke.as_deref(), Some("1px black"));
    assert_eq!(parsed.body, "hello");
}

#[test]
fn first_split_keeps_later_separators_in_remainder() {
    let parsed = parse_comment("a##ICON##b##ICON##c");
    assert_eq!(parsed.icon_src.as_deref(), Some("a"));
    assert_eq!(parsed.body, "b##ICON##c");
}

#[test]
fn list_fields_split_at_every_occurrence_in_order() {
    let parsed = parse_comment("body##IMG##a.png##IMG##b.png##IMG##c.png");
    assert_eq!(parsed.body, "body");
    assert_eq!(parsed.img_srcs, vec!["a.png", "b.png", "c.png"]);

    let parsed = parse_comment("body##VIDEO##x.mp4##VIDEO##y.mp4");
    assert_eq!(parsed.body, "body");
    assert_eq!(parsed.video_srcs, vec!["x.mp4", "y.mp4"]);
}

#[test]
fn video_list_is_extracted_before_image_list() {
    // An image separator after the first video separator lands in the
    // video list, not the image list.
    let parsed = parse_comment("body##VIDEO##x.mp4##IMG##a.png");
    assert_eq!(parsed.body, "body");
    assert_eq!(parsed.video_srcs, vec!["x.mp4##IMG##a.png"]);
    assert!(parsed.img_srcs.is_empty());
}

#[test]
fn image_separator_before_video_separator_splits_both_lists() {
    let parsed = parse_comment("a##IMG##b.png##VIDEO##v.mp4");
    assert_eq!(parsed.body, "a");
    assert_eq!(parsed.video_srcs, vec!["v.mp4"]);
    assert_eq!(parsed.img_srcs, vec!["b.png"]);
}

#[test]
fn inline_image_tokens_stay_in_body() {
    let parsed = parse_comment("a##INLINE_IMG##x.png##INLINE_IMG##b");
    assert_eq!(parsed.body, "a##INLINE_IMG##x.png##INLINE_IMG##b");
}

#[test]
fn empty_override_values_are_preserved() {
    let parsed = parse_comment("##COLOR####TEXT_STROKE##hi");
    assert_eq!(parsed.color.as_deref(), Some(""));
    assert_eq!(parsed.stroke.as_deref(), Some(""));
    assert_eq!(parsed.body, "hi");
}

#[test]
fn strip_newlines_removes_every_break_character() {
    assert_eq!(strip_newlines("a\r\n\nb\rc"), "abc");
    assert_eq!(strip_newlines("plain"), "plain");
    assert_eq!(strip_newlines(""), "");
}
