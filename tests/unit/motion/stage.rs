use super::*;

use kurbo::Size;

use crate::channel::protocol::BoundaryReached;
use crate::composite::media::{MediaKind, MediaProbe};
use crate::foundation::core::CommentId;
use crate::foundation::error::{CometError, CometResult};

struct FixedMetrics;

impl TextMetrics for FixedMetrics {
    fn measure(&self, text: &str) -> Size {
        let text = if text.is_empty() { " " } else { text };
        Size::new((text.chars().count() * 10) as f64, 20.0)
    }
}

struct NoMedia;

impl MediaLoader for NoMedia {
    fn load(&mut self, _src: &str, _kind: MediaKind) -> CometResult<MediaProbe> {
        Err(CometError::media("no media in this test"))
    }
}

#[derive(Default)]
struct RecordingNotifier {
    published: Vec<(String, serde_json::Value)>,
}

impl Notifier for RecordingNotifier {
    fn publish(&mut self, topic: &str, payload: serde_json::Value) -> CometResult<()> {
        self.published.push((topic.to_string(), payload));
        Ok(())
    }
}

fn comment(id: u64, text: &str) -> Comment {
    Comment {
        id: CommentId(id),
        text: text.to_string(),
        offset_top_ratio: 0.25,
    }
}

fn single_display(window_index: u32) -> RendererInfo {
    RendererInfo {
        window_index,
        num_displays: 1,
        is_single_window: false,
    }
}

fn stage() -> Stage {
    Stage::new(Viewport::new(1000, 600).unwrap())
}

fn settings() -> Settings {
    Settings {
        duration_per_display_ms: 2000.0,
        ..Settings::default()
    }
}

fn spawn(stage: &mut Stage, id: u64, text: &str, window_index: u32) {
    stage
        .spawn(
            comment(id, text),
            &single_display(window_index),
            &settings(),
            &mut NoMedia,
            &FixedMetrics,
        )
        .unwrap();
}

#[test]
fn spawn_places_the_composite_at_the_right_edge() {
    let mut stage = stage();
    spawn(&mut stage, 1, "hello", 0);

    let live = &stage.live()[0];
    assert_eq!(live.composite().pos.x, 1000.0);
    assert_eq!(live.composite().pos.y, 150.0);
    assert_eq!(live.composite().size, Size::new(50.0, 20.0));
}

#[test]
fn boundary_is_published_once_with_the_window_index() {
    let mut stage = stage();
    let mut notifier = RecordingNotifier::default();
    spawn(&mut stage, 7, "hello", 3);
    let entry = stage.live()[0].trajectory().entry_ms();

    stage.tick(0.0, &mut notifier);
    assert!(notifier.published.is_empty());

    stage.tick(entry + 1.0, &mut notifier);
    assert_eq!(notifier.published.len(), 1);
    let (topic_name, payload) = &notifier.published[0];
    assert_eq!(topic_name, "comment-arrived-to-left-edge");
    let event: BoundaryReached = serde_json::from_value(payload.clone()).unwrap();
    assert_eq!(event.comment.id, CommentId(7));
    assert_eq!(event.window_index, 3);

    stage.tick(entry + 2.0, &mut notifier);
    assert_eq!(notifier.published.len(), 1);
}

#[test]
fn boundary_tick_observes_the_composite_at_the_edge() {
    let mut stage = stage();
    let mut notifier = RecordingNotifier::default();
    spawn(&mut stage, 1, "hello", 0);
    let entry = stage.live()[0].trajectory().entry_ms();
    let exit = stage.live()[0].trajectory().exit_ms();

    stage.tick(0.0, &mut notifier);
    stage.tick(entry + exit / 2.0, &mut notifier);
    assert_eq!(notifier.published.len(), 1);
    assert_eq!(stage.live()[0].composite().pos.x, 0.0);

    stage.tick(entry + exit * 0.75, &mut notifier);
    assert!(stage.live()[0].composite().pos.x < 0.0);
}

#[test]
fn finished_composites_are_destroyed() {
    let mut stage = stage();
    let mut notifier = RecordingNotifier::default();
    spawn(&mut stage, 1, "hello", 0);

    stage.tick(0.0, &mut notifier);
    stage.tick(1.0e6, &mut notifier);
    assert!(stage.live().is_empty());
    // The skipped boundary was still published on the way out.
    assert_eq!(notifier.published.len(), 1);
}

#[test]
fn pause_suspends_every_live_comment() {
    let mut stage = stage();
    let mut notifier = RecordingNotifier::default();
    spawn(&mut stage, 1, "one", 0);
    spawn(&mut stage, 2, "two", 0);

    stage.tick(0.0, &mut notifier);
    stage.tick(300.0, &mut notifier);
    let held: Vec<f64> = stage.live().iter().map(|e| e.composite().pos.x).collect();

    stage.pause();
    assert!(stage.is_paused());
    stage.tick(5000.0, &mut notifier);
    let paused: Vec<f64> = stage.live().iter().map(|e| e.composite().pos.x).collect();
    assert_eq!(paused, held);

    stage.resume();
    // First tick after resume re-establishes the time base.
    stage.tick(5000.0, &mut notifier);
    let resumed: Vec<f64> = stage.live().iter().map(|e| e.composite().pos.x).collect();
    assert_eq!(resumed, held);
    stage.tick(5300.0, &mut notifier);
    for (now, before) in stage.live().iter().map(|e| e.composite().pos.x).zip(held) {
        assert!(now < before);
    }
}

#[test]
fn resuming_an_idle_pause_holds_every_position() {
    let mut stage = stage();
    let mut notifier = RecordingNotifier::default();
    spawn(&mut stage, 1, "hello", 0);
    stage.tick(0.0, &mut notifier);
    stage.tick(300.0, &mut notifier);
    let held = stage.live()[0].composite().pos.x;

    // The host stops ticking for the whole pause; nothing is moving.
    stage.pause();
    stage.resume();
    stage.tick(5300.0, &mut notifier);
    assert_eq!(stage.live()[0].composite().pos.x, held);
    assert!(notifier.published.is_empty());

    stage.tick(5400.0, &mut notifier);
    assert!(stage.live()[0].composite().pos.x < held);
}

#[test]
fn spawning_while_paused_starts_suspended() {
    let mut stage = stage();
    let mut notifier = RecordingNotifier::default();
    stage.pause();
    spawn(&mut stage, 1, "hello", 0);

    stage.tick(0.0, &mut notifier);
    stage.tick(1.0e6, &mut notifier);
    assert_eq!(stage.live().len(), 1);
    assert_eq!(stage.live()[0].composite().pos.x, 1000.0);
    assert!(notifier.published.is_empty());
}

#[test]
fn traversal_duration_is_captured_at_spawn() {
    let mut stage = stage();
    spawn(&mut stage, 1, "hello", 0);

    // 50 px composite in a 1000 px viewport at 2000 ms per display.
    let ratio = 1.0 / 1.05;
    let entry = stage.live()[0].trajectory().entry_ms();
    assert!((entry - 2000.0 * ratio).abs() < 1e-9);
}
