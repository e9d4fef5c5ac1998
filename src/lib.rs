//! Comet is a multi-display scrolling comment overlay engine.
//!
//! Comet turns a stream of encoded comment payloads into laid-out visual
//! composites that traverse one or more overlay windows from right to left,
//! and reports a boundary event the instant each comment's leading edge
//! crosses the left viewport edge.
//!
//! # Pipeline overview
//!
//! 1. **Parse**: encoded comment string -> [`ParsedComment`] (icon, color,
//!    stroke, inline/trailing media, body text)
//! 2. **Build**: parsed parts + [`Settings`] snapshot -> [`Composite`]
//!    (measured text runs, scaled media, per-item load failure tolerance)
//! 3. **Place**: [`place`] computes vertical position with a bottom clamp;
//!    horizontal start is the viewport's right edge
//! 4. **Traverse**: [`Trajectory`] drives the two-phase entry/exit motion;
//!    [`Stage`] registers live composites, publishes boundary events, and
//!    suspends/resumes everything together on pause
//!
//! [`Flasher`] plays transient full-surface color acknowledgements for
//! configuration changes, and [`Engine`] wires host notifications to all of
//! the above behind the narrow [`Notifier`]/[`Requester`] channel traits.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Single-threaded, cooperative**: all state is advanced by explicit
//!   `tick(now_ms)` calls from the host render loop; overlap is expressed
//!   as concurrently progressing trajectories and flashes, not threads.
//! - **No IO in the pipeline**: media probing and text measurement sit
//!   behind the [`MediaLoader`] and [`TextMetrics`] traits.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod channel;
mod composite;
mod config;
mod engine;
mod flash;
mod foundation;
mod layout;
mod motion;
mod parse;

pub use channel::protocol::{BoundaryReached, Comment, HostEvent, RendererInfo, topic};
pub use channel::transport::{Notifier, Requester, publish_boundary_reached};
pub use composite::builder::build_composite;
pub use composite::media::{FsMediaLoader, MediaKind, MediaLoader, MediaProbe};
pub use composite::metrics::{ParleyTextMetrics, TextMetrics};
pub use composite::model::{Composite, Icon, Media, Segment, TextRun};
pub use config::settings::Settings;
pub use engine::runtime::Engine;
pub use flash::flasher::{
    ACK_DECAY_FACTOR, ACK_DURATION_LONGER, ACK_DURATION_RESET, ACK_DURATION_SAME,
    ACK_DURATION_SHORTER, ACK_PAUSE, ACK_RESUME, ACK_WINDOW, FLASH_DECAY_MS, Flash, Flasher,
};
pub use foundation::core::{CommentId, Point, Rgba, Size, Vec2, Viewport};
pub use foundation::error::{CometError, CometResult};
pub use layout::placement::place;
pub use motion::ease::Ease;
pub use motion::stage::{LiveComment, Stage};
pub use motion::trajectory::{Phase, TickOutcome, Trajectory, duration_ratio, wide_window_factor};
pub use parse::segment::{
    COLOR_SEPARATOR, ICON_SEPARATOR, IMG_SEPARATOR, INLINE_IMG_SEPARATOR, ParsedComment,
    TEXT_STROKE_SEPARATOR, VIDEO_SEPARATOR, parse_comment, strip_newlines,
};
