use kurbo::{Point, Size};

use crate::{
    channel::protocol::Comment,
    composite::media::{MediaKind, MediaLoader},
    composite::metrics::TextMetrics,
    composite::model::{Composite, Icon, Media, Segment, TextRun},
    config::settings::Settings,
    parse::segment::{self, INLINE_IMG_SEPARATOR},
};

/// Assemble the visual composite for one comment under the current
/// settings snapshot.
///
/// All attempted media loads settle before this returns. Disabled media
/// are never attempted, and each failed load is dropped on its own; a bad
/// source never fails the composite.
#[tracing::instrument(skip_all, fields(id = comment.id.0))]
pub fn build_composite(
    comment: &Comment,
    settings: &Settings,
    loader: &mut dyn MediaLoader,
    metrics: &dyn TextMetrics,
) -> Composite {
    let parsed = segment::parse_comment(&comment.text);
    let body = if settings.newline_enabled {
        parsed.body.clone()
    } else {
        segment::strip_newlines(&parsed.body)
    };

    // Reference heights: trailing media match the body block, inline
    // images match a single text line.
    let media_height = metrics.measure(&body).height;
    let inline_height = metrics.line_height();

    let icon = match (&parsed.icon_src, settings.icon_enabled) {
        (Some(src), true) => load_media(loader, src, MediaKind::Icon, media_height).map(|media| {
            Icon {
                media,
                round: settings.round_icon_enabled,
            }
        }),
        _ => None,
    };

    // An empty override means "inherit", same as no override at all.
    let color = parsed.color.clone().filter(|c| !c.is_empty());
    let stroke = parsed
        .stroke
        .clone()
        .unwrap_or_else(|| settings.text_stroke.clone());

    let mut segments = Vec::new();
    if settings.inline_img_enabled {
        for (i, part) in body.split(INLINE_IMG_SEPARATOR).enumerate() {
            if i % 2 == 0 {
                if let Some(run) = text_run(part, &color, &stroke) {
                    segments.push(Segment::Text(run));
                }
            } else if let Some(media) = load_media(loader, part, MediaKind::Inline, inline_height) {
                segments.push(Segment::InlineImage(media));
            }
        }
    } else {
        let text: String = body
            .split(INLINE_IMG_SEPARATOR)
            .enumerate()
            .filter(|(i, _)| i % 2 == 0)
            .map(|(_, t)| t)
            .collect();
        if let Some(run) = text_run(&text, &color, &stroke) {
            segments.push(Segment::Text(run));
        }
    }

    let images = if settings.img_enabled {
        parsed
            .img_srcs
            .iter()
            .filter_map(|src| load_media(loader, src, MediaKind::Image, media_height))
            .collect()
    } else {
        Vec::new()
    };
    let videos = if settings.video_enabled {
        parsed
            .video_srcs
            .iter()
            .filter_map(|src| load_media(loader, src, MediaKind::Video, media_height))
            .collect()
    } else {
        Vec::new()
    };

    let size = measure_composite(icon.as_ref(), &segments, &images, &videos, metrics);

    Composite {
        id: comment.id,
        icon,
        segments,
        images,
        videos,
        size,
        pos: Point::ZERO,
    }
}

fn text_run(text: &str, color: &Option<String>, stroke: &str) -> Option<TextRun> {
    let lines: Vec<String> = text.split(['\r', '\n']).map(str::to_string).collect();
    if lines.len() == 1 && lines[0].is_empty() {
        return None;
    }
    Some(TextRun {
        lines,
        color: color.clone(),
        stroke: stroke.to_string(),
    })
}

fn load_media(
    loader: &mut dyn MediaLoader,
    src: &str,
    kind: MediaKind,
    target_height: f64,
) -> Option<Media> {
    if src.is_empty() {
        return None;
    }
    match loader.load(src, kind) {
        Ok(probe) if probe.width > 0 && probe.height > 0 => {
            let scale = target_height / f64::from(probe.height);
            Some(Media {
                src: src.to_string(),
                size: Size::new(f64::from(probe.width) * scale, target_height),
            })
        }
        Ok(_) => {
            tracing::debug!(src, ?kind, "dropping media with empty dimensions");
            None
        }
        Err(err) => {
            tracing::debug!(src, ?kind, %err, "dropping media after failed load");
            None
        }
    }
}

fn measure_composite(
    icon: Option<&Icon>,
    segments: &[Segment],
    images: &[Media],
    videos: &[Media],
    metrics: &dyn TextMetrics,
) -> Size {
    let mut width = 0.0f64;
    let mut height = 0.0f64;

    if let Some(icon) = icon {
        width += icon.media.size.width;
        height = height.max(icon.media.size.height);
    }
    for seg in segments {
        match seg {
            Segment::Text(run) => {
                let s = metrics.measure(&run.lines.join("\n"));
                width += s.width;
                height = height.max(s.height);
            }
            Segment::InlineImage(m) => {
                width += m.size.width;
                height = height.max(m.size.height);
            }
        }
    }
    for m in images.iter().chain(videos.iter()) {
        width += m.size.width;
        height = height.max(m.size.height);
    }
    Size::new(width, height)
}

#[cfg(test)]
#[path = "../../tests/unit/composite/builder.rs"]
mod tests;
