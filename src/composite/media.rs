use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::foundation::error::{CometError, CometResult};

/// Media category attempted by the composite builder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    /// Leading icon image.
    Icon,
    /// Inline image inside the content block.
    Inline,
    /// Trailing image.
    Image,
    /// Trailing video.
    Video,
}

/// Intrinsic pixel dimensions reported by a loader.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MediaProbe {
    /// Source width in pixels.
    pub width: u32,
    /// Source height in pixels.
    pub height: u32,
}

/// Resolves media sources to intrinsic dimensions.
///
/// Load failures are per-item and non-fatal: the builder drops the failed
/// element and continues without it.
pub trait MediaLoader {
    /// Probe one source. Implementations reject empty sources.
    fn load(&mut self, src: &str, kind: MediaKind) -> CometResult<MediaProbe>;
}

/// Filesystem-backed loader: the `image` crate probes raster dimensions,
/// and videos are probed through the system `ffprobe` binary when the
/// `media-ffmpeg` feature is enabled.
#[derive(Clone, Debug)]
pub struct FsMediaLoader {
    root: PathBuf,
}

impl FsMediaLoader {
    /// Create a loader resolving sources relative to `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl MediaLoader for FsMediaLoader {
    fn load(&mut self, src: &str, kind: MediaKind) -> CometResult<MediaProbe> {
        if src.trim().is_empty() {
            return Err(CometError::media("empty media source"));
        }
        let path = self.root.join(src);
        match kind {
            MediaKind::Video => probe_video(&path),
            MediaKind::Icon | MediaKind::Inline | MediaKind::Image => {
                let (width, height) = image::image_dimensions(&path)
                    .with_context(|| format!("probe image dimensions of '{}'", path.display()))
                    .map_err(CometError::from)?;
                Ok(MediaProbe { width, height })
            }
        }
    }
}

#[cfg(feature = "media-ffmpeg")]
fn probe_video(source_path: &Path) -> CometResult<MediaProbe> {
    #[derive(serde::Deserialize)]
    struct ProbeStream {
        codec_type: Option<String>,
        width: Option<u32>,
        height: Option<u32>,
    }
    #[derive(serde::Deserialize)]
    struct ProbeOut {
        streams: Vec<ProbeStream>,
    }

    let out = std::process::Command::new("ffprobe")
        .args(["-v", "error", "-print_format", "json", "-show_streams"])
        .arg(source_path)
        .output()
        .context("spawn ffprobe")
        .map_err(CometError::from)?;
    if !out.status.success() {
        return Err(CometError::media(format!(
            "ffprobe failed for '{}'",
            source_path.display()
        )));
    }

    let probe: ProbeOut = serde_json::from_slice(&out.stdout)
        .context("parse ffprobe output")
        .map_err(CometError::from)?;
    let dims = probe
        .streams
        .iter()
        .find(|s| s.codec_type.as_deref() == Some("video"))
        .and_then(|s| Some((s.width?, s.height?)));
    match dims {
        Some((width, height)) if width > 0 && height > 0 => Ok(MediaProbe { width, height }),
        _ => Err(CometError::media(format!(
            "no video stream dimensions in '{}'",
            source_path.display()
        ))),
    }
}

#[cfg(not(feature = "media-ffmpeg"))]
fn probe_video(source_path: &Path) -> CometResult<MediaProbe> {
    Err(CometError::media(format!(
        "video probing for '{}' requires the media-ffmpeg feature",
        source_path.display()
    )))
}
