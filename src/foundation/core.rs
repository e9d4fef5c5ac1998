use crate::foundation::error::{CometError, CometResult};

pub use kurbo::{Point, Size, Vec2};

/// Comment identifier assigned by the host; doubles as the stacking order
/// of the comment's composite.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct CommentId(pub u64);

/// Logical viewport of one overlay window, in physical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Construct a viewport; both dimensions must be positive.
    pub fn new(width: u32, height: u32) -> CometResult<Self> {
        if width == 0 || height == 0 {
            return Err(CometError::validation("viewport width/height must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Width as `f64` for position arithmetic.
    pub fn width_f64(self) -> f64 {
        f64::from(self.width)
    }

    /// Height as `f64` for position arithmetic.
    pub fn height_f64(self) -> f64 {
        f64::from(self.height)
    }
}

/// Straight-alpha RGBA color used by flash acknowledgements.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha in `[0, 1]`.
    pub a: f32,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0.0);

    /// Construct a color from channels and straight alpha.
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Interpolate toward [`Rgba::TRANSPARENT`] by `t` in `[0, 1]`.
    ///
    /// All four channels decay, matching a keyframe pair from this color
    /// to transparent black.
    pub fn faded(self, t: f64) -> Self {
        let k = 1.0 - t.clamp(0.0, 1.0);
        fn fade_u8(c: u8, k: f64) -> u8 {
            (f64::from(c) * k).round().clamp(0.0, 255.0) as u8
        }
        Self {
            r: fade_u8(self.r, k),
            g: fade_u8(self.g, k),
            b: fade_u8(self.b, k),
            a: (f64::from(self.a) * k) as f32,
        }
    }
}
