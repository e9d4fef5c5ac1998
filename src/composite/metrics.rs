use std::cell::RefCell;

use kurbo::Size;

use crate::foundation::error::{CometError, CometResult};

/// Measures text extents for composite layout.
pub trait TextMetrics {
    /// Measure a text block; embedded line breaks produce multiple lines.
    ///
    /// Width is the widest line advance, height the summed line heights.
    /// Empty text measures as a single space so every block has a usable
    /// line height.
    fn measure(&self, text: &str) -> Size;

    /// Height of one text line; the reference height for media scaling.
    fn line_height(&self) -> f64 {
        self.measure(" ").height
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct MeasureBrush;

/// Parley-backed text measurement with a fixed font and size.
pub struct ParleyTextMetrics {
    inner: RefCell<Inner>,
    size_px: f32,
}

struct Inner {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<MeasureBrush>,
    family: String,
}

impl ParleyTextMetrics {
    /// Register `font_bytes` and measure at `size_px`.
    pub fn new(font_bytes: Vec<u8>, size_px: f32) -> CometResult<Self> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(CometError::validation("size_px must be finite and > 0"));
        }

        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            CometError::validation("no font families registered from font bytes")
        })?;
        let family = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| CometError::validation("registered font family has no name"))?
            .to_string();

        Ok(Self {
            inner: RefCell::new(Inner {
                font_ctx,
                layout_ctx: parley::LayoutContext::new(),
                family,
            }),
            size_px,
        })
    }
}

impl TextMetrics for ParleyTextMetrics {
    fn measure(&self, text: &str) -> Size {
        let text = if text.is_empty() { " " } else { text };
        let mut inner = self.inner.borrow_mut();
        let inner = &mut *inner;

        let mut builder = inner
            .layout_ctx
            .ranged_builder(&mut inner.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(inner.family.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(self.size_px));
        builder.push_default(parley::style::StyleProperty::Brush(MeasureBrush));

        let mut layout: parley::Layout<MeasureBrush> = builder.build(text);
        layout.break_all_lines(None);

        let mut w = 0.0f64;
        let mut h = 0.0f64;
        for line in layout.lines() {
            let m = line.metrics();
            w = w.max(f64::from(m.advance));
            h += f64::from(m.ascent + m.descent + m.leading);
        }
        Size::new(w.max(1.0), h.max(1.0))
    }
}
