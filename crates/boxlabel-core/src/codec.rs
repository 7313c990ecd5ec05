//! Coordinate and label codec.
//!
//! Three coordinate spaces meet here:
//!
//! - original image pixels ([`PixelRect`], `f64`),
//! - normalized center/size label coordinates ([`NormalizedBox`]),
//! - integer canvas pixels ([`DisplayRect`]), related to image pixels by a
//!   [`DisplayTransform`] (one uniform scale plus a centering offset).
//!
//! Saving always goes display → pixel → normalized, and loading goes
//! normalized → pixel → display.

use std::fmt;

use crate::classes::ClassId;
use crate::error::{LabelerError, Result};

/// Center/size box with every component divided by the image extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalizedBox {
    pub cx: f64,
    pub cy: f64,
    pub w: f64,
    pub h: f64,
}

impl NormalizedBox {
    pub fn new(cx: f64, cy: f64, w: f64, h: f64) -> Self {
        Self { cx, cy, w, h }
    }
}

/// One label line: a class id and its normalized box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelRecord {
    pub class_id: ClassId,
    pub bbox: NormalizedBox,
}

impl LabelRecord {
    pub fn new(class_id: ClassId, bbox: NormalizedBox) -> Self {
        Self { class_id, bbox }
    }

    /// Parse a single label line.
    ///
    /// Exactly five whitespace-separated tokens are required: a non-negative
    /// integer class id followed by four floats. Anything else is `None`.
    pub fn parse_line(line: &str) -> Option<Self> {
        // Six tokens is enough to detect "too many" without collecting the rest.
        let tokens: Vec<&str> = line.split_whitespace().take(6).collect();
        if tokens.len() != 5 {
            return None;
        }

        let class_id = tokens[0].parse::<usize>().ok()?;
        let cx = tokens[1].parse::<f64>().ok()?;
        let cy = tokens[2].parse::<f64>().ok()?;
        let w = tokens[3].parse::<f64>().ok()?;
        let h = tokens[4].parse::<f64>().ok()?;

        Some(Self::new(ClassId::new(class_id), NormalizedBox::new(cx, cy, w, h)))
    }
}

/// Formats as the on-disk line, without the trailing newline.
impl fmt::Display for LabelRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:.6} {:.6} {:.6} {:.6}",
            self.class_id, self.bbox.cx, self.bbox.cy, self.bbox.w, self.bbox.h
        )
    }
}

/// Rectangle in original image pixels.
///
/// Not required to be ordered or in bounds; [`normalize`] fixes both.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelRect {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl PixelRect {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }
}

/// A point on the canvas, in whole canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayPoint {
    pub x: i32,
    pub y: i32,
}

impl DisplayPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Clamp into `[0, width] x [0, height]`.
    pub fn clamped(self, width: u32, height: u32) -> Self {
        let limit = |v: u32| v.min(i32::MAX as u32) as i32;
        Self {
            x: self.x.clamp(0, limit(width)),
            y: self.y.clamp(0, limit(height)),
        }
    }
}

/// Rectangle in canvas pixels. Corners keep the drag direction until
/// [`DisplayRect::ordered`] is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayRect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl DisplayRect {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn from_corners(a: DisplayPoint, b: DisplayPoint) -> Self {
        Self::new(a.x, a.y, b.x, b.y)
    }

    /// Same rectangle with `x1 <= x2` and `y1 <= y2`.
    pub fn ordered(&self) -> Self {
        Self {
            x1: self.x1.min(self.x2),
            y1: self.y1.min(self.y2),
            x2: self.x1.max(self.x2),
            y2: self.y1.max(self.y2),
        }
    }

    /// Clamp every corner into `[0, width] x [0, height]`.
    pub fn clamped(&self, width: u32, height: u32) -> Self {
        let a = DisplayPoint::new(self.x1, self.y1).clamped(width, height);
        let b = DisplayPoint::new(self.x2, self.y2).clamped(width, height);
        Self::from_corners(a, b)
    }
}

/// Mapping between image pixels and canvas pixels for one loaded image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayTransform {
    scale: f64,
    offset_x: u32,
    offset_y: u32,
}

impl DisplayTransform {
    /// Build a transform directly. `scale` must be finite and in `(0, 1]`.
    pub fn new(scale: f64, offset_x: u32, offset_y: u32) -> Option<Self> {
        if scale.is_finite() && scale > 0.0 && scale <= 1.0 {
            Some(Self {
                scale,
                offset_x,
                offset_y,
            })
        } else {
            None
        }
    }

    /// Fit a `width x height` image inside a `max_width x max_height`
    /// canvas, never upscaling, centered.
    pub fn fit(width: u32, height: u32, max_width: u32, max_height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(LabelerError::InvalidDimensions { width, height });
        }
        if max_width == 0 || max_height == 0 {
            return Err(LabelerError::InvalidDimensions {
                width: max_width,
                height: max_height,
            });
        }

        let scale = (max_width as f64 / width as f64)
            .min(max_height as f64 / height as f64)
            .min(1.0);

        let (disp_w, disp_h) = scaled_size(width, height, scale);
        Ok(Self {
            scale,
            offset_x: max_width.saturating_sub(disp_w) / 2,
            offset_y: max_height.saturating_sub(disp_h) / 2,
        })
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn offset_x(&self) -> u32 {
        self.offset_x
    }

    pub fn offset_y(&self) -> u32 {
        self.offset_y
    }

    /// Size of a `width x height` image once drawn on the canvas.
    pub fn display_size(&self, width: u32, height: u32) -> (u32, u32) {
        scaled_size(width, height, self.scale)
    }
}

fn scaled_size(width: u32, height: u32, scale: f64) -> (u32, u32) {
    let w = (width as f64 * scale).floor() as u32;
    let h = (height as f64 * scale).floor() as u32;
    (w.max(1), h.max(1))
}

/// Normalized record → pixel rectangle. No clamping.
pub fn denormalize(record: &LabelRecord, width: u32, height: u32) -> PixelRect {
    let w_px = width as f64;
    let h_px = height as f64;
    let b = &record.bbox;
    PixelRect::new(
        (b.cx - b.w / 2.0) * w_px,
        (b.cy - b.h / 2.0) * h_px,
        (b.cx + b.w / 2.0) * w_px,
        (b.cy + b.h / 2.0) * h_px,
    )
}

/// Pixel rectangle → canvas rectangle: `offset + floor(p * scale)` per axis.
///
/// Results outside the `i32` range saturate; NaN maps to the offset.
pub fn to_display(rect: &PixelRect, transform: &DisplayTransform) -> DisplayRect {
    let map = |p: f64, offset: u32| {
        let d = offset as f64 + (p * transform.scale).floor();
        if d.is_nan() {
            offset as i32
        } else {
            d.clamp(i32::MIN as f64, i32::MAX as f64) as i32
        }
    };
    DisplayRect::new(
        map(rect.x1, transform.offset_x),
        map(rect.y1, transform.offset_y),
        map(rect.x2, transform.offset_x),
        map(rect.y2, transform.offset_y),
    )
}

/// Canvas rectangle → pixel rectangle: `(d - offset) / scale` per axis.
pub fn to_original(rect: &DisplayRect, transform: &DisplayTransform) -> PixelRect {
    let map = |d: i32, offset: u32| (d as f64 - offset as f64) / transform.scale;
    PixelRect::new(
        map(rect.x1, transform.offset_x),
        map(rect.y1, transform.offset_y),
        map(rect.x2, transform.offset_x),
        map(rect.y2, transform.offset_y),
    )
}

/// Pixel rectangle → normalized record.
///
/// Clamps `x1` to `[0, W-1]`, `x2` to `[1, W]` (same for y), swaps reversed
/// corners, widens anything thinner than one pixel, then divides by the image
/// size. Never fails.
pub fn normalize(class_id: ClassId, rect: &PixelRect, width: u32, height: u32) -> LabelRecord {
    let w_px = width.max(1) as f64;
    let h_px = height.max(1) as f64;

    let (x1, x2) = clamp_span(rect.x1, rect.x2, w_px);
    let (y1, y2) = clamp_span(rect.y1, rect.y2, h_px);

    let w = x2 - x1;
    let h = y2 - y1;
    let cx = x1 + w / 2.0;
    let cy = y1 + h / 2.0;

    LabelRecord::new(
        class_id,
        NormalizedBox::new(cx / w_px, cy / h_px, w / w_px, h / h_px),
    )
}

fn clamp_span(lo: f64, hi: f64, limit: f64) -> (f64, f64) {
    let lo = lo.max(0.0).min(limit - 1.0);
    let hi = hi.max(1.0).min(limit);
    let (lo, hi) = if hi < lo { (hi, lo) } else { (lo, hi) };

    if hi - lo >= 1.0 {
        return (lo, hi);
    }
    let lo = lo.min(limit - 1.0).max(0.0);
    (lo, lo + 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_valid() {
        let rec = LabelRecord::parse_line("2 0.5 0.25 0.3 0.1").unwrap();
        assert_eq!(rec.class_id, ClassId::new(2));
        assert_eq!(rec.bbox, NormalizedBox::new(0.5, 0.25, 0.3, 0.1));
    }

    #[test]
    fn test_parse_line_rejects_wrong_token_count() {
        assert!(LabelRecord::parse_line("1 0.5 0.5").is_none());
        assert!(LabelRecord::parse_line("1 0.5 0.5 0.1 0.1 0.9").is_none());
        assert!(LabelRecord::parse_line("").is_none());
    }

    #[test]
    fn test_parse_line_rejects_bad_types() {
        assert!(LabelRecord::parse_line("a 0.5 0.5 0.1 0.1").is_none());
        assert!(LabelRecord::parse_line("-1 0.5 0.5 0.1 0.1").is_none());
        assert!(LabelRecord::parse_line("1.5 0.5 0.5 0.1 0.1").is_none());
        assert!(LabelRecord::parse_line("1 0.5 x 0.1 0.1").is_none());
    }

    #[test]
    fn test_display_six_decimals() {
        let rec = LabelRecord::new(ClassId::new(3), NormalizedBox::new(0.2, 0.5, 0.2, 0.6));
        assert_eq!(rec.to_string(), "3 0.200000 0.500000 0.200000 0.600000");
    }

    #[test]
    fn test_fit_downscales_and_centers() {
        let t = DisplayTransform::fit(2560, 800, 1280, 800).unwrap();
        assert_eq!(t.scale(), 0.5);
        assert_eq!(t.display_size(2560, 800), (1280, 400));
        assert_eq!(t.offset_x(), 0);
        assert_eq!(t.offset_y(), 200);
    }

    #[test]
    fn test_fit_never_upscales() {
        let t = DisplayTransform::fit(100, 50, 1280, 800).unwrap();
        assert_eq!(t.scale(), 1.0);
        assert_eq!(t.offset_x(), 590);
        assert_eq!(t.offset_y(), 375);
    }

    #[test]
    fn test_fit_rejects_zero_size() {
        assert!(DisplayTransform::fit(0, 10, 1280, 800).is_err());
        assert!(DisplayTransform::fit(10, 10, 0, 800).is_err());
    }

    #[test]
    fn test_new_rejects_bad_scale() {
        assert!(DisplayTransform::new(0.0, 0, 0).is_none());
        assert!(DisplayTransform::new(1.5, 0, 0).is_none());
        assert!(DisplayTransform::new(f64::NAN, 0, 0).is_none());
        assert!(DisplayTransform::new(0.25, 3, 4).is_some());
    }

    #[test]
    fn test_point_clamp_with_oversized_canvas() {
        let p = DisplayPoint::new(10, -4).clamped(3_000_000_000, 800);
        assert_eq!(p, DisplayPoint::new(10, 0));
    }

    #[test]
    fn test_display_rect_ordered() {
        let r = DisplayRect::new(300, 400, 100, 100).ordered();
        assert_eq!(r, DisplayRect::new(100, 100, 300, 400));
    }

    #[test]
    fn test_display_rect_clamped() {
        let r = DisplayRect::new(-5, 10, 2000, 900).clamped(1280, 800);
        assert_eq!(r, DisplayRect::new(0, 10, 1280, 800));
    }

    #[test]
    fn test_to_display_saturates_huge_coordinates() {
        let t = DisplayTransform::new(1.0, 590, 375).unwrap();
        let r = to_display(&PixelRect::new(0.0, 0.0, f64::INFINITY, 1e12), &t);
        assert_eq!(r, DisplayRect::new(590, 375, i32::MAX, i32::MAX));

        let r = to_display(&PixelRect::new(f64::NEG_INFINITY, f64::NAN, 10.0, 10.0), &t);
        assert_eq!(r, DisplayRect::new(i32::MIN, 375, 600, 385));
    }

    #[test]
    fn test_clamp_span_widens_interior_point() {
        assert_eq!(clamp_span(500.0, 500.0, 1000.0), (500.0, 501.0));
        assert_eq!(clamp_span(1000.0, 1000.0, 1000.0), (999.0, 1000.0));
        assert_eq!(clamp_span(0.0, 0.0, 1000.0), (0.0, 1.0));
    }
}
