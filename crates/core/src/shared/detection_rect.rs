/// Axis-aligned face bounding box in working-frame (downscaled) coordinates.
///
/// Ephemeral per-frame data: produced by a detector, consumed by the
/// annotator, never retained across iterations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DetectionRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl DetectionRect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn area(&self) -> i64 {
        self.width() as i64 * self.height() as i64
    }

    /// Expands the rect by `padding * width` / `padding * height` on each
    /// side, truncating back to integer coordinates.
    ///
    /// Not clamped to frame bounds: the search region may extend outside the
    /// visible frame, and the rasterizer clips it at draw time.
    pub fn padded(&self, padding: f64) -> DetectionRect {
        let pad_w = padding * self.width() as f64;
        let pad_h = padding * self.height() as f64;
        DetectionRect {
            left: (self.left as f64 - pad_w) as i32,
            top: (self.top as f64 - pad_h) as i32,
            right: (self.right as f64 + pad_w) as i32,
            bottom: (self.bottom as f64 + pad_h) as i32,
        }
    }

    /// Corner coordinates in display space: `(left, top, right, bottom)`
    /// each multiplied by `scale_factor` and truncated to pixels.
    pub fn scaled_corners(&self, scale_factor: f64) -> (i32, i32, i32, i32) {
        (
            (scale_factor * self.left as f64) as i32,
            (scale_factor * self.top as f64) as i32,
            (scale_factor * self.right as f64) as i32,
            (scale_factor * self.bottom as f64) as i32,
        )
    }
}
