//! Pointer position tracking.
//!
//! Translates window pixel coordinates from cursor events into the
//! normalized device range the shaders read: `[-1, 1]` on both axes with
//! `+y` pointing up.

/// Last known pointer position in normalized coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    position: [f32; 2],
    inside: bool,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a cursor move in physical pixels for a window of
    /// `width` x `height` physical pixels.
    ///
    /// Zero-sized windows (minimized) leave the position unchanged.
    pub fn moved(&mut self, pixel_x: f64, pixel_y: f64, width: u32, height: u32) {
        if let Some(pos) = pixel_to_normalized(pixel_x, pixel_y, width, height) {
            self.position = pos;
            self.inside = true;
        }
    }

    /// The cursor left the window: recenter.
    pub fn left(&mut self) {
        self.position = [0.0, 0.0];
        self.inside = false;
    }

    pub fn position(&self) -> [f32; 2] {
        self.position
    }

    pub fn is_inside(&self) -> bool {
        self.inside
    }
}

/// Map pixel coordinates (origin top-left) to `[-1, 1]` with y up.
///
/// Values outside the window are clamped. Returns `None` for a zero-sized
/// window.
pub fn pixel_to_normalized(pixel_x: f64, pixel_y: f64, width: u32, height: u32) -> Option<[f32; 2]> {
    if width == 0 || height == 0 {
        return None;
    }
    let x = (pixel_x / width as f64) * 2.0 - 1.0;
    let y = 1.0 - (pixel_y / height as f64) * 2.0;
    Some([x.clamp(-1.0, 1.0) as f32, y.clamp(-1.0, 1.0) as f32])
}
