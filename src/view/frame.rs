//! Frame abstraction for drawing primitives
//!
//! Provides a simple, safe API for pixel buffer operations instead of
//! direct buffer indexing scattered throughout rendering code.

use crate::model::Rect;

/// A frame buffer wrapper providing safe drawing primitives.
///
/// Rectangles passed to drawing methods are relative to the current origin,
/// so a container can shift the origin to its own top-left corner and let
/// children draw in container coordinates. Out-of-bounds operations are
/// safely clipped.
pub struct Frame<'a> {
    buffer: &'a mut [u32],
    width: usize,
    height: usize,
    origin: (i32, i32),
}

impl<'a> Frame<'a> {
    /// Create a new frame from a mutable pixel buffer
    ///
    /// If the buffer is smaller than width*height, dimensions are adjusted
    /// to match the actual buffer size to prevent out-of-bounds access.
    pub fn new(buffer: &'a mut [u32], width: usize, height: usize) -> Self {
        let expected_size = width * height;
        let actual_size = buffer.len();

        let (width, height) = if actual_size < expected_size && width > 0 {
            // Buffer is smaller than expected - recalculate height to fit
            let adjusted_height = actual_size / width;
            (width, adjusted_height)
        } else {
            (width, height)
        };

        Self {
            buffer,
            width,
            height,
            origin: (0, 0),
        }
    }

    /// Get the frame width in pixels
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the frame height in pixels
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Current drawing origin in buffer pixels
    #[inline]
    pub fn origin(&self) -> (i32, i32) {
        self.origin
    }

    pub fn set_origin(&mut self, origin: (i32, i32)) {
        self.origin = origin;
    }

    /// Read a single pixel in buffer coordinates (ignores the origin)
    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x < self.width && y < self.height {
            self.buffer.get(y * self.width + x).copied()
        } else {
            None
        }
    }

    /// Clear the entire buffer with a solid color
    #[inline]
    pub fn clear(&mut self, color: u32) {
        self.buffer.fill(color);
    }

    /// Buffer-space pixel span covered by `rect`, clipped to the frame
    fn clip(&self, rect: Rect) -> Option<(usize, usize, usize, usize)> {
        let rect = rect.translate(self.origin.0, self.origin.1);
        let x0 = rect.x.max(0) as usize;
        let y0 = rect.y.max(0) as usize;
        let x1 = (rect.right().max(0) as usize).min(self.width);
        let y1 = (rect.bottom().max(0) as usize).min(self.height);

        (x0 < x1 && y0 < y1).then_some((x0, y0, x1, y1))
    }

    /// Fill a rectangle with a solid color (no alpha blending)
    pub fn fill_rect(&mut self, rect: Rect, color: u32) {
        let Some((x0, y0, x1, y1)) = self.clip(rect) else {
            return;
        };

        for y in y0..y1 {
            let row_start = y * self.width;
            self.buffer[row_start + x0..row_start + x1].fill(color);
        }
    }

    /// Draw a 1px rectangle outline
    pub fn stroke_rect(&mut self, rect: Rect, color: u32) {
        if rect.width <= 0 || rect.height <= 0 {
            return;
        }
        self.fill_rect(Rect::new(rect.x, rect.y, rect.width, 1), color);
        self.fill_rect(Rect::new(rect.x, rect.bottom() - 1, rect.width, 1), color);
        self.fill_rect(Rect::new(rect.x, rect.y, 1, rect.height), color);
        self.fill_rect(Rect::new(rect.right() - 1, rect.y, 1, rect.height), color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_rect_clips_to_frame() {
        let mut buffer = vec![0u32; 4 * 3];
        let mut frame = Frame::new(&mut buffer, 4, 3);

        frame.fill_rect(Rect::new(-2, 1, 4, 10), 0xFFFF0000);

        assert_eq!(frame.pixel(0, 0), Some(0));
        assert_eq!(frame.pixel(0, 1), Some(0xFFFF0000));
        assert_eq!(frame.pixel(1, 2), Some(0xFFFF0000));
        assert_eq!(frame.pixel(2, 1), Some(0));
    }

    #[test]
    fn test_origin_shifts_drawing() {
        let mut buffer = vec![0u32; 4 * 4];
        let mut frame = Frame::new(&mut buffer, 4, 4);
        frame.set_origin((2, 2));

        frame.fill_rect(Rect::new(0, 0, 1, 1), 0xFF00FF00);

        assert_eq!(frame.pixel(2, 2), Some(0xFF00FF00));
        assert_eq!(frame.pixel(0, 0), Some(0));
    }

    #[test]
    fn test_short_buffer_shrinks_height() {
        let mut buffer = vec![0u32; 8];
        let frame = Frame::new(&mut buffer, 4, 10);
        assert_eq!(frame.height(), 2);
    }
}
