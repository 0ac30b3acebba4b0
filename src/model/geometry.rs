//! Layout primitives shared by the container, its dividers and panels

/// Rectangle for layout calculations, in integer pixels.
///
/// Child rectangles are expressed in the coordinate space of their parent
/// container (x = 0 is the container's left edge).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge
    #[inline]
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Exclusive bottom edge
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Same rectangle shifted by (dx, dy)
    pub const fn translate(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Whether both dimensions match `other`, ignoring position
    #[inline]
    pub fn same_size(&self, other: &Rect) -> bool {
        self.width == other.width && self.height == other.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_uses_exclusive_upper_bounds() {
        let rect = Rect::new(10, 20, 100, 50);

        assert!(rect.contains(10, 20));
        assert!(rect.contains(109, 69));
        assert!(!rect.contains(110, 40));
        assert!(!rect.contains(50, 70));
        assert!(!rect.contains(9, 40));
    }

    #[test]
    fn test_translate_keeps_size() {
        let rect = Rect::new(5, 0, 10, 500).translate(100, 7);
        assert_eq!(rect, Rect::new(105, 7, 10, 500));
        assert!(rect.same_size(&Rect::new(0, 0, 10, 500)));
    }
}
