// Viewport for scrolling through buffer

#[derive(Debug)]
pub struct Viewport {
    pub offset_line: usize,
    pub offset_col: usize,
    pub width: usize,
    pub height: usize,
}

impl Viewport {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            offset_line: 0,
            offset_col: 0,
            width,
            height,
        }
    }

    /// Scrolls so that the given position sits in the middle of the view.
    /// Columns only scroll when the position would otherwise be hidden.
    pub fn center_on(&mut self, line: usize, col: usize) {
        self.offset_line = line.saturating_sub(self.height / 2);

        if col < self.offset_col || col >= self.offset_col + self.width {
            self.offset_col = col.saturating_sub(self.width / 2);
        }
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(80, 24)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_on_line() {
        let mut viewport = Viewport::new(80, 20);
        viewport.center_on(100, 0);
        assert_eq!(viewport.offset_line, 90);
        viewport.center_on(105, 0);
        assert_eq!(viewport.offset_line, 95);
    }

    #[test]
    fn test_center_near_top_saturates() {
        let mut viewport = Viewport::new(80, 20);
        viewport.center_on(50, 0);
        viewport.center_on(3, 0);
        assert_eq!(viewport.offset_line, 0);
    }

    #[test]
    fn test_center_keeps_visible_column() {
        let mut viewport = Viewport::new(40, 10);
        viewport.center_on(0, 30);
        assert_eq!(viewport.offset_col, 0);
        viewport.center_on(0, 100);
        assert_eq!(viewport.offset_col, 80);
    }

    #[test]
    fn test_resize() {
        let mut viewport = Viewport::new(10, 10);
        viewport.resize(120, 40);
        assert_eq!(viewport.width, 120);
        assert_eq!(viewport.height, 40);
    }
}
