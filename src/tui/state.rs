/// Smallest number of commits the chart will zoom in to.
pub const MIN_WINDOW: usize = 2;

/// Which slice of the series is on screen, as commit indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub start: usize,
    pub len: usize,
    total: usize,
}

impl Viewport {
    pub fn full(total: usize) -> Self {
        Self { start: 0, len: total, total }
    }

    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn is_full(&self) -> bool {
        self.len == self.total
    }

    /// Halve the window, keeping its right edge.
    pub fn zoom_in(&mut self) {
        let len = (self.len / 2).max(MIN_WINDOW).min(self.total);
        self.start = self.end() - len;
        self.len = len;
    }

    /// Double the window, keeping its right edge where possible.
    pub fn zoom_out(&mut self) {
        let len = self.len.saturating_mul(2).min(self.total);
        let end = self.end().max(len);
        self.start = end - len;
        self.len = len;
    }

    pub fn pan_left(&mut self, step: usize) {
        self.start = self.start.saturating_sub(step);
    }

    pub fn pan_right(&mut self, step: usize) {
        self.start = (self.start + step).min(self.total - self.len);
    }

    pub fn reset(&mut self) {
        *self = Self::full(self.total);
    }
}

pub struct TuiState {
    pub viewport: Viewport,
    pub show_help: bool,
}

impl TuiState {
    pub fn new(total: usize) -> Self {
        Self {
            viewport: Viewport::full(total),
            show_help: false,
        }
    }

    /// Pan by a tenth of the visible window, at least one commit.
    pub fn pan_step(&self) -> usize {
        (self.viewport.len / 10).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_in_keeps_right_edge() {
        let mut v = Viewport::full(100);
        v.zoom_in();
        assert_eq!((v.start, v.len), (50, 50));
        v.zoom_in();
        assert_eq!((v.start, v.len), (75, 25));
    }

    #[test]
    fn zoom_in_stops_at_minimum() {
        let mut v = Viewport::full(3);
        for _ in 0..5 {
            v.zoom_in();
        }
        assert_eq!((v.start, v.len), (1, MIN_WINDOW));
    }

    #[test]
    fn single_commit_cannot_zoom() {
        let mut v = Viewport::full(1);
        v.zoom_in();
        assert_eq!((v.start, v.len), (0, 1));
        v.pan_right(5);
        assert_eq!(v.start, 0);
    }

    #[test]
    fn zoom_out_restores_full_range() {
        let mut v = Viewport::full(100);
        v.zoom_in();
        v.zoom_in();
        v.pan_left(60);
        assert_eq!((v.start, v.len), (15, 25));
        v.zoom_out();
        assert_eq!((v.start, v.len), (0, 50));
        v.zoom_out();
        v.zoom_out();
        assert!(v.is_full());
    }

    #[test]
    fn pan_is_clamped() {
        let mut v = Viewport::full(10);
        v.zoom_in();
        v.pan_right(100);
        assert_eq!(v.end(), 10);
        v.pan_left(100);
        assert_eq!(v.start, 0);
        v.reset();
        assert!(v.is_full());
    }
}
