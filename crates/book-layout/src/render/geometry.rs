/// A rectangular area in points, origin at the bottom-left of the page
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (bottom edge)
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Shrink by `d` on every side, never below zero size
    pub fn inset(&self, d: f32) -> Rect {
        Rect::new(
            self.x + d,
            self.y + d,
            (self.width - 2.0 * d).max(0.0),
            (self.height - 2.0 * d).max(0.0),
        )
    }

    /// Split into `n` equal columns separated by `gap`
    pub fn columns(&self, n: usize, gap: f32) -> Vec<Rect> {
        if n == 0 {
            return Vec::new();
        }
        let width = ((self.width - gap * (n - 1) as f32) / n as f32).max(0.0);
        (0..n)
            .map(|i| Rect::new(self.x + i as f32 * (width + gap), self.y, width, self.height))
            .collect()
    }

    /// Split into `n` equal rows separated by `gap`, top row first
    pub fn rows(&self, n: usize, gap: f32) -> Vec<Rect> {
        if n == 0 {
            return Vec::new();
        }
        let height = ((self.height - gap * (n - 1) as f32) / n as f32).max(0.0);
        (0..n)
            .map(|i| {
                let top = self.top() - i as f32 * (height + gap);
                Rect::new(self.x, top - height, self.width, height)
            })
            .collect()
    }
}

/// Scale factor that fits `src` inside `target`, preserving aspect ratio
pub fn fit_scale(src_width: f32, src_height: f32, target_width: f32, target_height: f32) -> f32 {
    if src_width <= 0.0 || src_height <= 0.0 {
        return 0.0;
    }
    let scale_w = target_width / src_width;
    let scale_h = target_height / src_height;
    scale_w.min(scale_h)
}

/// Rect of the scaled source, centered in `target`
pub fn fit_centered(src_width: f32, src_height: f32, target: &Rect) -> Rect {
    let scale = fit_scale(src_width, src_height, target.width, target.height);
    let width = src_width * scale;
    let height = src_height * scale;
    Rect::new(
        target.x + (target.width - width) / 2.0,
        target.y + (target.height - height) / 2.0,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_fit() {
        // Width-limited
        let scale = fit_scale(800.0, 600.0, 400.0, 400.0);
        assert!((scale - 0.5).abs() < 0.001);

        // Height-limited
        let scale = fit_scale(400.0, 800.0, 400.0, 400.0);
        assert!((scale - 0.5).abs() < 0.001);

        assert_eq!(fit_scale(0.0, 10.0, 100.0, 100.0), 0.0);
    }

    #[test]
    fn test_fit_centered() {
        let target = Rect::new(10.0, 20.0, 100.0, 50.0);
        let placed = fit_centered(200.0, 200.0, &target);
        assert_eq!(placed.width, 50.0);
        assert_eq!(placed.height, 50.0);
        assert_eq!(placed.x, 35.0);
        assert_eq!(placed.y, 20.0);
    }

    #[test]
    fn test_columns_and_rows() {
        let area = Rect::new(0.0, 0.0, 320.0, 200.0);

        let cols = area.columns(3, 10.0);
        assert_eq!(cols.len(), 3);
        assert_eq!(cols[0].width, 100.0);
        assert_eq!(cols[1].x, 110.0);
        assert_eq!(cols[2].right(), 320.0);

        let rows = area.rows(2, 20.0);
        assert_eq!(rows[0].y, 110.0);
        assert_eq!(rows[0].top(), 200.0);
        assert_eq!(rows[1].y, 0.0);
        assert_eq!(rows[1].height, 90.0);
    }
}
