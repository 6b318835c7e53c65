//! Squarified treemap layout.
//!
//! Tiles keep the input order. Each strip takes items while doing so does
//! not make the worst aspect ratio in the strip any worse, then the
//! remaining items fill what is left of the rectangle.

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl Rect {
    /// Creates a rectangle.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Area of the rectangle.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Centre point.
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    fn aspect(&self) -> f64 {
        (self.width / self.height).max(self.height / self.width)
    }
}

/// Lays out `values` as tiles filling `bounds`, areas proportional to value.
///
/// Non-positive values get no tile, so the result may be shorter than the
/// input; callers should filter first when tiles must line up with labels.
pub fn squarify(values: &[f64], bounds: Rect) -> Vec<Rect> {
    let positive: Vec<f64> = values.iter().copied().filter(|v| *v > 0.0).collect();
    let total: f64 = positive.iter().sum();
    if total <= 0.0 || bounds.area() <= 0.0 {
        return Vec::new();
    }

    let scale = bounds.area() / total;
    let sizes: Vec<f64> = positive.iter().map(|v| v * scale).collect();

    let mut tiles = Vec::with_capacity(sizes.len());
    let mut remaining = sizes.as_slice();
    let mut free = bounds;

    while !remaining.is_empty() {
        if remaining.len() == 1 {
            tiles.extend(layout_strip(remaining, free));
            break;
        }

        let mut take = 1;
        while take < remaining.len()
            && worst_ratio(&remaining[..take], free) >= worst_ratio(&remaining[..=take], free)
        {
            take += 1;
        }

        let (strip, rest) = remaining.split_at(take);
        tiles.extend(layout_strip(strip, free));
        free = leftover(strip, free);
        remaining = rest;
    }

    tiles
}

fn layout_strip(sizes: &[f64], rect: Rect) -> Vec<Rect> {
    let covered: f64 = sizes.iter().sum();
    let mut tiles = Vec::with_capacity(sizes.len());

    if rect.width >= rect.height {
        // column along the left edge
        let width = covered / rect.height;
        let mut y = rect.y;
        for size in sizes {
            let height = size / width;
            tiles.push(Rect::new(rect.x, y, width, height));
            y += height;
        }
    } else {
        // row along the top edge
        let height = covered / rect.width;
        let mut x = rect.x;
        for size in sizes {
            let width = size / height;
            tiles.push(Rect::new(x, rect.y, width, height));
            x += width;
        }
    }

    tiles
}

fn leftover(sizes: &[f64], rect: Rect) -> Rect {
    let covered: f64 = sizes.iter().sum();
    if rect.width >= rect.height {
        let width = covered / rect.height;
        Rect::new(rect.x + width, rect.y, rect.width - width, rect.height)
    } else {
        let height = covered / rect.width;
        Rect::new(rect.x, rect.y + height, rect.width, rect.height - height)
    }
}

fn worst_ratio(sizes: &[f64], rect: Rect) -> f64 {
    layout_strip(sizes, rect)
        .iter()
        .map(Rect::aspect)
        .fold(0.0, f64::max)
}
