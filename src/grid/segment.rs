/// Integer grid point. `y` grows with the row index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Point { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Unit-length wall between two adjacent grid points, `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    /// (w, h) - (w + 1, h)
    pub fn horizontal(w: usize, h: usize) -> Self {
        Segment {
            start: Point::new(w, h),
            end: Point::new(w + 1, h),
        }
    }

    /// (w, h) - (w, h + 1)
    pub fn vertical(w: usize, h: usize) -> Self {
        Segment {
            start: Point::new(w, h),
            end: Point::new(w, h + 1),
        }
    }

    pub fn orientation(&self) -> Orientation {
        if self.start.y == self.end.y {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_orientation() {
        let h = Segment::horizontal(2, 5);
        assert_eq!(h.start, Point::new(2, 5));
        assert_eq!(h.end, Point::new(3, 5));
        assert_eq!(h.orientation(), Orientation::Horizontal);

        let v = Segment::vertical(2, 5);
        assert_eq!(v.end, Point::new(2, 6));
        assert_eq!(v.orientation(), Orientation::Vertical);
    }
}
