use delve_core::Point;

/// The eight unit offsets in the fixed expansion order: row by row from
/// `dy = -1`, each row from `dx = -1`.
pub const OFFSETS_8: [Point; 8] = [
    Point::new(-1, -1),
    Point::new(0, -1),
    Point::new(1, -1),
    Point::new(-1, 0),
    Point::new(1, 0),
    Point::new(-1, 1),
    Point::new(0, 1),
    Point::new(1, 1),
];

/// Reusable neighbor buffer.
///
/// Enumeration order never depends on hashing, so searches that expand
/// neighbors through this helper are deterministic.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Return 8-directional neighbors of `p`, keeping only those for which
    /// `keep` returns `true`.
    pub fn all(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        for d in OFFSETS_8 {
            let n = p + d;
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_excludes_center_and_keeps_order() {
        let mut nb = Neighbors::new();
        let p = Point::new(5, 5);
        let got = nb.all(p, |_| true).to_vec();
        assert_eq!(got.len(), 8);
        assert!(!got.contains(&p));
        assert_eq!(got[0], Point::new(4, 4));
        assert_eq!(got[7], Point::new(6, 6));
    }

    #[test]
    fn all_filters() {
        let mut nb = Neighbors::new();
        let got = nb.all(Point::new(0, 0), |n| n.x >= 0 && n.y >= 0);
        assert_eq!(got, &[Point::new(1, 0), Point::new(0, 1), Point::new(1, 1)]);
    }
}
