use delve_core::Point;

/// Cost of one orthogonal step.
pub const STRAIGHT_COST: i32 = 10;

/// Cost of one diagonal step (√2 scaled by 10, rounded).
pub const DIAGONAL_COST: i32 = 14;

/// Octile distance between two cells, scaled so that an orthogonal step
/// costs [`STRAIGHT_COST`] and a diagonal step [`DIAGONAL_COST`].
#[inline]
pub fn octile(a: Point, b: Point) -> i32 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    if dx > dy {
        DIAGONAL_COST * dy + STRAIGHT_COST * (dx - dy)
    } else {
        DIAGONAL_COST * dx + STRAIGHT_COST * (dy - dx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn octile_steps() {
        let o = Point::new(0, 0);
        assert_eq!(octile(o, o), 0);
        assert_eq!(octile(o, Point::new(1, 0)), 10);
        assert_eq!(octile(o, Point::new(0, -1)), 10);
        assert_eq!(octile(o, Point::new(1, 1)), 14);
        assert_eq!(octile(o, Point::new(4, 4)), 56);
        assert_eq!(octile(o, Point::new(5, 2)), 14 * 2 + 10 * 3);
        assert_eq!(octile(o, Point::new(-2, 5)), 14 * 2 + 10 * 3);
    }

    #[test]
    fn octile_is_symmetric() {
        let a = Point::new(3, -7);
        let b = Point::new(-4, 2);
        assert_eq!(octile(a, b), octile(b, a));
    }
}
