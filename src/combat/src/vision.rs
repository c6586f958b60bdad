//! Line of sight for enemy awareness
use dungeon::Point;

/// Integer line tracing against a blocking predicate
pub struct VisionSystem;

impl VisionSystem {
    /// Cells visited by a 4-connected Bresenham trace from `from` to `to`,
    /// both endpoints included. The trace never steps diagonally, so it has
    /// exactly `1 + |dx| + |dy|` cells.
    pub fn trace(from: Point, to: Point) -> Vec<Point> {
        let (mut x, mut y) = from;
        let dx = (to.0 - from.0).abs();
        let dy = (to.1 - from.1).abs();
        let sx = if to.0 > from.0 { 1 } else { -1 };
        let sy = if to.1 > from.1 { 1 } else { -1 };

        let mut error = dx - dy;
        let (dx2, dy2) = (dx * 2, dy * 2);
        let steps = 1 + dx + dy;

        let mut cells = Vec::with_capacity(steps as usize);
        for _ in 0..steps {
            cells.push((x, y));
            if error > 0 {
                x += sx;
                error -= dy2;
            } else {
                y += sy;
                error += dx2;
            }
        }
        cells
    }

    /// False as soon as any traced cell is blocked, endpoints included.
    pub fn has_line_of_sight(from: Point, to: Point, is_blocked: &dyn Fn(i32, i32) -> bool) -> bool {
        Self::trace(from, to)
            .into_iter()
            .all(|(x, y)| !is_blocked(x, y))
    }
}
