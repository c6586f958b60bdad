//! Pure geometry and random helpers shared by map generation and entity AI.

use rand::Rng;

/// Grid coordinate `(x, y)`
pub type Point = (i32, i32);

/// Cardinal steps in the order enemies consider them when wandering:
/// down, up, right, left.
pub const CARDINALS: [Point; 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Whether `(x, y)` lies inside a `width` × `height` grid.
pub fn in_bounds(x: i32, y: i32, width: i32, height: i32) -> bool {
    x >= 0 && x < width && y >= 0 && y < height
}

/// 曼哈顿距离
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.0 - b.0).abs() + (a.1 - b.1).abs()
}

/// Chessboard distance, used for "within one cell including diagonals".
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.0 - b.0).abs().max((a.1 - b.1).abs())
}

/// The eight cells surrounding `(x, y)`, row by row from the top-left.
pub fn neighbors(x: i32, y: i32) -> [Point; 8] {
    [
        (x - 1, y - 1),
        (x, y - 1),
        (x + 1, y - 1),
        (x - 1, y),
        (x + 1, y),
        (x - 1, y + 1),
        (x, y + 1),
        (x + 1, y + 1),
    ]
}

/// Uniform integer in `[min, max]`.
///
/// An inverted range collapses to `min` instead of panicking, so generation
/// with odd configurations degrades rather than aborts.
pub fn random_in<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32) -> i32 {
    if max <= min {
        return min;
    }
    rng.random_range(min..=max)
}
