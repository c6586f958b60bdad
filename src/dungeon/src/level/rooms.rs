//src/dungeon/src/level/rooms.rs
use serde::{Deserialize, Serialize};

use crate::grid::Point;

/// Axis-aligned rectangle carved out of the wall grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Room {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// 获取房间中心点
    pub fn center(&self) -> Point {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Overlap test that also treats touching rooms, or rooms separated by
    /// less than one wall cell, as overlapping.
    pub fn intersects(&self, other: &Self) -> bool {
        self.x < other.x + other.width + 1
            && self.x + self.width + 1 > other.x
            && self.y < other.y + other.height + 1
            && self.y + self.height + 1 > other.y
    }

    pub fn contains(&self, (x, y): Point) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// Every cell of the room, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        (self.y..self.y + self.height)
            .flat_map(move |y| (self.x..self.x + self.width).map(move |x| (x, y)))
    }
}

/// Single-cell-wide path between two points, horizontal leg first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corridor {
    pub start: Point,
    pub end: Point,
    pub tiles: Vec<Point>,
}

impl Corridor {
    pub fn new(start: Point, end: Point) -> Self {
        let tiles = Self::create_corridor_tiles(start, end);
        Self { start, end, tiles }
    }

    /// 创建连接两个点的走廊瓦片 (both endpoints included)
    fn create_corridor_tiles(start: Point, end: Point) -> Vec<Point> {
        let mut tiles = vec![start];
        let (mut x, mut y) = start;
        let (end_x, end_y) = end;

        while x != end_x {
            x += if end_x > x { 1 } else { -1 };
            tiles.push((x, y));
        }

        while y != end_y {
            y += if end_y > y { 1 } else { -1 };
            tiles.push((x, y));
        }

        tiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn center_rounds_down() {
        assert_eq!(Room::new(2, 3, 5, 4).center(), (4, 5));
    }

    #[test]
    fn margin_counts_as_overlap() {
        let a = Room::new(1, 1, 4, 4);
        // shares a border column with `a`
        assert!(a.intersects(&Room::new(5, 1, 3, 3)));
        // one wall cell between them
        assert!(!a.intersects(&Room::new(6, 1, 3, 3)));
        assert!(!a.intersects(&Room::new(1, 6, 3, 3)));
    }

    #[test]
    fn cells_cover_the_rectangle() {
        let room = Room::new(2, 2, 3, 2);
        let cells: Vec<_> = room.cells().collect();
        assert_eq!(cells, vec![(2, 2), (3, 2), (4, 2), (2, 3), (3, 3), (4, 3)]);
        assert!(cells.iter().all(|&p| room.contains(p)));
    }

    #[test]
    fn corridor_is_l_shaped() {
        let corridor = Corridor::new((1, 1), (3, 3));
        assert_eq!(
            corridor.tiles,
            vec![(1, 1), (2, 1), (3, 1), (3, 2), (3, 3)]
        );
    }

    #[test]
    fn corridor_to_itself_is_one_cell() {
        assert_eq!(Corridor::new((4, 4), (4, 4)).tiles, vec![(4, 4)]);
    }
}
