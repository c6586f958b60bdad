// src/dungeon/src/level.rs

use rand::Rng;
use serde::{Deserialize, Serialize};

pub mod rooms;
pub mod tiles;

use crate::config::GameConfig;
use crate::grid::{self, Point};
use crate::level::rooms::{Corridor, Room};
use crate::level::tiles::TileKind;

/// Where `find_position` looks for free cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    /// Empty cells inside generated rooms (whole grid if there are none)
    Room,
    /// Any empty cell of the grid
    Anywhere,
}

/// The static terrain of one level plus the rooms it was carved from.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DungeonMap {
    width: i32,
    height: i32,
    tiles: Vec<TileKind>,
    rooms: Vec<Room>,
    corridors: Vec<Corridor>,
    generation_attempts: u32,
}

impl DungeonMap {
    /// A solid block of wall.
    pub fn new(width: i32, height: i32) -> Self {
        let cells = (width.max(0) * height.max(0)) as usize;
        Self {
            width,
            height,
            tiles: vec![TileKind::Wall; cells],
            rooms: Vec::new(),
            corridors: Vec::new(),
            generation_attempts: 0,
        }
    }

    /// 生成一个新的地牢层级
    pub fn generate<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Self {
        let mut map = Self::new(config.width, config.height);
        map.regenerate(config, rng);
        map
    }

    /// Wipe the grid back to wall and lay out rooms and corridors again.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, config: &GameConfig, rng: &mut R) {
        self.tiles.fill(TileKind::Wall);
        self.rooms.clear();
        self.corridors.clear();

        self.generate_rooms(config, rng);
        self.connect_rooms();
        self.carve_noise_corridors(rng);

        log::debug!(
            "generated {}x{} map: {} rooms in {} attempts, {} corridors",
            self.width,
            self.height,
            self.rooms.len(),
            self.generation_attempts,
            self.corridors.len()
        );
    }

    fn generate_rooms<R: Rng + ?Sized>(&mut self, config: &GameConfig, rng: &mut R) {
        let target = grid::random_in(rng, config.rooms.min, config.rooms.max).max(0) as usize;
        let mut attempts = 0;

        while self.rooms.len() < target && attempts < config.room_attempts {
            attempts += 1;
            let room = Room::new(
                grid::random_in(rng, 1, self.width - GameConfig::ROOM_WINDOW),
                grid::random_in(rng, 1, self.height - GameConfig::ROOM_WINDOW),
                grid::random_in(rng, config.room_size.min, config.room_size.max),
                grid::random_in(rng, config.room_size.min, config.room_size.max),
            );
            if self.can_place_room(&room) {
                self.carve_room(room);
            }
        }

        self.generation_attempts = attempts;
    }

    /// True when `room` keeps a wall cell between itself and every placed room.
    pub fn can_place_room(&self, room: &Room) -> bool {
        !self.rooms.iter().any(|other| room.intersects(other))
    }

    /// Carve `room` to empty floor and remember it for placement.
    pub fn carve_room(&mut self, room: Room) {
        for (x, y) in room.cells() {
            self.set_tile(x, y, TileKind::Empty);
        }
        self.rooms.push(room);
    }

    /// Chain every room to the closest room generated before it.
    fn connect_rooms(&mut self) {
        for index in 1..self.rooms.len() {
            if let Some(nearest) = self.nearest_predecessor(index) {
                let from = self.rooms[index].center();
                let to = self.rooms[nearest].center();
                self.carve_corridor(from, to);
            }
        }
    }

    /// Index of the room before `index` whose centre is closest to its centre.
    /// Ties go to the earliest room.
    fn nearest_predecessor(&self, index: usize) -> Option<usize> {
        let center = self.rooms[index].center();
        self.rooms[..index]
            .iter()
            .enumerate()
            .min_by_key(|(_, room)| grid::manhattan(center, room.center()))
            .map(|(i, _)| i)
    }

    /// Carve an L-shaped corridor, horizontal leg first.
    pub fn carve_corridor(&mut self, from: Point, to: Point) {
        let corridor = Corridor::new(from, to);
        for &(x, y) in &corridor.tiles {
            self.set_tile(x, y, TileKind::Empty);
        }
        self.corridors.push(corridor);
    }

    /// Two horizontal and two vertical straight corridors across the map.
    ///
    /// The start and end are rolled independently, so a configuration where
    /// the ranges cross yields an empty corridor.
    fn carve_noise_corridors<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for _ in 0..2 {
            let y = grid::random_in(rng, 1, self.height - 2);
            let start = grid::random_in(rng, 1, 15);
            let end = grid::random_in(rng, 25, self.width - 2);
            for x in start..=end {
                self.set_tile(x, y, TileKind::Empty);
            }
        }
        for _ in 0..2 {
            let x = grid::random_in(rng, 1, self.width - 2);
            let start = grid::random_in(rng, 1, 10);
            let end = grid::random_in(rng, 14, self.height - 2);
            for y in start..=end {
                self.set_tile(x, y, TileKind::Empty);
            }
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.in_bounds(x, y)
            .then(|| (y * self.width + x) as usize)
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        grid::in_bounds(x, y, self.width, self.height)
    }

    /// Anything outside the grid reads as wall.
    pub fn tile(&self, x: i32, y: i32) -> TileKind {
        self.index(x, y)
            .map(|i| self.tiles[i])
            .unwrap_or(TileKind::Wall)
    }

    /// Writes outside the grid are ignored.
    pub fn set_tile(&mut self, x: i32, y: i32, kind: TileKind) {
        if let Some(i) = self.index(x, y) {
            self.tiles[i] = kind;
        }
    }

    /// Pick a uniformly random empty cell in `scope` that passes `predicate`.
    ///
    /// Returns `None` when nothing qualifies; callers treat that as "skip this
    /// object", never as a failure.
    pub fn find_position<R: Rng + ?Sized>(
        &self,
        scope: Scope,
        predicate: Option<&dyn Fn(Point) -> bool>,
        rng: &mut R,
    ) -> Option<Point> {
        let mut candidates: Vec<Point> = match scope {
            Scope::Room if !self.rooms.is_empty() => self
                .rooms
                .iter()
                .flat_map(|room| room.cells())
                .filter(|&(x, y)| self.tile(x, y) == TileKind::Empty)
                .collect(),
            _ => self
                .positions()
                .filter(|&(x, y)| self.tile(x, y) == TileKind::Empty)
                .collect(),
        };

        if let Some(accept) = predicate {
            candidates.retain(|&p| accept(p));
        }

        if candidates.is_empty() {
            return None;
        }
        let pick = grid::random_in(rng, 0, candidates.len() as i32 - 1);
        Some(candidates[pick as usize])
    }

    /// All coordinates of the grid, row by row.
    pub fn positions(&self) -> impl Iterator<Item = Point> + use<> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }

    /// The grid as rows of tiles, top row first.
    pub fn rows(&self) -> Vec<Vec<TileKind>> {
        if self.width <= 0 {
            return Vec::new();
        }
        self.tiles
            .chunks(self.width as usize)
            .map(|row| row.to_vec())
            .collect()
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn corridors(&self) -> &[Corridor] {
        &self.corridors
    }

    /// Room placement attempts used by the last generation.
    pub fn generation_attempts(&self) -> u32 {
        self.generation_attempts
    }
}
