use std::fmt;

/// Discrete grid position expressed in tile coordinates.
///
/// The origin is the top-left corner; `y` grows downward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the position displaced by `(dx, dy)`.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Chessboard distance: `max(|dx|, |dy|)`. Adjacency checks use this.
    #[inline]
    pub fn chebyshev_distance(self, other: Self) -> u32 {
        let dx = (self.x - other.x).unsigned_abs();
        let dy = (self.y - other.y).unsigned_abs();
        dx.max(dy)
    }

    /// Taxicab distance: `|dx| + |dy|`. Chase pathing ranks candidates by this.
    #[inline]
    pub fn manhattan_distance(self, other: Self) -> u32 {
        (self.x - other.x).unsigned_abs() + (self.y - other.y).unsigned_abs()
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Terrain category of a single tile.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TileKind {
    /// Solid rock; blocks movement.
    #[default]
    Wall,
    /// Carved, walkable ground.
    Floor,
    /// Walkable exit to the next floor.
    Stairs,
}

impl TileKind {
    /// Whether an entity may stand on this terrain.
    #[inline]
    pub fn is_walkable(self) -> bool {
        matches!(self, TileKind::Floor | TileKind::Stairs)
    }
}

/// One cell of the floor grid.
///
/// `revealed` implements fog-of-war and is monotonic within a floor: once
/// true it never reverts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub kind: TileKind,
    pub revealed: bool,
}

/// Dense row-major grid of tiles, dimensions fixed per floor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileGrid {
    width: u32,
    height: u32,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Creates a grid of unrevealed walls.
    pub fn new(width: u32, height: u32) -> Self {
        let tiles = vec![Tile::default(); (width as usize) * (height as usize)];
        Self {
            width,
            height,
            tiles,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether `position` lies inside the grid.
    #[inline]
    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as u32) < self.width
            && (position.y as u32) < self.height
    }

    #[inline]
    fn index(&self, position: Position) -> usize {
        (position.y as u32 * self.width + position.x as u32) as usize
    }

    /// Returns the tile at `position`, or `None` when out of bounds.
    pub fn tile(&self, position: Position) -> Option<&Tile> {
        if !self.contains(position) {
            return None;
        }
        let index = self.index(position);
        self.tiles.get(index)
    }

    /// Returns the terrain at `position`, or `None` when out of bounds.
    pub fn kind(&self, position: Position) -> Option<TileKind> {
        self.tile(position).map(|tile| tile.kind)
    }

    /// Whether `position` is in bounds and walkable terrain.
    pub fn is_walkable(&self, position: Position) -> bool {
        self.kind(position).is_some_and(TileKind::is_walkable)
    }

    /// Sets the terrain at `position`. Out-of-bounds writes are ignored.
    pub fn set_kind(&mut self, position: Position, kind: TileKind) {
        if !self.contains(position) {
            return;
        }
        let index = self.index(position);
        if let Some(tile) = self.tiles.get_mut(index) {
            tile.kind = kind;
        }
    }

    /// Marks the tile at `position` as revealed. Out-of-bounds writes are
    /// ignored; revealed tiles never revert.
    pub fn reveal(&mut self, position: Position) {
        if !self.contains(position) {
            return;
        }
        let index = self.index(position);
        if let Some(tile) = self.tiles.get_mut(index) {
            tile.revealed = true;
        }
    }

    /// Iterates over every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let width = self.width as i32;
        let height = self.height as i32;
        (0..height).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }
}

/// Axis-aligned rectangle of carved floor, used for generation, visibility,
/// and monster containment checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Room {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Center cell, rounded toward the bottom-right for even extents.
    pub fn center(&self) -> Position {
        Position::new(
            self.x + (self.width / 2) as i32,
            self.y + (self.height / 2) as i32,
        )
    }

    /// Last column inside the room.
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width as i32 - 1
    }

    /// Last row inside the room.
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32 - 1
    }

    /// Whether `position` lies inside the room rectangle.
    pub fn contains(&self, position: Position) -> bool {
        position.x >= self.x
            && position.x <= self.right()
            && position.y >= self.y
            && position.y <= self.bottom()
    }

    /// Inclusive bounding-box overlap: rectangles that merely touch count as
    /// overlapping, which keeps at least one wall cell between accepted rooms.
    pub fn intersects(&self, other: &Room) -> bool {
        self.x <= other.x + other.width as i32
            && other.x <= self.x + self.width as i32
            && self.y <= other.y + other.height as i32
            && other.y <= self.y + self.height as i32
    }
}
