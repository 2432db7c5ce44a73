/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Grid width in tiles for every generated floor.
    pub map_width: u32,
    /// Grid height in tiles for every generated floor.
    pub map_height: u32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum rooms per floor. Equal to the attempt count, so the room list
    /// can never overflow.
    pub const MAX_ROOMS: usize = 10;
    /// Maximum monsters per floor. 9 non-entry rooms x 3 spawns leaves headroom.
    pub const MAX_MONSTERS: usize = 32;

    // ===== generation parameters =====
    /// Room placement attempts per floor.
    pub const ROOM_ATTEMPTS: u32 = 10;
    /// Placement attempts per monster before the spawn is skipped.
    pub const PLACEMENT_ATTEMPTS: u32 = 10;
    /// Smallest room edge, in tiles.
    pub const ROOM_MIN_EXTENT: u32 = 3;
    /// Largest room edge, in tiles.
    pub const ROOM_MAX_EXTENT: u32 = 6;
    /// Monster spawn cap per room regardless of depth.
    pub const MAX_SPAWNS_PER_ROOM: u32 = 3;

    // ===== progression parameters =====
    /// Descending past this floor wins the game.
    pub const FINAL_FLOOR: u32 = 10;
    /// Experience required per level: `level * EXP_PER_LEVEL`.
    pub const EXP_PER_LEVEL: u32 = 5;
    /// Chebyshev radius within which a monster chases the player.
    pub const CHASE_RADIUS: u32 = 5;

    // ===== player starting stats =====
    pub const PLAYER_HP: u32 = 20;
    pub const PLAYER_ATTACK: u32 = 5;
    pub const PLAYER_DEFENSE: u32 = 3;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAP_WIDTH: u32 = 40;
    pub const DEFAULT_MAP_HEIGHT: u32 = 24;

    /// Smallest accepted map edge. Dimensions below this are clamped so the
    /// fallback position (1, 1) always exists and generation stays total.
    pub const MIN_MAP_EXTENT: u32 = 3;

    pub fn new() -> Self {
        Self {
            map_width: Self::DEFAULT_MAP_WIDTH,
            map_height: Self::DEFAULT_MAP_HEIGHT,
        }
    }

    /// Builds a config with explicit map dimensions, clamped to
    /// [`Self::MIN_MAP_EXTENT`].
    pub fn with_map_size(map_width: u32, map_height: u32) -> Self {
        Self {
            map_width: map_width.max(Self::MIN_MAP_EXTENT),
            map_height: map_height.max(Self::MIN_MAP_EXTENT),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
