use std::fmt;

use crate::config::GameConfig;
use crate::state::Position;

/// Integer hit-point meter tracked per combatant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Meter {
    pub current: u32,
    pub maximum: u32,
}

impl Meter {
    pub fn new(current: u32, maximum: u32) -> Self {
        Self { current, maximum }
    }

    /// Creates a meter filled to `maximum`.
    pub fn full(maximum: u32) -> Self {
        Self {
            current: maximum,
            maximum,
        }
    }

    /// Subtracts `amount`, clamping at zero.
    #[inline]
    pub fn deplete(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.current == 0
    }
}

/// Unique identifier for a monster within its floor.
///
/// Allocated sequentially in spawn order; a fresh floor starts over at zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterId(pub u32);

impl fmt::Display for MonsterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monster archetype: the fixed weak/medium/strong roster.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MonsterKind {
    /// Weak: low damage, folds quickly.
    #[default]
    Goblin,
    /// Medium: even trade against a fresh player.
    Skeleton,
    /// Strong: hits through armor, worth the most experience.
    Orc,
}

impl MonsterKind {
    /// All archetypes, in spawn-table order.
    pub const ALL: [MonsterKind; 3] =
        [MonsterKind::Goblin, MonsterKind::Skeleton, MonsterKind::Orc];

    /// Base stat line before any depth bonus.
    pub const fn profile(self) -> MonsterProfile {
        match self {
            MonsterKind::Goblin => MonsterProfile {
                hp: 5,
                attack: 3,
                defense: 1,
                exp_reward: 2,
            },
            MonsterKind::Skeleton => MonsterProfile {
                hp: 8,
                attack: 4,
                defense: 2,
                exp_reward: 4,
            },
            MonsterKind::Orc => MonsterProfile {
                hp: 12,
                attack: 6,
                defense: 3,
                exp_reward: 7,
            },
        }
    }
}

/// Base stats for a monster archetype.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterProfile {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub exp_reward: u32,
}

/// Explicit liveness tag.
///
/// Dead monsters may linger in the floor collection but never act, block
/// movement, or render; every consumer checks the tag instead of re-deriving
/// it from hit points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Liveness {
    #[default]
    Alive,
    Dead,
}

/// One hostile entity on the current floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterState {
    pub id: MonsterId,
    pub kind: MonsterKind,
    pub position: Position,
    pub hp: Meter,
    pub attack: u32,
    pub defense: u32,
    pub exp_reward: u32,
    /// Flipped when the containing room is revealed; hidden monsters never act.
    pub visible: bool,
    pub liveness: Liveness,
}

impl MonsterState {
    /// Builds a monster from its archetype, applying the floor depth bonus:
    /// +2x bonus hp, +bonus attack/defense/exp reward.
    pub fn spawn(id: MonsterId, kind: MonsterKind, position: Position, depth_bonus: u32) -> Self {
        let profile = kind.profile();
        Self {
            id,
            kind,
            position,
            hp: Meter::full(profile.hp + 2 * depth_bonus),
            attack: profile.attack + depth_bonus,
            defense: profile.defense + depth_bonus,
            exp_reward: profile.exp_reward + depth_bonus,
            visible: false,
            liveness: Liveness::Alive,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.liveness == Liveness::Alive
    }

    /// Applies damage and updates the liveness tag.
    pub fn take_damage(&mut self, amount: u32) {
        self.hp.deplete(amount);
        if self.hp.is_empty() {
            self.liveness = Liveness::Dead;
        }
    }
}

/// Player combat statistics and progression.
///
/// Carried forward unchanged across floor transitions. Item and equipment
/// systems live outside the core; they mutate `attack`/`defense`/`hp`
/// directly and combat treats the fields as already-final inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerStatus {
    pub hp: Meter,
    pub attack: u32,
    pub defense: u32,
    pub exp: u32,
    pub level: u32,
}

impl PlayerStatus {
    /// Stat line for a fresh run.
    pub fn starting() -> Self {
        Self {
            hp: Meter::full(GameConfig::PLAYER_HP),
            attack: GameConfig::PLAYER_ATTACK,
            defense: GameConfig::PLAYER_DEFENSE,
            exp: 0,
            level: 1,
        }
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.hp.is_empty()
    }

    /// Applies damage, clamping hit points at zero.
    pub fn take_damage(&mut self, amount: u32) {
        self.hp.deplete(amount);
    }
}

impl Default for PlayerStatus {
    fn default() -> Self {
        Self::starting()
    }
}
