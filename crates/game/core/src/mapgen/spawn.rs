use bounded_vector::BoundedVec;

use crate::config::GameConfig;
use crate::rng::Pcg32;
use crate::state::{MonsterId, MonsterKind, MonsterState, Position, Room};

/// Populates a floor with monsters.
///
/// The first accepted room is the entry room and stays empty. Every other
/// room receives `min(floor / 2 + 1, MAX_SPAWNS_PER_ROOM)` spawns: a uniform
/// archetype draw plus a depth bonus of `floor / 2` applied to all stats.
/// Placement tries up to [`GameConfig::PLACEMENT_ATTEMPTS`] uniform interior
/// positions (1-cell margin from the room edges); if every attempt collides
/// with an already-placed monster the spawn is skipped. All monsters start
/// hidden.
pub fn spawn_monsters(
    rooms: &[Room],
    floor: u32,
    rng: &mut Pcg32,
) -> BoundedVec<MonsterState, 0, { GameConfig::MAX_MONSTERS }> {
    let mut monsters: BoundedVec<MonsterState, 0, { GameConfig::MAX_MONSTERS }> =
        BoundedVec::default();

    let depth_bonus = floor / 2;
    let per_room = (floor / 2 + 1).min(GameConfig::MAX_SPAWNS_PER_ROOM);
    let mut next_id = 0;

    for room in rooms.iter().skip(1) {
        for _ in 0..per_room {
            let index = rng.range_u32(0, MonsterKind::ALL.len() as u32 - 1) as usize;
            let kind = MonsterKind::ALL[index];

            for _ in 0..GameConfig::PLACEMENT_ATTEMPTS {
                let position = Position::new(
                    rng.range_i32(room.x + 1, room.right() - 1),
                    rng.range_i32(room.y + 1, room.bottom() - 1),
                );
                if monsters.iter().any(|monster| monster.position == position) {
                    continue;
                }

                let monster = MonsterState::spawn(MonsterId(next_id), kind, position, depth_bonus);
                if monsters.push(monster).is_err() {
                    // Capacity bounds the worst case (9 rooms x 3 spawns).
                    return monsters;
                }
                next_id += 1;
                break;
            }
        }
    }

    monsters
}
