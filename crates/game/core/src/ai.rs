//! Monster decision pass.
//!
//! Runs once after each completed player move, covering every monster that
//! is alive and spotted. The acting order is shuffled per pass, which
//! decides who attacks or claims a contested cell first. Per monster:
//! adjacent means attack, within the chase radius means step toward the
//! player, otherwise idle.

use crate::combat::resolve_damage;
use crate::config::GameConfig;
use crate::engine::Direction;
use crate::rng::{CONTEXT_AI_ORDER, Pcg32, event_seed};
use crate::state::{GamePhase, GameState, Position, TileKind};

/// Executes one decision pass over the acting set.
///
/// The pass keeps processing after the player's hit points reach zero, so
/// several adjacent monsters can all land (and log) attacks in the same
/// player-turn cycle; hit points clamp at zero rather than halting
/// iteration.
pub fn monster_pass(state: &mut GameState) {
    let seed = event_seed(state.seed, state.floor, state.nonce, CONTEXT_AI_ORDER);
    let mut rng = Pcg32::new(seed);

    let mut order: Vec<usize> = state
        .monsters
        .iter()
        .enumerate()
        .filter(|(_, monster)| monster.is_alive() && monster.visible)
        .map(|(index, _)| index)
        .collect();
    rng.shuffle(&mut order);

    for index in order {
        act(state, index);
    }
}

fn act(state: &mut GameState, index: usize) {
    let monster = state.monsters[index];
    let distance = monster.position.chebyshev_distance(state.player_position);

    if distance == 1 {
        let damage = resolve_damage(monster.attack, state.player.defense);
        state.player.take_damage(damage);
        state
            .log
            .push(format!("The {} attacks you for {damage} damage.", monster.kind));
        if state.player.is_dead() && state.phase == GamePhase::Playing {
            state.phase = GamePhase::GameOver;
            state.log.push("You died.");
        }
        return;
    }

    if distance <= GameConfig::CHASE_RADIUS {
        if let Some(destination) = chase_step(state, index, monster.position) {
            state.monsters[index].position = destination;
        }
    }
    // Beyond the chase radius the monster idles.
}

/// Picks the chase destination: among the 8 neighbors, the valid candidate
/// minimizing Manhattan distance to the player. Valid means in-bounds floor
/// terrain, not the player's cell, and not occupied by another living
/// monster at its current position, so a cell vacated earlier in the pass
/// is free and a freshly claimed one is not.
fn chase_step(state: &GameState, index: usize, from: Position) -> Option<Position> {
    let mut best: Option<(u32, Position)> = None;

    for direction in Direction::ALL {
        let (dx, dy) = direction.delta();
        let candidate = from.offset(dx, dy);

        if state.grid.kind(candidate) != Some(TileKind::Floor) {
            continue;
        }
        if candidate == state.player_position {
            continue;
        }
        let occupied = state.monsters.iter().enumerate().any(|(other, monster)| {
            other != index && monster.is_alive() && monster.position == candidate
        });
        if occupied {
            continue;
        }

        let score = candidate.manhattan_distance(state.player_position);
        // Strict comparison keeps the earliest candidate on ties, preserving
        // the fixed evaluation order.
        if best.is_none_or(|(best_score, _)| score < best_score) {
            best = Some((score, candidate));
        }
    }

    best.map(|(_, position)| position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::state::{Liveness, MonsterId, MonsterKind, MonsterState, TileGrid};

    /// Open arena with every cell carved to floor and no monsters.
    fn arena(width: u32, height: u32, player_position: Position) -> GameState {
        let mut state = GameState::new_game(GameConfig::with_map_size(width, height), 0);
        let mut grid = TileGrid::new(width, height);
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                grid.set_kind(Position::new(x, y), TileKind::Floor);
            }
        }
        state.grid = grid;
        state.rooms.clear();
        state.monsters = Default::default();
        state.log.clear();
        state.player_position = player_position;
        state
    }

    fn add_monster(state: &mut GameState, position: Position, visible: bool) -> usize {
        let id = state.monsters.len() as u32;
        let mut monster = MonsterState::spawn(MonsterId(id), MonsterKind::Goblin, position, 0);
        monster.visible = visible;
        state.monsters.push(monster).unwrap();
        state.monsters.len() - 1
    }

    #[test]
    fn adjacent_monster_attacks() {
        let mut state = arena(12, 12, Position::new(5, 5));
        add_monster(&mut state, Position::new(6, 6), true);
        let hp_before = state.player.hp.current;

        monster_pass(&mut state);

        // Goblin attack 3 vs player defense 3 -> max(1, 3 - 1) = 2.
        assert_eq!(state.player.hp.current, hp_before - 2);
        assert_eq!(state.log.len(), 1);
        assert_eq!(
            state.log.entries()[0].message,
            "The goblin attacks you for 2 damage."
        );
        // The attacker holds its cell.
        assert_eq!(state.monsters[0].position, Position::new(6, 6));
    }

    #[test]
    fn every_adjacent_monster_attacks_even_after_death() {
        let mut state = arena(12, 12, Position::new(5, 5));
        add_monster(&mut state, Position::new(4, 5), true);
        add_monster(&mut state, Position::new(6, 5), true);
        state.player.defense = 0;
        state.player.hp.current = 1;

        monster_pass(&mut state);

        assert!(state.is_game_over());
        assert_eq!(state.player.hp.current, 0);
        let messages: Vec<&str> = state
            .log
            .iter()
            .map(|entry| entry.message.as_str())
            .collect();
        // Both attacks land and log; death is recorded once, after the
        // killing blow.
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0], "The goblin attacks you for 3 damage.");
        assert_eq!(messages[1], "You died.");
        assert_eq!(messages[2], "The goblin attacks you for 3 damage.");
    }

    #[test]
    fn monster_in_radius_chases_toward_player() {
        let mut state = arena(16, 16, Position::new(5, 5));
        let index = add_monster(&mut state, Position::new(8, 5), true);

        monster_pass(&mut state);

        // West is the unique Manhattan-minimizing neighbor.
        assert_eq!(state.monsters[index].position, Position::new(7, 5));
        assert!(state.log.is_empty());
    }

    #[test]
    fn chase_tie_prefers_evaluation_order() {
        let mut state = arena(16, 16, Position::new(5, 5));
        let index = add_monster(&mut state, Position::new(5, 8), true);
        // Wall off the unique best step north, leaving the up-left and
        // up-right diagonals tied.
        state.grid.set_kind(Position::new(5, 7), TileKind::Wall);

        monster_pass(&mut state);

        assert_eq!(state.monsters[index].position, Position::new(4, 7));
    }

    #[test]
    fn occupied_candidate_is_skipped() {
        let mut state = arena(16, 16, Position::new(5, 5));
        let mover = add_monster(&mut state, Position::new(5, 8), true);
        // Blocker sits on the mover's best step and stays put (it is
        // adjacent to the player, so it attacks instead of moving).
        add_monster(&mut state, Position::new(5, 7), true);
        state.player_position = Position::new(5, 6);

        monster_pass(&mut state);

        assert_ne!(state.monsters[mover].position, Position::new(5, 7));
    }

    #[test]
    fn live_monsters_never_finish_stacked() {
        for seed in 0..40 {
            let mut state = arena(14, 14, Position::new(7, 7));
            state.seed = seed;
            add_monster(&mut state, Position::new(5, 5), true);
            add_monster(&mut state, Position::new(5, 6), true);
            add_monster(&mut state, Position::new(6, 5), true);
            add_monster(&mut state, Position::new(9, 9), true);

            for _ in 0..6 {
                state.nonce += 1;
                monster_pass(&mut state);
            }

            let live: Vec<Position> = state
                .monsters
                .iter()
                .filter(|monster| monster.is_alive())
                .map(|monster| monster.position)
                .collect();
            for (i, a) in live.iter().enumerate() {
                for b in live.iter().skip(i + 1) {
                    assert_ne!(a, b, "seed {seed}");
                }
            }
        }
    }

    #[test]
    fn distant_monster_idles() {
        let mut state = arena(20, 20, Position::new(2, 2));
        let index = add_monster(&mut state, Position::new(12, 12), true);

        monster_pass(&mut state);

        assert_eq!(state.monsters[index].position, Position::new(12, 12));
        assert!(state.log.is_empty());
    }

    #[test]
    fn hidden_monsters_do_not_act() {
        let mut state = arena(12, 12, Position::new(5, 5));
        let index = add_monster(&mut state, Position::new(6, 5), false);
        let hp_before = state.player.hp.current;

        monster_pass(&mut state);

        assert_eq!(state.player.hp.current, hp_before);
        assert_eq!(state.monsters[index].position, Position::new(6, 5));
        assert!(state.log.is_empty());
    }

    #[test]
    fn dead_monsters_do_not_act_or_block() {
        let mut state = arena(12, 12, Position::new(5, 5));
        let corpse = add_monster(&mut state, Position::new(5, 7), true);
        let max_hp = state.monsters[corpse].hp.maximum;
        state.monsters[corpse].take_damage(max_hp);
        let mover = add_monster(&mut state, Position::new(5, 8), true);
        // Wall the diagonals so the corpse's cell is the only improving step.
        state.grid.set_kind(Position::new(4, 7), TileKind::Wall);
        state.grid.set_kind(Position::new(6, 7), TileKind::Wall);
        let hp_before = state.player.hp.current;

        monster_pass(&mut state);

        assert_eq!(state.player.hp.current, hp_before);
        assert_eq!(state.monsters[corpse].liveness, Liveness::Dead);
        // The mover walks straight through the corpse's cell.
        assert_eq!(state.monsters[mover].position, Position::new(5, 7));
    }

    #[test]
    fn boxed_in_monster_stays_put() {
        let mut state = arena(12, 12, Position::new(5, 5));
        let index = add_monster(&mut state, Position::new(5, 7), true);
        for dy in -1..=1 {
            for dx in -1..=1 {
                if (dx, dy) != (0, 0) {
                    state
                        .grid
                        .set_kind(Position::new(5 + dx, 7 + dy), TileKind::Wall);
                }
            }
        }

        monster_pass(&mut state);

        assert_eq!(state.monsters[index].position, Position::new(5, 7));
    }

    #[test]
    fn pass_replays_identically_for_same_nonce() {
        let build = || {
            let mut state = arena(14, 14, Position::new(7, 7));
            state.seed = 31;
            state.nonce = 4;
            add_monster(&mut state, Position::new(4, 4), true);
            add_monster(&mut state, Position::new(4, 5), true);
            add_monster(&mut state, Position::new(10, 10), true);
            state
        };
        let mut a = build();
        let mut b = build();
        monster_pass(&mut a);
        monster_pass(&mut b);
        assert_eq!(a, b);
    }
}
