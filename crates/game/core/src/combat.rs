//! Melee combat and character progression.
//!
//! Exchanges are resolved in a fixed order: the player always strikes first,
//! and a monster counters only if it survives the hit. Kills award
//! experience, which may trigger a level-up in the same exchange; death and
//! leveling are therefore mutually exclusive within one fight. Every damage
//! application and state change appends a battle log entry in chronological
//! order.

use crate::config::GameConfig;
use crate::state::{BattleLog, MonsterState, PlayerStatus};

/// Damage dealt by `attack` against `defense`:
/// `max(1, attack - defense / 2)` with integer halving. Armor softens hits
/// but never nullifies them.
#[inline]
pub fn resolve_damage(attack: u32, defense: u32) -> u32 {
    attack.saturating_sub(defense / 2).max(1)
}

/// Experience required to advance from `level` to the next.
#[inline]
pub fn exp_for_next_level(level: u32) -> u32 {
    level * GameConfig::EXP_PER_LEVEL
}

/// How a player-initiated exchange ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FightOutcome {
    /// The monster died to the player's hit; no counterattack occurred.
    MonsterSlain,
    /// The monster's counterattack dropped the player to zero hit points.
    PlayerSlain,
    /// Both combatants survived the exchange.
    BothAlive,
}

/// Read-only report of a resolved exchange.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FightReport {
    pub outcome: FightOutcome,
    /// Damage the player dealt.
    pub damage_dealt: u32,
    /// Counterattack damage, when the monster survived to counter.
    pub damage_taken: Option<u32>,
    /// Experience awarded for a kill.
    pub exp_gained: u32,
    /// Whether the kill pushed the player over the level threshold.
    pub leveled_up: bool,
}

/// Resolves one player-initiated melee exchange.
///
/// Stat fields are taken as already-final inputs; any item or equipment
/// modifiers applied by outer layers are simply part of the numbers here.
pub fn fight(
    player: &mut PlayerStatus,
    monster: &mut MonsterState,
    log: &mut BattleLog,
) -> FightReport {
    let damage_dealt = resolve_damage(player.attack, monster.defense);
    monster.take_damage(damage_dealt);
    log.push(format!(
        "You hit the {} for {damage_dealt} damage.",
        monster.kind
    ));

    if monster.is_alive() {
        let damage_taken = resolve_damage(monster.attack, player.defense);
        player.take_damage(damage_taken);
        log.push(format!(
            "The {} hits you for {damage_taken} damage.",
            monster.kind
        ));

        let outcome = if player.is_dead() {
            log.push(format!("You were slain by the {}.", monster.kind));
            FightOutcome::PlayerSlain
        } else {
            FightOutcome::BothAlive
        };
        return FightReport {
            outcome,
            damage_dealt,
            damage_taken: Some(damage_taken),
            exp_gained: 0,
            leveled_up: false,
        };
    }

    log.push(format!("You defeated the {}.", monster.kind));
    let exp_gained = monster.exp_reward;
    let leveled_up = grant_exp(player, exp_gained, log);

    FightReport {
        outcome: FightOutcome::MonsterSlain,
        damage_dealt,
        damage_taken: None,
        exp_gained,
        leveled_up,
    }
}

/// Awards experience and applies a level-up when the threshold is met:
/// +1 level, +2 attack, +1 defense, +5 max hp, full heal, experience reset.
fn grant_exp(player: &mut PlayerStatus, amount: u32, log: &mut BattleLog) -> bool {
    player.exp += amount;
    log.push(format!("You gain {amount} EXP."));

    if player.exp < exp_for_next_level(player.level) {
        return false;
    }

    player.level += 1;
    player.attack += 2;
    player.defense += 1;
    player.hp.maximum += 5;
    player.hp.current = player.hp.maximum;
    player.exp = 0;
    log.push(format!(
        "Welcome to level {}! You feel fully restored.",
        player.level
    ));
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Meter, MonsterId, MonsterKind, Position};

    fn test_monster(hp: u32, attack: u32, defense: u32, exp_reward: u32) -> MonsterState {
        let mut monster =
            MonsterState::spawn(MonsterId(0), MonsterKind::Goblin, Position::ORIGIN, 0);
        monster.hp = Meter::full(hp);
        monster.attack = attack;
        monster.defense = defense;
        monster.exp_reward = exp_reward;
        monster
    }

    fn test_player(attack: u32, defense: u32) -> PlayerStatus {
        PlayerStatus {
            hp: Meter::full(20),
            attack,
            defense,
            exp: 0,
            level: 1,
        }
    }

    #[test]
    fn damage_floors_at_one() {
        assert_eq!(resolve_damage(1, 100), 1);
        assert_eq!(resolve_damage(0, 0), 1);
        assert_eq!(resolve_damage(3, 6), 1);
    }

    #[test]
    fn damage_halves_defense_rounding_down() {
        // attack 5 vs defense 1: floor(1/2) = 0, full 5 goes through.
        assert_eq!(resolve_damage(5, 1), 5);
        // attack 4 vs defense 3: floor(3/2) = 1, 3 goes through.
        assert_eq!(resolve_damage(4, 3), 3);
        assert_eq!(resolve_damage(10, 7), 7);
    }

    #[test]
    fn surviving_monster_counters() {
        let mut player = test_player(5, 3);
        let mut monster = test_monster(10, 4, 1, 2);
        let mut log = BattleLog::new();

        let report = fight(&mut player, &mut monster, &mut log);

        assert_eq!(report.outcome, FightOutcome::BothAlive);
        assert_eq!(report.damage_dealt, 5);
        assert_eq!(monster.hp.current, 5);
        // Counter: 4 attack vs 3 defense -> 3 damage.
        assert_eq!(report.damage_taken, Some(3));
        assert_eq!(player.hp.current, 17);
        assert_eq!(report.exp_gained, 0);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn killed_monster_never_counters() {
        let mut player = test_player(5, 3);
        let mut monster = test_monster(4, 9, 1, 2);
        let mut log = BattleLog::new();

        let report = fight(&mut player, &mut monster, &mut log);

        assert_eq!(report.outcome, FightOutcome::MonsterSlain);
        assert!(!monster.is_alive());
        assert_eq!(report.damage_taken, None);
        assert_eq!(player.hp.current, 20);
        assert_eq!(report.exp_gained, 2);
        assert_eq!(player.exp, 2);
    }

    #[test]
    fn threshold_kill_levels_and_fully_heals() {
        let mut player = test_player(5, 3);
        player.exp = 3;
        player.hp.current = 6;
        let mut monster = test_monster(1, 2, 0, 5);
        let mut log = BattleLog::new();

        // 3 + 5 = 8 >= level 1 threshold of 5.
        let report = fight(&mut player, &mut monster, &mut log);

        assert!(report.leveled_up);
        assert_eq!(player.level, 2);
        assert_eq!(player.exp, 0);
        assert_eq!(player.attack, 7);
        assert_eq!(player.defense, 4);
        assert_eq!(player.hp.maximum, 25);
        assert_eq!(player.hp.current, 25);
    }

    #[test]
    fn below_threshold_exp_accumulates() {
        let mut player = test_player(5, 3);
        let mut monster = test_monster(1, 2, 0, 4);
        let mut log = BattleLog::new();

        let report = fight(&mut player, &mut monster, &mut log);

        assert!(!report.leveled_up);
        assert_eq!(player.level, 1);
        assert_eq!(player.exp, 4);
        assert_eq!(player.hp.maximum, 20);
    }

    #[test]
    fn lethal_counter_skips_exp_entirely() {
        let mut player = test_player(2, 0);
        player.hp = Meter::new(3, 20);
        player.exp = 4;
        let mut monster = test_monster(50, 10, 0, 100);
        let mut log = BattleLog::new();

        let report = fight(&mut player, &mut monster, &mut log);

        assert_eq!(report.outcome, FightOutcome::PlayerSlain);
        assert!(player.is_dead());
        assert_eq!(player.hp.current, 0);
        // Death and leveling are mutually exclusive: no exp moved.
        assert_eq!(player.exp, 4);
        assert_eq!(player.level, 1);
        assert_eq!(report.exp_gained, 0);
    }

    #[test]
    fn log_reads_chronologically() {
        let mut player = test_player(5, 3);
        let mut monster = test_monster(4, 2, 1, 5);
        let mut log = BattleLog::new();

        fight(&mut player, &mut monster, &mut log);

        let messages: Vec<&str> = log.iter().map(|entry| entry.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "You hit the goblin for 5 damage.",
                "You defeated the goblin.",
                "You gain 5 EXP.",
                "Welcome to level 2! You feel fully restored.",
            ]
        );
    }

    #[test]
    fn exp_threshold_scales_with_level() {
        assert_eq!(exp_for_next_level(1), 5);
        assert_eq!(exp_for_next_level(4), 20);
    }
}
