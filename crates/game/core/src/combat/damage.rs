//! Damage resolution.
//!
//! # Incoming damage
//!
//! ```text
//! effective_armor = max(armor, 0)                       (physical)
//!                 = max(armor, 0) * magic_armor% / 100  (magic)
//! after_armor     = raw * K / (K + effective_armor)
//! after_kills     = after_armor * (100 - min(reduction%, 100)) / 100
//! final           = round(max(after_kills, 0))
//! ```
//!
//! `K` is [`DamageRules::armor_constant`]. Intermediate values stay in `f64`;
//! rounding (half away from zero) happens once, at the end.

use crate::config::DamageRules;
use crate::stats::StatBlock;

/// Damage school.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DamageKind {
    Physical,
    Magic,
}

impl DamageKind {
    pub fn from_is_magic(is_magic: bool) -> Self {
        if is_magic { Self::Magic } else { Self::Physical }
    }
}

fn round_to_u32(value: f64) -> u32 {
    let rounded = value.max(0.0).round();
    if rounded >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        rounded as u32
    }
}

/// Armor-reduced damage before kill bonuses, unrounded.
pub fn armor_reduced(raw: u32, armor: i32, kind: DamageKind, rules: &DamageRules) -> f64 {
    let armor = f64::from(armor.max(0));
    let effective_armor = match kind {
        DamageKind::Physical => armor,
        DamageKind::Magic => armor * f64::from(rules.magic_armor_percent) / 100.0,
    };
    let constant = rules.armor_constant.max(f64::EPSILON);
    f64::from(raw) * constant / (constant + effective_armor)
}

/// Final damage a defender takes from a hit of `raw` points.
pub fn resolve_incoming_damage(
    raw: u32,
    defender: &StatBlock,
    kind: DamageKind,
    damage_reduction_percent: u32,
    rules: &DamageRules,
) -> u32 {
    let after_armor = armor_reduced(raw, defender.armor, kind, rules);
    let kept = f64::from(100 - damage_reduction_percent.min(100)) / 100.0;
    round_to_u32(after_armor * kept)
}

/// Damage dealt by an attacker with a kill-bonus damage increase.
pub fn resolve_outgoing_damage(raw: u32, bonus_damage_percent: u32) -> u32 {
    let factor = (100.0 + f64::from(bonus_damage_percent)) / 100.0;
    round_to_u32(f64::from(raw) * factor)
}

/// Shield skill experience for absorbing `final_damage` physical damage.
pub fn shield_training_experience(final_damage: u32, rules: &DamageRules) -> u32 {
    let scaled = u64::from(final_damage) * u64::from(rules.shield_experience_percent) / 100;
    u32::try_from(scaled).unwrap_or(u32::MAX).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::StatKind;

    fn armored(armor: i32) -> StatBlock {
        StatBlock::ZERO.with(StatKind::Armor, armor)
    }

    #[test]
    fn armor_and_kill_reduction_round_once() {
        // 20 * 100 / 125 = 16.0, * 0.98 = 15.68 -> 16
        let rules = DamageRules::default();
        let dealt = resolve_incoming_damage(20, &armored(25), DamageKind::Physical, 2, &rules);
        assert_eq!(dealt, 16);
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        // 1 * 100 / 100 = 1.0, * 0.5 = 0.5 -> 1
        let rules = DamageRules::default();
        assert_eq!(resolve_incoming_damage(1, &armored(0), DamageKind::Physical, 50, &rules), 1);
        // 5 * 100 / 300 = 1.666.. -> 2
        assert_eq!(resolve_incoming_damage(5, &armored(200), DamageKind::Physical, 0, &rules), 2);
    }

    #[test]
    fn magic_ignores_part_of_armor() {
        let rules = DamageRules::default();
        // physical: 30 * 100 / 200 = 15; magic: armor 50 -> 30 * 100 / 150 = 20
        assert_eq!(resolve_incoming_damage(30, &armored(100), DamageKind::Physical, 0, &rules), 15);
        assert_eq!(resolve_incoming_damage(30, &armored(100), DamageKind::Magic, 0, &rules), 20);
    }

    #[test]
    fn negative_armor_counts_as_zero() {
        let rules = DamageRules::default();
        assert_eq!(resolve_incoming_damage(10, &armored(-40), DamageKind::Physical, 0, &rules), 10);
    }

    #[test]
    fn reduction_is_capped_at_full_immunity() {
        let rules = DamageRules::default();
        assert_eq!(resolve_incoming_damage(50, &armored(0), DamageKind::Magic, 250, &rules), 0);
    }

    #[test]
    fn outgoing_bonus_multiplies_raw_damage() {
        assert_eq!(resolve_outgoing_damage(10, 0), 10);
        assert_eq!(resolve_outgoing_damage(10, 2000), 210);
        assert_eq!(resolve_outgoing_damage(3, 50), 5);
    }

    #[test]
    fn shield_experience_is_at_least_one() {
        let rules = DamageRules::default();
        assert_eq!(shield_training_experience(0, &rules), 1);
        assert_eq!(shield_training_experience(1, &rules), 1);
        assert_eq!(shield_training_experience(16, &rules), 8);
        assert_eq!(shield_training_experience(17, &rules), 8);
    }
}
