/// Game configuration constants and tunable parameters.
///
/// Loaded from `config.toml` by the content crate; every field has a default
/// so partial files are accepted.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Number of inventory slots available to the player.
    pub inventory_capacity: usize,

    /// Experience curve shared by every skill.
    pub skill_curve: SkillCurve,

    /// Damage reduction parameters.
    pub damage: DamageRules,

    /// Ticks between two regeneration pulses.
    pub regen_interval_ticks: u64,

    /// Gold charged per purchased stat point.
    pub upgrade_price_per_point: u32,

    /// Loot chance before kill-milestone bonuses, in percent.
    pub base_loot_chance_percent: u32,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_INVENTORY_CAPACITY: usize = 20;
    pub const DEFAULT_REGEN_INTERVAL_TICKS: u64 = 60;
    pub const DEFAULT_UPGRADE_PRICE_PER_POINT: u32 = 10;
    pub const DEFAULT_BASE_LOOT_CHANCE_PERCENT: u32 = 10;

    pub fn new() -> Self {
        Self {
            inventory_capacity: Self::DEFAULT_INVENTORY_CAPACITY,
            skill_curve: SkillCurve::default(),
            damage: DamageRules::default(),
            regen_interval_ticks: Self::DEFAULT_REGEN_INTERVAL_TICKS,
            upgrade_price_per_point: Self::DEFAULT_UPGRADE_PRICE_PER_POINT,
            base_loot_chance_percent: Self::DEFAULT_BASE_LOOT_CHANCE_PERCENT,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Level-up thresholds for skills.
///
/// A skill at level 1 needs `base_max_experience` points; each level-up grows
/// the requirement by `growth_percent`. Experience stops accumulating at
/// `max_level`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SkillCurve {
    pub base_max_experience: u32,
    pub growth_percent: u32,
    pub max_level: u32,
}

impl SkillCurve {
    /// Threshold of the next level given the threshold of the current one.
    pub fn next_max_experience(&self, current_max: u32) -> u32 {
        let grown = u64::from(current_max) * (100 + u64::from(self.growth_percent)) / 100;
        u32::try_from(grown).unwrap_or(u32::MAX).max(1)
    }
}

impl Default for SkillCurve {
    fn default() -> Self {
        Self {
            base_max_experience: 100,
            growth_percent: 50,
            max_level: 99,
        }
    }
}

/// Balance parameters for the damage resolver.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DamageRules {
    /// Armor value at which physical damage is halved.
    pub armor_constant: f64,
    /// Share of armor that applies against magic damage, in percent.
    pub magic_armor_percent: u32,
    /// Shield skill experience per point of physical damage taken, in percent.
    pub shield_experience_percent: u32,
}

impl Default for DamageRules {
    fn default() -> Self {
        Self {
            armor_constant: 100.0,
            magic_armor_percent: 50,
            shield_experience_percent: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_curve_grows_by_percent() {
        let curve = SkillCurve::default();
        assert_eq!(curve.next_max_experience(100), 150);
        assert_eq!(curve.next_max_experience(150), 225);
    }

    #[test]
    fn flat_skill_curve_keeps_threshold() {
        let flat = SkillCurve {
            growth_percent: 0,
            ..SkillCurve::default()
        };
        assert_eq!(flat.next_max_experience(100), 100);
    }
}
