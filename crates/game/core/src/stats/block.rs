//! Flat stat values shared by every layer of the calculator.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use strum::{Display, EnumIter, IntoEnumIterator};

/// Every dimension tracked by [`StatBlock`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum StatKind {
    Health,
    Mana,
    Power,
    Armor,
    MoveSpeed,
    AttackSpeed,
    HealthRegen,
    ManaRegen,
}

/// A value for each [`StatKind`].
///
/// Used for base stats, template stats, rolled bonus stats, per-level skill
/// gains, purchased upgrades and calculated totals alike. Addition is
/// component-wise and saturating.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatBlock {
    pub health: i32,
    pub mana: i32,
    pub power: i32,
    pub armor: i32,
    pub move_speed: i32,
    pub attack_speed: i32,
    pub health_regen: i32,
    pub mana_regen: i32,
}

impl StatBlock {
    pub const ZERO: Self = Self {
        health: 0,
        mana: 0,
        power: 0,
        armor: 0,
        move_speed: 0,
        attack_speed: 0,
        health_regen: 0,
        mana_regen: 0,
    };

    pub fn get(&self, kind: StatKind) -> i32 {
        match kind {
            StatKind::Health => self.health,
            StatKind::Mana => self.mana,
            StatKind::Power => self.power,
            StatKind::Armor => self.armor,
            StatKind::MoveSpeed => self.move_speed,
            StatKind::AttackSpeed => self.attack_speed,
            StatKind::HealthRegen => self.health_regen,
            StatKind::ManaRegen => self.mana_regen,
        }
    }

    pub fn get_mut(&mut self, kind: StatKind) -> &mut i32 {
        match kind {
            StatKind::Health => &mut self.health,
            StatKind::Mana => &mut self.mana,
            StatKind::Power => &mut self.power,
            StatKind::Armor => &mut self.armor,
            StatKind::MoveSpeed => &mut self.move_speed,
            StatKind::AttackSpeed => &mut self.attack_speed,
            StatKind::HealthRegen => &mut self.health_regen,
            StatKind::ManaRegen => &mut self.mana_regen,
        }
    }

    /// Builder-style setter.
    pub fn with(mut self, kind: StatKind, value: i32) -> Self {
        *self.get_mut(kind) = value;
        self
    }

    /// Multiplies every dimension by `factor` (saturating).
    pub fn scaled(self, factor: i32) -> Self {
        let mut out = Self::ZERO;
        for kind in StatKind::iter() {
            *out.get_mut(kind) = self.get(kind).saturating_mul(factor);
        }
        out
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl Add for StatBlock {
    type Output = StatBlock;

    fn add(mut self, rhs: StatBlock) -> StatBlock {
        self += rhs;
        self
    }
}

impl AddAssign for StatBlock {
    fn add_assign(&mut self, rhs: StatBlock) {
        for kind in StatKind::iter() {
            let slot = self.get_mut(kind);
            *slot = slot.saturating_add(rhs.get(kind));
        }
    }
}

impl Sum for StatBlock {
    fn sum<I: Iterator<Item = StatBlock>>(iter: I) -> StatBlock {
        iter.fold(StatBlock::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a StatBlock> for StatBlock {
    fn sum<I: Iterator<Item = &'a StatBlock>>(iter: I) -> StatBlock {
        iter.copied().sum()
    }
}
