//! Stat aggregation.
//!
//! [`StatBlock`] is the flat value type every source produces. The
//! [`equipment`] and [`calculator`] modules turn equipment sets, skill
//! ledgers and purchased upgrades into a [`CalculatedStats`] snapshot.

pub mod block;
pub mod calculator;
pub mod equipment;

pub use block::{StatBlock, StatKind};
pub use calculator::{CalculatedStats, compute_stats};
pub use equipment::{equipment_bonuses, instance_contribution};
