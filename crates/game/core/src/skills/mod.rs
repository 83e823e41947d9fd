//! Skill ledger and skill-derived stat bonuses.

pub mod ledger;
pub mod table;

pub use ledger::{SkillEntry, SkillId, SkillLedger, SkillProgress};
pub use table::{SkillProgression, skill_bonuses};
