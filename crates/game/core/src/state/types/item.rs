//! Item instances and instance id allocation.

use super::{InstanceId, TemplateId};
use crate::stats::StatBlock;

/// A concrete item in play.
///
/// `bonus_stats` are rolled once when the instance is created and can only be
/// read afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemInstance {
    pub template_id: TemplateId,
    pub instance_id: InstanceId,
    bonus_stats: Option<StatBlock>,
    pub quantity: u16,
}

impl ItemInstance {
    pub fn new(template_id: impl Into<TemplateId>, instance_id: InstanceId) -> Self {
        Self {
            template_id: template_id.into(),
            instance_id,
            bonus_stats: None,
            quantity: 1,
        }
    }

    /// Creates an instance carrying rolled bonus stats.
    pub fn with_bonus(
        template_id: impl Into<TemplateId>,
        instance_id: InstanceId,
        bonus_stats: StatBlock,
    ) -> Self {
        Self {
            bonus_stats: Some(bonus_stats),
            ..Self::new(template_id, instance_id)
        }
    }

    pub fn with_quantity(mut self, quantity: u16) -> Self {
        self.quantity = quantity.max(1);
        self
    }

    pub fn bonus_stats(&self) -> Option<&StatBlock> {
        self.bonus_stats.as_ref()
    }
}

/// Monotonic allocator for [`InstanceId`]s.
///
/// One allocator is owned by the central store so ids never repeat within a
/// session. `resume_after` lets a host continue numbering after restoring
/// previously issued ids.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InstanceIdAllocator {
    next: u64,
}

impl InstanceIdAllocator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn resume_after(last_issued: InstanceId) -> Self {
        Self {
            next: last_issued.0.saturating_add(1),
        }
    }

    pub fn allocate(&mut self) -> InstanceId {
        let id = InstanceId(self.next.max(1));
        self.next = id.0 + 1;
        id
    }
}
