use crate::state::{EquipmentSlot, TemplateId};
use crate::stats::StatBlock;

/// Read-only access to the item catalog.
///
/// Content may reference retired items, so a missing template is a normal
/// answer (`None`), not an error.
pub trait ItemOracle: Send + Sync {
    fn template(&self, id: &TemplateId) -> Option<&ItemTemplate>;

    /// Returns all templates known to this oracle.
    fn all_templates(&self) -> Vec<&ItemTemplate>;
}

/// Static item definition shared by every instance of the item.
///
/// # Stacking
///
/// - Equippable items: `max_stack = 1`
/// - Materials and consumables: `max_stack > 1` (instances merge into one stack)
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemTemplate {
    pub id: TemplateId,
    pub name: String,
    /// Slot the item occupies when equipped; `None` for non-equippable items.
    #[cfg_attr(feature = "serde", serde(default))]
    pub slot: Option<EquipmentSlot>,
    /// Stats granted while equipped.
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: StatBlock,
    #[cfg_attr(feature = "serde", serde(default = "default_max_stack"))]
    pub max_stack: u16,
}

#[cfg(feature = "serde")]
fn default_max_stack() -> u16 {
    1
}

impl ItemTemplate {
    pub fn new(id: impl Into<TemplateId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slot: None,
            stats: StatBlock::ZERO,
            max_stack: 1,
        }
    }

    pub fn equippable(mut self, slot: EquipmentSlot, stats: StatBlock) -> Self {
        self.slot = Some(slot);
        self.stats = stats;
        self.max_stack = 1;
        self
    }

    pub fn stackable(mut self, max_stack: u16) -> Self {
        self.max_stack = max_stack.max(1);
        self
    }

    pub fn is_stackable(&self) -> bool {
        self.max_stack > 1
    }
}
