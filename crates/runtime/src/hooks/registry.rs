//! Hook registry for managing and evaluating post-damage hooks.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use super::{FollowUp, HookContext, PostDamageHook};

/// Registry that holds hooks sorted by priority with a name lookup table.
#[derive(Clone)]
pub struct HookRegistry {
    hooks: Arc<[Arc<dyn PostDamageHook>]>,
    lookup_table: HashMap<&'static str, Arc<dyn PostDamageHook>>,
}

impl HookRegistry {
    /// Creates a registry; hooks are sorted by priority (lower values first).
    pub fn new(mut hooks: Vec<Arc<dyn PostDamageHook>>) -> Self {
        hooks.sort_by_key(|h| h.priority());

        let lookup_table = hooks.iter().map(|h| (h.name(), Arc::clone(h))).collect();

        Self {
            hooks: hooks.into(),
            lookup_table,
        }
    }

    /// Creates a registry with the default set of hooks:
    /// - KillCreditHook: records creature kills
    /// - ShieldTrainingHook: trains the shield skill on physical hits
    pub fn default_hooks() -> Self {
        use super::{KillCreditHook, ShieldTrainingHook};

        Self::new(vec![
            Arc::new(KillCreditHook) as Arc<dyn PostDamageHook>,
            Arc::new(ShieldTrainingHook) as Arc<dyn PostDamageHook>,
        ])
    }

    /// Collects follow-ups from every triggered hook, in priority order.
    pub fn evaluate(&self, ctx: &HookContext<'_>) -> Vec<FollowUp> {
        let mut follow_ups = Vec::new();
        for hook in self.hooks.iter() {
            if hook.should_trigger(ctx) {
                debug!(target: "runtime::hooks", hook = hook.name(), entity = %ctx.target, "hook triggered");
                follow_ups.extend(hook.follow_ups(ctx));
            }
        }
        follow_ups
    }

    /// Finds a hook by name.
    pub fn find(&self, name: &str) -> Option<&Arc<dyn PostDamageHook>> {
        self.lookup_table.get(name)
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Returns an iterator over hook names and priorities (for debugging).
    pub fn hooks(&self) -> impl Iterator<Item = (&'static str, i32)> + '_ {
        self.hooks.iter().map(|h| (h.name(), h.priority()))
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::default_hooks()
    }
}

impl std::fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.hooks()).finish()
    }
}
