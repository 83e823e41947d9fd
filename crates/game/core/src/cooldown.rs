//! Cooldown bookkeeping keyed by ability name.

use std::collections::HashMap;

use crate::state::Tick;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cooldowns {
    ready_at: HashMap<String, Tick>,
}

impl Cooldowns {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts (or restarts) a cooldown lasting `duration` ticks from `now`.
    pub fn start(&mut self, key: impl Into<String>, now: Tick, duration: u64) {
        self.ready_at.insert(key.into(), now + duration);
    }

    pub fn is_ready(&self, key: &str, now: Tick) -> bool {
        self.ready_at.get(key).is_none_or(|&ready| now >= ready)
    }

    /// Ticks left before `key` is ready again.
    pub fn remaining(&self, key: &str, now: Tick) -> u64 {
        self.ready_at
            .get(key)
            .map_or(0, |&ready| ready.since(now))
    }

    /// Drops every elapsed cooldown and returns their keys.
    ///
    /// Calling this twice with the same `now` returns nothing the second time.
    pub fn expire(&mut self, now: Tick) -> Vec<String> {
        let mut expired: Vec<String> = self
            .ready_at
            .iter()
            .filter(|&(_, &ready)| now >= ready)
            .map(|(key, _)| key.clone())
            .collect();
        for key in &expired {
            self.ready_at.remove(key);
        }
        expired.sort();
        expired
    }

    pub fn is_empty(&self) -> bool {
        self.ready_at.is_empty()
    }
}
