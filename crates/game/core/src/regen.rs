//! Periodic health and mana regeneration.
//!
//! Regeneration fires once per elapsed interval. When several intervals have
//! passed since the last pulse (a slow frame, a paused simulation) they are
//! coalesced into a single application of `pulses × rate`.

use crate::state::Tick;

/// Tracks the last regeneration pulse of an entity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegenClock {
    last_pulse: Tick,
}

impl RegenClock {
    pub fn starting_at(now: Tick) -> Self {
        Self { last_pulse: now }
    }

    pub fn last_pulse(&self) -> Tick {
        self.last_pulse
    }

    /// Number of whole intervals elapsed since the last pulse.
    ///
    /// Advances the clock by exactly those intervals so partial progress is
    /// kept for the next call. An interval of 0 disables regeneration.
    pub fn due_pulses(&mut self, now: Tick, interval: u64) -> u64 {
        if interval == 0 {
            return 0;
        }
        let pulses = now.since(self.last_pulse) / interval;
        self.last_pulse = self.last_pulse + pulses.saturating_mul(interval);
        pulses
    }
}

/// Points restored over `pulses` intervals at `rate` per interval.
///
/// Negative rates never drain.
pub fn regen_amount(rate: i32, pulses: u64) -> u32 {
    let rate = u64::try_from(rate.max(0)).unwrap_or(0);
    u32::try_from(rate.saturating_mul(pulses)).unwrap_or(u32::MAX)
}
