//! Combat resolution.
//!
//! Pure functions turning raw damage into applied damage. Applying the result
//! to an entity is the job of [`crate::lifecycle::Vitals`].

pub mod damage;

pub use damage::{
    DamageKind, armor_reduced, resolve_incoming_damage, resolve_outgoing_damage,
    shield_training_experience,
};
