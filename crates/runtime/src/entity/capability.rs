//! Named capability registry attached to every entity.
//!
//! Capabilities are keyed by a static component name and stored as boxed
//! trait objects. Typed access goes through [`NamedCapability::NAME`], so a
//! lookup never needs to know the concrete set of capabilities up front.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;

/// Object-safe view of a capability.
pub trait Capability: Send + Sync + fmt::Debug + 'static {
    fn name(&self) -> &'static str;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

/// A capability type with a fixed registry key.
pub trait NamedCapability: Send + Sync + fmt::Debug + 'static {
    const NAME: &'static str;
}

impl<T: NamedCapability> Capability for T {
    fn name(&self) -> &'static str {
        T::NAME
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

#[derive(Debug, Default)]
pub struct CapabilityRegistry {
    entries: HashMap<&'static str, Box<dyn Capability>>,
}

impl CapabilityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a capability, returning `false` if one with the same name existed
    /// (it is replaced).
    pub fn insert<T: NamedCapability>(&mut self, capability: T) -> bool {
        self.entries.insert(T::NAME, Box::new(capability)).is_none()
    }

    pub fn with<T: NamedCapability>(mut self, capability: T) -> Self {
        self.insert(capability);
        self
    }

    pub fn get<T: NamedCapability>(&self) -> Option<&T> {
        self.entries.get(T::NAME)?.as_any().downcast_ref::<T>()
    }

    pub fn get_mut<T: NamedCapability>(&mut self) -> Option<&mut T> {
        self.entries.get_mut(T::NAME)?.as_any_mut().downcast_mut::<T>()
    }

    pub fn remove<T: NamedCapability>(&mut self) -> Option<T> {
        let boxed = self.entries.remove(T::NAME)?;
        boxed.into_any().downcast::<T>().ok().map(|b| *b)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Glow(u8);

    impl NamedCapability for Glow {
        const NAME: &'static str = "glow";
    }

    #[derive(Debug)]
    struct Hum;

    impl NamedCapability for Hum {
        const NAME: &'static str = "hum";
    }

    #[test]
    fn typed_access_by_name() {
        let mut registry = CapabilityRegistry::new().with(Glow(3));

        assert!(registry.contains("glow"));
        assert_eq!(registry.get::<Glow>(), Some(&Glow(3)));
        assert!(registry.get::<Hum>().is_none());

        if let Some(glow) = registry.get_mut::<Glow>() {
            glow.0 = 9;
        }
        assert_eq!(registry.remove::<Glow>(), Some(Glow(9)));
        assert!(registry.is_empty());
    }
}
