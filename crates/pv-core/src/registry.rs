//! Chart-slot registry
//!
//! A slot is a named rendering target that holds at most one live chart at
//! a time. The registry is the single owner of every live handle; creating
//! into an occupied slot always releases the previous handle first, so a
//! re-render can never leave two charts fighting over one target.

use ahash::AHashMap;

/// A prepared chart occupying a slot.
///
/// The payload is whatever the rendering layer needs to draw (pitchview
/// stores a built chart spec). The revision changes on every `create`, so
/// widget ids derived from it never collide with a replaced chart's state.
#[derive(Debug, Clone)]
pub struct ChartHandle<T> {
    revision: u64,
    payload: T,
}

impl<T> ChartHandle<T> {
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }
}

/// Slot-to-handle map owned by the rendering coordinator.
#[derive(Debug)]
pub struct ChartRegistry<T> {
    slots: AHashMap<String, ChartHandle<T>>,
    next_revision: u64,
}

impl<T> Default for ChartRegistry<T> {
    fn default() -> Self {
        Self {
            slots: AHashMap::new(),
            next_revision: 0,
        }
    }
}

impl<T> ChartRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a new chart in `slot`, releasing any handle already there.
    pub fn create(&mut self, slot: &str, payload: T) -> &ChartHandle<T> {
        if self.release(slot).is_some() {
            tracing::debug!(slot, "released previous chart before re-create");
        }
        let revision = self.next_revision;
        self.next_revision += 1;
        self.slots
            .entry(slot.to_string())
            .or_insert(ChartHandle { revision, payload })
    }

    /// Drop the live handle in `slot`, if any.
    pub fn release(&mut self, slot: &str) -> Option<ChartHandle<T>> {
        self.slots.remove(slot)
    }

    /// Drop every handle whose slot name starts with `prefix`.
    ///
    /// Used when a whole panel (e.g. a text analysis) is closed.
    pub fn release_prefix(&mut self, prefix: &str) {
        self.slots.retain(|slot, _| !slot.starts_with(prefix));
    }

    pub fn get(&self, slot: &str) -> Option<&ChartHandle<T>> {
        self.slots.get(slot)
    }

    pub fn is_live(&self, slot: &str) -> bool {
        self.slots.contains_key(slot)
    }

    /// Number of live handles across all slots.
    pub fn live_count(&self) -> usize {
        self.slots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_installs_a_live_handle() {
        let mut registry = ChartRegistry::new();
        registry.create("csv.custom", 1);
        assert!(registry.is_live("csv.custom"));
        assert_eq!(registry.live_count(), 1);
    }

    #[test]
    fn recreate_leaves_exactly_one_live_handle() {
        let mut registry = ChartRegistry::new();
        registry.create("csv.custom", 1);
        registry.create("csv.custom", 2);
        assert_eq!(registry.live_count(), 1);
        assert_eq!(*registry.get("csv.custom").unwrap().payload(), 2);
    }

    #[test]
    fn recreate_bumps_the_revision() {
        let mut registry = ChartRegistry::new();
        let first = registry.create("csv.custom", 1).revision();
        let second = registry.create("csv.custom", 2).revision();
        assert_ne!(first, second);
    }

    #[test]
    fn release_empties_the_slot() {
        let mut registry = ChartRegistry::new();
        registry.create("image.colors", "swatches");
        assert!(registry.release("image.colors").is_some());
        assert!(!registry.is_live("image.colors"));
        assert!(registry.release("image.colors").is_none());
    }

    #[test]
    fn slots_are_independent() {
        let mut registry = ChartRegistry::new();
        registry.create("csv.sample.0", 0);
        registry.create("csv.sample.1", 1);
        registry.release("csv.sample.0");
        assert!(registry.is_live("csv.sample.1"));
    }

    #[test]
    fn release_prefix_clears_a_panel() {
        let mut registry = ChartRegistry::new();
        registry.create("text.frequency", 0);
        registry.create("text.cloud", 1);
        registry.create("csv.custom", 2);
        registry.release_prefix("text.");
        assert_eq!(registry.live_count(), 1);
        assert!(registry.is_live("csv.custom"));
    }
}
