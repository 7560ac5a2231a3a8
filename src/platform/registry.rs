//! Bookkeeping for mounted nodes and the event handlers they own.
//!
//! A mounted element keeps its handlers alive; `take` hands both back so
//! the caller can detach the node and release the handlers with it.

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use super::ElementId;

pub struct Mounted<E, H> {
    pub element: E,
    pub handlers: Vec<H>,
}

pub struct MountRegistry<E, H> {
    next_id: Cell<u64>,
    entries: RefCell<HashMap<ElementId, Mounted<E, H>>>,
}

impl<E, H> Default for MountRegistry<E, H> {
    fn default() -> Self {
        Self { next_id: Cell::new(0), entries: RefCell::new(HashMap::new()) }
    }
}

impl<E, H> MountRegistry<E, H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `element` with the handlers it owns and return its id.
    pub fn register(&self, element: E, handlers: Vec<H>) -> ElementId {
        let id = ElementId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.entries.borrow_mut().insert(id, Mounted { element, handlers });
        id
    }

    /// Remove and return the entry for `id`, if still mounted.
    pub fn take(&self, id: ElementId) -> Option<Mounted<E, H>> {
        self.entries.borrow_mut().remove(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}
