//! Host-side document holding inline `display` values by element id.

use crate::error::ToggleError;
use crate::toggle::{ElementLookup, StyledElement};
use fnv::FnvHashMap;
use std::cell::RefCell;
use std::rc::Rc;

type Styles = Rc<RefCell<FnvHashMap<String, String>>>;

#[derive(Clone, Debug, Default)]
pub struct MemoryDocument {
    styles: Styles,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) an element with the given inline display value.
    pub fn insert(&self, id: &str, display: &str) {
        self.styles
            .borrow_mut()
            .insert(id.to_owned(), display.to_owned());
    }

    pub fn remove(&self, id: &str) -> Option<String> {
        self.styles.borrow_mut().remove(id)
    }

    pub fn display_of(&self, id: &str) -> Option<String> {
        self.styles.borrow().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.styles.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.borrow().is_empty()
    }
}

/// Handle to one element of a [`MemoryDocument`].
#[derive(Clone, Debug)]
pub struct MemoryElement {
    id: String,
    styles: Styles,
}

impl MemoryElement {
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl StyledElement for MemoryElement {
    fn display(&self) -> Result<String, ToggleError> {
        self.styles
            .borrow()
            .get(&self.id)
            .cloned()
            .ok_or_else(|| ToggleError::NotFound(self.id.clone()))
    }

    fn set_display(&self, value: &str) -> Result<(), ToggleError> {
        // element may have been removed since lookup
        match self.styles.borrow_mut().get_mut(&self.id) {
            Some(slot) => {
                value.clone_into(slot);
                Ok(())
            }
            None => Err(ToggleError::NotFound(self.id.clone())),
        }
    }
}

impl ElementLookup for MemoryDocument {
    type Element = MemoryElement;

    fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
        self.styles
            .borrow()
            .contains_key(id)
            .then(|| MemoryElement {
                id: id.to_owned(),
                styles: self.styles.clone(),
            })
    }
}
