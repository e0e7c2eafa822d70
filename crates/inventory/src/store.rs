use serde::{Deserialize, Serialize};

use magazyn_core::{DomainError, DomainResult};

/// Products every new session starts with.
pub const SEED_PRODUCTS: [&str; 3] = ["Młotek", "Śrubokręt", "Wkręty M4"];

/// Ordered list of product names owned by one session.
///
/// Insertion order is display order. Duplicates are allowed; the list never
/// holds a blank name because `add` rejects them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: Vec<String>,
}

impl Inventory {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Inventory as seen on a fresh session.
    pub fn seeded() -> Self {
        Self {
            items: SEED_PRODUCTS.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append `name` to the end of the list.
    ///
    /// Whitespace-only input counts as empty. Accepted names are stored exactly
    /// as entered.
    pub fn add(&mut self, name: impl Into<String>) -> DomainResult<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        self.items.push(name);
        Ok(())
    }

    /// Remove the first entry equal to `name`, returning its former position.
    pub fn remove(&mut self, name: &str) -> DomainResult<usize> {
        let index = self
            .items
            .iter()
            .position(|item| item == name)
            .ok_or_else(|| DomainError::not_found(name))?;
        self.items.remove(index);
        Ok(index)
    }

    /// Remove the entry a row control points at.
    ///
    /// When `index` no longer holds `name` (the page was rendered before another
    /// mutation) this falls back to first-match removal by value.
    pub fn remove_at(&mut self, index: usize, name: &str) -> DomainResult<usize> {
        if self.items.get(index).is_some_and(|item| item == name) {
            self.items.remove(index);
            return Ok(index);
        }
        self.remove(name)
    }
}
