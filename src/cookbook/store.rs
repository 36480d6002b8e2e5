// src/cookbook/store.rs

//! In-memory cookbook registry
//!
//! Name-keyed store for ingredients and recipes. Registration validates
//! type-specific constraints and cross-namespace name uniqueness before
//! inserting, so a failed registration leaves the registry untouched.
//! Entries are immutable once registered and live for the life of the
//! store; there is no update or delete.

use std::collections::HashMap;

use tracing::info;

use crate::cookbook::entry::{Entry, Ingredient, Recipe};
use crate::error::{Error, Result};

/// Registry of cookbook entries, keyed by unique name.
///
/// Ingredients and recipes are held in separate maps for O(1) per-kind
/// lookup, but name uniqueness spans both namespaces combined.
#[derive(Debug, Default)]
pub struct CookbookStore {
    ingredients: HashMap<String, Ingredient>,
    recipes: HashMap<String, Recipe>,
}

impl CookbookStore {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and register an entry.
    ///
    /// Checks, in order: ingredient cook time is non-negative, required
    /// item quantities are strictly positive, and the name is unused in
    /// either namespace. On any failure nothing is inserted.
    pub fn register_entry(&mut self, entry: Entry) -> Result<()> {
        match &entry {
            Entry::Ingredient(ingredient) => {
                if ingredient.cook_time < 0 {
                    return Err(Error::InvalidCookTime {
                        name: ingredient.name.clone(),
                        cook_time: ingredient.cook_time,
                    });
                }
            }
            Entry::Recipe(recipe) => {
                for item in &recipe.required_items {
                    if item.quantity < 1 {
                        return Err(Error::InvalidQuantity {
                            name: item.name.clone(),
                            quantity: item.quantity,
                        });
                    }
                }
            }
        }

        if self.contains(entry.name()) {
            return Err(Error::DuplicateName(entry.name().to_string()));
        }

        match entry {
            Entry::Ingredient(ingredient) => {
                info!(
                    "Registered ingredient '{}' (cook time {})",
                    ingredient.name, ingredient.cook_time
                );
                self.ingredients.insert(ingredient.name.clone(), ingredient);
            }
            Entry::Recipe(recipe) => {
                info!(
                    "Registered recipe '{}' ({} required items)",
                    recipe.name,
                    recipe.required_items.len()
                );
                self.recipes.insert(recipe.name.clone(), recipe);
            }
        }

        Ok(())
    }

    /// Look up an ingredient by name.
    pub fn lookup_ingredient(&self, name: &str) -> Option<&Ingredient> {
        self.ingredients.get(name)
    }

    /// Look up a recipe by name.
    pub fn lookup_recipe(&self, name: &str) -> Option<&Recipe> {
        self.recipes.get(name)
    }

    /// Check whether a name is registered in either namespace.
    pub fn contains(&self, name: &str) -> bool {
        self.ingredients.contains_key(name) || self.recipes.contains_key(name)
    }

    /// Total number of registered entries.
    pub fn len(&self) -> usize {
        self.ingredients.len() + self.recipes.len()
    }

    /// True when nothing has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty() && self.recipes.is_empty()
    }
}
