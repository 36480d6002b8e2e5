// src/resolver/mod.rs

//! Recursive recipe resolution
//!
//! Expands a recipe into a flattened summary: the total quantity of every
//! base ingredient and the aggregate cook time needed to produce one unit.
//! Nested recipe references are followed depth-first, scaling quantities by
//! a running multiplier. Resolution is read-only over the store and
//! all-or-nothing: a missing reference anywhere in the expansion fails the
//! whole call, and no partial summary is ever returned.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::cookbook::{CookbookStore, Recipe};
use crate::error::{Error, Result};

/// One line item of a resolved recipe: a base ingredient and the total
/// quantity accumulated across the whole expansion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientTotal {
    pub name: String,
    pub quantity: i64,
}

/// Resolved result of a summary query.
///
/// The two variants serialize to the two wire shapes: an ingredient query
/// answers with name and cook time only, a recipe query adds the flattened
/// ingredient totals in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Summary {
    Ingredient {
        name: String,
        #[serde(rename = "cookTime")]
        cook_time: i64,
    },
    Recipe {
        name: String,
        #[serde(rename = "cookTime")]
        cook_time: i64,
        ingredients: Vec<IngredientTotal>,
    },
}

/// Running totals carried through one top-level expansion.
#[derive(Debug, Default)]
struct Totals {
    cook_time: i64,
    // insertion order is first-seen order and drives the final line items
    quantities: IndexMap<String, i64>,
}

/// Resolve a registered name into its summary.
///
/// Ingredient names answer directly with their cook time. Recipe names are
/// expanded depth-first over their required items; see
/// [`Error::MissingRequiredItem`] and [`Error::CyclicReference`] for the
/// failure modes. A name registered as neither kind fails with
/// [`Error::EntryNotFound`].
pub fn summarize(store: &CookbookStore, name: &str) -> Result<Summary> {
    if let Some(ingredient) = store.lookup_ingredient(name) {
        return Ok(Summary::Ingredient {
            name: ingredient.name.clone(),
            cook_time: ingredient.cook_time,
        });
    }

    let Some(recipe) = store.lookup_recipe(name) else {
        return Err(Error::EntryNotFound(name.to_string()));
    };

    let mut totals = Totals::default();
    let mut path = Vec::new();
    expand(store, recipe, 1, &mut totals, &mut path)?;

    Ok(Summary::Recipe {
        name: recipe.name.clone(),
        cook_time: totals.cook_time,
        ingredients: totals
            .quantities
            .into_iter()
            .map(|(name, quantity)| IngredientTotal { name, quantity })
            .collect(),
    })
}

/// Depth-first expansion of one recipe into the running totals.
///
/// `multiplier` is how many units of the enclosing recipe are being
/// produced. `path` holds the recipe names currently being expanded; a
/// required item that leads back into it is a reference cycle.
fn expand(
    store: &CookbookStore,
    recipe: &Recipe,
    multiplier: i64,
    totals: &mut Totals,
    path: &mut Vec<String>,
) -> Result<()> {
    if path.iter().any(|seen| seen == &recipe.name) {
        return Err(Error::CyclicReference(recipe.name.clone()));
    }
    path.push(recipe.name.clone());

    debug!(
        "Expanding recipe '{}' (multiplier {})",
        recipe.name, multiplier
    );

    for item in &recipe.required_items {
        if let Some(nested) = store.lookup_recipe(&item.name) {
            expand(store, nested, multiplier * item.quantity, totals, path)?;
        } else if let Some(ingredient) = store.lookup_ingredient(&item.name) {
            let quantity = item.quantity * multiplier;
            *totals
                .quantities
                .entry(ingredient.name.clone())
                .or_insert(0) += quantity;
            totals.cook_time += ingredient.cook_time * quantity;
        } else {
            return Err(Error::MissingRequiredItem(item.name.clone()));
        }
    }

    path.pop();
    Ok(())
}
