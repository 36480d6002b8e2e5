// src/cookbook/entry.rs

//! Cookbook entry data model
//!
//! Entries come in two kinds: base ingredients with a fixed cook time, and
//! recipes defined by an ordered list of required items. The serde shape
//! matches the registration wire payload, discriminated by a `type` field
//! of "ingredient" or "recipe".

use serde::{Deserialize, Serialize};

/// A named cookbook entry, either a base ingredient or a composite recipe.
///
/// Names are unique across both variants combined: no ingredient and
/// recipe may share a name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Entry {
    Ingredient(Ingredient),
    Recipe(Recipe),
}

impl Entry {
    /// The unique name identifying this entry.
    pub fn name(&self) -> &str {
        match self {
            Self::Ingredient(ingredient) => &ingredient.name,
            Self::Recipe(recipe) => &recipe.name,
        }
    }
}

/// A base ingredient with a fixed preparation time.
///
/// Cook time is signed so that a negative wire value survives parsing and
/// is rejected at registration, where the validation lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub name: String,
    pub cook_time: i64,
}

/// A recipe defined by an ordered list of required items.
///
/// Item order is preserved; it drives first-seen ordering in resolved
/// summaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub name: String,
    pub required_items: Vec<RequiredItem>,
}

/// A (name, quantity) reference from a recipe to another entry.
///
/// The referenced name is bound lazily: it need not exist at registration
/// time and is looked up only during resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequiredItem {
    pub name: String,
    pub quantity: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_ingredient_payload() {
        let entry: Entry = serde_json::from_value(serde_json::json!({
            "type": "ingredient",
            "name": "Eggs",
            "cookTime": 2,
        }))
        .unwrap();

        match entry {
            Entry::Ingredient(ingredient) => {
                assert_eq!(ingredient.name, "Eggs");
                assert_eq!(ingredient.cook_time, 2);
            }
            Entry::Recipe(_) => panic!("expected an ingredient"),
        }
    }

    #[test]
    fn test_deserialize_recipe_payload() {
        let entry: Entry = serde_json::from_value(serde_json::json!({
            "type": "recipe",
            "name": "Cake",
            "requiredItems": [
                {"name": "Eggs", "quantity": 2},
                {"name": "Batter", "quantity": 1},
            ],
        }))
        .unwrap();

        assert_eq!(entry.name(), "Cake");
        match entry {
            Entry::Recipe(recipe) => {
                assert_eq!(recipe.required_items.len(), 2);
                assert_eq!(recipe.required_items[0].name, "Eggs");
                assert_eq!(recipe.required_items[0].quantity, 2);
            }
            Entry::Ingredient(_) => panic!("expected a recipe"),
        }
    }

    #[test]
    fn test_unknown_discriminator_fails_deserialization() {
        let result: Result<Entry, _> = serde_json::from_value(serde_json::json!({
            "type": "pan",
            "name": "Skillet",
        }));
        assert!(result.is_err());
    }
}
