use std::collections::HashMap;
use thiserror::Error;

use crate::catalog::events::{EventEffect, EventRegistry};
use crate::catalog::foods::{FoodId, FoodRegistry, StationType};
use crate::catalog::menus::MenuRegistry;
use crate::catalog::recipes::{IngredientMultiset, RecipeId, RecipeRegistry};

/// Load-time catalog rejection. Fatal: a catalog that fails any of these
/// checks is never published to the rest of the game.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("failed to parse {file}: {source}")]
    Asset {
        file: &'static str,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("duplicate {kind} id '{id}'")]
    DuplicateId { kind: &'static str, id: String },

    #[error("{kind} '{owner}' references unknown food '{food}'")]
    UnknownFood {
        kind: &'static str,
        owner: String,
        food: FoodId,
    },

    #[error("{kind} '{id}' has no ingredients")]
    EmptyIngredients { kind: &'static str, id: String },

    #[error("recipes '{first}' and '{second}' share an ingredient multiset on overlapping stations")]
    AmbiguousRecipe { first: RecipeId, second: RecipeId },

    #[error("{kind} '{id}' has invalid cook duration {value}")]
    BadCookDuration {
        kind: &'static str,
        id: String,
        value: f32,
    },

    #[error("event '{event}' references unknown recipe '{recipe}'")]
    UnknownRecipe { event: String, recipe: RecipeId },

    #[error("event '{event}': {detail}")]
    BadEffectParam { event: String, detail: String },
}

/// Cross-registry rules. Per-registry id uniqueness and effect param parsing
/// have already run inside the registry constructors.
pub fn validate(
    foods: &FoodRegistry,
    menus: &MenuRegistry,
    recipes: &RecipeRegistry,
    events: &EventRegistry,
) -> Result<(), ValidationError> {
    for menu in menus.iter() {
        if menu.ingredients.is_empty() {
            return Err(ValidationError::EmptyIngredients {
                kind: "menu",
                id: menu.id.clone(),
            });
        }
        for ingredient in &menu.ingredients {
            if !foods.contains(ingredient) {
                return Err(ValidationError::UnknownFood {
                    kind: "menu",
                    owner: menu.id.clone(),
                    food: ingredient.clone(),
                });
            }
        }
        if !(menu.cook_duration.is_finite() && menu.cook_duration >= 0.0) {
            return Err(ValidationError::BadCookDuration {
                kind: "menu",
                id: menu.id.clone(),
                value: menu.cook_duration,
            });
        }
    }

    let mut keys: HashMap<&IngredientMultiset, Vec<(StationType, &RecipeId)>> = HashMap::new();
    for (recipe, multiset) in recipes.iter_with_multisets() {
        if recipe.ingredients.is_empty() {
            return Err(ValidationError::EmptyIngredients {
                kind: "recipe",
                id: recipe.id.clone(),
            });
        }
        for ingredient in &recipe.ingredients {
            if !foods.contains(ingredient) {
                return Err(ValidationError::UnknownFood {
                    kind: "recipe",
                    owner: recipe.id.clone(),
                    food: ingredient.clone(),
                });
            }
        }
        if !foods.contains(&recipe.result) {
            return Err(ValidationError::UnknownFood {
                kind: "recipe",
                owner: recipe.id.clone(),
                food: recipe.result.clone(),
            });
        }
        if !(recipe.cook_duration.is_finite() && recipe.cook_duration >= 0.0) {
            return Err(ValidationError::BadCookDuration {
                kind: "recipe",
                id: recipe.id.clone(),
                value: recipe.cook_duration,
            });
        }
        // Two recipes conflict when a single craft attempt could match both:
        // same multiset and stations that accept each other (wildcards
        // included). Resolve order must never decide between recipes.
        if let Some(entries) = keys.get(multiset) {
            if let Some((_, first)) = entries
                .iter()
                .find(|(station, _)| station.accepts(recipe.station))
            {
                return Err(ValidationError::AmbiguousRecipe {
                    first: (*first).clone(),
                    second: recipe.id.clone(),
                });
            }
        }
        keys.entry(multiset)
            .or_default()
            .push((recipe.station, &recipe.id));
    }

    for event in events.iter() {
        if let EventEffect::UnlockRecipe(recipe) | EventEffect::GiveRecipe(recipe) = &event.effect {
            if !recipes.contains(recipe) {
                return Err(ValidationError::UnknownRecipe {
                    event: event.id.clone(),
                    recipe: recipe.clone(),
                });
            }
        }
    }

    Ok(())
}
