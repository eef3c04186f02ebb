use crate::catalog::{Catalog, FoodId, IngredientMultiset, RecipeId, StationType};
use crate::state::GameState;

/// Result of a crafting attempt. `NoMatch` and `Locked` are expected
/// negatives from player experimentation, not errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolveOutcome {
    Matched {
        recipe: RecipeId,
        food: FoodId,
        cook_duration: f32,
    },
    /// A recipe exists for these ingredients but has not been unlocked yet.
    Locked { recipe: RecipeId },
    NoMatch,
}

/// Resolves a station plus an ingredient multiset against the catalog.
///
/// Pure function of its inputs. Station matching wildcards on either side
/// being `StationType::None`; ingredients match on exact multiset equality.
/// Catalog load rejects same-multiset recipes whose stations accept each
/// other, so a concrete station request sees at most one candidate.
pub fn resolve(
    catalog: &Catalog,
    state: &GameState,
    station: StationType,
    ingredients: &IngredientMultiset,
) -> ResolveOutcome {
    if ingredients.is_empty() {
        return ResolveOutcome::NoMatch;
    }

    for (recipe, multiset) in catalog.recipes.iter_with_multisets() {
        if !recipe.station.accepts(station) {
            continue;
        }
        if multiset != ingredients {
            continue;
        }
        if state.is_recipe_unlocked(&recipe.id) {
            return ResolveOutcome::Matched {
                recipe: recipe.id.clone(),
                food: recipe.result.clone(),
                cook_duration: recipe.cook_duration,
            };
        }
        return ResolveOutcome::Locked {
            recipe: recipe.id.clone(),
        };
    }

    ResolveOutcome::NoMatch
}
