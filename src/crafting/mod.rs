use bevy::prelude::*;

pub mod resolver;

pub use resolver::{resolve, ResolveOutcome};

use crate::catalog::{Catalog, FoodId, IngredientMultiset, StationType};
use crate::state::GameState;
use crate::GameplaySet;

/// Crafting attempt from the interaction layer: a station and whatever the
/// player threw in, in pickup order.
#[derive(Message, Debug, Clone)]
pub struct CraftRequest {
    pub station: StationType,
    pub ingredients: Vec<FoodId>,
}

/// Answer to a [`CraftRequest`], carrying the original inputs so the
/// presentation layer can animate against them.
#[derive(Message, Debug, Clone)]
pub struct CraftResolved {
    pub station: StationType,
    pub ingredients: Vec<FoodId>,
    pub outcome: ResolveOutcome,
}

pub fn resolve_craft_requests(
    mut requests: MessageReader<CraftRequest>,
    mut resolved: MessageWriter<CraftResolved>,
    catalog: Res<Catalog>,
    state: Res<GameState>,
) {
    for request in requests.read() {
        let ingredients = IngredientMultiset::from_ids(request.ingredients.iter().cloned());
        let outcome = resolve(&catalog, &state, request.station, &ingredients);
        resolved.write(CraftResolved {
            station: request.station,
            ingredients: request.ingredients.clone(),
            outcome,
        });
    }
}

pub struct CraftingPlugin;

impl Plugin for CraftingPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<CraftRequest>()
            .add_message::<CraftResolved>()
            .add_systems(
                Update,
                resolve_craft_requests
                    .run_if(resource_exists::<Catalog>)
                    .in_set(GameplaySet::Crafting),
            );
    }
}
