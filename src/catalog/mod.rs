use bevy::prelude::*;

pub mod events;
pub mod foods;
pub mod menus;
pub mod recipes;
pub mod validation;

pub use events::{
    DialogueId, EffectKind, EventEffect, EventId, EventRegistry, GameEventDef, QuestId,
    RawEventDef,
};
pub use foods::{FoodDef, FoodId, FoodRegistry, StationType};
pub use menus::{MenuDef, MenuId, MenuRegistry};
pub use recipes::{IngredientMultiset, RecipeDef, RecipeId, RecipeRegistry};
pub use validation::{validate, ValidationError};

/// Immutable content registry. Built once at startup from RON data assets,
/// validated as a whole, then read-only for the rest of the session.
#[derive(Resource, Debug, Clone)]
pub struct Catalog {
    pub foods: FoodRegistry,
    pub menus: MenuRegistry,
    pub recipes: RecipeRegistry,
    pub events: EventRegistry,
}

impl Catalog {
    pub fn load(
        foods: FoodRegistry,
        menus: MenuRegistry,
        recipes: RecipeRegistry,
        events: EventRegistry,
    ) -> Result<Self, ValidationError> {
        validate(&foods, &menus, &recipes, &events)?;
        Ok(Self {
            foods,
            menus,
            recipes,
            events,
        })
    }

    pub fn from_ron(
        foods_ron: &str,
        menus_ron: &str,
        recipes_ron: &str,
        events_ron: &str,
    ) -> Result<Self, ValidationError> {
        Self::load(
            FoodRegistry::from_ron(foods_ron)?,
            MenuRegistry::from_ron(menus_ron)?,
            RecipeRegistry::from_ron(recipes_ron)?,
            EventRegistry::from_ron(events_ron)?,
        )
    }

    /// Loads the content set embedded in the binary.
    pub fn load_from_assets() -> Result<Self, ValidationError> {
        Self::from_ron(
            include_str!("../assets/foods.ron"),
            include_str!("../assets/menus.ron"),
            include_str!("../assets/recipes.ron"),
            include_str!("../assets/events.ron"),
        )
    }

    pub fn food(&self, id: &str) -> Option<&FoodDef> {
        self.foods.get(id)
    }

    pub fn menu(&self, id: &str) -> Option<&MenuDef> {
        self.menus.get(id)
    }

    pub fn recipe(&self, id: &str) -> Option<&RecipeDef> {
        self.recipes.get(id)
    }

    pub fn event(&self, id: &str) -> Option<&GameEventDef> {
        self.events.get(id)
    }
}

fn setup(mut commands: Commands) {
    match Catalog::load_from_assets() {
        Ok(catalog) => {
            info!(
                "catalog loaded: {} foods, {} menus, {} recipes, {} events",
                catalog.foods.len(),
                catalog.menus.len(),
                catalog.recipes.len(),
                catalog.events.len()
            );
            commands.insert_resource(catalog);
        }
        // Systems gate on the Catalog resource, so a rejected catalog means
        // the session never starts.
        Err(err) => error!("catalog rejected: {err}"),
    }
}

pub struct CatalogPlugin;

impl Plugin for CatalogPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup);
    }
}
