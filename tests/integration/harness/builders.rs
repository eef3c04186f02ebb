use bevy::prelude::*;

use the_bistro::{
    catalog::{
        Catalog, EffectKind, EventRegistry, FoodDef, FoodRegistry, MenuRegistry, RawEventDef,
        RecipeDef, RecipeRegistry, StationType,
    },
    crafting::{CraftRequest, ResolveOutcome},
    progression::GamePhase,
    state::GameState,
};

use crate::harness::{tick, ResolvedCrafts};

pub fn food(id: &str, station: StationType, cost: u32) -> FoodDef {
    FoodDef {
        id: id.to_string(),
        name: id.to_string(),
        description: String::new(),
        station,
        cost,
    }
}

pub fn recipe(id: &str, ingredients: &[&str], station: StationType, result: &str) -> RecipeDef {
    RecipeDef {
        id: id.to_string(),
        ingredients: ingredients.iter().map(ToString::to_string).collect(),
        station,
        cook_duration: 1.0,
        result: result.to_string(),
    }
}

pub fn raw_event(id: &str, day: u32, phase: GamePhase, kind: EffectKind, param: &str) -> RawEventDef {
    RawEventDef {
        id: id.to_string(),
        day,
        phase,
        effect: kind,
        param: param.to_string(),
    }
}

/// Minimal scripted catalog for effect scenarios: one craftable soup and a
/// harsh opening day.
pub fn scripted_catalog() -> Catalog {
    let foods = FoodRegistry::from_defs(vec![
        food("water", StationType::None, 0),
        food("stone", StationType::None, 0),
        food("stone_soup", StationType::Stove, 3),
    ])
    .unwrap();
    let recipes = RecipeRegistry::from_defs(vec![recipe(
        "stone_soup",
        &["stone", "water"],
        StationType::Stove,
        "stone_soup",
    )])
    .unwrap();
    let events = EventRegistry::from_raw(vec![
        raw_event("rent_due", 0, GamePhase::Morning, EffectKind::LoseMoney, "80"),
        raw_event("the_end", 0, GamePhase::Day, EffectKind::GameOver, ""),
        raw_event("last_order", 0, GamePhase::Day, EffectKind::GiveMoney, "5"),
        raw_event(
            "soup_kitchen",
            0,
            GamePhase::Evening,
            EffectKind::UnlockRecipe,
            "stone_soup",
        ),
    ])
    .unwrap();
    Catalog::load(foods, MenuRegistry::from_defs(Vec::new()).unwrap(), recipes, events).unwrap()
}

/// Drops the shipped starting unlocks so scripted catalogs start clean.
pub fn clear_starting_unlocks(world: &mut World) {
    let mut state = world.resource_mut::<GameState>();
    state.unlocked_recipes.clear();
    state.unlocked_stations.clear();
}

pub fn set_money(world: &mut World, amount: u32) {
    world.resource_mut::<GameState>().money = amount;
}

pub fn unlock_recipe(world: &mut World, id: &str) {
    world
        .resource_mut::<GameState>()
        .unlocked_recipes
        .insert(id.to_string());
}

/// Sends one craft request and runs the frame that answers it.
pub fn request_craft(app: &mut App, station: StationType, ingredients: &[&str]) {
    app.world_mut().write_message(CraftRequest {
        station,
        ingredients: ingredients.iter().map(ToString::to_string).collect(),
    });
    tick(app);
}

pub fn last_craft_outcome(app: &App) -> ResolveOutcome {
    app.world()
        .resource::<ResolvedCrafts>()
        .0
        .last()
        .map(|resolved| resolved.outcome.clone())
        .expect("no craft resolutions captured")
}
