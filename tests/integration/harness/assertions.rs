use bevy::prelude::*;

use the_bistro::{
    catalog::StationType,
    progression::{EffectLog, EffectOutcome},
    state::GameState,
};

pub fn assert_money(world: &World, expected: u32) {
    let state = world.resource::<GameState>();
    assert_eq!(
        state.money, expected,
        "expected balance {expected}, found {}",
        state.money
    );
}

pub fn assert_recipe_unlocked(world: &World, id: &str) {
    let state = world.resource::<GameState>();
    assert!(
        state.is_recipe_unlocked(id),
        "recipe '{id}' should be unlocked, unlocked set: {:?}",
        state.unlocked_recipes
    );
}

pub fn assert_recipe_locked(world: &World, id: &str) {
    let state = world.resource::<GameState>();
    assert!(
        !state.is_recipe_unlocked(id),
        "recipe '{id}' should still be locked"
    );
}

pub fn assert_station_unlocked(world: &World, station: StationType) {
    let state = world.resource::<GameState>();
    assert!(
        state.is_station_unlocked(station),
        "station {station} should be unlocked, unlocked set: {:?}",
        state.unlocked_stations
    );
}

pub fn assert_event_fired(world: &World, id: &str) {
    let state = world.resource::<GameState>();
    assert!(
        state.has_fired(id),
        "event '{id}' should have fired, fired set: {:?}",
        state.fired_events
    );
}

pub fn assert_event_not_fired(world: &World, id: &str) {
    let state = world.resource::<GameState>();
    assert!(!state.has_fired(id), "event '{id}' should not have fired yet");
}

pub fn assert_quest_active(world: &World, id: &str) {
    let state = world.resource::<GameState>();
    assert!(
        state.active_quests.contains(id),
        "quest '{id}' should be active, active set: {:?}",
        state.active_quests
    );
}

pub fn assert_quest_completed(world: &World, id: &str) {
    let state = world.resource::<GameState>();
    assert!(
        state.completed_quests.contains(id),
        "quest '{id}' should be completed, completed set: {:?}",
        state.completed_quests
    );
}

pub fn assert_session_over(world: &World) {
    assert!(
        world.resource::<GameState>().session_over,
        "session_over flag should be set"
    );
}

/// Asserts the effect log contains an entry for `event` whose outcome passes
/// the predicate.
pub fn assert_effect_logged(
    world: &World,
    event: &str,
    predicate: impl Fn(&EffectOutcome) -> bool,
) {
    let log = world.resource::<EffectLog>();
    let found = log
        .entries()
        .iter()
        .any(|applied| applied.event == event && predicate(&applied.outcome));
    assert!(
        found,
        "no matching effect logged for '{event}', log: {:?}",
        log.entries()
    );
}
