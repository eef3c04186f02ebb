use bevy::prelude::*;

use crate::catalog::Catalog;
use crate::state::GameState;

pub struct InvariantPlugin;

impl Plugin for InvariantPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            PostUpdate,
            (
                check_fired_events_known,
                check_unlocked_recipes_known,
                check_quest_sets_disjoint,
            ),
        );
    }
}

fn report_violation(message: &str) {
    let msg = format!("INVARIANT VIOLATION: {message}");
    if cfg!(test) {
        #[allow(clippy::panic)]
        {
            panic!("{msg}");
        }
    } else {
        error!("{msg}");
    }
}

fn check_fired_events_known(catalog: Option<Res<Catalog>>, state: Res<GameState>) {
    let Some(catalog) = catalog else { return };
    for id in &state.fired_events {
        if catalog.event(id).is_none() {
            report_violation(&format!("fired event '{id}' missing from catalog"));
        }
    }
}

fn check_unlocked_recipes_known(catalog: Option<Res<Catalog>>, state: Res<GameState>) {
    let Some(catalog) = catalog else { return };
    for id in &state.unlocked_recipes {
        if catalog.recipe(id).is_none() {
            report_violation(&format!("unlocked recipe '{id}' missing from catalog"));
        }
    }
}

fn check_quest_sets_disjoint(state: Res<GameState>) {
    for id in &state.active_quests {
        if state.completed_quests.contains(id) {
            report_violation(&format!("quest '{id}' is both active and completed"));
        }
    }
}
