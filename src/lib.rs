// Library target exists for the binary and integration tests — suppress
// library-API lints that don't apply to a game crate.
#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::implicit_hasher
)]

pub mod catalog;
pub mod constants;
pub mod crafting;
pub mod progression;
pub mod state;

#[cfg(debug_assertions)]
pub mod invariants;

use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum GameplaySet {
    ClockUpdate,
    EventTriggers,
    Crafting,
    UIUpdate,
}

pub fn configure_system_sets(app: &mut App) {
    app.configure_sets(
        Update,
        (
            GameplaySet::ClockUpdate,
            GameplaySet::EventTriggers,
            GameplaySet::Crafting,
            GameplaySet::UIUpdate,
        )
            .chain(),
    );
}
