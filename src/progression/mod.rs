use bevy::prelude::*;

pub mod clock;
pub mod effects;
pub mod triggers;

pub use clock::{advance_clock, AdvancePhaseRequest, GameClock, GamePhase, PhaseChanged};
pub use effects::{apply, AppliedEffect, EffectError, EffectOutcome};
pub use triggers::{check_and_fire, fire_due_events, EffectApplied, EffectLog};

use crate::catalog::Catalog;
use crate::state::GameState;
use crate::GameplaySet;

pub struct ProgressionPlugin;

impl Plugin for ProgressionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameClock>()
            .init_resource::<GameState>()
            .init_resource::<EffectLog>()
            .add_message::<AdvancePhaseRequest>()
            .add_message::<PhaseChanged>()
            .add_message::<EffectApplied>()
            .add_systems(
                Update,
                (
                    advance_clock.in_set(GameplaySet::ClockUpdate),
                    fire_due_events
                        .run_if(resource_exists::<Catalog>)
                        .in_set(GameplaySet::EventTriggers),
                ),
            );
    }
}
