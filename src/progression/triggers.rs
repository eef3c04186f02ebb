use bevy::prelude::*;

use crate::catalog::Catalog;
use crate::progression::clock::{GameClock, PhaseChanged};
use crate::progression::effects::{apply, AppliedEffect};
use crate::state::GameState;

/// Buffered copy of [`AppliedEffect`] for presentation layers.
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub struct EffectApplied(pub AppliedEffect);

/// Session-long record of every applied effect, in firing order.
#[derive(Resource, Debug, Clone, Default)]
pub struct EffectLog {
    entries: Vec<AppliedEffect>,
}

impl EffectLog {
    pub fn entries(&self) -> &[AppliedEffect] {
        &self.entries
    }

    pub fn push(&mut self, applied: AppliedEffect) {
        self.entries.push(applied);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Fires every not-yet-fired event scheduled for the clock's current
/// (day, phase), in catalog declaration order.
///
/// Each event is marked fired before its effect is applied and before the
/// next event is considered; an earlier `GameOver` in the batch does not
/// suppress later firings. Apply-time errors are logged and skipped, the
/// batch continues. Re-entry for an already-visited slot is a no-op thanks to
/// `fired_events`, so rewound clocks are safe.
pub fn check_and_fire(
    catalog: &Catalog,
    clock: &GameClock,
    state: &mut GameState,
) -> Vec<AppliedEffect> {
    let due: Vec<_> = catalog
        .events
        .iter()
        .filter(|event| {
            event.day == clock.day
                && event.phase == clock.phase
                && !state.fired_events.contains(&event.id)
        })
        .collect();

    let mut applied = Vec::with_capacity(due.len());
    for event in due {
        state.fired_events.insert(event.id.clone());
        match apply(&event.effect, catalog, state) {
            Ok(outcome) => {
                info!("event '{}' fired: {outcome:?}", event.id);
                applied.push(AppliedEffect {
                    event: event.id.clone(),
                    outcome,
                });
            }
            Err(err) => warn!("event '{}' skipped: {err}", event.id),
        }
    }
    applied
}

/// System wrapper: fires the session's starting slot once, then one batch per
/// completed clock step. Intermediate phases from multi-step frames are each
/// checked against their own slot, never skipped.
pub fn fire_due_events(
    mut session_started: Local<bool>,
    mut changed: MessageReader<PhaseChanged>,
    catalog: Res<Catalog>,
    clock: Res<GameClock>,
    mut state: ResMut<GameState>,
    mut log: ResMut<EffectLog>,
    mut applied_out: MessageWriter<EffectApplied>,
) {
    if !*session_started {
        *session_started = true;
        let applied = check_and_fire(&catalog, &clock, &mut state);
        publish(applied, &mut log, &mut applied_out);
    }

    for step in changed.read() {
        let slot = GameClock {
            day: step.day,
            phase: step.phase,
        };
        let applied = check_and_fire(&catalog, &slot, &mut state);
        publish(applied, &mut log, &mut applied_out);
    }
}

fn publish(
    applied: Vec<AppliedEffect>,
    log: &mut EffectLog,
    applied_out: &mut MessageWriter<EffectApplied>,
) {
    for entry in applied {
        applied_out.write(EffectApplied(entry.clone()));
        log.push(entry);
    }
}
