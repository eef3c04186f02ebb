use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Discrete segment of a game day, used as an event-trigger dimension.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub enum GamePhase {
    #[default]
    Morning,
    Day,
    Evening,
}

impl GamePhase {
    pub fn display_name(self) -> &'static str {
        match self {
            GamePhase::Morning => "Morning",
            GamePhase::Day => "Day",
            GamePhase::Evening => "Evening",
        }
    }

    /// Next phase in the fixed cyclic order.
    pub fn next(self) -> GamePhase {
        match self {
            GamePhase::Morning => GamePhase::Day,
            GamePhase::Day => GamePhase::Evening,
            GamePhase::Evening => GamePhase::Morning,
        }
    }

    pub fn first() -> GamePhase {
        GamePhase::Morning
    }

    pub fn all() -> [GamePhase; 3] {
        [GamePhase::Morning, GamePhase::Day, GamePhase::Evening]
    }
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Current (day, phase). Only [`GameClock::advance_phase`] mutates time, and
/// it is driven externally through [`AdvancePhaseRequest`].
#[derive(Resource, Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameClock {
    pub day: u32,
    pub phase: GamePhase,
}

impl GameClock {
    pub fn advance_phase(&mut self) {
        let next = self.phase.next();
        if next == GamePhase::first() {
            self.day += 1;
        }
        self.phase = next;
    }

    pub fn slot(&self) -> (u32, GamePhase) {
        (self.day, self.phase)
    }
}

/// External day-end/phase-end signal (interaction layer in, one step per
/// message).
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct AdvancePhaseRequest;

/// Emitted once per completed clock step, in order.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseChanged {
    pub day: u32,
    pub phase: GamePhase,
}

pub fn advance_clock(
    mut requests: MessageReader<AdvancePhaseRequest>,
    mut clock: ResMut<GameClock>,
    mut changed: MessageWriter<PhaseChanged>,
) {
    for _ in requests.read() {
        clock.advance_phase();
        debug!("clock advanced to day {} {}", clock.day, clock.phase);
        changed.write(PhaseChanged {
            day: clock.day,
            phase: clock.phase,
        });
    }
}
