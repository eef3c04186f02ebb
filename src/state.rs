use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::catalog::{EventId, QuestId, RecipeId, StationType};
use crate::constants::{STARTING_MONEY, STARTING_RECIPES, STARTING_STATIONS};

/// The single authoritative mutable state of a session. A flat record:
/// serializing it verbatim is the save layout.
///
/// Mutation happens only inside the clock, trigger, and effect systems on the
/// main schedule; everything else reads [`GameState::snapshot`] copies.
#[derive(Resource, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub money: u32,
    pub unlocked_recipes: BTreeSet<RecipeId>,
    pub unlocked_stations: BTreeSet<StationType>,
    pub active_quests: BTreeSet<QuestId>,
    pub completed_quests: BTreeSet<QuestId>,
    pub fired_events: BTreeSet<EventId>,
    pub session_over: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            money: STARTING_MONEY,
            unlocked_recipes: STARTING_RECIPES.iter().map(ToString::to_string).collect(),
            unlocked_stations: STARTING_STATIONS.iter().copied().collect(),
            active_quests: BTreeSet::new(),
            completed_quests: BTreeSet::new(),
            fired_events: BTreeSet::new(),
            session_over: false,
        }
    }
}

/// Result of a clamped money deduction. `shortfall` is the part of the
/// requested amount the balance could not cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoneyDeduction {
    pub shortfall: u32,
    pub balance: u32,
}

impl GameState {
    /// Owned copy for presentation layers; they never hold live references.
    pub fn snapshot(&self) -> GameState {
        self.clone()
    }

    pub fn add_money(&mut self, amount: u32) -> u32 {
        self.money = self.money.saturating_add(amount);
        self.money
    }

    /// Deducts up to `amount`, clamping the balance at zero.
    pub fn deduct_money(&mut self, amount: u32) -> MoneyDeduction {
        let paid = amount.min(self.money);
        self.money -= paid;
        MoneyDeduction {
            shortfall: amount - paid,
            balance: self.money,
        }
    }

    pub fn is_recipe_unlocked(&self, id: &str) -> bool {
        self.unlocked_recipes.contains(id)
    }

    pub fn is_station_unlocked(&self, station: StationType) -> bool {
        self.unlocked_stations.contains(&station)
    }

    pub fn has_fired(&self, event: &str) -> bool {
        self.fired_events.contains(event)
    }
}
