use bevy::prelude::*;
use thiserror::Error;

use crate::catalog::{Catalog, DialogueId, EventEffect, EventId, QuestId, RecipeId, StationType};
use crate::state::GameState;

/// What actually happened when an effect was applied. Surfaced to the
/// presentation layer (dialogue boxes, unlock banners, money popups).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EffectOutcome {
    DialogueStarted(DialogueId),
    QuestStarted(QuestId),
    QuestEnded(QuestId),
    RecipeUnlocked(RecipeId),
    StationUnlocked(StationType),
    MoneyGained { amount: u32, balance: u32 },
    /// `shortfall` is non-zero when the deduction was clamped at zero.
    MoneyLost { amount: u32, shortfall: u32, balance: u32 },
    SessionEnded,
    Nothing,
}

/// An effect outcome tagged with the event that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedEffect {
    pub event: EventId,
    pub outcome: EffectOutcome,
}

/// Apply-time failure for mandatory-reference effects. A validated catalog
/// cannot produce these; programmatically built effects can.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EffectError {
    #[error("effect references recipe '{recipe}' missing from the catalog")]
    UnknownRecipe { recipe: RecipeId },
}

/// Applies one effect against mutable session state. Side effects are
/// confined to [`GameState`]; presentation is never touched here.
pub fn apply(
    effect: &EventEffect,
    catalog: &Catalog,
    state: &mut GameState,
) -> Result<EffectOutcome, EffectError> {
    match effect {
        EventEffect::StartDialogue(dialogue) => {
            Ok(EffectOutcome::DialogueStarted(dialogue.clone()))
        }
        EventEffect::StartQuest(quest) => {
            if !state.active_quests.insert(quest.clone()) {
                warn!("quest '{quest}' started while already active");
            }
            Ok(EffectOutcome::QuestStarted(quest.clone()))
        }
        EventEffect::EndQuest(quest) => {
            if !state.active_quests.remove(quest) {
                warn!("quest '{quest}' ended without ever being active");
            }
            state.completed_quests.insert(quest.clone());
            Ok(EffectOutcome::QuestEnded(quest.clone()))
        }
        EventEffect::UnlockRecipe(recipe) | EventEffect::GiveRecipe(recipe) => {
            unlock_recipe(recipe, catalog, state)
        }
        EventEffect::UnlockStation(station) | EventEffect::GiveStation(station) => {
            state.unlocked_stations.insert(*station);
            Ok(EffectOutcome::StationUnlocked(*station))
        }
        EventEffect::GiveMoney(amount) => {
            let balance = state.add_money(*amount);
            Ok(EffectOutcome::MoneyGained {
                amount: *amount,
                balance,
            })
        }
        EventEffect::LoseMoney(amount) => {
            let deduction = state.deduct_money(*amount);
            Ok(EffectOutcome::MoneyLost {
                amount: *amount,
                shortfall: deduction.shortfall,
                balance: deduction.balance,
            })
        }
        EventEffect::GameOver => {
            state.session_over = true;
            Ok(EffectOutcome::SessionEnded)
        }
        EventEffect::None => Ok(EffectOutcome::Nothing),
    }
}

// Unlock and Give funnel through here; the two authoring kinds are
// behaviorally identical.
fn unlock_recipe(
    recipe: &RecipeId,
    catalog: &Catalog,
    state: &mut GameState,
) -> Result<EffectOutcome, EffectError> {
    if catalog.recipe(recipe).is_none() {
        return Err(EffectError::UnknownRecipe {
            recipe: recipe.clone(),
        });
    }
    state.unlocked_recipes.insert(recipe.clone());
    Ok(EffectOutcome::RecipeUnlocked(recipe.clone()))
}
