use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::catalog::foods::StationType;
use crate::catalog::recipes::RecipeId;
use crate::catalog::validation::ValidationError;
use crate::progression::clock::GamePhase;

pub type EventId = String;
pub type QuestId = String;
pub type DialogueId = String;

/// Effect kind as authored in event data. Raw events carry a `(kind, param)`
/// pair; the param string is interpreted per kind and parsed exactly once at
/// catalog load.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    StartDialogue,
    StartQuest,
    EndQuest,
    UnlockRecipe,
    UnlockStation,
    GiveMoney,
    GiveRecipe,
    GiveStation,
    LoseMoney,
    GameOver,
    None,
}

/// Authoring form of an event, as it appears in `events.ron`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RawEventDef {
    pub id: EventId,
    pub day: u32,
    pub phase: GamePhase,
    pub effect: EffectKind,
    #[serde(default)]
    pub param: String,
}

/// Fully parsed effect payload. `Unlock*` and `Give*` are kept as distinct
/// authoring kinds with identical behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventEffect {
    StartDialogue(DialogueId),
    StartQuest(QuestId),
    EndQuest(QuestId),
    UnlockRecipe(RecipeId),
    UnlockStation(StationType),
    GiveRecipe(RecipeId),
    GiveStation(StationType),
    GiveMoney(u32),
    LoseMoney(u32),
    GameOver,
    None,
}

impl EventEffect {
    fn from_raw(event: &str, kind: EffectKind, param: &str) -> Result<Self, ValidationError> {
        let id_param = || -> Result<String, ValidationError> {
            let trimmed = param.trim();
            if trimmed.is_empty() {
                return Err(ValidationError::BadEffectParam {
                    event: event.to_string(),
                    detail: format!("{kind:?} requires a non-empty id parameter"),
                });
            }
            Ok(trimmed.to_string())
        };
        let station_param = || -> Result<StationType, ValidationError> {
            StationType::from_name(param).ok_or_else(|| ValidationError::BadEffectParam {
                event: event.to_string(),
                detail: format!("'{param}' is not a station name"),
            })
        };
        let amount_param = || -> Result<u32, ValidationError> {
            param
                .trim()
                .parse::<u32>()
                .map_err(|_| ValidationError::BadEffectParam {
                    event: event.to_string(),
                    detail: format!("'{param}' is not a non-negative integer amount"),
                })
        };

        Ok(match kind {
            EffectKind::StartDialogue => EventEffect::StartDialogue(id_param()?),
            EffectKind::StartQuest => EventEffect::StartQuest(id_param()?),
            EffectKind::EndQuest => EventEffect::EndQuest(id_param()?),
            EffectKind::UnlockRecipe => EventEffect::UnlockRecipe(id_param()?),
            EffectKind::UnlockStation => EventEffect::UnlockStation(station_param()?),
            EffectKind::GiveRecipe => EventEffect::GiveRecipe(id_param()?),
            EffectKind::GiveStation => EventEffect::GiveStation(station_param()?),
            EffectKind::GiveMoney => EventEffect::GiveMoney(amount_param()?),
            EffectKind::LoseMoney => EventEffect::LoseMoney(amount_param()?),
            EffectKind::GameOver => EventEffect::GameOver,
            EffectKind::None => EventEffect::None,
        })
    }
}

/// A loaded event definition with its effect parsed into a typed payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEventDef {
    pub id: EventId,
    pub day: u32,
    pub phase: GamePhase,
    pub effect: EventEffect,
}

#[derive(Debug, Clone, Default)]
pub struct EventRegistry {
    defs: Vec<GameEventDef>,
    index: HashMap<EventId, usize>,
}

impl EventRegistry {
    pub fn from_raw(raw: Vec<RawEventDef>) -> Result<Self, ValidationError> {
        let mut defs = Vec::with_capacity(raw.len());
        let mut index = HashMap::new();
        for (i, raw_def) in raw.into_iter().enumerate() {
            if index.insert(raw_def.id.clone(), i).is_some() {
                return Err(ValidationError::DuplicateId {
                    kind: "event",
                    id: raw_def.id,
                });
            }
            let effect = EventEffect::from_raw(&raw_def.id, raw_def.effect, &raw_def.param)?;
            defs.push(GameEventDef {
                id: raw_def.id,
                day: raw_def.day,
                phase: raw_def.phase,
                effect,
            });
        }
        Ok(Self { defs, index })
    }

    pub fn from_ron(ron_content: &str) -> Result<Self, ValidationError> {
        let raw: Vec<RawEventDef> = ron::from_str(ron_content)
            .map_err(|source| ValidationError::Asset { file: "events.ron", source })?;
        Self::from_raw(raw)
    }

    pub fn get(&self, id: &str) -> Option<&GameEventDef> {
        self.index.get(id).map(|&i| &self.defs[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Definitions in declaration order; the trigger engine relies on this
    /// for deterministic firing.
    pub fn iter(&self) -> impl Iterator<Item = &GameEventDef> {
        self.defs.iter()
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}
