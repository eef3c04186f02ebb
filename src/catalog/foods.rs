use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::catalog::validation::ValidationError;

pub type FoodId = String;

/// Crafting location required to produce a food. `None` means any station
/// (or no station at all) is acceptable.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub enum StationType {
    #[default]
    None,
    Counter,
    CuttingBoard,
    Stove,
    Oven,
    Fryer,
}

impl StationType {
    pub fn display_name(self) -> &'static str {
        match self {
            StationType::None => "Any",
            StationType::Counter => "Counter",
            StationType::CuttingBoard => "Cutting Board",
            StationType::Stove => "Stove",
            StationType::Oven => "Oven",
            StationType::Fryer => "Fryer",
        }
    }

    /// Station compatibility for recipe matching: either side being `None`
    /// wildcards the check.
    pub fn accepts(self, other: StationType) -> bool {
        self == StationType::None || other == StationType::None || self == other
    }

    /// Parses the station name used in event effect parameters.
    pub fn from_name(name: &str) -> Option<StationType> {
        match name.trim() {
            "None" => Some(StationType::None),
            "Counter" => Some(StationType::Counter),
            "CuttingBoard" => Some(StationType::CuttingBoard),
            "Stove" => Some(StationType::Stove),
            "Oven" => Some(StationType::Oven),
            "Fryer" => Some(StationType::Fryer),
            _ => None,
        }
    }
}

impl std::fmt::Display for StationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FoodDef {
    pub id: FoodId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub station: StationType,
    pub cost: u32,
}

#[derive(Debug, Clone, Default)]
pub struct FoodRegistry {
    defs: Vec<FoodDef>,
    index: HashMap<FoodId, usize>,
}

impl FoodRegistry {
    pub fn from_defs(defs: Vec<FoodDef>) -> Result<Self, ValidationError> {
        let mut index = HashMap::new();
        for (i, def) in defs.iter().enumerate() {
            if index.insert(def.id.clone(), i).is_some() {
                return Err(ValidationError::DuplicateId {
                    kind: "food",
                    id: def.id.clone(),
                });
            }
        }
        Ok(Self { defs, index })
    }

    pub fn from_ron(ron_content: &str) -> Result<Self, ValidationError> {
        let defs: Vec<FoodDef> = ron::from_str(ron_content)
            .map_err(|source| ValidationError::Asset { file: "foods.ron", source })?;
        Self::from_defs(defs)
    }

    pub fn get(&self, id: &str) -> Option<&FoodDef> {
        self.index.get(id).map(|&i| &self.defs[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Definitions in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &FoodDef> {
        self.defs.iter()
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}
