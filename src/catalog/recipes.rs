use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::catalog::foods::{FoodId, StationType};
use crate::catalog::validation::ValidationError;

pub type RecipeId = String;

/// A craftable recipe. Ingredient duplicates are meaningful: a recipe that
/// wants two onions is distinct from one that wants one.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RecipeDef {
    pub id: RecipeId,
    pub ingredients: Vec<FoodId>,
    #[serde(default)]
    pub station: StationType,
    pub cook_duration: f32,
    pub result: FoodId,
}

/// Order-insensitive, quantity-sensitive bag of food ids.
///
/// Canonical representation for both resolve-time matching and the load-time
/// (station, ingredients) ambiguity key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct IngredientMultiset {
    counts: BTreeMap<FoodId, u32>,
}

impl IngredientMultiset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<FoodId>,
    {
        let mut multiset = Self::new();
        for id in ids {
            multiset.insert(id);
        }
        multiset
    }

    pub fn insert(&mut self, id: impl Into<FoodId>) {
        *self.counts.entry(id.into()).or_insert(0) += 1;
    }

    pub fn count(&self, id: &str) -> u32 {
        self.counts.get(id).copied().unwrap_or(0)
    }

    /// Total units across all ids.
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FoodId, u32)> {
        self.counts.iter().map(|(id, &count)| (id, count))
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecipeRegistry {
    defs: Vec<RecipeDef>,
    multisets: Vec<IngredientMultiset>,
    index: HashMap<RecipeId, usize>,
}

impl RecipeRegistry {
    pub fn from_defs(defs: Vec<RecipeDef>) -> Result<Self, ValidationError> {
        let mut index = HashMap::new();
        for (i, def) in defs.iter().enumerate() {
            if index.insert(def.id.clone(), i).is_some() {
                return Err(ValidationError::DuplicateId {
                    kind: "recipe",
                    id: def.id.clone(),
                });
            }
        }
        let multisets = defs
            .iter()
            .map(|def| IngredientMultiset::from_ids(def.ingredients.iter().cloned()))
            .collect();
        Ok(Self { defs, multisets, index })
    }

    pub fn from_ron(ron_content: &str) -> Result<Self, ValidationError> {
        let defs: Vec<RecipeDef> = ron::from_str(ron_content)
            .map_err(|source| ValidationError::Asset { file: "recipes.ron", source })?;
        Self::from_defs(defs)
    }

    pub fn get(&self, id: &str) -> Option<&RecipeDef> {
        self.index.get(id).map(|&i| &self.defs[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Definitions in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &RecipeDef> {
        self.defs.iter()
    }

    /// Definitions paired with their precomputed ingredient multisets,
    /// in declaration order.
    pub fn iter_with_multisets(&self) -> impl Iterator<Item = (&RecipeDef, &IngredientMultiset)> {
        self.defs.iter().zip(self.multisets.iter())
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}
