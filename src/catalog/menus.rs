use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::catalog::foods::FoodId;
use crate::catalog::validation::ValidationError;

pub type MenuId = String;

/// A customer-facing menu offering: what goes into it, how long it takes,
/// and what it sells for.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MenuDef {
    pub id: MenuId,
    pub name: String,
    /// Ordered, non-empty. Every entry must resolve to a food id.
    pub ingredients: Vec<FoodId>,
    pub cook_duration: f32,
    pub cost: u32,
}

#[derive(Debug, Clone, Default)]
pub struct MenuRegistry {
    defs: Vec<MenuDef>,
    index: HashMap<MenuId, usize>,
}

impl MenuRegistry {
    pub fn from_defs(defs: Vec<MenuDef>) -> Result<Self, ValidationError> {
        let mut index = HashMap::new();
        for (i, def) in defs.iter().enumerate() {
            if index.insert(def.id.clone(), i).is_some() {
                return Err(ValidationError::DuplicateId {
                    kind: "menu",
                    id: def.id.clone(),
                });
            }
        }
        Ok(Self { defs, index })
    }

    pub fn from_ron(ron_content: &str) -> Result<Self, ValidationError> {
        let defs: Vec<MenuDef> = ron::from_str(ron_content)
            .map_err(|source| ValidationError::Asset { file: "menus.ron", source })?;
        Self::from_defs(defs)
    }

    pub fn get(&self, id: &str) -> Option<&MenuDef> {
        self.index.get(id).map(|&i| &self.defs[i])
    }

    /// Definitions in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &MenuDef> {
        self.defs.iter()
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}
