#![allow(dead_code)]

use crate::catalog::StationType;

/// Cash on hand when a new session begins.
pub const STARTING_MONEY: u32 = 120;

/// Recipes the bistro already knows on day 0.
pub const STARTING_RECIPES: &[&str] = &["chopped_salad", "house_burger"];

/// Stations installed on day 0. The rest arrive through events.
pub const STARTING_STATIONS: &[StationType] = &[
    StationType::Counter,
    StationType::CuttingBoard,
    StationType::Stove,
];
