//! Frostmarch - Survival Simulation Core

pub mod body;
pub mod core;
pub mod effects;
pub mod simulation;
pub mod survival;
