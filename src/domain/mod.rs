//! Simulation entities and their configuration.

pub mod body;
pub mod scene;
pub mod settings;
