//! CLI command implementations

pub mod alphabet;
pub mod generate;
pub mod innovations;
pub mod next;
pub mod verify;
