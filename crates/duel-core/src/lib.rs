//! Core types and definitions for the artillery duel simulation.
//!
//! This crate defines the vocabulary shared across the terrain and sim crates:
//! geometry, commands, events, snapshots, configuration, and constants.
//! It has no dependency on any rendering or windowing framework.

pub mod commands;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
