//! Grab subsystem - per-entity grab metadata plus the input systems that
//! grab, carry, and release the wand prop.

pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::GrabPlugin;
