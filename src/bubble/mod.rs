//! Bubble module - what a bubble does once it exists: looks like a bubble,
//! follows its dimensions, drifts off when released, and pops on schedule.

pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::BubblePlugin;
