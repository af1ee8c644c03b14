//! Wand module - the bubble emitter controller: spawn a bubble at the wand
//! tip while held, grow it with wand speed, release or pop it.

pub mod components;
pub mod config;
pub mod plugin;
pub mod systems;

pub use plugin::WandPlugin;
