//! Tunable emitter parameters loaded from `config/wand.toml`.
use std::{fs, path::Path};

use bevy::prelude::*;
use serde::Deserialize;

const CONFIG_PATH: &str = "config/wand.toml";

#[derive(Debug, Clone, Deserialize, Default)]
struct RawWandConfig {
    #[serde(default)]
    wand: RawWandSection,
    #[serde(default)]
    growth: RawGrowthSection,
    #[serde(default)]
    release: RawReleaseSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawWandSection {
    tip_offset: f32,
    velocity_multiplier: f32,
    velocity_threshold: f32,
}

impl Default for RawWandSection {
    fn default() -> Self {
        Self {
            tip_offset: 0.05,
            velocity_multiplier: 100.0,
            velocity_threshold: 1.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawGrowthSection {
    growth_factor: f32,
    shrink_factor: f32,
    shrink_lower_limit: f32,
    initial_dimension: f32,
}

impl Default for RawGrowthSection {
    fn default() -> Self {
        Self {
            growth_factor: 0.005,
            shrink_factor: 0.001,
            shrink_lower_limit: 0.02,
            initial_dimension: 0.01,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawReleaseSection {
    size_min: u32,
    size_max: u32,
    size_divisor: f32,
    lifetime_min_seconds: u32,
    lifetime_max_seconds: u32,
}

impl Default for RawReleaseSection {
    fn default() -> Self {
        Self {
            size_min: 1,
            size_max: 5,
            size_divisor: 50.0,
            lifetime_min_seconds: 3,
            lifetime_max_seconds: 8,
        }
    }
}

/// Sanitized emitter parameters. With the defaults, a wand moving fast
/// enough grows the bubble, a still wand deflates it, and a bubble past a
/// randomized target size in [0.02, 0.10] floats off with a 3-8 second
/// lifetime.
#[derive(Resource, Debug, Clone)]
pub struct WandSettings {
    pub tip_offset: f32,
    pub velocity_multiplier: f32,
    pub velocity_threshold: f32,
    pub growth_factor: f32,
    pub shrink_factor: f32,
    pub shrink_lower_limit: f32,
    pub initial_dimension: f32,
    pub size_min: u32,
    pub size_max: u32,
    pub size_divisor: f32,
    pub lifetime_min_seconds: u32,
    pub lifetime_max_seconds: u32,
}

impl WandSettings {
    pub fn load_or_default() -> Self {
        let path = Path::new(CONFIG_PATH);
        match fs::read_to_string(path) {
            Ok(data) => match toml::from_str::<RawWandConfig>(&data) {
                Ok(raw) => raw.into(),
                Err(err) => {
                    warn!(
                        "Failed to parse {} ({}). Falling back to defaults.",
                        CONFIG_PATH, err
                    );
                    RawWandConfig::default().into()
                }
            },
            Err(err) => {
                warn!(
                    "Failed to read {} ({}). Falling back to defaults.",
                    CONFIG_PATH, err
                );
                RawWandConfig::default().into()
            }
        }
    }
}

impl Default for WandSettings {
    fn default() -> Self {
        RawWandConfig::default().into()
    }
}

impl From<RawWandConfig> for WandSettings {
    fn from(value: RawWandConfig) -> Self {
        let wand = value.wand;
        let growth = value.growth;
        let release = value.release;

        let size_min = release.size_min.max(1);
        let size_max = release.size_max.max(1);
        let lifetime_min = release.lifetime_min_seconds.max(1);
        let lifetime_max = release.lifetime_max_seconds.max(1);

        Self {
            tip_offset: wand.tip_offset.max(0.0),
            velocity_multiplier: wand.velocity_multiplier.max(0.0),
            velocity_threshold: wand.velocity_threshold.max(0.0),
            growth_factor: growth.growth_factor.max(0.0),
            shrink_factor: growth.shrink_factor.max(0.0),
            shrink_lower_limit: growth.shrink_lower_limit.max(0.0),
            initial_dimension: growth.initial_dimension.max(0.001),
            size_min: size_min.min(size_max),
            size_max: size_min.max(size_max),
            size_divisor: release.size_divisor.max(1.0),
            lifetime_min_seconds: lifetime_min.min(lifetime_max),
            lifetime_max_seconds: lifetime_min.max(lifetime_max),
        }
    }
}
