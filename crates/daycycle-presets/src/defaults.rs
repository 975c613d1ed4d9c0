//! Built-in presets shipped with the workspace, embedded at compile time.

use daycycle_core::preset::LightingPreset;
use daycycle_core::settings::LightingSettings;

use crate::loader::{load_preset_from_str, load_settings_from_str, LoadError};

pub const TEMPERATE_RON: &str = include_str!("../../../data/presets/temperate.ron");
pub const DESERT_RON: &str = include_str!("../../../data/presets/desert.ron");
pub const ARCTIC_RON: &str = include_str!("../../../data/presets/arctic.ron");
pub const DEFAULT_SETTINGS_RON: &str = include_str!("../../../data/settings/default.ron");

/// Name of the preset used when none is requested.
pub const DEFAULT_PRESET_NAME: &str = "temperate";

/// Names of the built-in presets, in the order they are listed.
pub const BUILTIN_PRESET_NAMES: [&str; 3] = ["temperate", "desert", "arctic"];

/// RON source of a built-in preset.
pub fn builtin_preset_source(name: &str) -> Option<&'static str> {
    match name {
        "temperate" => Some(TEMPERATE_RON),
        "desert" => Some(DESERT_RON),
        "arctic" => Some(ARCTIC_RON),
        _ => None,
    }
}

/// Parse a built-in preset by name. `Ok(None)` if the name is unknown.
pub fn builtin_preset(name: &str) -> Result<Option<LightingPreset>, LoadError> {
    builtin_preset_source(name)
        .map(load_preset_from_str)
        .transpose()
}

/// Parse every built-in preset.
pub fn builtin_presets() -> Result<Vec<LightingPreset>, LoadError> {
    BUILTIN_PRESET_NAMES
        .iter()
        .filter_map(|name| builtin_preset_source(name))
        .map(load_preset_from_str)
        .collect()
}

/// Parse the shipped default settings file.
pub fn default_settings() -> Result<LightingSettings, LoadError> {
    load_settings_from_str(DEFAULT_SETTINGS_RON)
}
