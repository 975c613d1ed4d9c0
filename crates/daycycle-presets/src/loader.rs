use std::path::{Path, PathBuf};

use daycycle_core::preset::LightingPreset;
use daycycle_core::settings::LightingSettings;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to parse preset RON: {0}")]
    PresetParseError(String),
    #[error("Failed to parse settings RON: {0}")]
    SettingsParseError(String),
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Parse a single preset RON string.
pub fn load_preset_from_str(ron_str: &str) -> Result<LightingPreset, LoadError> {
    let options = ron::Options::default();
    options
        .from_str(ron_str)
        .map_err(|e| LoadError::PresetParseError(e.to_string()))
}

/// Parse several preset sources, keeping their order.
pub fn load_all_presets(sources: &[&str]) -> Result<Vec<LightingPreset>, LoadError> {
    let mut presets = Vec::with_capacity(sources.len());
    for source in sources {
        presets.push(load_preset_from_str(source)?);
    }
    Ok(presets)
}

/// Parse evaluator settings. Missing fields take their defaults.
pub fn load_settings_from_str(ron_str: &str) -> Result<LightingSettings, LoadError> {
    let options = ron::Options::default();
    options
        .from_str(ron_str)
        .map_err(|e| LoadError::SettingsParseError(e.to_string()))
}

fn read_file(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse a preset file.
pub fn load_preset_file(path: &Path) -> Result<LightingPreset, LoadError> {
    let preset = load_preset_from_str(&read_file(path)?)?;
    log::debug!("Loaded preset '{}' from {}", preset.name, path.display());
    Ok(preset)
}

/// Read and parse a settings file.
pub fn load_settings_file(path: &Path) -> Result<LightingSettings, LoadError> {
    let settings = load_settings_from_str(&read_file(path)?)?;
    log::debug!("Loaded lighting settings from {}", path.display());
    Ok(settings)
}
