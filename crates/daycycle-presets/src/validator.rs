use std::collections::HashSet;

use daycycle_core::error::SettingsError;
use daycycle_core::preset::LightingPreset;
use daycycle_core::settings::LightingSettings;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("Preset has an empty name")]
    EmptyPresetName,
    #[error("Duplicate preset name '{0}'")]
    DuplicatePresetName(String),
    #[error("Preset '{preset}' gradient '{gradient}' has a non-finite color channel")]
    NonFiniteColor { preset: String, gradient: &'static str },
}

/// Validate evaluator settings for range compliance.
pub fn validate_settings(settings: &LightingSettings) -> Result<(), Vec<ValidationError>> {
    settings
        .validate()
        .map_err(|errors| errors.into_iter().map(ValidationError::from).collect())
}

/// Validate a set of presets: unique non-empty names, finite colors.
pub fn validate_presets(presets: &[LightingPreset]) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let mut seen = HashSet::new();
    for preset in presets {
        if preset.name.trim().is_empty() {
            errors.push(ValidationError::EmptyPresetName);
        } else if !seen.insert(preset.name.as_str()) {
            errors.push(ValidationError::DuplicatePresetName(preset.name.clone()));
        }

        for (gradient, g) in preset.gradients() {
            let finite = g
                .keys()
                .iter()
                .all(|k| k.color.to_vec4().is_finite());
            if !finite {
                errors.push(ValidationError::NonFiniteColor {
                    preset: preset.name.clone(),
                    gradient,
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
