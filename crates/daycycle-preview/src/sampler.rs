use daycycle_core::constants::HOURS_PER_DAY;
use daycycle_core::preset::LightingPreset;
use daycycle_core::settings::LightingSettings;
use daycycle_lighting::{
    ClockMode, EvaluatorConfig, LightHandle, RenderParameters, TimeOfDayEvaluator,
};
use daycycle_presets::ValidationError;

use crate::error::PreviewError;

/// Upper bound on samples per day; one per second of the day.
pub const MAX_SAMPLES: u32 = 86_400;

/// Lighting output at one sampled hour.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DaySample {
    pub hour: f32,
    pub sun_elevation_degrees: f32,
    pub params: RenderParameters,
}

/// One preset sampled across a full day.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DayReport {
    pub preset: String,
    pub samples: Vec<DaySample>,
}

/// Scrubs an evaluator through the day at evenly spaced hours.
pub struct DaySampler {
    sample_count: u32,
}

impl DaySampler {
    pub fn new(sample_count: u32) -> Self {
        Self {
            sample_count: sample_count.clamp(1, MAX_SAMPLES),
        }
    }

    pub fn sample_count(&self) -> u32 {
        self.sample_count
    }

    pub fn run(
        &self,
        preset: &LightingPreset,
        settings: &LightingSettings,
    ) -> Result<DayReport, PreviewError> {
        // The handle is never dereferenced; it only satisfies the bound-light check.
        let mut evaluator = TimeOfDayEvaluator::new(EvaluatorConfig {
            preset: Some(preset.clone()),
            settings: settings.clone(),
            light: Some(LightHandle(0)),
        })
        .map_err(|errors| {
            PreviewError::Validation(errors.into_iter().map(ValidationError::from).collect())
        })?;

        let step = HOURS_PER_DAY / self.sample_count as f32;
        let mut samples = Vec::with_capacity(self.sample_count as usize);
        for i in 0..self.sample_count {
            evaluator.set_time_of_day(i as f32 * step);
            let Some(params) = evaluator.tick(0.0, ClockMode::Editing).copied() else {
                continue;
            };
            samples.push(DaySample {
                hour: evaluator.time_of_day(),
                sun_elevation_degrees: params.sun.rotation.elevation_degrees(),
                params,
            });
        }

        log::info!(
            "Sampled preset '{}' at {} points",
            preset.name,
            samples.len()
        );

        Ok(DayReport {
            preset: preset.name.clone(),
            samples,
        })
    }
}
