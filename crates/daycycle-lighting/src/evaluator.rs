use daycycle_core::error::SettingsError;
use daycycle_core::preset::LightingPreset;
use daycycle_core::settings::LightingSettings;

use crate::clock::{Clock, ClockMode};
use crate::fog::{fog_color, fog_density, FogMode};
use crate::host::{apply_parameters, LightHandle, LightingHost};
use crate::params::{DirectionalLight, RenderParameters, SceneLighting};
use crate::sky::sample_sky;
use crate::sun::sun_rotation;

/// Configuration handed to [`TimeOfDayEvaluator::new`].
#[derive(Debug, Clone, Default)]
pub struct EvaluatorConfig {
    pub preset: Option<LightingPreset>,
    pub settings: LightingSettings,
    /// Directional light to drive. Can be discovered later via `validate`.
    pub light: Option<LightHandle>,
}

/// Per-frame input from the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    /// Real seconds since the previous frame.
    pub delta_seconds: f32,
    pub mode: ClockMode,
}

/// Compute every output for one day fraction.
pub fn compute_parameters(
    preset: &LightingPreset,
    settings: &LightingSettings,
    time_percent: f32,
) -> RenderParameters {
    let scene = SceneLighting {
        ambient_color: preset.ambient.evaluate(time_percent),
        fog_enabled: true,
        fog_mode: FogMode::ExponentialSquared,
        fog_density: fog_density(&settings.fog, time_percent),
        fog_color: fog_color(preset, &settings.fog, time_percent),
    };
    let sun = DirectionalLight {
        color: preset.directional.evaluate(time_percent),
        rotation: sun_rotation(time_percent, settings.sun.azimuth_degrees),
    };
    RenderParameters {
        time_percent,
        scene,
        sun,
        sky: sample_sky(preset, time_percent),
    }
}

/// Drives the day/night cycle: owns the clock, recomputes the lighting
/// parameters each tick and keeps the most recent result.
///
/// Without a preset or a bound light every tick is a no-op: time does not
/// advance and the previous parameters stay as they were.
#[derive(Debug, Clone)]
pub struct TimeOfDayEvaluator {
    preset: Option<LightingPreset>,
    settings: LightingSettings,
    light: Option<LightHandle>,
    clock: Clock,
    current: Option<RenderParameters>,
}

impl Default for TimeOfDayEvaluator {
    fn default() -> Self {
        let settings = LightingSettings::default();
        Self {
            preset: None,
            clock: Clock::new(&settings.clock),
            settings,
            light: None,
            current: None,
        }
    }
}

impl TimeOfDayEvaluator {
    /// Build an evaluator, rejecting settings that violate any range
    /// constraint.
    pub fn new(config: EvaluatorConfig) -> Result<Self, Vec<SettingsError>> {
        config.settings.validate()?;
        let clock = Clock::new(&config.settings.clock);
        if let Some(preset) = &config.preset {
            log::debug!("Time-of-day evaluator using preset '{}'", preset.name);
        }
        Ok(Self {
            preset: config.preset,
            settings: config.settings,
            light: config.light,
            clock,
            current: None,
        })
    }

    pub fn preset(&self) -> Option<&LightingPreset> {
        self.preset.as_ref()
    }

    pub fn set_preset(&mut self, preset: Option<LightingPreset>) {
        match &preset {
            Some(p) => log::debug!("Switching lighting preset to '{}'", p.name),
            None => log::debug!("Lighting preset cleared"),
        }
        self.preset = preset;
    }

    pub fn settings(&self) -> &LightingSettings {
        &self.settings
    }

    /// Replace the settings. The current time is kept; only the day length
    /// is taken from the new clock settings. Invalid settings are rejected
    /// and the old ones stay in effect.
    pub fn set_settings(&mut self, settings: LightingSettings) -> Result<(), Vec<SettingsError>> {
        settings.validate()?;
        self.clock.set_day_length(settings.clock.day_length_seconds);
        self.settings = settings;
        Ok(())
    }

    pub fn light(&self) -> Option<LightHandle> {
        self.light
    }

    pub fn bind_light(&mut self, light: LightHandle) {
        self.light = Some(light);
    }

    pub fn unbind_light(&mut self) {
        self.light = None;
    }

    /// Configuration-time hook. If no light is bound, ask `find` for one and
    /// bind whatever it returns. Never called from the per-frame path.
    pub fn validate<F>(&mut self, find: F) -> Option<LightHandle>
    where
        F: FnOnce() -> Option<LightHandle>,
    {
        if self.light.is_none() {
            self.light = find();
            match self.light {
                Some(handle) => log::debug!("Bound directional light {:?}", handle),
                None => log::debug!("No directional light found to bind"),
            }
        }
        self.light
    }

    pub fn is_configured(&self) -> bool {
        self.preset.is_some() && self.light.is_some()
    }

    /// Current simulated time in hours, [0, 24).
    pub fn time_of_day(&self) -> f32 {
        self.clock.hours()
    }

    pub fn time_percent(&self) -> f32 {
        self.clock.time_percent()
    }

    /// Manual scrub. Out-of-range values wrap into [0, 24).
    pub fn set_time_of_day(&mut self, hours: f32) {
        self.clock.set_hours(hours);
    }

    /// Most recently computed parameters, if any tick has produced them.
    pub fn parameters(&self) -> Option<&RenderParameters> {
        self.current.as_ref()
    }

    /// Advance the clock (in `Simulating` mode) and recompute the lighting.
    /// Returns `None` without touching anything when not configured.
    pub fn tick(&mut self, delta_seconds: f32, mode: ClockMode) -> Option<&RenderParameters> {
        if !self.is_configured() {
            log::trace!("Time-of-day tick skipped: missing preset or light");
            return None;
        }
        if mode == ClockMode::Simulating {
            self.clock.advance(delta_seconds);
        }
        self.update_lighting()
    }

    /// Recompute the lighting for the clock's current day fraction.
    fn update_lighting(&mut self) -> Option<&RenderParameters> {
        let preset = self.preset.as_ref()?;
        let time_percent = self.clock.time_percent();
        let params = compute_parameters(preset, &self.settings, time_percent);
        self.current = Some(params);
        self.current.as_ref()
    }

    /// Tick, then push the result into the host. Returns whether anything
    /// was applied.
    pub fn update<H: LightingHost + ?Sized>(&mut self, frame: FrameInput, host: &mut H) -> bool {
        let Some(light) = self.light else {
            log::trace!("Time-of-day update skipped: no light bound");
            return false;
        };
        match self.tick(frame.delta_seconds, frame.mode) {
            Some(params) => {
                apply_parameters(host, light, params);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_harness::RecordingHost;
    use daycycle_core::color::Color;
    use daycycle_core::gradient::Gradient;
    use daycycle_core::settings::{ClockSettings, FogSettings, SunSettings};

    fn white_config() -> EvaluatorConfig {
        EvaluatorConfig {
            preset: Some(LightingPreset::uniform("white", Color::WHITE)),
            settings: LightingSettings::default(),
            light: Some(LightHandle(1)),
        }
    }

    #[test]
    fn test_white_preset_at_noon() {
        let settings = LightingSettings {
            fog: FogSettings {
                tint_intensity: 0.0,
                ..FogSettings::default()
            },
            sun: SunSettings {
                azimuth_degrees: 0.0,
            },
            clock: ClockSettings::default(),
        };
        let preset = LightingPreset::uniform("white", Color::WHITE);
        let params = compute_parameters(&preset, &settings, 0.5);

        assert_eq!(params.scene.ambient_color, Color::WHITE);
        assert_eq!(params.scene.fog_color, Color::WHITE);
        assert!(params.scene.fog_enabled);
        assert_eq!(params.scene.fog_mode, FogMode::ExponentialSquared);
        assert_eq!(params.scene.fog_density, 0.002);
        assert_eq!(params.sun.color, Color::WHITE);
        assert_eq!(params.sun.rotation.pitch_degrees, 90.0);
        assert_eq!(params.sun.rotation.yaw_degrees, 0.0);
        assert_eq!(params.sun.rotation.roll_degrees, 0.0);
        assert_eq!(params.sky.top, Color::WHITE);
    }

    #[test]
    fn test_sunrise_fog_matches_tint_at_full_intensity() {
        let mut preset = LightingPreset::uniform("flat", Color::WHITE);
        preset.fog = Gradient::solid(Color::rgb(0.3, 0.3, 0.3));
        let settings = LightingSettings {
            fog: FogSettings {
                tint_intensity: 1.0,
                ..FogSettings::default()
            },
            ..LightingSettings::default()
        };
        let params = compute_parameters(&preset, &settings, 0.25);
        assert_eq!(params.scene.fog_color, settings.fog.sunrise_tint);
    }

    #[test]
    fn test_compute_is_pure() {
        let preset = LightingPreset::uniform("white", Color::WHITE);
        let settings = LightingSettings::default();
        let a = compute_parameters(&preset, &settings, 0.37);
        let _ = compute_parameters(&preset, &settings, 0.91);
        let b = compute_parameters(&preset, &settings, 0.37);
        assert_eq!(a, b);
    }

    #[test]
    fn test_simulating_advances_time() {
        let mut eval = TimeOfDayEvaluator::new(white_config()).expect("valid config");
        let params = eval.tick(6.0, ClockMode::Simulating).copied();
        assert_eq!(eval.time_of_day(), 6.0);
        assert_eq!(params.map(|p| p.time_percent), Some(0.25));
    }

    #[test]
    fn test_editing_does_not_advance() {
        let mut eval = TimeOfDayEvaluator::new(white_config()).expect("valid config");
        eval.set_time_of_day(12.0);
        eval.tick(5.0, ClockMode::Editing);
        assert_eq!(eval.time_of_day(), 12.0);
        assert_eq!(eval.parameters().map(|p| p.time_percent), Some(0.5));
    }

    #[test]
    fn test_mode_reread_every_tick() {
        let mut eval = TimeOfDayEvaluator::new(white_config()).expect("valid config");
        eval.tick(1.0, ClockMode::Simulating);
        eval.tick(1.0, ClockMode::Editing);
        eval.tick(1.0, ClockMode::Simulating);
        assert_eq!(eval.time_of_day(), 2.0);
    }

    #[test]
    fn test_full_day_wraps_to_start() {
        let mut config = white_config();
        config.settings.clock.start_hour = 3.5;
        let mut eval = TimeOfDayEvaluator::new(config).expect("valid config");
        eval.tick(24.0, ClockMode::Simulating);
        assert_eq!(eval.time_of_day(), 3.5);
    }

    #[test]
    fn test_time_stays_in_range() {
        let mut eval = TimeOfDayEvaluator::new(white_config()).expect("valid config");
        for _ in 0..500 {
            eval.tick(0.37, ClockMode::Simulating);
            assert!((0.0..24.0).contains(&eval.time_of_day()));
        }
    }

    #[test]
    fn test_no_preset_is_noop() {
        let mut config = white_config();
        config.preset = None;
        let mut eval = TimeOfDayEvaluator::new(config).expect("valid config");
        assert!(eval.tick(3.0, ClockMode::Simulating).is_none());
        assert_eq!(eval.time_of_day(), 0.0);
        assert!(eval.parameters().is_none());
    }

    #[test]
    fn test_no_light_is_noop() {
        let mut config = white_config();
        config.light = None;
        let mut eval = TimeOfDayEvaluator::new(config).expect("valid config");
        assert!(eval.tick(3.0, ClockMode::Simulating).is_none());
        assert_eq!(eval.time_of_day(), 0.0);
    }

    #[test]
    fn test_prior_parameters_survive_unconfigured_tick() {
        let mut eval = TimeOfDayEvaluator::new(white_config()).expect("valid config");
        let before = eval.tick(6.0, ClockMode::Simulating).copied();
        eval.unbind_light();
        assert!(eval.tick(6.0, ClockMode::Simulating).is_none());
        assert_eq!(eval.parameters().copied(), before);
        assert_eq!(eval.time_of_day(), 6.0);
    }

    #[test]
    fn test_validate_binds_found_light() {
        let mut config = white_config();
        config.light = None;
        let mut eval = TimeOfDayEvaluator::new(config).expect("valid config");
        assert_eq!(eval.validate(|| Some(LightHandle(9))), Some(LightHandle(9)));
        assert!(eval.is_configured());
    }

    #[test]
    fn test_validate_keeps_bound_light() {
        let mut eval = TimeOfDayEvaluator::new(white_config()).expect("valid config");
        let mut called = false;
        let bound = eval.validate(|| {
            called = true;
            Some(LightHandle(9))
        });
        assert_eq!(bound, Some(LightHandle(1)));
        assert!(!called);
    }

    #[test]
    fn test_set_settings_keeps_time() {
        let mut eval = TimeOfDayEvaluator::new(white_config()).expect("valid config");
        eval.set_time_of_day(10.0);
        let mut settings = LightingSettings::default();
        settings.clock.day_length_seconds = 48.0;
        eval.set_settings(settings).expect("valid settings");
        eval.tick(2.0, ClockMode::Simulating);
        assert_eq!(eval.time_of_day(), 11.0);
    }

    #[test]
    fn test_zero_day_length_rejected_at_construction() {
        let mut config = white_config();
        config.settings.clock.day_length_seconds = 0.0;
        let errors = TimeOfDayEvaluator::new(config).unwrap_err();
        assert_eq!(errors, vec![SettingsError::InvalidDayLength(0.0)]);
    }

    #[test]
    fn test_tint_intensity_out_of_range_rejected_at_construction() {
        let mut config = white_config();
        config.settings.fog.tint_intensity = 2.0;
        let errors = TimeOfDayEvaluator::new(config).unwrap_err();
        assert_eq!(errors, vec![SettingsError::TintIntensityOutOfRange(2.0)]);
    }

    #[test]
    fn test_invalid_settings_keep_previous() {
        let mut eval = TimeOfDayEvaluator::new(white_config()).expect("valid config");
        let mut settings = LightingSettings::default();
        settings.clock.day_length_seconds = 0.0;
        settings.fog.tint_intensity = 2.0;
        let errors = eval.set_settings(settings).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(eval.settings(), &LightingSettings::default());

        for _ in 0..5 {
            eval.tick(1.0, ClockMode::Simulating);
        }
        assert_eq!(eval.time_of_day(), 5.0);
    }

    #[test]
    fn test_parameters_follow_clock_after_scrub() {
        let mut eval = TimeOfDayEvaluator::new(white_config()).expect("valid config");
        eval.set_time_of_day(18.0);
        let params = eval.tick(0.0, ClockMode::Editing).copied();
        assert_eq!(params.map(|p| p.time_percent), Some(eval.time_percent()));
        assert_eq!(eval.time_percent(), 0.75);
    }

    #[test]
    fn test_default_evaluator_is_unconfigured() {
        let mut eval = TimeOfDayEvaluator::default();
        assert!(!eval.is_configured());
        assert!(eval.tick(1.0, ClockMode::Simulating).is_none());
    }

    #[test]
    fn test_update_pushes_to_host() {
        let mut eval = TimeOfDayEvaluator::new(white_config()).expect("valid config");
        let mut host = RecordingHost::default();
        let applied = eval.update(
            FrameInput {
                delta_seconds: 12.0,
                mode: ClockMode::Simulating,
            },
            &mut host,
        );
        assert!(applied);
        assert_eq!(host.scene_updates.len(), 1);
        assert_eq!(host.sky_updates.len(), 1);
        let (light, sun) = host.light_updates[0];
        assert_eq!(light, LightHandle(1));
        assert_eq!(sun.rotation.pitch_degrees, 90.0);
        assert_eq!(sun.rotation.yaw_degrees, 170.0);
    }

    #[test]
    fn test_update_unconfigured_leaves_host_untouched() {
        let mut config = white_config();
        config.preset = None;
        let mut eval = TimeOfDayEvaluator::new(config).expect("valid config");
        let mut host = RecordingHost::default();
        let frame = FrameInput {
            delta_seconds: 1.0,
            mode: ClockMode::Simulating,
        };
        assert!(!eval.update(frame, &mut host));
        assert!(host.scene_updates.is_empty());
        assert!(host.light_updates.is_empty());
    }
}
