//! Host doubles for exercising the evaluator without an engine.

use crate::host::{LightHandle, LightingHost, SceneLight, SceneQuery};
use crate::params::{DirectionalLight, SceneLighting};
use crate::sky::SkyColors;

/// Records every call the evaluator makes into the host.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub light_updates: Vec<(LightHandle, DirectionalLight)>,
    pub scene_updates: Vec<SceneLighting>,
    pub sky_updates: Vec<SkyColors>,
}

impl LightingHost for RecordingHost {
    fn apply_directional_light(&mut self, light: LightHandle, sun: &DirectionalLight) {
        self.light_updates.push((light, *sun));
    }

    fn apply_scene_lighting(&mut self, scene: &SceneLighting) {
        self.scene_updates.push(*scene);
    }

    fn apply_sky_colors(&mut self, sky: &SkyColors) {
        self.sky_updates.push(*sky);
    }
}

/// Host that has no sky material.
#[derive(Debug, Default)]
pub struct SkylessHost {
    pub scene_updates: usize,
    pub light_updates: usize,
}

impl LightingHost for SkylessHost {
    fn apply_directional_light(&mut self, _light: LightHandle, _sun: &DirectionalLight) {
        self.light_updates += 1;
    }

    fn apply_scene_lighting(&mut self, _scene: &SceneLighting) {
        self.scene_updates += 1;
    }
}

/// Static scene description for discovery tests.
#[derive(Debug, Default)]
pub struct MockScene {
    pub sun: Option<LightHandle>,
    pub lights: Vec<SceneLight>,
}

impl SceneQuery for MockScene {
    fn registered_sun(&self) -> Option<LightHandle> {
        self.sun
    }

    fn lights(&self) -> Vec<SceneLight> {
        self.lights.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ClockMode;
    use crate::evaluator::{EvaluatorConfig, FrameInput, TimeOfDayEvaluator};
    use crate::host::{find_default_directional_light, LightKind};
    use daycycle_presets::defaults::builtin_preset;
    use daycycle_presets::defaults::default_settings;

    fn frame(delta_seconds: f32) -> FrameInput {
        FrameInput {
            delta_seconds,
            mode: ClockMode::Simulating,
        }
    }

    #[test]
    fn test_full_day_with_builtin_preset() {
        let preset = builtin_preset("temperate")
            .expect("should parse")
            .expect("temperate exists");
        let settings = default_settings().expect("should parse");
        let mut eval = TimeOfDayEvaluator::new(EvaluatorConfig {
            preset: Some(preset),
            settings,
            light: None,
        })
        .expect("valid config");

        let scene = MockScene {
            sun: None,
            lights: vec![SceneLight {
                handle: LightHandle(42),
                kind: LightKind::Directional,
            }],
        };
        eval.validate(|| find_default_directional_light(&scene));

        let mut host = RecordingHost::default();
        for _ in 0..24 {
            assert!(eval.update(frame(1.0), &mut host));
        }
        assert_eq!(host.light_updates.len(), 24);
        assert!(host.light_updates.iter().all(|(h, _)| *h == LightHandle(42)));
        // one full day at 1 hour per second lands back on midnight
        assert_eq!(eval.time_of_day(), 0.0);

        let noon = &host.scene_updates[11];
        let midnight = &host.scene_updates[23];
        assert!(noon.fog_density < midnight.fog_density);
        assert!(
            noon.ambient_color.to_vec3().length() > midnight.ambient_color.to_vec3().length()
        );
    }

    #[test]
    fn test_skyless_host_still_gets_lighting() {
        let preset = builtin_preset("arctic")
            .expect("should parse")
            .expect("arctic exists");
        let mut eval = TimeOfDayEvaluator::new(EvaluatorConfig {
            preset: Some(preset),
            light: Some(LightHandle(1)),
            ..EvaluatorConfig::default()
        })
        .expect("valid config");
        let mut host = SkylessHost::default();
        eval.update(frame(0.5), &mut host);
        eval.update(frame(0.5), &mut host);
        assert_eq!(host.scene_updates, 2);
        assert_eq!(host.light_updates, 2);
        // sky colors are produced whether or not anyone consumes them
        assert!(eval.parameters().is_some());
    }

    #[test]
    fn test_editor_scrub_then_play() {
        let preset = builtin_preset("desert")
            .expect("should parse")
            .expect("desert exists");
        let mut eval = TimeOfDayEvaluator::new(EvaluatorConfig {
            preset: Some(preset),
            light: Some(LightHandle(3)),
            ..EvaluatorConfig::default()
        })
        .expect("valid config");
        let mut host = RecordingHost::default();

        eval.set_time_of_day(18.0);
        eval.update(
            FrameInput {
                delta_seconds: 10.0,
                mode: ClockMode::Editing,
            },
            &mut host,
        );
        assert_eq!(eval.time_of_day(), 18.0);
        let expected = eval.settings().fog.density_curve.evaluate(0.75);
        assert_eq!(host.scene_updates[0].fog_density, expected);

        eval.update(frame(2.0), &mut host);
        assert_eq!(eval.time_of_day(), 20.0);
    }
}
