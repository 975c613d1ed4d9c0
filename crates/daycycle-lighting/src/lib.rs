pub mod clock;
pub mod evaluator;
pub mod fog;
pub mod host;
pub mod params;
pub mod sky;
pub mod sun;
pub mod uniform;

#[cfg(test)]
mod test_harness;

pub use clock::{Clock, ClockMode};
pub use evaluator::{compute_parameters, EvaluatorConfig, FrameInput, TimeOfDayEvaluator};
pub use fog::{FogMode, FogTint};
pub use host::{
    find_default_directional_light, LightHandle, LightKind, LightingHost, SceneLight, SceneQuery,
};
pub use params::{DirectionalLight, RenderParameters, SceneLighting};
pub use sky::SkyColors;
pub use sun::SunRotation;
pub use uniform::LightingUniform;
