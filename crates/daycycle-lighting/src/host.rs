//! Seams to the host engine: where parameters go, and how a default sun
//! light is found at configuration time.

use crate::params::{DirectionalLight, RenderParameters, SceneLighting};
use crate::sky::SkyColors;

/// Opaque identifier of a light owned by the host scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LightHandle(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightKind {
    Directional,
    Point,
    Spot,
    Area,
}

/// A light as reported by the host scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneLight {
    pub handle: LightHandle,
    pub kind: LightKind,
}

/// Read-only view of the host scene used for light discovery.
pub trait SceneQuery {
    /// The light the scene has registered as its sun, if any.
    fn registered_sun(&self) -> Option<LightHandle>;

    /// All lights in the scene, in the host's enumeration order.
    fn lights(&self) -> Vec<SceneLight>;
}

/// Pick a directional light to drive: the registered sun if present,
/// otherwise the first light of kind `Directional`.
pub fn find_default_directional_light<S: SceneQuery + ?Sized>(scene: &S) -> Option<LightHandle> {
    if let Some(sun) = scene.registered_sun() {
        return Some(sun);
    }
    scene
        .lights()
        .into_iter()
        .find(|light| light.kind == LightKind::Directional)
        .map(|light| light.handle)
}

/// Sinks the cycle writes into once per frame.
pub trait LightingHost {
    fn apply_directional_light(&mut self, light: LightHandle, sun: &DirectionalLight);

    fn apply_scene_lighting(&mut self, scene: &SceneLighting);

    /// Hosts without a sky material keep the default no-op.
    fn apply_sky_colors(&mut self, _sky: &SkyColors) {}
}

/// Push one frame of parameters into the host.
pub fn apply_parameters<H: LightingHost + ?Sized>(
    host: &mut H,
    light: LightHandle,
    params: &RenderParameters,
) {
    host.apply_scene_lighting(&params.scene);
    host.apply_sky_colors(&params.sky);
    host.apply_directional_light(light, &params.sun);
}
