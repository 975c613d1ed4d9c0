use crate::params::RenderParameters;

/// Lighting uniform block (112 bytes, 7x vec4, std140-compatible).
///
/// ```text
/// vec4[0]: ambient_color.rgb, fog_density
/// vec4[1]: fog_color.rgb, fog_mode (u32)
/// vec4[2]: sun_color.rgb, fog_enabled (u32)
/// vec4[3]: sun_direction.xyz, time_percent
/// vec4[4]: sky_top.rgb, _padding
/// vec4[5]: sky_bottom.rgb, _padding
/// vec4[6]: horizon.rgb, _padding
/// ```
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightingUniform {
    pub ambient_color: [f32; 3],
    pub fog_density: f32,
    pub fog_color: [f32; 3],
    pub fog_mode: u32,
    pub sun_color: [f32; 3],
    pub fog_enabled: u32,
    pub sun_direction: [f32; 3],
    pub time_percent: f32,
    pub sky_top: [f32; 3],
    pub _padding0: u32,
    pub sky_bottom: [f32; 3],
    pub _padding1: u32,
    pub horizon: [f32; 3],
    pub _padding2: u32,
}

impl From<&RenderParameters> for LightingUniform {
    fn from(params: &RenderParameters) -> Self {
        Self {
            ambient_color: params.scene.ambient_color.to_rgb_array(),
            fog_density: params.scene.fog_density,
            fog_color: params.scene.fog_color.to_rgb_array(),
            fog_mode: params.scene.fog_mode.as_u32(),
            sun_color: params.sun.color.to_rgb_array(),
            fog_enabled: params.scene.fog_enabled as u32,
            sun_direction: params.sun.rotation.direction().to_array(),
            time_percent: params.time_percent,
            sky_top: params.sky.top.to_rgb_array(),
            _padding0: 0,
            sky_bottom: params.sky.bottom.to_rgb_array(),
            _padding1: 0,
            horizon: params.sky.horizon.to_rgb_array(),
            _padding2: 0,
        }
    }
}

impl LightingUniform {
    /// Raw bytes ready for a uniform buffer write.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
