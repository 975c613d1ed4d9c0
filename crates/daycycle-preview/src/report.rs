use std::path::Path;

use daycycle_core::color::Color;

use crate::sampler::DayReport;

/// Save a report as pretty-printed JSON.
pub fn save_report(path: &Path, report: &DayReport) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(report).map_err(std::io::Error::other)?;
    std::fs::write(path, json)
}

/// `#rrggbb` for a linear color, channels clamped to [0, 1].
pub fn hex_color(color: Color) -> String {
    let [r, g, b] = color
        .to_rgb_array()
        .map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    format!("#{r:02x}{g:02x}{b:02x}")
}

fn format_hour(hour: f32) -> String {
    let total_minutes = (hour * 60.0).round() as u32;
    format!("{:02}:{:02}", (total_minutes / 60) % 24, total_minutes % 60)
}

/// Format a report as a markdown table.
pub fn format_markdown(report: &DayReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("### Preset `{}`\n\n", report.preset));
    out.push_str("| Time | Ambient | Fog | Fog density | Sun | Sun pitch | Elevation | Sky top | Horizon |\n");
    out.push_str("|------|---------|-----|-------------|-----|-----------|-----------|---------|---------|\n");

    for s in &report.samples {
        let p = &s.params;
        out.push_str(&format!(
            "| {} | {} | {} | {:.4} | {} | {:.1} | {:.1} | {} | {} |\n",
            format_hour(s.hour),
            hex_color(p.scene.ambient_color),
            hex_color(p.scene.fog_color),
            p.scene.fog_density,
            hex_color(p.sun.color),
            p.sun.rotation.pitch_degrees,
            s.sun_elevation_degrees,
            hex_color(p.sky.top),
            hex_color(p.sky.horizon),
        ));
    }

    out
}
