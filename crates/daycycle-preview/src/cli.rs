use std::path::{Path, PathBuf};

use daycycle_core::preset::LightingPreset;
use daycycle_core::settings::LightingSettings;
use daycycle_presets::defaults::{builtin_preset, default_settings, DEFAULT_PRESET_NAME};
use daycycle_presets::loader::{load_preset_file, load_settings_file};
use daycycle_presets::validator::{validate_presets, validate_settings};

use crate::error::PreviewError;
use crate::sampler::MAX_SAMPLES;

pub const DEFAULT_SAMPLES: u32 = 24;

pub const USAGE: &str = "\
Usage: daycycle-preview [OPTIONS]
  --preset <name|path>   Built-in preset name or preset RON file (default: temperate)
  --settings <path>      Lighting settings RON file (default: built-in)
  --samples <n>          Samples across the day, 1 to 86400 (default: 24)
  --output <path>        Save the sampled day as JSON
  --list                 List built-in presets and exit";

/// Parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub preset: String,
    pub settings: Option<PathBuf>,
    pub samples: u32,
    pub output: Option<PathBuf>,
    pub list: bool,
    pub help: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            preset: DEFAULT_PRESET_NAME.to_string(),
            settings: None,
            samples: DEFAULT_SAMPLES,
            output: None,
            list: false,
            help: false,
        }
    }
}

fn next_value<'a, I: Iterator<Item = &'a String>>(
    args: &mut I,
    flag: &str,
) -> Result<&'a String, PreviewError> {
    args.next()
        .ok_or_else(|| PreviewError::InvalidArgument(format!("{flag} needs a value")))
}

/// Parse arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<Options, PreviewError> {
    let mut options = Options::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--preset" => options.preset = next_value(&mut iter, arg)?.clone(),
            "--settings" => options.settings = Some(PathBuf::from(next_value(&mut iter, arg)?)),
            "--output" => options.output = Some(PathBuf::from(next_value(&mut iter, arg)?)),
            "--samples" => {
                let raw = next_value(&mut iter, arg)?;
                options.samples = raw
                    .parse()
                    .ok()
                    .filter(|n| (1..=MAX_SAMPLES).contains(n))
                    .ok_or_else(|| {
                        PreviewError::InvalidArgument(format!(
                            "invalid --samples value '{raw}' (expected 1 to {MAX_SAMPLES})"
                        ))
                    })?;
            }
            "--list" => options.list = true,
            "--help" | "-h" => options.help = true,
            other => {
                return Err(PreviewError::InvalidArgument(format!(
                    "unknown argument '{other}'"
                )))
            }
        }
    }
    Ok(options)
}

/// Resolve `--preset`: built-in names win over file paths.
pub fn resolve_preset(name_or_path: &str) -> Result<LightingPreset, PreviewError> {
    if let Some(preset) = builtin_preset(name_or_path)? {
        return Ok(preset);
    }
    let path = Path::new(name_or_path);
    if path.is_file() {
        return Ok(load_preset_file(path)?);
    }
    Err(PreviewError::UnknownPreset(name_or_path.to_string()))
}

pub fn resolve_settings(path: Option<&Path>) -> Result<LightingSettings, PreviewError> {
    match path {
        Some(path) => Ok(load_settings_file(path)?),
        None => Ok(default_settings()?),
    }
}

/// Load and validate the preset/settings pair named by `options`.
pub fn load_inputs(options: &Options) -> Result<(LightingPreset, LightingSettings), PreviewError> {
    let preset = resolve_preset(&options.preset)?;
    let settings = resolve_settings(options.settings.as_deref())?;

    let mut errors = Vec::new();
    if let Err(mut e) = validate_presets(std::slice::from_ref(&preset)) {
        errors.append(&mut e);
    }
    if let Err(mut e) = validate_settings(&settings) {
        errors.append(&mut e);
    }
    if !errors.is_empty() {
        return Err(PreviewError::Validation(errors));
    }
    Ok((preset, settings))
}
