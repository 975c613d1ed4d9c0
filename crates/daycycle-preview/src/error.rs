use daycycle_presets::{LoadError, ValidationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("Invalid configuration:\n{}", format_validation(.0))]
    Validation(Vec<ValidationError>),
    #[error("Unknown preset '{0}' (not a built-in name or an existing file)")]
    UnknownPreset(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

fn format_validation(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("  - {e}"))
        .collect::<Vec<_>>()
        .join("\n")
}
