pub mod cli;
pub mod error;
pub mod report;
pub mod sampler;

pub use error::PreviewError;
