pub mod defaults;
pub mod loader;
pub mod validator;

pub use daycycle_core::error::SettingsError;
pub use loader::LoadError;
pub use validator::ValidationError;
