//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::FiscalPaths;
pub use settings::Settings;
