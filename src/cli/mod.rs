// mod.rs - CLI module

pub mod args;
pub mod config;
pub mod merge;
pub mod validation;

// Re-export main types for convenience
pub use args::{Args, Command, Options};
pub use config::Config;
pub use validation::{parse_positions, validate_options, ValidationResult};
