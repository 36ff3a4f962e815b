pub mod config;
pub mod sparkle;
pub mod types;
