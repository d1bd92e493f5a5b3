pub mod config;
pub mod engine;
pub mod maze;
pub mod renderer;
pub mod sim;
pub mod world;

pub use config::{Config, ConfigError};
