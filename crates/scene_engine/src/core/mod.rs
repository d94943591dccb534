//! # Core Module
//!
//! Application-level configuration shared by the scene and its host.

pub mod config;

pub use config::{ApplicationConfig, Config, ConfigError, EngineConfig, SceneConfig, TextureSource};
