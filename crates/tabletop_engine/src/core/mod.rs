//! # Core Engine Module
//!
//! Shared configuration for every subsystem of the tabletop renderer.

pub mod config;

pub use config::{
    TabletopConfig,
    EngineConfig,
    WindowConfig,
    CameraConfig,
    AssetConfig,
    Config,
    ConfigError,
};
