//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the engine:
//! - Math types and the model transform
//! - Logging setup

pub mod math;
pub mod logging;
