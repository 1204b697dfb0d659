//! Virtual Typewriter WASM API
//!
//! This module provides the JavaScript-facing API for the typewriter.
//! It includes shared utilities for serialization, error handling, and
//! logging, plus the session entry points JS drives per input event.
//!
//! # Module Structure
//!
//! - `helpers`: serialization, logging macros, error conversion
//! - `core`: the session entry points (typing, ink, scroll, archive)

pub mod core;
pub mod helpers;

// Re-export all public functions to keep a flat JS-facing API
pub use core::*;
