//! Models module for the virtual typewriter
//!
//! This module contains the data models shared by the text buffer,
//! the page layout, and the note archive.

pub mod core;

// Re-export commonly used types
pub use core::*;
