//! Utility helpers shared across state and UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (clock, document
//! theme attribute) from library logic to improve reuse and testability.

pub mod dates;
pub mod theme;
