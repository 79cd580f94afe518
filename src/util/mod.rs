//! Utility helpers shared across widget modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser access is isolated in `browser` so state and component logic stay
//! testable on native targets.

pub mod avatar;
pub mod browser;
