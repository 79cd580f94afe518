//! UI components of the login widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read state signals and report user intent through callbacks;
//! all transitions live in `controller`.

pub mod login_popup;
pub mod session_bar;
