//! Networking for the auth backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` holds the `AuthService` seam and its HTTP implementation, `types`
//! defines the JSON bodies exchanged with `/services/*`.

pub mod api;
pub mod types;
