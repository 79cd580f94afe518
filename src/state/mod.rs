//! Widget state.
//!
//! DESIGN
//! ======
//! `session` holds who is signed in, `popup` the login popup's stage machine.
//! Both are plain data with transition methods; `cell` abstracts over where
//! they live.

pub mod cell;
pub mod popup;
pub mod session;
