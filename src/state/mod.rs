//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` holds the one live credential for the page; `request` models the
//! submit-and-await lifecycle each form runs through.

pub mod request;
pub mod session;
