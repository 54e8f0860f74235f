//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure decision logic lives here so pages and components stay thin and the
//! logic stays testable without a browser.

pub mod auth;
pub mod form;
