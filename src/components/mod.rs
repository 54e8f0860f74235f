//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the session from Leptos context and render the chrome
//! around every page: navigation, the login dialog, and the route guard.

pub mod login_modal;
pub mod navbar;
pub mod protected;
