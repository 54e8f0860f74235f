//! Networking modules for the auth backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `types` defines the request/response bodies,
//! and `initiators` ties a call to session and navigation side effects.

pub mod api;
pub mod initiators;
pub mod types;
