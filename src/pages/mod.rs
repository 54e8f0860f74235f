//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form state and initiator and delegates the request
//! lifecycle to `net::initiators`.

pub mod create_account;
pub mod landing;
pub mod reddit_auth;
