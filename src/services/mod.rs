//! Domain services used by the route handlers.
//!
//! ARCHITECTURE
//! ============
//! Service modules own session persistence, remote API access, and table
//! shaping so route handlers can stay focused on request translation and
//! auth plumbing.

pub mod api;
pub mod session;
pub mod table;
