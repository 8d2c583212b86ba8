//! REST client for the matching backend.
//!
//! `client` holds the generic request operation; the other modules are thin
//! path/verb/payload mappings on top of it.

pub mod auth;
pub mod client;
pub mod error;
pub mod likes;
pub mod matches;
pub mod preferences;
pub mod transport;

pub use client::ApiClient;
pub use error::ApiError;
