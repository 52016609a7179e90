//! Minimal client for the Supabase Auth (GoTrue) REST API
//!
//! Only the password grant is implemented; it is all the Supabase adapter needs.

mod client;
mod errors;
mod types;

pub use client::GoTrueClient;
pub use errors::GoTrueError;
pub use types::{GoTrueTokenResponse, GoTrueUser};
