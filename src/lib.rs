//! Client core for a real-time two-player board game with chess-like movement
//! and elixir-gated abilities.
//!
//! The remote authority owns every outcome. The client predicts legal
//! destinations, runs the two-click selection protocol and works out which
//! authoritative snapshot carries a new move worth animating.

pub mod config;
pub mod error;
pub mod game;
pub mod models;
pub mod render;
pub mod session;

pub use config::{AbilityTrigger, ClientConfig};
pub use error::ClientError;
