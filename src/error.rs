use thiserror::Error;

use crate::models::PlayerId;

/// Errors surfaced by the client session
///
/// None of these are fatal to a running session: each one degrades to a
/// user-visible notice plus a log line.
#[derive(Error, Debug)]
pub enum ClientError {
    /// A board click arrived before a local identity was chosen
    #[error("Select a player and join before moving pieces")]
    NotJoined,

    /// The local identity is fixed once chosen
    #[error("Already joined as player {current}, cannot switch to player {requested}")]
    AlreadyJoined { current: PlayerId, requested: PlayerId },

    /// The authority declined a move proposal
    #[error("{message}")]
    MoveRejected { message: String },

    /// A coordinate outside the 8x8 board
    #[error("Cell ({row}, {col}) is off the board")]
    OffBoard { row: i64, col: i64 },

    /// Player identity other than 1 or 2
    #[error("Invalid player identity: {value}")]
    InvalidPlayer { value: String },

    /// An inbound frame that could not be decoded
    #[error("Malformed frame: {0}")]
    Frame(#[from] serde_json::Error),

    #[error("Invalid configuration: {message}")]
    Config { message: String },

    #[error("Unrecognized command: {input}")]
    Command { input: String },
}
