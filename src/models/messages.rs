use actix::Message;
use serde::{Deserialize, Serialize};

use crate::models::cell::Cell;
use crate::models::piece::PlayerId;
use crate::models::snapshot::Snapshot;

/// Move proposal sent to the authority
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MoveProposal {
    pub player: PlayerId,
    pub from_row: u8,
    pub from_col: u8,
    pub to_row: u8,
    pub to_col: u8,
}

impl MoveProposal {
    pub fn new(player: PlayerId, from: Cell, to: Cell) -> Self {
        MoveProposal {
            player,
            from_row: from.row(),
            from_col: from.col(),
            to_row: to.row(),
            to_col: to.col(),
        }
    }

    pub fn from_cell(&self) -> Option<Cell> {
        Cell::new(self.from_row.into(), self.from_col.into())
    }

    pub fn to_cell(&self) -> Option<Cell> {
        Cell::new(self.to_row.into(), self.to_col.into())
    }
}

/// Message sent from client to authority
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ClientMessage {
    Join { player: PlayerId },
    Move(MoveProposal),
}

/// Acknowledgement of a move proposal
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl MoveResult {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// Confirmation that the authority saw our join
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Joined {
    pub player: PlayerId,
    #[serde(default)]
    pub state: Option<Snapshot>,
}

/// Message sent from authority to client
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ServerMessage {
    State(Snapshot),
    MoveResult(MoveResult),
    Joined(Joined),
}

/// Outbound frame handed to the transport
#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct OutboundFrame(pub ClientMessage);

/// Inbound frame pushed by the transport
#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct InboundFrame(pub ServerMessage);
