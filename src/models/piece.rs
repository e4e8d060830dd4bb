use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ClientError;

/// Player identity, one of the two seats at the board
///
/// Serialized as the integer 1 or 2. The authority keys some payloads by the
/// string form, so `"1"` and `"2"` are accepted on input as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u8")]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }

    pub fn opponent(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Row direction this player's pawns advance in
    pub fn forward(self) -> i8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => -1,
        }
    }
}

impl TryFrom<i64> for PlayerId {
    type Error = ClientError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(PlayerId::One),
            2 => Ok(PlayerId::Two),
            other => Err(ClientError::InvalidPlayer {
                value: other.to_string(),
            }),
        }
    }
}

impl<'de> Deserialize<'de> for PlayerId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(i64),
            Text(String),
        }

        let player = match Repr::deserialize(deserializer)? {
            Repr::Number(n) => PlayerId::try_from(n),
            Repr::Text(s) => s.parse(),
        };
        player.map_err(de::Error::custom)
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> Self {
        player.number()
    }
}

impl FromStr for PlayerId {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(PlayerId::One),
            "2" => Ok(PlayerId::Two),
            other => Err(ClientError::InvalidPlayer {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// The six piece kinds the movement rules know about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Rook,
    Bishop,
    Knight,
    Queen,
    King,
}

impl PieceKind {
    pub fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Rook => "rook",
            PieceKind::Bishop => "bishop",
            PieceKind::Knight => "knight",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }

    /// Whether moving this piece triggers the "mega" ability effect
    pub fn has_ability(self) -> bool {
        matches!(self, PieceKind::Knight)
    }
}

/// Piece type as received from the authority
///
/// Unknown names are kept rather than rejected so that one odd piece does not
/// throw away a whole snapshot. They render, but never move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PieceType {
    Known(PieceKind),
    Unrecognized(String),
}

impl PieceType {
    pub fn kind(&self) -> Option<PieceKind> {
        match self {
            PieceType::Known(kind) => Some(*kind),
            PieceType::Unrecognized(_) => None,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            PieceType::Known(kind) => kind.name(),
            PieceType::Unrecognized(name) => name,
        }
    }
}

impl From<PieceKind> for PieceType {
    fn from(kind: PieceKind) -> Self {
        PieceType::Known(kind)
    }
}

/// A unit on the board at the moment of one snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    #[serde(rename = "type")]
    pub kind: PieceType,
    pub owner: PlayerId,
    pub hp: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elixir_cost: Option<u32>,
}

impl Piece {
    pub fn new(kind: PieceKind, owner: PlayerId, hp: u32) -> Self {
        Piece {
            kind: kind.into(),
            owner,
            hp,
            elixir_cost: None,
        }
    }

    pub fn is_owned_by(&self, player: PlayerId) -> bool {
        self.owner == player
    }

    pub fn has_ability(&self) -> bool {
        self.kind.kind().is_some_and(PieceKind::has_ability)
    }
}
