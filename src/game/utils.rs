use crate::models::{Piece, PlayerId};

/// Visual shade of a player's pieces
pub fn owner_shade(player: PlayerId) -> &'static str {
    match player {
        PlayerId::One => "light",
        PlayerId::Two => "dark",
    }
}

/// Sprite key for a piece, `"{shade}_{type}"`
pub fn sprite_key(piece: &Piece) -> String {
    format!("{}_{}", owner_shade(piece.owner), piece.kind.name())
}

/// Hover text for a piece
pub fn piece_title(piece: &Piece) -> String {
    format!("{} HP:{}", piece.kind.name(), piece.hp)
}

/// Number of full gauge units for an elixir level
pub fn gauge_fill(level: i32, units: i32) -> usize {
    level.clamp(0, units) as usize
}

/// Status line shown after joining
pub fn joined_status(player: PlayerId) -> String {
    format!("Joined as Player {}", player)
}
