use crate::models::{Cell, MoveRecord, Piece, Snapshot, SnapshotHistory};

/// A cosmetic transit of one piece between two cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveAnimation {
    pub from: Cell,
    pub to: Cell,
    /// Whatever occupies `to` in the new snapshot; `None` leaves nothing to
    /// animate
    pub subject: Option<Piece>,
}

/// Decide whether `current` carries a move that has not been shown yet
///
/// Moves are compared by their (from, to) pair, never by identity, so a
/// resent snapshot with the same last move animates nothing. The first
/// snapshot of a session has nothing to animate from.
pub fn detect_move(previous: Option<&Snapshot>, current: &Snapshot) -> Option<MoveAnimation> {
    let previous = previous?;
    let latest = current.last_move.as_ref()?;

    if previous.last_move.as_ref().map(MoveRecord::squares) == Some(latest.squares()) {
        return None;
    }

    Some(MoveAnimation {
        from: latest.from,
        to: latest.to,
        subject: current.board.piece_at(latest.to).cloned(),
    })
}

impl SnapshotHistory {
    /// Animation due for the most recent push, if any
    pub fn pending_animation(&self) -> Option<MoveAnimation> {
        detect_move(self.previous(), self.current()?)
    }
}
