use log::debug;

use crate::error::ClientError;
use crate::game::rules::legal_destinations;
use crate::models::{Cell, MoveProposal, PieceKind, PlayerId, Snapshot};

/// A tentatively chosen origin and where its piece may go
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub origin: Cell,
    pub destinations: Vec<Cell>,
}

impl Selection {
    pub fn allows(&self, cell: Cell) -> bool {
        self.destinations.contains(&cell)
    }
}

/// Two-click selection protocol
///
/// `Idle` until the local player clicks one of their own pieces, `Armed`
/// until the next click, which always returns to `Idle`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SelectionState {
    #[default]
    Idle,
    Armed(Selection),
}

/// What a single click resolved into
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing selectable under the click, or no snapshot yet
    Ignored,
    /// A local piece was selected
    Armed,
    /// Second click landed on a legal destination
    Proposed {
        proposal: MoveProposal,
        /// Kind of the moved piece when it carries an ability effect
        ability: Option<PieceKind>,
    },
    /// Second click landed anywhere else
    Deselected,
}

impl SelectionState {
    pub fn selection(&self) -> Option<&Selection> {
        match self {
            SelectionState::Idle => None,
            SelectionState::Armed(selection) => Some(selection),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, SelectionState::Idle)
    }

    /// Resolve a click on `cell` against the current snapshot
    ///
    /// Never mutates the board: a proposal is only a request, its outcome
    /// arrives with a later snapshot.
    pub fn click(
        &mut self,
        local: Option<PlayerId>,
        current: Option<&Snapshot>,
        cell: Cell,
    ) -> Result<ClickOutcome, ClientError> {
        let player = local.ok_or(ClientError::NotJoined)?;
        let Some(snapshot) = current else {
            return Ok(ClickOutcome::Ignored);
        };

        match std::mem::take(self) {
            SelectionState::Armed(selection) => {
                if !selection.allows(cell) {
                    debug!("Deselecting {} after click on {}", selection.origin.label(), cell.label());
                    return Ok(ClickOutcome::Deselected);
                }

                let ability = snapshot
                    .board
                    .piece_at(selection.origin)
                    .and_then(|piece| piece.kind.kind())
                    .filter(|kind| kind.has_ability());

                Ok(ClickOutcome::Proposed {
                    proposal: MoveProposal::new(player, selection.origin, cell),
                    ability,
                })
            }
            SelectionState::Idle => match arm(player, snapshot, cell) {
                Some(selection) => {
                    *self = SelectionState::Armed(selection);
                    Ok(ClickOutcome::Armed)
                }
                None => Ok(ClickOutcome::Ignored),
            },
        }
    }

    /// Bring an armed selection in line with a newly arrived snapshot
    ///
    /// Destinations are recomputed; the selection is dropped when its origin
    /// no longer holds a local piece.
    pub fn revalidate(&mut self, local: Option<PlayerId>, current: &Snapshot) {
        let origin = match self {
            SelectionState::Armed(selection) => selection.origin,
            SelectionState::Idle => return,
        };

        *self = match local.and_then(|player| arm(player, current, origin)) {
            Some(selection) => SelectionState::Armed(selection),
            None => {
                debug!("Selection at {} lost its piece", origin.label());
                SelectionState::Idle
            }
        };
    }
}

fn arm(player: PlayerId, snapshot: &Snapshot, origin: Cell) -> Option<Selection> {
    let piece = snapshot.board.piece_at(origin)?;
    if !piece.is_owned_by(player) {
        return None;
    }

    Some(Selection {
        origin,
        destinations: legal_destinations(piece, &snapshot.board, origin),
    })
}
