mod common;

use common::{cell, snapshot, sorted};
use elixir_chess_client::game::{legal_destinations, ClickOutcome, SelectionState};
use elixir_chess_client::models::{MoveProposal, PieceKind, PlayerId, Snapshot};
use elixir_chess_client::ClientError;

use PieceKind::*;
use PlayerId::{One, Two};

fn rook_and_pawn() -> Snapshot {
    snapshot(&[((4, 4), Rook, One), ((6, 4), Pawn, Two)])
}

#[test]
fn click_before_joining_is_rejected() {
    let mut state = SelectionState::Idle;
    let current = rook_and_pawn();

    let result = state.click(None, Some(&current), cell(4, 4));
    assert!(matches!(result, Err(ClientError::NotJoined)));
    assert!(state.is_idle());
}

#[test]
fn click_without_snapshot_does_nothing() {
    let mut state = SelectionState::Idle;
    assert_eq!(state.click(Some(One), None, cell(4, 4)).unwrap(), ClickOutcome::Ignored);
    assert!(state.is_idle());
}

#[test]
fn empty_and_opponent_cells_are_not_selectable() {
    let mut state = SelectionState::Idle;
    let current = rook_and_pawn();

    assert_eq!(state.click(Some(One), Some(&current), cell(0, 0)).unwrap(), ClickOutcome::Ignored);
    assert_eq!(state.click(Some(One), Some(&current), cell(6, 4)).unwrap(), ClickOutcome::Ignored);
    assert!(state.is_idle());
}

#[test]
fn own_piece_arms_with_legal_destinations() {
    let mut state = SelectionState::Idle;
    let current = rook_and_pawn();

    assert_eq!(state.click(Some(One), Some(&current), cell(4, 4)).unwrap(), ClickOutcome::Armed);

    let selection = state.selection().expect("armed");
    assert_eq!(selection.origin, cell(4, 4));
    let rook = current.board.piece_at(cell(4, 4)).unwrap();
    assert_eq!(
        sorted(selection.destinations.clone()),
        sorted(legal_destinations(rook, &current.board, cell(4, 4)))
    );
    assert!(selection.allows(cell(6, 4)));
    assert!(!selection.allows(cell(7, 4)));
}

#[test]
fn second_click_on_destination_proposes_move() {
    let mut state = SelectionState::Idle;
    let current = rook_and_pawn();

    state.click(Some(One), Some(&current), cell(4, 4)).unwrap();
    let outcome = state.click(Some(One), Some(&current), cell(6, 4)).unwrap();

    assert_eq!(
        outcome,
        ClickOutcome::Proposed {
            proposal: MoveProposal::new(One, cell(4, 4), cell(6, 4)),
            ability: None,
        }
    );
    assert!(state.is_idle());
}

#[test]
fn second_click_elsewhere_only_deselects() {
    let current = rook_and_pawn();

    for second in [cell(7, 4), cell(4, 4), cell(0, 0), cell(5, 5)] {
        let mut state = SelectionState::Idle;
        state.click(Some(One), Some(&current), cell(4, 4)).unwrap();
        assert_eq!(
            state.click(Some(One), Some(&current), second).unwrap(),
            ClickOutcome::Deselected
        );
        assert!(state.is_idle());
    }
}

#[test]
fn clicking_another_own_piece_deselects_instead_of_switching() {
    let mut state = SelectionState::Idle;
    let current = snapshot(&[((4, 4), Rook, One), ((0, 0), King, One)]);

    state.click(Some(One), Some(&current), cell(4, 4)).unwrap();
    assert_eq!(
        state.click(Some(One), Some(&current), cell(0, 0)).unwrap(),
        ClickOutcome::Deselected
    );
    assert!(state.is_idle());
}

#[test]
fn knight_proposal_carries_ability() {
    let mut state = SelectionState::Idle;
    let current = snapshot(&[((0, 0), Knight, Two)]);

    state.click(Some(Two), Some(&current), cell(0, 0)).unwrap();
    let outcome = state.click(Some(Two), Some(&current), cell(2, 1)).unwrap();

    assert_eq!(
        outcome,
        ClickOutcome::Proposed {
            proposal: MoveProposal::new(Two, cell(0, 0), cell(2, 1)),
            ability: Some(Knight),
        }
    );
}

#[test]
fn revalidate_recomputes_destinations() {
    let mut state = SelectionState::Idle;
    state.click(Some(One), Some(&rook_and_pawn()), cell(4, 4)).unwrap();

    let blocked = snapshot(&[((4, 4), Rook, One), ((5, 4), Pawn, One)]);
    state.revalidate(Some(One), &blocked);

    let selection = state.selection().expect("still armed");
    assert!(!selection.allows(cell(5, 4)));
    assert!(!selection.allows(cell(6, 4)));
    assert!(selection.allows(cell(3, 4)));
}

#[test]
fn revalidate_drops_selection_when_piece_is_gone() {
    let mut state = SelectionState::Idle;
    state.click(Some(One), Some(&rook_and_pawn()), cell(4, 4)).unwrap();

    let captured = snapshot(&[((4, 4), Pawn, Two)]);
    state.revalidate(Some(One), &captured);
    assert!(state.is_idle());
}
