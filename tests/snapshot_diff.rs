mod common;

use common::{cell, piece, snapshot};
use elixir_chess_client::game::detect_move;
use elixir_chess_client::models::{MoveRecord, PieceKind, PlayerId, Snapshot, SnapshotHistory};

use PieceKind::*;
use PlayerId::{One, Two};

fn after_move(from: (i64, i64), to: (i64, i64)) -> Snapshot {
    snapshot(&[(to, Rook, One)]).with_last_move(cell(from.0, from.1), cell(to.0, to.1))
}

#[test]
fn first_snapshot_never_animates() {
    assert_eq!(detect_move(None, &after_move((4, 4), (4, 7))), None);
}

#[test]
fn snapshot_without_last_move_never_animates() {
    let previous = after_move((4, 4), (4, 7));
    let current = snapshot(&[((4, 7), Rook, One)]);
    assert_eq!(detect_move(Some(&previous), &current), None);
}

#[test]
fn resent_move_does_not_animate() {
    let previous = after_move((4, 4), (4, 7)).with_elixir(3, 3);
    let current = after_move((4, 4), (4, 7)).with_elixir(4, 4);
    assert_eq!(detect_move(Some(&previous), &current), None);
}

#[test]
fn same_squares_from_other_player_record_are_the_same_move() {
    let mut previous = after_move((4, 4), (4, 7));
    previous.last_move = Some(MoveRecord {
        player: Some(One),
        ..MoveRecord::new(cell(4, 4), cell(4, 7))
    });
    let current = after_move((4, 4), (4, 7));
    assert_eq!(detect_move(Some(&previous), &current), None);
}

#[test]
fn first_move_after_none_animates_destination_piece() {
    let previous = snapshot(&[((4, 4), Rook, One)]);
    let current = after_move((4, 4), (4, 7));

    let animation = detect_move(Some(&previous), &current).expect("one animation");
    assert_eq!(animation.from, cell(4, 4));
    assert_eq!(animation.to, cell(4, 7));
    assert_eq!(animation.subject, Some(piece(Rook, One)));
}

#[test]
fn different_move_animates() {
    let previous = after_move((4, 4), (4, 7));
    let current = after_move((4, 7), (0, 7));
    assert!(detect_move(Some(&previous), &current).is_some());
}

#[test]
fn reversed_move_is_a_new_move() {
    let previous = after_move((4, 4), (4, 7));
    let current = after_move((4, 7), (4, 4));
    assert!(detect_move(Some(&previous), &current).is_some());
}

#[test]
fn capture_without_displacement_animates_surviving_target() {
    // A damaged target stays put, so the subject is the defender.
    let previous = snapshot(&[((1, 1), Knight, One), ((3, 2), Pawn, Two)]);
    let current = snapshot(&[((1, 1), Knight, One), ((3, 2), Pawn, Two)])
        .with_last_move(cell(1, 1), cell(3, 2));

    let animation = detect_move(Some(&previous), &current).unwrap();
    assert_eq!(animation.subject, Some(piece(Pawn, Two)));
}

#[test]
fn empty_destination_leaves_no_subject() {
    let previous = Snapshot::default();
    let current = Snapshot::default().with_last_move(cell(1, 1), cell(3, 2));

    let animation = detect_move(Some(&previous), &current).unwrap();
    assert_eq!(animation.subject, None);
}

#[test]
fn history_animates_once_per_distinct_move() {
    let pushes = [
        snapshot(&[((4, 4), Rook, One)]),
        snapshot(&[((4, 4), Rook, One)]),
        after_move((4, 4), (4, 7)),
        after_move((4, 4), (4, 7)),
        after_move((4, 4), (4, 7)),
        after_move((4, 7), (2, 7)),
    ];

    let mut history = SnapshotHistory::new();
    let mut animations = 0;
    for snapshot in pushes {
        history.push(snapshot);
        if history.pending_animation().is_some() {
            animations += 1;
        }
    }
    assert_eq!(animations, 2);
}
