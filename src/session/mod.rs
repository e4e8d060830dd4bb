use actix::Message;

use crate::game::MoveAnimation;
use crate::models::{Cell, PlayerId};
use crate::render::BoardView;

pub mod bridge;
pub mod context;
pub mod handler;

pub use bridge::StdioBridge;
pub use context::{AbilityEffect, ClientSession, Effect, Notice};
pub use handler::SessionActor;

/// Local request to join as a player
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "()")]
pub struct Join(pub PlayerId);

/// Local click on a board cell
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "()")]
pub struct Click(pub Cell);

/// Events for whatever paints the board
#[derive(Message, Debug, Clone, PartialEq)]
#[rtype(result = "()")]
pub enum UiEvent {
    Render(BoardView),
    AnimationStarted { id: u64, animation: MoveAnimation },
    AnimationFinished { id: u64 },
    AbilityStarted { id: u64, effect: AbilityEffect },
    AbilityFinished { id: u64 },
    Notice(Notice),
}
