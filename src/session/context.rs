use log::{debug, info, warn};
use std::collections::VecDeque;
use uuid::Uuid;

use crate::config::{AbilityTrigger, ClientConfig};
use crate::error::ClientError;
use crate::game::utils::joined_status;
use crate::game::{ClickOutcome, MoveAnimation, SelectionState};
use crate::models::{
    Cell, ClientMessage, MoveResult, PieceKind, PlayerId, ServerMessage, Snapshot, SnapshotHistory,
};
use crate::render::{project, BoardView};

/// The one-shot "mega" effect tied to moving a piece with an ability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbilityEffect {
    pub kind: PieceKind,
    pub origin: Cell,
}

/// User-visible notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Status(String),
    Failure(String),
}

/// Side effect requested by a session handler
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Send(ClientMessage),
    Render(BoardView),
    Animate(MoveAnimation),
    Ability(AbilityEffect),
    Notice(Notice),
}

/// Everything one client session knows
///
/// Handlers run to completion and hand back the effects they want performed;
/// they never perform I/O themselves.
#[derive(Debug)]
pub struct ClientSession {
    id: String,
    config: ClientConfig,
    player: Option<PlayerId>,
    history: SnapshotHistory,
    selection: SelectionState,
    /// One entry per unacknowledged proposal when effects wait for `ok`
    pending_abilities: VecDeque<Option<AbilityEffect>>,
}

impl ClientSession {
    pub fn new(config: ClientConfig) -> Self {
        ClientSession {
            id: Uuid::new_v4().to_string(),
            config,
            player: None,
            history: SnapshotHistory::new(),
            selection: SelectionState::Idle,
            pending_abilities: VecDeque::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn player(&self) -> Option<PlayerId> {
        self.player
    }

    pub fn current(&self) -> Option<&Snapshot> {
        self.history.current()
    }

    pub fn previous(&self) -> Option<&Snapshot> {
        self.history.previous()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Declare the local identity
    pub fn join(&mut self, player: PlayerId) -> Vec<Effect> {
        if let Some(current) = self.player.filter(|p| *p != player) {
            let err = ClientError::AlreadyJoined {
                current,
                requested: player,
            };
            warn!("[{}] {}", self.id, err);
            return vec![Effect::Notice(Notice::Failure(err.to_string()))];
        }

        info!("[{}] Joining as player {}", self.id, player);
        self.player = Some(player);

        let mut effects = vec![
            Effect::Send(ClientMessage::Join { player }),
            Effect::Notice(Notice::Status(joined_status(player))),
        ];
        effects.extend(self.render());
        effects
    }

    /// Local click on a board cell
    pub fn click(&mut self, cell: Cell) -> Vec<Effect> {
        let outcome = match self.selection.click(self.player, self.history.current(), cell) {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!("[{}] Click on {} rejected: {}", self.id, cell.label(), err);
                return vec![Effect::Notice(Notice::Failure(err.to_string()))];
            }
        };

        let mut effects = Vec::new();
        match outcome {
            ClickOutcome::Ignored => {
                debug!("[{}] Nothing to select at {}", self.id, cell.label());
            }
            ClickOutcome::Armed => {
                if let Some(selection) = self.selection.selection() {
                    debug!(
                        "[{}] Selected {} with {} destinations",
                        self.id,
                        selection.origin.label(),
                        selection.destinations.len()
                    );
                }
            }
            ClickOutcome::Deselected => {}
            ClickOutcome::Proposed { proposal, ability } => {
                let origin = proposal.from_cell();
                info!(
                    "[{}] Proposing move {} -> {}",
                    self.id,
                    origin.map(Cell::label).unwrap_or_default(),
                    cell.label()
                );

                let ability = ability
                    .zip(origin)
                    .map(|(kind, origin)| AbilityEffect { kind, origin });

                effects.push(Effect::Send(ClientMessage::Move(proposal)));
                match self.config.ability_trigger {
                    AbilityTrigger::Proposal => effects.extend(ability.map(Effect::Ability)),
                    AbilityTrigger::Acknowledgement => self.pending_abilities.push_back(ability),
                }
            }
        }

        effects.extend(self.render());
        effects
    }

    /// Dispatch an inbound frame from the authority
    pub fn receive(&mut self, message: ServerMessage) -> Vec<Effect> {
        match message {
            ServerMessage::State(snapshot) => self.receive_state(snapshot),
            ServerMessage::MoveResult(result) => self.receive_move_result(result),
            ServerMessage::Joined(joined) => {
                info!("[{}] Authority confirmed player {}", self.id, joined.player);
                Vec::new()
            }
        }
    }

    /// A new authoritative snapshot replaces the current one
    pub fn receive_state(&mut self, snapshot: Snapshot) -> Vec<Effect> {
        self.history.push(snapshot);
        let animation = self.history.pending_animation();

        if let Some(current) = self.history.current() {
            self.selection.revalidate(self.player, current);
        }

        let mut effects: Vec<Effect> = self.render().into_iter().collect();
        match animation {
            Some(animation) if animation.subject.is_some() => {
                debug!(
                    "[{}] Animating {} -> {}",
                    self.id,
                    animation.from.label(),
                    animation.to.label()
                );
                effects.push(Effect::Animate(animation));
            }
            Some(animation) => {
                warn!(
                    "[{}] Skipping animation {} -> {}: nothing at destination",
                    self.id,
                    animation.from.label(),
                    animation.to.label()
                );
            }
            None => {}
        }
        effects
    }

    /// Acknowledgement of an earlier proposal
    pub fn receive_move_result(&mut self, result: MoveResult) -> Vec<Effect> {
        let ability = self.pending_abilities.pop_front().flatten();

        if result.is_ok() {
            debug!("[{}] Move accepted", self.id);
            return ability.map(Effect::Ability).into_iter().collect();
        }

        let err = ClientError::MoveRejected {
            message: result.message.unwrap_or_else(|| "Move failed".to_string()),
        };
        warn!("[{}] Move rejected: {}", self.id, err);
        vec![Effect::Notice(Notice::Failure(err.to_string()))]
    }

    fn render(&self) -> Option<Effect> {
        let current = self.history.current()?;
        Some(Effect::Render(project(
            current,
            self.selection.selection(),
            self.player,
        )))
    }
}
