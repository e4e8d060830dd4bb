use actix::prelude::*;
use futures::channel::mpsc::{unbounded, UnboundedReceiver};
use futures::Stream;
use log::{debug, info, warn};
use std::io::{self, BufRead};
use std::thread;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::models::{Cell, InboundFrame, OutboundFrame, PlayerId, ServerMessage};
use crate::session::handler::SessionActor;
use crate::session::{Click, Join, Notice, UiEvent};

/// One line of bridge input
#[derive(Debug, Clone, PartialEq)]
pub enum BridgeInput {
    Join(PlayerId),
    Click(Cell),
    Frame(ServerMessage),
    Quit,
}

/// Parse a stdin line: a JSON frame from the authority or a local command
///
/// Commands are `join <1|2>`, `click <row> <col>` (or `click e4`) and `quit`.
/// Blank lines yield `None`.
pub fn parse_input(line: &str) -> Result<Option<BridgeInput>, ClientError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    if line.starts_with('{') {
        return Ok(Some(BridgeInput::Frame(serde_json::from_str(line)?)));
    }

    let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let input = match command.to_ascii_lowercase().as_str() {
        "join" => BridgeInput::Join(rest.parse()?),
        "click" => BridgeInput::Click(rest.parse()?),
        "quit" | "exit" => BridgeInput::Quit,
        _ => {
            return Err(ClientError::Command {
                input: line.to_string(),
            })
        }
    };
    Ok(Some(input))
}

/// Lines read from stdin on a dedicated thread
pub fn stdin_lines() -> UnboundedReceiver<String> {
    let (tx, rx) = unbounded();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.unbounded_send(line).is_err() {
                break;
            }
        }
    });
    rx
}

/// Stdio transport and terminal frontend for a session
///
/// Stdin carries local commands and authority frames, stdout carries
/// outbound frames as JSON lines, stderr shows the board and notices.
pub struct StdioBridge {
    session: Addr<SessionActor>,
}

impl StdioBridge {
    pub fn start_with<S>(config: ClientConfig, input: S) -> Addr<StdioBridge>
    where
        S: Stream<Item = String> + 'static,
    {
        StdioBridge::create(move |ctx| {
            let bridge = ctx.address();
            let session =
                SessionActor::new(config, bridge.clone().recipient(), bridge.recipient()).start();
            ctx.add_stream(input);
            StdioBridge { session }
        })
    }
}

impl Actor for StdioBridge {
    type Context = Context<Self>;
}

impl StreamHandler<String> for StdioBridge {
    fn handle(&mut self, line: String, _: &mut Self::Context) {
        match parse_input(&line) {
            Ok(Some(BridgeInput::Join(player))) => self.session.do_send(Join(player)),
            Ok(Some(BridgeInput::Click(cell))) => self.session.do_send(Click(cell)),
            Ok(Some(BridgeInput::Frame(message))) => self.session.do_send(InboundFrame(message)),
            Ok(Some(BridgeInput::Quit)) => System::current().stop(),
            Ok(None) => {}
            Err(e) => {
                warn!("Error parsing input: {}", e);
                eprintln!("! {}", e);
            }
        }
    }

    fn finished(&mut self, _: &mut Self::Context) {
        info!("Input closed, shutting down");
        System::current().stop();
    }
}

impl Handler<OutboundFrame> for StdioBridge {
    type Result = ();

    fn handle(&mut self, msg: OutboundFrame, _: &mut Self::Context) {
        match serde_json::to_string(&msg.0) {
            Ok(line) => println!("{}", line),
            Err(e) => warn!("Failed to serialize outbound frame: {}", e),
        }
    }
}

impl Handler<UiEvent> for StdioBridge {
    type Result = ();

    fn handle(&mut self, msg: UiEvent, _: &mut Self::Context) {
        match msg {
            UiEvent::Render(view) => eprint!("{}", view),
            UiEvent::Notice(Notice::Status(text)) => eprintln!("{}", text),
            UiEvent::Notice(Notice::Failure(text)) => eprintln!("! {}", text),
            UiEvent::AnimationStarted { animation, .. } => {
                let subject = animation
                    .subject
                    .as_ref()
                    .map_or("piece", |piece| piece.kind.name());
                eprintln!("~ {} {} -> {}", subject, animation.from.label(), animation.to.label());
            }
            UiEvent::AbilityStarted { effect, .. } => {
                eprintln!("MEGA {}!", effect.kind.name().to_ascii_uppercase());
            }
            UiEvent::AnimationFinished { id } | UiEvent::AbilityFinished { id } => {
                debug!("Effect {} finished", id);
            }
        }
    }
}
