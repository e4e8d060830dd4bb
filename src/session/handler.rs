use actix::prelude::*;
use log::info;
use std::time::Duration;

use crate::config::ClientConfig;
use crate::models::{InboundFrame, OutboundFrame};
use crate::session::context::{ClientSession, Effect};
use crate::session::{Click, Join, UiEvent};

/// Actor owning one client session
///
/// Inbound events (local clicks, joins, authority frames) are handled one at
/// a time; the effects they produce go to the transport and the frontend.
pub struct SessionActor {
    session: ClientSession,
    transport: Recipient<OutboundFrame>,
    frontend: Recipient<UiEvent>,
    next_effect_id: u64,
}

impl SessionActor {
    pub fn new(
        config: ClientConfig,
        transport: Recipient<OutboundFrame>,
        frontend: Recipient<UiEvent>,
    ) -> Self {
        SessionActor {
            session: ClientSession::new(config),
            transport,
            frontend,
            next_effect_id: 0,
        }
    }

    fn dispatch(&mut self, effects: Vec<Effect>, ctx: &mut Context<Self>) {
        for effect in effects {
            match effect {
                Effect::Send(message) => self.transport.do_send(OutboundFrame(message)),
                Effect::Render(view) => self.frontend.do_send(UiEvent::Render(view)),
                Effect::Notice(notice) => self.frontend.do_send(UiEvent::Notice(notice)),
                Effect::Animate(animation) => {
                    let id = self.next_id();
                    self.frontend.do_send(UiEvent::AnimationStarted { id, animation });
                    self.finish_later(ctx, self.session.config().animation, UiEvent::AnimationFinished { id });
                }
                Effect::Ability(effect) => {
                    let id = self.next_id();
                    info!("[{}] Ability effect for {}", self.session.id(), effect.kind.name());
                    self.frontend.do_send(UiEvent::AbilityStarted { id, effect });
                    self.finish_later(ctx, self.session.config().ability_duration, UiEvent::AbilityFinished { id });
                }
            }
        }
    }

    // Nothing waits on the finish event; overlapping effects each get their own.
    fn finish_later(&self, ctx: &mut Context<Self>, after: Duration, event: UiEvent) {
        let frontend = self.frontend.clone();
        ctx.run_later(after, move |_, _| frontend.do_send(event));
    }

    fn next_id(&mut self) -> u64 {
        self.next_effect_id += 1;
        self.next_effect_id
    }
}

impl Actor for SessionActor {
    type Context = Context<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        info!("Client session started: {}", self.session.id());

        if let Some(player) = self.session.config().player {
            let effects = self.session.join(player);
            self.dispatch(effects, ctx);
        }
    }

    fn stopped(&mut self, _: &mut Self::Context) {
        info!("Client session closed: {}", self.session.id());
    }
}

impl Handler<Join> for SessionActor {
    type Result = ();

    fn handle(&mut self, msg: Join, ctx: &mut Self::Context) {
        let effects = self.session.join(msg.0);
        self.dispatch(effects, ctx);
    }
}

impl Handler<Click> for SessionActor {
    type Result = ();

    fn handle(&mut self, msg: Click, ctx: &mut Self::Context) {
        let effects = self.session.click(msg.0);
        self.dispatch(effects, ctx);
    }
}

impl Handler<InboundFrame> for SessionActor {
    type Result = ();

    fn handle(&mut self, msg: InboundFrame, ctx: &mut Self::Context) {
        let effects = self.session.receive(msg.0);
        self.dispatch(effects, ctx);
    }
}
