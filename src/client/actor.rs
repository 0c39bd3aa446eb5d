//! Game client actor.
//!
//! Owns the sync engine and is the single place where inputs reach it: server events
//! (as messages or from the transport stream), user intents and countdown ticks. After
//! every input it carries out the returned effects and hands a fresh view to the
//! presenter.
use std::time::Duration;

use actix::prelude::*;
use log::{info, warn};

use crate::client::transport::Transport;
use crate::config::game::TICK_INTERVAL;
use crate::engine::{ClientView, Effect, Input, SyncEngine, UserIntent};
use crate::game::TimerToken;
use crate::protocol::ServerEvent;

/// Rendering side of the client. It only ever sees snapshots.
pub trait Presenter {
    fn render(&mut self, view: &ClientView);

    /// Called once when the server stream ends.
    fn disconnected(&mut self) {}
}

pub struct GameClient {
    engine: SyncEngine,
    transport: Box<dyn Transport>,
    presenter: Box<dyn Presenter>,
    tick_interval: Duration,
    /// Interval currently delivering ticks, if any.
    ticker: Option<SpawnHandle>,
}

impl GameClient {
    pub fn new(
        engine: SyncEngine,
        transport: impl Transport + 'static,
        presenter: impl Presenter + 'static,
    ) -> Self {
        Self {
            engine,
            transport: Box::new(transport),
            presenter: Box::new(presenter),
            tick_interval: TICK_INTERVAL,
            ticker: None,
        }
    }

    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    fn apply(&mut self, input: Input, ctx: &mut Context<Self>) {
        for effect in self.engine.handle(input) {
            self.run_effect(effect, ctx);
        }
        self.presenter.render(&self.engine.view());
    }

    fn run_effect(&mut self, effect: Effect, ctx: &mut Context<Self>) {
        match effect {
            Effect::Send(intent) => {
                if let Err(e) = self.transport.send(intent) {
                    warn!("[GameClient] Could not send intent: {}", e);
                }
            }
            Effect::StartTicking(token) => self.start_ticker(token, ctx),
            Effect::StopTicking => self.cancel_ticker(ctx),
        }
    }

    fn start_ticker(&mut self, token: TimerToken, ctx: &mut Context<Self>) {
        self.cancel_ticker(ctx);
        let handle = ctx.run_interval(self.tick_interval, move |act, ctx| {
            act.apply(Input::Tick(token), ctx);
        });
        self.ticker = Some(handle);
    }

    fn cancel_ticker(&mut self, ctx: &mut Context<Self>) {
        if let Some(handle) = self.ticker.take() {
            ctx.cancel_future(handle);
        }
    }
}

impl Actor for GameClient {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        info!("[GameClient] Started");
        self.presenter.render(&self.engine.view());
    }
}

impl Handler<ServerEvent> for GameClient {
    type Result = ();

    fn handle(&mut self, msg: ServerEvent, ctx: &mut Context<Self>) -> Self::Result {
        self.apply(Input::Server(msg), ctx);
    }
}

impl StreamHandler<ServerEvent> for GameClient {
    fn handle(&mut self, msg: ServerEvent, ctx: &mut Context<Self>) {
        self.apply(Input::Server(msg), ctx);
    }

    /// The actor outlives the connection so the user can still read the last frame.
    fn finished(&mut self, _ctx: &mut Context<Self>) {
        warn!("[GameClient] Connection to the server closed");
        self.presenter.disconnected();
    }
}

impl Handler<UserIntent> for GameClient {
    type Result = ();

    fn handle(&mut self, msg: UserIntent, ctx: &mut Context<Self>) -> Self::Result {
        self.apply(Input::User(msg), ctx);
    }
}

/// Message: snapshot of the current view.
#[derive(Message)]
#[rtype(result = "ClientView")]
pub struct GetView;

impl Handler<GetView> for GameClient {
    type Result = MessageResult<GetView>;

    fn handle(&mut self, _msg: GetView, _ctx: &mut Context<Self>) -> Self::Result {
        MessageResult(self.engine.view())
    }
}
