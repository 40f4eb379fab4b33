//! Long-running navigation loop.
//!
//! One task owns the [`Navigator`]. HTTP handlers talk to it through a
//! [`LoopHandle`]; the resend ticker talks to it through the tick channel.
//! Every event is handled to completion before the next one is received,
//! so a tick can never interleave with a transition.

use std::time::Duration;

use foodshare_flow::{Action, Dispatched, Navigator, ScreenView, SessionState, TimerCommand};
use serde::Serialize;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::config::Config;
use crate::errors::{NavigatorError, Result};
use crate::ticker::Ticker;

/// Capacity of the tick channel. Ticks arrive once per period, so this
/// only needs to absorb a short stall of the loop.
const TICK_QUEUE_DEPTH: usize = 8;

/// Requests accepted by the loop.
pub enum Event {
    Dispatch {
        action: Action,
        reply: oneshot::Sender<DispatchReply>,
    },
    View {
        reply: oneshot::Sender<ScreenView>,
    },
    Session {
        reply: oneshot::Sender<SessionState>,
    },
}

/// Answer to a dispatched action: what happened, and the screen to draw next.
#[derive(Debug, Clone, Serialize)]
pub struct DispatchReply {
    #[serde(flatten)]
    pub dispatched: Dispatched,
    pub view: ScreenView,
}

/// Cloneable sender side of the loop.
#[derive(Clone)]
pub struct LoopHandle {
    events: mpsc::Sender<Event>,
}

impl LoopHandle {
    pub async fn dispatch(&self, action: Action) -> Result<DispatchReply> {
        let (reply, rx) = oneshot::channel();
        self.send(Event::Dispatch { action, reply }).await?;
        rx.await.map_err(|_| NavigatorError::LoopClosed)
    }

    pub async fn view(&self) -> Result<ScreenView> {
        let (reply, rx) = oneshot::channel();
        self.send(Event::View { reply }).await?;
        rx.await.map_err(|_| NavigatorError::LoopClosed)
    }

    pub async fn session(&self) -> Result<SessionState> {
        let (reply, rx) = oneshot::channel();
        self.send(Event::Session { reply }).await?;
        rx.await.map_err(|_| NavigatorError::LoopClosed)
    }

    async fn send(&self, event: Event) -> Result<()> {
        self.events
            .send(event)
            .await
            .map_err(|_| NavigatorError::LoopClosed)
    }
}

/// Spawn the navigation loop as a background [`tokio`] task.
///
/// The loop ends once every [`LoopHandle`] has been dropped.
pub fn spawn(config: &Config) -> (LoopHandle, JoinHandle<()>) {
    let (events_tx, events_rx) = mpsc::channel(config.event_queue_depth);
    let state = LoopState::new(config.tick_interval);
    let task = tokio::spawn(state.run(events_rx));
    (LoopHandle { events: events_tx }, task)
}

struct LoopState {
    navigator: Navigator,
    ticker: Option<Ticker>,
    tick_interval: Duration,
    ticks_tx: mpsc::Sender<u64>,
    ticks_rx: mpsc::Receiver<u64>,
}

impl LoopState {
    fn new(tick_interval: Duration) -> Self {
        let (ticks_tx, ticks_rx) = mpsc::channel(TICK_QUEUE_DEPTH);
        Self {
            navigator: Navigator::new(),
            ticker: None,
            tick_interval,
            ticks_tx,
            ticks_rx,
        }
    }

    async fn run(mut self, mut events: mpsc::Receiver<Event>) {
        info!("Navigation loop starting on {}", self.navigator.current());

        loop {
            tokio::select! {
                event = events.recv() => match event {
                    Some(event) => self.handle(event),
                    None => break,
                },
                Some(generation) = self.ticks_rx.recv() => {
                    if self.navigator.tick(generation) {
                        debug!(
                            cooldown = self.navigator.session().resend_cooldown_secs(),
                            "resend cooldown ticked"
                        );
                    }
                }
            }
        }

        if let Some(ticker) = self.ticker.take() {
            ticker.stop();
        }
        info!("Navigation loop stopped");
    }

    fn handle(&mut self, event: Event) {
        match event {
            Event::Dispatch { action, reply } => {
                let dispatched = self.navigator.dispatch(&action);
                if let Some(command) = dispatched.timer {
                    self.apply_timer(command);
                }
                let view = self.navigator.view();
                // The caller may have gone away; the step is committed regardless.
                let _ = reply.send(DispatchReply { dispatched, view });
            }
            Event::View { reply } => {
                let _ = reply.send(self.navigator.view());
            }
            Event::Session { reply } => {
                let _ = reply.send(self.navigator.session().clone());
            }
        }
    }

    fn apply_timer(&mut self, command: TimerCommand) {
        match command {
            TimerCommand::Start { generation } => {
                if let Some(old) = self.ticker.take() {
                    old.stop();
                }
                self.ticker = Some(Ticker::start(
                    generation,
                    self.tick_interval,
                    self.ticks_tx.clone(),
                ));
            }
            TimerCommand::Stop { generation } => {
                if self
                    .ticker
                    .as_ref()
                    .is_some_and(|t| t.generation() == generation)
                {
                    if let Some(ticker) = self.ticker.take() {
                        ticker.stop();
                    }
                }
            }
        }
    }
}
