//! The state machine itself: current screen, session and countdown lease.

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::action::Action;
use crate::countdown::{Countdown, TimerCommand};
use crate::errors::FlowError;
use crate::screens::{Screen, ScreenView};
use crate::session::SessionState;
use crate::transition::transition;

/// What a dispatch did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// The current screen changed.
    Moved { from: Screen, to: Screen },
    /// Accepted, but the screen stayed the same (digit entry, resend, toggles).
    Stayed { screen: Screen },
    /// Rejected or not offered; nothing changed.
    Ignored { screen: Screen, error: FlowError },
}

impl Outcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Outcome::Ignored { .. })
    }
}

/// Result of [`Navigator::dispatch`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Dispatched {
    #[serde(flatten)]
    pub outcome: Outcome,
    /// Set when the dispatch entered or left the Otp screen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timer: Option<TimerCommand>,
}

#[derive(Clone, Debug, Default)]
pub struct Navigator {
    current: Screen,
    session: SessionState,
    countdown: Countdown,
}

impl Navigator {
    /// Fresh process state: `Welcome`, default session, no timer.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn view(&self) -> ScreenView {
        ScreenView::of(self.current, &self.session)
    }

    /// Run `action` through the transition table and commit the step.
    ///
    /// The patch and the screen change are applied together; a failed gate
    /// leaves both untouched.
    pub fn dispatch(&mut self, action: &Action) -> Dispatched {
        let from = self.current;

        let step = match transition(from, action, &self.session) {
            Ok(step) => step,
            Err(error) => {
                // Rejections are ordinary input and stay silent.
                if let FlowError::NotOffered { .. } = error {
                    warn!("{error}");
                }
                return Dispatched {
                    outcome: Outcome::Ignored {
                        screen: from,
                        error,
                    },
                    timer: None,
                };
            }
        };

        let to = step.next;
        self.session.apply(step.patch);
        self.current = to;

        let timer = match (from == Screen::Otp, to == Screen::Otp) {
            (false, true) => Some(self.countdown.acquire()),
            (true, false) => self.countdown.release(),
            _ => None,
        };

        let outcome = if from == to {
            trace!(screen = %to, action = %action.kind(), "action applied");
            Outcome::Stayed { screen: to }
        } else {
            debug!(%from, %to, action = %action.kind(), "screen transition");
            Outcome::Moved { from, to }
        };

        Dispatched { outcome, timer }
    }

    /// One countdown second from the ticker started for `generation`.
    ///
    /// Returns `true` if the cooldown moved. Stale generations, ticks while
    /// off the Otp screen and ticks at 0 change nothing.
    pub fn tick(&mut self, generation: u64) -> bool {
        if self.current != Screen::Otp || !self.countdown.accepts(generation) {
            trace!(generation, "stale countdown tick dropped");
            return false;
        }
        self.session.tick_cooldown()
    }
}
