//! The resend-cooldown ticker: a repeating one-second timer task.
//!
//! A [`Ticker`] only enqueues its generation on the tick channel; the
//! navigation loop decides whether the tick still applies. Dropping or
//! stopping the `Ticker` cancels the task through its
//! [`CancellationToken`].

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::{CancellationToken, DropGuard};
use tracing::debug;

pub struct Ticker {
    generation: u64,
    _guard: DropGuard,
}

impl Ticker {
    /// Spawn a ticker that sends `generation` every `period`, starting one
    /// period from now.
    pub fn start(generation: u64, period: Duration, ticks: mpsc::Sender<u64>) -> Self {
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            // Cancellation wins over a pending tick and over a send blocked
            // on a full channel.
            loop {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => break,
                    _ = interval.tick() => {}
                }
                tokio::select! {
                    biased;
                    _ = token.cancelled() => break,
                    sent = ticks.send(generation) => {
                        if sent.is_err() {
                            break;
                        }
                    }
                }
            }
            debug!(generation, "ticker stopped");
        });

        debug!(generation, period_ms = period.as_millis() as u64, "ticker started");
        Ticker {
            generation,
            _guard: cancel.drop_guard(),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Cancel the task now.
    pub fn stop(self) {
        drop(self);
    }
}
