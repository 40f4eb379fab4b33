//! Resend-cooldown timer bookkeeping.
//!
//! The timer is owned by the Otp screen. Entering Otp acquires a lease
//! with a fresh generation; leaving Otp releases it. The host runs the
//! actual one-second ticker and tags each tick with the generation it was
//! started for, so a tick that races a cancellation (or a ticker that was
//! never stopped) is recognised as stale and dropped:
//!
//! ```text
//! enter Otp ─► acquire() = Start { generation: 1 }
//!                 tick(1) ✓  tick(1) ✓
//! leave Otp ─► release() = Stop { generation: 1 }
//!                 tick(1) ✗
//! enter Otp ─► acquire() = Start { generation: 2 }
//!                 tick(1) ✗  tick(2) ✓
//! ```

use serde::Serialize;
use tracing::trace;

/// Instruction for the host that drives the ticker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum TimerCommand {
    /// Spawn a ticker that reports `generation` once per second.
    Start { generation: u64 },
    /// Cancel the ticker started for `generation`.
    Stop { generation: u64 },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Countdown {
    last_generation: u64,
    lease: Option<u64>,
}

impl Countdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a new lease. Any previous lease is superseded.
    pub fn acquire(&mut self) -> TimerCommand {
        self.last_generation += 1;
        self.lease = Some(self.last_generation);
        trace!(generation = self.last_generation, "countdown lease acquired");
        TimerCommand::Start {
            generation: self.last_generation,
        }
    }

    /// Drop the current lease, if there is one.
    pub fn release(&mut self) -> Option<TimerCommand> {
        let generation = self.lease.take()?;
        trace!(generation, "countdown lease released");
        Some(TimerCommand::Stop { generation })
    }

    /// Generation of the live lease.
    pub fn lease(&self) -> Option<u64> {
        self.lease
    }

    /// `true` if a tick tagged `generation` belongs to the live lease.
    pub fn accepts(&self, generation: u64) -> bool {
        self.lease == Some(generation)
    }
}
