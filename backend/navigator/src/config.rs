//! Application configuration loaded from environment variables.

use std::time::Duration;

use crate::errors::{NavigatorError, Result};

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the renderer bridge API
    pub api_port: u16,
    /// Period of the resend-cooldown ticker (one "second" of cooldown)
    pub tick_interval: Duration,
    /// Capacity of the event-loop channel
    pub event_queue_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_port: 3001,
            tick_interval: Duration::from_millis(1000),
            event_queue_depth: 64,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; missing keys fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let tick_ms: u64 = parse_var(&lookup, "TICK_INTERVAL_MS", "1000")?;
        if tick_ms == 0 {
            return Err(NavigatorError::Config(
                "TICK_INTERVAL_MS must be positive".to_string(),
            ));
        }

        let event_queue_depth: usize = parse_var(&lookup, "EVENT_QUEUE_DEPTH", "64")?;
        if event_queue_depth == 0 {
            return Err(NavigatorError::Config(
                "EVENT_QUEUE_DEPTH must be positive".to_string(),
            ));
        }

        Ok(Config {
            api_port: parse_var(&lookup, "API_PORT", "3001")?,
            tick_interval: Duration::from_millis(tick_ms),
            event_queue_depth,
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: &str) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(key)
        .unwrap_or_else(|| default.to_string())
        .trim()
        .parse()
        .map_err(|_| NavigatorError::Config(format!("Invalid {key}")))
}
