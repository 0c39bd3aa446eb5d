//! Per-turn countdown.
//!
//! The countdown only keeps the arithmetic; whoever owns it drives `tick` once per
//! interval and hands back the token it got from `start`. Ticks carrying a token from
//! an earlier run, or arriving after `stop`, are dropped, so a superseded timer can
//! never expire.

/// Identifies one run of the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Tick { remaining: u32 },
    Expired,
}

#[derive(Debug, Default)]
pub struct Countdown {
    generation: u64,
    remaining: u32,
    running: bool,
}

impl Countdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh run, superseding any running one.
    pub fn start(&mut self, duration_secs: u32) -> TimerToken {
        self.generation += 1;
        self.remaining = duration_secs;
        self.running = true;
        TimerToken(self.generation)
    }

    /// Cancel the current run without expiring it. Returns whether one was running.
    pub fn stop(&mut self) -> bool {
        std::mem::replace(&mut self.running, false)
    }

    pub fn tick(&mut self, token: TimerToken) -> Option<TimerEvent> {
        if !self.running || token.0 != self.generation {
            return None;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
            Some(TimerEvent::Expired)
        } else {
            Some(TimerEvent::Tick {
                remaining: self.remaining,
            })
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}
