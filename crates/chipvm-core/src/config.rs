use std::time::Duration;

use crate::constants::{DEFAULT_CLOCK_HZ, DEFAULT_MAX_CATCH_UP_MS, DEFAULT_STACK_DEPTH, TIMER_HZ};

/// Runtime settings of a virtual machine. The defaults match a plain CHIP-8 interpreter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Instructions executed per second
    pub clock_hz: u32,
    /// Timer ticks per second
    pub timer_hz: u32,
    /// How many nested subroutine calls fit on the stack
    pub stack_depth: usize,
    /// Seed for the random number instruction, a fresh one is drawn from the os when `None`
    pub rng_seed: Option<u64>,
    /// The most time a single scheduler advance will catch up on
    pub max_catch_up: Duration,
}

impl Config {
    pub fn with_clock_hz(mut self, clock_hz: u32) -> Self {
        self.clock_hz = clock_hz.max(1);
        self
    }

    pub fn with_timer_hz(mut self, timer_hz: u32) -> Self {
        self.timer_hz = timer_hz.max(1);
        self
    }

    pub fn with_stack_depth(mut self, stack_depth: usize) -> Self {
        self.stack_depth = stack_depth;
        self
    }

    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn with_max_catch_up(mut self, max_catch_up: Duration) -> Self {
        self.max_catch_up = max_catch_up;
        self
    }

    /// Time between two instruction cycles
    pub fn instruction_period(&self) -> Duration {
        Duration::from_secs(1) / self.clock_hz.max(1)
    }

    /// Time between two timer ticks
    pub fn timer_period(&self) -> Duration {
        Duration::from_secs(1) / self.timer_hz.max(1)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            clock_hz: DEFAULT_CLOCK_HZ,
            timer_hz: TIMER_HZ,
            stack_depth: DEFAULT_STACK_DEPTH,
            rng_seed: None,
            max_catch_up: Duration::from_millis(DEFAULT_MAX_CATCH_UP_MS),
        }
    }
}
