use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, error, info, warn};

use crate::cpu::Cpu;
use crate::display::Framebuffer;
use crate::error::{Chip8Error, Result};
use crate::rombuffer::RomBuffer;

/// A flag the host raises to make [`Scheduler::run`] return. Clones share the same flag, so one
/// can be handed to another thread or a signal handler.
#[derive(Debug, Clone, Default)]
pub struct StopSignal(Arc<AtomicBool>);

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedulerState {
    Running,
    /// Stopped by the host, [`Scheduler::resume`] picks up where it left off
    Stopped,
    /// A fatal fault ended execution, only a reset gets out of here
    Halted(Chip8Error),
}

/// # Drives the cpu
/// Instruction cycles and 60hz timer ticks both run from this one loop. Every call to
/// [`Scheduler::advance`] hands it a stretch of wall clock time, which gets paid out as however
/// many cycles and ticks fit in it, in the order they would have happened.
pub struct Scheduler {
    cpu: Cpu,
    instruction_period: Duration,
    timer_period: Duration,
    max_catch_up: Duration,
    /// Time that has passed but was not yet spent on instruction cycles
    instruction_debt: Duration,
    /// Same for the timers
    timer_debt: Duration,
    state: SchedulerState,
}

impl Scheduler {
    pub fn new(cpu: Cpu) -> Self {
        let config = cpu.config();
        Self {
            instruction_period: config.instruction_period(),
            timer_period: config.timer_period(),
            max_catch_up: config.max_catch_up,
            instruction_debt: Duration::ZERO,
            timer_debt: Duration::ZERO,
            state: SchedulerState::Running,
            cpu,
        }
    }

    /// Runs everything that became due during `elapsed`.
    ///
    /// Unknown instructions are logged and skipped. A fatal fault halts the scheduler and is
    /// returned, now and on every later call, until the host resets it.
    pub fn advance(&mut self, elapsed: Duration) -> Result<()> {
        match &self.state {
            SchedulerState::Halted(error) => return Err(error.clone()),
            SchedulerState::Stopped => return Ok(()),
            SchedulerState::Running => {}
        }

        let elapsed = elapsed.min(self.max_catch_up);
        self.instruction_debt += elapsed;
        self.timer_debt += elapsed;

        loop {
            // how long ago the next pending cycle and tick were due, the older one runs first
            let instruction_lag = self.instruction_debt.checked_sub(self.instruction_period);
            let timer_lag = self.timer_debt.checked_sub(self.timer_period);

            match (instruction_lag, timer_lag) {
                (None, None) => break,
                (Some(instruction), Some(timer)) if timer >= instruction => self.tick_timers(),
                (Some(_), _) => self.cycle()?,
                (None, Some(_)) => self.tick_timers(),
            }
        }
        Ok(())
    }

    fn cycle(&mut self) -> Result<()> {
        self.instruction_debt -= self.instruction_period;
        match self.cpu.step() {
            Ok(()) => Ok(()),
            Err(error) if !error.is_fatal() => {
                warn!("{error}, continuing at {:#05X}", self.cpu.program_counter());
                Ok(())
            }
            Err(error) => {
                error!("halting: {error}");
                self.state = SchedulerState::Halted(error.clone());
                Err(error)
            }
        }
    }

    fn tick_timers(&mut self) {
        self.timer_debt -= self.timer_period;
        self.cpu.tick_timers();
    }

    /// Keeps the machine going in real time on the current thread until `stop` is raised. After
    /// every slice of work the framebuffer is handed to `on_frame`. A machine stopped by an
    /// earlier run picks up where it left off.
    pub fn run(&mut self, stop: &StopSignal, mut on_frame: impl FnMut(&Framebuffer)) -> Result<()> {
        self.resume();
        let mut last = Instant::now();
        while !stop.is_stopped() {
            thread::sleep(self.timer_period);
            let now = Instant::now();
            self.advance(now - last)?;
            last = now;
            on_frame(&self.frame());
        }
        debug!("stop requested");
        self.stop();
        Ok(())
    }

    /// Stops a cooperatively driven machine, advancing does nothing until it resumes
    pub fn stop(&mut self) {
        if self.state == SchedulerState::Running {
            self.state = SchedulerState::Stopped;
        }
    }

    pub fn resume(&mut self) {
        if self.state == SchedulerState::Stopped {
            self.state = SchedulerState::Running;
        }
    }

    /// Loads a new rom and starts over, also the way out of a halt
    pub fn reset(&mut self, rom: &RomBuffer) -> Result<()> {
        self.cpu.reset(rom)?;
        self.instruction_debt = Duration::ZERO;
        self.timer_debt = Duration::ZERO;
        self.state = SchedulerState::Running;
        info!("scheduler restarted");
        Ok(())
    }

    /// The screen as it is right now, for the host to render
    pub fn frame(&self) -> Framebuffer {
        self.cpu.framebuffer()
    }

    pub fn state(&self) -> &SchedulerState {
        &self.state
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }
}
