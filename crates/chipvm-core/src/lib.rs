//! # chipvm-core
//!
//! A CHIP-8 virtual machine without any opinion on windows, files or keyboards. The host hands
//! it a rom and an [`Input`], drives a [`Scheduler`] with elapsed time and reads the
//! [`Framebuffer`] back to draw it.

///Runtime settings, clock speed and friends
mod config;
///This holds all of the constants (written in capital letters in the code)
mod constants;
///Handles the fetch, decode execute cycle
mod cpu;
///The 64x32 monochrome screen
mod display;
///Everything that can go wrong
mod error;
///Where the pressed keys come from
mod input;
///An overview of all instructions in the chip 8 instruction set architecture
mod instruction;
///A data structure modeling ram
mod ram;
///The registers for the chip8 cpu
mod registers;
///Holds the program image
mod rombuffer;
///Runs instruction cycles and timer ticks at their own rates
mod scheduler;
///The call stack that is used in the cpu
mod stack;

// Re-export structs and modules that might be used by graphics libraries
pub use config::Config;
pub use constants::{
    DEFAULT_CLOCK_HZ, DISPLAY_HEIGHT, DISPLAY_WIDTH, FONT_START_ADDRESS, MAX_ROM_SIZE, NUM_KEYS,
    RAM_SIZE, ROM_START_ADDRESS, TIMER_HZ,
};
pub use cpu::Cpu;
pub use display::Framebuffer;
pub use error::{Chip8Error, Result};
pub use input::{Input, Keypad, NoInput};
pub use instruction::{AluOp, AuxOp, Instruction, KeyOp, Opcode};
pub use rombuffer::RomBuffer;
pub use scheduler::{Scheduler, SchedulerState, StopSignal};
