/// The width of the display in pixels
pub const DISPLAY_WIDTH: u8 = 64;
/// The height of the display in pixels
pub const DISPLAY_HEIGHT: u8 = 32;
/// The size of ram in bytes
pub const RAM_SIZE: usize = 4096;
/// Where programs are loaded, and where the program counter starts
pub const ROM_START_ADDRESS: u16 = 0x200;
/// The biggest image that fits between the rom start and the end of ram
pub const MAX_ROM_SIZE: usize = RAM_SIZE - ROM_START_ADDRESS as usize;
/// Where the built in hexadecimal font lives, has to stay below the rom start
pub const FONT_START_ADDRESS: u16 = 0x050;
/// Every glyph of the font is 5 rows tall
pub const FONT_GLYPH_HEIGHT: u16 = 5;
/// Amount of registers CHIP-8 has
pub const NUM_REGISTERS: u8 = 16;
/// Index of VF, the register that doubles as carry, borrow and collision flag
pub const FLAG_REGISTER: u8 = 0xF;
/// The hex keypad has keys 0x0 through 0xF
pub const NUM_KEYS: u8 = 16;
/// Every opcode is two bytes wide
pub const INSTRUCTION_WIDTH: u16 = 2;
/// Default amount of instructions executed per second
pub const DEFAULT_CLOCK_HZ: u32 = 700;
/// The delay and sound timers count down at 60hz
pub const TIMER_HZ: u32 = 60;
/// How many nested subroutine calls fit on the stack
pub const DEFAULT_STACK_DEPTH: usize = 16;
/// Longest stretch of time a single scheduler advance will try to catch up on
pub const DEFAULT_MAX_CATCH_UP_MS: u64 = 250;

/// The fontset, one 5 byte glyph for every hexadecimal digit. Written out in binary and
/// stacked on top of each other, the set bits draw the digit:
///
/// ```text
/// 0xF0  1111
/// 0x90  1  1
/// 0x90  1  1
/// 0x90  1  1
/// 0xF0  1111
/// ```
pub const FONTSET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, //0
    0x20, 0x60, 0x20, 0x20, 0x70, //1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, //2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, //3
    0x90, 0x90, 0xF0, 0x10, 0x10, //4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, //5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, //6
    0xF0, 0x10, 0x20, 0x40, 0x40, //7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, //8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, //9
    0xF0, 0x90, 0xF0, 0x90, 0x90, //a
    0xE0, 0x90, 0xE0, 0x90, 0xE0, //b
    0xF0, 0x80, 0x80, 0x80, 0xF0, //c
    0xE0, 0x90, 0x90, 0x90, 0xE0, //d
    0xF0, 0x80, 0xF0, 0x80, 0xF0, //e
    0xF0, 0x80, 0xF0, 0x80, 0x80, //f
];
