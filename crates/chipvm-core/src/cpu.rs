use log::{info, trace};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::Config;
use crate::constants::{FONT_GLYPH_HEIGHT, FONT_START_ADDRESS, INSTRUCTION_WIDTH, ROM_START_ADDRESS};
use crate::display::{Display, Framebuffer};
use crate::error::{Chip8Error, Result};
use crate::input::Input;
use crate::instruction::{AluOp, AuxOp, Instruction, KeyOp, Opcode};
use crate::ram::Ram;
use crate::registers::Registers;
use crate::rombuffer::RomBuffer;
use crate::stack::Stack;

/// The main cpu, owns the memory, the registers, the stack and the screen
pub struct Cpu {
    /// The black and white pixels of the screen
    display: Display,
    ///Program counter, used to keep track of what to fetch,decode and execute from ram, initialized at 0x200
    program_counter: u16,
    /// Asked for the pressed keys whenever a key instruction runs
    input: Box<dyn Input>,
    /// The memory, holds the font and the loaded program
    memory: Ram,
    /// A seedable random number generator, so random instructions can be tested with a fixed seed
    rng: ChaCha8Rng,
    /// Registers 0x0 through 0xF, the index register and both timers
    registers: Registers,
    /// Return addresses of the subroutines being executed
    stack: Stack,
    config: Config,
}

impl Cpu {
    /// Creates a new cpu with the default configuration and the rom loaded in to memory
    pub fn new(rom: &RomBuffer, input: impl Input + 'static) -> Result<Self> {
        Self::with_config(rom, input, Config::default())
    }

    pub fn with_config(rom: &RomBuffer, input: impl Input + 'static, config: Config) -> Result<Self> {
        let mut cpu = Self::blank(input, config);
        cpu.memory.load(rom.contents())?;
        info!("loaded a {} byte rom", rom.len());
        Ok(cpu)
    }

    /// A cpu with nothing but the font in memory, waiting for [`Cpu::reset`] to get a program
    pub fn blank(input: impl Input + 'static, config: Config) -> Self {
        Self {
            display: Display::new(),
            program_counter: ROM_START_ADDRESS,
            input: Box::new(input),
            memory: Ram::with_fonts(),
            rng: Self::seeded_rng(&config),
            registers: Registers::default(),
            stack: Stack::with_depth(config.stack_depth),
            config,
        }
    }

    fn seeded_rng(config: &Config) -> ChaCha8Rng {
        match config.rng_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        }
    }

    /// Puts everything back in its power on state and loads a new rom. The input stays attached.
    pub fn reset(&mut self, rom: &RomBuffer) -> Result<()> {
        let mut memory = Ram::with_fonts();
        memory.load(rom.contents())?;
        info!("reset with a {} byte rom", rom.len());

        self.memory = memory;
        self.display = Display::new();
        self.program_counter = ROM_START_ADDRESS;
        self.registers = Registers::default();
        self.stack = Stack::with_depth(self.config.stack_depth);
        self.rng = Self::seeded_rng(&self.config);
        Ok(())
    }

    /// Returns two bytes from memory at the location where the program counter currently points to
    fn fetch(&self) -> Result<u16> {
        self.memory.read_opcode(self.program_counter)
    }

    /// A single instruction cycle: fetches the opcode, moves the program counter past it, decodes
    /// and executes it.
    ///
    /// An [`Chip8Error::UnknownInstruction`] comes back as an error too, but the program counter
    /// is already past the bad opcode so the next step simply continues with the one after it.
    pub fn step(&mut self) -> Result<()> {
        let opcode = Opcode::decode(self.fetch()?);
        trace!("{:04X} at {:04X}", opcode.raw, self.program_counter);
        self.program_counter = self.program_counter.wrapping_add(INSTRUCTION_WIDTH);

        let instruction = Instruction::decode(opcode)?;
        self.execute(instruction)
    }

    /// One 60hz tick of the delay and sound timers
    pub fn tick_timers(&mut self) {
        self.registers.tick_timers();
    }

    ///Execute the instruction, for details on the instruction, check the instruction enum
    ///definition
    fn execute(&mut self, instruction: Instruction) -> Result<()> {
        match instruction {
            //00E0
            Instruction::ClearScreen => self.display.clear(),
            //00EE
            Instruction::ReturnFromSubroutine => {
                self.program_counter = self.stack.pop()?;
            }
            //1NNN
            Instruction::Jump { nnn } => {
                self.program_counter = nnn;
            }
            //2NNN
            Instruction::Call { nnn } => {
                // the program counter already points past the call, which is where we come back to
                self.stack.push(self.program_counter)?;
                self.program_counter = nnn;
            }
            //3XKK
            Instruction::SkipIfXIsKK { x, kk } => {
                self.skip_if(self.registers.get_register(x) == kk);
            }
            //4XKK
            Instruction::SkipIfXIsNotKK { x, kk } => {
                self.skip_if(self.registers.get_register(x) != kk);
            }
            //5XY0
            Instruction::SkipIfXIsY { x, y } => {
                let vx = self.registers.get_register(x);
                let vy = self.registers.get_register(y);
                self.skip_if(vx == vy);
            }
            //6XKK
            Instruction::LoadRegisterX { x, kk } => {
                self.registers.set_register(x, kk);
            }
            //7XKK
            Instruction::AddToRegisterX { x, kk } => {
                let vx = self.registers.get_register(x);
                self.registers.set_register(x, vx.wrapping_add(kk));
            }
            //8XYN
            Instruction::Alu { op, x, y } => self.execute_alu(op, x, y),
            //9XY0
            Instruction::SkipIfXIsNotY { x, y } => {
                let vx = self.registers.get_register(x);
                let vy = self.registers.get_register(y);
                self.skip_if(vx != vy);
            }
            //ANNN
            Instruction::SetIndexRegister { nnn } => {
                self.registers.set_index_register(nnn);
            }
            //BNNN
            Instruction::JumpToAddressPlusV0 { nnn } => {
                self.program_counter = nnn + u16::from(self.registers.get_register(0));
            }
            //CXKK
            Instruction::SetXToRandom { x, kk } => {
                let random_byte: u8 = self.rng.random();
                self.registers.set_register(x, random_byte & kk);
            }
            //DXYN
            Instruction::Draw { x, y, n } => self.draw(x, y, n)?,
            //EXNN
            Instruction::Key { op, x } => self.execute_key(op, x),
            //FXNN
            Instruction::Aux { op, x } => self.execute_aux(op, x)?,
        }
        Ok(())
    }

    /// Moves the program counter over the next instruction when the condition holds
    fn skip_if(&mut self, condition: bool) {
        if condition {
            self.program_counter = self.program_counter.wrapping_add(INSTRUCTION_WIDTH);
        }
    }

    /// The flag is always written after the result, so vf as a destination ends up holding the flag
    fn execute_alu(&mut self, op: AluOp, x: u8, y: u8) {
        let vx = self.registers.get_register(x);
        let vy = self.registers.get_register(y);

        match op {
            //8xy0
            AluOp::Set => self.registers.set_register(x, vy),
            //8xy1
            AluOp::Or => self.registers.set_register(x, vx | vy),
            //8xy2
            AluOp::And => self.registers.set_register(x, vx & vy),
            //8xy3
            AluOp::Xor => self.registers.set_register(x, vx ^ vy),
            //8xy4, carries when the real sum is above 255
            AluOp::Add => {
                let (sum, carry) = vx.overflowing_add(vy);
                self.registers.set_register(x, sum);
                self.registers.set_flag(carry);
            }
            //8xy5, vf is 1 when there was no borrow
            AluOp::SubYFromX => {
                self.registers.set_register(x, vx.wrapping_sub(vy));
                self.registers.set_flag(vx >= vy);
            }
            //8xy7
            AluOp::SubXFromY => {
                self.registers.set_register(x, vy.wrapping_sub(vx));
                self.registers.set_flag(vy >= vx);
            }
            //8xy6
            AluOp::ShiftRight => {
                self.registers.set_register(x, vx >> 1);
                self.registers.set_flag(vx & 1 == 1);
            }
            //8xyE
            AluOp::ShiftLeft => {
                self.registers.set_register(x, vx << 1);
                self.registers.set_flag(vx >> 7 == 1);
            }
        }
    }

    /// Draws n rows of sprite data found at the index register, vf reports a collision
    fn draw(&mut self, x: u8, y: u8, n: u8) -> Result<()> {
        let vx = self.registers.get_register(x);
        let vy = self.registers.get_register(y);
        let sprite = self
            .memory
            .read_slice(self.registers.get_index_register(), n as usize)?;

        let collision = self.display.draw_sprite(vx, vy, sprite);
        self.registers.set_flag(collision);
        Ok(())
    }

    /// Skips at most once, no matter how many keys are held down
    fn execute_key(&mut self, op: KeyOp, x: u8) {
        let vx = self.registers.get_register(x);
        let pressed = self.input.pressed_keys().contains(&vx);

        match op {
            //ex9e
            KeyOp::SkipIfPressed => self.skip_if(pressed),
            //exa1
            KeyOp::SkipIfNotPressed => self.skip_if(!pressed),
        }
    }

    fn execute_aux(&mut self, op: AuxOp, x: u8) -> Result<()> {
        let vx = self.registers.get_register(x);
        let vi = self.registers.get_index_register();

        match op {
            //fx07
            AuxOp::ReadDelayTimer => {
                let delay = self.registers.get_delay_timer();
                self.registers.set_register(x, delay);
            }
            //fx0a
            AuxOp::WaitForKey => match self.input.pressed_keys().first() {
                // rewind so the same instruction runs again next cycle, the scheduler keeps going
                None => {
                    self.program_counter = self.program_counter.wrapping_sub(INSTRUCTION_WIDTH);
                }
                Some(&key) => self.registers.set_register(x, key),
            },
            //fx15
            AuxOp::SetDelayTimer => self.registers.set_delay_timer(vx),
            //fx18
            AuxOp::SetSoundTimer => self.registers.set_sound_timer(vx),
            //fx1e
            AuxOp::AddToIndex => {
                self.registers
                    .set_index_register(vi.wrapping_add(u16::from(vx)));
            }
            //fx29, the glyph at *index* vx, not location vx
            AuxOp::FontCharacter => {
                let glyph = u16::from(vx & 0xF);
                self.registers
                    .set_index_register(FONT_START_ADDRESS + FONT_GLYPH_HEIGHT * glyph);
            }
            //fx33, always three digits, so zero stores 0, 0, 0
            AuxOp::StoreBcd => {
                let digits = [vx / 100, (vx / 10) % 10, vx % 10];
                for (offset, digit) in (0u16..).zip(digits) {
                    self.memory.write(offset_address(vi, offset)?, digit)?;
                }
            }
            //fx55, the index register itself is left alone
            AuxOp::StoreRegisters => {
                for register in 0..=x {
                    let value = self.registers.get_register(register);
                    self.memory
                        .write(offset_address(vi, u16::from(register))?, value)?;
                }
            }
            //fx65
            AuxOp::LoadRegisters => {
                for register in 0..=x {
                    let value = self.memory.read(offset_address(vi, u16::from(register))?)?;
                    self.registers.set_register(register, value);
                }
            }
        }
        Ok(())
    }

    pub fn program_counter(&self) -> u16 {
        self.program_counter
    }

    pub fn index_register(&self) -> u16 {
        self.registers.get_index_register()
    }

    pub fn register(&self, register: u8) -> u8 {
        self.registers.get_register(register)
    }

    pub fn delay_timer(&self) -> u8 {
        self.registers.get_delay_timer()
    }

    pub fn sound_timer(&self) -> u8 {
        self.registers.get_sound_timer()
    }

    /// The host should be beeping while this is true
    pub fn is_sound_active(&self) -> bool {
        self.registers.get_sound_timer() > 0
    }

    /// How many subroutine calls are waiting for a return
    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }

    pub fn memory_byte(&self, address: u16) -> Result<u8> {
        self.memory.read(address)
    }

    /// A copy of the screen, it stays consistent no matter what the cpu does next
    pub fn framebuffer(&self) -> Framebuffer {
        self.display.snapshot()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// base + offset, anything that would not fit in 16 bits is out of memory anyway
fn offset_address(base: u16, offset: u16) -> Result<u16> {
    base.checked_add(offset)
        .ok_or(Chip8Error::MemoryFault { address: u16::MAX })
}
