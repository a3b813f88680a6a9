use crate::error::{Chip8Error, Result};

/// # The fields of a raw 16 bit opcode
/// ## i
/// the top nibble, selects the instruction family
/// ## x and y
/// the second and third nibble, usually register numbers
/// ## n
/// a "nibble" 4 bits, the lowest one
/// ## nn
/// a hexadecimal byte, 8 bits
/// ## nnn
/// a hexadecimal memory address, it's 12 bits long
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode {
    pub raw: u16,
    pub i: u8,
    pub x: u8,
    pub y: u8,
    pub n: u8,
    pub nn: u8,
    pub nnn: u16,
}

impl Opcode {
    /// Splits a word in to its fields. Works for every possible u16, there is nothing to fail on
    pub fn decode(raw: u16) -> Self {
        Self {
            raw,
            i: ((raw >> 12) & 0xF) as u8,
            x: ((raw >> 8) & 0xF) as u8,
            y: ((raw >> 4) & 0xF) as u8,
            n: (raw & 0xF) as u8,
            nn: (raw & 0xFF) as u8,
            nnn: raw & 0xFFF,
        }
    }
}

impl From<u16> for Opcode {
    fn from(raw: u16) -> Self {
        Self::decode(raw)
    }
}

/// The register to register operations of the 8xyN family, keyed by N
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOp {
    /// vx = vy
    Set,
    /// vx |= vy
    Or,
    /// vx &= vy
    And,
    /// vx ^= vy
    Xor,
    /// vx += vy, vf is the carry
    Add,
    /// vx = vx - vy, vf is set when nothing had to be borrowed
    SubYFromX,
    /// vx = vy - vx, vf is set when nothing had to be borrowed
    SubXFromY,
    /// vx >>= 1, vf gets the bit that fell off
    ShiftRight,
    /// vx <<= 1, vf gets the bit that fell off
    ShiftLeft,
}

impl AluOp {
    fn from_nibble(n: u8) -> Option<Self> {
        match n {
            0x0 => Some(AluOp::Set),
            0x1 => Some(AluOp::Or),
            0x2 => Some(AluOp::And),
            0x3 => Some(AluOp::Xor),
            0x4 => Some(AluOp::Add),
            0x5 => Some(AluOp::SubYFromX),
            0x6 => Some(AluOp::ShiftRight),
            0x7 => Some(AluOp::SubXFromY),
            0xE => Some(AluOp::ShiftLeft),
            _ => None,
        }
    }
}

/// The keypad checks of the ExNN family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOp {
    SkipIfPressed,    //ex9e
    SkipIfNotPressed, //exa1
}

/// Timers, the index register, fonts and bulk memory transfers, the FxNN family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuxOp {
    ReadDelayTimer,  //fx07
    WaitForKey,      //fx0a
    SetDelayTimer,   //fx15
    SetSoundTimer,   //fx18
    AddToIndex,      //fx1e
    FontCharacter,   //fx29
    StoreBcd,        //fx33
    StoreRegisters,  //fx55
    LoadRegisters,   //fx65
}

/// # Every instruction the virtual machine understands
/// The families with several variants carry a sub operation, so executing them is a match on
/// the family and then one on the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// Turns all the pixels to off
    ClearScreen, //00e0
    /// Sets the program counter to the address on top of the stack
    ReturnFromSubroutine, //00ee
    /// Sets the program counter to whatever nnn is
    Jump { nnn: u16 }, //1nnn
    /// Pushes the program counter and jumps to nnn
    Call { nnn: u16 }, //2nnn
    SkipIfXIsKK { x: u8, kk: u8 },    //3xkk
    SkipIfXIsNotKK { x: u8, kk: u8 }, //4xkk
    SkipIfXIsY { x: u8, y: u8 },      //5xy0
    /// Set register x to the value kk
    LoadRegisterX { x: u8, kk: u8 }, //6xkk
    /// Adds the value kk to register x, no carry
    AddToRegisterX { x: u8, kk: u8 }, //7xkk
    Alu { op: AluOp, x: u8, y: u8 }, //8xyN
    SkipIfXIsNotY { x: u8, y: u8 }, //9xy0
    SetIndexRegister { nnn: u16 }, //annn
    JumpToAddressPlusV0 { nnn: u16 }, //bnnn
    SetXToRandom { x: u8, kk: u8 }, //cxkk
    /// Draws a sprite at coordinate from vx and vy, of width 8 and height n
    Draw { x: u8, y: u8, n: u8 }, //dxyn
    Key { op: KeyOp, x: u8 }, //exNN
    Aux { op: AuxOp, x: u8 }, //fxNN
}

impl Instruction {
    /// Turns decoded opcode fields in to an instruction, or reports the opcode as unknown
    pub fn decode(opcode: Opcode) -> Result<Self> {
        let Opcode {
            raw, x, y, n, nn, nnn, ..
        } = opcode;
        let unknown = Chip8Error::UnknownInstruction { opcode: raw };

        let instruction = match opcode.i {
            0x0 => match nn {
                0xE0 => Instruction::ClearScreen,
                0xEE => Instruction::ReturnFromSubroutine,
                _ => return Err(unknown),
            },
            0x1 => Instruction::Jump { nnn },
            0x2 => Instruction::Call { nnn },
            0x3 => Instruction::SkipIfXIsKK { x, kk: nn },
            0x4 => Instruction::SkipIfXIsNotKK { x, kk: nn },
            0x5 => Instruction::SkipIfXIsY { x, y },
            0x6 => Instruction::LoadRegisterX { x, kk: nn },
            0x7 => Instruction::AddToRegisterX { x, kk: nn },
            0x8 => match AluOp::from_nibble(n) {
                Some(op) => Instruction::Alu { op, x, y },
                None => return Err(unknown),
            },
            0x9 => Instruction::SkipIfXIsNotY { x, y },
            0xA => Instruction::SetIndexRegister { nnn },
            0xB => Instruction::JumpToAddressPlusV0 { nnn },
            0xC => Instruction::SetXToRandom { x, kk: nn },
            0xD => Instruction::Draw { x, y, n },
            0xE => match nn {
                0x9E => Instruction::Key {
                    op: KeyOp::SkipIfPressed,
                    x,
                },
                0xA1 => Instruction::Key {
                    op: KeyOp::SkipIfNotPressed,
                    x,
                },
                _ => return Err(unknown),
            },
            _ => {
                let op = match nn {
                    0x07 => AuxOp::ReadDelayTimer,
                    0x0A => AuxOp::WaitForKey,
                    0x15 => AuxOp::SetDelayTimer,
                    0x18 => AuxOp::SetSoundTimer,
                    0x1E => AuxOp::AddToIndex,
                    0x29 => AuxOp::FontCharacter,
                    0x33 => AuxOp::StoreBcd,
                    0x55 => AuxOp::StoreRegisters,
                    0x65 => AuxOp::LoadRegisters,
                    _ => return Err(unknown),
                };
                Instruction::Aux { op, x }
            }
        };
        Ok(instruction)
    }
}

impl TryFrom<u16> for Instruction {
    type Error = Chip8Error;

    fn try_from(raw: u16) -> Result<Self> {
        Self::decode(Opcode::decode(raw))
    }
}
