/// Everything that can go wrong while loading or running a program.
///
/// Only [`Chip8Error::UnknownInstruction`] is recoverable, the cpu logs it and carries on with
/// the next opcode. Every other variant halts the scheduler and is handed to the host.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Chip8Error {
    #[error("ROM is too large ({size} bytes), max size is {max_size} bytes")]
    RomTooLarge { size: usize, max_size: usize },

    #[error("memory access out of bounds at address {address:#06X}")]
    MemoryFault { address: u16 },

    #[error("stack underflow: returned from a subroutine with an empty call stack")]
    StackUnderflow,

    #[error("stack overflow: more than {depth} nested subroutine calls")]
    StackOverflow { depth: usize },

    #[error("unknown instruction: {opcode:#06X}")]
    UnknownInstruction { opcode: u16 },
}

impl Chip8Error {
    /// Whether this error should stop the instruction cycle
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Chip8Error::UnknownInstruction { .. })
    }
}

pub type Result<T> = std::result::Result<T, Chip8Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_unknown_instructions_are_recoverable() {
        assert!(!Chip8Error::UnknownInstruction { opcode: 0x8008 }.is_fatal());
        assert!(Chip8Error::StackUnderflow.is_fatal());
        assert!(Chip8Error::StackOverflow { depth: 16 }.is_fatal());
        assert!(Chip8Error::MemoryFault { address: 0x1000 }.is_fatal());
        assert!(
            Chip8Error::RomTooLarge {
                size: 4000,
                max_size: 3584
            }
            .is_fatal()
        );
    }

    #[test]
    fn formats_addresses_as_hex() {
        let error = Chip8Error::MemoryFault { address: 0x1000 };
        assert_eq!(error.to_string(), "memory access out of bounds at address 0x1000");
    }
}
