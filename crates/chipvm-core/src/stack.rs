use crate::error::{Chip8Error, Result};

/// Return addresses of the subroutines that are currently being executed. The depth is bounded,
/// by default 16 nested subroutines fit before the stack overflows
#[derive(Debug, Clone)]
pub struct Stack {
    values: Vec<u16>,
    depth: usize,
}

impl Stack {
    pub fn with_depth(depth: usize) -> Self {
        Self {
            values: Vec::with_capacity(depth),
            depth,
        }
    }

    pub fn push(&mut self, address: u16) -> Result<()> {
        if self.values.len() >= self.depth {
            return Err(Chip8Error::StackOverflow { depth: self.depth });
        }
        self.values.push(address);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<u16> {
        self.values.pop().ok_or(Chip8Error::StackUnderflow)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}
