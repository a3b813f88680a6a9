// Holds a program image as a vec of bytes, exactly as it will land in ram
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RomBuffer {
    buffer: Vec<u8>,
}

impl RomBuffer {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        RomBuffer { buffer: bytes }
    }

    pub fn contents(&self) -> &[u8] {
        &self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl From<Vec<u8>> for RomBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<&[u8]> for RomBuffer {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes.to_vec())
    }
}
