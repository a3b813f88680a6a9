use crate::constants::{FONT_START_ADDRESS, FONTSET, MAX_ROM_SIZE, RAM_SIZE, ROM_START_ADDRESS};
use crate::error::{Chip8Error, Result};

///The ram of the chip8 cpu, uses big endian, and is laid out in the following way:
///0x000 start of chip-8 ram
///0x050 to 0x0a0 reserved for fontset
///0x200 start of chip-8 programs
///0xfff end of chip8 ram
///
///Every access is bounds checked, touching anything past 0xfff is a [`Chip8Error::MemoryFault`]
#[derive(Debug, Clone)]
pub struct Ram {
    bytes: [u8; RAM_SIZE],
}

impl Ram {
    /// Returns zeroed ram with only the fontset loaded
    pub fn with_fonts() -> Self {
        let mut ram = Self {
            bytes: [0; RAM_SIZE],
        };
        let start = FONT_START_ADDRESS as usize;
        ram.bytes[start..start + FONTSET.len()].copy_from_slice(&FONTSET);
        ram
    }

    /// Copies a program image in to ram, starting at the rom start address
    pub fn load(&mut self, rom: &[u8]) -> Result<()> {
        if rom.len() > MAX_ROM_SIZE {
            return Err(Chip8Error::RomTooLarge {
                size: rom.len(),
                max_size: MAX_ROM_SIZE,
            });
        }
        let start = ROM_START_ADDRESS as usize;
        self.bytes[start..start + rom.len()].copy_from_slice(rom);
        Ok(())
    }

    ///returns a single byte from ram
    pub fn read(&self, address: u16) -> Result<u8> {
        self.bytes
            .get(address as usize)
            .copied()
            .ok_or(Chip8Error::MemoryFault { address })
    }

    pub fn write(&mut self, address: u16, value: u8) -> Result<()> {
        let byte = self
            .bytes
            .get_mut(address as usize)
            .ok_or(Chip8Error::MemoryFault { address })?;
        *byte = value;
        Ok(())
    }

    ///returns `len` bytes starting at address, faulting on the first address past the end of ram
    pub fn read_slice(&self, address: u16, len: usize) -> Result<&[u8]> {
        let start = address as usize;
        if start + len > RAM_SIZE {
            return Err(Chip8Error::MemoryFault {
                address: start.max(RAM_SIZE) as u16,
            });
        }
        Ok(&self.bytes[start..start + len])
    }

    ///returns the two bytes at address and address + 1 as one big endian opcode
    pub fn read_opcode(&self, address: u16) -> Result<u16> {
        let high = self.read(address)?;
        let low = self.read(address.checked_add(1).ok_or(Chip8Error::MemoryFault {
            address: u16::MAX,
        })?)?;
        Ok(u16::from_be_bytes([high, low]))
    }
}

impl Default for Ram {
    fn default() -> Self {
        Self::with_fonts()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_fonts_and_zeroes() {
        let ram = Ram::with_fonts();
        assert_eq!(ram.read(FONT_START_ADDRESS).unwrap(), 0xF0);
        assert_eq!(ram.read(FONT_START_ADDRESS + 79).unwrap(), 0x80);
        assert_eq!(ram.read(0x000).unwrap(), 0);
        assert!(ram.bytes[ROM_START_ADDRESS as usize..].iter().all(|b| *b == 0));
    }

    #[test]
    fn loads_rom_at_start_address() {
        let mut ram = Ram::with_fonts();
        ram.load(&[0x12, 0x34, 0x56]).unwrap();
        assert_eq!(ram.read_opcode(ROM_START_ADDRESS).unwrap(), 0x1234);
        assert_eq!(ram.read(ROM_START_ADDRESS + 2).unwrap(), 0x56);
    }

    #[test]
    fn loads_rom_that_fills_all_of_ram() {
        let mut ram = Ram::with_fonts();
        let rom = vec![0xAB; MAX_ROM_SIZE];
        ram.load(&rom).unwrap();
        assert_eq!(ram.read(0xFFF).unwrap(), 0xAB);
    }

    #[test]
    fn rejects_rom_that_does_not_fit() {
        let mut ram = Ram::with_fonts();
        let rom = vec![0; MAX_ROM_SIZE + 1];
        assert_eq!(
            ram.load(&rom),
            Err(Chip8Error::RomTooLarge {
                size: MAX_ROM_SIZE + 1,
                max_size: MAX_ROM_SIZE
            })
        );
    }

    #[test]
    fn faults_outside_address_space() {
        let mut ram = Ram::with_fonts();
        assert_eq!(
            ram.read(0x1000),
            Err(Chip8Error::MemoryFault { address: 0x1000 })
        );
        assert_eq!(
            ram.write(0xFFFF, 1),
            Err(Chip8Error::MemoryFault { address: 0xFFFF })
        );
        assert!(ram.write(0xFFF, 1).is_ok());
    }

    #[test]
    fn reads_slices_within_bounds() {
        let mut ram = Ram::with_fonts();
        ram.load(&[1, 2, 3]).unwrap();
        assert_eq!(ram.read_slice(ROM_START_ADDRESS, 3), Ok(&[1, 2, 3][..]));
        assert_eq!(ram.read_slice(0xFFE, 2).map(<[u8]>::len), Ok(2));
        assert_eq!(
            ram.read_slice(0xFFE, 3),
            Err(Chip8Error::MemoryFault { address: 0x1000 })
        );
        assert_eq!(
            ram.read_slice(0x2000, 1),
            Err(Chip8Error::MemoryFault { address: 0x2000 })
        );
    }

    #[test]
    fn opcode_straddling_the_end_faults() {
        let ram = Ram::with_fonts();
        assert_eq!(
            ram.read_opcode(0xFFF),
            Err(Chip8Error::MemoryFault { address: 0x1000 })
        );
    }
}
