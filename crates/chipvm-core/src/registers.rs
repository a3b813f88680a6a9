use crate::constants::{FLAG_REGISTER, NUM_REGISTERS};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
///# Holds all the registers and the sound and delay timers
pub struct Registers {
    register: [u8; NUM_REGISTERS as usize],
    vindex: u16,
    /// 0 by default, unless its set to a number then it will just start decrementing by one 60 times per
    /// second
    delay_timer: u8,
    /// Also 0, and decremented with 60hz when set to a number like the delay timer. The host may
    /// beep while it is not zero
    sound_timer: u8,
}

impl Registers {
    pub fn set_index_register(&mut self, value: u16) {
        self.vindex = value;
    }
    pub fn get_index_register(&self) -> u16 {
        self.vindex
    }
    pub fn set_sound_timer(&mut self, value: u8) {
        self.sound_timer = value;
    }
    pub fn get_sound_timer(&self) -> u8 {
        self.sound_timer
    }
    pub fn set_delay_timer(&mut self, value: u8) {
        self.delay_timer = value;
    }
    pub fn get_delay_timer(&self) -> u8 {
        self.delay_timer
    }

    /// One 60hz tick, both timers count down and stop at zero
    pub fn tick_timers(&mut self) {
        self.delay_timer = self.delay_timer.saturating_sub(1);
        self.sound_timer = self.sound_timer.saturating_sub(1);
    }

    /// Register numbers come straight out of an opcode nibble, so only the low 4 bits count
    pub fn get_register(&self, register: u8) -> u8 {
        self.register[(register & 0xF) as usize]
    }
    pub fn set_register(&mut self, register: u8, value: u8) {
        self.register[(register & 0xF) as usize] = value;
    }

    pub fn set_flag(&mut self, set: bool) {
        self.set_register(FLAG_REGISTER, u8::from(set));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timers_stop_at_zero() {
        let mut registers = Registers::default();
        registers.set_delay_timer(2);
        registers.set_sound_timer(1);

        registers.tick_timers();
        assert_eq!(registers.get_delay_timer(), 1);
        assert_eq!(registers.get_sound_timer(), 0);

        registers.tick_timers();
        registers.tick_timers();
        assert_eq!(registers.get_delay_timer(), 0);
        assert_eq!(registers.get_sound_timer(), 0);
    }

    #[test]
    fn flag_lives_in_vf() {
        let mut registers = Registers::default();
        registers.set_flag(true);
        assert_eq!(registers.get_register(0xF), 1);
        registers.set_flag(false);
        assert_eq!(registers.get_register(0xF), 0);
    }
}
