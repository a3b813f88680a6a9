use crate::constants::NUM_KEYS;

/// Supplies the keys that are held down right now. Polled by the cpu every time a key
/// instruction executes, key codes are 0x0 through 0xF and an empty list means nothing is pressed.
pub trait Input {
    fn pressed_keys(&self) -> Vec<u8>;
}

/// Lets a host hand in a plain polling closure
impl<F> Input for F
where
    F: Fn() -> Vec<u8>,
{
    fn pressed_keys(&self) -> Vec<u8> {
        self()
    }
}

/// An input that never has anything pressed
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInput;

impl Input for NoInput {
    fn pressed_keys(&self) -> Vec<u8> {
        Vec::new()
    }
}

/// A list of "buttons" for the hex keypad, set to true when pressed, false otherwise
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Keypad {
    keys: [bool; NUM_KEYS as usize],
}

impl Keypad {
    /// Set key's state, codes outside the keypad are ignored
    pub fn set_key_state(&mut self, key: u8, pressed: bool) {
        if let Some(state) = self.keys.get_mut(key as usize) {
            *state = pressed;
        }
    }

    pub fn is_pressed(&self, key: u8) -> bool {
        self.keys.get(key as usize).copied().unwrap_or(false)
    }

    pub fn release_all(&mut self) {
        self.keys = [false; NUM_KEYS as usize];
    }
}

impl Input for Keypad {
    fn pressed_keys(&self) -> Vec<u8> {
        (0..NUM_KEYS).filter(|key| self.is_pressed(*key)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_pressed_keys_in_order() {
        let mut keypad = Keypad::default();
        keypad.set_key_state(0xC, true);
        keypad.set_key_state(0x3, true);
        assert_eq!(keypad.pressed_keys(), vec![0x3, 0xC]);

        keypad.set_key_state(0xC, false);
        assert_eq!(keypad.pressed_keys(), vec![0x3]);

        keypad.release_all();
        assert!(keypad.pressed_keys().is_empty());
    }

    #[test]
    fn ignores_keys_outside_the_keypad() {
        let mut keypad = Keypad::default();
        keypad.set_key_state(0x10, true);
        assert!(!keypad.is_pressed(0x10));
        assert!(keypad.pressed_keys().is_empty());
    }

    #[test]
    fn closures_are_inputs() {
        let input = || vec![0x7];
        assert_eq!(input.pressed_keys(), vec![0x7]);
        assert!(NoInput.pressed_keys().is_empty());
    }
}
