use iced::keyboard::key::Named;

/// # Keymap
/// Chip-8 input is generated with a hexadecimal keypad.
///
/// This original layout is mapped to the left 4 alphanumeric columns.
/// ```text
/// |1|2|3|C|      |1|2|3|4|
/// |4|5|6|D|  ->  |Q|W|E|R|
/// |7|8|9|E|  ->  |A|S|D|F|
/// |A|0|B|F|      |Z|X|C|V|
/// ```
pub fn keymap(key: &str) -> Option<u8> {
    match key.to_ascii_lowercase().as_str() {
        "x" => Some(0x0),
        "1" => Some(0x1),
        "2" => Some(0x2),
        "3" => Some(0x3),
        "q" => Some(0x4),
        "w" => Some(0x5),
        "e" => Some(0x6),
        "a" => Some(0x7),
        "s" => Some(0x8),
        "d" => Some(0x9),
        "z" => Some(0xA),
        "c" => Some(0xB),
        "4" => Some(0xC),
        "r" => Some(0xD),
        "f" => Some(0xE),
        "v" => Some(0xF),
        _ => None,
    }
}

/// A few named keys double as the keys games use most: the arrows for 0xE and 0xF, enter for 0xA
pub fn named_keymap(key: Named) -> Option<u8> {
    match key {
        Named::ArrowUp => Some(0xE),
        Named::ArrowDown => Some(0xF),
        Named::Enter => Some(0xA),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_the_left_columns_to_the_hex_keypad() {
        assert_eq!(keymap("1"), Some(0x1));
        assert_eq!(keymap("4"), Some(0xC));
        assert_eq!(keymap("X"), Some(0x0));
        assert_eq!(keymap("v"), Some(0xF));
        assert_eq!(keymap("p"), None);
        assert_eq!(keymap("Enter"), None);
    }

    #[test]
    fn maps_arrows_and_enter() {
        assert_eq!(named_keymap(Named::ArrowUp), Some(0xE));
        assert_eq!(named_keymap(Named::ArrowDown), Some(0xF));
        assert_eq!(named_keymap(Named::Enter), Some(0xA));
        assert_eq!(named_keymap(Named::ArrowLeft), None);
        assert_eq!(named_keymap(Named::Escape), None);
    }

    #[test]
    fn every_key_is_reachable() {
        let mut keys: Vec<u8> = "1234qwerasdfzxcv"
            .chars()
            .filter_map(|c| keymap(&c.to_string()))
            .collect();
        keys.sort_unstable();
        assert_eq!(keys, (0..16).collect::<Vec<u8>>());
    }
}
