use crate::Direction;

/// The four steering key groups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Up,
    Right,
    Down,
}

impl Key {
    /// Legacy DOM `keyCode`: arrows and WASD
    pub fn from_code(code: u32) -> Option<Key> {
        match code {
            37 | 65 => Some(Key::Left),
            38 | 87 => Some(Key::Up),
            39 | 68 => Some(Key::Right),
            40 | 83 => Some(Key::Down),
            _ => None,
        }
    }

    /// DOM `KeyboardEvent.key` name
    pub fn from_name(name: &str) -> Option<Key> {
        match name {
            "ArrowLeft" | "a" | "A" => Some(Key::Left),
            "ArrowUp" | "w" | "W" => Some(Key::Up),
            "ArrowRight" | "d" | "D" => Some(Key::Right),
            "ArrowDown" | "s" | "S" => Some(Key::Down),
            _ => None,
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Key::Left => Direction::Left,
            Key::Up => Direction::Up,
            Key::Right => Direction::Right,
            Key::Down => Direction::Down,
        }
    }
}

/// Map a key to a new heading, refusing a 180° turn
pub fn map_key(key: Key, current: Direction) -> Option<Direction> {
    let next = key.direction();
    if current.reverses(next) {
        None
    } else {
        Some(next)
    }
}

/// Handle a key down event: apply the accepted heading in place.
/// Returns true when the direction was updated.
pub fn handle_key_down(key: Key, direction: &mut Direction) -> bool {
    match map_key(key, *direction) {
        Some(next) => {
            *direction = next;
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_and_names_agree() {
        for (code, name) in [(37, "ArrowLeft"), (38, "ArrowUp"), (39, "ArrowRight"), (40, "ArrowDown")] {
            assert_eq!(Key::from_code(code), Key::from_name(name));
        }
        assert_eq!(Key::from_code(65), Some(Key::Left));
        assert_eq!(Key::from_code(87), Some(Key::Up));
        assert_eq!(Key::from_code(68), Some(Key::Right));
        assert_eq!(Key::from_code(83), Some(Key::Down));
        assert_eq!(Key::from_name("W"), Some(Key::Up));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        assert_eq!(Key::from_code(13), None);
        assert_eq!(Key::from_name("Enter"), None);
        assert_eq!(Key::from_name(""), None);
    }

    #[test]
    fn test_first_key_from_still() {
        for key in [Key::Left, Key::Up, Key::Right, Key::Down] {
            assert_eq!(map_key(key, Direction::Still), Some(key.direction()));
        }
    }

    #[test]
    fn test_reversal_rejected() {
        assert_eq!(map_key(Key::Left, Direction::Right), None);
        assert_eq!(map_key(Key::Right, Direction::Left), None);
        assert_eq!(map_key(Key::Up, Direction::Down), None);
        assert_eq!(map_key(Key::Down, Direction::Up), None);
    }

    #[test]
    fn test_turns_accepted() {
        assert_eq!(map_key(Key::Up, Direction::Right), Some(Direction::Up));
        assert_eq!(map_key(Key::Right, Direction::Right), Some(Direction::Right));
    }

    #[test]
    fn test_last_accepted_key_wins() {
        let mut direction = Direction::Right;
        assert!(handle_key_down(Key::Up, &mut direction));
        assert!(handle_key_down(Key::Left, &mut direction));
        assert_eq!(direction, Direction::Left);
        assert!(!handle_key_down(Key::Right, &mut direction));
        assert_eq!(direction, Direction::Left);
    }
}
