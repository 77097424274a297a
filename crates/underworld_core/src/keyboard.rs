/// A key as reported by the input surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Digit(u8),
    ArrowLeft,
    ArrowRight,
    Other(String),
}

impl Key {
    /// Maps a DOM-style key name (`"1"`, `"ArrowLeft"`, ...) to a key.
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() => Key::Digit(c as u8 - b'0'),
                    _ => Key::Other(name.to_string()),
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub ctrl: bool,
}

impl KeyPress {
    pub fn new(key: Key, ctrl: bool) -> Self {
        Self { key, ctrl }
    }

    pub fn ctrl(key: Key) -> Self {
        Self::new(key, true)
    }
}

/// Resolves a shortcut to the index of the navigation control it clicks.
///
/// Digits `1..=4` pick controls positionally. Arrows move relative to
/// `current` and wrap; a missing `current` behaves like index -1, so left
/// lands on the last control and right on the first. Returns `None` when the
/// key is not a shortcut or the index has no control behind it.
pub fn shortcut_target(
    press: &KeyPress,
    control_count: usize,
    current: Option<usize>,
) -> Option<usize> {
    if !press.ctrl || control_count == 0 {
        return None;
    }
    let last = control_count - 1;
    let index = match press.key {
        Key::Digit(digit @ 1..=4) => usize::from(digit - 1),
        Key::ArrowLeft => match current {
            Some(index) if index > 0 => index - 1,
            _ => last,
        },
        Key::ArrowRight => match current {
            Some(index) if index < last => index + 1,
            Some(_) => 0,
            None => 0,
        },
        Key::Digit(_) | Key::Other(_) => return None,
    };
    (index < control_count).then_some(index)
}
