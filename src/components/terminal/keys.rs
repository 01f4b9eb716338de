//! Keyboard event decoding.

use voidterm_core::InputEvent;

/// Map a `KeyboardEvent.key` value to a terminal input event.
///
/// Shortcuts with ctrl/meta are left to the browser. Named keys other than
/// Backspace, Enter and Tab (arrows, Shift, ...) are ignored.
pub fn decode_key(key: &str, ctrl: bool, meta: bool) -> Option<InputEvent> {
    match key {
        "Backspace" => Some(InputEvent::Backspace),
        "Enter" => Some(InputEvent::Submit),
        "Tab" => Some(InputEvent::Complete),
        _ if ctrl || meta => None,
        _ => {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(InputEvent::Char(c)),
                _ => None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_keys() {
        assert_eq!(decode_key("Backspace", false, false), Some(InputEvent::Backspace));
        assert_eq!(decode_key("Enter", false, false), Some(InputEvent::Submit));
        assert_eq!(decode_key("Tab", false, false), Some(InputEvent::Complete));
    }

    #[test]
    fn test_printable_characters() {
        assert_eq!(decode_key("a", false, false), Some(InputEvent::Char('a')));
        assert_eq!(decode_key(" ", false, false), Some(InputEvent::Char(' ')));
        assert_eq!(decode_key("é", false, false), Some(InputEvent::Char('é')));
    }

    #[test]
    fn test_ignored_keys() {
        assert_eq!(decode_key("ArrowUp", false, false), None);
        assert_eq!(decode_key("Shift", false, false), None);
        assert_eq!(decode_key("c", true, false), None);
        assert_eq!(decode_key("v", false, true), None);
    }
}
