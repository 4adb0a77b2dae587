// SPDX-License-Identifier: MPL-2.0
//! Keyboard contract of the open modal.

/// Keys the modal reacts to, decoupled from the windowing toolkit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalKey {
    Escape,
    ArrowLeft,
    ArrowRight,
    Character(String),
    Other,
}

/// What a key press does while the modal is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Close,
    Previous,
    Next,
    ToggleFullscreen,
}

impl ModalKey {
    /// Maps a key to its modal action, if any.
    #[must_use]
    pub fn action(&self) -> Option<KeyAction> {
        match self {
            ModalKey::Escape => Some(KeyAction::Close),
            ModalKey::ArrowLeft => Some(KeyAction::Previous),
            ModalKey::ArrowRight => Some(KeyAction::Next),
            ModalKey::Character(c) if c.eq_ignore_ascii_case("f") => {
                Some(KeyAction::ToggleFullscreen)
            }
            ModalKey::Character(_) | ModalKey::Other => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_keys_map_to_actions() {
        assert_eq!(ModalKey::Escape.action(), Some(KeyAction::Close));
        assert_eq!(ModalKey::ArrowLeft.action(), Some(KeyAction::Previous));
        assert_eq!(ModalKey::ArrowRight.action(), Some(KeyAction::Next));
    }

    #[test]
    fn f_toggles_fullscreen_in_either_case() {
        assert_eq!(
            ModalKey::Character("f".into()).action(),
            Some(KeyAction::ToggleFullscreen)
        );
        assert_eq!(
            ModalKey::Character("F".into()).action(),
            Some(KeyAction::ToggleFullscreen)
        );
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(ModalKey::Character("g".into()).action(), None);
        assert_eq!(ModalKey::Other.action(), None);
    }
}
