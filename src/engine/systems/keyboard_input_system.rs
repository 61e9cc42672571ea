use std::collections::HashSet;

use winit::event::{ ElementState, KeyEvent };
use winit::keyboard::{ KeyCode, PhysicalKey };

/// Keys that drive the transform. Anything else is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    E,
    Q,
}

impl Key {
    pub fn from_key_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::ArrowUp => Some(Key::Up),
            KeyCode::ArrowDown => Some(Key::Down),
            KeyCode::KeyE => Some(Key::E),
            KeyCode::KeyQ => Some(Key::Q),
            _ => None,
        }
    }
}

/// Tracks which keys are held, fed from window events.
///
/// Observation is kept apart from mutation: the frame loop reads
/// [`pressed_keys`](Self::pressed_keys) and hands the set to the transform.
#[derive(Debug, Default)]
pub struct KeyboardInputSystem {
    pressed_keys: HashSet<Key>,
}

impl KeyboardInputSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn receive_key_event(&mut self, key_event: &KeyEvent) {
        if let PhysicalKey::Code(key_code) = key_event.physical_key {
            self.receive_key(key_code, key_event.state);
        }
    }

    pub fn receive_key(&mut self, key_code: KeyCode, state: ElementState) {
        let Some(key) = Key::from_key_code(key_code) else {
            return;
        };
        match state {
            ElementState::Pressed => {
                if self.pressed_keys.insert(key) {
                    log::trace!("key pressed: {:?}", key);
                }
            }
            ElementState::Released => {
                if self.pressed_keys.remove(&key) {
                    log::trace!("key released: {:?}", key);
                }
            }
        }
    }

    /// On focus loss the release events never arrive, so drop held keys.
    pub fn focus_changed(&mut self, focused: bool) {
        if !focused {
            self.pressed_keys.clear();
        }
    }

    pub fn pressed_keys(&self) -> &HashSet<Key> {
        &self.pressed_keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_press_and_release() {
        let mut input = KeyboardInputSystem::new();
        input.receive_key(KeyCode::ArrowUp, ElementState::Pressed);
        input.receive_key(KeyCode::KeyE, ElementState::Pressed);
        assert!(input.pressed_keys().contains(&Key::Up));
        assert!(input.pressed_keys().contains(&Key::E));

        input.receive_key(KeyCode::ArrowUp, ElementState::Released);
        assert_eq!(input.pressed_keys().len(), 1);
        assert!(input.pressed_keys().contains(&Key::E));
    }

    #[test]
    fn repeated_press_is_held_once() {
        let mut input = KeyboardInputSystem::new();
        input.receive_key(KeyCode::KeyQ, ElementState::Pressed);
        input.receive_key(KeyCode::KeyQ, ElementState::Pressed);
        assert_eq!(input.pressed_keys().len(), 1);
    }

    #[test]
    fn ignores_unmapped_keys() {
        let mut input = KeyboardInputSystem::new();
        input.receive_key(KeyCode::KeyW, ElementState::Pressed);
        input.receive_key(KeyCode::Space, ElementState::Pressed);
        assert!(input.pressed_keys().is_empty());
    }

    #[test]
    fn focus_loss_releases_everything() {
        let mut input = KeyboardInputSystem::new();
        input.receive_key(KeyCode::ArrowDown, ElementState::Pressed);
        input.focus_changed(true);
        assert_eq!(input.pressed_keys().len(), 1);
        input.focus_changed(false);
        assert!(input.pressed_keys().is_empty());
    }
}
