// Keyboard tracking
// Turns winit key events into a per-tick TickInput snapshot

use std::collections::HashSet;

use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::sim::TickInput;

const LEFT_KEYS: &[KeyCode] = &[KeyCode::ArrowLeft, KeyCode::KeyA];
const RIGHT_KEYS: &[KeyCode] = &[KeyCode::ArrowRight, KeyCode::KeyD];
const JUMP_KEYS: &[KeyCode] = &[KeyCode::Space, KeyCode::ArrowUp, KeyCode::KeyW];
const DOWN_KEYS: &[KeyCode] = &[KeyCode::ArrowDown, KeyCode::KeyS];

#[derive(Debug, Default)]
pub struct KeyboardState {
    keys_held: HashSet<KeyCode>,
    // Sticky until the loop sees it
    quit_requested: bool,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a winit WindowEvent into the keyboard state.
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    self.set_key(key, event.state);
                }
            }
            WindowEvent::CloseRequested => self.quit_requested = true,
            // Keys released while unfocused never report a release
            WindowEvent::Focused(false) => self.keys_held.clear(),
            _ => {}
        }
    }

    pub fn set_key(&mut self, key: KeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if key == KeyCode::Escape {
                    self.quit_requested = true;
                }
                self.keys_held.insert(key);
            }
            ElementState::Released => {
                self.keys_held.remove(&key);
            }
        }
    }

    pub fn is_key_held(&self, key: KeyCode) -> bool {
        self.keys_held.contains(&key)
    }

    fn any_held(&self, keys: &[KeyCode]) -> bool {
        keys.iter().any(|k| self.is_key_held(*k))
    }

    /// Snapshot for the next tick
    pub fn snapshot(&self) -> TickInput {
        TickInput {
            left: self.any_held(LEFT_KEYS),
            right: self.any_held(RIGHT_KEYS),
            jump: self.any_held(JUMP_KEYS),
            down: self.any_held(DOWN_KEYS),
            quit: self.quit_requested,
        }
    }
}
