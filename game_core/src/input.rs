//! Keyboard input handling
//!
//! Paddle intent is derived from the set of held keys every time it is read,
//! so releasing keys out of press order cannot leave a paddle drifting.

use std::collections::BTreeSet;

use crate::Side;

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
    Pause,
    Restart,
    Quit,
}

impl Key {
    /// Map a raw key name to a logical key
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "w" | "W" => Some(Key::LeftUp),
            "s" | "S" => Some(Key::LeftDown),
            "ArrowUp" => Some(Key::RightUp),
            "ArrowDown" => Some(Key::RightDown),
            "p" | "P" => Some(Key::Pause),
            "r" | "R" => Some(Key::Restart),
            "Escape" | "q" | "Q" => Some(Key::Quit),
            _ => None,
        }
    }

    fn is_movement(self) -> bool {
        matches!(
            self,
            Key::LeftUp | Key::LeftDown | Key::RightUp | Key::RightDown
        )
    }
}

/// Raw key transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Down(Key),
    Up(Key),
}

/// Match-level command produced by a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Pause,
    Restart,
    /// Handled by the driver; the simulation ignores it
    Quit,
}

/// Currently held movement keys
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: BTreeSet<Key>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a key transition. Presses of Pause, Restart or Quit yield a command.
    pub fn handle(&mut self, event: KeyEvent) -> Option<Command> {
        match event {
            KeyEvent::Down(key) if key.is_movement() => {
                self.held.insert(key);
                None
            }
            KeyEvent::Up(key) if key.is_movement() => {
                self.held.remove(&key);
                None
            }
            KeyEvent::Down(Key::Pause) => Some(Command::Pause),
            KeyEvent::Down(Key::Restart) => Some(Command::Restart),
            KeyEvent::Down(Key::Quit) => Some(Command::Quit),
            _ => None,
        }
    }

    /// Handle a key by raw name; unknown names are ignored
    pub fn handle_named(&mut self, name: &str, pressed: bool) -> Option<Command> {
        let key = Key::from_name(name)?;
        let event = if pressed {
            KeyEvent::Down(key)
        } else {
            KeyEvent::Up(key)
        };
        self.handle(event)
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Current directional intent for a paddle
    pub fn intent(&self, side: Side) -> i8 {
        resolve_intent(&self.held, side)
    }

    /// Release everything (e.g. window lost focus)
    pub fn clear(&mut self) {
        self.held.clear();
    }
}

/// Up and down held together cancel out
pub fn resolve_intent(held: &BTreeSet<Key>, side: Side) -> i8 {
    let (up, down) = match side {
        Side::Left => (Key::LeftUp, Key::LeftDown),
        Side::Right => (Key::RightUp, Key::RightDown),
    };
    let mut dir = 0i8;
    if held.contains(&up) {
        dir -= 1;
    }
    if held.contains(&down) {
        dir += 1;
    }
    dir.clamp(-1, 1)
}
