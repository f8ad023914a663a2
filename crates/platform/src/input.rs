//! Physical key to [`Action`] bindings.

use std::collections::HashMap;

use serde::Deserialize;
use tracing::{debug, warn};
use winit::event::ElementState;
use winit::keyboard::PhysicalKey;

pub use winit::keyboard::KeyCode;

use campus_scene::{Action, InputState};

/// Maps physical keys to logical actions.
///
/// In a config file the bindings are a table from action to key names; any
/// action not listed keeps its default keys:
///
/// ```toml
/// [keys]
/// move_forward = ["KeyW", "ArrowUp"]
/// toggle_gate = ["Space"]
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "HashMap<Action, Vec<KeyCode>>")]
pub struct KeyBindings {
    by_key: HashMap<KeyCode, Action>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = Self {
            by_key: HashMap::new(),
        };
        for (key, action) in [
            (KeyCode::ArrowUp, Action::LookUp),
            (KeyCode::ArrowDown, Action::LookDown),
            (KeyCode::ArrowLeft, Action::TurnLeft),
            (KeyCode::ArrowRight, Action::TurnRight),
            (KeyCode::KeyW, Action::MoveForward),
            (KeyCode::KeyS, Action::MoveBack),
            (KeyCode::KeyA, Action::StrafeLeft),
            (KeyCode::KeyD, Action::StrafeRight),
            (KeyCode::KeyQ, Action::Ascend),
            (KeyCode::KeyE, Action::Descend),
            (KeyCode::KeyG, Action::ToggleGate),
            (KeyCode::KeyO, Action::ToggleDoor),
        ] {
            bindings.by_key.insert(key, action);
        }
        bindings
    }
}

impl From<HashMap<Action, Vec<KeyCode>>> for KeyBindings {
    fn from(overrides: HashMap<Action, Vec<KeyCode>>) -> Self {
        let mut bindings = Self::default();
        for (action, keys) in overrides {
            bindings.bind(action, &keys);
        }
        bindings
    }
}

impl KeyBindings {
    /// Replace every key bound to `action` with `keys`.
    ///
    /// A key already bound to another action is moved to `action`.
    pub fn bind(&mut self, action: Action, keys: &[KeyCode]) {
        self.by_key.retain(|_, bound| *bound != action);
        for &key in keys {
            if let Some(previous) = self.by_key.insert(key, action) {
                if previous != action {
                    warn!(?key, ?previous, ?action, "Key rebound to a different action");
                }
            }
        }
    }

    /// The action bound to `key`, if any.
    pub fn action_for(&self, key: KeyCode) -> Option<Action> {
        self.by_key.get(&key).copied()
    }

    /// Keys bound to `action`, in no particular order.
    pub fn keys_for(&self, action: Action) -> impl Iterator<Item = KeyCode> + '_ {
        self.by_key
            .iter()
            .filter(move |(_, bound)| **bound == action)
            .map(|(key, _)| *key)
    }

    /// Actions that have no key at all.
    pub fn unbound_actions(&self) -> Vec<Action> {
        Action::ALL
            .into_iter()
            .filter(|&action| self.keys_for(action).next().is_none())
            .collect()
    }

    /// Forward a keyboard event to `input`.
    ///
    /// Returns the action the key maps to. Key repeats are dropped so a held
    /// toggle key flips its latch only once.
    pub fn handle_key(
        &self,
        input: &mut InputState,
        key: PhysicalKey,
        state: ElementState,
        repeat: bool,
    ) -> Option<Action> {
        let PhysicalKey::Code(code) = key else {
            return None;
        };
        let action = self.action_for(code)?;
        match state {
            ElementState::Pressed if repeat => {}
            ElementState::Pressed => {
                debug!(?code, ?action, "Key down");
                input.on_key_down(action);
            }
            ElementState::Released => input.on_key_up(action),
        }
        Some(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_scene::HingeId;

    fn press(bindings: &KeyBindings, input: &mut InputState, code: KeyCode) {
        bindings.handle_key(input, PhysicalKey::Code(code), ElementState::Pressed, false);
    }

    fn release(bindings: &KeyBindings, input: &mut InputState, code: KeyCode) {
        bindings.handle_key(input, PhysicalKey::Code(code), ElementState::Released, false);
    }

    #[test]
    fn test_default_bindings_cover_every_action() {
        let bindings = KeyBindings::default();
        assert!(bindings.unbound_actions().is_empty());
        assert_eq!(bindings.action_for(KeyCode::KeyW), Some(Action::MoveForward));
        assert_eq!(bindings.action_for(KeyCode::ArrowLeft), Some(Action::TurnLeft));
        assert_eq!(bindings.action_for(KeyCode::KeyG), Some(Action::ToggleGate));
        assert_eq!(bindings.action_for(KeyCode::KeyZ), None);
    }

    #[test]
    fn test_held_key_updates_input() {
        let bindings = KeyBindings::default();
        let mut input = InputState::new();

        press(&bindings, &mut input, KeyCode::KeyQ);
        assert!(input.is_held(Action::Ascend));
        release(&bindings, &mut input, KeyCode::KeyQ);
        assert!(!input.is_held(Action::Ascend));
    }

    #[test]
    fn test_repeat_does_not_flip_toggle_twice() {
        let bindings = KeyBindings::default();
        let mut input = InputState::new();
        let key = PhysicalKey::Code(KeyCode::KeyO);

        bindings.handle_key(&mut input, key, ElementState::Pressed, false);
        bindings.handle_key(&mut input, key, ElementState::Pressed, true);
        bindings.handle_key(&mut input, key, ElementState::Pressed, true);
        bindings.handle_key(&mut input, key, ElementState::Released, false);

        assert!(input.is_toggled(HingeId::Door));
        assert!(!input.is_toggled(HingeId::Gate));
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let bindings = KeyBindings::default();
        let mut input = InputState::new();
        let action = bindings.handle_key(
            &mut input,
            PhysicalKey::Code(KeyCode::F12),
            ElementState::Pressed,
            false,
        );
        assert_eq!(action, None);
        assert!(Action::ALL.iter().all(|&a| !input.is_held(a)));
    }

    #[test]
    fn test_bind_moves_key_between_actions() {
        let mut bindings = KeyBindings::default();
        bindings.bind(Action::ToggleGate, &[KeyCode::KeyO]);

        assert_eq!(bindings.action_for(KeyCode::KeyO), Some(Action::ToggleGate));
        assert_eq!(bindings.action_for(KeyCode::KeyG), None);
        assert_eq!(bindings.unbound_actions(), vec![Action::ToggleDoor]);
    }

    #[derive(Deserialize)]
    struct Wrapper {
        keys: KeyBindings,
    }

    #[test]
    fn test_deserialize_overrides_defaults() {
        let parsed: Wrapper = toml::from_str(
            r#"
            [keys]
            move_forward = ["KeyI", "ArrowUp"]
            toggle_gate = ["Space"]
            "#,
        )
        .unwrap();
        let keys = parsed.keys;

        assert_eq!(keys.action_for(KeyCode::KeyI), Some(Action::MoveForward));
        assert_eq!(keys.action_for(KeyCode::ArrowUp), Some(Action::MoveForward));
        assert_eq!(keys.action_for(KeyCode::KeyW), None);
        assert_eq!(keys.action_for(KeyCode::Space), Some(Action::ToggleGate));
        // Untouched actions keep their defaults
        assert_eq!(keys.action_for(KeyCode::KeyO), Some(Action::ToggleDoor));
        // ArrowUp was taken from look_up
        assert_eq!(keys.unbound_actions(), vec![Action::LookUp]);
    }

    #[test]
    fn test_deserialize_rejects_unknown_action() {
        let parsed: Result<Wrapper, _> = toml::from_str(
            r#"
            [keys]
            jump = ["Space"]
            "#,
        );
        assert!(parsed.is_err());
    }
}
