//! Logical input state for navigation and hinge toggles.
//!
//! The host maps physical keys to [`Action`]s and forwards key-down/key-up
//! events here. Nothing in this module touches the camera or the hinges; the
//! frame tick reads the flags and applies them.

use std::collections::HashSet;

use serde::Deserialize;

/// The fixed vocabulary of logical keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    MoveForward,
    MoveBack,
    StrafeLeft,
    StrafeRight,
    Ascend,
    Descend,
    LookUp,
    LookDown,
    TurnLeft,
    TurnRight,
    ToggleGate,
    ToggleDoor,
}

impl Action {
    /// Every action.
    pub const ALL: [Action; 12] = [
        Action::MoveForward,
        Action::MoveBack,
        Action::StrafeLeft,
        Action::StrafeRight,
        Action::Ascend,
        Action::Descend,
        Action::LookUp,
        Action::LookDown,
        Action::TurnLeft,
        Action::TurnRight,
        Action::ToggleGate,
        Action::ToggleDoor,
    ];

    /// True for the actions that flip a latch on key-down instead of being held.
    pub fn is_toggle(self) -> bool {
        matches!(self, Action::ToggleGate | Action::ToggleDoor)
    }
}

/// Which hinged prop a toggle drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HingeId {
    Gate,
    Door,
}

/// Held keys plus one latched toggle per hinge.
#[derive(Debug, Default, Clone)]
pub struct InputState {
    /// Currently held actions
    held: HashSet<Action>,
    /// Gate latch, flipped on each ToggleGate key-down edge
    gate_toggled: bool,
    /// Door latch, flipped on each ToggleDoor key-down edge
    door_toggled: bool,
}

impl InputState {
    /// Create a new input state with everything released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key-down event.
    ///
    /// Auto-repeat events for a key that is already held are ignored, so a
    /// toggle flips exactly once per physical press.
    pub fn on_key_down(&mut self, action: Action) {
        if !self.held.insert(action) {
            return;
        }
        match action {
            Action::ToggleGate => self.gate_toggled = !self.gate_toggled,
            Action::ToggleDoor => self.door_toggled = !self.door_toggled,
            _ => {}
        }
    }

    /// Handle a key-up event.
    pub fn on_key_up(&mut self, action: Action) {
        self.held.remove(&action);
    }

    /// Release every held key, keeping the toggle latches.
    ///
    /// Used when the window loses focus and key-up events would be missed.
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    /// Check if an action is currently held.
    pub fn is_held(&self, action: Action) -> bool {
        self.held.contains(&action)
    }

    /// Check if a hinge's toggle latch is set.
    pub fn is_toggled(&self, hinge: HingeId) -> bool {
        match hinge {
            HingeId::Gate => self.gate_toggled,
            HingeId::Door => self.door_toggled,
        }
    }

    /// +1 when only `positive` is held, -1 when only `negative` is, else 0.
    pub fn axis(&self, positive: Action, negative: Action) -> f32 {
        match (self.is_held(positive), self.is_held(negative)) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }
}
