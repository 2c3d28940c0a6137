use bevy::prelude::*;

/// Marks a glider as driven by the local keyboard.
#[derive(Component, Debug, Clone)]
pub struct PlayerController {
    pub active: bool,
    pub bindings: KeyBindings,
}

impl Default for PlayerController {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerController {
    pub fn new() -> Self {
        Self {
            active: true,
            bindings: KeyBindings::default(),
        }
    }

    pub fn disabled() -> Self {
        Self {
            active: false,
            ..Self::new()
        }
    }
}

/// Marks a glider whose axes come from [`ExternalControls`] instead of the keyboard.
///
/// [`ExternalControls`]: crate::resources::ExternalControls
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct ExternalController;

/// Keys feeding the two glider axes. Each direction accepts any of its keys.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    /// Stick forward, nose down
    pub push: Vec<KeyCode>,
    /// Stick back, nose up
    pub pull: Vec<KeyCode>,
    pub left: Vec<KeyCode>,
    pub right: Vec<KeyCode>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            push: vec![KeyCode::ArrowUp, KeyCode::KeyW],
            pull: vec![KeyCode::ArrowDown, KeyCode::KeyS],
            left: vec![KeyCode::ArrowLeft, KeyCode::KeyA],
            right: vec![KeyCode::ArrowRight, KeyCode::KeyD],
        }
    }
}

impl KeyBindings {
    /// Returns the `(up, right)` axis values for the keys currently held.
    pub fn axes(&self, keyboard: &ButtonInput<KeyCode>) -> (f64, f64) {
        let held = |keys: &[KeyCode]| keyboard.any_pressed(keys.iter().copied());
        let axis = |negative: bool, positive: bool| match (negative, positive) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        };
        (
            axis(held(&self.pull), held(&self.push)),
            axis(held(&self.left), held(&self.right)),
        )
    }
}
