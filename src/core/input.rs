//! Logical actions and their per-tick state.
//!
//! The simulation never reads the keyboard directly. A frame system maps the
//! keys that are down onto a `ButtonInput<Action>`, and the end of every fixed
//! tick clears its press edges.

use bevy::prelude::*;

/// Every input the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
    Dash,
    Attack,
    UsePotion,
    Interact,
    MenuUp,
    MenuDown,
    Confirm,
    Back,
}

impl Action {
    /// Keys bound to this action.
    pub fn keys(self) -> &'static [KeyCode] {
        match self {
            Action::MoveLeft => &[KeyCode::KeyA, KeyCode::ArrowLeft],
            Action::MoveRight => &[KeyCode::KeyD, KeyCode::ArrowRight],
            Action::Jump => &[KeyCode::KeyW, KeyCode::Space, KeyCode::ArrowUp],
            Action::Dash => &[KeyCode::KeyX],
            Action::Attack => &[KeyCode::KeyZ],
            Action::UsePotion => &[KeyCode::KeyP],
            Action::Interact => &[KeyCode::KeyE],
            Action::MenuUp => &[KeyCode::ArrowUp],
            Action::MenuDown => &[KeyCode::ArrowDown],
            Action::Confirm => &[KeyCode::Enter, KeyCode::NumpadEnter],
            Action::Back => &[KeyCode::Escape],
        }
    }

    pub const ALL: [Action; 11] = [
        Action::MoveLeft,
        Action::MoveRight,
        Action::Jump,
        Action::Dash,
        Action::Attack,
        Action::UsePotion,
        Action::Interact,
        Action::MenuUp,
        Action::MenuDown,
        Action::Confirm,
        Action::Back,
    ];
}

/// Copy the keyboard into the action state once per frame.
pub fn read_keyboard(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    mut input: ResMut<ButtonInput<Action>>,
) {
    let Some(keyboard) = keyboard else {
        return;
    };

    for action in Action::ALL {
        if keyboard.any_pressed(action.keys().iter().copied()) {
            input.press(action);
        } else {
            input.release(action);
        }
    }
}

/// Drop this tick's press edges so each press is seen by one tick only.
pub fn clear_action_edges(mut input: ResMut<ButtonInput<Action>>) {
    input.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn just_pressed_fires_once_per_press() {
        let mut input = ButtonInput::<Action>::default();
        input.press(Action::Jump);
        assert!(input.just_pressed(Action::Jump));

        input.clear();
        input.press(Action::Jump);
        assert!(input.pressed(Action::Jump));
        assert!(!input.just_pressed(Action::Jump));

        input.release(Action::Jump);
        input.clear();
        input.press(Action::Jump);
        assert!(input.just_pressed(Action::Jump));
    }
}
