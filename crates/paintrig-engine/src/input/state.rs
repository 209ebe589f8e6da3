use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{InputEvent, Key, KeyState, Modifiers, MouseButton, MouseButtonState};

/// Held keys and buttons plus the pointer position for one window.
#[derive(Debug, Default)]
pub struct InputState {
    pub modifiers: Modifiers,
    pub focused: bool,
    /// Logical pixels; `None` while the pointer is outside the window.
    pub pointer_pos: Option<(f32, f32)>,
    pub keys_down: HashSet<Key>,
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Folds `ev` into the held state and sums drag and wheel motion into
    /// `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: &InputEvent) {
        match ev {
            InputEvent::ModifiersChanged(m) => self.modifiers = *m,

            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Releases are not delivered to unfocused windows.
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
            }

            InputEvent::PointerMoved { x, y } => {
                if let Some((px, py)) = self.pointer_pos {
                    if self.button_down(MouseButton::Left) {
                        frame.drag_delta.0 += x - px;
                        frame.drag_delta.1 += y - py;
                    }
                }
                self.pointer_pos = Some((*x, *y));
            }

            InputEvent::PointerLeft => self.pointer_pos = None,

            InputEvent::Key { key, state, modifiers, .. } => {
                self.modifiers = *modifiers;
                match state {
                    KeyState::Pressed => {
                        self.keys_down.insert(*key);
                    }
                    KeyState::Released => {
                        self.keys_down.remove(key);
                    }
                }
            }

            InputEvent::PointerButton { button, state, position } => {
                if position.is_some() {
                    self.pointer_pos = *position;
                }
                match state {
                    MouseButtonState::Pressed => {
                        self.buttons_down.insert(*button);
                    }
                    MouseButtonState::Released => {
                        self.buttons_down.remove(button);
                    }
                }
            }

            InputEvent::MouseWheel(delta) => frame.wheel_lines += delta.lines_y(),
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MouseWheelDelta;

    fn left(state: MouseButtonState) -> InputEvent {
        InputEvent::PointerButton {
            button: MouseButton::Left,
            state,
            position: Some((1.0, 1.0)),
        }
    }

    #[test]
    fn drag_delta_only_counts_held_motion() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, &InputEvent::PointerMoved { x: 10.0, y: 10.0 });
        state.apply_event(&mut frame, &InputEvent::PointerMoved { x: 20.0, y: 10.0 });
        assert!(frame.is_empty());

        state.apply_event(&mut frame, &left(MouseButtonState::Pressed));
        state.apply_event(&mut frame, &InputEvent::PointerMoved { x: 5.0, y: -2.0 });
        state.apply_event(&mut frame, &InputEvent::PointerMoved { x: 6.0, y: -2.0 });
        assert_eq!(frame.drag_delta, (5.0, -3.0));

        frame.clear();
        state.apply_event(&mut frame, &left(MouseButtonState::Released));
        state.apply_event(&mut frame, &InputEvent::PointerMoved { x: 50.0, y: 50.0 });
        assert!(frame.is_empty());
    }

    #[test]
    fn wheel_lines_accumulate() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        for _ in 0..3 {
            state.apply_event(&mut frame, &InputEvent::MouseWheel(MouseWheelDelta::Pixel { x: 0.0, y: 10.0 }));
        }
        assert!((frame.wheel_lines - 0.75).abs() < 1e-6);
    }

    #[test]
    fn click_without_position_keeps_pointer_unknown() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        let ev = InputEvent::PointerButton {
            button: MouseButton::Left,
            state: MouseButtonState::Pressed,
            position: None,
        };
        state.apply_event(&mut frame, &ev);
        assert!(state.button_down(MouseButton::Left));
        assert_eq!(state.pointer_pos, None);
    }

    #[test]
    fn focus_loss_releases_everything() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, &left(MouseButtonState::Pressed));
        assert!(state.button_down(MouseButton::Left));
        state.apply_event(&mut frame, &InputEvent::Focused(false));
        assert!(!state.button_down(MouseButton::Left));
    }
}
