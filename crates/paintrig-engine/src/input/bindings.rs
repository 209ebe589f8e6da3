use crate::controls::{Command, GlobalState, SceneMode};
use crate::coords::Viewport;
use crate::paint::{Channel, Color};
use crate::rig::Joint;
use crate::scene::ShapeKind;

use super::{InputEvent, InputFrame, InputState, Key, KeyState, MouseButton, MouseButtonState};

/// What one input event asks the application to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Apply(Command),
    Quit,
}

/// Turns fractional wheel motion into whole steps, carrying the remainder
/// across batches so small touchpad deltas still add up.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct WheelSteps {
    residual: f32,
}

impl WheelSteps {
    /// Adds `lines` and returns the whole steps now available.
    pub fn take(&mut self, lines: f32) -> i64 {
        if !lines.is_finite() {
            return 0;
        }
        self.residual += lines;
        let steps = self.residual.trunc();
        self.residual -= steps;
        steps as i64
    }
}

/// Key and pointer bindings of the studio.
///
/// Steps are in the units of the control they drive: slider points for
/// color channels, pixels for size, degrees for rotation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bindings {
    pub channel_step: i32,
    pub alpha_step: f32,
    pub size_step: f32,
    pub rotate_step: f32,
    /// Degrees of figure rotation per logical pixel of drag.
    pub drag_degrees_per_px: f32,
}

impl Default for Bindings {
    fn default() -> Self {
        Self {
            channel_step: 10,
            alpha_step: 0.1,
            size_step: 1.0,
            rotate_step: 5.0,
            drag_degrees_per_px: 0.5,
        }
    }
}

impl Bindings {
    /// Translates one discrete event against the input state from *before*
    /// the event and the current application state.
    ///
    /// Drag rotation and wheel steps come from [`Bindings::frame_intents`].
    pub fn intents(
        &self,
        event: &InputEvent,
        input: &InputState,
        viewport: Viewport,
        state: &GlobalState,
    ) -> Vec<Intent> {
        match event {
            InputEvent::Key { key, state: KeyState::Pressed, modifiers, .. } => {
                self.key_intent(*key, modifiers.shift, state).into_iter().collect()
            }

            // A click before the pointer ever entered has no position.
            InputEvent::PointerButton {
                button: MouseButton::Left,
                state: MouseButtonState::Pressed,
                position: Some((x, y)),
            } => self.place(viewport, *x, *y, state).into_iter().collect(),

            InputEvent::PointerMoved { x, y } if input.button_down(MouseButton::Left) => {
                self.place(viewport, *x, *y, state).into_iter().collect()
            }

            _ => Vec::new(),
        }
    }

    /// Translates the motion summed over one event batch.
    ///
    /// Dragging rotates the figure; the wheel steps the circle side count
    /// in paint mode.
    pub fn frame_intents(
        &self,
        frame: &InputFrame,
        wheel: &mut WheelSteps,
        state: &GlobalState,
    ) -> Vec<Intent> {
        let mut out = Vec::new();

        let (dx, dy) = frame.drag_delta;
        if state.mode == SceneMode::Figure && (dx != 0.0 || dy != 0.0) {
            let k = self.drag_degrees_per_px;
            out.push(Intent::Apply(Command::SetGlobalRotation {
                x: state.pose.global_x + dy * k,
                y: state.pose.global_y + dx * k,
            }));
        }

        let steps = wheel.take(frame.wheel_lines);
        if steps != 0 && state.mode == SceneMode::Paint {
            out.push(Intent::Apply(Command::SetSides(state.brush.sides as i64 + steps)));
        }

        out
    }

    fn place(&self, viewport: Viewport, x: f32, y: f32, state: &GlobalState) -> Option<Intent> {
        if state.mode != SceneMode::Paint || !viewport.is_valid() {
            return None;
        }
        Some(Intent::Apply(Command::Place(viewport.to_ndc(x, y))))
    }

    fn key_intent(&self, key: Key, shift: bool, state: &GlobalState) -> Option<Intent> {
        let brush = &state.brush;
        let pose = &state.pose;
        let sign = if shift { -1 } else { 1 };

        let command = match key {
            Key::Escape => return Some(Intent::Quit),

            Key::P => Command::SelectKind(ShapeKind::Point),
            Key::T => Command::SelectKind(ShapeKind::Triangle),
            Key::C => Command::SelectKind(ShapeKind::Circle),
            Key::K => Command::SelectKind(ShapeKind::Cube),

            Key::R => Command::SetColor(Color::RED),
            Key::G => Command::SetColor(Color::GREEN),
            Key::W => Command::SetColor(Color::WHITE),

            Key::Digit1 | Key::Digit2 | Key::Digit3 => {
                let channel = match key {
                    Key::Digit1 => Channel::Red,
                    Key::Digit2 => Channel::Green,
                    _ => Channel::Blue,
                };
                let raw = (brush.color.channel(channel) * 100.0).round() as i32;
                Command::SetChannel {
                    channel,
                    raw: raw + sign * self.channel_step,
                }
            }
            Key::Digit4 => Command::SetAlpha(brush.color.a + sign as f32 * self.alpha_step),

            Key::Plus => Command::SetSize(brush.size + self.size_step),
            Key::Minus => Command::SetSize(brush.size - self.size_step),
            Key::BracketLeft => Command::SetSides(brush.sides as i64 - 1),
            Key::BracketRight => Command::SetSides(brush.sides as i64 + 1),

            Key::Backspace => Command::Clear,
            Key::Tab => Command::SetMode(state.mode.next()),

            Key::E => Command::ToggleAnimation(Joint::Ear),
            Key::U => Command::ToggleAnimation(Joint::UpperLeg),
            Key::L => Command::ToggleAnimation(Joint::LowerLeg),

            Key::ArrowUp | Key::ArrowDown | Key::ArrowLeft | Key::ArrowRight => {
                let step = self.rotate_step;
                let (dx, dy) = match key {
                    Key::ArrowUp => (-step, 0.0),
                    Key::ArrowDown => (step, 0.0),
                    Key::ArrowLeft => (0.0, -step),
                    _ => (0.0, step),
                };
                Command::SetGlobalRotation {
                    x: pose.global_x + dx,
                    y: pose.global_y + dy,
                }
            }

            Key::Shift | Key::Unknown(_) => return None,
        };

        Some(Intent::Apply(command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::input::Modifiers;

    fn press(key: Key, shift: bool) -> InputEvent {
        InputEvent::Key {
            key,
            state: KeyState::Pressed,
            modifiers: Modifiers { shift, ..Modifiers::default() },
            repeat: false,
        }
    }

    fn only(intents: Vec<Intent>) -> Intent {
        assert_eq!(intents.len(), 1, "{intents:?}");
        intents.into_iter().next().unwrap()
    }

    const VIEW: Viewport = Viewport::new(200.0, 100.0);

    #[test]
    fn click_places_at_ndc() {
        let state = GlobalState::default();
        let ev = InputEvent::PointerButton {
            button: MouseButton::Left,
            state: MouseButtonState::Pressed,
            position: Some((150.0, 25.0)),
        };
        let intent = only(Bindings::default().intents(&ev, &InputState::default(), VIEW, &state));
        assert_eq!(intent, Intent::Apply(Command::Place(Vec2::new(0.5, 0.5))));
    }

    #[test]
    fn click_before_pointer_enters_places_nothing() {
        let state = GlobalState::default();
        let ev = InputEvent::PointerButton {
            button: MouseButton::Left,
            state: MouseButtonState::Pressed,
            position: None,
        };
        assert!(Bindings::default().intents(&ev, &InputState::default(), VIEW, &state).is_empty());
    }

    #[test]
    fn move_without_button_does_nothing() {
        let state = GlobalState::default();
        let ev = InputEvent::PointerMoved { x: 1.0, y: 1.0 };
        assert!(Bindings::default().intents(&ev, &InputState::default(), VIEW, &state).is_empty());
    }

    #[test]
    fn shift_digit_lowers_channel() {
        let state = GlobalState::default();
        let intent = only(Bindings::default().intents(
            &press(Key::Digit2, true),
            &InputState::default(),
            VIEW,
            &state,
        ));
        assert_eq!(
            intent,
            Intent::Apply(Command::SetChannel { channel: Channel::Green, raw: 90 })
        );
    }

    #[test]
    fn drag_rotates_figure() {
        let mut state = GlobalState::default();
        state.mode = SceneMode::Figure;
        let frame = InputFrame { drag_delta: (20.0, -10.0), wheel_lines: 0.0 };

        let intent = only(Bindings::default().frame_intents(&frame, &mut WheelSteps::default(), &state));
        assert_eq!(
            intent,
            Intent::Apply(Command::SetGlobalRotation { x: -5.0, y: 10.0 })
        );
    }

    #[test]
    fn drag_in_figure_mode_does_not_place() {
        let mut state = GlobalState::default();
        state.mode = SceneMode::Figure;
        let mut input = InputState::default();
        input.pointer_pos = Some((10.0, 10.0));
        input.buttons_down.insert(MouseButton::Left);

        let ev = InputEvent::PointerMoved { x: 30.0, y: 0.0 };
        assert!(Bindings::default().intents(&ev, &input, VIEW, &state).is_empty());
    }

    #[test]
    fn small_wheel_deltas_add_up_to_a_step() {
        let state = GlobalState::default();
        let b = Bindings::default();
        let mut wheel = WheelSteps::default();
        let frame = InputFrame { drag_delta: (0.0, 0.0), wheel_lines: 0.25 };

        for _ in 0..3 {
            assert!(b.frame_intents(&frame, &mut wheel, &state).is_empty());
        }
        assert_eq!(
            only(b.frame_intents(&frame, &mut wheel, &state)),
            Intent::Apply(Command::SetSides(state.brush.sides as i64 + 1))
        );
    }

    #[test]
    fn wheel_steps_carry_sign() {
        let mut wheel = WheelSteps::default();
        assert_eq!(wheel.take(-1.5), -1);
        assert_eq!(wheel.take(-0.5), -1);
        assert_eq!(wheel.take(2.25), 2);
        assert_eq!(wheel.take(f32::NAN), 0);
    }

    #[test]
    fn escape_quits_and_tab_cycles() {
        let state = GlobalState::default();
        let b = Bindings::default();
        let input = InputState::default();
        assert_eq!(only(b.intents(&press(Key::Escape, false), &input, VIEW, &state)), Intent::Quit);
        assert_eq!(
            only(b.intents(&press(Key::Tab, false), &input, VIEW, &state)),
            Intent::Apply(Command::SetMode(state.mode.next()))
        );
    }
}
