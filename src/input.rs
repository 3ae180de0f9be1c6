use std::collections::HashSet;

use glam::Vec2;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::camera::Direction;

/// Scroll amount per wheel notch when the platform reports pixels
const PIXELS_PER_LINE: f32 = 40.0;

/// Model axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    pub const fn factor(self) -> f32 {
        match self {
            Sign::Positive => 1.0,
            Sign::Negative => -1.0,
        }
    }
}

/// Everything a held key can ask the scene to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    /// Spin the model about an axis
    Rotate(Axis),
    /// Slide the model along an axis
    Translate(Axis, Sign),
    /// Fly the camera
    Fly(Direction),
}

/// Key table:
///
/// | keys    | action                    |
/// |---------|---------------------------|
/// | Escape  | quit                      |
/// | 1 2 3   | rotate model about X Y Z  |
/// | D / A   | model +X / -X             |
/// | W / S   | model +Y / -Y             |
/// | Q / E   | model +Z / -Z             |
/// | M / N   | camera forward / backward |
/// | B / V   | camera left / right       |
/// | C / X   | camera up / down          |
pub fn action_for_key(keycode: KeyCode) -> Option<Action> {
    let action = match keycode {
        KeyCode::Escape => Action::Quit,
        KeyCode::Digit1 => Action::Rotate(Axis::X),
        KeyCode::Digit2 => Action::Rotate(Axis::Y),
        KeyCode::Digit3 => Action::Rotate(Axis::Z),
        KeyCode::KeyD => Action::Translate(Axis::X, Sign::Positive),
        KeyCode::KeyA => Action::Translate(Axis::X, Sign::Negative),
        KeyCode::KeyW => Action::Translate(Axis::Y, Sign::Positive),
        KeyCode::KeyS => Action::Translate(Axis::Y, Sign::Negative),
        KeyCode::KeyQ => Action::Translate(Axis::Z, Sign::Positive),
        KeyCode::KeyE => Action::Translate(Axis::Z, Sign::Negative),
        KeyCode::KeyM => Action::Fly(Direction::Forward),
        KeyCode::KeyN => Action::Fly(Direction::Backward),
        KeyCode::KeyB => Action::Fly(Direction::Left),
        KeyCode::KeyV => Action::Fly(Direction::Right),
        KeyCode::KeyC => Action::Fly(Direction::Up),
        KeyCode::KeyX => Action::Fly(Direction::Down),
        _ => return None,
    };
    Some(action)
}

/// Per-frame input handed to the scene
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Held actions in press order
    pub held: Vec<Action>,
    /// Pointer movement with +y meaning "look up"
    pub look: Vec2,
    /// Wheel lines, positive away from the user
    pub scroll: f32,
}

impl FrameInput {
    pub fn is_held(&self, action: Action) -> bool {
        self.held.contains(&action)
    }

    pub fn wants_quit(&self) -> bool {
        self.is_held(Action::Quit)
    }
}

/// Accumulates winit window events into a `FrameInput`.
///
/// Pointer deltas are only collected while the left mouse button is held.
/// The first cursor sample after a press only records the position, so
/// grabbing the view never jumps.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pressed: HashSet<Action>,
    pressed_order: Vec<Action>,
    dragging: bool,
    last_cursor: Option<Vec2>,
    look_delta: Vec2,
    scroll_delta: f32,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one window event into the current state
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if let Some(action) = action_for_key(keycode) {
                        self.set_action(action, event.state == ElementState::Pressed);
                    }
                }
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => self.set_dragging(*state == ElementState::Pressed),
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(Vec2::new(position.x as f32, position.y as f32));
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_LINE,
                };
                self.scroll(lines);
            }
            WindowEvent::Focused(false) => self.release_all(),
            _ => {}
        }
    }

    /// Mark an action held or released
    pub fn set_action(&mut self, action: Action, pressed: bool) {
        if pressed {
            if self.pressed.insert(action) {
                self.pressed_order.push(action);
            }
        } else if self.pressed.remove(&action) {
            self.pressed_order.retain(|&a| a != action);
        }
    }

    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
        self.last_cursor = None;
    }

    /// Record a cursor position in window coordinates (y grows downwards)
    pub fn cursor_moved(&mut self, position: Vec2) {
        if !self.dragging {
            return;
        }
        if let Some(last) = self.last_cursor {
            let delta = position - last;
            self.look_delta += Vec2::new(delta.x, -delta.y);
        }
        self.last_cursor = Some(position);
    }

    pub fn scroll(&mut self, lines: f32) {
        self.scroll_delta += lines;
    }

    /// Drop every held action, used when the window loses focus
    pub fn release_all(&mut self) {
        self.pressed.clear();
        self.pressed_order.clear();
        self.set_dragging(false);
    }

    pub fn is_down(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    pub fn snapshot(&self) -> FrameInput {
        FrameInput {
            held: self.pressed_order.clone(),
            look: self.look_delta,
            scroll: self.scroll_delta,
        }
    }

    /// Clear per-frame deltas; call once the snapshot has been applied
    pub fn reset_deltas(&mut self) {
        self.look_delta = Vec2::ZERO;
        self.scroll_delta = 0.0;
    }
}
