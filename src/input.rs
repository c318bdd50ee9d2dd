//! Input handling for the field and the page behaviors.
//!
//! Hosts feed [`InputEvent`]s into an [`Animation`](crate::Animation) and the
//! [`ui`](crate::ui) state machines. For native windows,
//! [`InputTranslator`] turns raw winit events into `InputEvent`s:
//!
//! ```ignore
//! if let Some(event) = translator.translate(&window_event) {
//!     animation.handle_event(&event);
//! }
//! ```

use crate::surface::Viewport;
use glam::Vec2;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};

/// Keys the behaviors react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Escape,
    Space,
    Enter,
    Tab,
    /// Any other physical key.
    Other(WinitKeyCode),
}

impl From<WinitKeyCode> for KeyCode {
    fn from(key: WinitKeyCode) -> Self {
        match key {
            WinitKeyCode::Escape => KeyCode::Escape,
            WinitKeyCode::Space => KeyCode::Space,
            WinitKeyCode::Enter | WinitKeyCode::NumpadEnter => KeyCode::Enter,
            WinitKeyCode::Tab => KeyCode::Tab,
            other => KeyCode::Other(other),
        }
    }
}

/// Host-agnostic input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to a position in surface units.
    PointerMoved(Vec2),
    /// Cursor left the tracked surface.
    PointerLeft,
    /// The surface changed size.
    Resized(Viewport),
    /// A key went down.
    KeyPressed(KeyCode),
    /// Primary button pressed at a position.
    Clicked(Vec2),
}

/// Last known cursor position, or absent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pointer {
    position: Option<Vec2>,
}

impl Pointer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(position: Vec2) -> Self {
        Self {
            position: Some(position),
        }
    }

    pub fn move_to(&mut self, position: Vec2) {
        self.position = Some(position);
    }

    pub fn leave(&mut self) {
        self.position = None;
    }

    pub fn position(&self) -> Option<Vec2> {
        self.position
    }
}

/// Converts winit window events into [`InputEvent`]s.
///
/// Clicks in winit carry no position, so the last cursor position is kept
/// here and attached to the click.
#[derive(Debug, Default)]
pub struct InputTranslator {
    cursor: Pointer,
}

impl InputTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate one window event. Events nobody consumes yield `None`.
    pub fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                let position = Vec2::new(position.x as f32, position.y as f32);
                self.cursor.move_to(position);
                Some(InputEvent::PointerMoved(position))
            }

            WindowEvent::CursorLeft { .. } => {
                self.cursor.leave();
                Some(InputEvent::PointerLeft)
            }

            WindowEvent::Resized(size) => Some(InputEvent::Resized(Viewport::from(*size))),

            WindowEvent::KeyboardInput { event, .. } => {
                // Only fire on the initial press, not on release or key repeat
                if event.state != ElementState::Pressed || event.repeat {
                    return None;
                }
                match event.physical_key {
                    PhysicalKey::Code(code) => Some(InputEvent::KeyPressed(KeyCode::from(code))),
                    PhysicalKey::Unidentified(_) => None,
                }
            }

            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => self.cursor.position().map(InputEvent::Clicked),

            _ => None,
        }
    }
}
