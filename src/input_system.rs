//! Input System
//!
//! Translates raw SDL2 events into high-level `MenuAction` commands,
//! decoupling event handling from state mutation. The main loop drains all
//! pending events before each frame, so actions never interleave with a
//! frame body.

use sdl2::EventPump;
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;

/// Actions the menu reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Digit key selected a hotbar slot directly (0-8).
    SelectSlot(usize),
    /// Scrollwheel tick; `up` is the raw wheel direction, inversion is
    /// applied against the state flag when the action is handled.
    ScrollSlot { up: bool },
    MouseMove(i32, i32),
    /// Left button went down at a position (logical coordinates).
    MouseDown(i32, i32),
    /// Left button released, wherever the pointer is.
    MouseUp,
    ToggleInvertScroll,
    ReloadTextures,
    /// Window resized to new raw pixel dimensions.
    Resize(u32, u32),
    Quit,
}

/// Drains the event pump and returns the actions to apply this frame.
pub fn poll_events(event_pump: &mut EventPump) -> Vec<MenuAction> {
    let mut actions = Vec::new();

    for event in event_pump.poll_iter() {
        match event {
            Event::Quit { .. } => {
                actions.push(MenuAction::Quit);
            }
            // Key repeats are ignored, matching the repeat guard on keydown
            Event::KeyDown {
                keycode: Some(key),
                repeat: false,
                ..
            } => {
                if let Some(action) = translate_keycode(key) {
                    actions.push(action);
                }
            }
            Event::MouseWheel { y, .. } => {
                if let Some(action) = translate_wheel(y) {
                    actions.push(action);
                }
            }
            Event::MouseButtonDown {
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } => {
                actions.push(MenuAction::MouseDown(x, y));
            }
            Event::MouseButtonUp {
                mouse_btn: MouseButton::Left,
                ..
            } => {
                actions.push(MenuAction::MouseUp);
            }
            Event::MouseMotion { x, y, .. } => {
                actions.push(MenuAction::MouseMove(x, y));
            }
            Event::Window {
                win_event: WindowEvent::Resized(width, height),
                ..
            } => {
                actions.push(MenuAction::Resize(width.max(1) as u32, height.max(1) as u32));
            }
            _ => {
                // Other event types are ignored
            }
        }
    }

    actions
}

/// Maps a key press to an action. Digits 1-9 select slots 0-8; everything
/// outside the bindings returns `None` and leaves the state untouched.
fn translate_keycode(key: Keycode) -> Option<MenuAction> {
    match key {
        Keycode::Num1 => Some(MenuAction::SelectSlot(0)),
        Keycode::Num2 => Some(MenuAction::SelectSlot(1)),
        Keycode::Num3 => Some(MenuAction::SelectSlot(2)),
        Keycode::Num4 => Some(MenuAction::SelectSlot(3)),
        Keycode::Num5 => Some(MenuAction::SelectSlot(4)),
        Keycode::Num6 => Some(MenuAction::SelectSlot(5)),
        Keycode::Num7 => Some(MenuAction::SelectSlot(6)),
        Keycode::Num8 => Some(MenuAction::SelectSlot(7)),
        Keycode::Num9 => Some(MenuAction::SelectSlot(8)),
        Keycode::I => Some(MenuAction::ToggleInvertScroll),
        Keycode::R => Some(MenuAction::ReloadTextures),
        Keycode::Escape => Some(MenuAction::Quit),
        _ => None,
    }
}

/// Wheel y > 0 scrolls up, y < 0 scrolls down; a zero-delta tick is ignored.
fn translate_wheel(y: i32) -> Option<MenuAction> {
    if y > 0 {
        Some(MenuAction::ScrollSlot { up: true })
    } else if y < 0 {
        Some(MenuAction::ScrollSlot { up: false })
    } else {
        None
    }
}
