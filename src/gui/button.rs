//! Menu Button Widget
//!
//! A rectangular, labeled, clickable region rendered from the `widgets`
//! texture. Visual state (normal / hovered / pressed / disabled) picks the
//! source strip; the label is drawn centered with the bitmap font.

use super::WIDGETS_TEXTURE;
use crate::text::{draw_text_centered, text_height};
use crate::texture::{TextureRegistry, blit};
use crate::vec2d::Vec2d;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

// Source strips in the widgets texture, one 200x20 row per visual state.
const BUTTON_SRC_WIDTH: u32 = 200;
const BUTTON_SRC_HEIGHT: u32 = 20;
const BUTTON_ROW_DISABLED: i32 = 46;
const BUTTON_ROW_NORMAL: i32 = 66;
const BUTTON_ROW_HOVERED: i32 = 86;

const LABEL_SCALE: u32 = 2;

pub struct Button {
    pub label: String,
    /// Cached by the most recent layout pass; bounds tests during event
    /// handling read this, so they can be one frame stale.
    pub pos: Vec2d,
    pub width: u32,
    pub height: u32,
    pub hovered: bool,
    pub pressed: bool,
    pub disabled: bool,
}

impl Button {
    pub fn new(label: &str, pos: Vec2d, width: u32, height: u32) -> Self {
        Button {
            label: label.to_string(),
            pos,
            width,
            height,
            hovered: false,
            pressed: false,
            disabled: false,
        }
    }

    /// Creates a button that renders in the disabled style and never reacts
    /// to the pointer.
    pub fn disabled(label: &str, pos: Vec2d, width: u32, height: u32) -> Self {
        Button {
            disabled: true,
            ..Button::new(label, pos, width, height)
        }
    }

    /// True iff `point` lies within `[pos, pos + (width, height))` —
    /// left/top edges included, right/bottom excluded.
    pub fn in_bounds(&self, point: Vec2d) -> bool {
        point.x >= self.pos.x
            && point.x < self.pos.x + self.width as i32
            && point.y >= self.pos.y
            && point.y < self.pos.y + self.height as i32
    }

    /// Blits the strip for the current visual state scaled to the button
    /// rectangle, then draws the label centered. Pressed buttons reuse the
    /// hovered strip with the label nudged down a pixel.
    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        textures: &TextureRegistry,
    ) -> Result<(), String> {
        let widgets = textures.get(WIDGETS_TEXTURE)?;

        let src_y = if self.disabled {
            BUTTON_ROW_DISABLED
        } else if self.hovered || self.pressed {
            BUTTON_ROW_HOVERED
        } else {
            BUTTON_ROW_NORMAL
        };

        blit(
            canvas,
            widgets,
            Vec2d::new(0, src_y),
            self.pos,
            self.width,
            self.height,
            BUTTON_SRC_WIDTH,
            BUTTON_SRC_HEIGHT,
        )?;

        let label_color = if self.disabled {
            Color::RGB(160, 160, 160)
        } else {
            Color::RGB(255, 255, 255)
        };
        let press_offset = if self.pressed && !self.disabled { 1 } else { 0 };
        let label_y =
            self.pos.y + (self.height as i32 - text_height(LABEL_SCALE) as i32) / 2 + press_offset;

        draw_text_centered(
            canvas,
            &self.label,
            self.pos.x + self.width as i32 / 2,
            label_y,
            label_color,
            LABEL_SCALE,
        )
    }
}

/// Recomputes every enabled button's `hovered` flag from the pointer
/// position. Each flag is independently set to that button's own bounds
/// test, so moving off a button clears it on the same event.
pub fn update_hover(buttons: &mut [Button], point: Vec2d) {
    for button in buttons.iter_mut() {
        if button.disabled {
            continue;
        }
        button.hovered = button.in_bounds(point);
    }
}

/// Presses every enabled button whose bounds contain the pointer-down
/// position.
pub fn press_at(buttons: &mut [Button], point: Vec2d) {
    for button in buttons.iter_mut() {
        if button.disabled {
            continue;
        }
        if button.in_bounds(point) {
            button.pressed = true;
        }
    }
}

/// Clears `pressed` on every enabled button, wherever the pointer is.
/// A press-drag-release outside the button still clears it (cancel on
/// release, not commit on release inside).
pub fn release_all(buttons: &mut [Button]) {
    for button in buttons.iter_mut() {
        if button.disabled {
            continue;
        }
        button.pressed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button_at(x: i32, y: i32) -> Button {
        Button::new("Singleplayer", Vec2d::new(x, y), 325, 28)
    }

    #[test]
    fn test_in_bounds_includes_top_left_corner() {
        assert!(button_at(10, 10).in_bounds(Vec2d::new(10, 10)));
    }

    #[test]
    fn test_in_bounds_interior_point() {
        assert!(button_at(10, 10).in_bounds(Vec2d::new(170, 20)));
    }

    #[test]
    fn test_in_bounds_excludes_right_edge() {
        // x range is [10, 335)
        assert!(button_at(10, 10).in_bounds(Vec2d::new(334, 10)));
        assert!(!button_at(10, 10).in_bounds(Vec2d::new(335, 10)));
    }

    #[test]
    fn test_in_bounds_excludes_bottom_edge() {
        // y range is [10, 38)
        assert!(button_at(10, 10).in_bounds(Vec2d::new(10, 37)));
        assert!(!button_at(10, 10).in_bounds(Vec2d::new(10, 38)));
    }

    #[test]
    fn test_in_bounds_outside() {
        assert!(!button_at(10, 10).in_bounds(Vec2d::new(9, 10)));
        assert!(!button_at(10, 10).in_bounds(Vec2d::new(10, 9)));
        assert!(!button_at(10, 10).in_bounds(Vec2d::new(-100, -100)));
    }

    #[test]
    fn test_hover_tracks_pointer() {
        let mut buttons = vec![button_at(0, 0), button_at(0, 100)];

        update_hover(&mut buttons, Vec2d::new(5, 5));
        assert!(buttons[0].hovered);
        assert!(!buttons[1].hovered);

        // Moving to the second button clears the first on the same event
        update_hover(&mut buttons, Vec2d::new(5, 105));
        assert!(!buttons[0].hovered);
        assert!(buttons[1].hovered);
    }

    #[test]
    fn test_press_only_inside_bounds() {
        let mut buttons = vec![button_at(0, 0), button_at(0, 100)];

        press_at(&mut buttons, Vec2d::new(5, 5));
        assert!(buttons[0].pressed);
        assert!(!buttons[1].pressed);
    }

    #[test]
    fn test_release_clears_pressed_regardless_of_position() {
        let mut buttons = vec![button_at(0, 0)];
        press_at(&mut buttons, Vec2d::new(5, 5));
        assert!(buttons[0].pressed);

        // No position argument: any release cancels the press
        release_all(&mut buttons);
        assert!(!buttons[0].pressed);
    }

    #[test]
    fn test_disabled_button_never_hovers_or_presses() {
        let mut buttons = vec![Button::disabled("Multiplayer", Vec2d::new(0, 0), 325, 28)];

        update_hover(&mut buttons, Vec2d::new(5, 5));
        press_at(&mut buttons, Vec2d::new(5, 5));

        assert!(!buttons[0].hovered);
        assert!(!buttons[0].pressed);
    }
}
