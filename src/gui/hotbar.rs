//! Hotbar Widget
//!
//! The 9-slot hotbar strip at the bottom of the screen: a background blit
//! from the `widgets` texture plus a selector overlay positioned by the
//! selected slot index. Placement is pure arithmetic over the logical
//! canvas size, kept in free functions so it can be tested without SDL.

use super::WIDGETS_TEXTURE;
use crate::state::HOTBAR_SLOTS;
use crate::texture::{TextureRegistry, blit};
use crate::vec2d::Vec2d;
use sdl2::render::Canvas;
use sdl2::video::Window;

pub const HOTBAR_WIDTH: u32 = 182;
pub const HOTBAR_HEIGHT: u32 = 22;
// Selector frame overhangs its 20px slot by 2px, drawn 1px outset.
const SELECTOR_SIZE: u32 = 24;
const SELECTOR_SRC_Y: i32 = 22;
const SLOT_WIDTH: i32 = (HOTBAR_WIDTH / HOTBAR_SLOTS as u32) as i32;

/// Top-left of the hotbar background: centered horizontally, flush with the
/// bottom edge of the logical canvas.
pub fn hotbar_origin(canvas_width: u32, canvas_height: u32) -> Vec2d {
    Vec2d::new(
        (canvas_width as i32 - HOTBAR_WIDTH as i32) / 2,
        canvas_height as i32 - HOTBAR_HEIGHT as i32,
    )
}

/// Selector x-position for a slot: the hotbar splits into nine equal
/// divisions and the selector frames the chosen one.
pub fn selector_x(canvas_width: u32, slot: usize) -> i32 {
    hotbar_origin(canvas_width, 0).x + slot as i32 * SLOT_WIDTH - 1
}

pub fn render_hotbar(
    canvas: &mut Canvas<Window>,
    textures: &TextureRegistry,
    selected_slot: usize,
) -> Result<(), String> {
    let widgets = textures.get(WIDGETS_TEXTURE)?;
    let (canvas_width, canvas_height) = canvas.logical_size();

    let origin = hotbar_origin(canvas_width, canvas_height);
    blit(
        canvas,
        widgets,
        Vec2d::new(0, 0),
        origin,
        HOTBAR_WIDTH,
        HOTBAR_HEIGHT,
        HOTBAR_WIDTH,
        HOTBAR_HEIGHT,
    )?;

    let selector_pos = Vec2d::new(
        selector_x(canvas_width, selected_slot),
        canvas_height as i32 - SELECTOR_SIZE as i32 + 1,
    );
    blit(
        canvas,
        widgets,
        Vec2d::new(0, SELECTOR_SRC_Y),
        selector_pos,
        SELECTOR_SIZE,
        SELECTOR_SIZE,
        SELECTOR_SIZE,
        SELECTOR_SIZE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hotbar_centered_and_bottom_aligned() {
        let origin = hotbar_origin(640, 360);
        assert_eq!(origin.x, (640 - 182) / 2);
        assert_eq!(origin.y, 360 - 22);
    }

    #[test]
    fn test_selector_first_slot_frames_left_division() {
        let hotbar_x = hotbar_origin(640, 360).x;
        assert_eq!(selector_x(640, 0), hotbar_x - 1);
    }

    #[test]
    fn test_selector_last_slot_frames_ninth_division() {
        let hotbar_x = hotbar_origin(640, 360).x;
        assert_eq!(selector_x(640, 8), hotbar_x + 8 * 20 - 1);
    }

    #[test]
    fn test_selector_divisions_are_equal() {
        for slot in 1..HOTBAR_SLOTS {
            assert_eq!(selector_x(640, slot) - selector_x(640, slot - 1), 20);
        }
    }

    #[test]
    fn test_selector_is_deterministic_in_canvas_width() {
        // Same slot, wider canvas: shifts by half the width difference
        assert_eq!(selector_x(840, 4) - selector_x(640, 4), 100);
    }
}
