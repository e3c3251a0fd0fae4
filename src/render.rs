//! Frame Composition
//!
//! Produces one fully-redrawn frame per pass: clear the canvas, draw the
//! hotbar from the selected slot, lay out and draw each menu button. No
//! dirty-region tracking; the frame is cheap enough to redraw whole.

use crate::gui::button::Button;
use crate::gui::hotbar::render_hotbar;
use crate::state::MenuState;
use crate::texture::TextureRegistry;
use crate::vec2d::Vec2d;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Position of the `index`-th button in the vertical stack: horizontally
/// centered, the stack starting one button-height above the canvas center,
/// rows spaced at 1.25x the button height.
pub fn button_position(
    canvas_width: u32,
    canvas_height: u32,
    index: usize,
    width: u32,
    height: u32,
) -> Vec2d {
    let x = (canvas_width as i32 - width as i32) / 2;
    let stack_top = (canvas_height as i32 - height as i32) / 2 - height as i32;
    let y = stack_top + index as i32 * (height as i32 * 5 / 4);
    Vec2d::new(x, y)
}

/// Draws one complete frame. Draw order is fixed: background, hotbar, then
/// buttons in list order.
pub fn render_frame(
    canvas: &mut Canvas<Window>,
    textures: &TextureRegistry,
    state: &MenuState,
    buttons: &mut [Button],
) -> Result<(), String> {
    canvas.set_draw_color(Color::RGB(0, 0, 255));
    canvas.clear();

    render_hotbar(canvas, textures, state.selected_slot())?;

    let (canvas_width, canvas_height) = canvas.logical_size();
    for (index, button) in buttons.iter_mut().enumerate() {
        button.pos = button_position(canvas_width, canvas_height, index, button.width, button.height);
        button.render(canvas, textures)?;
    }

    Ok(())
}
