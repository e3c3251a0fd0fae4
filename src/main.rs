mod game_window;
mod gui;
mod input_system;
mod render;
mod state;
mod text;
mod texture;
mod vec2d;

use game_window::GameWindow;
use gui::button::{Button, press_at, release_all, update_hover};
use input_system::{MenuAction, poll_events};
use render::render_frame;
use state::MenuState;
use texture::{TextureManifest, TextureRegistry};
use vec2d::Vec2d;

const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const BUTTON_WIDTH: u32 = 325;
const BUTTON_HEIGHT: u32 = 28;
const TEXTURE_MANIFEST_PATH: &str = "assets/config/textures.json";

/// Picks the GUI scale from the desktop display mode so the menu renders at
/// a comfortable size on both laptop panels and 4K monitors.
fn calculate_gui_scale(video_subsystem: &sdl2::VideoSubsystem) -> u32 {
    match video_subsystem.desktop_display_mode(0) {
        Ok(display_mode) => (display_mode.h / 540).clamp(1, 4) as u32,
        Err(_) => {
            println!("Warning: Could not detect monitor size, using 2x scale");
            2
        }
    }
}

fn main() -> Result<(), String> {
    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    // Nearest-neighbor scaling keeps the widget pixel art crisp
    sdl2::hint::set("SDL_RENDER_SCALE_QUALITY", "0");

    let gui_scale = calculate_gui_scale(&video_subsystem);
    println!("GUI scale: {}x", gui_scale);

    let window = video_subsystem
        .window("Main Menu", DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT)
        .position_centered()
        .resizable()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

    let mut state = MenuState::new(GameWindow::new(
        DEFAULT_WINDOW_WIDTH,
        DEFAULT_WINDOW_HEIGHT,
        gui_scale,
    ));
    canvas
        .set_logical_size(state.window.scaled_width(), state.window.scaled_height())
        .map_err(|e| e.to_string())?;

    let texture_creator = canvas.texture_creator();
    let mut event_pump = sdl_context.event_pump()?;

    // Startup load is fatal on failure: no frame renders with missing textures
    let manifest = TextureManifest::load_from_file(TEXTURE_MANIFEST_PATH)?;
    let mut textures = TextureRegistry::new(&texture_creator);
    textures.load(&manifest)?;
    println!("Loaded {} textures", textures.len());

    let mut buttons = vec![
        Button::new("Singleplayer", Vec2d::new(0, 0), BUTTON_WIDTH, BUTTON_HEIGHT),
        // No multiplayer backend yet
        Button::disabled("Multiplayer", Vec2d::new(0, 0), BUTTON_WIDTH, BUTTON_HEIGHT),
        Button::new("Quit", Vec2d::new(0, 0), BUTTON_WIDTH, BUTTON_HEIGHT),
    ];

    println!("Controls:");
    println!("1-9 - Select hotbar slot");
    println!("Scrollwheel - Cycle hotbar slot");
    println!("I - Invert scrollwheel");
    println!("R - Reload textures");
    println!("ESC - Quit");

    'running: loop {
        for action in poll_events(&mut event_pump) {
            match action {
                MenuAction::Quit => break 'running,
                MenuAction::SelectSlot(slot) => state.select_slot(slot),
                MenuAction::ScrollSlot { up } => state.scroll_slot(up),
                MenuAction::MouseMove(x, y) => update_hover(&mut buttons, Vec2d::new(x, y)),
                MenuAction::MouseDown(x, y) => press_at(&mut buttons, Vec2d::new(x, y)),
                MenuAction::MouseUp => release_all(&mut buttons),
                MenuAction::ToggleInvertScroll => {
                    state.toggle_inverted_scrollwheel();
                    println!(
                        "Scrollwheel inversion: {}",
                        if state.inverted_scrollwheel() { "ON" } else { "OFF" }
                    );
                }
                MenuAction::ReloadTextures => {
                    let result = TextureManifest::load_from_file(TEXTURE_MANIFEST_PATH)
                        .and_then(|manifest| textures.load(&manifest));
                    match result {
                        Ok(()) => println!("Textures reloaded"),
                        // Keep drawing with the previous set
                        Err(e) => eprintln!("Failed to reload textures: {}", e),
                    }
                }
                MenuAction::Resize(width, height) => {
                    state.set_window(GameWindow::new(width, height, state.window.scale()));
                    canvas
                        .set_logical_size(state.window.scaled_width(), state.window.scaled_height())
                        .map_err(|e| e.to_string())?;
                }
            }
        }

        render_frame(&mut canvas, &textures, &state, &mut buttons)?;
        canvas.present();

        // Cap framerate to ~60 FPS
        std::thread::sleep(std::time::Duration::new(0, 1_000_000_000u32 / 60));
    }

    Ok(())
}
