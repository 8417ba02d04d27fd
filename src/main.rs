// Sketchpad window:
// • Hold Left Mouse to draw with the current tool; release to commit the stroke.
// • B brush, E eraser, R rectangle, S square, C circle.
// • Ctrl/Cmd+Z undo, Shift+Ctrl/Cmd+Z or Ctrl/Cmd+Y redo, Delete clears everything.
// • [ and ] change the stroke width, Tab cycles the palette color.
// • ESC cancels the stroke in progress, or quits when idle.

use sketchpad::app::{App, Flow};
use sketchpad::color;
use sketchpad::config::Config;
use sketchpad::draw::{compose, Drawer};
use sketchpad::keymap::command_for;
use sketchpad::surface::Canvas;
use sketchpad::types::FrameBuffer;
use sketchpad::{logging, Error};
use tracing::info;

const CURSOR_COLOR: u32 = 0x0080_8080;

fn main() -> Result<(), Error> {
    /* --- Config + logging --- */
    let path = Config::resolve_path(std::env::args().nth(1));
    let loaded = Config::load(&path)?;
    logging::init(loaded.config.debug);
    loaded.log_source();
    let config = loaded.config;

    /* --- Surface, session and window --- */
    let background = config.background_color()?;
    let canvas = Canvas::new(config.width, config.height, background);
    let mut app = App::new(canvas, &config)?;
    let mut drawer = Drawer::new("Sketchpad", config.width, config.height)?;

    // What the window shows: surface pixels plus the tool cursor.
    let mut screen = FrameBuffer::filled(config.width, config.height, color::pack(background));

    info!(width = config.width, height = config.height, "sketchpad ready");

    /* ------------------------------ Main loop ------------------------------ */
    'frames: while drawer.is_open() {
        /* 1) Shortcuts */
        let mods = drawer.modifiers();
        for key in drawer.pressed_keys() {
            let Some(command) = command_for(key, mods) else {
                continue;
            };
            if app.handle_command(command) == Flow::Quit {
                break 'frames;
            }
        }

        /* 2) Pointer: start / move / end the gesture */
        let pointer = drawer.mouse_pos();
        app.handle_pointer(pointer, drawer.left_mouse_down());

        /* 3) Present */
        let tools = app.pad.tools();
        compose(
            &mut screen,
            app.pad.surface().frame(),
            pointer,
            tools.kind,
            tools.eraser_width,
            CURSOR_COLOR,
        );
        drawer.present(&screen)?;
    }

    info!(entries = app.pad.history().len(), "sketchpad closed");
    Ok(())
}
