//! SDL2 host loop
//!
//! Same per-frame contract as the GLFW host, on SDL2's event pump:
//! poll events into an `InputState`, snapshot it, tick the game, act on
//! the returned commands, draw the returned vertex buffer, swap.

mod keymap;

use game_core::{AppConfig, CommandCode, Game, GameLogic, InputState};
use sdl2::event::Event;
use sdl2::video::{GLProfile, SwapInterval};
use std::time::Instant;
use thiserror::Error;

const CONFIG_PATH: &str = "config/app.toml";

/// Host-level errors; all of them are init-time and fatal
#[derive(Error, Debug)]
enum AppError {
    #[error("SDL initialization failed: {0}")]
    Init(String),

    #[error("Failed to create SDL window: {0}")]
    WindowCreation(#[from] sdl2::video::WindowBuildError),

    #[error("Failed to create GL context: {0}")]
    GlContext(String),
}

fn main() {
    env_logger::init();

    let config = AppConfig::load_or_default(CONFIG_PATH);
    if let Err(e) = run(&config) {
        log::error!("{e}");
        std::process::exit(-1);
    }
}

fn run(config: &AppConfig) -> Result<(), AppError> {
    let sdl = sdl2::init().map_err(AppError::Init)?;
    let video = sdl.video().map_err(AppError::Init)?;

    // OpenGL 3.3 core
    let gl_attr = video.gl_attr();
    gl_attr.set_context_profile(GLProfile::Core);
    gl_attr.set_context_version(3, 3);

    let window = video
        .window(
            &config.window.title,
            config.window.width,
            config.window.height,
        )
        .opengl()
        .position_centered()
        .build()?;

    let _gl_context = window.gl_create_context().map_err(AppError::GlContext)?;

    // Load OpenGL function pointers through SDL
    gl::load_with(|symbol| video.gl_get_proc_address(symbol).cast());

    let interval = if config.window.vsync {
        SwapInterval::VSync
    } else {
        SwapInterval::Immediate
    };
    if let Err(e) = video.gl_set_swap_interval(interval) {
        log::warn!("Failed to set swap interval: {e}");
    }

    let renderer = render_gl::TriangleRenderer::new();
    renderer.set_viewport(config.window.width, config.window.height);

    let mut event_pump = sdl.event_pump().map_err(AppError::Init)?;
    let mut game = Game::new();
    let mut input_state = InputState::new();
    let start_time = Instant::now();

    log::info!(
        "Entering render loop ({}x{})",
        config.window.width,
        config.window.height
    );
    let mut running = true;
    while running {
        // Fill input data
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => running = false,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => input_state.press(keymap::map_key(key)),
                Event::KeyUp {
                    keycode: Some(key), ..
                } => input_state.release(keymap::map_key(key)),
                Event::MouseMotion { x, y, .. } => {
                    input_state.set_cursor(x as f32, y as f32);
                }
                Event::MouseButtonDown { mouse_btn, .. } => {
                    input_state.press(keymap::map_mouse_button(mouse_btn));
                }
                Event::MouseButtonUp { mouse_btn, .. } => {
                    input_state.release(keymap::map_mouse_button(mouse_btn));
                }
                _ => {}
            }
        }
        let input = input_state.snapshot(start_time.elapsed().as_secs_f32());

        // Tick game
        let output = game.tick(&input);

        // Handle commands; repeated CloseGame commands are harmless
        for command in &output.commands {
            if *command == CommandCode::CloseGame {
                running = false;
            }
        }

        // Draw triangle
        renderer.draw(&output);
        window.gl_swap_window();
    }

    log::info!("Window closed, shutting down");
    Ok(())
}
