//! GLFW host loop
//!
//! Owns the window, the OpenGL context, and the per-frame cadence:
//! poll events into an `InputState`, snapshot it, tick the game, act on
//! the returned commands, draw the returned vertex buffer, swap.

mod keymap;

use game_core::{AppConfig, CommandCode, Game, GameLogic, InputState};
use glfw::{Action, Context, WindowEvent};
use std::time::Instant;
use thiserror::Error;

const CONFIG_PATH: &str = "config/app.toml";

/// Host-level errors; all of them are init-time and fatal
#[derive(Error, Debug)]
enum AppError {
    #[error("GLFW initialization failed: {0}")]
    Init(#[from] glfw::InitError),

    #[error("Failed to create GLFW window")]
    WindowCreation,
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
    let mut glfw = glfw::init(glfw::fail_on_errors)?;

    // OpenGL 3.3 core, fixed-size window
    glfw.window_hint(glfw::WindowHint::ContextVersion(3, 3));
    glfw.window_hint(glfw::WindowHint::OpenGlProfile(
        glfw::OpenGlProfileHint::Core,
    ));
    glfw.window_hint(glfw::WindowHint::Resizable(false));

    let (mut window, events) = glfw
        .create_window(
            config.window.width,
            config.window.height,
            &config.window.title,
            glfw::WindowMode::Windowed,
        )
        .ok_or(AppError::WindowCreation)?;

    window.make_current();
    window.set_key_polling(true);
    window.set_cursor_pos_polling(true);
    window.set_mouse_button_polling(true);
    glfw.set_swap_interval(if config.window.vsync {
        glfw::SwapInterval::Sync(1)
    } else {
        glfw::SwapInterval::None
    });

    // Load OpenGL function pointers through GLFW
    gl::load_with(|symbol| window.get_proc_address(symbol) as *const _);

    let renderer = render_gl::TriangleRenderer::new();
    renderer.set_viewport(config.window.width, config.window.height);

    let mut game = Game::new();
    let mut input_state = InputState::new();
    let start_time = Instant::now();

    log::info!(
        "Entering render loop ({}x{})",
        config.window.width,
        config.window.height
    );
    while !window.should_close() {
        // Fill input data
        glfw.poll_events();
        for (_, event) in glfw::flush_messages(&events) {
            handle_window_event(&mut input_state, &event);
        }
        let input = input_state.snapshot(start_time.elapsed().as_secs_f32());

        // Tick game
        let output = game.tick(&input);

        // Handle commands; repeated CloseGame commands are harmless
        for command in &output.commands {
            if *command == CommandCode::CloseGame {
                window.set_should_close(true);
            }
        }

        // Draw triangle
        renderer.draw(&output);
        window.swap_buffers();
    }

    log::info!("Window closed, shutting down");
    Ok(())
}

fn handle_window_event(input_state: &mut InputState, event: &WindowEvent) {
    match event {
        WindowEvent::Key(key, _, action, _) => {
            let code = keymap::map_key(*key);
            match action {
                Action::Press => input_state.press(code),
                Action::Release => input_state.release(code),
                Action::Repeat => {}
            }
        }
        WindowEvent::CursorPos(x, y) => {
            input_state.set_cursor(*x as f32, *y as f32);
        }
        WindowEvent::MouseButton(button, action, _) => {
            let code = keymap::map_mouse_button(*button);
            match action {
                Action::Press => input_state.press(code),
                Action::Release => input_state.release(code),
                Action::Repeat => {}
            }
        }
        _ => {}
    }
}
