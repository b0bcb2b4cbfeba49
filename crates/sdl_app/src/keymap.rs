//! SDL2-to-logical key translation
//!
//! Same role as the GLFW host's keymap: backend key codes never reach
//! the game logic directly.

use game_core::KeyCode;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;

/// Map an SDL key to the game's logical key code
pub fn map_key(key: Keycode) -> KeyCode {
    match key {
        Keycode::Escape => KeyCode::Escape,
        Keycode::F1 => KeyCode::F1,
        Keycode::F2 => KeyCode::F2,
        Keycode::F3 => KeyCode::F3,
        Keycode::W => KeyCode::W,
        Keycode::A => KeyCode::A,
        Keycode::S => KeyCode::S,
        Keycode::D => KeyCode::D,
        Keycode::Space => KeyCode::Space,
        _ => KeyCode::Unknown,
    }
}

/// Map an SDL mouse button to the game's logical key code
pub fn map_mouse_button(button: MouseButton) -> KeyCode {
    match button {
        MouseButton::Left => KeyCode::MouseLeft,
        MouseButton::Right => KeyCode::MouseRight,
        _ => KeyCode::Unknown,
    }
}
