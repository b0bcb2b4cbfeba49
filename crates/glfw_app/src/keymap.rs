//! GLFW-to-logical key translation
//!
//! Key codes in the windowing library do not coincide with the game's
//! logical codes, so every event goes through this map before reaching
//! the input state.

use game_core::KeyCode;

/// Map a GLFW key to the game's logical key code
pub fn map_key(key: glfw::Key) -> KeyCode {
    match key {
        glfw::Key::Escape => KeyCode::Escape,
        glfw::Key::F1 => KeyCode::F1,
        glfw::Key::F2 => KeyCode::F2,
        glfw::Key::F3 => KeyCode::F3,
        glfw::Key::W => KeyCode::W,
        glfw::Key::A => KeyCode::A,
        glfw::Key::S => KeyCode::S,
        glfw::Key::D => KeyCode::D,
        glfw::Key::Space => KeyCode::Space,
        _ => KeyCode::Unknown,
    }
}

/// Map a GLFW mouse button to the game's logical key code
pub fn map_mouse_button(button: glfw::MouseButton) -> KeyCode {
    match button {
        // Button1/Button2 are GLFW's left/right buttons
        glfw::MouseButton::Button1 => KeyCode::MouseLeft,
        glfw::MouseButton::Button2 => KeyCode::MouseRight,
        _ => KeyCode::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_maps_to_escape() {
        assert_eq!(map_key(glfw::Key::Escape), KeyCode::Escape);
    }

    #[test]
    fn test_movement_keys_map() {
        assert_eq!(map_key(glfw::Key::W), KeyCode::W);
        assert_eq!(map_key(glfw::Key::A), KeyCode::A);
        assert_eq!(map_key(glfw::Key::S), KeyCode::S);
        assert_eq!(map_key(glfw::Key::D), KeyCode::D);
        assert_eq!(map_key(glfw::Key::Space), KeyCode::Space);
    }

    #[test]
    fn test_unmapped_keys_become_unknown() {
        assert_eq!(map_key(glfw::Key::Q), KeyCode::Unknown);
        assert_eq!(map_key(glfw::Key::Enter), KeyCode::Unknown);
        assert_eq!(map_mouse_button(glfw::MouseButton::Button5), KeyCode::Unknown);
    }

    #[test]
    fn test_mouse_buttons_map() {
        assert_eq!(map_mouse_button(glfw::MouseButton::Button1), KeyCode::MouseLeft);
        assert_eq!(map_mouse_button(glfw::MouseButton::Button2), KeyCode::MouseRight);
    }
}
