//! Input data model: logical key codes and per-frame input snapshots

/// Logical input keys, independent of any windowing backend
///
/// Hosts translate their library's key codes into these before the game
/// logic ever sees them. The enum is closed: `COUNT` and the `usize`
/// representation let it index the fixed-size pressed-key array directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum KeyCode {
    /// Any key the host could not map
    Unknown = 0,
    /// Escape key
    Escape,
    /// F1 key
    F1,
    /// F2 key
    F2,
    /// F3 key
    F3,
    /// W key
    W,
    /// A key
    A,
    /// S key
    S,
    /// D key
    D,
    /// Space key
    Space,
    /// Left mouse button
    MouseLeft,
    /// Right mouse button
    MouseRight,
}

impl KeyCode {
    /// Every key code, in discriminant order
    pub const ALL: [KeyCode; 12] = [
        KeyCode::Unknown,
        KeyCode::Escape,
        KeyCode::F1,
        KeyCode::F2,
        KeyCode::F3,
        KeyCode::W,
        KeyCode::A,
        KeyCode::S,
        KeyCode::D,
        KeyCode::Space,
        KeyCode::MouseLeft,
        KeyCode::MouseRight,
    ];

    /// Number of key codes; the length of every pressed-key array
    pub const COUNT: usize = Self::ALL.len();

    /// Index of this key into a pressed-key array
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Per-frame input snapshot handed to the game logic
///
/// Built by the host once per frame, read-only during the tick. Process
/// time is supplied by the host and must be monotonically non-decreasing
/// across calls.
#[derive(Debug, Clone, PartialEq)]
pub struct InputData {
    /// Seconds elapsed since the host process started its clock
    pub process_time_in_sec: f32,
    /// Cursor X position in window coordinates
    pub cursor_x: f32,
    /// Cursor Y position in window coordinates
    pub cursor_y: f32,
    /// Pressed state for every [`KeyCode`], indexed by `KeyCode::index`
    pub pressed_keys: [bool; KeyCode::COUNT],
}

impl InputData {
    /// Create an input snapshot with no keys pressed and the cursor at the origin
    #[must_use]
    pub const fn new(process_time_in_sec: f32) -> Self {
        Self {
            process_time_in_sec,
            cursor_x: 0.0,
            cursor_y: 0.0,
            pressed_keys: [false; KeyCode::COUNT],
        }
    }

    /// Whether the given key is pressed in this snapshot
    #[must_use]
    pub const fn is_pressed(&self, key: KeyCode) -> bool {
        self.pressed_keys[key.index()]
    }
}

/// Accumulated input state owned by the host loop
///
/// Replaces the process-global key array a callback-driven backend would
/// otherwise need: the host feeds press/release events in as they arrive
/// and snapshots the state into an [`InputData`] once per frame.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pressed: [bool; KeyCode::COUNT],
    cursor_x: f32,
    cursor_y: f32,
}

impl InputState {
    /// Create an input state with no keys pressed
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press
    pub fn press(&mut self, key: KeyCode) {
        self.pressed[key.index()] = true;
    }

    /// Record a key release
    pub fn release(&mut self, key: KeyCode) {
        self.pressed[key.index()] = false;
    }

    /// Record the latest cursor position
    pub fn set_cursor(&mut self, x: f32, y: f32) {
        self.cursor_x = x;
        self.cursor_y = y;
    }

    /// Whether the given key is currently held
    #[must_use]
    pub const fn is_pressed(&self, key: KeyCode) -> bool {
        self.pressed[key.index()]
    }

    /// Snapshot the current state into the per-frame input value
    #[must_use]
    pub fn snapshot(&self, process_time_in_sec: f32) -> InputData {
        InputData {
            process_time_in_sec,
            cursor_x: self.cursor_x,
            cursor_y: self.cursor_y,
            pressed_keys: self.pressed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_indices_are_dense_and_unique() {
        for (expected, key) in KeyCode::ALL.iter().enumerate() {
            assert_eq!(key.index(), expected);
        }
        assert_eq!(KeyCode::COUNT, KeyCode::ALL.len());
    }

    #[test]
    fn test_press_release_round_trip() {
        let mut state = InputState::new();
        assert!(!state.is_pressed(KeyCode::Escape));

        state.press(KeyCode::Escape);
        assert!(state.is_pressed(KeyCode::Escape));

        state.release(KeyCode::Escape);
        assert!(!state.is_pressed(KeyCode::Escape));
    }

    #[test]
    fn test_snapshot_captures_state() {
        let mut state = InputState::new();
        state.press(KeyCode::W);
        state.press(KeyCode::MouseLeft);
        state.set_cursor(320.0, 240.0);

        let input = state.snapshot(2.5);
        assert_eq!(input.process_time_in_sec, 2.5);
        assert_eq!(input.cursor_x, 320.0);
        assert_eq!(input.cursor_y, 240.0);
        assert!(input.is_pressed(KeyCode::W));
        assert!(input.is_pressed(KeyCode::MouseLeft));
        assert!(!input.is_pressed(KeyCode::Escape));
    }

    #[test]
    fn test_snapshot_is_independent_of_later_events() {
        let mut state = InputState::new();
        state.press(KeyCode::Space);
        let input = state.snapshot(1.0);

        state.release(KeyCode::Space);
        assert!(input.is_pressed(KeyCode::Space));
        assert!(!state.is_pressed(KeyCode::Space));
    }

    #[test]
    fn test_fresh_input_has_no_keys_pressed() {
        let input = InputData::new(0.0);
        for key in KeyCode::ALL {
            assert!(!input.is_pressed(key));
        }
    }
}
