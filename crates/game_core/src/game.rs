//! The game logic itself: a single triangle whose red channel tracks time

use crate::input::{InputData, KeyCode};
use crate::output::{CommandCode, OutputData, FLOATS_PER_VERTEX};

/// Per-frame game update contract
///
/// The seam the hosts program against: any type offering
/// `tick(input) -> output` can sit behind a render loop. There is exactly
/// one implementer today ([`Game`]); the trait keeps the hosts independent
/// of it.
pub trait GameLogic {
    /// Advance the game by one frame
    ///
    /// Must be deterministic: identical input (including identical
    /// process time) produces bit-identical output. `input.pressed_keys`
    /// is read-only during the call; the host may reuse its backing
    /// state between frames.
    fn tick(&mut self, input: &InputData) -> OutputData;
}

/// The demo game: a fixed triangle with a time-animated red channel
#[derive(Debug, Default)]
pub struct Game {}

impl Game {
    /// Create the game
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl GameLogic for Game {
    fn tick(&mut self, input: &InputData) -> OutputData {
        let mut output = OutputData::new();

        // Keys handling. CloseGame is appended every frame escape is held;
        // hosts treat repeats idempotently.
        if input.is_pressed(KeyCode::Escape) {
            output.commands.push(CommandCode::CloseGame);
        }

        let red = input.process_time_in_sec.sin();
        #[rustfmt::skip]
        let triangle_vertices: [f32; 18] = [
            -0.5, -0.5, -0.5,  red, 0.0, 0.0,
             0.5, -0.5, -0.5,  0.0, 1.0, 0.0,
             0.0,  0.5, -0.5,  0.0, 0.0, 1.0,
        ];
        output.vertex_buffer.extend_from_slice(&triangle_vertices);
        output.vertices_count = triangle_vertices.len() / FLOATS_PER_VERTEX;

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputState;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-6;

    fn tick_at(time: f32, held: &[KeyCode]) -> OutputData {
        let mut state = InputState::new();
        for &key in held {
            state.press(key);
        }
        Game::new().tick(&state.snapshot(time))
    }

    #[test]
    fn test_triangle_shape_is_fixed() {
        for time in [0.0, 0.25, 1.0, 100.0] {
            let output = tick_at(time, &[]);
            assert_eq!(output.vertices_count, 3);
            assert_eq!(output.vertex_buffer.len(), 18);
            assert_eq!(
                output.vertex_buffer.len(),
                output.vertices_count * FLOATS_PER_VERTEX
            );
        }
    }

    #[test]
    fn test_red_channel_tracks_sine_of_time() {
        for time in [0.0, 0.5, 1.5708, 3.1416, 10.0] {
            let output = tick_at(time, &[]);
            assert_relative_eq!(output.vertex_buffer[3], time.sin(), epsilon = EPSILON);
        }
    }

    #[test]
    fn test_tick_at_time_zero_matches_baseline() {
        let output = tick_at(0.0, &[]);
        #[rustfmt::skip]
        let expected: [f32; 18] = [
            -0.5, -0.5, -0.5,  0.0, 0.0, 0.0,
             0.5, -0.5, -0.5,  0.0, 1.0, 0.0,
             0.0,  0.5, -0.5,  0.0, 0.0, 1.0,
        ];
        assert_eq!(output.vertex_buffer, expected);
        assert!(output.commands.is_empty());
    }

    #[test]
    fn test_escape_emits_close_command() {
        let output = tick_at(1.5708, &[KeyCode::Escape]);
        assert_eq!(output.commands, vec![CommandCode::CloseGame]);
        assert_relative_eq!(output.vertex_buffer[3], 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_no_escape_means_no_commands() {
        let output = tick_at(4.2, &[KeyCode::W, KeyCode::Space, KeyCode::MouseLeft]);
        assert!(output.commands.is_empty());
    }

    #[test]
    fn test_close_command_is_not_deduplicated_across_ticks() {
        let mut state = InputState::new();
        state.press(KeyCode::Escape);
        let mut game = Game::new();

        let first = game.tick(&state.snapshot(1.0));
        let second = game.tick(&state.snapshot(2.0));
        assert_eq!(first.commands, vec![CommandCode::CloseGame]);
        assert_eq!(second.commands, vec![CommandCode::CloseGame]);
    }

    #[test]
    fn test_errors_are_always_empty() {
        assert!(tick_at(0.0, &[]).errors.is_empty());
        assert!(tick_at(7.0, &[KeyCode::Escape]).errors.is_empty());
        assert!(tick_at(123.456, &[KeyCode::A, KeyCode::D]).errors.is_empty());
    }

    #[test]
    fn test_tick_is_deterministic() {
        let mut state = InputState::new();
        state.press(KeyCode::Escape);
        state.set_cursor(10.0, 20.0);
        let input = state.snapshot(0.75);

        let mut game = Game::new();
        let first = game.tick(&input);
        let second = game.tick(&input);
        assert_eq!(first, second);
    }
}
