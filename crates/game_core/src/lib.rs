//! # Game Core
//!
//! Backend-independent game logic behind an abstract `Tick(input) -> output`
//! contract.
//!
//! The crate knows nothing about windows, OpenGL, or event loops. A host
//! (see the `glfw_app` and `sdl_app` binaries) owns the render loop: it
//! polls its windowing library, feeds mapped key events into an
//! [`InputState`], snapshots that state into an [`InputData`] once per
//! frame, and hands it to [`GameLogic::tick`]. The returned [`OutputData`]
//! carries everything the host needs for that frame: commands to act on
//! (currently only "close the game") and an interleaved vertex buffer to
//! upload and draw.
//!
//! ## Quick Start
//!
//! ```rust
//! use game_core::prelude::*;
//!
//! let mut game = Game::new();
//! let mut input_state = InputState::new();
//!
//! // Per frame: feed events, snapshot, tick.
//! input_state.press(KeyCode::Escape);
//! let input = input_state.snapshot(1.25);
//! let output = game.tick(&input);
//!
//! assert!(output.commands.contains(&CommandCode::CloseGame));
//! assert_eq!(output.vertices_count, 3);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod game;
pub mod input;
pub mod output;

pub use config::{AppConfig, ConfigError, WindowConfig};
pub use game::{Game, GameLogic};
pub use input::{InputData, InputState, KeyCode};
pub use output::{CommandCode, ErrorCode, OutputData};

/// Common imports for hosts driving the game logic
pub mod prelude {
    pub use crate::{
        config::{AppConfig, ConfigError, WindowConfig},
        game::{Game, GameLogic},
        input::{InputData, InputState, KeyCode},
        output::{CommandCode, ErrorCode, OutputData},
    };
}
