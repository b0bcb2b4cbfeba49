//! Output data model: commands, errors, and the vertex buffer contract

/// Instructions the game logic issues back to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandCode {
    /// Placeholder for commands the host does not recognize
    Unknown,
    /// Request that the host shut down the render loop
    CloseGame,
    /// Request that the host persist the game state
    SaveGame,
    /// Request that the host restore persisted game state
    LoadGame,
}

/// Errors the game logic can report to the host
///
/// No current code path produces one; the enum exists so the output
/// contract has an error channel without overloading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Unclassified error
    Unknown,
}

/// Number of floats per vertex: position.xyz followed by color.rgb
pub const FLOATS_PER_VERTEX: usize = 6;

/// Byte stride between consecutive vertices in the buffer
pub const VERTEX_STRIDE_BYTES: usize = FLOATS_PER_VERTEX * std::mem::size_of::<f32>();

/// Byte offset of the color attribute within a vertex
pub const COLOR_OFFSET_BYTES: usize = 3 * std::mem::size_of::<f32>();

/// Everything the game logic hands back to the host for one frame
///
/// Created fresh inside every tick and returned by value; the host owns
/// it for the frame and discards it. `vertex_buffer` is the interleaved
/// attribute stream described by [`FLOATS_PER_VERTEX`],
/// [`VERTEX_STRIDE_BYTES`], and [`COLOR_OFFSET_BYTES`] — the one
/// bit-exact contract shared with the renderer's shader pair.
///
/// Invariant: `vertex_buffer.len() == vertices_count * FLOATS_PER_VERTEX`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OutputData {
    /// Commands for the host to interpret, in emission order
    pub commands: Vec<CommandCode>,
    /// Errors for the host to report, in emission order
    pub errors: Vec<ErrorCode>,
    /// Interleaved position/color floats for GPU upload
    pub vertex_buffer: Vec<f32>,
    /// Number of vertices encoded in `vertex_buffer`
    pub vertices_count: usize,
}

impl OutputData {
    /// Create an empty output value
    #[must_use]
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
            errors: Vec::new(),
            vertex_buffer: Vec::new(),
            vertices_count: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout_constants() {
        // The pass-through shader pair assumes exactly this layout.
        assert_eq!(FLOATS_PER_VERTEX, 6);
        assert_eq!(VERTEX_STRIDE_BYTES, 24);
        assert_eq!(COLOR_OFFSET_BYTES, 12);
    }

    #[test]
    fn test_new_output_is_empty() {
        let output = OutputData::new();
        assert!(output.commands.is_empty());
        assert!(output.errors.is_empty());
        assert!(output.vertex_buffer.is_empty());
        assert_eq!(output.vertices_count, 0);
    }
}
