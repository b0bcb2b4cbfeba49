//! Dynamic vertex buffer and per-frame draw of the tick output

use crate::shader::ShaderProgram;
use game_core::output::{
    OutputData, COLOR_OFFSET_BYTES, FLOATS_PER_VERTEX, VERTEX_STRIDE_BYTES,
};
use gl::types::{GLint, GLsizei, GLsizeiptr, GLuint};

/// Clear color behind the triangle
const CLEAR_COLOR: [f32; 4] = [0.15, 0.1, 0.3, 1.0];

/// Renders one frame's [`OutputData`] through a dynamic vertex buffer
///
/// Owns the pass-through shader program plus one VAO/VBO pair configured
/// for the interleaved position/color layout. The buffer store is
/// re-specified with `GL_DYNAMIC_DRAW` every frame, matching the
/// "recreated every frame" lifecycle of the output itself.
pub struct TriangleRenderer {
    program: ShaderProgram,
    vao: GLuint,
    vbo: GLuint,
}

impl TriangleRenderer {
    /// Create the renderer against the current GL context
    ///
    /// The context must be current and `gl::load_with` must already have
    /// run. Shader failures are logged, not returned (see [`ShaderProgram`]).
    #[must_use]
    pub fn new() -> Self {
        let program = ShaderProgram::build_pass_through();

        let mut vao: GLuint = 0;
        let mut vbo: GLuint = 0;
        unsafe {
            gl::GenVertexArrays(1, &mut vao);
            gl::GenBuffers(1, &mut vbo);

            gl::BindVertexArray(vao);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
            gl::VertexAttribPointer(
                0,
                3,
                gl::FLOAT,
                gl::FALSE,
                VERTEX_STRIDE_BYTES as GLsizei,
                std::ptr::null(),
            );
            gl::EnableVertexAttribArray(0);
            gl::VertexAttribPointer(
                1,
                3,
                gl::FLOAT,
                gl::FALSE,
                VERTEX_STRIDE_BYTES as GLsizei,
                COLOR_OFFSET_BYTES as *const _,
            );
            gl::EnableVertexAttribArray(1);
            gl::BindBuffer(gl::ARRAY_BUFFER, 0);
            gl::BindVertexArray(0);
        }

        Self { program, vao, vbo }
    }

    /// Set the GL viewport, typically once after context creation
    pub fn set_viewport(&self, width: u32, height: u32) {
        unsafe {
            gl::Viewport(0, 0, width as GLsizei, height as GLsizei);
        }
    }

    /// Clear the frame, upload the vertex buffer, and draw it as triangles
    pub fn draw(&self, output: &OutputData) {
        debug_assert_eq!(
            output.vertex_buffer.len(),
            output.vertices_count * FLOATS_PER_VERTEX,
            "vertex buffer length must equal vertices_count * floats-per-vertex"
        );

        let bytes: &[u8] = bytemuck::cast_slice(&output.vertex_buffer);
        unsafe {
            gl::ClearColor(CLEAR_COLOR[0], CLEAR_COLOR[1], CLEAR_COLOR[2], CLEAR_COLOR[3]);
            gl::Clear(gl::COLOR_BUFFER_BIT);

            self.program.bind();
            gl::BindVertexArray(self.vao);
            gl::BindBuffer(gl::ARRAY_BUFFER, self.vbo);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                bytes.len() as GLsizeiptr,
                bytes.as_ptr().cast(),
                gl::DYNAMIC_DRAW,
            );
            gl::BindBuffer(gl::ARRAY_BUFFER, 0);
            gl::DrawArrays(gl::TRIANGLES, 0, output.vertices_count as GLint);
            gl::BindVertexArray(0);
        }
    }
}

impl Default for TriangleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TriangleRenderer {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(1, &self.vbo);
            gl::DeleteVertexArrays(1, &self.vao);
        }
    }
}
