//! Pass-through shader pair and its compile/link plumbing

use gl::types::{GLenum, GLint, GLuint};
use std::ffi::CStr;

/// Vertex shader: forwards position and hands the color to the fragment stage.
///
/// Attribute locations 0 (position) and 1 (color) are the other half of
/// the interleaved layout contract in `game_core::output`.
const VERTEX_SHADER_SOURCE: &CStr = c"#version 330 core
layout (location = 0) in vec3 position;
layout (location = 1) in vec3 color;
out vec4 vertexColor;
void main()
{
    gl_Position = vec4(position, 1.0);
    vertexColor = vec4(color, 1.0);
}
";

/// Fragment shader: writes the interpolated vertex color unchanged.
const FRAGMENT_SHADER_SOURCE: &CStr = c"#version 330 core
in vec4 vertexColor;
out vec4 FragColor;
void main()
{
    FragColor = vertexColor;
}
";

const INFO_LOG_CAPACITY: usize = 512;

/// Linked GL shader program with proper resource cleanup
pub struct ShaderProgram {
    id: GLuint,
}

impl ShaderProgram {
    /// Compile and link the fixed pass-through shader pair
    ///
    /// Compile and link failures are logged and otherwise ignored: the
    /// returned program may be unusable, but the host keeps running.
    /// Requires a current GL context with loaded function pointers.
    #[must_use]
    pub fn build_pass_through() -> Self {
        let vertex_shader = compile_shader(gl::VERTEX_SHADER, VERTEX_SHADER_SOURCE, "vertex");
        let fragment_shader =
            compile_shader(gl::FRAGMENT_SHADER, FRAGMENT_SHADER_SOURCE, "fragment");

        let id = unsafe {
            let program = gl::CreateProgram();
            gl::AttachShader(program, vertex_shader);
            gl::AttachShader(program, fragment_shader);
            gl::LinkProgram(program);

            let mut success: GLint = 0;
            gl::GetProgramiv(program, gl::LINK_STATUS, &mut success);
            if success == 0 {
                let mut info_log = [0u8; INFO_LOG_CAPACITY];
                let mut length: GLint = 0;
                gl::GetProgramInfoLog(
                    program,
                    INFO_LOG_CAPACITY as GLint,
                    &mut length,
                    info_log.as_mut_ptr().cast(),
                );
                log::error!(
                    "Shader program linking failed: {}",
                    truncated_log(&info_log, length)
                );
            }

            // Shaders are owned by the program after linking.
            gl::DeleteShader(vertex_shader);
            gl::DeleteShader(fragment_shader);
            program
        };

        Self { id }
    }

    /// Raw GL program handle
    #[must_use]
    pub const fn id(&self) -> GLuint {
        self.id
    }

    /// Bind this program for subsequent draw calls
    pub fn bind(&self) {
        unsafe {
            gl::UseProgram(self.id);
        }
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteProgram(self.id);
        }
    }
}

fn compile_shader(kind: GLenum, source: &CStr, label: &str) -> GLuint {
    unsafe {
        let shader = gl::CreateShader(kind);
        gl::ShaderSource(shader, 1, &source.as_ptr(), std::ptr::null());
        gl::CompileShader(shader);

        let mut success: GLint = 0;
        gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut success);
        if success == 0 {
            let mut info_log = [0u8; INFO_LOG_CAPACITY];
            let mut length: GLint = 0;
            gl::GetShaderInfoLog(
                shader,
                INFO_LOG_CAPACITY as GLint,
                &mut length,
                info_log.as_mut_ptr().cast(),
            );
            log::error!(
                "{label} shader compilation failed: {}",
                truncated_log(&info_log, length)
            );
        }
        shader
    }
}

fn truncated_log(info_log: &[u8], length: GLint) -> String {
    let length = usize::try_from(length).unwrap_or(0).min(info_log.len());
    String::from_utf8_lossy(&info_log[..length]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shader_sources_declare_matching_io() {
        let vertex = VERTEX_SHADER_SOURCE.to_str().unwrap();
        let fragment = FRAGMENT_SHADER_SOURCE.to_str().unwrap();

        // Attribute locations 0 and 1 carry the interleaved layout.
        assert!(vertex.contains("layout (location = 0) in vec3 position"));
        assert!(vertex.contains("layout (location = 1) in vec3 color"));

        // The varying name must agree between the two stages.
        assert!(vertex.contains("out vec4 vertexColor"));
        assert!(fragment.contains("in vec4 vertexColor"));
    }

    #[test]
    fn test_truncated_log_clamps_length() {
        let buffer = *b"short message\0\0\0";
        assert_eq!(truncated_log(&buffer, 13), "short message");
        assert_eq!(truncated_log(&buffer, -1), "");
        assert_eq!(truncated_log(&buffer, 1000).len(), buffer.len());
    }
}
