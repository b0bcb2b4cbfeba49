//! # OpenGL rasterization for the tick output
//!
//! The half of the host loop that is identical across windowing backends:
//! a fixed pass-through shader pair and a dynamic vertex buffer that
//! uploads each frame's [`game_core::OutputData`] and draws it as a
//! triangle list.
//!
//! The caller owns the window and the GL context. Before constructing a
//! [`TriangleRenderer`], the context must be current and the function
//! pointers loaded:
//!
//! ```rust,no_run
//! # let get_proc_address = |_: &str| std::ptr::null::<std::ffi::c_void>();
//! gl::load_with(|symbol| get_proc_address(symbol).cast());
//! let renderer = render_gl::TriangleRenderer::new();
//! ```
//!
//! Shader compile or link failures are logged and not treated as fatal;
//! the renderer keeps running with the unusable program, matching the
//! host contract of "log to stderr and continue".

#![warn(missing_docs)]

mod renderer;
mod shader;

pub use renderer::TriangleRenderer;
pub use shader::ShaderProgram;
