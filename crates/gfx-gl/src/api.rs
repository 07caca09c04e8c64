//! The native GL seam.

use gl::types::{GLint, GLuint};

/// Every GL entry point the resource backend uses.
///
/// [`RawGl`](crate::raw::RawGl) forwards to the loaded driver;
/// [`RecordingGl`](crate::recording::RecordingGl) answers from tables and
/// records each call so resource lifetimes can be checked without a context.
///
/// Calls must happen on the thread that owns the current GL context.
pub trait GlApi {
    /// `glDeleteBuffers`. Zero names are never passed.
    fn delete_buffers(&self, buffers: &[GLuint]);

    /// `glDeleteTextures`.
    fn delete_textures(&self, textures: &[GLuint]);

    /// `glDeleteRenderbuffers`.
    fn delete_renderbuffers(&self, renderbuffers: &[GLuint]);

    /// `glDeleteFramebuffers`.
    fn delete_framebuffers(&self, framebuffers: &[GLuint]);

    /// `glDeleteProgram`.
    fn delete_program(&self, program: GLuint);

    /// `glUseProgram`; 0 unbinds.
    fn use_program(&self, program: GLuint);

    /// `glGetUniformLocation`, -1 if the program has no such uniform.
    fn get_uniform_location(&self, program: GLuint, name: &str) -> GLint;

    /// `glGetUniformBlockIndex`, `GL_INVALID_INDEX` if absent.
    fn get_uniform_block_index(&self, program: GLuint, name: &str) -> GLuint;

    /// `glGetActiveUniformBlockiv(GL_UNIFORM_BLOCK_DATA_SIZE)`.
    fn get_uniform_block_data_size(&self, program: GLuint, block_index: GLuint) -> GLint;

    /// `glUniformBlockBinding`.
    fn uniform_block_binding(&self, program: GLuint, block_index: GLuint, bind_point: GLuint);

    /// `glUniform1i` on the currently used program.
    fn uniform_1i(&self, location: GLint, value: GLint);

    /// `glGetAttribLocation`, -1 if the attribute is not active.
    fn get_attrib_location(&self, program: GLuint, name: &str) -> GLint;
}
