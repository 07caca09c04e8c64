//! [`GlApi`] backed by the `gl` crate's loaded function pointers.

use std::ffi::CString;
use std::sync::Once;

use gl::types::{GLint, GLsizei, GLuint};
use tracing::{debug, warn};

use crate::api::GlApi;

static GL_INIT_ONCE: Once = Once::new();

/// Forwards every call to the driver.
///
/// The caller must have a GL context current on this thread for every call.
#[derive(Debug, Clone, Copy)]
pub struct RawGl {
    _private: (),
}

impl RawGl {
    /// Load GL function pointers through `gl_loader`.
    ///
    /// Pointers are loaded exactly once per process; later calls reuse them.
    pub fn load() -> Self {
        GL_INIT_ONCE.call_once(|| {
            gl_loader::init_gl();
            gl::load_with(|s| gl_loader::get_proc_address(s).cast());
            debug!("GL function pointers loaded via gl_loader");
        });
        Self { _private: () }
    }

    /// Load GL function pointers from a windowing layer's loader instead.
    pub fn load_with<F>(loader: F) -> Self
    where
        F: FnMut(&'static str) -> *const std::os::raw::c_void,
    {
        let mut loader = Some(loader);
        GL_INIT_ONCE.call_once(|| {
            if let Some(f) = loader.take() {
                gl::load_with(f);
            }
            debug!("GL function pointers loaded via external loader");
        });
        if loader.is_some() {
            warn!("GL already loaded; external loader ignored");
        }
        Self { _private: () }
    }
}

fn c_name(name: &str) -> Option<CString> {
    match CString::new(name) {
        Ok(s) => Some(s),
        Err(_) => {
            warn!(name, "GL name contains an interior NUL");
            None
        }
    }
}

fn count(names: &[GLuint]) -> GLsizei {
    names.len() as GLsizei
}

impl GlApi for RawGl {
    fn delete_buffers(&self, buffers: &[GLuint]) {
        unsafe { gl::DeleteBuffers(count(buffers), buffers.as_ptr()) }
    }

    fn delete_textures(&self, textures: &[GLuint]) {
        unsafe { gl::DeleteTextures(count(textures), textures.as_ptr()) }
    }

    fn delete_renderbuffers(&self, renderbuffers: &[GLuint]) {
        unsafe { gl::DeleteRenderbuffers(count(renderbuffers), renderbuffers.as_ptr()) }
    }

    fn delete_framebuffers(&self, framebuffers: &[GLuint]) {
        unsafe {
            gl::BindFramebuffer(gl::FRAMEBUFFER, 0);
            gl::DeleteFramebuffers(count(framebuffers), framebuffers.as_ptr());
        }
    }

    fn delete_program(&self, program: GLuint) {
        unsafe { gl::DeleteProgram(program) }
    }

    fn use_program(&self, program: GLuint) {
        unsafe { gl::UseProgram(program) }
    }

    fn get_uniform_location(&self, program: GLuint, name: &str) -> GLint {
        match c_name(name) {
            Some(n) => unsafe { gl::GetUniformLocation(program, n.as_ptr()) },
            None => -1,
        }
    }

    fn get_uniform_block_index(&self, program: GLuint, name: &str) -> GLuint {
        match c_name(name) {
            Some(n) => unsafe { gl::GetUniformBlockIndex(program, n.as_ptr()) },
            None => gl::INVALID_INDEX,
        }
    }

    fn get_uniform_block_data_size(&self, program: GLuint, block_index: GLuint) -> GLint {
        let mut size: GLint = 0;
        unsafe {
            gl::GetActiveUniformBlockiv(
                program,
                block_index,
                gl::UNIFORM_BLOCK_DATA_SIZE,
                &mut size,
            );
        }
        size
    }

    fn uniform_block_binding(&self, program: GLuint, block_index: GLuint, bind_point: GLuint) {
        unsafe { gl::UniformBlockBinding(program, block_index, bind_point) }
    }

    fn uniform_1i(&self, location: GLint, value: GLint) {
        unsafe { gl::Uniform1i(location, value) }
    }

    fn get_attrib_location(&self, program: GLuint, name: &str) -> GLint {
        match c_name(name) {
            Some(n) => unsafe { gl::GetAttribLocation(program, n.as_ptr()) },
            None => -1,
        }
    }
}
