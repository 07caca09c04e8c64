//! Headless [`GlApi`] that records calls instead of issuing them.
//!
//! Location queries are answered from name tables configured up front, so a
//! bind table can be populated and every release counted without a driver.

use std::cell::RefCell;
use std::collections::HashMap;

use gl::types::{GLint, GLuint};

use crate::api::GlApi;

/// Everything a [`RecordingGl`] has been asked to do, in call order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlCalls {
    pub deleted_buffers: Vec<GLuint>,
    pub deleted_textures: Vec<GLuint>,
    pub deleted_renderbuffers: Vec<GLuint>,
    pub deleted_framebuffers: Vec<GLuint>,
    pub deleted_programs: Vec<GLuint>,
    pub used_programs: Vec<GLuint>,
    /// `(program, block_index, bind_point)`
    pub block_bindings: Vec<(GLuint, GLuint, GLuint)>,
    /// `(location, value)`
    pub uniform_ints: Vec<(GLint, GLint)>,
}

impl GlCalls {
    /// Total number of native objects released.
    pub fn release_count(&self) -> usize {
        self.deleted_buffers.len()
            + self.deleted_textures.len()
            + self.deleted_renderbuffers.len()
            + self.deleted_framebuffers.len()
            + self.deleted_programs.len()
    }
}

#[derive(Debug, Default)]
pub struct RecordingGl {
    uniforms: HashMap<String, GLint>,
    blocks: HashMap<String, (GLuint, GLint)>,
    attribs: HashMap<String, GLint>,
    calls: RefCell<GlCalls>,
}

impl RecordingGl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `name` as an active uniform (or sampler) at `location`.
    pub fn with_uniform(mut self, name: &str, location: GLint) -> Self {
        self.uniforms.insert(name.to_owned(), location);
        self
    }

    /// Report `name` as an active uniform block.
    pub fn with_uniform_block(mut self, name: &str, block_index: GLuint, data_size: GLint) -> Self {
        self.blocks.insert(name.to_owned(), (block_index, data_size));
        self
    }

    /// Report `name` as an active vertex attribute.
    pub fn with_attrib(mut self, name: &str, location: GLint) -> Self {
        self.attribs.insert(name.to_owned(), location);
        self
    }

    /// Snapshot of the recorded calls.
    pub fn calls(&self) -> GlCalls {
        self.calls.borrow().clone()
    }

    pub fn reset_calls(&self) {
        *self.calls.borrow_mut() = GlCalls::default();
    }
}

impl GlApi for RecordingGl {
    fn delete_buffers(&self, buffers: &[GLuint]) {
        self.calls.borrow_mut().deleted_buffers.extend_from_slice(buffers);
    }

    fn delete_textures(&self, textures: &[GLuint]) {
        self.calls.borrow_mut().deleted_textures.extend_from_slice(textures);
    }

    fn delete_renderbuffers(&self, renderbuffers: &[GLuint]) {
        self.calls
            .borrow_mut()
            .deleted_renderbuffers
            .extend_from_slice(renderbuffers);
    }

    fn delete_framebuffers(&self, framebuffers: &[GLuint]) {
        self.calls
            .borrow_mut()
            .deleted_framebuffers
            .extend_from_slice(framebuffers);
    }

    fn delete_program(&self, program: GLuint) {
        self.calls.borrow_mut().deleted_programs.push(program);
    }

    fn use_program(&self, program: GLuint) {
        self.calls.borrow_mut().used_programs.push(program);
    }

    fn get_uniform_location(&self, _program: GLuint, name: &str) -> GLint {
        self.uniforms.get(name).copied().unwrap_or(-1)
    }

    fn get_uniform_block_index(&self, _program: GLuint, name: &str) -> GLuint {
        self.blocks
            .get(name)
            .map(|&(index, _)| index)
            .unwrap_or(gl::INVALID_INDEX)
    }

    fn get_uniform_block_data_size(&self, _program: GLuint, block_index: GLuint) -> GLint {
        self.blocks
            .values()
            .find(|&&(index, _)| index == block_index)
            .map(|&(_, size)| size)
            .unwrap_or(0)
    }

    fn uniform_block_binding(&self, program: GLuint, block_index: GLuint, bind_point: GLuint) {
        self.calls
            .borrow_mut()
            .block_bindings
            .push((program, block_index, bind_point));
    }

    fn uniform_1i(&self, location: GLint, value: GLint) {
        self.calls.borrow_mut().uniform_ints.push((location, value));
    }

    fn get_attrib_location(&self, _program: GLuint, name: &str) -> GLint {
        self.attribs.get(name).copied().unwrap_or(-1)
    }
}
