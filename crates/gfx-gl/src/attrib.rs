//! Vertex attribute location capability of a shader bind table.
//!
//! GL 3.3+ and GLES3 programs fix attribute locations in the shader source,
//! so nothing needs to be stored. Older targets query each location after
//! link. The `queried-attribs` feature picks [`DefaultAttribs`].

use gfx_core::VertexAttr;
use gl::types::{GLint, GLuint};

use crate::api::GlApi;

pub trait AttribBinding: Default {
    /// Resolve attribute locations of a freshly linked program.
    fn populate(&mut self, gl: &dyn GlApi, program: GLuint);

    /// Forget every stored location.
    fn reset(&mut self);
}

/// Attribute locations come from layout qualifiers; nothing is stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeclarativeAttribs;

impl AttribBinding for DeclarativeAttribs {
    fn populate(&mut self, _gl: &dyn GlApi, _program: GLuint) {}

    fn reset(&mut self) {}
}

/// Attribute locations queried with `glGetAttribLocation`, indexed by
/// attribute code. -1 marks attributes the program does not use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueriedAttribs {
    locations: [GLint; VertexAttr::NUM],
}

impl Default for QueriedAttribs {
    fn default() -> Self {
        Self {
            locations: [-1; VertexAttr::NUM],
        }
    }
}

impl QueriedAttribs {
    pub fn bind(&mut self, attr: VertexAttr, location: GLint) {
        self.locations[attr.index()] = location;
    }

    pub fn location(&self, attr: VertexAttr) -> GLint {
        self.locations[attr.index()]
    }
}

impl AttribBinding for QueriedAttribs {
    fn populate(&mut self, gl: &dyn GlApi, program: GLuint) {
        for attr in VertexAttr::all() {
            self.bind(attr, gl.get_attrib_location(program, attr.name()));
        }
    }

    fn reset(&mut self) {
        self.locations = [-1; VertexAttr::NUM];
    }
}

#[cfg(feature = "queried-attribs")]
pub type DefaultAttribs = QueriedAttribs;

#[cfg(not(feature = "queried-attribs"))]
pub type DefaultAttribs = DeclarativeAttribs;
