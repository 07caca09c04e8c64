//! Native vertex attribute descriptors and format translation.

use gfx_core::{PrimitiveType, VertexFormat};
use gl::types::{GLboolean, GLenum, GLint, GLsizei, GLuint};

/// Everything `glVertexAttribPointer` and `glVertexAttribDivisor` need for
/// one attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlVertexAttr {
    pub index: GLuint,
    pub enabled: bool,
    /// Vertex-buffer slot the attribute reads from.
    pub vb_index: u8,
    pub divisor: GLuint,
    pub stride: GLsizei,
    pub size: GLint,
    pub normalized: GLboolean,
    pub offset: usize,
    pub gl_type: GLenum,
}

impl GlVertexAttr {
    /// Attribute not declared by the pipeline; the draw path skips it.
    pub const DISABLED: GlVertexAttr = GlVertexAttr {
        index: 0,
        enabled: false,
        vb_index: 0,
        divisor: 0,
        stride: 0,
        size: 0,
        normalized: gl::FALSE,
        offset: 0,
        gl_type: 0,
    };
}

impl Default for GlVertexAttr {
    fn default() -> Self {
        Self::DISABLED
    }
}

/// Component count, component type and normalization of a vertex format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlVertexFormat {
    pub size: GLint,
    pub gl_type: GLenum,
    pub normalized: GLboolean,
}

pub fn gl_vertex_format(format: VertexFormat) -> GlVertexFormat {
    let (size, gl_type, normalized) = match format {
        VertexFormat::Float => (1, gl::FLOAT, gl::FALSE),
        VertexFormat::Float2 => (2, gl::FLOAT, gl::FALSE),
        VertexFormat::Float3 => (3, gl::FLOAT, gl::FALSE),
        VertexFormat::Float4 => (4, gl::FLOAT, gl::FALSE),
        VertexFormat::Byte4 => (4, gl::BYTE, gl::FALSE),
        VertexFormat::Byte4N => (4, gl::BYTE, gl::TRUE),
        VertexFormat::UByte4 => (4, gl::UNSIGNED_BYTE, gl::FALSE),
        VertexFormat::UByte4N => (4, gl::UNSIGNED_BYTE, gl::TRUE),
        VertexFormat::Short2 => (2, gl::SHORT, gl::FALSE),
        VertexFormat::Short2N => (2, gl::SHORT, gl::TRUE),
        VertexFormat::Short4 => (4, gl::SHORT, gl::FALSE),
        VertexFormat::Short4N => (4, gl::SHORT, gl::TRUE),
        VertexFormat::UInt10_2N => (4, gl::UNSIGNED_INT_2_10_10_10_REV, gl::TRUE),
    };
    GlVertexFormat {
        size,
        gl_type,
        normalized,
    }
}

pub fn gl_primitive_type(prim: PrimitiveType) -> GLenum {
    match prim {
        PrimitiveType::Points => gl::POINTS,
        PrimitiveType::Lines => gl::LINES,
        PrimitiveType::LineStrip => gl::LINE_STRIP,
        PrimitiveType::Triangles => gl::TRIANGLES,
        PrimitiveType::TriangleStrip => gl::TRIANGLE_STRIP,
    }
}
