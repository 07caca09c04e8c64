//! Engine-level enums shared by every backend.
//!
//! Discriminants are the wire codes the shader-reflection layer emits, so the
//! `from_code` constructors are the only conversion from raw integers.

use num_derive::FromPrimitive;
use num_traits::FromPrimitive as _;

/// A programmable pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive)]
#[repr(u8)]
pub enum ShaderStage {
    Vertex = 0,
    Fragment = 1,
}

impl ShaderStage {
    pub const NUM: usize = 2;
    pub const ALL: [ShaderStage; Self::NUM] = [ShaderStage::Vertex, ShaderStage::Fragment];

    pub fn from_code(code: u8) -> Option<Self> {
        Self::from_u8(code)
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Vertex attribute semantics. The discriminant is the attribute code used to
/// index per-attribute tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive)]
#[repr(u8)]
pub enum VertexAttr {
    Position = 0,
    Normal,
    TexCoord0,
    TexCoord1,
    TexCoord2,
    TexCoord3,
    Tangent,
    Binormal,
    Weights,
    Indices,
    Color0,
    Color1,
    Instance0,
    Instance1,
    Instance2,
    Instance3,
}

impl VertexAttr {
    pub const NUM: usize = 16;

    pub fn from_code(code: u8) -> Option<Self> {
        Self::from_u8(code)
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Attribute name as written in generated shader sources.
    pub fn name(self) -> &'static str {
        match self {
            VertexAttr::Position => "position",
            VertexAttr::Normal => "normal",
            VertexAttr::TexCoord0 => "texcoord0",
            VertexAttr::TexCoord1 => "texcoord1",
            VertexAttr::TexCoord2 => "texcoord2",
            VertexAttr::TexCoord3 => "texcoord3",
            VertexAttr::Tangent => "tangent",
            VertexAttr::Binormal => "binormal",
            VertexAttr::Weights => "weights",
            VertexAttr::Indices => "indices",
            VertexAttr::Color0 => "color0",
            VertexAttr::Color1 => "color1",
            VertexAttr::Instance0 => "instance0",
            VertexAttr::Instance1 => "instance1",
            VertexAttr::Instance2 => "instance2",
            VertexAttr::Instance3 => "instance3",
        }
    }

    pub fn all() -> impl Iterator<Item = VertexAttr> {
        (0..Self::NUM as u8).filter_map(Self::from_code)
    }
}

/// Component format of a vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive)]
#[repr(u8)]
pub enum VertexFormat {
    Float,
    Float2,
    Float3,
    Float4,
    Byte4,
    Byte4N,
    UByte4,
    UByte4N,
    Short2,
    Short2N,
    Short4,
    Short4N,
    UInt10_2N,
}

impl VertexFormat {
    pub fn from_code(code: u8) -> Option<Self> {
        Self::from_u8(code)
    }

    /// Size of one element in bytes.
    pub fn byte_size(self) -> usize {
        match self {
            VertexFormat::Float => 4,
            VertexFormat::Float2 => 8,
            VertexFormat::Float3 => 12,
            VertexFormat::Float4 => 16,
            VertexFormat::Byte4
            | VertexFormat::Byte4N
            | VertexFormat::UByte4
            | VertexFormat::UByte4N
            | VertexFormat::Short2
            | VertexFormat::Short2N
            | VertexFormat::UInt10_2N => 4,
            VertexFormat::Short4 | VertexFormat::Short4N => 8,
        }
    }
}

/// How a vertex buffer advances: per vertex or per instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VertexStep {
    #[default]
    PerVertex,
    PerInstance,
}

/// Primitive topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, FromPrimitive)]
#[repr(u8)]
pub enum PrimitiveType {
    Points,
    Lines,
    LineStrip,
    #[default]
    Triangles,
    TriangleStrip,
}

impl PrimitiveType {
    pub fn from_code(code: u8) -> Option<Self> {
        Self::from_u8(code)
    }
}
