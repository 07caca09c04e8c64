//! GL pipeline: per-attribute vertex descriptors and primitive topology.
//!
//! Everything is translated once in [`GlPipeline::from_setup`] so the draw
//! path only walks [`GlPipeline::enabled_attrs`].

use anyhow::{bail, Result};
use gfx_core::{PipelineSetup, VertexAttr, VertexStep};
use gl::types::{GLenum, GLsizei, GLuint};

use crate::api::GlApi;
use crate::resource::GlResource;
use crate::vertex_attr::{gl_primitive_type, gl_vertex_format, GlVertexAttr};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlPipeline {
    /// Indexed by attribute code.
    pub gl_attrs: [GlVertexAttr; VertexAttr::NUM],
    pub gl_prim_type: GLenum,
}

impl Default for GlPipeline {
    /// Every entry disabled but still carrying its own attribute code.
    fn default() -> Self {
        Self {
            gl_attrs: std::array::from_fn(|code| GlVertexAttr {
                index: code as GLuint,
                ..GlVertexAttr::DISABLED
            }),
            gl_prim_type: 0,
        }
    }
}

impl GlPipeline {
    /// Build the attribute table for `setup`.
    ///
    /// Fails if an attribute is declared by more than one component.
    pub fn from_setup(setup: &PipelineSetup) -> Result<Self> {
        let mut pipeline = Self {
            gl_prim_type: gl_primitive_type(setup.prim_type),
            ..Default::default()
        };

        for (vb_index, layout) in setup.layouts.iter().enumerate() {
            let stride = layout.byte_size() as GLsizei;
            let divisor = match layout.step {
                VertexStep::PerVertex => 0,
                VertexStep::PerInstance => layout.step_rate,
            };
            let mut offset = 0;
            for component in &layout.components {
                let attr = &mut pipeline.gl_attrs[component.attr.index()];
                if attr.enabled {
                    bail!(
                        "vertex attribute {:?} declared twice (buffer slots {} and {})",
                        component.attr,
                        attr.vb_index,
                        vb_index
                    );
                }
                let format = gl_vertex_format(component.format);
                *attr = GlVertexAttr {
                    index: component.attr.index() as GLuint,
                    enabled: true,
                    vb_index: vb_index as u8,
                    divisor,
                    stride,
                    size: format.size,
                    normalized: format.normalized,
                    offset,
                    gl_type: format.gl_type,
                };
                offset += component.format.byte_size();
            }
        }

        Ok(pipeline)
    }

    pub fn attr(&self, attr: VertexAttr) -> &GlVertexAttr {
        &self.gl_attrs[attr.index()]
    }

    /// Attributes the draw path must enable, in attribute-code order.
    pub fn enabled_attrs(&self) -> impl Iterator<Item = &GlVertexAttr> {
        self.gl_attrs.iter().filter(|a| a.enabled)
    }
}

impl GlResource for GlPipeline {
    /// Holds no native handles; only resets the tables.
    fn clear(&mut self, _gl: &dyn GlApi) {
        *self = Self::default();
    }
}
