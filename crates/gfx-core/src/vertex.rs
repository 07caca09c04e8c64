//! Backend-neutral vertex layout and pipeline setup.

use crate::config::GfxConfig;
use crate::types::{PrimitiveType, VertexAttr, VertexFormat, VertexStep};

/// One attribute of a vertex layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexComponent {
    pub attr: VertexAttr,
    pub format: VertexFormat,
}

/// Interleaved layout of a single vertex buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VertexLayout {
    pub step: VertexStep,
    /// Instances per attribute advance for [`VertexStep::PerInstance`].
    pub step_rate: u32,
    pub components: Vec<VertexComponent>,
}

impl VertexLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style append.
    pub fn add(mut self, attr: VertexAttr, format: VertexFormat) -> Self {
        self.components.push(VertexComponent { attr, format });
        self
    }

    pub fn per_instance(mut self, step_rate: u32) -> Self {
        self.step = VertexStep::PerInstance;
        self.step_rate = step_rate;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Byte size of one interleaved vertex.
    pub fn byte_size(&self) -> usize {
        self.components.iter().map(|c| c.format.byte_size()).sum()
    }

    /// Byte offset of component `index` within one vertex.
    pub fn component_byte_offset(&self, index: usize) -> usize {
        self.components[..index]
            .iter()
            .map(|c| c.format.byte_size())
            .sum()
    }

    pub fn contains(&self, attr: VertexAttr) -> bool {
        self.components.iter().any(|c| c.attr == attr)
    }
}

/// Creation parameters of a pipeline object relevant to vertex input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineSetup {
    /// One layout per vertex-buffer slot; empty layouts are unused slots.
    pub layouts: [VertexLayout; GfxConfig::MAX_NUM_INPUT_MESHES],
    pub prim_type: PrimitiveType,
}

impl PipelineSetup {
    pub fn new(layout: VertexLayout, prim_type: PrimitiveType) -> Self {
        let mut setup = Self {
            prim_type,
            ..Default::default()
        };
        setup.layouts[0] = layout;
        setup
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_follow_component_order() {
        let layout = VertexLayout::new()
            .add(VertexAttr::Position, VertexFormat::Float3)
            .add(VertexAttr::Normal, VertexFormat::Byte4N)
            .add(VertexAttr::TexCoord0, VertexFormat::Float2);
        assert_eq!(layout.byte_size(), 24);
        assert_eq!(layout.component_byte_offset(0), 0);
        assert_eq!(layout.component_byte_offset(1), 12);
        assert_eq!(layout.component_byte_offset(2), 16);
        assert!(layout.contains(VertexAttr::Normal));
        assert!(!layout.contains(VertexAttr::Color0));
    }

    #[test]
    fn setup_puts_layout_in_first_slot() {
        let setup = PipelineSetup::new(
            VertexLayout::new().add(VertexAttr::Position, VertexFormat::Float2),
            PrimitiveType::TriangleStrip,
        );
        assert!(!setup.layouts[0].is_empty());
        assert!(setup.layouts[1..].iter().all(VertexLayout::is_empty));
    }
}
