//! Compile-time limits shared between the shader-reflection layer and the
//! backends.

/// Fixed engine limits.
///
/// The shader-reflection layer emits bind requests within these bounds and
/// the backends size their flat tables from them.
pub struct GfxConfig;

impl GfxConfig {
    /// Number of programmable stages (vertex, fragment).
    pub const NUM_SHADER_STAGES: usize = 2;
    /// Uniform blocks a single stage may declare.
    pub const MAX_NUM_UNIFORM_BLOCKS_PER_STAGE: usize = 4;
    /// Uniforms a single uniform block may declare.
    pub const MAX_NUM_UNIFORM_BLOCK_LAYOUT_COMPONENTS: usize = 16;
    /// Textures a single stage may sample.
    pub const MAX_NUM_TEXTURE_BLOCK_LAYOUT_COMPONENTS: usize = 16;
    /// Color attachments of one render pass.
    pub const MAX_NUM_COLOR_ATTACHMENTS: usize = 4;
    /// Vertex buffers feeding one draw.
    pub const MAX_NUM_INPUT_MESHES: usize = 4;
}

/// Dimensions of a shader bind table.
///
/// [`BindTableConfig::DEFAULT`] matches [`GfxConfig`]; other values exist so
/// tools and tests can size smaller tables with the same index scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindTableConfig {
    pub num_stages: usize,
    pub max_uniform_blocks_per_stage: usize,
    pub max_uniforms_per_block: usize,
    pub max_textures_per_stage: usize,
}

impl BindTableConfig {
    pub const DEFAULT: BindTableConfig = BindTableConfig {
        num_stages: GfxConfig::NUM_SHADER_STAGES,
        max_uniform_blocks_per_stage: GfxConfig::MAX_NUM_UNIFORM_BLOCKS_PER_STAGE,
        max_uniforms_per_block: GfxConfig::MAX_NUM_UNIFORM_BLOCK_LAYOUT_COMPONENTS,
        max_textures_per_stage: GfxConfig::MAX_NUM_TEXTURE_BLOCK_LAYOUT_COMPONENTS,
    };

    /// Flat index of a uniform inside a uniform block.
    pub const fn uniform_index(&self, stage: usize, block_slot: usize, item_index: usize) -> usize {
        item_index
            + block_slot * self.max_uniforms_per_block
            + stage * self.max_uniform_blocks_per_stage * self.max_uniforms_per_block
    }

    /// Flat index of a uniform block.
    pub const fn uniform_block_index(&self, stage: usize, block_slot: usize) -> usize {
        block_slot + stage * self.max_uniform_blocks_per_stage
    }

    /// Flat index of a texture sampler.
    pub const fn sampler_index(&self, stage: usize, texture_slot: usize) -> usize {
        texture_slot + stage * self.max_textures_per_stage
    }

    pub const fn num_uniforms(&self) -> usize {
        self.num_stages * self.max_uniform_blocks_per_stage * self.max_uniforms_per_block
    }

    pub const fn num_uniform_blocks(&self) -> usize {
        self.num_stages * self.max_uniform_blocks_per_stage
    }

    pub const fn num_samplers(&self) -> usize {
        self.num_stages * self.max_textures_per_stage
    }
}

impl Default for BindTableConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
