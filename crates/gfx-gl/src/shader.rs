//! [`ShaderBindTable`] — flat bind-location tables of a linked GL program.
//!
//! The reflection layer addresses every uniform as (stage, block slot, item)
//! and every texture as (stage, texture slot). Those triples map onto flat
//! arrays with the index functions of [`BindTableConfig`], so a draw call
//! resolves a bind location with one multiply-add and one load.
//!
//! Missing entries hold sentinels rather than errors:
//! [`INVALID_LOCATION`] for uniforms, `gl::INVALID_INDEX` for uniform blocks
//! and [`INVALID_SAMPLER_INDEX`] for samplers.
//!
//! Lookups are not bounds-checked beyond `debug_assert!`; callers stay
//! within the configured dimensions (see
//! [`ShaderLayout::validate`](gfx_core::ShaderLayout::validate)).

use gfx_core::{BindTableConfig, ShaderStage, VertexAttr};
use gl::types::{GLint, GLuint};
use tracing::debug;

use crate::api::GlApi;
use crate::attrib::{AttribBinding, DefaultAttribs, QueriedAttribs};
use crate::resource::GlResource;

/// Uniform location of a uniform the program does not have.
pub const INVALID_LOCATION: GLint = -1;

/// Sampler index of a texture the program does not sample.
pub const INVALID_SAMPLER_INDEX: i32 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformBlockInfo {
    pub bind_location: GLuint,
    /// `GL_UNIFORM_BLOCK_DATA_SIZE` in bytes.
    pub block_data_size: GLint,
}

impl UniformBlockInfo {
    pub const ABSENT: UniformBlockInfo = UniformBlockInfo {
        bind_location: gl::INVALID_INDEX,
        block_data_size: 0,
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderBindTable<A: AttribBinding = DefaultAttribs> {
    /// The linked program, 0 if none.
    pub gl_program: GLuint,
    config: BindTableConfig,
    uniform_mappings: Box<[GLint]>,
    uniform_block_mappings: Box<[UniformBlockInfo]>,
    sampler_mappings: Box<[i32]>,
    pub(crate) attribs: A,
}

/// GL shader with the attribute capability selected by features.
pub type GlShader = ShaderBindTable<DefaultAttribs>;

impl<A: AttribBinding> Default for ShaderBindTable<A> {
    fn default() -> Self {
        Self::new(BindTableConfig::DEFAULT)
    }
}

impl<A: AttribBinding> ShaderBindTable<A> {
    /// Allocate all tables for `config`, every entry absent.
    pub fn new(config: BindTableConfig) -> Self {
        Self {
            gl_program: 0,
            config,
            uniform_mappings: vec![INVALID_LOCATION; config.num_uniforms()].into_boxed_slice(),
            uniform_block_mappings: vec![UniformBlockInfo::ABSENT; config.num_uniform_blocks()]
                .into_boxed_slice(),
            sampler_mappings: vec![INVALID_SAMPLER_INDEX; config.num_samplers()].into_boxed_slice(),
            attribs: A::default(),
        }
    }

    pub fn config(&self) -> &BindTableConfig {
        &self.config
    }

    pub fn uniform_array_index(
        &self,
        stage: ShaderStage,
        block_slot: usize,
        item_index: usize,
    ) -> usize {
        debug_assert!(stage.index() < self.config.num_stages);
        debug_assert!(block_slot < self.config.max_uniform_blocks_per_stage);
        debug_assert!(item_index < self.config.max_uniforms_per_block);
        self.config.uniform_index(stage.index(), block_slot, item_index)
    }

    pub fn uniform_block_array_index(&self, stage: ShaderStage, block_slot: usize) -> usize {
        debug_assert!(stage.index() < self.config.num_stages);
        debug_assert!(block_slot < self.config.max_uniform_blocks_per_stage);
        self.config.uniform_block_index(stage.index(), block_slot)
    }

    pub fn sampler_array_index(&self, stage: ShaderStage, texture_slot: usize) -> usize {
        debug_assert!(stage.index() < self.config.num_stages);
        debug_assert!(texture_slot < self.config.max_textures_per_stage);
        self.config.sampler_index(stage.index(), texture_slot)
    }

    pub fn bind_uniform(
        &mut self,
        stage: ShaderStage,
        block_slot: usize,
        item_index: usize,
        location: GLint,
    ) {
        let idx = self.uniform_array_index(stage, block_slot, item_index);
        self.uniform_mappings[idx] = location;
    }

    pub fn bind_uniform_block(
        &mut self,
        stage: ShaderStage,
        block_slot: usize,
        bind_point: GLuint,
        data_size: GLint,
    ) {
        let idx = self.uniform_block_array_index(stage, block_slot);
        self.uniform_block_mappings[idx] = UniformBlockInfo {
            bind_location: bind_point,
            block_data_size: data_size,
        };
    }

    pub fn bind_sampler(&mut self, stage: ShaderStage, texture_slot: usize, sampler_index: i32) {
        let idx = self.sampler_array_index(stage, texture_slot);
        self.sampler_mappings[idx] = sampler_index;
    }

    /// Uniform location, [`INVALID_LOCATION`] if absent.
    pub fn uniform_location(
        &self,
        stage: ShaderStage,
        block_slot: usize,
        item_index: usize,
    ) -> GLint {
        self.uniform_mappings[self.uniform_array_index(stage, block_slot, item_index)]
    }

    /// Uniform block bind point, `gl::INVALID_INDEX` if absent.
    pub fn uniform_block_location(&self, stage: ShaderStage, block_slot: usize) -> GLuint {
        self.uniform_block_mappings[self.uniform_block_array_index(stage, block_slot)].bind_location
    }

    pub fn uniform_block_data_size(&self, stage: ShaderStage, block_slot: usize) -> GLint {
        let idx = self.uniform_block_array_index(stage, block_slot);
        self.uniform_block_mappings[idx].block_data_size
    }

    /// Sampler index, [`INVALID_SAMPLER_INDEX`] if absent.
    pub fn sampler_index(&self, stage: ShaderStage, texture_slot: usize) -> i32 {
        self.sampler_mappings[self.sampler_array_index(stage, texture_slot)]
    }

    /// Reset every entry to its sentinel. The program is left untouched.
    pub fn clear_bindings(&mut self) {
        self.uniform_mappings.fill(INVALID_LOCATION);
        self.uniform_block_mappings.fill(UniformBlockInfo::ABSENT);
        self.sampler_mappings.fill(INVALID_SAMPLER_INDEX);
        self.attribs.reset();
    }
}

impl ShaderBindTable<QueriedAttribs> {
    pub fn bind_attrib_location(&mut self, attr: VertexAttr, location: GLint) {
        self.attribs.bind(attr, location);
    }

    /// Attribute location, -1 if the program does not use `attr`.
    pub fn attrib_location(&self, attr: VertexAttr) -> GLint {
        self.attribs.location(attr)
    }
}

impl<A: AttribBinding> GlResource for ShaderBindTable<A> {
    fn clear(&mut self, gl: &dyn GlApi) {
        if self.gl_program != 0 {
            debug!(program = self.gl_program, "deleting GL program");
            gl.delete_program(self.gl_program);
            self.gl_program = 0;
        }
        self.clear_bindings();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrib::DeclarativeAttribs;
    use crate::recording::RecordingGl;

    const SMALL: BindTableConfig = BindTableConfig {
        num_stages: 2,
        max_uniform_blocks_per_stage: 4,
        max_uniforms_per_block: 8,
        max_textures_per_stage: 4,
    };

    type Table = ShaderBindTable<DeclarativeAttribs>;

    #[test]
    fn bound_uniform_reads_back_at_its_flat_index() {
        let mut table = Table::new(SMALL);
        table.bind_uniform(ShaderStage::Fragment, 2, 3, 42);
        assert_eq!(table.uniform_array_index(ShaderStage::Fragment, 2, 3), 51);
        assert_eq!(table.uniform_location(ShaderStage::Fragment, 2, 3), 42);
        assert_eq!(table.uniform_location(ShaderStage::Fragment, 2, 4), INVALID_LOCATION);
        assert_eq!(table.uniform_location(ShaderStage::Vertex, 2, 3), INVALID_LOCATION);
    }

    #[test]
    fn sentinel_locations_round_trip() {
        let mut table = Table::new(SMALL);
        table.bind_uniform(ShaderStage::Vertex, 0, 0, 5);
        table.bind_uniform(ShaderStage::Vertex, 0, 0, INVALID_LOCATION);
        assert_eq!(table.uniform_location(ShaderStage::Vertex, 0, 0), INVALID_LOCATION);

        table.bind_sampler(ShaderStage::Fragment, 1, INVALID_SAMPLER_INDEX);
        assert_eq!(table.sampler_index(ShaderStage::Fragment, 1), INVALID_SAMPLER_INDEX);
    }

    #[test]
    fn uniform_blocks_store_bind_point_and_size() {
        let mut table = Table::new(SMALL);
        assert_eq!(table.uniform_block_location(ShaderStage::Vertex, 1), gl::INVALID_INDEX);
        assert_eq!(table.uniform_block_data_size(ShaderStage::Vertex, 1), 0);

        table.bind_uniform_block(ShaderStage::Fragment, 1, 5, 64);
        assert_eq!(table.uniform_block_array_index(ShaderStage::Fragment, 1), 5);
        assert_eq!(table.uniform_block_location(ShaderStage::Fragment, 1), 5);
        assert_eq!(table.uniform_block_data_size(ShaderStage::Fragment, 1), 64);
    }

    #[test]
    fn samplers_are_per_stage() {
        let mut table = Table::new(SMALL);
        table.bind_sampler(ShaderStage::Vertex, 0, 0);
        table.bind_sampler(ShaderStage::Fragment, 0, 1);
        assert_eq!(table.sampler_array_index(ShaderStage::Fragment, 0), 4);
        assert_eq!(table.sampler_index(ShaderStage::Vertex, 0), 0);
        assert_eq!(table.sampler_index(ShaderStage::Fragment, 0), 1);
    }

    #[test]
    fn clear_resets_entries_and_deletes_program_once() {
        let gl = RecordingGl::new();
        let mut table = Table::new(SMALL);
        table.gl_program = 9;
        table.bind_uniform(ShaderStage::Vertex, 3, 7, 11);
        table.bind_uniform_block(ShaderStage::Vertex, 3, 3, 128);
        table.bind_sampler(ShaderStage::Fragment, 3, 2);

        table.clear(&gl);
        table.clear(&gl);

        assert_eq!(gl.calls().deleted_programs, vec![9]);
        assert_eq!(table.gl_program, 0);
        assert_eq!(table, Table::new(SMALL));
    }

    #[test]
    fn queried_attrib_table_stores_locations() {
        let mut table: ShaderBindTable<QueriedAttribs> = ShaderBindTable::new(SMALL);
        assert_eq!(table.attrib_location(VertexAttr::Color0), -1);
        table.bind_attrib_location(VertexAttr::Color0, 3);
        assert_eq!(table.attrib_location(VertexAttr::Color0), 3);
        table.clear_bindings();
        assert_eq!(table.attrib_location(VertexAttr::Color0), -1);
    }

    #[test]
    fn default_table_uses_engine_limits() {
        let table = GlShader::default();
        assert_eq!(*table.config(), BindTableConfig::DEFAULT);
        assert_eq!(table.uniform_location(ShaderStage::Fragment, 3, 15), INVALID_LOCATION);
    }
}
