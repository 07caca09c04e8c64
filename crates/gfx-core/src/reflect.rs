//! Bind requests produced by the shader-reflection layer.
//!
//! A [`ShaderLayout`] lists every uniform block, uniform and texture a
//! program declares, addressed by (stage, slot, index). Backends resolve the
//! names to native bind locations once the program is linked.

use anyhow::{bail, Result};

use crate::config::BindTableConfig;
use crate::types::ShaderStage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniformDesc {
    /// Position inside the uniform block.
    pub index: usize,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniformBlockDesc {
    pub stage: ShaderStage,
    pub bind_slot: usize,
    pub name: String,
    pub uniforms: Vec<UniformDesc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureDesc {
    pub stage: ShaderStage,
    pub bind_slot: usize,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShaderLayout {
    pub uniform_blocks: Vec<UniformBlockDesc>,
    pub textures: Vec<TextureDesc>,
}

impl ShaderLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a uniform block whose uniforms are indexed in order.
    pub fn uniform_block(
        mut self,
        stage: ShaderStage,
        bind_slot: usize,
        name: &str,
        uniforms: &[&str],
    ) -> Self {
        self.uniform_blocks.push(UniformBlockDesc {
            stage,
            bind_slot,
            name: name.to_owned(),
            uniforms: uniforms
                .iter()
                .enumerate()
                .map(|(index, name)| UniformDesc {
                    index,
                    name: (*name).to_owned(),
                })
                .collect(),
        });
        self
    }

    pub fn texture(mut self, stage: ShaderStage, bind_slot: usize, name: &str) -> Self {
        self.textures.push(TextureDesc {
            stage,
            bind_slot,
            name: name.to_owned(),
        });
        self
    }

    /// Check every request against the table dimensions.
    ///
    /// Bind tables do not bounds-check lookups, so this must pass before a
    /// layout is used to populate one.
    pub fn validate(&self, config: &BindTableConfig) -> Result<()> {
        for block in &self.uniform_blocks {
            if block.stage.index() >= config.num_stages {
                bail!(
                    "uniform block '{}' uses stage {:?} beyond {} stages",
                    block.name,
                    block.stage,
                    config.num_stages
                );
            }
            if block.bind_slot >= config.max_uniform_blocks_per_stage {
                bail!(
                    "uniform block '{}' bind slot {} exceeds limit {}",
                    block.name,
                    block.bind_slot,
                    config.max_uniform_blocks_per_stage
                );
            }
            for uniform in &block.uniforms {
                if uniform.index >= config.max_uniforms_per_block {
                    bail!(
                        "uniform '{}' in block '{}' has index {} beyond limit {}",
                        uniform.name,
                        block.name,
                        uniform.index,
                        config.max_uniforms_per_block
                    );
                }
            }
        }
        for tex in &self.textures {
            if tex.stage.index() >= config.num_stages {
                bail!(
                    "texture '{}' uses stage {:?} beyond {} stages",
                    tex.name,
                    tex.stage,
                    config.num_stages
                );
            }
            if tex.bind_slot >= config.max_textures_per_stage {
                bail!(
                    "texture '{}' bind slot {} exceeds limit {}",
                    tex.name,
                    tex.bind_slot,
                    config.max_textures_per_stage
                );
            }
        }
        Ok(())
    }
}
