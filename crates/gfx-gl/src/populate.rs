//! Fill a [`ShaderBindTable`] from reflection records right after link.

use anyhow::{bail, Result};
use gfx_core::ShaderLayout;
use gl::types::GLint;
use tracing::{debug, warn};

use crate::api::GlApi;
use crate::attrib::AttribBinding;
use crate::shader::{ShaderBindTable, INVALID_LOCATION};

/// What [`ShaderBindTable::populate`] found in the program.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PopulateStats {
    pub uniform_blocks: usize,
    pub uniforms: usize,
    pub samplers: usize,
}

impl<A: AttribBinding> ShaderBindTable<A> {
    /// Resolve every request of `layout` against `self.gl_program`.
    ///
    /// Uniform blocks are bound to their flat block index as bind point.
    /// Samplers get texture units in request order, counting only samplers
    /// the program actually uses. Requests the program does not contain keep
    /// their absent sentinel.
    ///
    /// Leaves no program bound on return.
    pub fn populate(&mut self, gl: &dyn GlApi, layout: &ShaderLayout) -> Result<PopulateStats> {
        let program = self.gl_program;
        if program == 0 {
            bail!("cannot populate bind table without a linked program");
        }
        layout.validate(self.config())?;
        self.clear_bindings();

        let mut stats = PopulateStats::default();

        for block in &layout.uniform_blocks {
            let block_index = gl.get_uniform_block_index(program, &block.name);
            if block_index != gl::INVALID_INDEX {
                let bind_point =
                    self.uniform_block_array_index(block.stage, block.bind_slot) as u32;
                gl.uniform_block_binding(program, block_index, bind_point);
                let data_size = gl.get_uniform_block_data_size(program, block_index);
                self.bind_uniform_block(block.stage, block.bind_slot, bind_point, data_size);
                stats.uniform_blocks += 1;
            }

            for uniform in &block.uniforms {
                let location = gl.get_uniform_location(program, &uniform.name);
                self.bind_uniform(block.stage, block.bind_slot, uniform.index, location);
                if location != INVALID_LOCATION {
                    stats.uniforms += 1;
                }
            }
        }

        gl.use_program(program);
        let mut texture_unit: GLint = 0;
        for tex in &layout.textures {
            let location = gl.get_uniform_location(program, &tex.name);
            if location == INVALID_LOCATION {
                warn!(name = %tex.name, stage = ?tex.stage, "sampler not found in program");
                continue;
            }
            gl.uniform_1i(location, texture_unit);
            self.bind_sampler(tex.stage, tex.bind_slot, texture_unit);
            texture_unit += 1;
        }
        stats.samplers = texture_unit as usize;
        gl.use_program(0);

        self.attribs.populate(gl, program);

        debug!(
            program,
            uniform_blocks = stats.uniform_blocks,
            uniforms = stats.uniforms,
            samplers = stats.samplers,
            "bind table populated"
        );
        Ok(stats)
    }
}
