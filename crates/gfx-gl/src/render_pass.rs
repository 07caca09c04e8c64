//! GL render pass: framebuffer plus per-attachment MSAA resolve targets.

use gfx_core::GfxConfig;
use gl::types::GLuint;

use crate::api::GlApi;
use crate::resource::GlResource;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlRenderPass {
    pub gl_framebuffer: GLuint,
    /// Resolve framebuffer of each color attachment, 0 if that attachment
    /// is not multisampled.
    pub gl_msaa_resolve_framebuffers: [GLuint; GfxConfig::MAX_NUM_COLOR_ATTACHMENTS],
}

impl GlRenderPass {
    pub fn new(gl_framebuffer: GLuint) -> Self {
        Self {
            gl_framebuffer,
            ..Default::default()
        }
    }

    pub fn set_resolve_framebuffer(&mut self, attachment: usize, framebuffer: GLuint) {
        debug_assert!(attachment < GfxConfig::MAX_NUM_COLOR_ATTACHMENTS);
        self.gl_msaa_resolve_framebuffers[attachment] = framebuffer;
    }

    pub fn resolve_framebuffer(&self, attachment: usize) -> Option<GLuint> {
        self.gl_msaa_resolve_framebuffers
            .get(attachment)
            .copied()
            .filter(|&fb| fb != 0)
    }

    pub fn has_msaa_resolve(&self) -> bool {
        self.gl_msaa_resolve_framebuffers.iter().any(|&fb| fb != 0)
    }
}

impl GlResource for GlRenderPass {
    fn clear(&mut self, gl: &dyn GlApi) {
        if self.gl_framebuffer != 0 {
            gl.delete_framebuffers(&[self.gl_framebuffer]);
        }
        for &fb in self.gl_msaa_resolve_framebuffers.iter().filter(|&&fb| fb != 0) {
            gl.delete_framebuffers(&[fb]);
        }
        *self = Self::default();
    }
}
