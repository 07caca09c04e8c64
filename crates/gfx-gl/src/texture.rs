//! GL texture: slotted texture names plus optional renderbuffers.

use gl::types::{GLenum, GLuint};

use crate::api::GlApi;
use crate::resource::GlResource;
use crate::slot::Slots;

/// Texture names of one logical texture.
///
/// Render-target textures may additionally own a depth renderbuffer and a
/// multisample renderbuffer; 0 means not allocated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlTexture {
    pub gl_target: GLenum,
    pub gl_depth_renderbuffer: GLuint,
    pub gl_msaa_renderbuffer: GLuint,
    pub slots: Slots,
}

impl GlTexture {
    pub fn new(gl_target: GLenum, num_slots: u8) -> Self {
        Self {
            gl_target,
            slots: Slots::new(num_slots),
            ..Default::default()
        }
    }

    /// The texture name the draw path binds.
    pub fn active_texture(&self) -> GLuint {
        self.slots.active_handle()
    }
}

impl GlResource for GlTexture {
    fn clear(&mut self, gl: &dyn GlApi) {
        self.slots.clear(|names| gl.delete_textures(names));
        let renderbuffers = [self.gl_depth_renderbuffer, self.gl_msaa_renderbuffer];
        for rb in renderbuffers.into_iter().filter(|&rb| rb != 0) {
            gl.delete_renderbuffers(&[rb]);
        }
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::RecordingGl;

    #[test]
    fn clear_without_renderbuffers() {
        let gl = RecordingGl::new();
        let mut tex = GlTexture::new(gl::TEXTURE_2D, 1);
        tex.slots.set_handle(0, 7);
        assert_eq!(tex.active_texture(), 7);

        tex.clear(&gl);
        let calls = gl.calls();
        assert_eq!(calls.deleted_textures, vec![7]);
        assert!(calls.deleted_renderbuffers.is_empty());
        assert_eq!(tex.gl_target, 0);
    }

    #[test]
    fn streamed_texture_rotates_between_names() {
        let mut tex = GlTexture::new(gl::TEXTURE_2D, 2);
        tex.slots.set_handle(0, 20);
        tex.slots.set_handle(1, 21);
        assert_eq!(tex.slots.begin_update(0), Ok(21));
        assert_eq!(tex.active_texture(), 21);
        assert_eq!(tex.slots.begin_update(1), Ok(20));
    }
}
