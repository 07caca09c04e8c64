//! GL mesh: slotted vertex and index buffers.

use crate::api::GlApi;
use crate::resource::GlResource;
use crate::slot::Slots;

/// Native buffer names of one vertex or index buffer.
pub type SlottedBuffer = Slots;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlMesh {
    /// Indexed by [`GlMesh::VB`] and [`GlMesh::IB`].
    pub buffers: [SlottedBuffer; 2],
}

impl GlMesh {
    pub const VB: usize = 0;
    pub const IB: usize = 1;

    pub fn vertex_buffer(&self) -> &SlottedBuffer {
        &self.buffers[Self::VB]
    }

    pub fn index_buffer(&self) -> &SlottedBuffer {
        &self.buffers[Self::IB]
    }
}

impl GlResource for GlMesh {
    fn clear(&mut self, gl: &dyn GlApi) {
        for buffer in &mut self.buffers {
            buffer.clear(|names| gl.delete_buffers(names));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::RecordingGl;

    #[test]
    fn clear_releases_both_buffers_once() {
        let gl = RecordingGl::new();
        let mut mesh = GlMesh::default();
        mesh.buffers[GlMesh::VB] = SlottedBuffer::new(2);
        mesh.buffers[GlMesh::VB].set_handle(0, 1);
        mesh.buffers[GlMesh::VB].set_handle(1, 2);
        mesh.buffers[GlMesh::IB].set_handle(0, 3);

        mesh.clear(&gl);
        mesh.clear(&gl);

        assert_eq!(gl.calls().deleted_buffers, vec![1, 2, 3]);
        assert_eq!(mesh, GlMesh::default());
    }

    #[test]
    fn mesh_without_index_buffer_releases_nothing_for_it() {
        let gl = RecordingGl::new();
        let mut mesh = GlMesh::default();
        mesh.buffers[GlMesh::VB].set_handle(0, 8);
        assert_eq!(mesh.vertex_buffer().active_handle(), 8);
        assert_eq!(mesh.index_buffer().active_handle(), 0);
        mesh.clear(&gl);
        assert_eq!(gl.calls().deleted_buffers, vec![8]);
    }
}
