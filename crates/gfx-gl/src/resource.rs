//! Shared capability of GL resources and the pool that owns them.

use gfx_core::{ResourceHandle, ResourcePool};
use tracing::debug;

use crate::api::GlApi;

/// A backend resource wrapping native GL names.
///
/// `clear` releases every non-zero name exactly once and resets the value to
/// its default. Calling it on an already cleared value does nothing.
pub trait GlResource {
    fn clear(&mut self, gl: &dyn GlApi);
}

/// [`ResourcePool`] of GL resources that clears values on destroy.
pub struct GlPool<T: GlResource> {
    pool: ResourcePool<T>,
}

impl<T: GlResource> GlPool<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            pool: ResourcePool::new(capacity),
        }
    }

    pub fn alloc(&mut self, resource: T) -> Option<ResourceHandle> {
        self.pool.alloc(resource)
    }

    pub fn get(&self, handle: ResourceHandle) -> Option<&T> {
        self.pool.get(handle)
    }

    pub fn get_mut(&mut self, handle: ResourceHandle) -> Option<&mut T> {
        self.pool.get_mut(handle)
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    /// Release the native names behind `handle` and free its slot.
    ///
    /// Returns `false` for stale handles, which release nothing.
    pub fn destroy(&mut self, handle: ResourceHandle, gl: &dyn GlApi) -> bool {
        match self.pool.free(handle) {
            Some(mut resource) => {
                resource.clear(gl);
                true
            }
            None => false,
        }
    }

    /// Destroy every live resource.
    pub fn destroy_all(&mut self, gl: &dyn GlApi) {
        let handles: Vec<_> = self.pool.handles().collect();
        debug!(count = handles.len(), "destroying all pooled GL resources");
        for handle in handles {
            self.destroy(handle, gl);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::RecordingGl;
    use crate::render_pass::GlRenderPass;

    #[test]
    fn destroy_releases_once_per_handle() {
        let gl = RecordingGl::new();
        let mut pool = GlPool::new(4);
        let pass = pool.alloc(GlRenderPass::new(3)).unwrap();

        assert!(pool.destroy(pass, &gl));
        assert!(!pool.destroy(pass, &gl));
        assert_eq!(gl.calls().deleted_framebuffers, vec![3]);
        assert!(pool.is_empty());
    }

    #[test]
    fn destroy_all_empties_pool() {
        let gl = RecordingGl::new();
        let mut pool = GlPool::new(4);
        pool.alloc(GlRenderPass::new(1)).unwrap();
        pool.alloc(GlRenderPass::new(2)).unwrap();
        pool.destroy_all(&gl);
        assert_eq!(pool.len(), 0);
        assert_eq!(gl.calls().deleted_framebuffers.len(), 2);
    }
}
