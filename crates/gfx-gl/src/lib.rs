//! GL resource backend.
//!
//! Wraps native GL names behind engine resources and maps a shader's
//! reflected uniform/sampler/attribute layout onto GL bind locations.
//!
//! # Overview
//!
//! - [`GlApi`] is the seam to the driver: [`RawGl`] calls the loaded `gl`
//!   function pointers, [`RecordingGl`] records calls for headless use.
//! - [`Slots`] rotates streamed resources between native names;
//!   [`GlMesh`] and [`GlTexture`] are built on it.
//! - [`ShaderBindTable`] (alias [`GlShader`]) resolves (stage, slot, item)
//!   to native bind locations through flat arrays, filled by
//!   [`ShaderBindTable::populate`] after link.
//! - [`GlPipeline`] holds per-attribute vertex descriptors and the primitive
//!   topology, [`GlRenderPass`] the framebuffer and MSAA resolve targets.
//! - [`GlResource::clear`] releases native names; [`GlPool`] owns resources
//!   by [`ResourceHandle`](gfx_core::ResourceHandle).
//!
//! All types are used from the thread owning the GL context.

pub mod api;
pub mod attrib;
pub mod logging;
pub mod mesh;
pub mod pipeline;
pub mod populate;
pub mod raw;
pub mod recording;
pub mod render_pass;
pub mod resource;
pub mod shader;
pub mod slot;
pub mod texture;
pub mod vertex_attr;

// Re-export primary types at crate root for convenience.
pub use api::GlApi;
pub use attrib::{AttribBinding, DeclarativeAttribs, DefaultAttribs, QueriedAttribs};
pub use mesh::{GlMesh, SlottedBuffer};
pub use pipeline::GlPipeline;
pub use populate::PopulateStats;
pub use raw::RawGl;
pub use recording::{GlCalls, RecordingGl};
pub use render_pass::GlRenderPass;
pub use resource::{GlPool, GlResource};
pub use shader::{
    GlShader, ShaderBindTable, UniformBlockInfo, INVALID_LOCATION, INVALID_SAMPLER_INDEX,
};
pub use slot::{SlotError, Slots, MAX_NUM_SLOTS};
pub use texture::GlTexture;
pub use vertex_attr::GlVertexAttr;
