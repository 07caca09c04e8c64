//! Backend-neutral graphics vocabulary.
//!
//! This crate holds what every graphics backend shares: the engine limits in
//! [`GfxConfig`], the stage/attribute/format enums, vertex layouts and
//! pipeline setup, the bind requests produced by shader reflection, and the
//! generation-checked [`ResourcePool`] keyed by [`ResourceHandle`].
//!
//! Native objects live in the backend crates (see `gfx-gl`).

pub mod config;
pub mod pool;
pub mod reflect;
pub mod types;
pub mod vertex;

pub use config::{BindTableConfig, GfxConfig};
pub use pool::{ResourceHandle, ResourcePool};
pub use reflect::{ShaderLayout, TextureDesc, UniformBlockDesc, UniformDesc};
pub use types::{PrimitiveType, ShaderStage, VertexAttr, VertexFormat, VertexStep};
pub use vertex::{PipelineSetup, VertexComponent, VertexLayout};
