use gfx_core::{
    BindTableConfig, PipelineSetup, PrimitiveType, ShaderLayout, ShaderStage, VertexAttr,
    VertexFormat, VertexLayout,
};
use gfx_gl::{
    logging, DeclarativeAttribs, GlMesh, GlPipeline, GlPool, GlResource, GlShader, GlTexture,
    RecordingGl, ShaderBindTable, SlotError, SlottedBuffer, INVALID_LOCATION,
    INVALID_SAMPLER_INDEX,
};

#[test]
fn bind_table_scenario_2_stages_4_blocks_8_uniforms() {
    logging::init_test();
    let config = BindTableConfig {
        num_stages: 2,
        max_uniform_blocks_per_stage: 4,
        max_uniforms_per_block: 8,
        max_textures_per_stage: 8,
    };
    let mut table: ShaderBindTable<DeclarativeAttribs> = ShaderBindTable::new(config);
    table.bind_uniform(ShaderStage::Fragment, 2, 3, 42);

    assert_eq!(config.uniform_index(1, 2, 3), 3 + 2 * 8 + 4 * 8);
    assert_eq!(config.uniform_index(1, 2, 3), 51);
    assert_eq!(table.uniform_location(ShaderStage::Fragment, 2, 3), 42);
    assert_eq!(table.uniform_location(ShaderStage::Fragment, 2, 4), INVALID_LOCATION);
}

#[test]
fn two_slot_texture_clear_releases_each_name_once() {
    logging::init_test();
    let gl = RecordingGl::new();
    let mut tex = GlTexture::new(gl::TEXTURE_2D, 2);
    tex.slots.set_handle(0, 100);
    tex.slots.set_handle(1, 101);
    tex.gl_depth_renderbuffer = 200;
    tex.gl_msaa_renderbuffer = 201;
    tex.slots.rotate(0);

    tex.clear(&gl);
    tex.clear(&gl);

    let calls = gl.calls();
    assert_eq!(calls.deleted_textures, vec![100, 101]);
    assert_eq!(calls.deleted_renderbuffers, vec![200, 201]);
    assert_eq!(calls.release_count(), 4);
    assert_eq!(tex, GlTexture::default());
    assert_eq!(tex.slots.num_slots(), 1);
    assert_eq!(tex.slots.active_slot(), 0);
    assert_eq!(tex.slots.update_frame_index(), -1);
}

#[test]
fn streamed_vertex_buffer_over_several_frames() {
    let mut vb = SlottedBuffer::new(2);
    vb.set_handle(0, 1);
    vb.set_handle(1, 2);

    let mut written = Vec::new();
    for frame in 0..4 {
        written.push(vb.begin_update(frame).unwrap());
        assert!(vb.updated_in_frame(frame));
        assert_eq!(vb.begin_update(frame), Err(SlotError::AlreadyUpdated { frame }));
    }
    assert_eq!(written, vec![2, 1, 2, 1]);

    let mut static_ib = SlottedBuffer::new(1);
    static_ib.set_handle(0, 9);
    assert_eq!(static_ib.begin_update(0), Ok(9));
    assert_eq!(static_ib.begin_update(1), Ok(9));
    assert_eq!(static_ib.active_slot(), 0);
}

#[test]
fn shader_lifecycle_from_link_to_destroy() {
    logging::init_test();
    let gl = RecordingGl::new()
        .with_uniform_block("vsParams", 0, 64)
        .with_uniform("mvp", 0)
        .with_uniform("tex", 1);
    let layout = ShaderLayout::new()
        .uniform_block(ShaderStage::Vertex, 0, "vsParams", &["mvp"])
        .texture(ShaderStage::Fragment, 0, "tex");

    let mut shaders: GlPool<GlShader> = GlPool::new(8);
    let mut shader = GlShader::default();
    shader.gl_program = 77;
    shader.populate(&gl, &layout).unwrap();
    let handle = shaders.alloc(shader).unwrap();

    let shader = shaders.get(handle).unwrap();
    assert_eq!(shader.uniform_block_location(ShaderStage::Vertex, 0), 0);
    assert_eq!(shader.uniform_block_data_size(ShaderStage::Vertex, 0), 64);
    assert_eq!(shader.uniform_location(ShaderStage::Vertex, 0, 0), 0);
    assert_eq!(shader.sampler_index(ShaderStage::Fragment, 0), 0);
    assert_eq!(shader.sampler_index(ShaderStage::Fragment, 1), INVALID_SAMPLER_INDEX);

    assert!(shaders.destroy(handle, &gl));
    assert!(!shaders.destroy(handle, &gl));
    assert!(shaders.get(handle).is_none());
    assert_eq!(gl.calls().deleted_programs, vec![77]);
}

#[test]
fn pools_of_every_resource_release_everything() {
    let gl = RecordingGl::new();

    let mut meshes = GlPool::new(2);
    let mut mesh = GlMesh::default();
    mesh.buffers[GlMesh::VB].set_handle(0, 1);
    mesh.buffers[GlMesh::IB].set_handle(0, 2);
    meshes.alloc(mesh).unwrap();

    let mut pipelines = GlPool::new(2);
    let setup = PipelineSetup::new(
        VertexLayout::new()
            .add(VertexAttr::Position, VertexFormat::Float3)
            .add(VertexAttr::Normal, VertexFormat::Byte4N),
        PrimitiveType::Triangles,
    );
    pipelines.alloc(GlPipeline::from_setup(&setup).unwrap()).unwrap();

    meshes.destroy_all(&gl);
    pipelines.destroy_all(&gl);

    let calls = gl.calls();
    assert_eq!(calls.deleted_buffers, vec![1, 2]);
    assert_eq!(calls.release_count(), 2);
    assert!(meshes.is_empty() && pipelines.is_empty());
}
