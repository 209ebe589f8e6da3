use std::num::NonZeroU64;
use std::ops::Range;

use bytemuck::{Pod, Zeroable};

use crate::math::Transform;
use crate::paint::Color;
use crate::scene::{DrawCall, Primitive};

use super::{Backend, RenderCtx, RenderTarget};

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// wgpu backend.
///
/// `draw` only collects; [`GpuBackend::flush`] uploads the frame's geometry
/// and records a single render pass into the target. All primitives become
/// triangle lists on the way:
/// - fans are expanded around their first vertex
/// - points are expanded to pixel-sized quads around their transformed center
///
/// Per-draw model/color live in one uniform buffer addressed by dynamic
/// offsets.
#[derive(Default)]
pub struct GpuBackend {
    clear: Color,
    pending: Vec<DrawCall>,

    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    bind_group_layout: Option<wgpu::BindGroupLayout>,

    uniform_buffer: Option<wgpu::Buffer>,
    uniform_bind_group: Option<wgpu::BindGroup>,
    uniform_capacity: usize,
    uniform_stride: u64,

    vertex_buffer: Option<wgpu::Buffer>,
    vertex_capacity: usize,

    depth_size: (u32, u32),
    depth_view: Option<wgpu::TextureView>,
}

impl GpuBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw calls collected since the last `begin_frame`.
    #[inline]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// The scene pass is the only pass touching the frame, so it clears.
    fn color_ops(&self) -> wgpu::Operations<wgpu::Color> {
        let c = self.clear;
        wgpu::Operations {
            load: wgpu::LoadOp::Clear(wgpu::Color {
                r: c.r as f64,
                g: c.g as f64,
                b: c.b as f64,
                a: c.a as f64,
            }),
            store: wgpu::StoreOp::Store,
        }
    }

    /// Records the collected frame into `target`.
    ///
    /// Calls are consumed; flushing twice draws the second time only the
    /// clear.
    pub fn flush(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        self.ensure_pipeline(ctx);
        self.ensure_depth(ctx, target.size);

        let calls = std::mem::take(&mut self.pending);
        let mut vertices: Vec<[f32; 3]> = Vec::new();
        let mut uniforms: Vec<DrawUniform> = Vec::with_capacity(calls.len());
        let mut ranges: Vec<Range<u32>> = Vec::with_capacity(calls.len());

        for call in &calls {
            let (expanded, transform) = triangle_list(call, target.size);
            if expanded.is_empty() {
                continue;
            }
            let start = vertices.len() as u32;
            vertices.extend_from_slice(&expanded);
            ranges.push(start..vertices.len() as u32);
            uniforms.push(DrawUniform {
                model: transform.to_cols_array_2d(),
                color: call.color.clamped().to_array(),
            });
        }

        if !vertices.is_empty() {
            self.ensure_vertex_capacity(ctx, vertices.len());
            self.ensure_uniform_capacity(ctx, uniforms.len());
            self.write_buffers(ctx, &vertices, &uniforms);
        }

        let Some(depth_view) = self.depth_view.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("paintrig scene pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: self.color_ops(),
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        if ranges.is_empty() {
            return;
        }

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.uniform_bind_group.as_ref() else { return };
        let Some(vertex_buffer) = self.vertex_buffer.as_ref() else { return };

        rpass.set_pipeline(pipeline);
        rpass.set_vertex_buffer(0, vertex_buffer.slice(..));
        for (i, range) in ranges.into_iter().enumerate() {
            let offset = (i as u64 * self.uniform_stride) as u32;
            rpass.set_bind_group(0, bind_group, &[offset]);
            rpass.draw(range, 0..1);
        }
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("paintrig solid shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/solid.wgsl").into()),
        });

        let bind_group_layout =
            ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("paintrig draw bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: true,
                        min_binding_size: NonZeroU64::new(DrawUniform::SIZE),
                    },
                    count: None,
                }],
            });

        let pipeline_layout =
            ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("paintrig solid pipeline layout"),
                bind_group_layouts: &[&bind_group_layout],
                immediate_size: 0,
            });

        const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("paintrig solid pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<[f32; 3]>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &ATTRS,
                }],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::LessEqual,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        let align = ctx.device.limits().min_uniform_buffer_offset_alignment.max(1) as u64;
        self.uniform_stride = DrawUniform::SIZE.div_ceil(align) * align;

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);
        self.uniform_buffer = None;
        self.uniform_bind_group = None;
        self.uniform_capacity = 0;
        log::debug!("solid pipeline built for {:?}", ctx.surface_format);
    }

    fn ensure_depth(&mut self, ctx: &RenderCtx<'_>, size: (u32, u32)) {
        let size = (size.0.max(1), size.1.max(1));
        if self.depth_size == size && self.depth_view.is_some() {
            return;
        }

        let texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("paintrig depth"),
            size: wgpu::Extent3d {
                width: size.0,
                height: size.1,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });

        self.depth_view = Some(texture.create_view(&wgpu::TextureViewDescriptor::default()));
        self.depth_size = size;
    }

    fn ensure_vertex_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        if required <= self.vertex_capacity && self.vertex_buffer.is_some() {
            return;
        }
        let new_cap = required.next_power_of_two().max(1024);
        self.vertex_buffer = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("paintrig vertex buffer"),
            size: (new_cap * std::mem::size_of::<[f32; 3]>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.vertex_capacity = new_cap;
    }

    fn ensure_uniform_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        if required <= self.uniform_capacity && self.uniform_bind_group.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let new_cap = required.next_power_of_two().max(64);
        let buffer = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("paintrig draw uniforms"),
            size: new_cap as u64 * self.uniform_stride,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("paintrig draw bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &buffer,
                    offset: 0,
                    size: NonZeroU64::new(DrawUniform::SIZE),
                }),
            }],
        });

        self.uniform_buffer = Some(buffer);
        self.uniform_bind_group = Some(bind_group);
        self.uniform_capacity = new_cap;
    }

    fn write_buffers(&self, ctx: &RenderCtx<'_>, vertices: &[[f32; 3]], uniforms: &[DrawUniform]) {
        if let Some(vbo) = self.vertex_buffer.as_ref() {
            ctx.queue.write_buffer(vbo, 0, bytemuck::cast_slice(vertices));
        }

        let Some(ubo) = self.uniform_buffer.as_ref() else { return };
        let stride = self.uniform_stride as usize;
        let mut bytes = vec![0u8; uniforms.len() * stride];
        for (i, u) in uniforms.iter().enumerate() {
            let at = i * stride;
            bytes[at..at + DrawUniform::SIZE as usize].copy_from_slice(bytemuck::bytes_of(u));
        }
        ctx.queue.write_buffer(ubo, 0, &bytes);
    }
}

impl Backend for GpuBackend {
    fn begin_frame(&mut self, clear: Color) {
        self.clear = clear.clamped();
        self.pending.clear();
    }

    fn draw(&mut self, call: DrawCall) {
        self.pending.push(call);
    }
}

/// Per-draw uniform block (80 bytes):
///
///  offset  0  model  mat4x4<f32>
///  offset 64  color  vec4<f32>
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct DrawUniform {
    model: [[f32; 4]; 4],
    color: [f32; 4],
}

impl DrawUniform {
    const SIZE: u64 = std::mem::size_of::<DrawUniform>() as u64;
}

/// Expands `call` into a triangle list plus the model transform to draw it
/// with. `target` is the physical target size used to size point sprites.
fn triangle_list(call: &DrawCall, target: (u32, u32)) -> (Vec<[f32; 3]>, Transform) {
    match call.primitive {
        Primitive::Triangles => {
            let n = call.vertices.len() / 3 * 3;
            (call.vertices[..n].to_vec(), call.transform)
        }
        Primitive::TriangleFan => {
            let mut out = Vec::with_capacity(call.primitive_count() * 3);
            if let Some((&hub, rim)) = call.vertices.split_first() {
                for pair in rim.windows(2) {
                    out.extend_from_slice(&[hub, pair[0], pair[1]]);
                }
            }
            (out, call.transform)
        }
        Primitive::Points => {
            // Sprites stay screen-aligned, so the transform is baked in here.
            let hx = call.point_size.max(1.0) / target.0.max(1) as f32;
            let hy = call.point_size.max(1.0) / target.1.max(1) as f32;
            let mut out = Vec::with_capacity(call.vertices.len() * 6);
            for &p in &call.vertices {
                let [x, y, z] = call.transform.transform_point(p);
                let (l, r, b, t) = (x - hx, x + hx, y - hy, y + hy);
                out.extend_from_slice(&[
                    [l, b, z], [r, b, z], [r, t, z],
                    [l, b, z], [r, t, z], [l, t, z],
                ]);
            }
            (out, Transform::IDENTITY)
        }
    }
}
