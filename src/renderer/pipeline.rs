//! WebGPU render pipeline for the wireframe sphere

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use super::camera::Camera;
use super::sphere::WireMesh;
use super::vertex::Vertex;
use crate::error::DemoError;
use crate::motion::SpherePose;
use crate::scene::SceneConfig;

// ============================================================================
// GPU DATA STRUCTURES (must match shader)
// ============================================================================

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct Uniforms {
    view_proj: [[f32; 4]; 4], // offset 0
    model: [[f32; 4]; 4],     // offset 64
    color: [f32; 4],          // offset 128
    emissive: [f32; 4],       // offset 144
    specular: [f32; 4],       // offset 160
    light_dir: [f32; 4],      // offset 176 - xyz toward light, w intensity
    light_color: [f32; 4],    // offset 192
    camera_pos: [f32; 4],     // offset 208 - w shininess
    flags: [u32; 4],          // offset 224 - x lit
}

impl Uniforms {
    fn build(camera: &Camera, pose: &SpherePose, scene: &SceneConfig) -> Self {
        let material = &scene.material;
        let (light_dir, light_color) = match scene.light {
            Some(light) => {
                let dir = light.position.normalize_or_zero();
                ([dir.x, dir.y, dir.z, light.intensity], light.color)
            }
            None => ([0.0, 0.0, 1.0, 0.0], [0.0; 4]),
        };
        let eye = camera.position;

        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            model: pose.model_matrix().to_cols_array_2d(),
            color: material.color,
            emissive: material.emissive,
            specular: material.specular,
            light_dir,
            light_color,
            camera_pos: [eye.x, eye.y, eye.z, material.shininess],
            flags: [u32::from(material.lit && scene.light.is_some()), 0, 0, 0],
        }
    }
}

// ============================================================================
// SPHERE RENDER STATE
// ============================================================================

pub struct SphereRenderState {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub pipeline: wgpu::RenderPipeline,

    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,

    /// Surface size in physical pixels
    pub size: (u32, u32),
}

impl SphereRenderState {
    pub async fn new(
        surface: wgpu::Surface<'static>,
        adapter: &wgpu::Adapter,
        width: u32,
        height: u32,
        mesh: &WireMesh,
    ) -> Result<Self, DemoError> {
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("sphere-device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_webgl2_defaults(),
                memory_hints: Default::default(),
                trace: Default::default(),
                experimental_features: Default::default(),
            })
            .await?;

        let surface_caps = surface.get_capabilities(adapter);
        log::info!("Surface formats: {:?}", surface_caps.formats);

        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);
        log::info!("Using surface format: {:?}", surface_format);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width,
            height,
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("sphere_shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("sphere_shader.wgsl").into()),
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("uniforms"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("sphere_bind_group_layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("sphere_bind_group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("sphere_pipeline_layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("sphere_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        let (vertex_buffer, index_buffer) = Self::create_mesh_buffers(&device, mesh);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            vertex_buffer,
            index_buffer,
            index_count: mesh.index_count(),
            uniform_buffer,
            bind_group,
            size: (width, height),
        })
    }

    fn create_mesh_buffers(device: &wgpu::Device, mesh: &WireMesh) -> (wgpu::Buffer, wgpu::Buffer) {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("sphere_vertices"),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("sphere_indices"),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        (vertex_buffer, index_buffer)
    }

    /// Replace the sphere geometry (preset switch)
    pub fn set_mesh(&mut self, mesh: &WireMesh) {
        let (vertex_buffer, index_buffer) = Self::create_mesh_buffers(&self.device, mesh);
        self.vertex_buffer = vertex_buffer;
        self.index_buffer = index_buffer;
        self.index_count = mesh.index_count();
    }

    pub fn resize(&mut self, new_width: u32, new_height: u32) {
        if new_width > 0 && new_height > 0 {
            self.size = (new_width, new_height);
            self.config.width = new_width;
            self.config.height = new_height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Upload the frame's uniforms and draw the sphere
    pub fn render(
        &mut self,
        camera: &Camera,
        pose: &SpherePose,
        scene: &SceneConfig,
    ) -> Result<(), wgpu::SurfaceError> {
        let uniforms = Uniforms::build(camera, pose, scene);
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("sphere_encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("sphere_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(scene.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            render_pass.set_pipeline(&self.pipeline);
            render_pass.set_bind_group(0, &self.bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            render_pass.draw_indexed(0..self.index_count, 0, 0..1);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Projection;
    use glam::Vec2;

    #[test]
    fn test_uniform_layout() {
        assert_eq!(std::mem::size_of::<Uniforms>(), 240);
        assert_eq!(std::mem::size_of::<Uniforms>() % 16, 0);
    }

    #[test]
    fn test_uniforms_from_tracking_scene() {
        let scene = SceneConfig::tracking();
        let camera = Camera::new(Projection::Orthographic { divisor: 3.0 }, 100.0, 900.0, 600.0);
        let pose = SpherePose {
            position: Vec2::new(12.0, -3.0),
            ..Default::default()
        };
        let u = Uniforms::build(&camera, &pose, &scene);
        assert_eq!(u.flags[0], 1);
        assert_eq!(u.model[3][0], 12.0);
        assert_eq!(u.model[3][1], -3.0);
        assert_eq!(u.model[3][2], 0.0);
        assert!((u.camera_pos[2] - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_basic_scene_is_unlit() {
        let scene = SceneConfig::basic();
        let camera = Camera::for_scene(&scene, 800.0, 600.0);
        let u = Uniforms::build(&camera, &SpherePose::default(), &scene);
        assert_eq!(u.flags[0], 0);
        assert_eq!(u.light_dir[3], 0.0);
    }
}
