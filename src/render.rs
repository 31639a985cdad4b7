use crate::constants::MSAA_SAMPLES;
use crate::core::color::srgb_hex_to_linear;
use crate::core::{
    CameraRig, ParticleField, PARTICLE_COLOR_HEX, PARTICLE_OPACITY, PARTICLE_POINT_SIZE,
};
use web_sys as web;

mod helpers;
mod points;
mod targets;
use points::{create_points_resources, PointsResources, PointsUniforms};
use targets::RenderTargets;

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    points: PointsResources,
    targets: RenderTargets,
    width: u32,
    height: u32,
    color: [f32; 4],
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        particle_count: usize,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let fallback_format = caps
            .formats
            .first()
            .copied()
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .unwrap_or(fallback_format);
        // Transparent canvas over the page background.
        let alpha_mode = caps
            .alpha_modes
            .iter()
            .copied()
            .find(|m| *m == wgpu::CompositeAlphaMode::PreMultiplied)
            .or_else(|| caps.alpha_modes.first().copied())
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!(
            "[gpu] surface {}x{} format={:?} alpha={:?}",
            width,
            height,
            format,
            alpha_mode
        );

        let points = create_points_resources(&device, format, MSAA_SAMPLES, particle_count);
        let targets = RenderTargets::new(&device, width, height, format, MSAA_SAMPLES);
        let [r, g, b] = srgb_hex_to_linear(PARTICLE_COLOR_HEX);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            points,
            targets,
            width,
            height,
            color: [r, g, b, PARTICLE_OPACITY],
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.targets.recreate(&self.device, width, height);
        }
    }

    pub fn render(
        &mut self,
        field: &ParticleField,
        camera: &CameraRig,
    ) -> Result<(), wgpu::SurfaceError> {
        let count = (field.len() as u32).min(self.points.capacity);
        let u = PointsUniforms {
            view_proj: camera.view_projection().to_cols_array_2d(),
            model: field.model_matrix().to_cols_array_2d(),
            color: self.color,
            resolution: [self.width as f32, self.height as f32],
            point_size: PARTICLE_POINT_SIZE,
            size_scale: self.height as f32 * 0.5,
        };
        self.queue
            .write_buffer(&self.points.uniform_buffer, 0, bytemuck::bytes_of(&u));
        self.queue.write_buffer(
            &self.points.instance_buffer,
            0,
            bytemuck::cast_slice(&field.positions()[..count as usize]),
        );

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("points_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.msaa_view,
                    resolve_target: Some(&view),
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Discard,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.points.pipeline);
            rpass.set_bind_group(0, &self.points.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.points.instance_buffer.slice(..));
            rpass.draw(0..6, 0..count);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
