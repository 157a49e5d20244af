use crate::camera::{Camera, Viewport};
use crate::constants::{MAX_PIXEL_DENSITY, ORB_COUNT};
use crate::core::{Orb, SceneSurface};
use web_sys as web;

mod sprites;
use sprites::{create_sprite_resources, CameraUniforms, OrbInstance, SpriteResources};

// ===================== WebGPU state =====================

pub struct GpuState {
    canvas: web::HtmlCanvasElement,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    sprites: SpriteResources,
    css_size: Viewport,
    pixel_density: f64,
    instances: Vec<OrbInstance>,
}

impl GpuState {
    pub async fn new(canvas: web::HtmlCanvasElement, pixel_density: f64) -> anyhow::Result<Self> {
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
                    // Default limits keep older WebGPU implementations happy
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8Unorm | wgpu::TextureFormat::Rgba8Unorm
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no texture formats"))?;
        // The page shows through the canvas, so prefer premultiplied output
        let alpha_mode = if caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
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
            "[gpu] adapter ready format={:?} alpha={:?} backing={}x{}",
            format,
            alpha_mode,
            width,
            height
        );

        let sprites = create_sprite_resources(&device, format);

        Ok(Self {
            canvas,
            surface,
            device,
            queue,
            config,
            sprites,
            css_size: Viewport::new(width as f32, height as f32),
            pixel_density: pixel_density.clamp(1.0, MAX_PIXEL_DENSITY),
            instances: Vec::with_capacity(ORB_COUNT),
        })
    }

    fn backing_size(&self) -> (u32, u32) {
        let w = (self.css_size.width as f64 * self.pixel_density) as u32;
        let h = (self.css_size.height as f64 * self.pixel_density) as u32;
        (w.max(1), h.max(1))
    }

    fn reconfigure(&mut self) {
        let (width, height) = self.backing_size();
        if width == self.config.width && height == self.config.height {
            return;
        }
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
    }
}

impl SceneSurface for GpuState {
    fn set_viewport_size(&mut self, viewport: Viewport) {
        if viewport.is_empty() {
            return;
        }
        self.css_size = viewport;
        self.reconfigure();
    }

    fn set_pixel_density(&mut self, ratio: f64) {
        self.pixel_density = ratio.clamp(1.0, MAX_PIXEL_DENSITY);
        self.reconfigure();
    }

    fn draw(&mut self, orbs: &[Orb], camera: &Camera) -> anyhow::Result<()> {
        let frame = match self.surface.get_current_texture() {
            Ok(f) => f,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                // Skip this frame; the next one draws into the fresh swapchain
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.instances.clear();
        self.instances
            .extend(orbs.iter().take(ORB_COUNT).map(OrbInstance::from_orb));
        let cam = CameraUniforms::from_camera(camera);
        self.queue
            .write_buffer(&self.sprites.uniform_buffer, 0, bytemuck::bytes_of(&cam));
        self.queue.write_buffer(
            &self.sprites.instance_buffer,
            0,
            bytemuck::cast_slice(&self.instances),
        );

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("orbs_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.sprites.pipeline);
            rpass.set_bind_group(0, &self.sprites.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.sprites.instance_buffer.slice(..));
            rpass.draw(0..6, 0..self.instances.len() as u32);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
