//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - The instanced scene pipeline
//! - Frame rendering from a snapshot

use std::sync::Arc;
use winit::window::Window;
use aerofire_core::RenderSnapshot;
use aerofire_render::{
    camera::ChaseCamera,
    context::{ContextError, RenderContext},
    pipeline::{ScenePipeline, SceneUniforms},
    Checkerboard, Palette, SceneInstances,
};
use crate::config::{CameraConfig, RenderingConfig};

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// GPU setup failed
    Context(ContextError),
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Context(e) => write!(f, "GPU setup failed: {}", e),
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<ContextError> for RenderError {
    fn from(e: ContextError) -> Self {
        RenderError::Context(e)
    }
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    scene_pipeline: ScenePipeline,
    camera: ChaseCamera,
    render_config: RenderingConfig,
    palette: Palette,
    ground: Checkerboard,
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(
        window: Arc<Window>,
        render_config: RenderingConfig,
        camera_config: &CameraConfig,
        vsync: bool,
    ) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;

        let mut scene_pipeline = ScenePipeline::new(&context.device, context.config.format);

        // Ensure depth texture exists
        scene_pipeline.ensure_depth_texture(
            &context.device,
            context.config.width,
            context.config.height,
        );

        Ok(Self {
            context,
            scene_pipeline,
            camera: ChaseCamera::new(camera_config.fov, camera_config.near, camera_config.far),
            render_config,
            palette: Palette::default(),
            ground: Checkerboard::default(),
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
        self.scene_pipeline.ensure_depth_texture(
            &self.context.device,
            self.context.config.width,
            self.context.config.height,
        );
    }

    /// Reconfigure after the surface was lost
    pub fn recover(&mut self) {
        self.context.reconfigure();
    }

    /// Render a single frame
    pub fn render_frame(&mut self, snapshot: &RenderSnapshot) -> Result<(), RenderError> {
        let ground = self.render_config.show_ground.then_some(&self.ground);
        let scene = SceneInstances::from_snapshot(snapshot, &self.palette, ground);
        self.scene_pipeline
            .upload_instances(&self.context.queue, &scene.instances);

        let uniforms = SceneUniforms {
            view_projection: self
                .camera
                .view_projection(&snapshot.camera, self.context.aspect_ratio()),
            light_dir: self.render_config.light_dir,
            ambient_strength: self.render_config.ambient_strength,
            diffuse_strength: self.render_config.diffuse_strength,
            _padding: [0.0; 3],
        };
        self.scene_pipeline
            .update_uniforms(&self.context.queue, &uniforms);

        // Get surface texture
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                return Err(RenderError::SurfaceLost)
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        let bg = self.render_config.background_for(snapshot.variant);
        self.scene_pipeline.render(
            &mut encoder,
            &view,
            wgpu::Color {
                r: bg[0] as f64,
                g: bg[1] as f64,
                b: bg[2] as f64,
                a: bg[3] as f64,
            },
        );

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_display() {
        assert_eq!(format!("{}", RenderError::SurfaceLost), "Surface lost");
        assert_eq!(format!("{}", RenderError::OutOfMemory), "Out of memory");
        assert_eq!(
            format!("{}", RenderError::Other("test".to_string())),
            "Render error: test"
        );
        assert_eq!(
            RenderError::from(ContextError::NoAdapter).to_string(),
            "GPU setup failed: No suitable GPU adapter found"
        );
    }
}
