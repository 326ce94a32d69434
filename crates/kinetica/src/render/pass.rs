//! Frame submission.
//!
//! Records a clear pass for the frame. The draw list is collected every frame
//! so the scene side is exercised, but mesh pipelines aren't built yet and no
//! draw calls are issued.

use super::collect::DrawItem;
use super::gpu::GpuContext;

/// Background color of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClearColor(pub [f64; 4]);

impl Default for ClearColor {
    fn default() -> Self {
        Self([1.0, 1.0, 1.0, 1.0])
    }
}

impl From<ClearColor> for wgpu::Color {
    fn from(color: ClearColor) -> Self {
        let [r, g, b, a] = color.0;
        Self { r, g, b, a }
    }
}

/// Render a single frame.
pub fn render_frame(
    gpu: &GpuContext,
    clear_color: ClearColor,
    draw_list: &[DrawItem<'_>],
) -> Result<(), wgpu::SurfaceError> {
    let output = gpu.surface.get_current_texture()?;
    let view = output
        .texture
        .create_view(&wgpu::TextureViewDescriptor::default());
    let mut encoder = gpu
        .device
        .create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("kinetica frame encoder"),
        });

    {
        let _render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("clear pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear_color.into()),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
    }

    log::trace!("frame: {} drawable entities", draw_list.len());

    gpu.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_clear_color_is_white() {
        let color: wgpu::Color = ClearColor::default().into();
        assert_eq!(color, wgpu::Color::WHITE);
    }
}
