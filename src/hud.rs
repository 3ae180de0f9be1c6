use winit::event::WindowEvent;
use winit::window::Window;

use crate::scene::SceneState;

/// Numbers shown in the overlay
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudStats {
    pub fps: f32,
    pub position: [f32; 3],
    pub yaw: f32,
    pub pitch: f32,
    pub zoom: f32,
}

impl HudStats {
    pub fn new(scene: &SceneState, fps: f32) -> Self {
        let camera = &scene.camera;
        Self {
            fps,
            position: camera.position.to_array(),
            yaw: camera.yaw(),
            pitch: camera.pitch(),
            zoom: camera.zoom(),
        }
    }

    pub fn camera_line(&self) -> String {
        let [x, y, z] = self.position;
        format!(
            "eye ({x:.2}, {y:.2}, {z:.2})  yaw {:.1}°  pitch {:.1}°  fov {:.1}°",
            self.yaw, self.pitch, self.zoom
        )
    }
}

/// egui overlay drawn on top of the scene
pub struct Hud {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

impl Hud {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat, window: &Window) -> Self {
        let ctx = egui::Context::default();
        let state = egui_winit::State::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let renderer = egui_wgpu::Renderer::new(device, format, egui_wgpu::RendererOptions::default());

        Self { ctx, state, renderer }
    }

    /// Returns true when egui consumed the event
    pub fn handle_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        self.state.on_window_event(window, event).consumed
    }

    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        target: &wgpu::TextureView,
        window: &Window,
        size_in_pixels: [u32; 2],
        stats: &HudStats,
    ) {
        let raw_input = self.state.take_egui_input(window);
        let full_output = self.ctx.run(raw_input, |ctx| {
            egui::Window::new("HUD")
                .title_bar(false)
                .resizable(false)
                .fixed_pos(egui::pos2(10.0, 10.0))
                .frame(egui::Frame::NONE)
                .show(ctx, |ui| {
                    ui.label(
                        egui::RichText::new(format!("{:.0}", stats.fps))
                            .size(48.0)
                            .color(egui::Color32::from_rgb(74, 158, 255)),
                    );
                    ui.label(
                        egui::RichText::new("FPS")
                            .size(12.0)
                            .color(egui::Color32::GRAY),
                    );
                    ui.label(
                        egui::RichText::new(stats.camera_line())
                            .size(12.0)
                            .color(egui::Color32::LIGHT_GRAY),
                    );
                });
        });

        self.state
            .handle_platform_output(window, full_output.platform_output);

        let tris = self
            .ctx
            .tessellate(full_output.shapes, self.ctx.pixels_per_point());
        for (id, image_delta) in &full_output.textures_delta.set {
            self.renderer.update_texture(device, queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels,
            pixels_per_point: window.scale_factor() as f32,
        };
        self.renderer
            .update_buffers(device, queue, encoder, &tris, &screen_descriptor);

        {
            let mut render_pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("HUD Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                        depth_slice: None,
                    })],
                    depth_stencil_attachment: None,
                    occlusion_query_set: None,
                    timestamp_writes: None,
                })
                .forget_lifetime();

            self.renderer.render(&mut render_pass, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.renderer.free_texture(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_follow_camera() {
        let scene = SceneState::default();
        let stats = HudStats::new(&scene, 60.0);
        assert_eq!(stats.position, [0.0, 0.0, 3.0]);
        assert_eq!(stats.yaw, -90.0);
        assert_eq!(stats.zoom, 45.0);
        assert!(stats.camera_line().contains("(0.00, 0.00, 3.00)"));
    }
}
