use std::sync::Arc;

use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use prism_viewer::cli::Cli;
use prism_viewer::config::Settings;
use prism_viewer::frame::{FpsCounter, FrameTimer};
use prism_viewer::input::InputState;
use prism_viewer::renderer::Renderer;
use prism_viewer::scene::SceneState;

struct App {
    settings: Settings,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    scene: SceneState,
    input: InputState,
    timer: FrameTimer,
    fps: FpsCounter,
}

impl App {
    fn new(settings: Settings) -> Self {
        Self {
            scene: settings.build_scene(),
            timer: FrameTimer::new(settings.fixed_step),
            window: None,
            renderer: None,
            input: InputState::new(),
            fps: FpsCounter::new(),
            settings,
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let frame = self.timer.tick();
        if let Some(fps) = self.fps.update(frame.delta) {
            log::debug!("FPS: {:.1}", fps);
        }

        let input = self.input.snapshot();
        if input.wants_quit() {
            event_loop.exit();
            return;
        }
        self.scene.apply(&input, frame.delta);
        self.input.reset_deltas();

        let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) else {
            return;
        };
        match renderer.render(&self.scene, window, self.fps.fps()) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Surface out of memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title(self.settings.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.settings.window.width,
                self.settings.window.height,
            ));
        let window = match event_loop.create_window(attributes) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let renderer = match pollster::block_on(Renderer::new(window.clone(), self.settings.show_hud)) {
            Ok(r) => r,
            Err(e) => {
                log::error!("Failed to initialize renderer: {:#}", e);
                event_loop.exit();
                return;
            }
        };

        self.window = Some(window);
        self.renderer = Some(renderer);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            if renderer.handle_event(window, &event) {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            other => self.input.process_event(&other),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let settings = Settings::resolve(&cli)?;
    log::debug!("Settings: {:?}", settings);

    let event_loop = EventLoop::new()?;
    let mut app = App::new(settings);

    log::info!(
        "Controls: 1/2/3 rotate, WASDQE move model, M/N/B/V/C/X fly camera, \
         drag to look, scroll to zoom, Escape to quit"
    );
    event_loop.run_app(&mut app)?;

    Ok(())
}
