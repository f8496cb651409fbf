use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use trigon_common::Extent;
use trigon_frame::{FrameContext, FrameLoop, StartClock};
use trigon_input::{Action, Key, KeyState, action_for};
use trigon_render_wgpu::{GpuContext, TriangleRenderer};

#[derive(Parser)]
#[command(name = "trigon-desktop", about = "Trigon desktop application")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Window title
    #[arg(long, default_value = "Trigon")]
    title: String,

    /// Initial window width in pixels
    #[arg(long, default_value = "640")]
    width: u32,

    /// Initial window height in pixels
    #[arg(long, default_value = "480")]
    height: u32,
}

/// Everything created during bring-up, dropped together after the loop.
struct Graphics {
    window: Arc<Window>,
    gpu: GpuContext,
    renderer: TriangleRenderer,
}

/// The live window as the frame loop sees it for one iteration.
struct WindowFrameContext<'a> {
    window: &'a Window,
    clock: &'a StartClock,
    close_requested: bool,
}

impl FrameContext for WindowFrameContext<'_> {
    fn framebuffer_extent(&self) -> Extent {
        let size = self.window.inner_size();
        Extent::new(size.width, size.height)
    }

    fn elapsed_seconds(&self) -> f32 {
        self.clock.elapsed_seconds()
    }

    fn close_requested(&self) -> bool {
        self.close_requested
    }
}

fn translate_key(physical: PhysicalKey, state: ElementState, repeat: bool) -> (Key, KeyState) {
    let key = match physical {
        PhysicalKey::Code(KeyCode::Escape) => Key::Escape,
        _ => Key::Other,
    };
    let key_state = match (state, repeat) {
        (ElementState::Pressed, false) => KeyState::Pressed,
        (ElementState::Pressed, true) => KeyState::Repeated,
        (ElementState::Released, _) => KeyState::Released,
    };
    (key, key_state)
}

struct App {
    cli: Cli,
    graphics: Option<Graphics>,
    frame_loop: FrameLoop,
    clock: StartClock,
    /// Monotonic: raised by the quit key or the window close button,
    /// never lowered.
    close_requested: bool,
    init_error: Option<anyhow::Error>,
}

impl App {
    fn new(cli: Cli) -> Self {
        Self {
            cli,
            graphics: None,
            frame_loop: FrameLoop::new(),
            clock: StartClock::new(),
            close_requested: false,
            init_error: None,
        }
    }

    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.cli.title.clone())
            .with_inner_size(PhysicalSize::new(self.cli.width, self.cli.height));
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );

        let gpu = GpuContext::new(window.clone()).context("failed to initialize GPU")?;
        let renderer = TriangleRenderer::new(gpu.device(), gpu.surface_format());

        // The loop starts only once every resource above exists.
        self.frame_loop.begin();
        self.graphics = Some(Graphics {
            window,
            gpu,
            renderer,
        });
        Ok(())
    }

    fn handle_key(&mut self, physical: PhysicalKey, state: ElementState, repeat: bool) {
        let (key, key_state) = translate_key(physical, state, repeat);
        if action_for(key, key_state) == Action::RequestClose {
            tracing::debug!("close requested by quit key");
            self.close_requested = true;
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(graphics) = &self.graphics else {
            return;
        };

        let ctx = WindowFrameContext {
            window: graphics.window.as_ref(),
            clock: &self.clock,
            close_requested: self.close_requested,
        };

        let Some(frame) = self.frame_loop.next_frame(&ctx) else {
            event_loop.exit();
            return;
        };

        // A zero-sized framebuffer cannot back a surface; the iteration
        // still counted, only the draw is skipped.
        if frame.extent.is_degenerate() {
            graphics.window.request_redraw();
            return;
        }

        let output = match graphics.gpu.acquire_frame() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                graphics.gpu.reconfigure();
                graphics.window.request_redraw();
                return;
            }
            Err(e) => {
                tracing::error!("surface error: {e}");
                graphics.window.request_redraw();
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        graphics
            .renderer
            .render(graphics.gpu.device(), graphics.gpu.queue(), &view, &frame);

        output.present();
        graphics.window.request_redraw();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.graphics.is_some() {
            return;
        }
        if let Err(e) = self.init_graphics(event_loop) {
            tracing::error!("initialization failed: {e:#}");
            self.init_error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::debug!("close requested by window");
                self.close_requested = true;
            }
            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_key(event.physical_key, event.state, event.repeat);
            }
            WindowEvent::Resized(new_size) => {
                if let Some(graphics) = &mut self.graphics {
                    graphics
                        .gpu
                        .resize(Extent::new(new_size.width, new_size.height));
                }
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(graphics) = &self.graphics {
            graphics.window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!("trigon-desktop starting");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(cli);
    event_loop.run_app(&mut app)?;

    if let Some(e) = app.init_error.take() {
        return Err(e);
    }

    tracing::info!(
        frames = app.frame_loop.frames_issued(),
        "trigon-desktop exiting"
    );
    Ok(())
}
