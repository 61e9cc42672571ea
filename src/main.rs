use glow::HasContext;
use glutin::config::ConfigTemplateBuilder;
use glutin::context::{ ContextApi, ContextAttributesBuilder, GlProfile, Version };
use glutin::display::GetGlDisplay;
use glutin::prelude::*;
use glutin::surface::{ SurfaceAttributesBuilder, SwapInterval, WindowSurface };
use glutin_winit::DisplayBuilder;
use raw_window_handle::HasWindowHandle;
use std::num::NonZeroU32;
use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ ActiveEventLoop, EventLoop };
use winit::window::{ Window, WindowId };

use hello_cube::engine::error::{ EngineError, SurfaceError };
use hello_cube::engine::logging::init_logging;
use hello_cube::engine::systems::KeyboardInputSystem;
use hello_cube::engine::AppConfig;
use hello_cube::Program;

struct App {
    config: AppConfig,
    window: Option<Window>,
    gl_context: Option<glutin::context::PossiblyCurrentContext>,
    gl_surface: Option<glutin::surface::Surface<WindowSurface>>,
    program: Option<Program<glow::Context>>,
    input: KeyboardInputSystem,
    start_time: Instant,
    error: Option<anyhow::Error>,
}

impl App {
    fn new(config: AppConfig) -> Self {
        Self {
            config,
            window: None,
            gl_context: None,
            gl_surface: None,
            program: None,
            input: KeyboardInputSystem::new(),
            start_time: Instant::now(),
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: impl Into<anyhow::Error>) {
        let error = error.into();
        log::error!("{:#}", error);
        self.error = Some(error);
        event_loop.exit();
    }

    fn init_display(&mut self, event_loop: &ActiveEventLoop) -> Result<(), EngineError> {
        let window_attributes = Window::default_attributes()
            .with_title(self.config.window.title.clone())
            .with_inner_size(PhysicalSize::new(self.config.window.width, self.config.window.height));

        let template = ConfigTemplateBuilder::new().with_depth_size(24);
        let display_builder = DisplayBuilder::new().with_window_attributes(Some(window_attributes));
        let (window, gl_config) = display_builder
            .build(event_loop, template, |mut configs| {
                configs.next().expect("display offered no GL configs")
            })
            .map_err(|e| SurfaceError::Context(e.to_string()))?;
        let window = window.ok_or_else(|| SurfaceError::Window("no window was created".to_string()))?;

        let raw_window_handle = window
            .window_handle()
            .map_err(|e| SurfaceError::Window(e.to_string()))?
            .as_raw();

        let display = gl_config.display();
        let ctx_attrs = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
            .with_profile(GlProfile::Core)
            .build(Some(raw_window_handle));

        let not_current = unsafe { display.create_context(&gl_config, &ctx_attrs) }.map_err(|e|
            SurfaceError::Context(e.to_string())
        )?;

        let size = window.inner_size();
        let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
            return Err(SurfaceError::Size { width: size.width, height: size.height }.into());
        };
        let attrs = SurfaceAttributesBuilder::<WindowSurface>
            ::new()
            .build(raw_window_handle, width, height);
        let surface = unsafe { display.create_window_surface(&gl_config, &attrs) }.map_err(|e|
            SurfaceError::Context(e.to_string())
        )?;
        let ctx = not_current.make_current(&surface).map_err(|e| SurfaceError::Context(e.to_string()))?;

        if self.config.vsync {
            if let Err(e) = surface.set_swap_interval(&ctx, SwapInterval::Wait(NonZeroU32::MIN)) {
                log::warn!("could not enable vsync: {}", e);
            }
        }

        let gl = unsafe {
            glow::Context::from_loader_function_cstr(|s| display.get_proc_address(s))
        };
        unsafe {
            log::info!("GL version: {}", gl.get_parameter_string(glow::VERSION));
            log::info!("GL renderer: {}", gl.get_parameter_string(glow::RENDERER));
        }

        let program = Program::new(gl, &self.config, self.start_time.elapsed().as_secs_f64())?;

        window.request_redraw();

        self.window = Some(window);
        self.gl_context = Some(ctx);
        self.gl_surface = Some(surface);
        self.program = Some(program);
        Ok(())
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.error.is_some() {
            return;
        }

        if let Err(e) = self.init_display(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::RedrawRequested => {
                let (Some(window), Some(surface), Some(ctx), Some(program)) = (
                    &self.window,
                    &self.gl_surface,
                    &self.gl_context,
                    &mut self.program,
                ) else {
                    return;
                };

                let size = window.inner_size();
                let now = self.start_time.elapsed().as_secs_f64();
                let result = program.render(self.input.pressed_keys(), size.width, size.height, now);
                if let Err(e) = result {
                    self.fail(event_loop, EngineError::from(e));
                    return;
                }

                // Blocks on vertical sync when the swap interval is set.
                if let Err(e) = surface.swap_buffers(ctx) {
                    self.fail(event_loop, SurfaceError::Context(e.to_string()));
                    return;
                }

                window.request_redraw();
            }

            WindowEvent::Resized(size) => {
                if let (Some(surface), Some(ctx)) = (&self.gl_surface, &self.gl_context) {
                    if let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) {
                        surface.resize(ctx, w, h);
                    }
                }
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            WindowEvent::Focused(focused) => self.input.focus_changed(focused),

            WindowEvent::KeyboardInput { event, .. } => {
                self.input.receive_key_event(&event);
            }

            _ => {}
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Some(p) = self.program.take() {
            p.cleanup();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load(std::env::args().nth(1))?;
    init_logging(config.log_filter.as_deref());

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    if let Some(e) = app.error.take() {
        return Err(e);
    }
    Ok(())
}
