//! Demo builder and winit application wiring.
//!
//! [`SwarmDemo`] is the configuration surface; [`SwarmDemo::run`] spawns the
//! particle store, enters the event loop, and drives one
//! `advance_frame`/render pair per `RedrawRequested`.

use std::sync::Arc;

use log::{debug, error, info};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::error::DemoError;
use crate::geometry::SphereMesh;
use crate::gpu::GpuState;
use crate::instance::InstanceBuffer;
use crate::particle::ParticleStore;
use crate::pointer::PointerTracker;
use crate::swarm::Swarm;
use crate::time::FrameTimer;

/// Cursor-following swarm demo.
///
/// Use method chaining to configure, then call `.run()` to start:
///
/// ```no_run
/// use murmur::SwarmDemo;
///
/// SwarmDemo::new()
///     .with_particle_count(150)
///     .run()
///     .unwrap();
/// ```
pub struct SwarmDemo {
    particle_count: u32,
    window_size: (u32, u32),
    title: String,
}

impl SwarmDemo {
    /// Create a demo with default settings: 150 particles, 1280x720 window.
    pub fn new() -> Self {
        Self {
            particle_count: 150,
            window_size: (1280, 720),
            title: "murmur".to_string(),
        }
    }

    /// Set the number of swarm particles.
    pub fn with_particle_count(mut self, count: u32) -> Self {
        self.particle_count = count;
        self
    }

    /// Set the logical window size.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window_size = (width, height);
        self
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Run the demo. Blocks until the window is closed.
    pub fn run(self) -> Result<(), DemoError> {
        info!("starting swarm with {} particles", self.particle_count);

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(self);
        event_loop.run_app(&mut app)?;

        // Init failures inside `resumed` land here once the loop exits.
        match app.init_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Default for SwarmDemo {
    fn default() -> Self {
        Self::new()
    }
}

struct App {
    config: SwarmDemo,
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    swarm: Swarm,
    instances: InstanceBuffer,
    pointer: PointerTracker,
    timer: FrameTimer,
    init_error: Option<DemoError>,
}

impl App {
    fn new(config: SwarmDemo) -> Self {
        let store = ParticleStore::spawn(config.particle_count);
        let instances = InstanceBuffer::new(config.particle_count);
        let pointer = PointerTracker::new(config.window_size.0, config.window_size.1);

        Self {
            config,
            window: None,
            gpu: None,
            swarm: Swarm::new(store),
            instances,
            pointer,
            timer: FrameTimer::new(),
            init_error: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), DemoError> {
        let (width, height) = self.config.window_size;
        let window_attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(width, height));

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        self.window = Some(window.clone());

        let size = window.inner_size();
        self.pointer.set_window_size(size.width, size.height);

        let mesh = SphereMesh::unit();
        let gpu = pollster::block_on(GpuState::new(window, &mesh, &self.instances))?;
        self.gpu = Some(gpu);

        info!("GPU initialized, entering render loop");
        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        self.timer.update();
        self.swarm
            .advance_frame(self.pointer.position(), &mut self.instances);

        if let Some(gpu) = &mut self.gpu {
            match gpu.render(&mut self.instances) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost) => {
                    let size = winit::dpi::PhysicalSize {
                        width: gpu.config.width,
                        height: gpu.config.height,
                    };
                    gpu.resize(size);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    error!("surface out of memory, exiting");
                    event_loop.exit();
                }
                Err(e) => error!("render error: {:?}", e),
            }
        }

        if self.timer.frame() % 300 == 0 {
            debug!("frame {} at {:.1} fps", self.timer.frame(), self.timer.fps());
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init(event_loop) {
                error!("initialization failed: {}", e);
                self.init_error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        self.pointer.handle_event(&event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(physical_size);
                }
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }
            _ => {}
        }
    }
}
