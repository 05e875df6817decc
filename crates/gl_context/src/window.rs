//! GLFW window and OpenGL context management
//!
//! OpenGL knows nothing about windows or user input, so GLFW creates the
//! window whose surface backs the context. A [`Window`] owns the GLFW
//! library handle, the window with its context, and the receiver for the
//! window's events. Dropping it destroys the window and, once the last GLFW
//! handle is gone, terminates the library.

use glfw::{Context, WindowEvent};
use thiserror::Error;

use crate::settings::{ContextConfig, EventMode, WindowConfig};

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// GLFW could not be initialized
    #[error("GLFW initialization failed: {0}")]
    InitializationFailed(String),

    /// GLFW refused to create the window or its context
    #[error("Window creation failed for {width}x{height} \"{title}\"")]
    CreationFailed {
        /// Requested title
        title: String,
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },
}

/// Result alias for window operations
pub type WindowResult<T> = Result<T, WindowError>;

fn log_glfw_error(error: glfw::Error, description: String) {
    log::error!("GLFW error {error:?}: {description}");
}

/// GLFW window wrapper with a current OpenGL context
pub struct Window {
    // Declared before `glfw` so the window is destroyed before the library handle drops
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, WindowEvent)>,
    glfw: glfw::Glfw,
    title: String,
}

impl Window {
    /// Initialize GLFW, apply the hints and create a window with a current context
    pub fn new(window_config: &WindowConfig, context_config: &ContextConfig) -> WindowResult<Self> {
        let mut glfw = glfw::init(log_glfw_error)
            .map_err(|e| WindowError::InitializationFailed(e.to_string()))?;
        log::debug!("GLFW {} initialized", glfw::get_version_string());

        // Hints persist between window creations, start from a clean slate
        glfw.default_window_hints();
        for hint in context_config
            .window_hints()
            .into_iter()
            .chain(window_config.window_hints())
        {
            log::trace!("Window hint {hint:?}");
            glfw.window_hint(hint);
        }

        let (mut window, events) = glfw
            .create_window(
                window_config.width,
                window_config.height,
                &window_config.title,
                glfw::WindowMode::Windowed,
            )
            .ok_or_else(|| WindowError::CreationFailed {
                title: window_config.title.clone(),
                width: window_config.width,
                height: window_config.height,
            })?;

        window.make_current();
        window.set_close_polling(true);

        let (major, minor) = context_config.version;
        log::info!(
            "Created {}x{} window \"{}\" with OpenGL {major}.{minor} {:?} context",
            window_config.width,
            window_config.height,
            window_config.title,
            context_config.profile,
        );

        Ok(Self {
            window,
            events,
            glfw,
            title: window_config.title.clone(),
        })
    }

    /// Whether the window has been asked to close
    pub fn should_close(&self) -> bool {
        self.window.should_close()
    }

    /// Request or cancel closing of the window
    pub fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    /// Process pending events without blocking
    pub fn poll_events(&mut self) {
        self.glfw.poll_events();
    }

    /// Block until at least one event is pending, then process it
    pub fn wait_events(&mut self) {
        self.glfw.wait_events();
    }

    /// Drain the events received since the last call
    pub fn flush_events(&self) -> glfw::FlushedMessages<'_, (f64, WindowEvent)> {
        glfw::flush_messages(&self.events)
    }

    /// Present the back buffer
    pub fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    /// Address of an OpenGL function in the current context
    pub fn get_proc_address(&mut self, name: &str) -> glfw::GLProc {
        self.window.get_proc_address(name)
    }

    /// Window title as configured
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Client area size in screen coordinates
    pub fn size(&self) -> (u32, u32) {
        let (width, height) = self.window.get_size();
        (to_extent(width), to_extent(height))
    }

    /// Framebuffer size in pixels
    pub fn framebuffer_size(&self) -> (u32, u32) {
        let (width, height) = self.window.get_framebuffer_size();
        (to_extent(width), to_extent(height))
    }

    /// Run the event loop until the window is asked to close
    ///
    /// Closing the window (title bar button, Alt+F4, ...) is the only event
    /// acted on; everything else is only logged.
    pub fn run_until_closed(&mut self, mode: EventMode) {
        log::info!("Entering event loop ({mode:?})");
        let mut drained = 0_u64;

        while !self.should_close() {
            match mode {
                EventMode::Poll => self.poll_events(),
                EventMode::Wait => self.wait_events(),
            }

            for (_, event) in self.flush_events() {
                drained += 1;
                log_event(&event);
            }
        }

        log::info!("Window \"{}\" closed after {drained} events", self.title);
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        log::debug!("Destroying window \"{}\"", self.title);
    }
}

fn log_event(event: &WindowEvent) {
    match event {
        WindowEvent::Close => log::info!("Close requested"),
        other => log::trace!("Ignoring {other:?}"),
    }
}

fn to_extent(value: i32) -> u32 {
    u32::try_from(value).unwrap_or(0)
}
