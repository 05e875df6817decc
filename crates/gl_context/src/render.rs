//! Clearing the OpenGL color buffer
//!
//! OpenGL keeps two color buffers per window. The front one is on screen
//! while the back one is painted; swapping buffers presents the finished
//! back buffer. Painting the background therefore takes three steps: set
//! the clear color, clear the color buffer, swap.

#![allow(unsafe_code)]

use std::ffi::CStr;

use thiserror::Error;

use crate::color::ClearColor;
use crate::window::Window;

/// Rendering errors
#[derive(Error, Debug)]
pub enum RenderError {
    /// The context did not provide the functions needed to clear the screen
    #[error("OpenGL function {0} could not be loaded from the current context")]
    FunctionsNotLoaded(&'static str),
}

/// Load OpenGL function pointers through the window's current context
pub fn load_gl(window: &mut Window) -> Result<(), RenderError> {
    gl::load_with(|symbol| window.get_proc_address(symbol) as *const _);

    if !gl::ClearColor::is_loaded() {
        return Err(RenderError::FunctionsNotLoaded("glClearColor"));
    }
    if !gl::Clear::is_loaded() {
        return Err(RenderError::FunctionsNotLoaded("glClear"));
    }

    if let Some(version) = gl_version() {
        log::info!("OpenGL version {version}");
    }
    Ok(())
}

/// Clear the color buffer of the current context
///
/// Requires [`load_gl`] to have succeeded for the current context.
pub fn clear_background(color: ClearColor) {
    let [r, g, b, a] = color.as_array();
    unsafe {
        gl::ClearColor(r, g, b, a);
        gl::Clear(gl::COLOR_BUFFER_BIT);
    }
}

/// Load OpenGL, clear the back buffer with `color` and present it
pub fn present_background(window: &mut Window, color: ClearColor) -> Result<(), RenderError> {
    load_gl(window)?;
    clear_background(color);
    window.swap_buffers();
    log::info!("Presented background {:?}", color.as_array());
    Ok(())
}

fn gl_version() -> Option<String> {
    if !gl::GetString::is_loaded() {
        return None;
    }

    let version = unsafe { gl::GetString(gl::VERSION) };
    if version.is_null() {
        return None;
    }

    let version = unsafe { CStr::from_ptr(version.cast()) };
    Some(version.to_string_lossy().into_owned())
}
