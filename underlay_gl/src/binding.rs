// Copyright 2026 the Underlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Graphics-context API contract.
//!
//! An EGL-shaped collaborator: a default display that must be initialized,
//! config selection against requested attributes, contexts and window
//! surfaces created from a config, make-current thread state, and
//! swap-based presentation. Platform crates (or test fakes) implement
//! [`GlBinding`]; the strategy in this crate drives it.
//!
//! Handles are opaque, as in `underlay_core::windowing`.

use core::fmt;

use underlay_core::windowing::WindowHandle;

/// Opaque handle to a graphics display connection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DisplayHandle(pub u64);

/// Opaque handle to a framebuffer configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GlConfigHandle(pub u64);

/// Opaque handle to a rendering context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GlContextHandle(pub u64);

/// Opaque handle to a window-backed drawing surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GlSurfaceHandle(pub u64);

/// Client API generation a config must be able to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Renderable {
    /// OpenGL ES 1.x (fixed function).
    Es1,
    /// OpenGL ES 2.x (shaders).
    Es2,
}

/// Attributes requested from config selection.
///
/// Window surface support is implied; only color depth and the renderable
/// generation vary between the supported strategy versions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ConfigRequest {
    /// Red channel bits.
    pub red_size: u8,
    /// Green channel bits.
    pub green_size: u8,
    /// Blue channel bits.
    pub blue_size: u8,
    /// Required renderable generation.
    pub renderable: Renderable,
}

/// Attributes for context creation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ContextRequest {
    /// Client API major version, when the API requires declaring it
    /// (ES 2.x); `None` requests the implementation default.
    pub client_version: Option<u32>,
}

/// Failure reported by a graphics API call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GlError {
    /// No display is available.
    NoDisplay,
    /// The display has not been (or could not be) initialized.
    NotInitialized,
    /// No config matched the request.
    NoConfig,
    /// The operation failed for any other reason.
    Failed,
}

impl fmt::Display for GlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDisplay => write!(f, "no display available"),
            Self::NotInitialized => write!(f, "display not initialized"),
            Self::NoConfig => write!(f, "no matching config"),
            Self::Failed => write!(f, "graphics API call failed"),
        }
    }
}

impl std::error::Error for GlError {}

/// The graphics API collaborator.
///
/// Destroy-shaped operations are infallible by contract; releasing an
/// unknown handle is a platform-side no-op.
/// [`release_thread`](GlBinding::release_thread) clears whatever per-thread
/// state the API associates with the calling thread and is always safe to
/// call.
pub trait GlBinding {
    /// Returns the default display connection.
    fn default_display(&mut self) -> Result<DisplayHandle, GlError>;

    /// Initializes a display. Must precede every other display operation.
    fn initialize(&mut self, display: DisplayHandle) -> Result<(), GlError>;

    /// Binds the OpenGL ES API for the calling thread.
    fn bind_api(&mut self) -> Result<(), GlError>;

    /// Selects a framebuffer config matching `request`.
    fn choose_config(
        &mut self,
        display: DisplayHandle,
        request: &ConfigRequest,
    ) -> Result<GlConfigHandle, GlError>;

    /// Creates a rendering context from `config`.
    fn create_context(
        &mut self,
        display: DisplayHandle,
        config: GlConfigHandle,
        request: &ContextRequest,
    ) -> Result<GlContextHandle, GlError>;

    /// Creates a drawing surface bound to a native window.
    fn create_window_surface(
        &mut self,
        display: DisplayHandle,
        config: GlConfigHandle,
        window: WindowHandle,
    ) -> Result<GlSurfaceHandle, GlError>;

    /// Makes `surface` and `context` current on the calling thread.
    fn make_current(
        &mut self,
        display: DisplayHandle,
        surface: GlSurfaceHandle,
        context: GlContextHandle,
    ) -> Result<(), GlError>;

    /// Releases the calling thread's current surface and context.
    fn clear_current(&mut self, display: DisplayHandle);

    /// Sets the swap interval for the current context.
    fn set_swap_interval(&mut self, display: DisplayHandle, interval: i32)
    -> Result<(), GlError>;

    /// Presents the back buffer of `surface`.
    fn swap_buffers(
        &mut self,
        display: DisplayHandle,
        surface: GlSurfaceHandle,
    ) -> Result<(), GlError>;

    /// Destroys a drawing surface.
    fn destroy_surface(&mut self, display: DisplayHandle, surface: GlSurfaceHandle);

    /// Destroys a rendering context.
    fn destroy_context(&mut self, display: DisplayHandle, context: GlContextHandle);

    /// Terminates a display connection.
    fn terminate(&mut self, display: DisplayHandle);

    /// Releases all per-thread API state held for the calling thread.
    fn release_thread(&mut self);
}
