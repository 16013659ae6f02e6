// Copyright 2026 the Underlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Platform windowing contract.
//!
//! The compositor-facing windowing API is a collaborator, not part of this
//! crate: platform crates (or test fakes) implement [`Windowing`] and the
//! surface drives it. The contract mirrors a child-window compositor model:
//! a process-scoped drawing context, child windows created under it, integer
//! window properties, explicitly allocated presentation buffers, and an
//! explicit post-with-damage presentation call.
//!
//! All handles are opaque to this crate. A platform implementation maps them
//! to its own resources; handle `0` carries no special meaning here.

use core::fmt;

use crate::geometry::{DamageRect, SurfacePos, SurfaceSize};

/// Opaque handle to a platform drawing context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ContextHandle(pub u64);

/// Opaque handle to a platform-native window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub u64);

/// Opaque handle to one presentation buffer of a window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BufferHandle(pub u64);

bitflags::bitflags! {
    /// Window usage capability flags.
    ///
    /// An empty set means "platform default": the usage property is not set
    /// at all during window setup. Presentation strategies may fix a usage
    /// combination at creation time and refuse later changes.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Usage: u32 {
        /// CPU reads of the buffer contents.
        const READ = 1 << 0;
        /// CPU writes of the buffer contents.
        const WRITE = 1 << 1;
        /// Native (blit-engine) access.
        const NATIVE = 1 << 2;
        /// OpenGL ES 1.x rendering.
        const OPENGL_ES1 = 1 << 3;
        /// OpenGL ES 2.x rendering.
        const OPENGL_ES2 = 1 << 4;
        /// OpenVG rendering.
        const OPENVG = 1 << 5;
        /// Video decode output.
        const VIDEO = 1 << 6;
        /// Capture (screenshot/recording) source.
        const CAPTURE = 1 << 7;
        /// Display-rotation aware.
        const ROTATION = 1 << 8;
        /// Overlay pipeline eligible.
        const OVERLAY = 1 << 9;
    }
}

/// Pixel format of a window's presentation buffers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BufferFormat {
    /// Keep the platform's default format; the property is not set during
    /// setup.
    #[default]
    Inherit,
    /// 16-bit RGB.
    Rgb565,
    /// 32-bit RGB, upper byte ignored.
    Rgbx8888,
    /// 32-bit RGBA.
    Rgba8888,
}

/// Failure reported by a platform windowing call.
///
/// The surface handles every variant the same way, by unwinding or skipping
/// locally; the distinction exists for tracing and for platform
/// implementations with meaningful diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WindowingError {
    /// The platform rejected the operation.
    Rejected,
    /// The referenced handle is not live.
    UnknownHandle,
    /// The queried property or resource does not exist yet.
    Unavailable,
}

impl fmt::Display for WindowingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected => write!(f, "operation rejected by the platform"),
            Self::UnknownHandle => write!(f, "handle is not live"),
            Self::Unavailable => write!(f, "property or resource unavailable"),
        }
    }
}

impl std::error::Error for WindowingError {}

/// The platform windowing collaborator.
///
/// Implementations must be cheap and synchronous: every operation either
/// succeeds or fails immediately, with no retry at this layer. Destroy
/// operations are infallible by contract; destroying an unknown handle is a
/// platform-side no-op.
pub trait Windowing {
    /// Creates the process-scoped drawing context.
    fn create_context(&mut self) -> Result<ContextHandle, WindowingError>;

    /// Creates a child window under `context`.
    fn create_child_window(
        &mut self,
        context: ContextHandle,
    ) -> Result<WindowHandle, WindowingError>;

    /// Destroys a window and all buffers still attached to it.
    fn destroy_window(&mut self, window: WindowHandle);

    /// Destroys a drawing context.
    fn destroy_context(&mut self, context: ContextHandle);

    /// Joins the named compositor window group.
    fn join_group(&mut self, window: WindowHandle, group: &str) -> Result<(), WindowingError>;

    /// Leaves the currently joined window group.
    fn leave_group(&mut self, window: WindowHandle) -> Result<(), WindowingError>;

    /// Sets the window's string identity property.
    fn set_ident(&mut self, window: WindowHandle, ident: &str) -> Result<(), WindowingError>;

    /// Sets the usage capability flags.
    fn set_usage(&mut self, window: WindowHandle, usage: Usage) -> Result<(), WindowingError>;

    /// Sets the buffer pixel format.
    fn set_format(&mut self, window: WindowHandle, format: BufferFormat)
    -> Result<(), WindowingError>;

    /// Sets the stacking order relative to sibling windows in the group.
    fn set_z_order(&mut self, window: WindowHandle, z: i32) -> Result<(), WindowingError>;

    /// Sets the window position.
    fn set_position(&mut self, window: WindowHandle, pos: SurfacePos)
    -> Result<(), WindowingError>;

    /// Reads the window position.
    fn position(&self, window: WindowHandle) -> Result<SurfacePos, WindowingError>;

    /// Sets the buffer extent property.
    fn set_buffer_size(
        &mut self,
        window: WindowHandle,
        size: SurfaceSize,
    ) -> Result<(), WindowingError>;

    /// Sets the source (scan-out crop) extent property.
    fn set_source_size(
        &mut self,
        window: WindowHandle,
        size: SurfaceSize,
    ) -> Result<(), WindowingError>;

    /// Reads the buffer extent property.
    fn buffer_size(&self, window: WindowHandle) -> Result<SurfaceSize, WindowingError>;

    /// Allocates `count` presentation buffers for the window.
    fn create_buffers(&mut self, window: WindowHandle, count: u32) -> Result<(), WindowingError>;

    /// Releases the window's presentation buffers.
    fn destroy_buffers(&mut self, window: WindowHandle) -> Result<(), WindowingError>;

    /// Returns the buffer that should be rendered into next.
    fn render_buffer(&self, window: WindowHandle) -> Result<BufferHandle, WindowingError>;

    /// Presents `buffer`, declaring `damage` dirty to the compositor.
    fn post(
        &mut self,
        window: WindowHandle,
        buffer: BufferHandle,
        damage: DamageRect,
    ) -> Result<(), WindowingError>;

    /// Sets the window content rotation in degrees.
    fn set_rotation(&mut self, window: WindowHandle, degrees: i32) -> Result<(), WindowingError>;
}

#[cfg(test)]
mod tests {
    use super::{BufferFormat, Usage};

    #[test]
    fn default_usage_is_empty() {
        assert_eq!(Usage::default(), Usage::empty());
    }

    #[test]
    fn default_format_is_inherit() {
        assert_eq!(BufferFormat::default(), BufferFormat::Inherit);
    }

    #[test]
    fn usage_flags_compose() {
        let gl = Usage::OPENGL_ES2 | Usage::ROTATION;
        assert!(gl.contains(Usage::ROTATION));
        assert!(!gl.contains(Usage::OPENGL_ES1));
    }
}
