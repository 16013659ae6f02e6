// Copyright 2026 the Underlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Native window identity and ownership record.

use crate::windowing::{BufferFormat, ContextHandle, Usage, WindowHandle};

/// Stacking order assigned to every surface at creation time.
///
/// The minimum representable depth: the native window composites behind all
/// sibling windows in its group, so the host toolkit's own content draws on
/// top of it. Not runtime-mutable.
pub const Z_ORDER_MIN: i32 = i32::MIN;

/// Compositor window-group identity.
///
/// Joining a group is what makes the native window participate in the host
/// application's compositing; the default is the group the host's main
/// application window advertises.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WindowGroup(String);

impl WindowGroup {
    /// Group id advertised by the host's main application window.
    pub const APPLICATION_MAIN: &'static str = "application.main";

    /// Creates a group identity from an arbitrary id string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The host application's main window group.
    #[must_use]
    pub fn application_main() -> Self {
        Self(Self::APPLICATION_MAIN.to_owned())
    }

    /// The group id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for WindowGroup {
    fn default() -> Self {
        Self::application_main()
    }
}

/// String identity of one window within its group.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WindowIdent(String);

impl WindowIdent {
    /// Identity used when the embedder does not choose one.
    pub const DEFAULT: &'static str = "UnderlaySurfaceID";

    /// Creates a window identity from an arbitrary id string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identity as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for WindowIdent {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

/// Ownership record for one native surface.
///
/// Holds the platform handles, the identity used to join the compositor
/// group, and the buffer configuration fixed at creation. The handles are
/// `Some` exactly while the owning surface holds the underlying resources;
/// `valid` is `true` only between a fully successful setup and teardown.
#[derive(Debug)]
pub struct NativeSurfaceHandle {
    pub(crate) context: Option<ContextHandle>,
    pub(crate) window: Option<WindowHandle>,
    pub(crate) group: WindowGroup,
    pub(crate) ident: WindowIdent,
    pub(crate) usage: Usage,
    pub(crate) format: BufferFormat,
    pub(crate) buffer_count: u32,
    pub(crate) valid: bool,
}

impl NativeSurfaceHandle {
    pub(crate) fn new(group: WindowGroup, ident: WindowIdent) -> Self {
        Self {
            context: None,
            window: None,
            group,
            ident,
            usage: Usage::empty(),
            format: BufferFormat::Inherit,
            buffer_count: 0,
            valid: false,
        }
    }

    /// The native drawing context, while owned.
    #[must_use]
    pub fn context(&self) -> Option<ContextHandle> {
        self.context
    }

    /// The native window, while owned.
    #[must_use]
    pub fn window(&self) -> Option<WindowHandle> {
        self.window
    }

    /// The compositor group identity.
    #[must_use]
    pub fn group(&self) -> &WindowGroup {
        &self.group
    }

    /// The window identity.
    #[must_use]
    pub fn ident(&self) -> &WindowIdent {
        &self.ident
    }

    /// Usage flags fixed at creation (empty until setup runs).
    #[must_use]
    pub fn usage(&self) -> Usage {
        self.usage
    }

    /// Buffer format fixed at creation.
    #[must_use]
    pub fn format(&self) -> BufferFormat {
        self.format
    }

    /// Number of presentation buffers fixed at creation.
    #[must_use]
    pub fn buffer_count(&self) -> u32 {
        self.buffer_count
    }

    /// Whether the surface is fully set up and presentable.
    #[must_use]
    pub fn valid(&self) -> bool {
        self.valid
    }
}

#[cfg(test)]
mod tests {
    use super::{NativeSurfaceHandle, WindowGroup, WindowIdent};

    #[test]
    fn defaults_point_at_the_main_group() {
        let handle = NativeSurfaceHandle::new(WindowGroup::default(), WindowIdent::default());
        assert_eq!(handle.group().as_str(), WindowGroup::APPLICATION_MAIN);
        assert_eq!(handle.ident().as_str(), WindowIdent::DEFAULT);
        assert!(!handle.valid());
        assert_eq!(handle.window(), None);
        assert_eq!(handle.context(), None);
    }
}
