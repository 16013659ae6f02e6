// Copyright 2026 the Underlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Accelerated presentation strategy.
//!
//! [`GlPresent`] layers a graphics-context lifecycle over the native-window
//! lifecycle: the context chain is created before the window, the window
//! surface after it, and presentation swaps buffers instead of posting.
//! Usage flags, buffer count, and format are fixed by the selected
//! [`GlVersion`]; the strategy therefore denies usage changes and native
//! cleanup handlers outright.

use core::fmt;

use underlay_core::hooks::SurfaceHooks;
use underlay_core::present::{
    FrameRequest, PresentStrategy, PresentedFrame, SetupRequest,
};
use underlay_core::windowing::{BufferFormat, Usage, WindowHandle, Windowing};

use crate::binding::{ConfigRequest, ContextRequest, DisplayHandle, GlBinding, GlSurfaceHandle, Renderable};
use crate::context::GraphicsContext;

/// Accelerated strategies double-buffer: one buffer scans out while the
/// embedder draws into the other.
const GL_BUFFER_COUNT: u32 = 2;

/// Which client API generation the strategy sets up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GlVersion {
    /// OpenGL ES 1.x: fixed-function usage and default context attributes.
    #[default]
    Es1,
    /// OpenGL ES 2.x: shader usage and a client-version-2 context.
    Es2,
}

impl GlVersion {
    /// Window usage flags this version requires.
    #[must_use]
    pub const fn usage(self) -> Usage {
        match self {
            Self::Es1 => Usage::OPENGL_ES1.union(Usage::ROTATION),
            Self::Es2 => Usage::OPENGL_ES2.union(Usage::ROTATION),
        }
    }

    /// Config attributes this version requires.
    #[must_use]
    pub const fn config_request(self) -> ConfigRequest {
        ConfigRequest {
            red_size: 8,
            green_size: 8,
            blue_size: 8,
            renderable: match self {
                Self::Es1 => Renderable::Es1,
                Self::Es2 => Renderable::Es2,
            },
        }
    }

    /// Context attributes this version requires.
    #[must_use]
    pub const fn context_request(self) -> ContextRequest {
        ContextRequest {
            client_version: match self {
                Self::Es1 => None,
                Self::Es2 => Some(2),
            },
        }
    }
}

/// Presentation by graphics-context swap.
pub struct GlPresent {
    binding: Box<dyn GlBinding + Send>,
    version: GlVersion,
    state: Option<GraphicsContext>,
}

impl GlPresent {
    /// Creates the strategy for the given API version.
    #[must_use]
    pub fn new(binding: Box<dyn GlBinding + Send>, version: GlVersion) -> Self {
        Self {
            binding,
            version,
            state: None,
        }
    }

    /// The selected API version.
    #[must_use]
    pub fn version(&self) -> GlVersion {
        self.version
    }

    /// Selects a different API version.
    ///
    /// Only possible before the context chain exists; afterwards the request
    /// is refused. Rebuilding a live context chain for a new version is not
    /// supported.
    pub fn set_version(&mut self, version: GlVersion) -> bool {
        if self.state.is_some() {
            return false;
        }
        self.version = version;
        true
    }

    /// The display connection, while the strategy holds one. Embedders use
    /// this to call graphics APIs that need the raw display.
    #[must_use]
    pub fn display(&self) -> Option<DisplayHandle> {
        self.state.as_ref().map(GraphicsContext::display)
    }

    /// The window surface, once it exists.
    #[must_use]
    pub fn surface(&self) -> Option<GlSurfaceHandle> {
        self.state.as_ref().and_then(GraphicsContext::surface)
    }
}

impl fmt::Debug for GlPresent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlPresent")
            .field("version", &self.version)
            .field("active", &self.state.is_some())
            .finish_non_exhaustive()
    }
}

impl PresentStrategy for GlPresent {
    fn default_request(&self) -> SetupRequest {
        SetupRequest {
            usage: self.version.usage(),
            buffer_count: GL_BUFFER_COUNT,
            format: BufferFormat::Rgbx8888,
        }
    }

    fn begin_setup(&mut self, request: &mut SetupRequest) -> bool {
        let config = self.version.config_request();
        let context = self.version.context_request();
        match GraphicsContext::create(&mut *self.binding, &config, &context) {
            Some(state) => {
                self.state = Some(state);
                // Usage, format, and buffer count are version-determined, no
                // matter what the request held.
                *request = self.default_request();
                true
            }
            None => false,
        }
    }

    fn finish_setup(&mut self, _windowing: &mut dyn Windowing, window: WindowHandle) -> bool {
        let Some(state) = self.state.as_mut() else {
            return false;
        };
        state.complete_window_surface(&mut *self.binding, window)
    }

    fn frame(
        &mut self,
        _windowing: &mut dyn Windowing,
        _window: WindowHandle,
        hooks: &mut dyn SurfaceHooks,
        _request: &FrameRequest,
    ) -> Option<PresentedFrame> {
        let state = self.state.as_ref()?;
        if !state.make_current(&mut *self.binding) {
            return None;
        }
        // After a swap the back buffer contents are undefined, so every
        // presented frame is repainted regardless of the request.
        hooks.paint_gl();
        if !state.swap(&mut *self.binding) {
            return None;
        }
        Some(PresentedFrame {
            damage: None,
            painted: true,
        })
    }

    fn teardown(&mut self) {
        match self.state.take() {
            Some(state) => state.destroy(&mut *self.binding),
            // Thread state can exist without a context chain (a failed
            // bind), so release it regardless.
            None => self.binding.release_thread(),
        }
    }

    fn allows_usage_change(&self) -> bool {
        false
    }

    fn allows_cleanup_handler(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::{GlVersion, Renderable};
    use underlay_core::windowing::Usage;

    #[test]
    fn es1_requests_fixed_function_setup() {
        let version = GlVersion::Es1;
        assert_eq!(version.usage(), Usage::OPENGL_ES1 | Usage::ROTATION);
        assert_eq!(version.config_request().renderable, Renderable::Es1);
        assert_eq!(version.context_request().client_version, None);
    }

    #[test]
    fn es2_requests_client_version_two() {
        let version = GlVersion::Es2;
        assert_eq!(version.usage(), Usage::OPENGL_ES2 | Usage::ROTATION);
        assert_eq!(version.config_request().renderable, Renderable::Es2);
        assert_eq!(version.context_request().client_version, Some(2));
    }
}
