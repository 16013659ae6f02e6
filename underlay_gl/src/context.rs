// Copyright 2026 the Underlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Graphics-context lifecycle.
//!
//! [`GraphicsContext`] owns the display/config/context/surface quartet for
//! one native window. Creation runs in a fixed order (display → initialize →
//! bind API → choose config → create context, then — once the native window
//! exists — create window surface → make current → swap interval);
//! destruction runs in exactly reverse order. A failure partway through
//! creation unwinds only the steps already completed.

use underlay_core::windowing::WindowHandle;

use crate::binding::{
    ConfigRequest, ContextRequest, DisplayHandle, GlBinding, GlConfigHandle, GlContextHandle,
    GlSurfaceHandle,
};

/// The display/config/context/surface quartet for one native window.
///
/// `surface` stays `None` between [`create`](Self::create) and
/// [`complete_window_surface`](Self::complete_window_surface), the interval
/// in which the native window itself is being set up.
#[derive(Debug)]
pub struct GraphicsContext {
    pub(crate) display: DisplayHandle,
    pub(crate) config: GlConfigHandle,
    pub(crate) context: GlContextHandle,
    pub(crate) surface: Option<GlSurfaceHandle>,
}

impl GraphicsContext {
    /// Runs the pre-window half of the creation chain.
    ///
    /// On any failure after display acquisition the display is terminated
    /// and the calling thread's API state released, so nothing leaks out of
    /// a rejected configuration.
    #[must_use]
    pub fn create(
        binding: &mut dyn GlBinding,
        config: &ConfigRequest,
        context: &ContextRequest,
    ) -> Option<Self> {
        let display = binding.default_display().ok()?;

        let created = Self::create_on_display(binding, display, config, context);
        if created.is_none() {
            binding.terminate(display);
            binding.release_thread();
        }
        created
    }

    fn create_on_display(
        binding: &mut dyn GlBinding,
        display: DisplayHandle,
        config: &ConfigRequest,
        context: &ContextRequest,
    ) -> Option<Self> {
        binding.initialize(display).ok()?;
        binding.bind_api().ok()?;
        let config = binding.choose_config(display, config).ok()?;
        let context = binding.create_context(display, config, context).ok()?;
        Some(Self {
            display,
            config,
            context,
            surface: None,
        })
    }

    /// Runs the post-window half: window surface, make current, swap
    /// interval 1.
    ///
    /// Returns `false` on failure; the caller is responsible for destroying
    /// the whole quartet (a partially created surface is retained so
    /// [`destroy`](Self::destroy) can release it).
    pub fn complete_window_surface(
        &mut self,
        binding: &mut dyn GlBinding,
        window: WindowHandle,
    ) -> bool {
        let surface = match binding.create_window_surface(self.display, self.config, window) {
            Ok(surface) => surface,
            Err(_) => return false,
        };
        self.surface = Some(surface);

        if binding
            .make_current(self.display, surface, self.context)
            .is_err()
        {
            return false;
        }
        binding.set_swap_interval(self.display, 1).is_ok()
    }

    /// Makes this context current on the calling thread.
    pub fn make_current(&self, binding: &mut dyn GlBinding) -> bool {
        let Some(surface) = self.surface else {
            return false;
        };
        binding
            .make_current(self.display, surface, self.context)
            .is_ok()
    }

    /// Presents the back buffer.
    pub fn swap(&self, binding: &mut dyn GlBinding) -> bool {
        let Some(surface) = self.surface else {
            return false;
        };
        binding.swap_buffers(self.display, surface).is_ok()
    }

    /// The display connection.
    #[must_use]
    pub fn display(&self) -> DisplayHandle {
        self.display
    }

    /// The window surface, once it exists.
    #[must_use]
    pub fn surface(&self) -> Option<GlSurfaceHandle> {
        self.surface
    }

    /// Destroys the quartet in reverse creation order: unbind the thread,
    /// destroy the surface if one exists, destroy the context, terminate the
    /// display, release thread state.
    pub fn destroy(self, binding: &mut dyn GlBinding) {
        binding.clear_current(self.display);
        if let Some(surface) = self.surface {
            binding.destroy_surface(self.display, surface);
        }
        binding.destroy_context(self.display, self.context);
        binding.terminate(self.display);
        binding.release_thread();
    }
}
