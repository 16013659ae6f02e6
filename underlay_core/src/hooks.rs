// Copyright 2026 the Underlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Embedder extension points.
//!
//! Application code implements [`SurfaceHooks`] and hands it to the surface.
//! Every method defaults to a no-op so embedders only override the entry
//! points they use: raster embedders implement [`paint`](SurfaceHooks::paint)
//! and [`layout`](SurfaceHooks::layout); accelerated embedders implement
//! [`paint_gl`](SurfaceHooks::paint_gl) instead of `paint`.
//!
//! Hooks run with the surface lock held. They must not call back into the
//! surface that invoked them.

use core::fmt;

use crate::windowing::WindowHandle;

/// Callbacks a surface makes into embedder code.
pub trait SurfaceHooks {
    /// Called once, after the native window exists and before the first
    /// layout or paint. The place for one-time window-level setup.
    fn setup_paint_window(&mut self, window: WindowHandle) {
        _ = window;
    }

    /// Called when a repaint is due under the raster strategy. All drawing
    /// into the window's render buffer happens here.
    fn paint(&mut self, window: WindowHandle) {
        _ = window;
    }

    /// Called when a repaint is due under the accelerated strategy. The
    /// strategy's context is current; draw with the graphics API directly.
    fn paint_gl(&mut self) {}

    /// Called whenever buffers are (re)sized, including the very first
    /// allocation.
    fn layout(&mut self, width: i32, height: i32) {
        _ = (width, height);
    }

    /// Called once, before teardown begins, while the window is still alive.
    fn cleanup_paint_window(&mut self, window: WindowHandle) {
        _ = window;
    }
}

/// Hooks that ignore every callback.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopHooks;

impl SurfaceHooks for NoopHooks {}

/// Identity of a registered cleanup handler.
///
/// Returned by registration; unregistration succeeds only with the matching
/// token, so an unrelated caller cannot clear someone else's handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CleanupToken(u64);

/// Single-slot registry for a window cleanup handler.
///
/// An escape hatch for embedders that cannot take the virtual-dispatch path
/// of [`SurfaceHooks::cleanup_paint_window`]; only one handler may be
/// registered at a time.
pub(crate) struct CleanupSlot {
    handler: Option<(CleanupToken, Box<dyn FnMut(WindowHandle) + Send>)>,
    next_token: u64,
}

impl CleanupSlot {
    pub(crate) fn new() -> Self {
        Self {
            handler: None,
            next_token: 1,
        }
    }

    /// Registers `handler` if the slot is free; `None` when occupied.
    pub(crate) fn register(
        &mut self,
        handler: Box<dyn FnMut(WindowHandle) + Send>,
    ) -> Option<CleanupToken> {
        if self.handler.is_some() {
            return None;
        }
        let token = CleanupToken(self.next_token);
        self.next_token += 1;
        self.handler = Some((token, handler));
        Some(token)
    }

    /// Clears the slot only if `token` matches the registered handler.
    pub(crate) fn unregister(&mut self, token: CleanupToken) -> bool {
        match &self.handler {
            Some((registered, _)) if *registered == token => {
                self.handler = None;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn is_registered(&self) -> bool {
        self.handler.is_some()
    }

    /// Invokes the registered handler, if any, leaving it registered.
    pub(crate) fn invoke(&mut self, window: WindowHandle) {
        if let Some((_, handler)) = &mut self.handler {
            handler(window);
        }
    }
}

impl fmt::Debug for CleanupSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CleanupSlot")
            .field("registered", &self.handler.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::{CleanupSlot, NoopHooks, SurfaceHooks};
    use crate::windowing::WindowHandle;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn slot_holds_a_single_handler() {
        let mut slot = CleanupSlot::new();
        let first = slot.register(Box::new(|_| {})).expect("slot free");
        assert!(slot.register(Box::new(|_| {})).is_none());
        assert!(slot.unregister(first));
        assert!(slot.register(Box::new(|_| {})).is_some());
    }

    #[test]
    fn non_matching_unregister_keeps_the_handler() {
        let mut slot = CleanupSlot::new();
        let token = slot.register(Box::new(|_| {})).expect("slot free");
        assert!(slot.unregister(token));

        let second = slot.register(Box::new(|_| {})).expect("slot free again");
        // The old token no longer matches; the new registration must survive.
        assert!(!slot.unregister(token));
        assert!(slot.is_registered());
        assert!(slot.unregister(second));
        assert!(!slot.is_registered());
    }

    #[test]
    fn invoke_calls_the_handler_with_the_window() {
        let calls = Arc::new(AtomicU32::new(0));
        let seen = Arc::clone(&calls);

        let mut slot = CleanupSlot::new();
        slot.register(Box::new(move |window| {
            assert_eq!(window, WindowHandle(7));
            seen.fetch_add(1, Ordering::Relaxed);
        }))
        .expect("slot free");

        slot.invoke(WindowHandle(7));
        slot.invoke(WindowHandle(7));
        assert_eq!(calls.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn default_hooks_are_no_ops() {
        let mut hooks = NoopHooks;
        hooks.setup_paint_window(WindowHandle(1));
        hooks.paint(WindowHandle(1));
        hooks.paint_gl();
        hooks.layout(10, 10);
        hooks.cleanup_paint_window(WindowHandle(1));
    }
}
