// Copyright 2026 the Underlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording embedder hooks.
//!
//! [`RecordingHooks`] implements the embedder contract and appends every
//! callback to a shared log; [`HooksProbe`] reads the log after the hooks
//! have moved into a surface. Call ordering is exactly invocation ordering,
//! which is what the behavior tests assert on.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use underlay_core::hooks::SurfaceHooks;
use underlay_core::windowing::WindowHandle;

/// One recorded hook invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HookCall {
    /// `setup_paint_window`
    SetupPaintWindow(WindowHandle),
    /// `paint`
    Paint(WindowHandle),
    /// `paint_gl`
    PaintGl,
    /// `layout`
    Layout(i32, i32),
    /// `cleanup_paint_window`
    CleanupPaintWindow(WindowHandle),
}

type Shared = Arc<Mutex<Vec<HookCall>>>;

fn locked(state: &Shared) -> MutexGuard<'_, Vec<HookCall>> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Embedder hooks that record every invocation.
#[derive(Debug)]
pub struct RecordingHooks {
    calls: Shared,
}

/// Shared-log reader for a [`RecordingHooks`].
#[derive(Clone, Debug)]
pub struct HooksProbe {
    calls: Shared,
}

impl RecordingHooks {
    /// Creates the hooks plus the probe observing them.
    #[must_use]
    pub fn new() -> (Self, HooksProbe) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                calls: Arc::clone(&calls),
            },
            HooksProbe { calls },
        )
    }
}

impl HooksProbe {
    /// All recorded calls, oldest first.
    #[must_use]
    pub fn calls(&self) -> Vec<HookCall> {
        locked(&self.calls).clone()
    }

    /// The recorded layout dimensions, oldest first.
    #[must_use]
    pub fn layouts(&self) -> Vec<(i32, i32)> {
        locked(&self.calls)
            .iter()
            .filter_map(|call| match call {
                HookCall::Layout(w, h) => Some((*w, *h)),
                _ => None,
            })
            .collect()
    }

    /// Number of raster paint invocations.
    #[must_use]
    pub fn paints(&self) -> usize {
        locked(&self.calls)
            .iter()
            .filter(|call| matches!(call, HookCall::Paint(_)))
            .count()
    }

    /// Number of accelerated paint invocations.
    #[must_use]
    pub fn gl_paints(&self) -> usize {
        locked(&self.calls)
            .iter()
            .filter(|call| matches!(call, HookCall::PaintGl))
            .count()
    }
}

impl SurfaceHooks for RecordingHooks {
    fn setup_paint_window(&mut self, window: WindowHandle) {
        locked(&self.calls).push(HookCall::SetupPaintWindow(window));
    }

    fn paint(&mut self, window: WindowHandle) {
        locked(&self.calls).push(HookCall::Paint(window));
    }

    fn paint_gl(&mut self) {
        locked(&self.calls).push(HookCall::PaintGl);
    }

    fn layout(&mut self, width: i32, height: i32) {
        locked(&self.calls).push(HookCall::Layout(width, height));
    }

    fn cleanup_paint_window(&mut self, window: WindowHandle) {
        locked(&self.calls).push(HookCall::CleanupPaintWindow(window));
    }
}

#[cfg(test)]
mod tests {
    use super::RecordingHooks;
    use crate::platform::FakeWindowing;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};
    use underlay_core::geometry::SurfaceSize;
    use underlay_core::present::RasterPresent;
    use underlay_core::surface::{Surface, SurfaceConfig};

    fn raster_surface() -> Surface {
        let (platform, _probe) = FakeWindowing::new(SurfaceSize::new(64, 64));
        let (hooks, _hooks_probe) = RecordingHooks::new();
        Surface::new(
            SurfaceConfig::new(),
            Box::new(platform),
            Box::new(RasterPresent::new()),
            Box::new(hooks),
        )
    }

    #[test]
    fn stale_token_cannot_clear_a_new_registration() {
        let surface = raster_surface();
        assert!(surface.can_register_cleanup());

        let first = surface.register_cleanup(|_| {}).expect("slot free");
        // Only one handler at a time.
        assert!(surface.register_cleanup(|_| {}).is_none());
        assert!(surface.unregister_cleanup(first));

        let _second = surface.register_cleanup(|_| {}).expect("slot free again");
        // The stale token no longer matches; the registration survives.
        assert!(!surface.unregister_cleanup(first));
        assert!(surface.has_cleanup_handler());
    }

    #[test]
    fn cleanup_handler_runs_at_teardown() {
        let surface = raster_surface();
        let runs = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&runs);

        surface
            .register_cleanup(move |_window| {
                counter.fetch_add(1, Ordering::Relaxed);
            })
            .expect("slot free");

        surface.activate();
        assert_eq!(runs.load(Ordering::Relaxed), 0);

        surface.cleanup();
        assert_eq!(runs.load(Ordering::Relaxed), 1);

        // Idempotent teardown does not re-run the handler.
        surface.cleanup();
        assert_eq!(runs.load(Ordering::Relaxed), 1);
    }
}
