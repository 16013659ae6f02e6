// Copyright 2026 the Underlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Surface lifecycle and presentation engine.
//!
//! A [`Surface`] owns one native window, its buffers, a presentation
//! strategy, and the embedder's hooks. Construction is cheap and allocates no
//! native resources; the host's attached-to-tree callback calls
//! [`activate`](Surface::activate), which runs the gated setup sequence and,
//! on success, performs the first paint.
//!
//! # Locking
//!
//! One mutex per surface guards all state, which makes buffer resizes,
//! window moves, and paint/present cycles mutually exclusive: a buffer is
//! never presented mid-resize and geometry never changes mid-paint. Embedder
//! hooks execute inside the lock — hook implementations must not call back
//! into the surface that invoked them.
//!
//! # Failure model
//!
//! Platform failures never cross the embedder boundary as errors. Setup
//! failures leave the surface invalid and fire
//! [`SurfaceEvent::Created`]`{ success: false }`; geometry operations on an
//! invalid surface are no-ops; presentation skips are silent. Callers that
//! care observe booleans and [`valid`](Surface::is_valid).

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::binding::{DetachedBinding, ForeignWindowBinding};
use crate::events::{SurfaceEvent, SurfaceEventQueue};
use crate::geometry::{Region, SurfacePos, SurfaceSize};
use crate::handle::{NativeSurfaceHandle, WindowGroup, WindowIdent, Z_ORDER_MIN};
use crate::hooks::{CleanupSlot, CleanupToken, SurfaceHooks};
use crate::present::{FrameRequest, PresentStrategy, SetupRequest};
use crate::trace::{
    self, ResizeStage, SetupFailedEvent, SetupStep, TraceSink,
};
use crate::windowing::{BufferFormat, ContextHandle, Usage, WindowHandle, Windowing};

/// Identity configuration for a new surface.
#[derive(Clone, Debug)]
pub struct SurfaceConfig {
    /// Compositor group to join; defaults to the application main group.
    pub group: WindowGroup,
    /// Window identity within the group.
    pub ident: WindowIdent,
    /// Capacity of the outward event queue (`0` is promoted to `1`).
    pub event_capacity: usize,
}

impl SurfaceConfig {
    /// Configuration with default identity and event capacity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            group: WindowGroup::default(),
            ident: WindowIdent::default(),
            event_capacity: SurfaceEventQueue::DEFAULT_CAPACITY,
        }
    }
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A native compositor window embedded behind the host widget tree.
pub struct Surface {
    inner: Mutex<SurfaceInner>,
}

pub(crate) struct SurfaceInner {
    pub(crate) windowing: Box<dyn Windowing + Send>,
    pub(crate) strategy: Box<dyn PresentStrategy + Send>,
    pub(crate) hooks: Box<dyn SurfaceHooks + Send>,
    pub(crate) binding: Box<dyn ForeignWindowBinding + Send>,
    pub(crate) sink: Option<Box<dyn TraceSink + Send>>,
    pub(crate) handle: NativeSurfaceHandle,
    pub(crate) request: SetupRequest,
    pub(crate) cleanup: CleanupSlot,
    pub(crate) events: SurfaceEventQueue,
    /// `Some` once activation has run, holding its outcome.
    pub(crate) created: Option<bool>,
}

impl Surface {
    /// Creates an inactive surface. No native resources are touched until
    /// [`activate`](Self::activate).
    #[must_use]
    pub fn new(
        config: SurfaceConfig,
        windowing: Box<dyn Windowing + Send>,
        strategy: Box<dyn PresentStrategy + Send>,
        hooks: Box<dyn SurfaceHooks + Send>,
    ) -> Self {
        let request = strategy.default_request();
        Self {
            inner: Mutex::new(SurfaceInner {
                windowing,
                strategy,
                hooks,
                binding: Box::new(DetachedBinding),
                sink: None,
                handle: NativeSurfaceHandle::new(config.group, config.ident),
                request,
                cleanup: CleanupSlot::new(),
                events: SurfaceEventQueue::with_capacity(config.event_capacity),
                created: None,
            }),
        }
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, SurfaceInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Installs the host's foreign-window binding. Call before
    /// [`activate`](Self::activate); the binding receives the window handle
    /// during setup.
    pub fn bind_foreign_window(&self, binding: Box<dyn ForeignWindowBinding + Send>) {
        self.lock().binding = binding;
    }

    /// Installs a trace sink for lifecycle diagnostics.
    pub fn set_trace_sink(&self, sink: Box<dyn TraceSink + Send>) {
        self.lock().sink = Some(sink);
    }

    /// Builds the native window, runs the embedder's window setup, reports
    /// the outcome via [`SurfaceEvent::Created`], and on success performs the
    /// initial whole-surface paint.
    ///
    /// Invoked by the host's attached-to-tree callback; runs at most once.
    pub fn activate(&self) {
        let mut inner = self.lock();
        if inner.created.is_some() {
            return;
        }
        let success = inner.activate();
        inner.created = Some(success);
        inner.events.push(SurfaceEvent::Created { success });
        if success {
            inner.present_frame(&FrameRequest {
                region: Region::MAX,
                should_paint: true,
            });
        }
    }

    /// Tears down the native window and all strategy resources.
    ///
    /// Runs the embedder's cleanup hook and any registered cleanup handler
    /// first, while the window is still alive. Safe to call repeatedly and
    /// with partially created state; afterwards the surface is invalid and
    /// every geometry operation is a no-op.
    pub fn cleanup(&self) {
        self.lock().teardown();
    }

    /// Repaints and presents the whole surface.
    pub fn invalidate(&self) {
        self.invalidate_region(Region::MAX);
    }

    /// Repaints and presents `region`, clamped to the current buffer size.
    pub fn invalidate_region(&self, region: Region) {
        self.invalidate_with(region, true);
    }

    /// Presents `region`, invoking the embedder's paint entry only when
    /// `should_paint` is set. A re-present of unchanged content (after a pure
    /// move) passes `false`.
    pub fn invalidate_with(&self, region: Region, should_paint: bool) {
        self.lock().present_frame(&FrameRequest {
            region,
            should_paint,
        });
    }

    /// Rebuilds the presentation buffers at `size` and re-runs the
    /// embedder's layout hook. Returns whether the rebuild succeeded.
    pub fn resize(&self, size: SurfaceSize) -> bool {
        self.lock().resize_buffers(size)
    }

    /// Moves the window to `pos`. No buffer impact.
    pub fn move_to(&self, pos: SurfacePos) -> bool {
        self.lock().move_window(pos)
    }

    /// The compositor group identity.
    #[must_use]
    pub fn window_group(&self) -> WindowGroup {
        self.lock().handle.group.clone()
    }

    /// The window identity.
    #[must_use]
    pub fn window_ident(&self) -> WindowIdent {
        self.lock().handle.ident.clone()
    }

    /// Current usage flags: the live window's flags once valid, otherwise
    /// the pending setup request's.
    #[must_use]
    pub fn usage(&self) -> Usage {
        let inner = self.lock();
        if inner.handle.valid {
            inner.handle.usage
        } else {
            inner.request.usage
        }
    }

    /// Buffer format fixed at creation (or pending, before activation).
    #[must_use]
    pub fn format(&self) -> BufferFormat {
        let inner = self.lock();
        if inner.handle.valid {
            inner.handle.format
        } else {
            inner.request.format
        }
    }

    /// Changes the compositor group. Setting the currently held value is a
    /// no-op (no leave/rejoin, no event); on a live window a real change
    /// leaves the old group and joins the new one.
    pub fn set_window_group(&self, group: WindowGroup) -> bool {
        let mut inner = self.lock();
        if inner.handle.group == group {
            return true;
        }
        if inner.handle.valid {
            let Some(window) = inner.handle.window else {
                return false;
            };
            if inner.windowing.leave_group(window).is_err() {
                return false;
            }
            if inner.windowing.join_group(window, group.as_str()).is_err() {
                return false;
            }
        }
        inner.handle.group = group.clone();
        inner.events.push(SurfaceEvent::GroupChanged { group });
        true
    }

    /// Changes the window identity. Same-value sets are a no-op.
    pub fn set_window_ident(&self, ident: WindowIdent) -> bool {
        let mut inner = self.lock();
        if inner.handle.ident == ident {
            return true;
        }
        if inner.handle.valid {
            let Some(window) = inner.handle.window else {
                return false;
            };
            if inner.windowing.set_ident(window, ident.as_str()).is_err() {
                return false;
            }
        }
        inner.handle.ident = ident.clone();
        inner.events.push(SurfaceEvent::IdentChanged { ident });
        true
    }

    /// Requests new usage flags. Always fails (without an event) when the
    /// presentation strategy fixes usage at creation time. Before activation
    /// the flags are applied during setup; afterwards the live window's
    /// usage property is rewritten.
    pub fn set_usage(&self, usage: Usage) -> bool {
        let mut inner = self.lock();
        if !inner.strategy.allows_usage_change() {
            return false;
        }
        if inner.handle.valid {
            let Some(window) = inner.handle.window else {
                return false;
            };
            if inner.windowing.set_usage(window, usage).is_err() {
                return false;
            }
            inner.handle.usage = usage;
        } else {
            inner.request.usage = usage;
        }
        inner.events.push(SurfaceEvent::UsageChanged { usage });
        true
    }

    /// Whether this surface's strategy permits usage changes.
    #[must_use]
    pub fn can_change_usage(&self) -> bool {
        self.lock().strategy.allows_usage_change()
    }

    /// Whether this surface's strategy permits a native cleanup handler.
    #[must_use]
    pub fn can_register_cleanup(&self) -> bool {
        self.lock().strategy.allows_cleanup_handler()
    }

    /// Registers the single-slot native cleanup handler. Returns `None` when
    /// the strategy denies handlers or the slot is occupied.
    pub fn register_cleanup<F>(&self, handler: F) -> Option<CleanupToken>
    where
        F: FnMut(WindowHandle) + Send + 'static,
    {
        let mut inner = self.lock();
        if !inner.strategy.allows_cleanup_handler() {
            return None;
        }
        inner.cleanup.register(Box::new(handler))
    }

    /// Clears the cleanup handler, but only with the matching token.
    pub fn unregister_cleanup(&self, token: CleanupToken) -> bool {
        self.lock().cleanup.unregister(token)
    }

    /// Whether a cleanup handler is currently registered.
    #[must_use]
    pub fn has_cleanup_handler(&self) -> bool {
        self.lock().cleanup.is_registered()
    }

    /// Whether activation has run and fully succeeded.
    #[must_use]
    pub fn created_successfully(&self) -> bool {
        self.lock().created == Some(true)
    }

    /// Whether the surface is fully set up and presentable.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.lock().handle.valid
    }

    /// Current buffer extent, or zero before the surface is valid.
    #[must_use]
    pub fn size(&self) -> SurfaceSize {
        let inner = self.lock();
        let Some(window) = inner.handle.window else {
            return SurfaceSize::default();
        };
        if !inner.handle.valid {
            return SurfaceSize::default();
        }
        inner
            .windowing
            .buffer_size(window)
            .unwrap_or_default()
    }

    /// Current buffer width.
    #[must_use]
    pub fn width(&self) -> i32 {
        self.size().width
    }

    /// Current buffer height.
    #[must_use]
    pub fn height(&self) -> i32 {
        self.size().height
    }

    /// Runs `f` with the native ownership record, under the surface lock.
    pub fn with_handle<R>(&self, f: impl FnOnce(&NativeSurfaceHandle) -> R) -> R {
        f(&self.lock().handle)
    }

    /// The native window handle, while the surface owns one.
    #[must_use]
    pub fn window_handle(&self) -> Option<WindowHandle> {
        self.lock().handle.window
    }

    /// The native drawing context handle, while the surface owns one.
    #[must_use]
    pub fn context_handle(&self) -> Option<ContextHandle> {
        self.lock().handle.context
    }

    /// Drains the next outward notification, if any.
    #[must_use]
    pub fn poll_event(&self) -> Option<SurfaceEvent> {
        self.lock().events.pop()
    }

    /// Number of notifications lost to queue overflow.
    #[must_use]
    pub fn events_dropped(&self) -> u64 {
        self.lock().events.dropped()
    }
}

impl fmt::Debug for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.lock();
        f.debug_struct("Surface")
            .field("valid", &inner.handle.valid)
            .field("group", &inner.handle.group)
            .field("ident", &inner.handle.ident)
            .field("created", &inner.created)
            .finish_non_exhaustive()
    }
}

impl Drop for Surface {
    fn drop(&mut self) {
        self.lock().teardown();
    }
}

impl SurfaceInner {
    fn emit(&mut self, f: impl FnOnce(&mut dyn TraceSink)) {
        if let Some(sink) = self.sink.as_deref_mut() {
            f(sink);
        }
    }

    fn step(&mut self, step: SetupStep) {
        self.emit(|s| s.on_setup_step(step));
    }

    fn fail(&mut self, step: SetupStep) -> bool {
        self.emit(|s| s.on_setup_failed(&SetupFailedEvent { step }));
        false
    }

    /// Runs strategy pre-setup, the gated window setup, strategy
    /// post-setup, and the embedder's one-time window hook.
    fn activate(&mut self) -> bool {
        let mut request = self.request;
        if !self.strategy.begin_setup(&mut request) {
            return self.fail(SetupStep::StrategyBegin);
        }
        self.request = request;

        if !self.setup_window() {
            // Window setup aborted; unwind whatever the strategy built ahead
            // of the window.
            self.strategy.teardown();
            return false;
        }
        let Some(window) = self.handle.window else {
            return false;
        };

        if !self.strategy.finish_setup(&mut *self.windowing, window) {
            self.strategy.teardown();
            self.cleanup_window();
            return self.fail(SetupStep::StrategyFinish);
        }

        self.hooks.setup_paint_window(window);
        self.emit(|s| s.on_activated());
        true
    }

    /// The gated native-window setup sequence. Each gate aborts on failure;
    /// gates past window creation unwind through
    /// [`cleanup_window`](Self::cleanup_window), except buffer allocation
    /// (see below).
    fn setup_window(&mut self) -> bool {
        self.handle.valid = false;

        let context = match self.windowing.create_context() {
            Ok(context) => context,
            Err(_) => return self.fail(SetupStep::CreateContext),
        };
        self.handle.context = Some(context);
        self.step(SetupStep::CreateContext);

        let window = match self.windowing.create_child_window(context) {
            Ok(window) => window,
            Err(_) => {
                self.windowing.destroy_context(context);
                self.handle.context = None;
                return self.fail(SetupStep::CreateWindow);
            }
        };
        self.handle.window = Some(window);
        self.step(SetupStep::CreateWindow);

        // The host compositor can reference the window from here on.
        self.binding.attach(window);

        if self
            .windowing
            .join_group(window, self.handle.group.as_str())
            .is_err()
        {
            self.cleanup_window();
            return self.fail(SetupStep::JoinGroup);
        }
        self.step(SetupStep::JoinGroup);

        if self
            .windowing
            .set_ident(window, self.handle.ident.as_str())
            .is_err()
        {
            self.cleanup_window();
            return self.fail(SetupStep::SetIdent);
        }
        self.step(SetupStep::SetIdent);

        if !self.request.usage.is_empty() {
            if self.windowing.set_usage(window, self.request.usage).is_err() {
                self.cleanup_window();
                return self.fail(SetupStep::SetUsage);
            }
            self.step(SetupStep::SetUsage);
        }

        if self.request.format != BufferFormat::Inherit {
            if self
                .windowing
                .set_format(window, self.request.format)
                .is_err()
            {
                self.cleanup_window();
                return self.fail(SetupStep::SetFormat);
            }
            self.step(SetupStep::SetFormat);
        }

        if self.windowing.set_z_order(window, Z_ORDER_MIN).is_err() {
            self.cleanup_window();
            return self.fail(SetupStep::SetZOrder);
        }
        self.step(SetupStep::SetZOrder);

        // Buffer allocation failure returns invalid without unwinding the
        // context and window; teardown releases them when the control goes
        // away.
        if self
            .windowing
            .create_buffers(window, self.request.buffer_count)
            .is_err()
        {
            return self.fail(SetupStep::CreateBuffers);
        }
        self.step(SetupStep::CreateBuffers);

        self.handle.usage = self.request.usage;
        self.handle.format = self.request.format;
        self.handle.buffer_count = self.request.buffer_count;

        // First layout, while paint is excluded by the held lock.
        if let Ok(size) = self.windowing.buffer_size(window) {
            self.hooks.layout(size.width, size.height);
        }

        self.handle.valid = true;
        true
    }

    /// Releases window and context, null-checked, unbinding the host side
    /// first. Safe with any subset of the resources present.
    fn cleanup_window(&mut self) {
        if let Some(window) = self.handle.window.take() {
            self.binding.detach();
            self.windowing.destroy_window(window);
        }
        if let Some(context) = self.handle.context.take() {
            self.windowing.destroy_context(context);
        }
        self.handle.valid = false;
    }

    /// Full teardown: embedder hooks, strategy resources, then the window.
    pub(crate) fn teardown(&mut self) {
        if self.handle.window.is_none() && self.handle.context.is_none() {
            self.handle.valid = false;
            return;
        }
        // The cleanup hook pairs with setup_paint_window, which only ran if
        // the surface became valid; a half-failed setup skips both.
        if self.handle.valid {
            if let Some(window) = self.handle.window {
                self.hooks.cleanup_paint_window(window);
                self.cleanup.invoke(window);
            }
        }
        self.strategy.teardown();
        self.cleanup_window();
        self.emit(|s| s.on_cleanup());
    }

    /// One locked paint/present cycle, delegated to the strategy.
    pub(crate) fn present_frame(&mut self, request: &FrameRequest) {
        if !self.handle.valid {
            return;
        }
        let Some(window) = self.handle.window else {
            return;
        };
        let presented = self
            .strategy
            .frame(&mut *self.windowing, window, &mut *self.hooks, request);
        if let Some(frame) = presented {
            self.emit(|s| {
                s.on_present(&trace::PresentEvent {
                    damage: frame.damage,
                    painted: frame.painted,
                });
            });
        }
    }

    /// Rebuilds buffers at `size` with the creation-time count, then re-runs
    /// the embedder layout hook.
    pub(crate) fn resize_buffers(&mut self, size: SurfaceSize) -> bool {
        if !self.handle.valid {
            return false;
        }
        let Some(window) = self.handle.window else {
            return false;
        };

        if self.windowing.destroy_buffers(window).is_err() {
            self.emit(|s| {
                s.on_resize(&trace::ResizeEvent {
                    size,
                    failed_at: Some(ResizeStage::DestroyBuffers),
                });
            });
            return false;
        }

        // From here a failure strands the window without buffers and with
        // possibly mismatched extent properties; the next successful resize
        // is the recovery path.
        if self.windowing.set_buffer_size(window, size).is_err()
            || self.windowing.set_source_size(window, size).is_err()
        {
            self.emit(|s| {
                s.on_resize(&trace::ResizeEvent {
                    size,
                    failed_at: Some(ResizeStage::SetExtents),
                });
            });
            return false;
        }

        if self
            .windowing
            .create_buffers(window, self.handle.buffer_count)
            .is_err()
        {
            self.emit(|s| {
                s.on_resize(&trace::ResizeEvent {
                    size,
                    failed_at: Some(ResizeStage::CreateBuffers),
                });
            });
            return false;
        }

        self.hooks.layout(size.width, size.height);
        self.emit(|s| {
            s.on_resize(&trace::ResizeEvent {
                size,
                failed_at: None,
            });
        });
        true
    }

    /// Repositions the window.
    pub(crate) fn move_window(&mut self, pos: SurfacePos) -> bool {
        if !self.handle.valid {
            return false;
        }
        let Some(window) = self.handle.window else {
            return false;
        };
        if self.windowing.set_position(window, pos).is_err() {
            return false;
        }
        self.emit(|s| s.on_move(&trace::MoveEvent { pos }));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::SurfaceConfig;
    use crate::events::SurfaceEventQueue;
    use crate::handle::{WindowGroup, WindowIdent};

    #[test]
    fn default_config_uses_main_group_identity() {
        let config = SurfaceConfig::new();
        assert_eq!(config.group, WindowGroup::application_main());
        assert_eq!(config.ident, WindowIdent::default());
        assert_eq!(config.event_capacity, SurfaceEventQueue::DEFAULT_CAPACITY);
    }
}
