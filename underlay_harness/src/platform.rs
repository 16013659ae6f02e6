// Copyright 2026 the Underlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory fake of the platform windowing contract.
//!
//! [`FakeWindowing`] models a compositor with one drawing context per
//! surface and child windows whose buffer-size property defaults to the
//! parent's allocated frame. [`PlatformProbe`] shares state with the fake so
//! tests can inject per-operation failures and inspect calls, properties,
//! and live handle counts after the fake has moved into a surface.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use underlay_core::geometry::{DamageRect, SurfacePos, SurfaceSize};
use underlay_core::windowing::{
    BufferFormat, BufferHandle, ContextHandle, Usage, WindowHandle, Windowing, WindowingError,
};

/// One operation of the windowing contract, used for logging and failure
/// injection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WindowingOp {
    /// `create_context`
    CreateContext,
    /// `create_child_window`
    CreateWindow,
    /// `join_group`
    JoinGroup,
    /// `leave_group`
    LeaveGroup,
    /// `set_ident`
    SetIdent,
    /// `set_usage`
    SetUsage,
    /// `set_format`
    SetFormat,
    /// `set_z_order`
    SetZOrder,
    /// `set_position`
    SetPosition,
    /// `set_buffer_size`
    SetBufferSize,
    /// `set_source_size`
    SetSourceSize,
    /// `create_buffers`
    CreateBuffers,
    /// `destroy_buffers`
    DestroyBuffers,
    /// `post`
    Post,
    /// `set_rotation`
    SetRotation,
}

/// A recorded `post` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PostedBuffer {
    /// The presented window.
    pub window: WindowHandle,
    /// The presented buffer.
    pub buffer: BufferHandle,
    /// The declared damage.
    pub damage: DamageRect,
}

#[derive(Debug)]
struct FakeWindow {
    context: ContextHandle,
    group: Option<String>,
    ident: Option<String>,
    usage: Usage,
    format: Option<BufferFormat>,
    z_order: Option<i32>,
    position: SurfacePos,
    buffer_size: SurfaceSize,
    source_size: Option<SurfaceSize>,
    buffers: Vec<BufferHandle>,
    rotation: i32,
}

#[derive(Debug)]
struct PlatformState {
    parent_frame: SurfaceSize,
    next_handle: u64,
    contexts: Vec<ContextHandle>,
    windows: HashMap<u64, FakeWindow>,
    fail: Vec<WindowingOp>,
    log: Vec<WindowingOp>,
    posts: Vec<PostedBuffer>,
}

impl PlatformState {
    fn alloc(&mut self) -> u64 {
        let handle = self.next_handle;
        self.next_handle += 1;
        handle
    }

    /// Logs the operation and applies injected failures.
    fn enter(&mut self, op: WindowingOp) -> Result<(), WindowingError> {
        self.log.push(op);
        if self.fail.contains(&op) {
            Err(WindowingError::Rejected)
        } else {
            Ok(())
        }
    }

    fn window(&self, window: WindowHandle) -> Result<&FakeWindow, WindowingError> {
        self.windows.get(&window.0).ok_or(WindowingError::UnknownHandle)
    }

    fn window_mut(&mut self, window: WindowHandle) -> Result<&mut FakeWindow, WindowingError> {
        self.windows
            .get_mut(&window.0)
            .ok_or(WindowingError::UnknownHandle)
    }

    fn live_handles(&self) -> usize {
        let buffers: usize = self.windows.values().map(|w| w.buffers.len()).sum();
        self.contexts.len() + self.windows.len() + buffers
    }
}

type Shared = Arc<Mutex<PlatformState>>;

fn locked(state: &Shared) -> MutexGuard<'_, PlatformState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// The fake windowing collaborator. Move it into a surface; keep the paired
/// [`PlatformProbe`] for inspection.
#[derive(Debug)]
pub struct FakeWindowing {
    state: Shared,
}

/// Shared-state inspector and failure injector for a [`FakeWindowing`].
#[derive(Clone, Debug)]
pub struct PlatformProbe {
    state: Shared,
}

impl FakeWindowing {
    /// Creates a fake whose windows inherit `parent_frame` as their initial
    /// buffer-size property, plus the probe observing it.
    #[must_use]
    pub fn new(parent_frame: SurfaceSize) -> (Self, PlatformProbe) {
        let state = Arc::new(Mutex::new(PlatformState {
            parent_frame,
            next_handle: 1,
            contexts: Vec::new(),
            windows: HashMap::new(),
            fail: Vec::new(),
            log: Vec::new(),
            posts: Vec::new(),
        }));
        (
            Self {
                state: Arc::clone(&state),
            },
            PlatformProbe { state },
        )
    }
}

impl PlatformProbe {
    /// Makes every future `op` call fail with [`WindowingError::Rejected`].
    pub fn fail_on(&self, op: WindowingOp) {
        locked(&self.state).fail.push(op);
    }

    /// Clears all injected failures.
    pub fn clear_failures(&self) {
        locked(&self.state).fail.clear();
    }

    /// Total live platform handles: contexts + windows + buffers.
    #[must_use]
    pub fn live_handles(&self) -> usize {
        locked(&self.state).live_handles()
    }

    /// How many times `op` was called (including failed calls).
    #[must_use]
    pub fn op_count(&self, op: WindowingOp) -> usize {
        locked(&self.state).log.iter().filter(|o| **o == op).count()
    }

    /// All recorded `post` calls, oldest first.
    #[must_use]
    pub fn posts(&self) -> Vec<PostedBuffer> {
        locked(&self.state).posts.clone()
    }

    /// The single live window's position, if a window exists.
    #[must_use]
    pub fn window_position(&self) -> Option<SurfacePos> {
        let state = locked(&self.state);
        state.windows.values().next().map(|w| w.position)
    }

    /// The single live window's buffer-size property.
    #[must_use]
    pub fn window_buffer_size(&self) -> Option<SurfaceSize> {
        let state = locked(&self.state);
        state.windows.values().next().map(|w| w.buffer_size)
    }

    /// The single live window's joined group.
    #[must_use]
    pub fn window_group(&self) -> Option<String> {
        let state = locked(&self.state);
        state.windows.values().next().and_then(|w| w.group.clone())
    }

    /// The single live window's identity property.
    #[must_use]
    pub fn window_ident(&self) -> Option<String> {
        let state = locked(&self.state);
        state.windows.values().next().and_then(|w| w.ident.clone())
    }

    /// The single live window's stacking order.
    #[must_use]
    pub fn window_z_order(&self) -> Option<i32> {
        let state = locked(&self.state);
        state.windows.values().next().and_then(|w| w.z_order)
    }

    /// The single live window's rotation property.
    #[must_use]
    pub fn window_rotation(&self) -> Option<i32> {
        let state = locked(&self.state);
        state.windows.values().next().map(|w| w.rotation)
    }

    /// The single live window's buffer count.
    #[must_use]
    pub fn window_buffer_count(&self) -> Option<usize> {
        let state = locked(&self.state);
        state.windows.values().next().map(|w| w.buffers.len())
    }

    /// The single live window's explicitly set format, if any.
    #[must_use]
    pub fn window_format(&self) -> Option<BufferFormat> {
        let state = locked(&self.state);
        state.windows.values().next().and_then(|w| w.format)
    }

    /// The single live window's source-size property, if set.
    #[must_use]
    pub fn window_source_size(&self) -> Option<SurfaceSize> {
        let state = locked(&self.state);
        state.windows.values().next().and_then(|w| w.source_size)
    }

    /// The context the single live window was created under.
    #[must_use]
    pub fn window_context(&self) -> Option<ContextHandle> {
        let state = locked(&self.state);
        state.windows.values().next().map(|w| w.context)
    }
}

impl Windowing for FakeWindowing {
    fn create_context(&mut self) -> Result<ContextHandle, WindowingError> {
        let mut state = locked(&self.state);
        state.enter(WindowingOp::CreateContext)?;
        let context = ContextHandle(state.alloc());
        state.contexts.push(context);
        Ok(context)
    }

    fn create_child_window(
        &mut self,
        context: ContextHandle,
    ) -> Result<WindowHandle, WindowingError> {
        let mut state = locked(&self.state);
        state.enter(WindowingOp::CreateWindow)?;
        if !state.contexts.contains(&context) {
            return Err(WindowingError::UnknownHandle);
        }
        let handle = state.alloc();
        let parent_frame = state.parent_frame;
        state.windows.insert(
            handle,
            FakeWindow {
                context,
                group: None,
                ident: None,
                usage: Usage::empty(),
                format: None,
                z_order: None,
                position: SurfacePos::default(),
                buffer_size: parent_frame,
                source_size: None,
                buffers: Vec::new(),
                rotation: 0,
            },
        );
        Ok(WindowHandle(handle))
    }

    fn destroy_window(&mut self, window: WindowHandle) {
        let mut state = locked(&self.state);
        let _ = state.windows.remove(&window.0);
    }

    fn destroy_context(&mut self, context: ContextHandle) {
        let mut state = locked(&self.state);
        state.contexts.retain(|c| *c != context);
    }

    fn join_group(&mut self, window: WindowHandle, group: &str) -> Result<(), WindowingError> {
        let mut state = locked(&self.state);
        state.enter(WindowingOp::JoinGroup)?;
        state.window_mut(window)?.group = Some(group.to_owned());
        Ok(())
    }

    fn leave_group(&mut self, window: WindowHandle) -> Result<(), WindowingError> {
        let mut state = locked(&self.state);
        state.enter(WindowingOp::LeaveGroup)?;
        state.window_mut(window)?.group = None;
        Ok(())
    }

    fn set_ident(&mut self, window: WindowHandle, ident: &str) -> Result<(), WindowingError> {
        let mut state = locked(&self.state);
        state.enter(WindowingOp::SetIdent)?;
        state.window_mut(window)?.ident = Some(ident.to_owned());
        Ok(())
    }

    fn set_usage(&mut self, window: WindowHandle, usage: Usage) -> Result<(), WindowingError> {
        let mut state = locked(&self.state);
        state.enter(WindowingOp::SetUsage)?;
        state.window_mut(window)?.usage = usage;
        Ok(())
    }

    fn set_format(
        &mut self,
        window: WindowHandle,
        format: BufferFormat,
    ) -> Result<(), WindowingError> {
        let mut state = locked(&self.state);
        state.enter(WindowingOp::SetFormat)?;
        state.window_mut(window)?.format = Some(format);
        Ok(())
    }

    fn set_z_order(&mut self, window: WindowHandle, z: i32) -> Result<(), WindowingError> {
        let mut state = locked(&self.state);
        state.enter(WindowingOp::SetZOrder)?;
        state.window_mut(window)?.z_order = Some(z);
        Ok(())
    }

    fn set_position(
        &mut self,
        window: WindowHandle,
        pos: SurfacePos,
    ) -> Result<(), WindowingError> {
        let mut state = locked(&self.state);
        state.enter(WindowingOp::SetPosition)?;
        state.window_mut(window)?.position = pos;
        Ok(())
    }

    fn position(&self, window: WindowHandle) -> Result<SurfacePos, WindowingError> {
        let state = locked(&self.state);
        Ok(state.window(window)?.position)
    }

    fn set_buffer_size(
        &mut self,
        window: WindowHandle,
        size: SurfaceSize,
    ) -> Result<(), WindowingError> {
        let mut state = locked(&self.state);
        state.enter(WindowingOp::SetBufferSize)?;
        state.window_mut(window)?.buffer_size = size;
        Ok(())
    }

    fn set_source_size(
        &mut self,
        window: WindowHandle,
        size: SurfaceSize,
    ) -> Result<(), WindowingError> {
        let mut state = locked(&self.state);
        state.enter(WindowingOp::SetSourceSize)?;
        state.window_mut(window)?.source_size = Some(size);
        Ok(())
    }

    fn buffer_size(&self, window: WindowHandle) -> Result<SurfaceSize, WindowingError> {
        let state = locked(&self.state);
        Ok(state.window(window)?.buffer_size)
    }

    fn create_buffers(&mut self, window: WindowHandle, count: u32) -> Result<(), WindowingError> {
        let mut state = locked(&self.state);
        state.enter(WindowingOp::CreateBuffers)?;
        let mut handles = Vec::new();
        for _ in 0..count {
            handles.push(BufferHandle(state.alloc()));
        }
        state.window_mut(window)?.buffers = handles;
        Ok(())
    }

    fn destroy_buffers(&mut self, window: WindowHandle) -> Result<(), WindowingError> {
        let mut state = locked(&self.state);
        state.enter(WindowingOp::DestroyBuffers)?;
        state.window_mut(window)?.buffers.clear();
        Ok(())
    }

    fn render_buffer(&self, window: WindowHandle) -> Result<BufferHandle, WindowingError> {
        let state = locked(&self.state);
        state
            .window(window)?
            .buffers
            .first()
            .copied()
            .ok_or(WindowingError::Unavailable)
    }

    fn post(
        &mut self,
        window: WindowHandle,
        buffer: BufferHandle,
        damage: DamageRect,
    ) -> Result<(), WindowingError> {
        let mut state = locked(&self.state);
        state.enter(WindowingOp::Post)?;
        if !state.window(window)?.buffers.contains(&buffer) {
            return Err(WindowingError::UnknownHandle);
        }
        state.posts.push(PostedBuffer {
            window,
            buffer,
            damage,
        });
        Ok(())
    }

    fn set_rotation(&mut self, window: WindowHandle, degrees: i32) -> Result<(), WindowingError> {
        let mut state = locked(&self.state);
        state.enter(WindowingOp::SetRotation)?;
        state.window_mut(window)?.rotation = degrees;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{FakeWindowing, PlatformProbe, WindowingOp};
    use crate::hooks::{HookCall, HooksProbe, RecordingHooks};
    use kurbo::Rect;
    use underlay_core::events::SurfaceEvent;
    use underlay_core::geometry::{Region, SurfacePos, SurfaceSize};
    use underlay_core::handle::{WindowGroup, WindowIdent, Z_ORDER_MIN};
    use underlay_core::layout::Orientation;
    use underlay_core::present::RasterPresent;
    use underlay_core::surface::{Surface, SurfaceConfig};
    use underlay_core::windowing::Usage;

    const FRAME: SurfaceSize = SurfaceSize::new(640, 480);

    fn raster_surface() -> (Surface, PlatformProbe, HooksProbe) {
        let (platform, probe) = FakeWindowing::new(FRAME);
        let (hooks, hooks_probe) = RecordingHooks::new();
        let surface = Surface::new(
            SurfaceConfig::new(),
            Box::new(platform),
            Box::new(RasterPresent::new()),
            Box::new(hooks),
        );
        (surface, probe, hooks_probe)
    }

    /// Rect with the same size as `FRAME` at the given origin.
    fn frame_at(x: f64, y: f64) -> Rect {
        Rect::new(x, y, x + 640.0, y + 480.0)
    }

    #[test]
    fn activation_creates_a_valid_surface() {
        let (surface, probe, hooks) = raster_surface();
        assert!(!surface.is_valid());
        assert!(!surface.created_successfully());

        surface.activate();

        assert!(surface.is_valid());
        assert!(surface.created_successfully());
        assert_eq!(
            surface.poll_event(),
            Some(SurfaceEvent::Created { success: true })
        );
        assert_eq!(surface.poll_event(), None);

        // The window inherited the parent's allocated frame.
        assert_eq!(surface.size(), FRAME);
        assert_eq!(probe.window_buffer_size(), Some(FRAME));
        assert_eq!(probe.window_buffer_count(), Some(1));
        assert_eq!(probe.window_z_order(), Some(Z_ORDER_MIN));
        assert_eq!(
            probe.window_group().as_deref(),
            Some(WindowGroup::APPLICATION_MAIN)
        );
        assert_eq!(probe.window_ident().as_deref(), Some(WindowIdent::DEFAULT));

        // Layout ran first (with the allocated frame), then the one-time
        // window hook, then the initial paint.
        let calls = hooks.calls();
        assert_eq!(calls[0], HookCall::Layout(640, 480));
        assert!(matches!(calls[1], HookCall::SetupPaintWindow(_)));
        assert!(matches!(calls[2], HookCall::Paint(_)));
        assert_eq!(probe.posts().len(), 1);
    }

    #[test]
    fn second_activation_is_ignored() {
        let (surface, probe, _hooks) = raster_surface();
        surface.activate();
        surface.activate();

        assert_eq!(probe.op_count(WindowingOp::CreateContext), 1);
        assert_eq!(probe.posts().len(), 1);
        assert!(surface.poll_event().is_some());
        assert_eq!(surface.poll_event(), None);
    }

    #[test]
    fn presented_damage_never_exceeds_buffer_size() {
        let (surface, probe, _hooks) = raster_surface();
        surface.activate();

        surface.invalidate_region(Region::new(0, 0, 10_000, 10_000));

        let last = *probe.posts().last().expect("a post happened");
        assert_eq!(last.damage.width(), FRAME.width);
        assert_eq!(last.damage.height(), FRAME.height);
    }

    #[test]
    fn unchanged_frame_event_does_nothing() {
        let (surface, probe, hooks) = raster_surface();
        surface.activate();
        let posts = probe.posts().len();
        let paints = hooks.paints();

        surface.frame_changed(frame_at(0.0, 0.0));

        assert_eq!(probe.op_count(WindowingOp::SetPosition), 0);
        assert_eq!(probe.op_count(WindowingOp::DestroyBuffers), 0);
        assert_eq!(probe.posts().len(), posts);
        assert_eq!(hooks.paints(), paints);
    }

    #[test]
    fn size_only_frame_change_resizes_and_repaints() {
        let (surface, probe, hooks) = raster_surface();
        surface.activate();
        let paints = hooks.paints();

        surface.frame_changed(Rect::new(0.0, 0.0, 800.0, 600.0));

        assert_eq!(probe.window_buffer_size(), Some(SurfaceSize::new(800, 600)));
        assert_eq!(probe.window_source_size(), Some(SurfaceSize::new(800, 600)));
        assert_eq!(probe.op_count(WindowingOp::SetPosition), 0);
        assert_eq!(hooks.layouts().last(), Some(&(800, 600)));
        assert_eq!(hooks.paints(), paints + 1);

        // Layout at the new size strictly precedes the paint at the new size.
        let calls = hooks.calls();
        let layout_idx = calls
            .iter()
            .position(|c| *c == HookCall::Layout(800, 600))
            .expect("layout ran");
        let last_paint_idx = calls
            .iter()
            .rposition(|c| matches!(c, HookCall::Paint(_)))
            .expect("paint ran");
        assert!(layout_idx < last_paint_idx);

        let last = *probe.posts().last().expect("re-presented");
        assert_eq!(last.damage.width(), 800);
        assert_eq!(last.damage.height(), 600);
    }

    #[test]
    fn move_only_frame_change_represents_without_repainting() {
        let (surface, probe, hooks) = raster_surface();
        surface.activate();
        let posts = probe.posts().len();
        let paints = hooks.paints();

        surface.frame_changed(frame_at(15.5, 20.25));

        assert_eq!(probe.window_position(), Some(SurfacePos::new(15, 20)));
        assert_eq!(probe.op_count(WindowingOp::DestroyBuffers), 0);
        // Re-presented the existing content without invoking paint.
        assert_eq!(probe.posts().len(), posts + 1);
        assert_eq!(hooks.paints(), paints);
    }

    #[test]
    fn cleanup_is_idempotent_and_disables_geometry_ops() {
        let (surface, probe, hooks) = raster_surface();
        surface.activate();

        surface.cleanup();
        assert!(!surface.is_valid());
        assert_eq!(probe.live_handles(), 0);

        surface.cleanup();
        assert!(!surface.is_valid());

        let posts = probe.posts().len();
        assert!(!surface.move_to(SurfacePos::new(5, 5)));
        assert!(!surface.resize(SurfaceSize::new(10, 10)));
        surface.invalidate();
        surface.frame_changed(frame_at(50.0, 50.0));
        assert_eq!(probe.posts().len(), posts);

        let cleanups = hooks
            .calls()
            .iter()
            .filter(|c| matches!(c, HookCall::CleanupPaintWindow(_)))
            .count();
        assert_eq!(cleanups, 1);
    }

    #[test]
    fn same_group_set_is_a_noop() {
        let (surface, probe, _hooks) = raster_surface();
        surface.activate();
        let _ = surface.poll_event();

        assert!(surface.set_window_group(WindowGroup::application_main()));

        assert_eq!(probe.op_count(WindowingOp::LeaveGroup), 0);
        assert_eq!(probe.op_count(WindowingOp::JoinGroup), 1);
        assert_eq!(surface.poll_event(), None);
    }

    #[test]
    fn group_change_leaves_and_rejoins() {
        let (surface, probe, _hooks) = raster_surface();
        surface.activate();
        let _ = surface.poll_event();

        let group = WindowGroup::new("overlay.sidebar");
        assert!(surface.set_window_group(group.clone()));

        assert_eq!(probe.op_count(WindowingOp::LeaveGroup), 1);
        assert_eq!(probe.op_count(WindowingOp::JoinGroup), 2);
        assert_eq!(probe.window_group().as_deref(), Some("overlay.sidebar"));
        assert_eq!(surface.poll_event(), Some(SurfaceEvent::GroupChanged { group }));
    }

    #[test]
    fn group_is_changeable_before_activation() {
        let (surface, probe, _hooks) = raster_surface();
        let group = WindowGroup::new("pane.secondary");
        assert!(surface.set_window_group(group));

        surface.activate();

        // No leave/rejoin dance; the window joined the new group directly.
        assert_eq!(probe.op_count(WindowingOp::LeaveGroup), 0);
        assert_eq!(probe.window_group().as_deref(), Some("pane.secondary"));
    }

    #[test]
    fn setup_failure_unwinds_and_reports() {
        let (surface, probe, hooks) = raster_surface();
        probe.fail_on(WindowingOp::JoinGroup);

        surface.activate();

        assert!(!surface.is_valid());
        assert!(!surface.created_successfully());
        assert_eq!(
            surface.poll_event(),
            Some(SurfaceEvent::Created { success: false })
        );
        assert_eq!(probe.live_handles(), 0);
        assert!(hooks.calls().is_empty());
    }

    #[test]
    fn buffer_allocation_failure_keeps_window_alive() {
        let (surface, probe, hooks) = raster_surface();
        probe.fail_on(WindowingOp::CreateBuffers);

        surface.activate();

        assert!(!surface.is_valid());
        assert_eq!(
            surface.poll_event(),
            Some(SurfaceEvent::Created { success: false })
        );
        // Unlike every other gate, buffer allocation does not unwind the
        // context and window.
        assert_eq!(probe.live_handles(), 2);
        assert!(hooks.calls().is_empty());

        // Teardown still releases them.
        surface.cleanup();
        assert_eq!(probe.live_handles(), 0);
    }

    #[test]
    fn resize_failure_reports_false() {
        let (surface, probe, _hooks) = raster_surface();
        surface.activate();

        probe.fail_on(WindowingOp::CreateBuffers);
        assert!(!surface.resize(SurfaceSize::new(100, 100)));
        // Old buffers are gone; the surface is in the documented
        // inconsistent state until a successful resize.
        assert_eq!(probe.window_buffer_count(), Some(0));

        probe.clear_failures();
        assert!(surface.resize(SurfaceSize::new(100, 100)));
        assert_eq!(probe.window_buffer_count(), Some(1));
    }

    #[test]
    fn rotation_requires_rotation_usage() {
        let (surface, probe, _hooks) = raster_surface();
        surface.activate();

        surface.rotation_changed(Orientation::Deg90);
        assert_eq!(probe.op_count(WindowingOp::SetRotation), 0);

        assert!(surface.set_usage(Usage::WRITE | Usage::ROTATION));
        surface.rotation_changed(Orientation::Deg270);
        assert_eq!(probe.window_rotation(), Some(270));
    }

    #[test]
    fn pre_activation_usage_is_applied_during_setup() {
        let (surface, probe, _hooks) = raster_surface();
        assert!(surface.set_usage(Usage::READ | Usage::WRITE));
        assert_eq!(surface.usage(), Usage::READ | Usage::WRITE);

        surface.activate();

        assert_eq!(probe.op_count(WindowingOp::SetUsage), 1);
        assert_eq!(surface.usage(), Usage::READ | Usage::WRITE);
    }

    #[test]
    fn dropping_the_surface_releases_native_resources() {
        let (surface, probe, _hooks) = raster_surface();
        surface.activate();
        assert!(probe.live_handles() > 0);

        drop(surface);
        assert_eq!(probe.live_handles(), 0);
    }
}
