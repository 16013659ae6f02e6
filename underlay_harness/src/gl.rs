// Copyright 2026 the Underlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory fake of the graphics-context API contract.
//!
//! [`FakeGl`] tracks display initialization, live config/context/surface
//! handles, the per-thread current pair, and swap counts. [`GlProbe`] shares
//! its state for failure injection and leak checks.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use underlay_core::windowing::WindowHandle;
use underlay_gl::{
    ConfigRequest, ContextRequest, DisplayHandle, GlBinding, GlConfigHandle, GlContextHandle,
    GlError, GlSurfaceHandle,
};

/// One operation of the graphics contract, used for logging and failure
/// injection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GlOp {
    /// `default_display`
    DefaultDisplay,
    /// `initialize`
    Initialize,
    /// `bind_api`
    BindApi,
    /// `choose_config`
    ChooseConfig,
    /// `create_context`
    CreateContext,
    /// `create_window_surface`
    CreateWindowSurface,
    /// `make_current`
    MakeCurrent,
    /// `set_swap_interval`
    SetSwapInterval,
    /// `swap_buffers`
    SwapBuffers,
}

#[derive(Debug)]
struct GlState {
    next_handle: u64,
    fail: Vec<GlOp>,
    log: Vec<GlOp>,
    live_displays: Vec<DisplayHandle>,
    initialized: Vec<DisplayHandle>,
    live_contexts: Vec<GlContextHandle>,
    live_surfaces: Vec<GlSurfaceHandle>,
    current: Option<(GlSurfaceHandle, GlContextHandle)>,
    api_bound: bool,
    swap_interval: Option<i32>,
    swaps: u32,
    thread_releases: u32,
}

impl GlState {
    fn alloc(&mut self) -> u64 {
        let handle = self.next_handle;
        self.next_handle += 1;
        handle
    }

    fn enter(&mut self, op: GlOp) -> Result<(), GlError> {
        self.log.push(op);
        if self.fail.contains(&op) {
            Err(GlError::Failed)
        } else {
            Ok(())
        }
    }
}

type Shared = Arc<Mutex<GlState>>;

fn locked(state: &Shared) -> MutexGuard<'_, GlState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// The fake graphics collaborator. Move it into a [`GlPresent`]
/// (`underlay_gl::GlPresent`); keep the paired [`GlProbe`] for inspection.
#[derive(Debug)]
pub struct FakeGl {
    state: Shared,
}

/// Shared-state inspector and failure injector for a [`FakeGl`].
#[derive(Clone, Debug)]
pub struct GlProbe {
    state: Shared,
}

impl FakeGl {
    /// Creates a fake plus the probe observing it.
    #[must_use]
    pub fn new() -> (Self, GlProbe) {
        let state = Arc::new(Mutex::new(GlState {
            next_handle: 1,
            fail: Vec::new(),
            log: Vec::new(),
            live_displays: Vec::new(),
            initialized: Vec::new(),
            live_contexts: Vec::new(),
            live_surfaces: Vec::new(),
            current: None,
            api_bound: false,
            swap_interval: None,
            swaps: 0,
            thread_releases: 0,
        }));
        (
            Self {
                state: Arc::clone(&state),
            },
            GlProbe { state },
        )
    }
}

impl GlProbe {
    /// Makes every future `op` call fail with [`GlError::Failed`].
    pub fn fail_on(&self, op: GlOp) {
        locked(&self.state).fail.push(op);
    }

    /// Total live graphics handles: displays + contexts + surfaces.
    #[must_use]
    pub fn live_handles(&self) -> usize {
        let state = locked(&self.state);
        state.live_displays.len() + state.live_contexts.len() + state.live_surfaces.len()
    }

    /// Number of displays not yet terminated.
    #[must_use]
    pub fn live_display_count(&self) -> usize {
        locked(&self.state).live_displays.len()
    }

    /// Number of `swap_buffers` calls that succeeded.
    #[must_use]
    pub fn swaps(&self) -> u32 {
        locked(&self.state).swaps
    }

    /// Number of `release_thread` calls.
    #[must_use]
    pub fn thread_releases(&self) -> u32 {
        locked(&self.state).thread_releases
    }

    /// Whether a surface/context pair is current.
    #[must_use]
    pub fn has_current(&self) -> bool {
        locked(&self.state).current.is_some()
    }

    /// The last swap interval set, if any.
    #[must_use]
    pub fn swap_interval(&self) -> Option<i32> {
        locked(&self.state).swap_interval
    }

    /// Whether the rendering API was bound for the thread.
    #[must_use]
    pub fn api_bound(&self) -> bool {
        locked(&self.state).api_bound
    }

    /// How many times `op` was called (including failed calls).
    #[must_use]
    pub fn op_count(&self, op: GlOp) -> usize {
        locked(&self.state).log.iter().filter(|o| **o == op).count()
    }
}

impl GlBinding for FakeGl {
    fn default_display(&mut self) -> Result<DisplayHandle, GlError> {
        let mut state = locked(&self.state);
        state.enter(GlOp::DefaultDisplay).map_err(|_| GlError::NoDisplay)?;
        let display = DisplayHandle(state.alloc());
        state.live_displays.push(display);
        Ok(display)
    }

    fn initialize(&mut self, display: DisplayHandle) -> Result<(), GlError> {
        let mut state = locked(&self.state);
        state.enter(GlOp::Initialize)?;
        if !state.live_displays.contains(&display) {
            return Err(GlError::NoDisplay);
        }
        state.initialized.push(display);
        Ok(())
    }

    fn bind_api(&mut self) -> Result<(), GlError> {
        let mut state = locked(&self.state);
        state.enter(GlOp::BindApi)?;
        state.api_bound = true;
        Ok(())
    }

    fn choose_config(
        &mut self,
        display: DisplayHandle,
        _request: &ConfigRequest,
    ) -> Result<GlConfigHandle, GlError> {
        let mut state = locked(&self.state);
        state.enter(GlOp::ChooseConfig).map_err(|_| GlError::NoConfig)?;
        if !state.initialized.contains(&display) {
            return Err(GlError::NotInitialized);
        }
        Ok(GlConfigHandle(state.alloc()))
    }

    fn create_context(
        &mut self,
        display: DisplayHandle,
        _config: GlConfigHandle,
        _request: &ContextRequest,
    ) -> Result<GlContextHandle, GlError> {
        let mut state = locked(&self.state);
        state.enter(GlOp::CreateContext)?;
        if !state.initialized.contains(&display) {
            return Err(GlError::NotInitialized);
        }
        let context = GlContextHandle(state.alloc());
        state.live_contexts.push(context);
        Ok(context)
    }

    fn create_window_surface(
        &mut self,
        display: DisplayHandle,
        _config: GlConfigHandle,
        _window: WindowHandle,
    ) -> Result<GlSurfaceHandle, GlError> {
        let mut state = locked(&self.state);
        state.enter(GlOp::CreateWindowSurface)?;
        if !state.initialized.contains(&display) {
            return Err(GlError::NotInitialized);
        }
        let surface = GlSurfaceHandle(state.alloc());
        state.live_surfaces.push(surface);
        Ok(surface)
    }

    fn make_current(
        &mut self,
        _display: DisplayHandle,
        surface: GlSurfaceHandle,
        context: GlContextHandle,
    ) -> Result<(), GlError> {
        let mut state = locked(&self.state);
        state.enter(GlOp::MakeCurrent)?;
        if !state.live_surfaces.contains(&surface) || !state.live_contexts.contains(&context) {
            return Err(GlError::Failed);
        }
        state.current = Some((surface, context));
        Ok(())
    }

    fn clear_current(&mut self, _display: DisplayHandle) {
        locked(&self.state).current = None;
    }

    fn set_swap_interval(
        &mut self,
        _display: DisplayHandle,
        interval: i32,
    ) -> Result<(), GlError> {
        let mut state = locked(&self.state);
        state.enter(GlOp::SetSwapInterval)?;
        state.swap_interval = Some(interval);
        Ok(())
    }

    fn swap_buffers(
        &mut self,
        _display: DisplayHandle,
        surface: GlSurfaceHandle,
    ) -> Result<(), GlError> {
        let mut state = locked(&self.state);
        state.enter(GlOp::SwapBuffers)?;
        if !state.live_surfaces.contains(&surface) {
            return Err(GlError::Failed);
        }
        state.swaps += 1;
        Ok(())
    }

    fn destroy_surface(&mut self, _display: DisplayHandle, surface: GlSurfaceHandle) {
        let mut state = locked(&self.state);
        state.live_surfaces.retain(|s| *s != surface);
    }

    fn destroy_context(&mut self, _display: DisplayHandle, context: GlContextHandle) {
        let mut state = locked(&self.state);
        state.live_contexts.retain(|c| *c != context);
    }

    fn terminate(&mut self, display: DisplayHandle) {
        let mut state = locked(&self.state);
        state.live_displays.retain(|d| *d != display);
        state.initialized.retain(|d| *d != display);
    }

    fn release_thread(&mut self) {
        let mut state = locked(&self.state);
        state.current = None;
        state.thread_releases += 1;
    }
}
