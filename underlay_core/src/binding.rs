// Copyright 2026 the Underlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Foreign-window binding toward the host toolkit.
//!
//! The host's compositor learns about the natively created window through a
//! toolkit-side binding object: the surface hands it the window handle as
//! soon as the window exists and revokes it before the window is destroyed.
//! The binding is the only host-facing object that ever sees the raw handle.

use crate::windowing::WindowHandle;

/// Toolkit-side object that lets a native window participate in the host's
/// layout and compositing tree.
pub trait ForeignWindowBinding {
    /// Called when the native window exists; hands its handle to the host
    /// compositor.
    fn attach(&mut self, window: WindowHandle);

    /// Called before the native window is destroyed; the host must stop
    /// referencing the handle.
    fn detach(&mut self);
}

/// A binding for hosts that do not consume the handle (headless use, tests).
#[derive(Clone, Copy, Debug, Default)]
pub struct DetachedBinding;

impl ForeignWindowBinding for DetachedBinding {
    fn attach(&mut self, _window: WindowHandle) {}

    fn detach(&mut self) {}
}
