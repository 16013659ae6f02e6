// Copyright 2026 the Underlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hardware-accelerated presentation for `underlay_core` surfaces.
//!
//! This crate layers a graphics-context lifecycle (display, config, context,
//! window surface — an EGL-shaped contract) over the native-window lifecycle
//! and swaps buffers to present, replacing the raster strategy's explicit
//! post:
//!
//! ```text
//!   begin_setup:   display → initialize → bind API → config → context
//!   (native window setup runs in underlay_core)
//!   finish_setup:  window surface → make current → swap interval 1
//!   frame:         make current → paint_gl() → swap buffers
//!   teardown:      clear current → surface → context → terminate → thread
//! ```
//!
//! The strategy fixes usage flags (per [`GlVersion`]), double-buffering, and
//! an RGBX8888 format at creation time, and therefore refuses usage changes
//! and native cleanup handlers.
//!
//! No rendering happens here: the embedder draws in
//! [`SurfaceHooks::paint_gl`](underlay_core::hooks::SurfaceHooks::paint_gl)
//! with the graphics API of its choice while the context is current.

mod binding;
mod context;
mod strategy;

pub use binding::{
    ConfigRequest, ContextRequest, DisplayHandle, GlBinding, GlConfigHandle, GlContextHandle,
    GlError, GlSurfaceHandle, Renderable,
};
pub use context::GraphicsContext;
pub use strategy::{GlPresent, GlVersion};
