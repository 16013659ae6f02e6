// Copyright 2026 the Underlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Surface lifecycle and presentation bridge for embedded native compositor
//! windows.
//!
//! `underlay_core` lets application code paint directly into a
//! platform-native window that composites *behind* a host UI toolkit's
//! widget tree (the window is pinned at minimum stacking depth). The crate
//! owns the hard parts — native-window setup and teardown, buffer
//! reallocation on resize, and the locked invalidate → paint → present
//! cycle — while the platform windowing API and the host toolkit stay
//! behind contracts.
//!
//! # Architecture
//!
//! ```text
//!   host layout pass                      embedder code
//!        │ frame_changed / rotation            ▲ hooks: setup / paint /
//!        ▼                                     │        layout / cleanup
//!   Surface ──────────────────────────────────-┘
//!     │  one lock: {resize, move, present} mutually exclusive
//!     ├──► PresentStrategy (raster post │ GL swap, chosen at construction)
//!     ├──► Windowing (platform contract: windows, buffers, properties)
//!     ├──► ForeignWindowBinding (hands the handle to the host compositor)
//!     └──► SurfaceEvent queue (created / property-change notifications)
//! ```
//!
//! **[`surface`]** — [`Surface`](surface::Surface): two-phase lifecycle
//! (cheap construction, `activate()` on host attach), the gated setup
//! sequence, resize/move, and the presentation engine.
//!
//! **[`windowing`]** — The platform windowing contract and its handle,
//! usage-flag, and buffer-format vocabulary.
//!
//! **[`present`]** — [`PresentStrategy`](present::PresentStrategy) and the
//! raster (post-with-damage) strategy. The accelerated strategy lives in
//! `underlay_gl`.
//!
//! **[`layout`]** — Frame-changed and orientation handling: move vs. resize
//! vs. nothing, repaint only when the size changed.
//!
//! **[`hooks`]** — The embedder contract and the single-slot native cleanup
//! handler.
//!
//! **[`handle`]** — Window identity (group, id) and the native ownership
//! record.
//!
//! **[`binding`]** — The toolkit-side foreign-window binding contract.
//!
//! **[`events`]** — Outward lifecycle/property notifications, drained by the
//! host.
//!
//! **[`geometry`]** — Integer device geometry and damage rectangles;
//! conversions from the host's float frames floor, never round.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) diagnostics for the
//! lifecycle, with no-op defaults.

pub mod binding;
pub mod events;
pub mod geometry;
pub mod handle;
pub mod hooks;
pub mod layout;
pub mod present;
pub mod surface;
pub mod trace;
pub mod windowing;

pub use binding::{DetachedBinding, ForeignWindowBinding};
pub use events::SurfaceEvent;
pub use geometry::{DamageRect, Region, SurfacePos, SurfaceSize};
pub use handle::{NativeSurfaceHandle, WindowGroup, WindowIdent, Z_ORDER_MIN};
pub use hooks::{CleanupToken, NoopHooks, SurfaceHooks};
pub use layout::Orientation;
pub use present::{FrameRequest, PresentStrategy, PresentedFrame, RasterPresent, SetupRequest};
pub use surface::{Surface, SurfaceConfig};
pub use windowing::{
    BufferFormat, BufferHandle, ContextHandle, Usage, WindowHandle, Windowing, WindowingError,
};
