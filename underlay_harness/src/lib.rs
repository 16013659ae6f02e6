// Copyright 2026 the Underlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reusable fakes for underlay's platform contracts.
//!
//! Each fake comes paired with a *probe* sharing its state, so a test can
//! move the fake into a surface and keep inspecting it from outside:
//!
//! - [`FakeWindowing`] / [`PlatformProbe`] — the windowing collaborator,
//!   with per-operation failure injection, a call log, property readbacks,
//!   and a live-handle count for leak checks.
//! - [`FakeGl`] / [`GlProbe`] — the graphics-context collaborator, tracking
//!   display initialization, the thread-current pair, swaps, and thread
//!   releases.
//! - [`RecordingHooks`] / [`HooksProbe`] — embedder hooks that record every
//!   invocation in order.
//!
//! The workspace's behavior tests live at the bottom of each module here;
//! embedder test suites can depend on this crate for the same doubles.

pub mod gl;
pub mod hooks;
pub mod platform;

pub use gl::{FakeGl, GlOp, GlProbe};
pub use hooks::{HookCall, HooksProbe, RecordingHooks};
pub use platform::{FakeWindowing, PlatformProbe, PostedBuffer, WindowingOp};
