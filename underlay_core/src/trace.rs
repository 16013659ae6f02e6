// Copyright 2026 the Underlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the surface lifecycle.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! surface calls at each lifecycle stage. All method bodies default to
//! no-ops, so implementing only the events you care about is fine.
//!
//! Events fire per surface operation (setup, resize, present), not per
//! frame-loop phase, so the sink is held as a plain optional field with one
//! branch per emission; there is no compile-time gating.

use crate::geometry::{DamageRect, SurfacePos, SurfaceSize};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Which gate of the window setup sequence an event refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SetupStep {
    /// Creating the process-scoped drawing context.
    CreateContext,
    /// Creating the child window.
    CreateWindow,
    /// Joining the compositor window group.
    JoinGroup,
    /// Setting the string identity property.
    SetIdent,
    /// Setting non-default usage flags.
    SetUsage,
    /// Setting a non-default buffer format.
    SetFormat,
    /// Setting the stacking order.
    SetZOrder,
    /// Allocating presentation buffers.
    CreateBuffers,
    /// Strategy-owned pre-window resources (e.g. a GL context chain).
    StrategyBegin,
    /// Strategy-owned post-window resources (e.g. a GL window surface).
    StrategyFinish,
}

/// Which stage of a resize failed, when one does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResizeStage {
    /// Releasing the old buffers.
    DestroyBuffers,
    /// Writing the new buffer/source extents.
    SetExtents,
    /// Allocating the replacement buffers.
    CreateBuffers,
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when window setup aborts at a gate.
#[derive(Clone, Copy, Debug)]
pub struct SetupFailedEvent {
    /// The gate that failed.
    pub step: SetupStep,
}

/// Emitted after a completed paint/present cycle.
#[derive(Clone, Copy, Debug)]
pub struct PresentEvent {
    /// Damage declared to the compositor; `None` for strategies that present
    /// by whole-surface swap.
    pub damage: Option<DamageRect>,
    /// Whether the embedder's paint entry point ran this cycle.
    pub painted: bool,
}

/// Emitted after a buffer resize attempt.
#[derive(Clone, Copy, Debug)]
pub struct ResizeEvent {
    /// The requested extent.
    pub size: SurfaceSize,
    /// The stage that failed, or `None` on success.
    pub failed_at: Option<ResizeStage>,
}

/// Emitted after a successful window move.
#[derive(Clone, Copy, Debug)]
pub struct MoveEvent {
    /// The new position.
    pub pos: SurfacePos,
}

/// Emitted after handling a host frame-changed notification.
#[derive(Clone, Copy, Debug)]
pub struct FrameChangeEvent {
    /// Whether the window position changed.
    pub moved: bool,
    /// Whether the buffers were rebuilt for a new size.
    pub resized: bool,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the surface lifecycle.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when a setup gate completes.
    fn on_setup_step(&mut self, step: SetupStep) {
        _ = step;
    }

    /// Called when setup aborts at a gate.
    fn on_setup_failed(&mut self, e: &SetupFailedEvent) {
        _ = e;
    }

    /// Called after the surface becomes valid.
    fn on_activated(&mut self) {}

    /// Called after a completed paint/present cycle.
    fn on_present(&mut self, e: &PresentEvent) {
        _ = e;
    }

    /// Called after a buffer resize attempt, successful or not.
    fn on_resize(&mut self, e: &ResizeEvent) {
        _ = e;
    }

    /// Called after a successful window move.
    fn on_move(&mut self, e: &MoveEvent) {
        _ = e;
    }

    /// Called after a host frame-changed notification was handled.
    fn on_frame_change(&mut self, e: &FrameChangeEvent) {
        _ = e;
    }

    /// Called when teardown releases the native resources.
    fn on_cleanup(&mut self) {}
}

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}
