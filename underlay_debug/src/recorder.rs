// Copyright 2026 the Underlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event recording and JSON export.
//!
//! [`RecorderSink`] implements [`TraceSink`] and retains every event as a
//! [`RecordedEvent`]. [`export_json`] turns a recording into a JSON array
//! suitable for log pipelines or offline diffing of lifecycle runs.

use serde_json::{Value, json};

use underlay_core::trace::{
    FrameChangeEvent, MoveEvent, PresentEvent, ResizeEvent, SetupFailedEvent, SetupStep, TraceSink,
};

/// One retained lifecycle event.
#[derive(Clone, Copy, Debug)]
pub enum RecordedEvent {
    /// A setup gate completed.
    SetupStep(SetupStep),
    /// Setup aborted at a gate.
    SetupFailed(SetupFailedEvent),
    /// The surface became valid.
    Activated,
    /// A paint/present cycle completed.
    Present(PresentEvent),
    /// A resize attempt finished.
    Resize(ResizeEvent),
    /// The window moved.
    Move(MoveEvent),
    /// A host frame-changed notification was handled.
    FrameChange(FrameChangeEvent),
    /// Teardown released the native resources.
    Cleanup,
}

/// A [`TraceSink`] that retains every event in order.
#[derive(Debug, Default)]
pub struct RecorderSink {
    events: Vec<RecordedEvent>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Consumes the recorder and returns the events.
    #[must_use]
    pub fn into_events(self) -> Vec<RecordedEvent> {
        self.events
    }
}

impl TraceSink for RecorderSink {
    fn on_setup_step(&mut self, step: SetupStep) {
        self.events.push(RecordedEvent::SetupStep(step));
    }

    fn on_setup_failed(&mut self, e: &SetupFailedEvent) {
        self.events.push(RecordedEvent::SetupFailed(*e));
    }

    fn on_activated(&mut self) {
        self.events.push(RecordedEvent::Activated);
    }

    fn on_present(&mut self, e: &PresentEvent) {
        self.events.push(RecordedEvent::Present(*e));
    }

    fn on_resize(&mut self, e: &ResizeEvent) {
        self.events.push(RecordedEvent::Resize(*e));
    }

    fn on_move(&mut self, e: &MoveEvent) {
        self.events.push(RecordedEvent::Move(*e));
    }

    fn on_frame_change(&mut self, e: &FrameChangeEvent) {
        self.events.push(RecordedEvent::FrameChange(*e));
    }

    fn on_cleanup(&mut self) {
        self.events.push(RecordedEvent::Cleanup);
    }
}

/// Exports recorded events as a JSON array.
#[must_use]
pub fn export_json(events: &[RecordedEvent]) -> Value {
    let items: Vec<Value> = events.iter().map(event_json).collect();
    Value::Array(items)
}

fn event_json(event: &RecordedEvent) -> Value {
    match event {
        RecordedEvent::SetupStep(step) => json!({
            "event": "setup_step",
            "step": format!("{step:?}"),
        }),
        RecordedEvent::SetupFailed(e) => json!({
            "event": "setup_failed",
            "step": format!("{:?}", e.step),
        }),
        RecordedEvent::Activated => json!({ "event": "activated" }),
        RecordedEvent::Present(e) => json!({
            "event": "present",
            "painted": e.painted,
            "damage": e.damage.map(|d| json!([d.x1, d.y1, d.x2, d.y2])),
        }),
        RecordedEvent::Resize(e) => json!({
            "event": "resize",
            "width": e.size.width,
            "height": e.size.height,
            "failed_at": e.failed_at.map(|stage| format!("{stage:?}")),
        }),
        RecordedEvent::Move(e) => json!({
            "event": "move",
            "x": e.pos.x,
            "y": e.pos.y,
        }),
        RecordedEvent::FrameChange(e) => json!({
            "event": "frame_change",
            "moved": e.moved,
            "resized": e.resized,
        }),
        RecordedEvent::Cleanup => json!({ "event": "cleanup" }),
    }
}
