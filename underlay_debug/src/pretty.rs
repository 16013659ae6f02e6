// Copyright 2026 the Underlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per
//! event to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use underlay_core::trace::{
    FrameChangeEvent, MoveEvent, PresentEvent, ResizeEvent, SetupFailedEvent, SetupStep, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write)
/// destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write + Send>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write + Send>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the destination, consuming the sink.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_setup_step(&mut self, step: SetupStep) {
        let _ = writeln!(self.writer, "[setup] {step:?}");
    }

    fn on_setup_failed(&mut self, e: &SetupFailedEvent) {
        let _ = writeln!(self.writer, "[setup] FAILED at {:?}", e.step);
    }

    fn on_activated(&mut self) {
        let _ = writeln!(self.writer, "[lifecycle] activated");
    }

    fn on_present(&mut self, e: &PresentEvent) {
        match e.damage {
            Some(d) => {
                let _ = writeln!(
                    self.writer,
                    "[present] damage=({}, {})..({}, {}) painted={}",
                    d.x1, d.y1, d.x2, d.y2, e.painted
                );
            }
            None => {
                let _ = writeln!(self.writer, "[present] swap painted={}", e.painted);
            }
        }
    }

    fn on_resize(&mut self, e: &ResizeEvent) {
        match e.failed_at {
            Some(stage) => {
                let _ = writeln!(
                    self.writer,
                    "[resize] {}x{} FAILED at {stage:?}",
                    e.size.width, e.size.height
                );
            }
            None => {
                let _ = writeln!(self.writer, "[resize] {}x{}", e.size.width, e.size.height);
            }
        }
    }

    fn on_move(&mut self, e: &MoveEvent) {
        let _ = writeln!(self.writer, "[move] ({}, {})", e.pos.x, e.pos.y);
    }

    fn on_frame_change(&mut self, e: &FrameChangeEvent) {
        let _ = writeln!(
            self.writer,
            "[frame] moved={} resized={}",
            e.moved, e.resized
        );
    }

    fn on_cleanup(&mut self) {
        let _ = writeln!(self.writer, "[lifecycle] cleanup");
    }
}
