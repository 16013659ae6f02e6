// Copyright 2026 the Underlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording, pretty-printing, and JSON export for underlay surface
//! diagnostics.
//!
//! Install one of these sinks via
//! [`Surface::set_trace_sink`](underlay_core::surface::Surface::set_trace_sink):
//!
//! - [`RecorderSink`] retains events for later inspection or
//!   [`export_json`].
//! - [`PrettyPrintSink`] writes one human-readable line per event.

mod pretty;
mod recorder;

pub use pretty::PrettyPrintSink;
pub use recorder::{RecordedEvent, RecorderSink, export_json};
