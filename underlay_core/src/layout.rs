// Copyright 2026 the Underlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bridge from host layout notifications to surface geometry.
//!
//! The host layout system delivers one event type — "this control's frame
//! changed" — on its own timing. The bridge compares the new frame against
//! the live window properties and issues the cheapest sufficient response:
//! a pure move repositions without repainting, a size change rebuilds the
//! buffers and always repaints, and an unchanged frame does nothing at all.
//!
//! Rotation notifications carry the new [`Orientation`] explicitly; the
//! surface never consults process-global state to learn it.

use kurbo::Rect;

use crate::geometry::{Region, SurfacePos, SurfaceSize};
use crate::present::FrameRequest;
use crate::surface::Surface;
use crate::trace::FrameChangeEvent;
use crate::windowing::Usage;

/// Display orientation reported by the host.
///
/// Only the four normal rotations exist; anything else the platform might
/// report is not representable and therefore never reaches the window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Natural orientation.
    #[default]
    Deg0,
    /// Rotated 90° clockwise.
    Deg90,
    /// Upside down.
    Deg180,
    /// Rotated 270° clockwise.
    Deg270,
}

impl Orientation {
    /// The rotation angle in degrees.
    #[must_use]
    pub const fn degrees(self) -> i32 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }
}

impl Surface {
    /// Handles a host frame-changed notification.
    ///
    /// Compares `frame` (floored to device pixels) against the window's
    /// position and buffer-size properties, moves and/or resizes
    /// accordingly, and re-presents when anything changed — repainting only
    /// when the size changed. Invalid surfaces ignore the event.
    pub fn frame_changed(&self, frame: Rect) {
        let mut inner = self.lock();
        if !inner.handle.valid {
            return;
        }
        let Some(window) = inner.handle.window else {
            return;
        };

        let mut moved = false;
        let mut resized = false;

        let target_pos = SurfacePos::from_frame(&frame);
        if let Ok(pos) = inner.windowing.position(window) {
            if pos != target_pos {
                moved = inner.move_window(target_pos);
            }
        }

        let target_size = SurfaceSize::from_frame(&frame);
        if let Ok(size) = inner.windowing.buffer_size(window) {
            if size != target_size {
                resized = inner.resize_buffers(target_size);
            }
        }

        if moved || resized {
            // A pure move re-presents the existing content; only a size
            // change forces a repaint.
            inner.present_frame(&FrameRequest {
                region: Region::MAX,
                should_paint: resized,
            });
        }

        if let Some(sink) = inner.sink.as_deref_mut() {
            sink.on_frame_change(&FrameChangeEvent { moved, resized });
        }
    }

    /// Handles a host orientation notification.
    ///
    /// Applies the rotation property only when the window's usage carries
    /// [`Usage::ROTATION`]; otherwise the notification is ignored.
    pub fn rotation_changed(&self, orientation: Orientation) {
        let mut inner = self.lock();
        if !inner.handle.valid {
            return;
        }
        let Some(window) = inner.handle.window else {
            return;
        };
        if inner.handle.usage.contains(Usage::ROTATION) {
            let _ = inner.windowing.set_rotation(window, orientation.degrees());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Orientation;

    #[test]
    fn orientations_map_to_normal_angles() {
        assert_eq!(Orientation::Deg0.degrees(), 0);
        assert_eq!(Orientation::Deg90.degrees(), 90);
        assert_eq!(Orientation::Deg180.degrees(), 180);
        assert_eq!(Orientation::Deg270.degrees(), 270);
        assert_eq!(Orientation::default(), Orientation::Deg0);
    }
}
