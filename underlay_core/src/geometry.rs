// Copyright 2026 the Underlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer surface geometry and damage rectangles.
//!
//! The host layout system works in floating-point coordinates
//! ([`kurbo::Rect`]); the platform windowing collaborator works in integer
//! device pixels. Conversions floor, never round, so a surface is never a
//! pixel larger than the frame the host allocated for it.

use kurbo::Rect;

/// Largest representable paint extent.
///
/// [`Region::MAX`] uses this for both axes; the presentation clamp reduces it
/// to the actual buffer size.
pub const MAX_EXTENT: i32 = i32::MAX;

/// Floors a layout coordinate to device pixels.
#[expect(
    clippy::cast_possible_truncation,
    reason = "host layout frames fit in i32 device space"
)]
fn floor_px(v: f64) -> i32 {
    v.floor() as i32
}

/// Window position in parent-relative device pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SurfacePos {
    /// Horizontal offset.
    pub x: i32,
    /// Vertical offset.
    pub y: i32,
}

impl SurfacePos {
    /// Creates a position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Floors a host layout frame's origin to a device position.
    #[must_use]
    pub fn from_frame(frame: &Rect) -> Self {
        Self {
            x: floor_px(frame.x0),
            y: floor_px(frame.y0),
        }
    }
}

/// Buffer extent in device pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SurfaceSize {
    /// Horizontal extent.
    pub width: i32,
    /// Vertical extent.
    pub height: i32,
}

impl SurfaceSize {
    /// Creates a size.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Floors a host layout frame's extent to a device size.
    #[must_use]
    pub fn from_frame(frame: &Rect) -> Self {
        Self {
            width: floor_px(frame.width()),
            height: floor_px(frame.height()),
        }
    }
}

/// A requested repaint region, origin plus extent.
///
/// Extents larger than the current buffer are legal; presentation clamps them
/// down. Negative extents (after clamping) suppress the paint entirely.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Region {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Requested width.
    pub width: i32,
    /// Requested height.
    pub height: i32,
}

impl Region {
    /// The maximal region: whole-surface repaint, reduced by the clamp.
    pub const MAX: Self = Self {
        x: 0,
        y: 0,
        width: MAX_EXTENT,
        height: MAX_EXTENT,
    };

    /// Creates a region from origin and extent.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Clamps this region's extents to the given buffer size and converts it
    /// to a corner-form damage rectangle.
    ///
    /// Returns `None` when a clamped extent is negative, which is the silent
    /// skip condition for presentation.
    #[must_use]
    pub fn clamped_to(&self, buffer: SurfaceSize) -> Option<DamageRect> {
        let width = self.width.min(buffer.width);
        let height = self.height.min(buffer.height);
        if width < 0 || height < 0 {
            return None;
        }
        Some(DamageRect {
            x1: self.x,
            y1: self.y,
            x2: self.x.saturating_add(width),
            y2: self.y.saturating_add(height),
        })
    }
}

impl Default for Region {
    fn default() -> Self {
        Self::MAX
    }
}

/// Corner-form damage rectangle handed to the compositor when presenting.
///
/// Stored as `[x1, y1, x2, y2]` where `x2 = x1 + width` and
/// `y2 = y1 + height`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DamageRect {
    /// Left edge.
    pub x1: i32,
    /// Top edge.
    pub y1: i32,
    /// Right edge (exclusive).
    pub x2: i32,
    /// Bottom edge (exclusive).
    pub y2: i32,
}

impl DamageRect {
    /// Damage width.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.x2 - self.x1
    }

    /// Damage height.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.y2 - self.y1
    }
}

#[cfg(test)]
mod tests {
    use super::{DamageRect, Region, SurfacePos, SurfaceSize};
    use kurbo::Rect;

    #[test]
    fn frame_conversion_floors() {
        let frame = Rect::new(10.9, 20.1, 110.9, 220.7);
        assert_eq!(SurfacePos::from_frame(&frame), SurfacePos::new(10, 20));
        // width = 100.0, height = 200.6 -> floored.
        assert_eq!(SurfaceSize::from_frame(&frame), SurfaceSize::new(100, 200));
    }

    #[test]
    fn maximal_region_clamps_to_buffer() {
        let damage = Region::MAX
            .clamped_to(SurfaceSize::new(640, 480))
            .expect("non-negative extents");
        assert_eq!(
            damage,
            DamageRect {
                x1: 0,
                y1: 0,
                x2: 640,
                y2: 480
            }
        );
    }

    #[test]
    fn clamp_never_exceeds_buffer() {
        let region = Region::new(5, 7, 1000, 1000);
        let damage = region
            .clamped_to(SurfaceSize::new(64, 32))
            .expect("non-negative extents");
        assert_eq!(damage.width(), 64);
        assert_eq!(damage.height(), 32);
        assert_eq!(damage.x1, 5);
        assert_eq!(damage.y1, 7);
    }

    #[test]
    fn small_region_is_untouched() {
        let region = Region::new(1, 2, 10, 10);
        let damage = region
            .clamped_to(SurfaceSize::new(640, 480))
            .expect("non-negative extents");
        assert_eq!(damage.width(), 10);
        assert_eq!(damage.height(), 10);
    }

    #[test]
    fn negative_extent_is_rejected() {
        let region = Region::new(0, 0, -1, 10);
        assert_eq!(region.clamped_to(SurfaceSize::new(640, 480)), None);

        let region = Region::new(0, 0, 10, -1);
        assert_eq!(region.clamped_to(SurfaceSize::new(640, 480)), None);
    }

    #[test]
    fn negative_buffer_extent_is_rejected() {
        // A buffer-size property read before layout can report a negative
        // placeholder; the clamp must treat it as not-presentable.
        assert_eq!(Region::MAX.clamped_to(SurfaceSize::new(-1, -1)), None);
    }

    #[test]
    fn zero_area_clamp_is_allowed() {
        let damage = Region::MAX
            .clamped_to(SurfaceSize::new(0, 0))
            .expect("zero is not negative");
        assert_eq!(damage.width(), 0);
        assert_eq!(damage.height(), 0);
    }
}
