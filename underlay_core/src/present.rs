// Copyright 2026 the Underlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presentation strategies.
//!
//! How a painted buffer becomes visible is a strategy chosen at surface
//! construction time and held by composition: [`RasterPresent`] paints into
//! the window's render buffer and posts it with a damage rectangle; the
//! accelerated strategy (in `underlay_gl`) makes a graphics context current,
//! lets the embedder draw with the graphics API, and swaps.
//!
//! A strategy participates in three lifecycle moments — before the native
//! window exists ([`begin_setup`](PresentStrategy::begin_setup)), right after
//! it exists ([`finish_setup`](PresentStrategy::finish_setup)), and on
//! teardown — plus the per-repaint [`frame`](PresentStrategy::frame) cycle.
//! All strategy methods run with the surface lock held; the surface never
//! re-enters the strategy while one of its methods is on the stack.

use crate::geometry::{DamageRect, Region};
use crate::hooks::SurfaceHooks;
use crate::windowing::{BufferFormat, Usage, WindowHandle, Windowing};

/// Buffer configuration requested from window setup.
///
/// A strategy's [`default_request`](PresentStrategy::default_request) seeds
/// it; strategies with fixed requirements overwrite it in
/// [`begin_setup`](PresentStrategy::begin_setup).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SetupRequest {
    /// Usage flags to apply (empty: leave the platform default).
    pub usage: Usage,
    /// Number of presentation buffers to allocate.
    pub buffer_count: u32,
    /// Buffer pixel format ([`BufferFormat::Inherit`]: leave the default).
    pub format: BufferFormat,
}

impl SetupRequest {
    /// Single-buffer request with platform-default usage and format.
    #[must_use]
    pub const fn raster() -> Self {
        Self {
            usage: Usage::empty(),
            buffer_count: 1,
            format: BufferFormat::Inherit,
        }
    }
}

/// One requested paint/present cycle.
#[derive(Clone, Copy, Debug)]
pub struct FrameRequest {
    /// Region to repaint and declare damaged.
    pub region: Region,
    /// Whether to invoke the embedder's paint entry point. A re-present of
    /// unchanged content (e.g. after a pure move) passes `false`.
    pub should_paint: bool,
}

/// What a completed [`frame`](PresentStrategy::frame) cycle did.
#[derive(Clone, Copy, Debug)]
pub struct PresentedFrame {
    /// Damage declared to the compositor; `None` for whole-surface swaps.
    pub damage: Option<DamageRect>,
    /// Whether the embedder's paint entry point ran.
    pub painted: bool,
}

/// The mechanism by which painted content becomes visible.
pub trait PresentStrategy {
    /// The buffer configuration this strategy wants when the embedder does
    /// not override it.
    fn default_request(&self) -> SetupRequest;

    /// Creates strategy-owned resources that must exist before the native
    /// window (e.g. a GL display/config/context chain). May rewrite
    /// `request` when the strategy fixes usage, format, or buffer count.
    ///
    /// Returning `false` aborts activation; the strategy must have unwound
    /// its own partial state before returning.
    fn begin_setup(&mut self, request: &mut SetupRequest) -> bool {
        _ = request;
        true
    }

    /// Creates strategy-owned resources that need the native window (e.g. a
    /// GL window surface), and makes the strategy presentable.
    ///
    /// Returning `false` aborts activation; the caller tears down both the
    /// strategy and the window.
    fn finish_setup(&mut self, windowing: &mut dyn Windowing, window: WindowHandle) -> bool {
        _ = (windowing, window);
        true
    }

    /// Runs one paint/present cycle. Returns `None` when the cycle was
    /// skipped (clamp rejection, missing buffers, platform failure) — a
    /// silent no-op, not an error.
    fn frame(
        &mut self,
        windowing: &mut dyn Windowing,
        window: WindowHandle,
        hooks: &mut dyn SurfaceHooks,
        request: &FrameRequest,
    ) -> Option<PresentedFrame>;

    /// Releases strategy-owned resources. Called before the native window is
    /// destroyed, and also when activation aborts midway; must tolerate
    /// partial or absent state and repeated calls.
    fn teardown(&mut self) {}

    /// Whether the embedder may change usage flags on this strategy.
    fn allows_usage_change(&self) -> bool {
        true
    }

    /// Whether the embedder may register a native cleanup handler.
    fn allows_cleanup_handler(&self) -> bool {
        true
    }
}

/// Raster presentation: paint into the render buffer, post with damage.
///
/// Uses a single buffer and the platform-default usage and format. The
/// embedder draws in [`SurfaceHooks::paint`] with whatever CPU/blit access
/// the platform grants by default.
#[derive(Clone, Copy, Debug, Default)]
pub struct RasterPresent;

impl RasterPresent {
    /// Creates the raster strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl PresentStrategy for RasterPresent {
    fn default_request(&self) -> SetupRequest {
        SetupRequest::raster()
    }

    fn frame(
        &mut self,
        windowing: &mut dyn Windowing,
        window: WindowHandle,
        hooks: &mut dyn SurfaceHooks,
        request: &FrameRequest,
    ) -> Option<PresentedFrame> {
        // Pre-layout and zero-area states fail the queries or the clamp and
        // skip the whole cycle.
        let buffer_size = windowing.buffer_size(window).ok()?;
        let damage = request.region.clamped_to(buffer_size)?;
        let buffer = windowing.render_buffer(window).ok()?;

        if request.should_paint {
            hooks.paint(window);
        }
        windowing.post(window, buffer, damage).ok()?;

        Some(PresentedFrame {
            damage: Some(damage),
            painted: request.should_paint,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{FrameRequest, PresentStrategy, RasterPresent, SetupRequest};
    use crate::geometry::{DamageRect, Region, SurfacePos, SurfaceSize};
    use crate::hooks::SurfaceHooks;
    use crate::windowing::{
        BufferFormat, BufferHandle, ContextHandle, Usage, WindowHandle, Windowing, WindowingError,
    };

    /// Minimal single-window platform double for strategy-level tests.
    struct OneWindow {
        buffer_size: Result<SurfaceSize, WindowingError>,
        has_buffer: bool,
        posted: Vec<DamageRect>,
    }

    impl OneWindow {
        fn with_size(width: i32, height: i32) -> Self {
            Self {
                buffer_size: Ok(SurfaceSize::new(width, height)),
                has_buffer: true,
                posted: Vec::new(),
            }
        }
    }

    impl Windowing for OneWindow {
        fn create_context(&mut self) -> Result<ContextHandle, WindowingError> {
            Ok(ContextHandle(1))
        }
        fn create_child_window(
            &mut self,
            _context: ContextHandle,
        ) -> Result<WindowHandle, WindowingError> {
            Ok(WindowHandle(1))
        }
        fn destroy_window(&mut self, _window: WindowHandle) {}
        fn destroy_context(&mut self, _context: ContextHandle) {}
        fn join_group(&mut self, _w: WindowHandle, _g: &str) -> Result<(), WindowingError> {
            Ok(())
        }
        fn leave_group(&mut self, _w: WindowHandle) -> Result<(), WindowingError> {
            Ok(())
        }
        fn set_ident(&mut self, _w: WindowHandle, _i: &str) -> Result<(), WindowingError> {
            Ok(())
        }
        fn set_usage(&mut self, _w: WindowHandle, _u: Usage) -> Result<(), WindowingError> {
            Ok(())
        }
        fn set_format(&mut self, _w: WindowHandle, _f: BufferFormat) -> Result<(), WindowingError> {
            Ok(())
        }
        fn set_z_order(&mut self, _w: WindowHandle, _z: i32) -> Result<(), WindowingError> {
            Ok(())
        }
        fn set_position(&mut self, _w: WindowHandle, _p: SurfacePos) -> Result<(), WindowingError> {
            Ok(())
        }
        fn position(&self, _w: WindowHandle) -> Result<SurfacePos, WindowingError> {
            Ok(SurfacePos::default())
        }
        fn set_buffer_size(
            &mut self,
            _w: WindowHandle,
            _s: SurfaceSize,
        ) -> Result<(), WindowingError> {
            Ok(())
        }
        fn set_source_size(
            &mut self,
            _w: WindowHandle,
            _s: SurfaceSize,
        ) -> Result<(), WindowingError> {
            Ok(())
        }
        fn buffer_size(&self, _w: WindowHandle) -> Result<SurfaceSize, WindowingError> {
            self.buffer_size
        }
        fn create_buffers(&mut self, _w: WindowHandle, _c: u32) -> Result<(), WindowingError> {
            Ok(())
        }
        fn destroy_buffers(&mut self, _w: WindowHandle) -> Result<(), WindowingError> {
            Ok(())
        }
        fn render_buffer(&self, _w: WindowHandle) -> Result<BufferHandle, WindowingError> {
            if self.has_buffer {
                Ok(BufferHandle(9))
            } else {
                Err(WindowingError::Unavailable)
            }
        }
        fn post(
            &mut self,
            _w: WindowHandle,
            _b: BufferHandle,
            damage: DamageRect,
        ) -> Result<(), WindowingError> {
            self.posted.push(damage);
            Ok(())
        }
        fn set_rotation(&mut self, _w: WindowHandle, _d: i32) -> Result<(), WindowingError> {
            Ok(())
        }
    }

    struct CountingHooks {
        paints: u32,
    }

    impl SurfaceHooks for CountingHooks {
        fn paint(&mut self, _window: WindowHandle) {
            self.paints += 1;
        }
    }

    #[test]
    fn raster_frame_clamps_and_posts() {
        let mut platform = OneWindow::with_size(640, 480);
        let mut hooks = CountingHooks { paints: 0 };
        let mut strategy = RasterPresent::new();

        let frame = strategy
            .frame(
                &mut platform,
                WindowHandle(1),
                &mut hooks,
                &FrameRequest {
                    region: Region::MAX,
                    should_paint: true,
                },
            )
            .expect("presentable");

        assert_eq!(
            frame.damage,
            Some(DamageRect {
                x1: 0,
                y1: 0,
                x2: 640,
                y2: 480
            })
        );
        assert!(frame.painted);
        assert_eq!(hooks.paints, 1);
        assert_eq!(platform.posted.len(), 1);
    }

    #[test]
    fn raster_frame_without_paint_still_posts() {
        let mut platform = OneWindow::with_size(100, 100);
        let mut hooks = CountingHooks { paints: 0 };
        let mut strategy = RasterPresent::new();

        let frame = strategy
            .frame(
                &mut platform,
                WindowHandle(1),
                &mut hooks,
                &FrameRequest {
                    region: Region::MAX,
                    should_paint: false,
                },
            )
            .expect("presentable");

        assert!(!frame.painted);
        assert_eq!(hooks.paints, 0);
        assert_eq!(platform.posted.len(), 1);
    }

    #[test]
    fn missing_buffer_size_skips_silently() {
        let mut platform = OneWindow::with_size(100, 100);
        platform.buffer_size = Err(WindowingError::Unavailable);
        let mut hooks = CountingHooks { paints: 0 };
        let mut strategy = RasterPresent::new();

        let frame = strategy.frame(
            &mut platform,
            WindowHandle(1),
            &mut hooks,
            &FrameRequest {
                region: Region::MAX,
                should_paint: true,
            },
        );

        assert!(frame.is_none());
        assert_eq!(hooks.paints, 0);
        assert!(platform.posted.is_empty());
    }

    #[test]
    fn negative_request_skips_before_painting() {
        let mut platform = OneWindow::with_size(100, 100);
        let mut hooks = CountingHooks { paints: 0 };
        let mut strategy = RasterPresent::new();

        let frame = strategy.frame(
            &mut platform,
            WindowHandle(1),
            &mut hooks,
            &FrameRequest {
                region: Region::new(0, 0, -4, 10),
                should_paint: true,
            },
        );

        assert!(frame.is_none());
        assert_eq!(hooks.paints, 0);
        assert!(platform.posted.is_empty());
    }

    #[test]
    fn missing_render_buffer_skips_before_painting() {
        let mut platform = OneWindow::with_size(100, 100);
        platform.has_buffer = false;
        let mut hooks = CountingHooks { paints: 0 };
        let mut strategy = RasterPresent::new();

        let frame = strategy.frame(
            &mut platform,
            WindowHandle(1),
            &mut hooks,
            &FrameRequest {
                region: Region::MAX,
                should_paint: true,
            },
        );

        assert!(frame.is_none());
        assert_eq!(hooks.paints, 0);
    }

    #[test]
    fn raster_defaults_request_one_plain_buffer() {
        let strategy = RasterPresent::new();
        assert_eq!(strategy.default_request(), SetupRequest::raster());
        assert!(strategy.allows_usage_change());
        assert!(strategy.allows_cleanup_handler());
    }
}
