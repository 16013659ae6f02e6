// Copyright 2026 the Underlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outward notifications toward the host framework.
//!
//! The surface never calls into host code directly; it enqueues
//! [`SurfaceEvent`] values that the host drains on its own schedule via
//! [`Surface::poll_event`](crate::surface::Surface::poll_event). The queue is
//! bounded with a drop-oldest overflow policy so a host that stops draining
//! cannot grow it without bound.
//!
//! Same-value property writes enqueue nothing; an event always means the
//! value actually changed (or, for [`SurfaceEvent::Created`], that activation
//! finished, successfully or not).

use std::collections::VecDeque;

use crate::handle::{WindowGroup, WindowIdent};
use crate::windowing::Usage;

/// A lifecycle or property-change notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// Activation finished. Fires exactly once per surface, with `success ==
    /// false` when native setup failed (the control stays visually absent but
    /// the host application keeps running).
    Created {
        /// Whether the native window was fully set up.
        success: bool,
    },
    /// The window joined a different compositor group.
    GroupChanged {
        /// The new group identity.
        group: WindowGroup,
    },
    /// The window's string identity changed.
    IdentChanged {
        /// The new identity.
        ident: WindowIdent,
    },
    /// The usage capability flags changed.
    UsageChanged {
        /// The new usage flags.
        usage: Usage,
    },
}

/// Bounded drop-oldest queue of [`SurfaceEvent`]s.
#[derive(Debug)]
pub(crate) struct SurfaceEventQueue {
    items: VecDeque<SurfaceEvent>,
    capacity: usize,
    dropped: u64,
}

impl SurfaceEventQueue {
    /// Queue capacity used by [`SurfaceConfig::default`].
    ///
    /// [`SurfaceConfig::default`]: crate::surface::SurfaceConfig
    pub(crate) const DEFAULT_CAPACITY: usize = 16;

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
            dropped: 0,
        }
    }

    pub(crate) fn push(&mut self, event: SurfaceEvent) {
        if self.items.len() == self.capacity {
            let _ = self.items.pop_front();
            self.dropped += 1;
        }
        self.items.push_back(event);
    }

    pub(crate) fn pop(&mut self) -> Option<SurfaceEvent> {
        self.items.pop_front()
    }

    pub(crate) fn dropped(&self) -> u64 {
        self.dropped
    }
}

#[cfg(test)]
mod tests {
    use super::{SurfaceEvent, SurfaceEventQueue};

    fn created(success: bool) -> SurfaceEvent {
        SurfaceEvent::Created { success }
    }

    #[test]
    fn events_drain_in_order() {
        let mut queue = SurfaceEventQueue::with_capacity(4);
        queue.push(created(true));
        queue.push(SurfaceEvent::UsageChanged {
            usage: crate::windowing::Usage::WRITE,
        });

        assert_eq!(queue.pop(), Some(created(true)));
        assert!(matches!(queue.pop(), Some(SurfaceEvent::UsageChanged { .. })));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn overflow_drops_the_oldest_event() {
        let mut queue = SurfaceEventQueue::with_capacity(2);
        queue.push(created(false));
        queue.push(created(true));
        queue.push(SurfaceEvent::IdentChanged {
            ident: crate::handle::WindowIdent::default(),
        });

        assert_eq!(queue.pop(), Some(created(true)));
        assert_eq!(queue.dropped(), 1);
    }

    #[test]
    fn zero_capacity_is_promoted_to_one() {
        let mut queue = SurfaceEventQueue::with_capacity(0);
        queue.push(created(false));
        queue.push(created(true));
        assert_eq!(queue.pop(), Some(created(true)));
        assert_eq!(queue.pop(), None);
        assert_eq!(queue.dropped(), 1);
    }
}
