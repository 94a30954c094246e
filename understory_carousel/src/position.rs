// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Position state machine: current padded index, the in-flight transition,
//! and wrap correction.
//!
//! ## Rules
//!
//! - At most one transition is in flight. [`PositionState::request_advance`]
//!   and [`PositionState::request_goto`] return [`Rejected::Animating`] while
//!   one is, and the request is dropped rather than queued.
//! - [`PositionState::settle`] clears the in-flight transition and, if the
//!   index landed on a boundary clone, jumps to the real slot the clone
//!   mirrors. The jump is unanimated and the rendered offset of the clone and
//!   the real slot describe the same pixels, so it is not visible.
//! - Outside a transition the index is always a real slot (`1..=N`).
//!
//! ## Minimal example
//!
//! ```
//! use understory_carousel::{Direction, PositionState, Settle, SlideRing};
//!
//! let mut pos = PositionState::new(SlideRing::new(3).unwrap());
//! pos.request_advance(Direction::Prev).unwrap();
//! assert_eq!(pos.padded_index(), 0);
//! assert!(pos.request_advance(Direction::Prev).is_err());
//!
//! let Settle::Corrected(fix) = pos.settle() else { unreachable!() };
//! assert_eq!((fix.from, fix.to), (0, 3));
//! assert_eq!(pos.real_index(), 3);
//! ```

use crate::error::Rejected;
use crate::ring::SlideRing;

/// Direction of a single-step move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards higher indices; the track moves left.
    Next,
    /// Towards lower indices; the track moves right.
    Prev,
}

impl Direction {
    /// The opposite direction.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::Next => Self::Prev,
            Self::Prev => Self::Next,
        }
    }
}

/// What started the transition that is currently in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    /// A single step from `next`, `prev`, autoplay, or a swipe.
    Advance(Direction),
    /// A jump to an absolute slide (dot navigation).
    Goto,
    /// A return to the current index after a released drag.
    SnapBack,
}

/// An accepted, animated index change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Padded index before the change.
    pub from: usize,
    /// Padded index being animated to.
    pub to: usize,
    /// What triggered it.
    pub kind: TransitionKind,
}

/// An unanimated jump from a boundary clone to its real slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WrapCorrection {
    /// The clone's padded index.
    pub from: usize,
    /// The mirrored real index.
    pub to: usize,
}

/// Result of [`PositionState::settle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settle {
    /// Nothing was in flight and no correction was needed.
    Idle,
    /// The transition finished on a real slot.
    Settled,
    /// The transition finished on a clone and the index jumped.
    Corrected(WrapCorrection),
}

/// Current position on a [`SlideRing`] plus the in-flight transition, if any.
#[derive(Clone, Debug)]
pub struct PositionState {
    ring: SlideRing,
    index: usize,
    in_flight: Option<TransitionKind>,
}

impl PositionState {
    /// Creates a state resting on the first real slide (padded index `1`).
    #[must_use]
    pub fn new(ring: SlideRing) -> Self {
        Self {
            ring,
            index: 1,
            in_flight: None,
        }
    }

    /// The ring this state moves over.
    #[must_use]
    pub fn ring(&self) -> SlideRing {
        self.ring
    }

    /// Current padded index, in `0..=N + 1`.
    #[must_use]
    pub fn padded_index(&self) -> usize {
        self.index
    }

    /// The 1-based real slide currently shown or being moved to.
    ///
    /// While a transition heads for a clone this already reports the slide
    /// the clone mirrors.
    #[must_use]
    pub fn real_index(&self) -> usize {
        self.ring.real_of(self.index).unwrap_or(1)
    }

    /// Returns `true` while a transition is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.in_flight.is_some()
    }

    /// What the in-flight transition is, if any.
    #[must_use]
    pub fn in_flight(&self) -> Option<TransitionKind> {
        self.in_flight
    }

    /// Resting translation of the track in percent of one slide width.
    #[must_use]
    pub fn rest_offset_percent(&self) -> f64 {
        -(self.index as f64) * 100.0
    }

    /// Starts a one-step transition.
    pub fn request_advance(&mut self, direction: Direction) -> Result<Transition, Rejected> {
        if self.in_flight.is_some() {
            return Err(Rejected::Animating);
        }
        debug_assert!(
            self.ring.contains_real(self.index),
            "resting index {} must be a real slot",
            self.index
        );
        let from = self.index;
        let to = match direction {
            Direction::Next => from + 1,
            Direction::Prev => from.saturating_sub(1),
        };
        Ok(self.begin(from, to, TransitionKind::Advance(direction)))
    }

    /// Starts a transition to the 1-based real slide `target`.
    ///
    /// Returns `Ok(None)` if `target` is already the current slide; nothing
    /// would move, so nothing is animated.
    pub fn request_goto(&mut self, target: usize) -> Result<Option<Transition>, Rejected> {
        if self.in_flight.is_some() {
            return Err(Rejected::Animating);
        }
        if !self.ring.contains_real(target) {
            return Err(Rejected::OutOfRange {
                index: target,
                len: self.ring.len(),
            });
        }
        if target == self.index {
            return Ok(None);
        }
        Ok(Some(self.begin(self.index, target, TransitionKind::Goto)))
    }

    /// Animates back to the current index without changing it.
    ///
    /// This bypasses the in-flight guard: a snap-back replaces whatever was
    /// marked in flight so that a released drag always comes to rest.
    pub fn begin_snap_back(&mut self) -> Transition {
        let index = self.index;
        self.begin(index, index, TransitionKind::SnapBack)
    }

    /// Marks the in-flight transition as finished and applies wrap correction.
    ///
    /// Safe to call repeatedly; later calls return [`Settle::Idle`].
    pub fn settle(&mut self) -> Settle {
        let was_animating = self.in_flight.take().is_some();
        if let Some(to) = self.ring.wrap_target(self.index) {
            let fix = WrapCorrection {
                from: self.index,
                to,
            };
            self.index = to;
            log::debug!("wrap correction {} -> {}", fix.from, fix.to);
            return Settle::Corrected(fix);
        }
        if was_animating {
            Settle::Settled
        } else {
            Settle::Idle
        }
    }

    /// Replaces the ring, cancelling any transition.
    ///
    /// The current real slide is kept when it still exists; otherwise the
    /// position moves to the new last slide.
    pub fn set_ring(&mut self, ring: SlideRing) {
        let real = self.real_index();
        self.ring = ring;
        self.index = if ring.contains_real(real) {
            real
        } else {
            ring.len()
        };
        self.in_flight = None;
    }

    fn begin(&mut self, from: usize, to: usize, kind: TransitionKind) -> Transition {
        self.index = to;
        self.in_flight = Some(kind);
        log::debug!("transition {from} -> {to} ({kind:?})");
        Transition { from, to, kind }
    }
}
