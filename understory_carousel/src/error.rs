// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reasons an input was dropped.

use core::fmt;

use crate::gesture::PointerKind;

/// Why the carousel ignored an input.
///
/// A rejected input changes no state, with one exception: a due autoplay tick
/// that is rejected still uses up its period, so the missed advance is
/// dropped rather than retried. Hosts are free to discard these;
/// they exist so that callers and tests can tell a dropped input from an
/// accepted one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejected {
    /// A transition is in flight; index changes are not queued.
    Animating,
    /// A `goto` target outside `1..=len`.
    OutOfRange {
        /// The requested 1-based real index.
        index: usize,
        /// Number of real slides.
        len: usize,
    },
    /// A move or release arrived while no drag was active.
    NotDragging,
    /// A press arrived while a drag was already active.
    AlreadyDragging,
    /// A navigation command arrived while the pointer holds the track.
    Dragging,
    /// Swiping is switched off for this kind of pointer.
    SourceDisabled(PointerKind),
    /// The carousel has been torn down.
    TornDown,
    /// A slide list with no items.
    EmptyRing,
}

impl fmt::Display for Rejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Animating => f.write_str("a transition is already in flight"),
            Self::OutOfRange { index, len } => {
                write!(f, "slide {index} is outside 1..={len}")
            }
            Self::NotDragging => f.write_str("no drag is active"),
            Self::AlreadyDragging => f.write_str("a drag is already active"),
            Self::Dragging => f.write_str("the track is being dragged"),
            Self::SourceDisabled(kind) => write!(f, "swiping is disabled for {kind:?} input"),
            Self::TornDown => f.write_str("the carousel has been torn down"),
            Self::EmptyRing => f.write_str("a carousel needs at least one slide"),
        }
    }
}

impl core::error::Error for Rejected {}
