// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Padded slide ring: the index space behind the infinite loop.
//!
//! A ring over `N` slides has `N + 2` slots:
//!
//! ```text
//! padded:  0              1         2        …   N          N + 1
//! slot:    CloneOfLast    Real(0)   Real(1)  …   Real(N-1)  CloneOfFirst
//! ```
//!
//! Every step, including the one across the logical wrap boundary, is then a
//! single-slot move. Once a transition lands on a clone, the position state
//! jumps to the real slot the clone mirrors (see [`SlideRing::wrap_target`]).
//!
//! ## Minimal example
//!
//! ```
//! use understory_carousel::{RingSlot, SlideRing};
//!
//! let ring = SlideRing::new(3).unwrap();
//! assert_eq!(ring.padded_len(), 5);
//! assert_eq!(ring.slot(0), Some(RingSlot::CloneOfLast));
//! assert_eq!(ring.slot(4), Some(RingSlot::CloneOfFirst));
//! assert_eq!(ring.wrap_target(4), Some(1));
//!
//! let slides = ["a", "b", "c"];
//! let track: Vec<&str> = ring.entries(&slides).map(|(_, s)| *s).collect();
//! assert_eq!(track, ["c", "a", "b", "c", "a"]);
//! ```

use core::iter::FusedIterator;
use core::num::NonZeroUsize;

/// What a padded ring slot shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RingSlot {
    /// Padded index `0`: a copy of the last slide.
    CloneOfLast,
    /// A real slide, carrying its 0-based index into the host's slide list.
    Real(usize),
    /// Padded index `N + 1`: a copy of the first slide.
    CloneOfFirst,
}

impl RingSlot {
    /// Returns `true` for either boundary clone.
    #[must_use]
    pub fn is_clone(self) -> bool {
        !matches!(self, Self::Real(_))
    }
}

/// Index space for `N` slides padded with one boundary clone on each side.
///
/// Real positions are 1-based (`1..=N`) so that a real index is also its
/// padded index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SlideRing {
    len: NonZeroUsize,
}

impl SlideRing {
    /// Creates a ring over `len` slides, or `None` for an empty slide list.
    #[must_use]
    pub fn new(len: usize) -> Option<Self> {
        NonZeroUsize::new(len).map(|len| Self { len })
    }

    /// Number of real slides (`N`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.len.get()
    }

    /// Always `false`: a ring holds at least one slide.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of padded slots (`N + 2`).
    #[must_use]
    pub fn padded_len(&self) -> usize {
        self.len.get() + 2
    }

    /// Padded index of the appended clone of the first slide (`N + 1`).
    #[must_use]
    pub fn last_padded(&self) -> usize {
        self.len.get() + 1
    }

    /// Returns `true` if `real` is a valid 1-based real index.
    #[must_use]
    pub fn contains_real(&self, real: usize) -> bool {
        (1..=self.len.get()).contains(&real)
    }

    /// Classifies a padded index, or `None` if it lies outside `0..=N + 1`.
    #[must_use]
    pub fn slot(&self, padded: usize) -> Option<RingSlot> {
        let n = self.len.get();
        match padded {
            0 => Some(RingSlot::CloneOfLast),
            p if p <= n => Some(RingSlot::Real(p - 1)),
            p if p == n + 1 => Some(RingSlot::CloneOfFirst),
            _ => None,
        }
    }

    /// Maps a padded index to the 1-based real index it shows.
    ///
    /// Boundary clones resolve to the slide they copy. Out-of-range indices
    /// return `None`.
    #[must_use]
    pub fn real_of(&self, padded: usize) -> Option<usize> {
        self.slot(padded).map(|slot| match slot {
            RingSlot::CloneOfLast => self.len.get(),
            RingSlot::Real(i) => i + 1,
            RingSlot::CloneOfFirst => 1,
        })
    }

    /// Where the position must jump after a transition settles on `padded`.
    ///
    /// Returns `Some(real)` only for boundary clones; real slots need no
    /// correction.
    #[must_use]
    pub fn wrap_target(&self, padded: usize) -> Option<usize> {
        match self.slot(padded)? {
            RingSlot::CloneOfLast => Some(self.len.get()),
            RingSlot::CloneOfFirst => Some(1),
            RingSlot::Real(_) => None,
        }
    }

    /// Iterates the padded track over the host's slides.
    ///
    /// `slides` should hold exactly [`len`](Self::len) items. A shorter slice
    /// yields nothing, since the ring cannot be built from it.
    pub fn entries<'a, T>(&self, slides: &'a [T]) -> RingEntries<'a, T> {
        let end = if slides.len() == self.len.get() {
            self.padded_len()
        } else {
            0
        };
        RingEntries {
            ring: *self,
            slides,
            front: 0,
            end,
        }
    }
}

/// Iterator over `(slot, item)` pairs of a padded ring.
///
/// Created by [`SlideRing::entries`].
#[derive(Clone, Debug)]
pub struct RingEntries<'a, T> {
    ring: SlideRing,
    slides: &'a [T],
    front: usize,
    end: usize,
}

impl<'a, T> RingEntries<'a, T> {
    fn entry(&self, padded: usize) -> Option<(RingSlot, &'a T)> {
        let slot = self.ring.slot(padded)?;
        let item = match slot {
            RingSlot::CloneOfLast => self.slides.last()?,
            RingSlot::Real(i) => self.slides.get(i)?,
            RingSlot::CloneOfFirst => self.slides.first()?,
        };
        Some((slot, item))
    }
}

impl<'a, T> Iterator for RingEntries<'a, T> {
    type Item = (RingSlot, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.end {
            return None;
        }
        let entry = self.entry(self.front);
        self.front += 1;
        entry
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.end.saturating_sub(self.front);
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for RingEntries<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.end {
            return None;
        }
        self.end -= 1;
        self.entry(self.end)
    }
}

impl<T> ExactSizeIterator for RingEntries<'_, T> {}

impl<T> FusedIterator for RingEntries<'_, T> {}
