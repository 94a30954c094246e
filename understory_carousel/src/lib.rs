// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_carousel --heading-base-level=0

//! Understory Carousel: headless state for an infinite-loop carousel.
//!
//! This crate owns the positioning and transition logic of a slide carousel
//! and nothing else. It does not render slides, style buttons, or own a
//! clock. Hosts feed it inputs and apply the single [`RenderDirective`] it
//! produces to their track element.
//!
//! The pieces are:
//!
//! - [`SlideRing`]: the `N + 2` padded index space, one clone of the last
//!   slide before the first and one clone of the first after the last, so
//!   that every move (including across the wrap) is a single animated step.
//! - [`PositionState`]: current padded index, the in-flight [`Transition`],
//!   and wrap correction on [`settle`](PositionState::settle).
//! - [`GestureTracker`]: press/move/release into a live offset and a
//!   [`Swipe`] decision.
//! - [`Autoplay`]: a repeating advance timer driven by host timestamps.
//! - [`Carousel`]: ties the above together behind one update function,
//!   [`Carousel::handle`], fed with [`CarouselEvent`]s.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_carousel::{Carousel, CarouselOptions};
//!
//! let mut carousel = Carousel::new(3, CarouselOptions::default(), 0).unwrap();
//!
//! // Prev from the first slide animates onto the clone of the last one …
//! carousel.prev().unwrap();
//! assert_eq!(carousel.render().translate_percent, 0.0);
//! assert!(carousel.render().animated);
//!
//! // … and a second input during that transition is dropped.
//! assert!(carousel.prev().is_err());
//!
//! // Once the host reports transition end, the index jumps to the real last
//! // slide without animation.
//! carousel.transition_end().unwrap();
//! assert_eq!(carousel.real_index(), 3);
//! let frame = carousel.render();
//! assert_eq!(frame.translate_percent, -300.0);
//! assert!(!frame.animated);
//! ```
//!
//! ## Host integration
//!
//! A typical host:
//!
//! - Measures the track and sends [`CarouselEvent::SetTrackWidth`].
//! - Forwards pointer down/move/up/leave on the track as the matching
//!   [`CarouselEvent`]s, tagging each with its [`PointerKind`].
//! - Forwards the track's transition-end notification to
//!   [`Carousel::transition_end`]. Duplicate notifications are harmless.
//! - Wakes up at [`Autoplay::next_deadline`] and calls [`Carousel::tick`].
//! - After each batch of events, writes [`RenderDirective::css_transform`]
//!   and [`TransitionStyle::css_transition`] to the track in one go.
//! - Calls [`Carousel::teardown`] on unmount.
//!
//! Inputs that cannot be honored return a [`Rejected`] reason and change
//! nothing, apart from a due autoplay tick, which still starts the next
//! period. In particular, navigation during an in-flight transition is
//! dropped, not queued.
//!
//! ## Features
//!
//! - `std` (default): forwards to `kurbo/std`.
//! - `libm`: forwards to `kurbo/libm` for `no_std` targets.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod autoplay;
mod carousel;
mod error;
mod gesture;
mod options;
mod position;
mod render;
mod ring;

pub use autoplay::Autoplay;
pub use carousel::{Carousel, CarouselEvent, Dot, Dots, Effect, EventQueue};
pub use error::Rejected;
pub use gesture::{
    DragPolicy, FollowClamp, GestureTracker, PointerKind, Swipe, SwipeSources, SwipeThreshold,
};
pub use options::CarouselOptions;
pub use position::{Direction, PositionState, Settle, Transition, TransitionKind, WrapCorrection};
pub use render::{Easing, RenderDirective, TransitionStyle};
pub use ring::{RingEntries, RingSlot, SlideRing};
