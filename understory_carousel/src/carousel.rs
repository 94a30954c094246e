// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The carousel controller: one update function over every input.
//!
//! Timer ticks, navigation commands, pointer events, and transition-end
//! notifications are all [`CarouselEvent`]s. [`Carousel::handle`] is the only
//! place that mutates state, and [`Carousel::render`] is a pure function of
//! that state. Hosts that receive inputs from several callbacks can collect
//! them in an [`EventQueue`] and apply them in order with
//! [`Carousel::drain`].

use core::iter::FusedIterator;

use kurbo::Point;
use smallvec::SmallVec;

use crate::autoplay::Autoplay;
use crate::error::Rejected;
use crate::gesture::{GestureTracker, PointerKind, Swipe};
use crate::options::CarouselOptions;
use crate::position::{Direction, PositionState, Settle, Transition};
use crate::render::{RenderDirective, TransitionStyle};
use crate::ring::SlideRing;

/// An input to the carousel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CarouselEvent {
    /// Step to the next slide (arrow or keyboard).
    Next,
    /// Step to the previous slide.
    Prev,
    /// Jump to a 1-based real slide (dot navigation).
    Goto(usize),
    /// A pointer was pressed on the track.
    PointerDown {
        /// Pointer position in the host's pixel space.
        pos: Point,
        /// Mouse or touch.
        kind: PointerKind,
    },
    /// A pressed pointer moved.
    PointerMove {
        /// Pointer position in the host's pixel space.
        pos: Point,
        /// Mouse or touch.
        kind: PointerKind,
    },
    /// A pressed pointer was released.
    PointerUp {
        /// Release position, if the platform reports one.
        pos: Option<Point>,
        /// Mouse or touch.
        kind: PointerKind,
    },
    /// The pointer left the track; an active drag ends as if released.
    PointerLeave {
        /// Mouse or touch.
        kind: PointerKind,
    },
    /// The track's transition finished.
    TransitionEnd,
    /// Host clock reading, in monotonic milliseconds.
    Tick {
        /// Current time.
        now_ms: u64,
    },
    /// Reconfigure autoplay; `0` disables it.
    SetAutoplay {
        /// New period in milliseconds.
        interval_ms: u64,
        /// Current time, from which the new period counts.
        now_ms: u64,
    },
    /// The track was measured.
    SetTrackWidth(f64),
    /// The host's slide list changed length.
    SetSlideCount(usize),
    /// The carousel is going away.
    Teardown,
}

/// What an accepted event did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Effect {
    /// Accepted, but nothing changed (a tick that was not due, a `goto` to
    /// the current slide, a settle with nothing in flight).
    Idle,
    /// An animated transition started.
    Transition(Transition),
    /// The in-flight transition finished, possibly with a wrap correction.
    Settled(Settle),
    /// A drag began; carries the settle of an interrupted transition.
    DragStarted(Settle),
    /// The dragged track moved; carries the live offset in follow mode.
    DragMoved(Option<f64>),
    /// A drag ended.
    DragEnded {
        /// What the gesture asked for.
        swipe: Swipe,
        /// The transition it started, if any.
        transition: Option<Transition>,
    },
    /// Autoplay was reconfigured.
    AutoplayChanged,
    /// The track width changed.
    Resized,
    /// The slide count changed and the position was reset.
    Reset,
    /// The carousel was torn down.
    TornDown,
}

/// FIFO buffer of events waiting for [`Carousel::drain`].
#[derive(Clone, Debug, Default)]
pub struct EventQueue {
    events: SmallVec<[CarouselEvent; 8]>,
}

impl EventQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event.
    pub fn push(&mut self, event: CarouselEvent) {
        self.events.push(event);
    }

    /// Number of pending events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Extend<CarouselEvent> for EventQueue {
    fn extend<I: IntoIterator<Item = CarouselEvent>>(&mut self, iter: I) {
        self.events.extend(iter);
    }
}

/// A position indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dot {
    /// 1-based real slide this dot navigates to.
    pub index: usize,
    /// Whether this is the current slide.
    pub active: bool,
}

/// Iterator over a carousel's dots. Created by [`Carousel::dots`].
#[derive(Clone, Debug)]
pub struct Dots {
    next: usize,
    len: usize,
    active: usize,
}

impl Iterator for Dots {
    type Item = Dot;

    fn next(&mut self) -> Option<Dot> {
        if self.next > self.len {
            return None;
        }
        let index = self.next;
        self.next += 1;
        Some(Dot {
            index,
            active: index == self.active,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.len + 1).saturating_sub(self.next);
        (n, Some(n))
    }
}

impl ExactSizeIterator for Dots {}

impl FusedIterator for Dots {}

/// Headless infinite-loop carousel.
///
/// ## Minimal example
///
/// ```
/// use kurbo::Point;
/// use understory_carousel::{Carousel, CarouselEvent, CarouselOptions, PointerKind};
///
/// let mut carousel = Carousel::new(2, CarouselOptions::default(), 0).unwrap();
/// carousel.set_track_width(600.0).unwrap();
///
/// // Arrow click: animate one slide to the left.
/// carousel.next().unwrap();
/// let frame = carousel.render();
/// assert_eq!(frame.translate_percent, -200.0);
/// assert!(frame.animated);
/// carousel.transition_end().unwrap();
///
/// // Swipe left by half the track, then release.
/// for event in [
///     CarouselEvent::PointerDown { pos: Point::new(500.0, 0.0), kind: PointerKind::Touch },
///     CarouselEvent::PointerMove { pos: Point::new(200.0, 0.0), kind: PointerKind::Touch },
/// ] {
///     carousel.handle(event).unwrap();
/// }
/// assert_eq!(carousel.render().translate_percent, -250.0);
/// carousel
///     .handle(CarouselEvent::PointerUp { pos: None, kind: PointerKind::Touch })
///     .unwrap();
///
/// // The swipe went past the last slide onto the clone of the first;
/// // settling wraps to slide 1.
/// carousel.transition_end().unwrap();
/// assert_eq!(carousel.real_index(), 1);
/// assert_eq!(carousel.render().translate_percent, -100.0);
/// ```
#[derive(Clone, Debug)]
pub struct Carousel {
    options: CarouselOptions,
    position: PositionState,
    gesture: GestureTracker,
    autoplay: Autoplay,
    track_width: f64,
    torn_down: bool,
}

impl Carousel {
    /// Mounts a carousel over `slide_count` slides at time `now_ms`.
    ///
    /// Autoplay starts counting from `now_ms` if the options enable it.
    pub fn new(
        slide_count: usize,
        options: CarouselOptions,
        now_ms: u64,
    ) -> Result<Self, Rejected> {
        let ring = SlideRing::new(slide_count).ok_or(Rejected::EmptyRing)?;
        let mut autoplay = Autoplay::new();
        autoplay.enable(options.autoplay_interval_ms, now_ms);
        Ok(Self {
            options,
            position: PositionState::new(ring),
            gesture: GestureTracker::new(
                options.drag_policy(),
                options.swipe_threshold,
                options.follow_clamp,
            ),
            autoplay,
            track_width: 0.0,
            torn_down: false,
        })
    }

    /// Applies one event.
    ///
    /// A rejected event leaves every piece of state untouched, except that a
    /// due [`CarouselEvent::Tick`] rejected with [`Rejected::Animating`] or
    /// [`Rejected::Dragging`] still moves the autoplay deadline forward.
    pub fn handle(&mut self, event: CarouselEvent) -> Result<Effect, Rejected> {
        let result = self.apply(event);
        if let Err(reason) = &result {
            log::trace!("dropped {event:?}: {reason}");
        }
        result
    }

    /// Applies every queued event in order, leaving the queue empty.
    ///
    /// Returns how many were accepted.
    pub fn drain(&mut self, queue: &mut EventQueue) -> usize {
        queue
            .events
            .drain(..)
            .filter(|event| self.handle(*event).is_ok())
            .count()
    }

    /// Steps to the next slide.
    #[allow(
        clippy::should_implement_trait,
        reason = "navigation command, the carousel is not an iterator"
    )]
    pub fn next(&mut self) -> Result<Effect, Rejected> {
        self.handle(CarouselEvent::Next)
    }

    /// Steps to the previous slide.
    pub fn prev(&mut self) -> Result<Effect, Rejected> {
        self.handle(CarouselEvent::Prev)
    }

    /// Jumps to a 1-based real slide.
    pub fn goto(&mut self, index: usize) -> Result<Effect, Rejected> {
        self.handle(CarouselEvent::Goto(index))
    }

    /// Reports that the track's transition finished.
    pub fn transition_end(&mut self) -> Result<Effect, Rejected> {
        self.handle(CarouselEvent::TransitionEnd)
    }

    /// Feeds the host clock to autoplay.
    pub fn tick(&mut self, now_ms: u64) -> Result<Effect, Rejected> {
        self.handle(CarouselEvent::Tick { now_ms })
    }

    /// Records the measured track width in pixels.
    pub fn set_track_width(&mut self, width: f64) -> Result<Effect, Rejected> {
        self.handle(CarouselEvent::SetTrackWidth(width))
    }

    /// Stops autoplay, drops any drag, and rejects all later events.
    pub fn teardown(&mut self) -> Result<Effect, Rejected> {
        self.handle(CarouselEvent::Teardown)
    }

    /// The directive the host applies to the track.
    #[must_use]
    pub fn render(&self) -> RenderDirective {
        let rest = self.position.rest_offset_percent();
        match self
            .gesture
            .live_offset(rest, self.track_width, self.position.ring())
        {
            Some(live) => RenderDirective {
                translate_percent: live,
                animated: false,
            },
            None => RenderDirective {
                translate_percent: rest,
                animated: self.position.is_animating() && !self.gesture.is_dragging(),
            },
        }
    }

    /// Duration and easing for animated directives.
    #[must_use]
    pub fn transition_style(&self) -> TransitionStyle {
        self.options.transition
    }

    /// The 1-based real slide shown or being moved to.
    #[must_use]
    pub fn real_index(&self) -> usize {
        self.position.real_index()
    }

    /// Current padded index.
    #[must_use]
    pub fn padded_index(&self) -> usize {
        self.position.padded_index()
    }

    /// Number of real slides.
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.position.ring().len()
    }

    /// The padded ring.
    #[must_use]
    pub fn ring(&self) -> SlideRing {
        self.position.ring()
    }

    /// Returns `true` while a transition is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.position.is_animating()
    }

    /// Returns `true` while the pointer holds the track.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    /// Returns `true` after [`teardown`](Self::teardown).
    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// The autoplay timer.
    #[must_use]
    pub fn autoplay(&self) -> &Autoplay {
        &self.autoplay
    }

    /// The options the carousel was built with, with autoplay kept current.
    #[must_use]
    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    /// One dot per slide, or none when dots are hidden.
    #[must_use]
    pub fn dots(&self) -> Dots {
        Dots {
            next: 1,
            len: if self.options.show_dots {
                self.slide_count()
            } else {
                0
            },
            active: self.real_index(),
        }
    }

    /// Whether previous/next arrows are shown.
    #[must_use]
    pub fn arrows_visible(&self) -> bool {
        self.options.show_arrows
    }

    fn apply(&mut self, event: CarouselEvent) -> Result<Effect, Rejected> {
        if self.torn_down {
            return Err(Rejected::TornDown);
        }
        match event {
            CarouselEvent::Next => self.advance(Direction::Next),
            CarouselEvent::Prev => self.advance(Direction::Prev),
            CarouselEvent::Goto(index) => {
                self.ensure_not_dragging()?;
                Ok(self
                    .position
                    .request_goto(index)?
                    .map_or(Effect::Idle, Effect::Transition))
            }
            CarouselEvent::PointerDown { pos, kind } => {
                if !self.options.swipe_sources.allows(kind) {
                    return Err(Rejected::SourceDisabled(kind));
                }
                self.gesture.start(pos, kind)?;
                // The track stops animating under the finger, so no
                // transition-end will arrive for whatever was in flight.
                Ok(Effect::DragStarted(self.position.settle()))
            }
            CarouselEvent::PointerMove { pos, kind } => {
                self.gesture.update(pos, kind)?;
                Ok(Effect::DragMoved(self.gesture.live_offset(
                    self.position.rest_offset_percent(),
                    self.track_width,
                    self.position.ring(),
                )))
            }
            CarouselEvent::PointerUp { pos, kind } => self.release(pos, kind),
            CarouselEvent::PointerLeave { kind } => self.release(None, kind),
            CarouselEvent::TransitionEnd => match self.position.settle() {
                Settle::Idle => Ok(Effect::Idle),
                settle => Ok(Effect::Settled(settle)),
            },
            CarouselEvent::Tick { now_ms } => {
                if self.autoplay.poll(now_ms) {
                    self.advance(Direction::Next)
                } else {
                    Ok(Effect::Idle)
                }
            }
            CarouselEvent::SetAutoplay {
                interval_ms,
                now_ms,
            } => {
                self.options.autoplay_interval_ms = interval_ms;
                self.autoplay.enable(interval_ms, now_ms);
                Ok(Effect::AutoplayChanged)
            }
            CarouselEvent::SetTrackWidth(width) => {
                if width == self.track_width {
                    return Ok(Effect::Idle);
                }
                self.track_width = width;
                Ok(Effect::Resized)
            }
            CarouselEvent::SetSlideCount(count) => {
                let ring = SlideRing::new(count).ok_or(Rejected::EmptyRing)?;
                self.gesture.reset();
                self.position.set_ring(ring);
                log::debug!("slide count now {count}");
                Ok(Effect::Reset)
            }
            CarouselEvent::Teardown => {
                self.autoplay.disable();
                self.gesture.reset();
                self.torn_down = true;
                log::debug!("carousel torn down");
                Ok(Effect::TornDown)
            }
        }
    }

    fn advance(&mut self, direction: Direction) -> Result<Effect, Rejected> {
        self.ensure_not_dragging()?;
        Ok(Effect::Transition(self.position.request_advance(direction)?))
    }

    fn ensure_not_dragging(&self) -> Result<(), Rejected> {
        if self.gesture.is_dragging() {
            Err(Rejected::Dragging)
        } else {
            Ok(())
        }
    }

    fn release(&mut self, pos: Option<Point>, kind: PointerKind) -> Result<Effect, Rejected> {
        if self.gesture.pointer_kind() != Some(kind) {
            return Err(Rejected::NotDragging);
        }
        let swipe = self.gesture.finish(pos, self.track_width)?;
        let transition = match swipe {
            Swipe::Advance(direction) => Some(
                self.position
                    .request_advance(direction)
                    .unwrap_or_else(|_| self.position.begin_snap_back()),
            ),
            Swipe::SnapBack => Some(self.position.begin_snap_back()),
            Swipe::Rest => None,
        };
        Ok(Effect::DragEnded { swipe, transition })
    }
}
