// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture tracker: turn a press → move → release sequence into a live track
//! offset and a swipe decision.
//!
//! ## Usage
//!
//! 1) Call [`GestureTracker::start`] on pointer down.
//! 2) On each move, call [`GestureTracker::update`]; in
//!    [`DragPolicy::Follow`] mode, [`GestureTracker::live_offset`] then gives
//!    the translation that keeps the track under the finger.
//! 3) On release call [`GestureTracker::finish`]; on pointer leave call
//!    [`GestureTracker::cancel`]. Both return a [`Swipe`] and always leave the
//!    tracker idle.
//!
//! Only the horizontal component of pointer positions is used.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_carousel::{
//!     Direction, DragPolicy, FollowClamp, GestureTracker, PointerKind, Swipe, SwipeThreshold,
//! };
//!
//! let mut drag = GestureTracker::new(
//!     DragPolicy::Follow,
//!     SwipeThreshold::TrackFraction(0.25),
//!     FollowClamp::Unclamped,
//! );
//! drag.start(Point::new(300.0, 0.0), PointerKind::Mouse).unwrap();
//! drag.update(Point::new(180.0, 4.0), PointerKind::Mouse).unwrap();
//!
//! // 120px of a 400px track is 30% of a slide, past the 25% threshold.
//! let swipe = drag.finish(None, 400.0).unwrap();
//! assert_eq!(swipe, Swipe::Advance(Direction::Next));
//! assert!(!drag.is_dragging());
//! ```

use kurbo::Point;

use crate::error::Rejected;
use crate::position::Direction;
use crate::ring::SlideRing;

/// The physical source of a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Mouse or other desktop pointer.
    Mouse,
    /// Touch contact.
    Touch,
}

bitflags::bitflags! {
    /// Pointer kinds that may start a swipe.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SwipeSources: u8 {
        /// Desktop (mouse) swiping.
        const MOUSE = 0b0000_0001;
        /// Mobile (touch) swiping.
        const TOUCH = 0b0000_0010;
    }
}

impl Default for SwipeSources {
    fn default() -> Self {
        Self::MOUSE | Self::TOUCH
    }
}

impl SwipeSources {
    /// Returns `true` if swipes from `kind` are accepted.
    #[must_use]
    pub fn allows(self, kind: PointerKind) -> bool {
        self.contains(kind.into())
    }
}

impl From<PointerKind> for SwipeSources {
    fn from(kind: PointerKind) -> Self {
        match kind {
            PointerKind::Mouse => Self::MOUSE,
            PointerKind::Touch => Self::TOUCH,
        }
    }
}

/// How the track reacts while a drag is in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DragPolicy {
    /// The track follows the pointer; a short drag snaps back on release.
    #[default]
    Follow,
    /// No visual feedback; only the release decides.
    ThresholdOnly,
}

/// Distance a drag must exceed to count as a swipe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SwipeThreshold {
    /// A fixed distance in pixels.
    Pixels(f64),
    /// A fraction of the measured track width.
    TrackFraction(f64),
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self::TrackFraction(0.25)
    }
}

impl SwipeThreshold {
    /// Threshold in pixels for a track `track_width` pixels wide.
    ///
    /// Returns `None` for a fractional threshold when the width is unknown
    /// (non-positive or not finite).
    #[must_use]
    pub fn resolve(self, track_width: f64) -> Option<f64> {
        match self {
            Self::Pixels(px) => Some(px.abs()),
            Self::TrackFraction(f) if has_width(track_width) => Some(track_width * f.abs()),
            Self::TrackFraction(_) => None,
        }
    }
}

/// Whether the live offset may drag the track past the padded ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FollowClamp {
    /// The track follows the pointer without limit.
    #[default]
    Unclamped,
    /// The offset stays within `[-(N + 1) × 100, 0]`.
    Ring,
}

/// What a released drag asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Swipe {
    /// The drag exceeded the threshold; step once in this direction.
    Advance(Direction),
    /// The drag stayed under the threshold but moved the track; animate back.
    SnapBack,
    /// Nothing to do; the track never left its resting offset.
    Rest,
}

/// Tracks a single horizontal drag over the carousel track.
#[derive(Clone, Debug)]
pub struct GestureTracker {
    policy: DragPolicy,
    threshold: SwipeThreshold,
    clamp: FollowClamp,
    origin: Option<Point>,
    last: Option<Point>,
    kind: Option<PointerKind>,
}

impl GestureTracker {
    /// Creates an idle tracker.
    #[must_use]
    pub fn new(policy: DragPolicy, threshold: SwipeThreshold, clamp: FollowClamp) -> Self {
        Self {
            policy,
            threshold,
            clamp,
            origin: None,
            last: None,
            kind: None,
        }
    }

    /// The configured drag policy.
    #[must_use]
    pub fn policy(&self) -> DragPolicy {
        self.policy
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }

    /// Which pointer started the active drag.
    #[must_use]
    pub fn pointer_kind(&self) -> Option<PointerKind> {
        self.kind
    }

    /// Horizontal distance from the press to the last known position.
    #[must_use]
    pub fn delta(&self) -> Option<f64> {
        Some(self.last?.x - self.origin?.x)
    }

    /// Begins a drag at `pos`.
    pub fn start(&mut self, pos: Point, kind: PointerKind) -> Result<(), Rejected> {
        if self.is_dragging() {
            return Err(Rejected::AlreadyDragging);
        }
        self.origin = Some(pos);
        self.last = Some(pos);
        self.kind = Some(kind);
        Ok(())
    }

    /// Records a move and returns the total horizontal delta.
    ///
    /// Moves from a different pointer kind than the one that started the drag
    /// are treated like strays.
    pub fn update(&mut self, pos: Point, kind: PointerKind) -> Result<f64, Rejected> {
        let origin = self.origin.ok_or(Rejected::NotDragging)?;
        if self.kind != Some(kind) {
            return Err(Rejected::NotDragging);
        }
        self.last = Some(pos);
        Ok(pos.x - origin.x)
    }

    /// Live track offset in percent while dragging in [`DragPolicy::Follow`].
    ///
    /// `rest_percent` is the resting offset of the current index. Returns
    /// `None` when idle, in threshold-only mode, or when the track width is
    /// unknown.
    #[must_use]
    pub fn live_offset(
        &self,
        rest_percent: f64,
        track_width: f64,
        ring: SlideRing,
    ) -> Option<f64> {
        if self.policy != DragPolicy::Follow || !has_width(track_width) {
            return None;
        }
        let offset = rest_percent + self.delta()? / track_width * 100.0;
        Some(match self.clamp {
            FollowClamp::Unclamped => offset,
            FollowClamp::Ring => offset.clamp(-(ring.last_padded() as f64) * 100.0, 0.0),
        })
    }

    /// Ends the drag, optionally at a final position, and decides the swipe.
    ///
    /// Without a final position the last recorded one is used. A release
    /// position only counts toward the threshold: the track was last drawn at
    /// the most recent [`update`](Self::update), so a short drag snaps back
    /// only if that drawn offset left the resting position.
    pub fn finish(&mut self, pos: Option<Point>, track_width: f64) -> Result<Swipe, Rejected> {
        if !self.is_dragging() {
            return Err(Rejected::NotDragging);
        }
        let shown = self.delta().unwrap_or(0.0);
        if let Some(pos) = pos {
            self.last = Some(pos);
        }
        let delta = self.delta().unwrap_or(0.0);
        self.origin = None;
        self.last = None;
        self.kind = None;

        let swipe = match self.threshold.resolve(track_width) {
            Some(threshold) if delta.abs() > threshold => {
                if delta < 0.0 {
                    Swipe::Advance(Direction::Next)
                } else {
                    Swipe::Advance(Direction::Prev)
                }
            }
            _ if self.policy == DragPolicy::Follow && shown != 0.0 && has_width(track_width) => {
                Swipe::SnapBack
            }
            _ => Swipe::Rest,
        };
        log::debug!("drag released, delta {delta}px -> {swipe:?}");
        Ok(swipe)
    }

    /// Ends the drag at its last known position, e.g. when the pointer leaves
    /// the track.
    pub fn cancel(&mut self, track_width: f64) -> Result<Swipe, Rejected> {
        self.finish(None, track_width)
    }

    /// Drops any active drag without deciding anything.
    pub fn reset(&mut self) {
        self.origin = None;
        self.last = None;
        self.kind = None;
    }
}

fn has_width(track_width: f64) -> bool {
    track_width.is_finite() && track_width > 0.0
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{
        DragPolicy, FollowClamp, GestureTracker, PointerKind, Swipe, SwipeSources, SwipeThreshold,
    };
    use crate::error::Rejected;
    use crate::position::Direction;
    use crate::ring::SlideRing;

    const WIDTH: f64 = 400.0;

    fn follow() -> GestureTracker {
        GestureTracker::new(
            DragPolicy::Follow,
            SwipeThreshold::default(),
            FollowClamp::Unclamped,
        )
    }

    fn drag(tracker: &mut GestureTracker, from: f64, to: f64) -> Swipe {
        tracker
            .start(Point::new(from, 0.0), PointerKind::Touch)
            .unwrap();
        tracker
            .update(Point::new(to, 0.0), PointerKind::Touch)
            .unwrap();
        tracker.finish(None, WIDTH).unwrap()
    }

    #[test]
    fn stray_moves_and_releases_are_rejected() {
        let mut t = follow();
        assert_eq!(
            t.update(Point::new(1.0, 0.0), PointerKind::Mouse),
            Err(Rejected::NotDragging)
        );
        assert_eq!(t.finish(None, WIDTH), Err(Rejected::NotDragging));
        assert_eq!(t.cancel(WIDTH), Err(Rejected::NotDragging));
    }

    #[test]
    fn second_press_is_rejected() {
        let mut t = follow();
        t.start(Point::ORIGIN, PointerKind::Touch).unwrap();
        assert_eq!(
            t.start(Point::new(5.0, 0.0), PointerKind::Mouse),
            Err(Rejected::AlreadyDragging)
        );
        assert_eq!(
            t.update(Point::new(5.0, 0.0), PointerKind::Mouse),
            Err(Rejected::NotDragging)
        );
        assert_eq!(t.pointer_kind(), Some(PointerKind::Touch));
    }

    #[test]
    fn leftward_swipe_advances_rightward_goes_back() {
        let mut t = follow();
        assert_eq!(drag(&mut t, 300.0, 100.0), Swipe::Advance(Direction::Next));
        assert_eq!(drag(&mut t, 100.0, 300.0), Swipe::Advance(Direction::Prev));
    }

    #[test]
    fn short_drag_snaps_back_in_follow_mode() {
        let mut t = follow();
        // -10% of the track: below the 25% threshold.
        assert_eq!(drag(&mut t, 200.0, 160.0), Swipe::SnapBack);
    }

    #[test]
    fn exactly_at_threshold_is_not_a_swipe() {
        let mut t = follow();
        assert_eq!(drag(&mut t, 200.0, 100.0), Swipe::SnapBack);
    }

    #[test]
    fn click_without_movement_rests() {
        let mut t = follow();
        assert_eq!(drag(&mut t, 200.0, 200.0), Swipe::Rest);
    }

    #[test]
    fn threshold_only_mode_never_snaps_back() {
        let mut t = GestureTracker::new(
            DragPolicy::ThresholdOnly,
            SwipeThreshold::Pixels(50.0),
            FollowClamp::Unclamped,
        );
        assert_eq!(drag(&mut t, 200.0, 170.0), Swipe::Rest);
        assert_eq!(drag(&mut t, 200.0, 140.0), Swipe::Advance(Direction::Next));
        t.start(Point::ORIGIN, PointerKind::Touch).unwrap();
        t.update(Point::new(-80.0, 0.0), PointerKind::Touch).unwrap();
        assert_eq!(t.live_offset(-100.0, WIDTH, SlideRing::new(3).unwrap()), None);
    }

    #[test]
    fn release_position_overrides_last_move() {
        let mut t = follow();
        t.start(Point::new(300.0, 0.0), PointerKind::Mouse).unwrap();
        t.update(Point::new(290.0, 0.0), PointerKind::Mouse).unwrap();
        let swipe = t.finish(Some(Point::new(50.0, 0.0)), WIDTH).unwrap();
        assert_eq!(swipe, Swipe::Advance(Direction::Next));
    }

    #[test]
    fn release_offset_without_a_drawn_move_rests() {
        let mut t = follow();
        t.start(Point::new(200.0, 0.0), PointerKind::Mouse).unwrap();
        assert_eq!(t.finish(Some(Point::new(190.0, 0.0)), WIDTH), Ok(Swipe::Rest));

        // The drawn offset decides, even if the release lands back on the press.
        t.start(Point::new(200.0, 0.0), PointerKind::Mouse).unwrap();
        t.update(Point::new(180.0, 0.0), PointerKind::Mouse).unwrap();
        let swipe = t.finish(Some(Point::new(200.0, 0.0)), WIDTH).unwrap();
        assert_eq!(swipe, Swipe::SnapBack);
    }

    #[test]
    fn cancel_uses_last_known_delta() {
        let mut t = follow();
        t.start(Point::new(0.0, 0.0), PointerKind::Mouse).unwrap();
        t.update(Point::new(150.0, 0.0), PointerKind::Mouse).unwrap();
        assert_eq!(t.cancel(WIDTH), Ok(Swipe::Advance(Direction::Prev)));
        assert!(!t.is_dragging());
        assert_eq!(t.delta(), None);
    }

    #[test]
    fn live_offset_follows_pointer_and_can_clamp() {
        let ring = SlideRing::new(3).unwrap();
        let mut t = follow();
        t.start(Point::new(100.0, 0.0), PointerKind::Touch).unwrap();
        t.update(Point::new(60.0, 0.0), PointerKind::Touch).unwrap();
        assert_eq!(t.live_offset(-100.0, WIDTH, ring), Some(-110.0));
        assert_eq!(t.live_offset(-100.0, 0.0, ring), None);

        t.update(Point::new(900.0, 0.0), PointerKind::Touch).unwrap();
        assert_eq!(t.live_offset(-100.0, WIDTH, ring), Some(100.0));

        let mut clamped = GestureTracker::new(
            DragPolicy::Follow,
            SwipeThreshold::default(),
            FollowClamp::Ring,
        );
        clamped
            .start(Point::new(100.0, 0.0), PointerKind::Touch)
            .unwrap();
        clamped
            .update(Point::new(900.0, 0.0), PointerKind::Touch)
            .unwrap();
        assert_eq!(clamped.live_offset(-100.0, WIDTH, ring), Some(0.0));
        clamped
            .update(Point::new(-2000.0, 0.0), PointerKind::Touch)
            .unwrap();
        assert_eq!(clamped.live_offset(-100.0, WIDTH, ring), Some(-400.0));
    }

    #[test]
    fn unknown_width_disables_fraction_threshold() {
        assert_eq!(SwipeThreshold::TrackFraction(0.25).resolve(0.0), None);
        assert_eq!(SwipeThreshold::TrackFraction(0.25).resolve(f64::NAN), None);
        assert_eq!(SwipeThreshold::Pixels(-30.0).resolve(0.0), Some(30.0));
        let mut t = follow();
        t.start(Point::ORIGIN, PointerKind::Touch).unwrap();
        t.update(Point::new(-500.0, 0.0), PointerKind::Touch).unwrap();
        assert_eq!(t.finish(None, 0.0), Ok(Swipe::Rest));
    }

    #[test]
    fn swipe_sources_default_to_both() {
        let sources = SwipeSources::default();
        assert!(sources.allows(PointerKind::Mouse));
        assert!(sources.allows(PointerKind::Touch));
        assert!(!SwipeSources::TOUCH.allows(PointerKind::Mouse));
    }
}
