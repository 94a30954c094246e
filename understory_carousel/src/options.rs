// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel configuration.

use crate::gesture::{DragPolicy, FollowClamp, SwipeSources, SwipeThreshold};
use crate::render::TransitionStyle;

/// Configuration for a [`Carousel`](crate::Carousel).
///
/// The defaults give a carousel with dots, arrows, mouse and touch swiping,
/// a track that follows the pointer, a quarter-width swipe threshold, and no
/// autoplay.
///
/// ```
/// use understory_carousel::{CarouselOptions, DragPolicy, PointerKind};
///
/// let opts = CarouselOptions::default()
///     .with_autoplay_interval_ms(4_000)
///     .with_mobile_swipe(false)
///     .with_draggable(false);
/// assert!(opts.swipe_sources.allows(PointerKind::Mouse));
/// assert!(!opts.swipe_sources.allows(PointerKind::Touch));
/// assert_eq!(opts.drag_policy(), DragPolicy::ThresholdOnly);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselOptions {
    /// Autoplay period in milliseconds; `0` disables autoplay.
    pub autoplay_interval_ms: u64,
    /// Whether position indicators are shown.
    pub show_dots: bool,
    /// Whether previous/next arrows are shown.
    pub show_arrows: bool,
    /// Pointer kinds that may swipe.
    pub swipe_sources: SwipeSources,
    /// `true` to have the track follow the pointer while dragging.
    pub draggable: bool,
    /// Distance a drag must exceed to change slides.
    pub swipe_threshold: SwipeThreshold,
    /// Whether the followed offset is kept inside the padded ring.
    pub follow_clamp: FollowClamp,
    /// Duration and easing of animated transitions.
    pub transition: TransitionStyle,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: 0,
            show_dots: true,
            show_arrows: true,
            swipe_sources: SwipeSources::default(),
            draggable: true,
            swipe_threshold: SwipeThreshold::default(),
            follow_clamp: FollowClamp::default(),
            transition: TransitionStyle::default(),
        }
    }
}

impl CarouselOptions {
    /// Sets the autoplay period; `0` disables autoplay.
    #[must_use]
    pub fn with_autoplay_interval_ms(mut self, interval_ms: u64) -> Self {
        self.autoplay_interval_ms = interval_ms;
        self
    }

    /// Shows or hides the dots.
    #[must_use]
    pub fn with_dots(mut self, show: bool) -> Self {
        self.show_dots = show;
        self
    }

    /// Shows or hides the arrows.
    #[must_use]
    pub fn with_arrows(mut self, show: bool) -> Self {
        self.show_arrows = show;
        self
    }

    /// Enables or disables mouse swiping.
    #[must_use]
    pub fn with_desktop_swipe(mut self, enabled: bool) -> Self {
        self.swipe_sources.set(SwipeSources::MOUSE, enabled);
        self
    }

    /// Enables or disables touch swiping.
    #[must_use]
    pub fn with_mobile_swipe(mut self, enabled: bool) -> Self {
        self.swipe_sources.set(SwipeSources::TOUCH, enabled);
        self
    }

    /// Chooses between pointer-following and threshold-only dragging.
    #[must_use]
    pub fn with_draggable(mut self, draggable: bool) -> Self {
        self.draggable = draggable;
        self
    }

    /// Sets the swipe threshold.
    #[must_use]
    pub fn with_swipe_threshold(mut self, threshold: SwipeThreshold) -> Self {
        self.swipe_threshold = threshold;
        self
    }

    /// Sets whether the followed offset is clamped to the ring.
    #[must_use]
    pub fn with_follow_clamp(mut self, clamp: FollowClamp) -> Self {
        self.follow_clamp = clamp;
        self
    }

    /// Sets the transition duration and easing.
    #[must_use]
    pub fn with_transition(mut self, transition: TransitionStyle) -> Self {
        self.transition = transition;
        self
    }

    /// The drag policy selected by [`draggable`](Self::draggable).
    #[must_use]
    pub fn drag_policy(&self) -> DragPolicy {
        if self.draggable {
            DragPolicy::Follow
        } else {
            DragPolicy::ThresholdOnly
        }
    }
}
