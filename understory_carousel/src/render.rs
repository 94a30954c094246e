// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render binding: the single value a host applies to the track.

use alloc::format;
use alloc::string::String;

/// Track translation and whether to animate towards it.
///
/// `translate_percent` is a horizontal translation in percent of one slide
/// width; `-100.0` shows padded slot `1`. Hosts apply both fields in the same
/// frame so that unanimated jumps (wrap correction, drag following) never
/// pick up a stale transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderDirective {
    /// Horizontal translation, in percent of one slide.
    pub translate_percent: f64,
    /// `true` to transition to the new translation, `false` to jump.
    pub animated: bool,
}

impl RenderDirective {
    /// CSS `transform` value, e.g. `translateX(-100%)`.
    #[must_use]
    pub fn css_transform(&self) -> String {
        // Avoid printing `-0%` for the leading clone.
        let pct = if self.translate_percent == 0.0 {
            0.0
        } else {
            self.translate_percent
        };
        format!("translateX({pct}%)")
    }
}

/// Easing curve for animated track transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Slow start.
    EaseIn,
    /// Slow end.
    EaseOut,
    /// Slow start and end.
    #[default]
    EaseInOut,
}

impl Easing {
    /// CSS timing-function keyword.
    #[must_use]
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseIn => "ease-in",
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
        }
    }
}

/// Duration and easing of animated transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionStyle {
    /// Duration in milliseconds.
    pub duration_ms: u32,
    /// Timing curve.
    pub easing: Easing,
}

impl Default for TransitionStyle {
    fn default() -> Self {
        Self {
            duration_ms: 500,
            easing: Easing::EaseInOut,
        }
    }
}

impl TransitionStyle {
    /// CSS `transition` value for a directive: `none` when it is unanimated.
    #[must_use]
    pub fn css_transition(&self, animated: bool) -> String {
        if !animated {
            return String::from("none");
        }
        let secs = f64::from(self.duration_ms) / 1000.0;
        format!("transform {secs}s {}", self.easing.css_name())
    }
}
