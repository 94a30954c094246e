// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Autoplay timer driven by host timestamps.
//!
//! The timer owns no clock. The host passes monotonic milliseconds to
//! [`Autoplay::enable`] and [`Autoplay::poll`], and may use
//! [`Autoplay::next_deadline`] to schedule its next wake-up.
//!
//! - At most one schedule exists; enabling again replaces it and restarts the
//!   countdown from `now`.
//! - A poll fires at most once. If the host was late and several periods have
//!   passed, the missed ones are skipped rather than replayed.
//!
//! ## Minimal example
//!
//! ```
//! use understory_carousel::Autoplay;
//!
//! let mut timer = Autoplay::new();
//! timer.enable(3_000, 0);
//! assert!(!timer.poll(2_999));
//! assert!(timer.poll(3_000));
//! assert_eq!(timer.next_deadline(), Some(6_000));
//!
//! timer.disable();
//! assert!(!timer.poll(6_000));
//! ```

use core::num::NonZeroU64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Schedule {
    interval: NonZeroU64,
    due: u64,
}

/// Repeating advance timer for a single carousel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Autoplay {
    schedule: Option<Schedule>,
}

impl Autoplay {
    /// Creates a disabled timer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while a schedule is active.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.schedule.is_some()
    }

    /// The active interval in milliseconds, if enabled.
    #[must_use]
    pub fn interval_ms(&self) -> Option<u64> {
        self.schedule.map(|s| s.interval.get())
    }

    /// When the next tick is due, if enabled.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.schedule.map(|s| s.due)
    }

    /// Starts ticking every `interval_ms`, counting from `now`.
    ///
    /// Any existing schedule is replaced. An interval of `0` disables
    /// autoplay.
    pub fn enable(&mut self, interval_ms: u64, now: u64) {
        self.schedule = NonZeroU64::new(interval_ms).map(|interval| Schedule {
            interval,
            due: now.saturating_add(interval.get()),
        });
        match self.schedule {
            Some(s) => log::debug!("autoplay every {}ms, first tick at {}", s.interval, s.due),
            None => log::debug!("autoplay off"),
        }
    }

    /// Stops ticking.
    pub fn disable(&mut self) {
        if self.schedule.take().is_some() {
            log::debug!("autoplay off");
        }
    }

    /// Returns `true` if a tick is due at `now`, and schedules the next one.
    pub fn poll(&mut self, now: u64) -> bool {
        let Some(schedule) = self.schedule.as_mut() else {
            return false;
        };
        if now < schedule.due {
            return false;
        }
        let interval = schedule.interval.get();
        let missed = (now - schedule.due) / interval;
        if missed > 0 {
            log::trace!("autoplay skipped {missed} late tick(s)");
        }
        schedule.due = schedule
            .due
            .saturating_add(missed.saturating_add(1).saturating_mul(interval));
        true
    }
}
