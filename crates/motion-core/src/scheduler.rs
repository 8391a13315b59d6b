// File: crates/motion-core/src/scheduler.rs
// Summary: Per-chart frame scheduler: dirty/animate flags coalesced into throttled paints.

use std::time::{Duration, Instant};

use tracing::debug;

/// What a frame callback decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Nothing owed.
    Idle,
    /// A paint is owed but the last one was too recent; the flag stays set.
    Throttled,
    /// One render pass ran with this animate flag.
    Painted { animate: bool },
    /// The subscription was torn down.
    Stopped,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Running,
    Stopped,
}

/// Owned by a single chart. The host forwards its animation-frame callbacks
/// to `poll`; there is no shared or global loop.
#[derive(Clone, Debug)]
pub struct FrameScheduler {
    need_update: bool,
    animate_update: bool,
    last_paint: Option<Instant>,
    min_interval: Duration,
    state: State,
    paints: u64,
}

impl FrameScheduler {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            need_update: false,
            animate_update: false,
            last_paint: None,
            min_interval,
            state: State::Stopped,
            paints: 0,
        }
    }

    pub fn start(&mut self) {
        self.state = State::Running;
    }

    pub fn stop(&mut self) {
        if self.state == State::Running {
            debug!("frame scheduler stopped after {} paints", self.paints);
        }
        self.state = State::Stopped;
    }

    pub fn is_running(&self) -> bool { self.state == State::Running }

    /// Mark a paint as owed. The latest animate flag wins.
    pub fn trigger(&mut self, animate: bool) {
        self.need_update = true;
        self.animate_update = animate;
    }

    pub fn is_dirty(&self) -> bool { self.need_update }

    pub fn animate(&self) -> bool { self.animate_update }

    pub fn last_paint(&self) -> Option<Instant> { self.last_paint }

    /// Number of paints granted so far.
    pub fn paints(&self) -> u64 { self.paints }

    /// Decide whether the frame at `now` should paint. A `Painted` outcome
    /// clears the dirty flag and records `now` as the last paint.
    pub fn poll(&mut self, now: Instant) -> FrameOutcome {
        if self.state == State::Stopped {
            return FrameOutcome::Stopped;
        }
        if !self.need_update {
            return FrameOutcome::Idle;
        }
        if let Some(last) = self.last_paint {
            if now.saturating_duration_since(last) < self.min_interval {
                return FrameOutcome::Throttled;
            }
        }
        self.need_update = false;
        self.last_paint = Some(now);
        self.paints += 1;
        FrameOutcome::Painted { animate: self.animate_update }
    }
}
