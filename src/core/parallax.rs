//! Scroll-driven parallax for the decorative background blobs.

use std::time::{Duration, Instant};

pub const BLOB_COUNT: usize = 4;

const BLOB_ORIGINS: [Offset; BLOB_COUNT] = [
    Offset { x: -4.0, y: 0.0 },
    Offset { x: -4.0, y: 0.0 },
    Offset { x: 20.0, y: -8.0 },
    Offset { x: 20.0, y: -8.0 },
];

const AMPLITUDE_X: f32 = 340.0;
const AMPLITUDE_Y: f32 = 40.0;
/// Scroll distance per radian
const SCROLL_SCALE: f32 = 100.0;
/// Phase shift between consecutive blobs, so they move out of sync
const PHASE_STEP: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

/// Target offset of blob `index` for the given scroll position.
pub fn blob_offset(index: usize, scroll_y: f32) -> Offset {
    let origin = BLOB_ORIGINS[index % BLOB_COUNT];
    let phase = scroll_y / SCROLL_SCALE + index as f32 * PHASE_STEP;
    Offset {
        x: origin.x + phase.sin() * AMPLITUDE_X,
        y: origin.y + phase.cos() * AMPLITUDE_Y,
    }
}

/// Which blobs are mounted. Blobs 1 and 3 are hidden on narrow viewports.
pub fn visible_blobs(narrow: bool) -> [bool; BLOB_COUNT] {
    if narrow {
        [true, false, true, false]
    } else {
        [true; BLOB_COUNT]
    }
}

fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

#[derive(Debug, Clone, Copy)]
struct Transition {
    from: Offset,
    to: Offset,
    started: Instant,
}

impl Transition {
    fn settled(at: Offset, now: Instant) -> Self {
        Self {
            from: at,
            to: at,
            started: now,
        }
    }

    fn progress(&self, now: Instant, duration: Duration) -> f32 {
        if duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0)
    }

    fn sample(&self, now: Instant, duration: Duration) -> Offset {
        let t = ease_out(self.progress(now, duration));
        Offset {
            x: self.from.x + (self.to.x - self.from.x) * t,
            y: self.from.y + (self.to.y - self.from.y) * t,
        }
    }

    fn in_flight(&self, now: Instant, duration: Duration) -> bool {
        self.from != self.to && self.progress(now, duration) < 1.0
    }
}

/// Per-frame driver bound to the landing view's lifetime.
///
/// Scroll events only mark the driver dirty and arm the frame loop; each
/// frame retargets the blobs and the loop keeps running while transitions
/// are in flight.
#[derive(Debug, Clone)]
pub struct ParallaxDriver {
    blobs: [Option<Transition>; BLOB_COUNT],
    duration: Duration,
    scroll_y: f32,
    dirty: bool,
    running: bool,
}

impl ParallaxDriver {
    pub fn mount(visible: [bool; BLOB_COUNT], duration: Duration, now: Instant) -> Self {
        let mut driver = Self {
            blobs: [None; BLOB_COUNT],
            duration,
            scroll_y: 0.0,
            dirty: false,
            running: false,
        };
        driver.set_visible(visible, now);
        driver
    }

    /// Mount or unmount blobs, e.g. after a viewport class change.
    pub fn set_visible(&mut self, visible: [bool; BLOB_COUNT], now: Instant) {
        for (index, slot) in self.blobs.iter_mut().enumerate() {
            *slot = match (visible[index], slot.take()) {
                (true, Some(existing)) => Some(existing),
                (true, None) => Some(Transition::settled(blob_offset(index, self.scroll_y), now)),
                (false, _) => None,
            };
        }
    }

    pub fn on_scroll(&mut self, scroll_y: f32) {
        if scroll_y != self.scroll_y {
            self.scroll_y = scroll_y;
            self.dirty = true;
            self.running = true;
        }
    }

    pub fn on_frame(&mut self, now: Instant) {
        if !self.running {
            return;
        }
        if self.dirty {
            self.dirty = false;
            let duration = self.duration;
            let scroll_y = self.scroll_y;
            for (index, slot) in self.blobs.iter_mut().enumerate() {
                let Some(transition) = slot.as_mut() else {
                    continue;
                };
                *transition = Transition {
                    from: transition.sample(now, duration),
                    to: blob_offset(index, scroll_y),
                    started: now,
                };
            }
        }
        self.running = self
            .blobs
            .iter()
            .flatten()
            .any(|t| t.in_flight(now, self.duration));
    }

    /// Whether the frame loop should stay subscribed.
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn offsets(&self, now: Instant) -> [Option<Offset>; BLOB_COUNT] {
        self.blobs
            .map(|slot| slot.map(|transition| transition.sample(now, self.duration)))
    }

    pub fn teardown(&mut self) {
        self.running = false;
        self.dirty = false;
    }
}
