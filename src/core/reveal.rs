use std::{
    collections::HashMap,
    hash::Hash,
    time::{Duration, Instant},
};

/// Distance an element must travel into the viewport before it reveals.
const REVEAL_OFFSET: f32 = 10.0;

/// Fade-in on first entry into the viewport. Reveals never reverse.
#[derive(Debug, Clone)]
pub struct RevealTracker<K> {
    /// Reveal start, `None` when shown without animation
    revealed: HashMap<K, Option<Instant>>,
    duration: Duration,
}

impl<K: Copy + Eq + Hash> RevealTracker<K> {
    pub fn new(duration: Duration) -> Self {
        Self {
            revealed: HashMap::new(),
            duration,
        }
    }

    /// Mark every element whose top edge is inside the viewport as revealed.
    /// Returns how many were newly revealed.
    pub fn observe(
        &mut self,
        tops: impl IntoIterator<Item = (K, f32)>,
        scroll_y: f32,
        viewport_height: f32,
        now: Instant,
    ) -> usize {
        let bottom = scroll_y + viewport_height - REVEAL_OFFSET;
        let mut newly = 0;
        for (key, top) in tops {
            if top <= bottom && !self.revealed.contains_key(&key) {
                self.revealed.insert(key, Some(now));
                newly += 1;
            }
        }
        newly
    }

    /// Reveal without animating, e.g. when restoring a scroll position.
    pub fn reveal_now(&mut self, key: K) {
        self.revealed.entry(key).or_insert(None);
    }

    pub fn opacity(&self, key: K, now: Instant) -> f32 {
        match self.revealed.get(&key) {
            None => 0.0,
            Some(None) => 1.0,
            Some(Some(_)) if self.duration.is_zero() => 1.0,
            Some(Some(at)) => {
                let elapsed = now.saturating_duration_since(*at);
                (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
            }
        }
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.revealed
            .values()
            .flatten()
            .any(|at| now.saturating_duration_since(*at) < self.duration)
    }
}
