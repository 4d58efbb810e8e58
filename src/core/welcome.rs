//! The one-shot intro shown before the landing content on the first visit
//! of a session.

use std::time::{Duration, Instant};

use crate::config::Config;

use super::timer::OneShot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WelcomePhase {
    ShowingIntro,
    FadingOut,
    /// Terminal for the session
    Revealed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WelcomeEvent {
    FadeStarted,
    /// The intro is over; the caller persists the "seen" flag.
    Completed,
}

/// Text revealed one character per interval.
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    interval: Duration,
    started: Instant,
}

impl Typewriter {
    pub fn start(text: impl Into<String>, interval: Duration, now: Instant) -> Self {
        Self {
            text: text.into(),
            interval,
            started: now,
        }
    }

    fn typed_chars(&self, now: Instant) -> usize {
        if self.interval.is_zero() {
            return usize::MAX;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_millis() / self.interval.as_millis().max(1)) as usize
    }

    pub fn visible(&self, now: Instant) -> &str {
        let count = self.typed_chars(now);
        match self.text.char_indices().nth(count) {
            Some((end, _)) => &self.text[..end],
            None => &self.text,
        }
    }

    pub fn is_complete(&self, now: Instant) -> bool {
        self.typed_chars(now) >= self.text.chars().count()
    }
}

#[derive(Debug, Clone)]
pub struct WelcomeSequence {
    phase: WelcomePhase,
    intro: Option<OneShot>,
    fade: Option<OneShot>,
    fade_duration: Duration,
    revealed_at: Option<Instant>,
    name: Typewriter,
}

impl WelcomeSequence {
    /// Start the sequence for a freshly mounted landing view. When the intro
    /// was already seen this session, content is revealed immediately.
    pub fn mount(seen: bool, name: &str, config: &Config, now: Instant) -> Self {
        let name = Typewriter::start(name, config.name_typing_interval, now);
        if seen {
            return Self {
                phase: WelcomePhase::Revealed,
                intro: None,
                fade: None,
                fade_duration: config.intro_fade,
                revealed_at: None,
                name,
            };
        }
        tracing::debug!(duration = ?config.intro_duration, "Starting intro");
        Self {
            phase: WelcomePhase::ShowingIntro,
            intro: Some(OneShot::start(now, config.intro_duration)),
            fade: None,
            fade_duration: config.intro_fade,
            revealed_at: None,
            name,
        }
    }

    pub fn phase(&self) -> WelcomePhase {
        self.phase
    }

    pub fn is_revealed(&self) -> bool {
        self.phase == WelcomePhase::Revealed
    }

    /// Whether a timer is still pending, i.e. the view needs ticks.
    pub fn is_ticking(&self) -> bool {
        self.intro.as_ref().is_some_and(OneShot::is_armed)
            || self.fade.as_ref().is_some_and(OneShot::is_armed)
    }

    pub fn tick(&mut self, now: Instant) -> Option<WelcomeEvent> {
        match self.phase {
            WelcomePhase::ShowingIntro => {
                if self.intro.as_mut().is_some_and(|t| t.poll(now)) {
                    self.phase = WelcomePhase::FadingOut;
                    self.fade = Some(OneShot::start(now, self.fade_duration));
                    return Some(WelcomeEvent::FadeStarted);
                }
                None
            }
            WelcomePhase::FadingOut => {
                if self.fade.as_mut().is_some_and(|t| t.poll(now)) {
                    self.phase = WelcomePhase::Revealed;
                    self.revealed_at = Some(now);
                    tracing::debug!("Intro complete");
                    return Some(WelcomeEvent::Completed);
                }
                None
            }
            WelcomePhase::Revealed => None,
        }
    }

    /// Tear down pending timers; completion will never fire afterwards.
    pub fn cancel(&mut self) {
        if let Some(timer) = self.intro.as_mut() {
            timer.cancel();
        }
        if let Some(timer) = self.fade.as_mut() {
            timer.cancel();
        }
    }

    pub fn intro_opacity(&self, now: Instant) -> f32 {
        match (self.phase, &self.fade) {
            (WelcomePhase::ShowingIntro, _) => 1.0,
            (WelcomePhase::FadingOut, Some(fade)) => {
                let remaining = fade.deadline().saturating_duration_since(now);
                ratio(remaining, self.fade_duration)
            }
            _ => 0.0,
        }
    }

    /// Fade-in of the landing content after the intro.
    pub fn content_opacity(&self, now: Instant) -> f32 {
        match (self.phase, self.revealed_at) {
            (WelcomePhase::Revealed, None) => 1.0,
            (WelcomePhase::Revealed, Some(at)) => {
                ratio(now.saturating_duration_since(at), self.fade_duration)
            }
            _ => 0.0,
        }
    }

    pub fn typed_name(&self, now: Instant) -> &str {
        self.name.visible(now)
    }
}

fn ratio(part: Duration, whole: Duration) -> f32 {
    if whole.is_zero() {
        return 1.0;
    }
    (part.as_secs_f32() / whole.as_secs_f32()).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_first_mount_completes_exactly_once() {
        let config = Config::default();
        let start = Instant::now();
        let mut welcome = WelcomeSequence::mount(false, "Name", &config, start);
        assert_eq!(welcome.phase(), WelcomePhase::ShowingIntro);
        assert!(welcome.is_ticking());

        assert_eq!(welcome.tick(start + ms(2999)), None);
        assert_eq!(welcome.tick(start + ms(3000)), Some(WelcomeEvent::FadeStarted));
        assert_eq!(welcome.tick(start + ms(3999)), None);
        assert_eq!(welcome.tick(start + ms(4000)), Some(WelcomeEvent::Completed));
        assert!(welcome.is_revealed());
        assert!(!welcome.is_ticking());

        for later in [4001, 5000, 60_000] {
            assert_eq!(welcome.tick(start + ms(later)), None);
        }
    }

    #[test]
    fn test_seen_session_skips_intro() {
        let config = Config::default();
        let start = Instant::now();
        let mut welcome = WelcomeSequence::mount(true, "Name", &config, start);
        assert!(welcome.is_revealed());
        assert!(!welcome.is_ticking());
        assert_eq!(welcome.content_opacity(start), 1.0);
        assert_eq!(welcome.tick(start + ms(10_000)), None);
    }

    #[test]
    fn test_cancel_before_timer_never_completes() {
        let config = Config::default();
        let start = Instant::now();
        let mut welcome = WelcomeSequence::mount(false, "Name", &config, start);
        welcome.tick(start + ms(1000));
        welcome.cancel();

        assert!(!welcome.is_ticking());
        for later in [3000, 4000, 100_000] {
            assert_eq!(welcome.tick(start + ms(later)), None);
        }
        assert!(!welcome.is_revealed());
    }

    #[test]
    fn test_cancel_during_fade() {
        let config = Config::default();
        let start = Instant::now();
        let mut welcome = WelcomeSequence::mount(false, "Name", &config, start);
        welcome.tick(start + ms(3000));
        welcome.cancel();
        assert_eq!(welcome.tick(start + ms(5000)), None);
    }

    #[test]
    fn test_cross_fade_opacity() {
        let config = Config::default();
        let start = Instant::now();
        let mut welcome = WelcomeSequence::mount(false, "Name", &config, start);
        assert_eq!(welcome.intro_opacity(start), 1.0);
        welcome.tick(start + ms(3000));
        let halfway = welcome.intro_opacity(start + ms(3500));
        assert!((halfway - 0.5).abs() < 0.01);
        welcome.tick(start + ms(4000));
        assert_eq!(welcome.intro_opacity(start + ms(4000)), 0.0);
        assert_eq!(welcome.content_opacity(start + ms(4000)), 0.0);
        assert_eq!(welcome.content_opacity(start + ms(5000)), 1.0);
    }

    #[test]
    fn test_typewriter_reveals_by_interval() {
        let start = Instant::now();
        let typer = Typewriter::start("Noël", ms(100), start);
        assert_eq!(typer.visible(start), "");
        assert_eq!(typer.visible(start + ms(250)), "No");
        assert_eq!(typer.visible(start + ms(300)), "Noë");
        assert!(!typer.is_complete(start + ms(300)));
        assert_eq!(typer.visible(start + ms(10_000)), "Noël");
        assert!(typer.is_complete(start + ms(400)));
    }
}
