use std::{path::PathBuf, time::Duration};

/// Timing constants, thresholds and locations used across the views.
#[derive(Debug, Clone)]
pub struct Config {
    /// How long the intro stays on screen before fading out
    pub intro_duration: Duration,
    /// Cross-fade between the intro and the landing content
    pub intro_fade: Duration,
    /// Delay before scrolling back to the last viewed section
    pub restore_delay: Duration,
    /// Idle time after which a new session starts
    pub session_idle_timeout: Duration,
    pub name_typing_interval: Duration,
    pub tagline_typing_interval: Duration,
    pub parallax_transition: Duration,
    pub section_reveal: Duration,
    /// Viewports narrower than this show fewer projects
    pub narrow_breakpoint: f32,
    /// Minimum horizontal drag that counts as a swipe
    pub swipe_threshold: f32,
    /// Optional prefix stripped from routes
    pub base_path: String,
    pub store_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            intro_duration: Duration::from_millis(3000),
            intro_fade: Duration::from_millis(1000),
            restore_delay: Duration::from_millis(300),
            session_idle_timeout: Duration::from_secs(30 * 60),
            name_typing_interval: Duration::from_millis(120),
            tagline_typing_interval: Duration::from_millis(40),
            parallax_transition: Duration::from_millis(1400),
            section_reveal: Duration::from_millis(800),
            narrow_breakpoint: 768.0,
            swipe_threshold: 50.0,
            base_path: "/my-portfolio".to_string(),
            store_path: default_store_path(),
        }
    }
}

/// Get the path where the session database should be stored
/// - Linux: ~/.local/share/folio/session.db
/// - macOS: ~/Library/Application Support/folio/session.db
/// - Windows: %APPDATA%\folio\session.db
pub fn default_store_path() -> PathBuf {
    let mut path = dirs::data_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    path.push("folio");
    path.push("session.db");
    path
}
