use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Distance above a section's top at which its nav link becomes active.
pub const NAV_LOOKAHEAD: f64 = 200.0;

/// Scroll offset past which the scroll-to-top button is shown.
pub const SCROLL_TOP_THRESHOLD: f64 = 500.0;

pub const COUNTER_TICKS: u32 = 50;
pub const COUNTER_TICK_MS: u32 = 20;

/// Fraction of the stats container that must be visible before counting starts.
pub const STATS_VISIBILITY_THRESHOLD: f64 = 0.5;

pub const STAT_PRESS_MS: u32 = 200;

pub const FORM_SEND_DELAY_MS: u32 = 1_500;
pub const SUCCESS_DISMISS_MS: u32 = 5_000;

// Viewport line (px from top) used to decide which section is current for arrow-key paging.
pub const KEYBOARD_REFERENCE_Y: f64 = 100.0;
