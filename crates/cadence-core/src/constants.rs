use chrono::Weekday;

/// Cadence system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Milliseconds in one minute.
pub const MILLIS_PER_MINUTE: i64 = 60_000;

/// Milliseconds in one day.
pub const MILLIS_PER_DAY: i64 = 24 * 60 * MILLIS_PER_MINUTE;

// ── Default pattern ─────────────────────────────────────────────────────────
//
// Returned by the analyzer when there is no history at all.

/// Default preferred slots as (start hour, performance score).
pub const DEFAULT_SLOTS: [(u32, f64); 3] = [(9, 0.8), (14, 0.7), (19, 0.6)];

/// Width of each default slot in hours.
pub const DEFAULT_SLOT_WIDTH_HOURS: u32 = 2;

/// Frequency reported for each default slot.
pub const DEFAULT_SLOT_FREQUENCY: u32 = 1;

/// Default average session length (minutes).
pub const DEFAULT_SESSION_MINUTES: u32 = 30;

/// Default strong days.
pub const DEFAULT_STRONG_DAYS: [Weekday; 3] = [Weekday::Mon, Weekday::Wed, Weekday::Fri];

/// Consistency score used when there is too little history to judge.
pub const NEUTRAL_CONSISTENCY: f64 = 0.5;

/// Default break interval (minutes).
pub const DEFAULT_BREAK_INTERVAL_MINUTES: u32 = 45;

// ── Suggestion priorities ───────────────────────────────────────────────────

/// Most urgent priority band.
pub const PRIORITY_URGENT: u8 = 1;

/// Least urgent priority band.
pub const PRIORITY_LOWEST: u8 = 5;
