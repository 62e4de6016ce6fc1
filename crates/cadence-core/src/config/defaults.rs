//! Default values for every tunable. These reproduce the scheduler's
//! reference behavior exactly; changing them changes analysis output.

// ── Analysis ────────────────────────────────────────────────────────────────

pub const DEFAULT_TIMEZONE: &str = "UTC";
pub const DEFAULT_LOOKBACK_DAYS: u32 = 30;
pub const DEFAULT_SLOT_WIDTH_HOURS: u32 = 2;
pub const DEFAULT_MIN_RECORDS_FOR_CONSISTENCY: usize = 7;
pub const DEFAULT_MAX_STRONG_DAYS: usize = 3;
pub const DEFAULT_MAX_WEAK_CATEGORIES: usize = 3;
pub const DEFAULT_BREAK_BUCKET_MINUTES: u32 = 15;

// ── Suggestions ─────────────────────────────────────────────────────────────

pub const DEFAULT_MAX_OPTIMAL_SLOTS: usize = 2;
pub const DEFAULT_MAX_WEAK_AREAS: usize = 2;
pub const DEFAULT_WEAK_AREA_DURATION_MINUTES: u32 = 15;
pub const DEFAULT_BREAK_REMINDER_CONFIDENCE: f64 = 0.8;
pub const DEFAULT_CONSISTENCY_THRESHOLD: f64 = 0.5;
pub const DEFAULT_CONSISTENCY_DURATION_MINUTES: u32 = 10;
pub const DEFAULT_RECENT_WINDOW: usize = 10;
pub const DEFAULT_HIGH_PERFORMANCE_THRESHOLD: f64 = 0.9;
pub const DEFAULT_LOW_PERFORMANCE_THRESHOLD: f64 = 0.6;
pub const DEFAULT_REVIEW_AFTER_DAYS: u32 = 3;
pub const DEFAULT_MAX_REVIEWS: usize = 2;
pub const DEFAULT_REVIEW_DURATION_MINUTES: u32 = 20;
pub const DEFAULT_REVIEW_STRUGGLING_THRESHOLD: f64 = 0.8;
