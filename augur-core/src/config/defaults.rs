//! Default values for every config knob.

// Priors
pub const DEFAULT_PRIOR_ALPHA: f64 = 0.7;
pub const DEFAULT_INFERRED_THRESHOLD: f64 = 0.5;

// Budget
pub const DEFAULT_QUESTION_BUDGET: u32 = 20;

// Coverage gate
pub const DEFAULT_COVERAGE_MIN_RATIO: f64 = 0.05;
pub const DEFAULT_COVERAGE_MAX_RATIO: f64 = 0.85;
pub const DEFAULT_COVERAGE_MIN_ABSOLUTE: usize = 2;
pub const DEFAULT_COVERAGE_AUTO_CUTOFF: usize = 20;

// Selection
pub const DEFAULT_P_BAND_MIN: f64 = 0.05;
pub const DEFAULT_P_BAND_MAX: f64 = 0.95;
pub const DEFAULT_STREAK_BREAKER_AFTER: usize = 4;
pub const DEFAULT_HARD_CONFIRM_TOP_K: usize = 3;

// Confirm insertion
pub const DEFAULT_CONFIRM_BAND_MIN: f64 = 0.25;
pub const DEFAULT_CONFIRM_BAND_MAX: f64 = 0.65;
pub const DEFAULT_HARD_CONFIRM_MIN_CONFIDENCE: f64 = 0.45;
pub const DEFAULT_CONFIRM_THRESHOLD_MIN: f64 = 3.0;
pub const DEFAULT_CONFIRM_THRESHOLD_MAX: f64 = 12.0;
pub const DEFAULT_CONFIRM_THRESHOLD_DIVISOR: f64 = 25.0;

// Update policies
pub const DEFAULT_BETA: f64 = 1.2;
pub const DEFAULT_EPSILON: f64 = 0.12;
pub const DEFAULT_BUNDLE_STRENGTH_SCALE: f64 = 0.6;
pub const DEFAULT_STRENGTH_STRONG: f64 = 1.0;
pub const DEFAULT_STRENGTH_WEAK: f64 = 0.6;

// Reveal
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.9;
pub const DEFAULT_REVEAL_MISS_PENALTY: f64 = 0.05;
pub const DEFAULT_REVEAL_MISS_CAP: u32 = 2;
