/// Lowest recognized quest tier. Quests above it are gated on tier-one completion.
pub const TIER_ONE: i32 = 1;

/// Default weight of challenge progress in the overall score
pub const DEFAULT_CHALLENGE_WEIGHT: f64 = 0.6;

/// Default weight of daily boost progress in the overall score
pub const DEFAULT_BOOST_WEIGHT: f64 = 0.4;

/// Allowed drift when checking that progress weights sum to 1.0
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Percent reported for a dimension whose requirement is zero
pub const FULL_PROGRESS_PERCENT: f64 = 100.0;
