/// Session storage key under which the last known-good snapshot is kept
pub const DEFAULT_SNAPSHOT_STORAGE_KEY: &str = "portfolioSnapshot";

/// Decimal precision for gain percentages
pub const GAIN_PERCENT_PRECISION: u32 = 6;
