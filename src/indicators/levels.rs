// =============================================================================
// Support / Resistance Levels
// =============================================================================
//
// Three fixed-ratio price levels on each side of the current price:
//
//   support    = price * {0.95, 0.90, 0.85}
//   resistance = price * {1.05, 1.10, 1.15}
//
// Each level is rounded to 2 decimal places. The first support doubles as the
// suggested entry point, the first resistance as the exit point.
// =============================================================================

use super::round_dp;

const SUPPORT_RATIOS: [f64; 3] = [0.95, 0.90, 0.85];
const RESISTANCE_RATIOS: [f64; 3] = [1.05, 1.10, 1.15];

/// Three support levels below the current price, nearest first.
pub fn support_levels(price: f64) -> [f64; 3] {
    SUPPORT_RATIOS.map(|r| round_dp(price * r, 2))
}

/// Three resistance levels above the current price, nearest first.
pub fn resistance_levels(price: f64) -> [f64; 3] {
    RESISTANCE_RATIOS.map(|r| round_dp(price * r, 2))
}
