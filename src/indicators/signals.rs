// =============================================================================
// Trading Signals
// =============================================================================
//
// Display-only trading calls assembled from the other derived values:
//
//   short term : BUY if change24h > 5, SELL if < -5, else HOLD
//   medium term: from the synthetic RSI (> 60 bullish, < 40 bearish)
//   entry      : first (nearest) support level
//   exit       : first (nearest) resistance level
//   stop loss  : price * 0.92, 2 decimal places
// =============================================================================

use serde::Serialize;

use crate::types::{Bias, TradeAction};

use super::round_dp;
use super::rsi::medium_term_bias;

const STOP_LOSS_RATIO: f64 = 0.92;

/// Display-only trading signals for one coin snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingSignals {
    pub short_term: TradeAction,
    pub medium_term: Bias,
    pub entry_point: f64,
    pub exit_point: f64,
    pub stop_loss: f64,
}

/// Short-term call from the 24h change.
pub fn short_term_action(change_24h: f64) -> TradeAction {
    if change_24h > 5.0 {
        TradeAction::Buy
    } else if change_24h < -5.0 {
        TradeAction::Sell
    } else {
        TradeAction::Hold
    }
}

/// Assemble the full trading-signal block.
pub fn trading_signals(
    price: f64,
    change_24h: f64,
    rsi: f64,
    supports: &[f64; 3],
    resistances: &[f64; 3],
) -> TradingSignals {
    TradingSignals {
        short_term: short_term_action(change_24h),
        medium_term: medium_term_bias(rsi),
        entry_point: supports[0],
        exit_point: resistances[0],
        stop_loss: round_dp(price * STOP_LOSS_RATIO, 2),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{levels, rsi};

    fn signals_for(price: f64, change: f64) -> TradingSignals {
        trading_signals(
            price,
            change,
            rsi::synthetic_rsi(change),
            &levels::support_levels(price),
            &levels::resistance_levels(price),
        )
    }

    #[test]
    fn short_term_thresholds() {
        assert_eq!(short_term_action(6.0), TradeAction::Buy);
        assert_eq!(short_term_action(-6.0), TradeAction::Sell);
        assert_eq!(short_term_action(0.0), TradeAction::Hold);
        assert_eq!(short_term_action(5.0), TradeAction::Hold);
        assert_eq!(short_term_action(-5.0), TradeAction::Hold);
    }

    #[test]
    fn stop_loss_at_92_percent() {
        let sig = signals_for(100.0, 0.0);
        assert_eq!(sig.stop_loss, 92.0);
    }

    #[test]
    fn entry_and_exit_track_nearest_levels() {
        let sig = signals_for(100.0, 0.0);
        assert_eq!(sig.entry_point, 95.0);
        assert_eq!(sig.exit_point, 105.0);
    }

    #[test]
    fn large_gain_buys_with_bullish_bias() {
        // change 25 => RSI 62.5 => medium-term BULLISH.
        let sig = signals_for(100.0, 25.0);
        assert_eq!(sig.short_term, TradeAction::Buy);
        assert_eq!(sig.medium_term, Bias::Bullish);
    }

    #[test]
    fn large_drop_sells_with_bearish_bias() {
        let sig = signals_for(100.0, -25.0);
        assert_eq!(sig.short_term, TradeAction::Sell);
        assert_eq!(sig.medium_term, Bias::Bearish);
    }
}
