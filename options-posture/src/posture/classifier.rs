//! Posture classifier.
//!
//! Maps a validated snapshot and thresholds to an action, a confidence, and
//! the reasons behind them. Evaluation order is fixed:
//!
//! 1. Liquidity guardrail (terminal)
//! 2. Short-DTE guardrail (terminal unless hedging)
//! 3. Volatility regime
//! 4. Event risk note
//! 5. DTE window note
//! 6. Objective-driven action
//! 7. Confidence adjustment
//!
//! Reasons accumulate in that order. This is decision support, not a trade
//! signal.

use tracing::{debug, info};

use crate::config::PostureConfig;
use crate::data::Objective;
use crate::regime::VolRegime;
use crate::validation::Snapshot;

use super::types::{Action, Classification, Confidence};

/// Minimum DTE for a low-IV hedge to count as the cheap-protection case.
/// Fixed, independent of `preferred_min_dte`.
pub const HEDGE_MIN_DTE_LOW_IV: i64 = 30;

/// Classify the posture for one snapshot.
pub fn classify(snapshot: &Snapshot, config: &PostureConfig) -> Classification {
    let dte = snapshot.days_to_expiry();
    let spread = snapshot.bid_ask_spread_pct();
    let max_spread = config.liquidity.max_bid_ask_spread_pct;
    let windows = &config.dte;
    let mut reasons = Vec::new();

    // 1. Liquidity guardrail
    if spread > max_spread {
        info!(spread, max_spread, "liquidity guardrail rejected snapshot");
        return Classification::rejected(format!(
            "Liquidity filter: bid–ask spread {:.2}% > {:.2}% threshold",
            spread, max_spread
        ));
    }
    reasons.push(format!(
        "Liquidity OK: bid–ask spread {:.2}% ≤ {:.2}%",
        spread, max_spread
    ));

    // 2. Time-to-expiry guardrail
    if dte < windows.min_dte {
        if snapshot.objective() != Objective::Hedge {
            info!(dte, min_dte = windows.min_dte, "short-DTE guardrail rejected snapshot");
            return Classification::rejected(format!(
                "Very short DTE ({}) < {}: gamma/theta risk is high (avoid unless explicitly hedging)",
                dte, windows.min_dte
            ));
        }
        reasons.push(format!(
            "Very short DTE ({}) < {}: gamma/theta risk is high",
            dte, windows.min_dte
        ));
    }

    // 3. Volatility regime
    let regime = VolRegime::from_iv_rank(snapshot.iv_rank(), &config.volatility);
    reasons.push(format!(
        "IV Rank {} ({:.0}) → {}",
        regime,
        snapshot.iv_rank(),
        regime.description()
    ));
    debug!(iv_rank = snapshot.iv_rank(), %regime, "volatility regime");

    // 4. Event risk
    if snapshot.upcoming_event() {
        reasons.push(format!(
            "Upcoming event within ~{} days → IV distortion/IV crush risk likely",
            config.event.event_lookahead_days
        ));
    }

    // 5. DTE window
    if windows.in_preferred_window(dte) {
        reasons.push(format!(
            "DTE in preferred window ({}–{})",
            windows.preferred_min_dte, windows.preferred_max_dte
        ));
    } else if dte < windows.preferred_min_dte {
        reasons.push(format!(
            "DTE below preferred window (<{}) → higher gamma/theta sensitivity",
            windows.preferred_min_dte
        ));
    } else {
        reasons.push(format!(
            "DTE above preferred window (>{}) → more vega/carry, less capital efficient",
            windows.preferred_max_dte
        ));
    }

    // 6. Objective-driven posture
    let (action, rationale) = select_action(snapshot, regime, config);
    reasons.push(rationale.to_string());
    debug!(objective = snapshot.objective().as_str(), %action, "selected action");

    // 7. Confidence
    let confidence = adjust_confidence(snapshot, regime, action, config, &mut reasons);
    debug!(%confidence, reasons = reasons.len(), "classification complete");

    Classification {
        action,
        confidence,
        regime: Some(regime),
        reasons,
    }
}

/// Pick the action for the snapshot's objective along with its rationale.
fn select_action(
    snapshot: &Snapshot,
    regime: VolRegime,
    config: &PostureConfig,
) -> (Action, &'static str) {
    let dte = snapshot.days_to_expiry();
    let windows = &config.dte;

    match snapshot.objective() {
        Objective::Speculate => {
            if regime.favors_premium_buying()
                && dte >= windows.preferred_min_dte
                && !snapshot.upcoming_event()
            {
                (
                    Action::BuyPremium,
                    "Objective = speculate: low IV + enough time + no event → better conditions to buy premium",
                )
            } else if regime.favors_premium_selling() {
                (
                    Action::SellPremium,
                    "Objective = speculate: high IV → consider selling premium rather than buying it",
                )
            } else {
                (
                    Action::DoNothing,
                    "Objective = speculate: no clear edge from regime/time/event filters",
                )
            }
        }
        Objective::Income => {
            if regime.favors_premium_selling()
                && dte >= windows.min_dte
                && dte <= windows.preferred_max_dte
            {
                (
                    Action::SellPremium,
                    "Objective = income: high IV + workable DTE → premium-selling conditions",
                )
            } else if regime.favors_premium_buying() {
                (
                    Action::DoNothing,
                    "Objective = income: low IV → premium often too small for risk taken",
                )
            } else {
                (Action::DoNothing, "Objective = income: neutral setup")
            }
        }
        Objective::Hedge => {
            if regime.favors_premium_buying() && dte >= HEDGE_MIN_DTE_LOW_IV {
                (
                    Action::Hedge,
                    "Objective = hedge: low IV + longer DTE → protection relatively cheaper",
                )
            } else if regime.favors_premium_selling() {
                (
                    Action::Hedge,
                    "Objective = hedge: high IV → protection expensive; consider spreads/collars to reduce cost",
                )
            } else {
                (
                    Action::Hedge,
                    "Objective = hedge: hedge can be staged/scaled to reduce timing risk",
                )
            }
        }
        // Unreachable through a validated snapshot; keeps the dispatch total.
        #[allow(unreachable_patterns)]
        _ => (
            Action::DoNothing,
            "Unknown objective (expected: speculate / income / hedge)",
        ),
    }
}

/// Apply the confidence rules in order. Each matching rule overwrites the
/// previous value and appends its reason; the last match wins.
fn adjust_confidence(
    snapshot: &Snapshot,
    regime: VolRegime,
    action: Action,
    config: &PostureConfig,
    reasons: &mut Vec<String>,
) -> Confidence {
    let dte = snapshot.days_to_expiry();
    let mut confidence = Confidence::default();

    if snapshot.upcoming_event() && action.is_buy() {
        confidence = Confidence::Low;
        reasons.push("Confidence lowered: buying premium into an event risks IV crush".to_string());
    }

    if dte < config.dte.preferred_min_dte && !action.is_hedge() {
        confidence = Confidence::Low;
        reasons.push("Confidence lowered: short DTE increases gamma/theta instability".to_string());
    }

    if regime.is_extreme()
        && !snapshot.upcoming_event()
        && config.dte.in_preferred_window(dte)
        && action.is_active()
    {
        confidence = Confidence::High;
        reasons.push(
            "Confidence raised: strong vol regime + preferred DTE window + no event".to_string(),
        );
    }

    confidence
}
