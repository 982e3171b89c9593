//! Property tests over arbitrary valid snapshots.

use proptest::prelude::*;

use options_posture::{
    classify, Action, Confidence, PostureConfig, RawSnapshot, Snapshot, VolRegime,
};

fn objective() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("speculate"), Just("income"), Just("hedge")]
}

fn trend() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("up"), Just("down"), Just("sideways")]
}

prop_compose! {
    fn raw_snapshot()(
        price in 0.01f64..5_000.0,
        trend in trend(),
        days_to_expiry in 1i64..400,
        upcoming_event in any::<bool>(),
        iv in 0.0f64..3.0,
        iv_rank in 0.0f64..=100.0,
        delta in -1.05f64..=1.05,
        theta in -1.0f64..1.0,
        vega in 0.0f64..2.0,
        bid_ask_spread_pct in 0.0f64..5.0,
        objective in objective(),
    ) -> RawSnapshot {
        RawSnapshot {
            price,
            trend: trend.to_string(),
            days_to_expiry,
            upcoming_event,
            iv,
            iv_rank,
            delta,
            theta,
            vega,
            bid_ask_spread_pct,
            objective: objective.to_string(),
            symbol: None,
            option_type: None,
            strike: None,
        }
    }
}

proptest! {
    #[test]
    fn prop_wide_spread_always_rejected(raw in raw_snapshot(), spread in 1.001f64..50.0) {
        let config = PostureConfig::default();
        let raw = RawSnapshot { bid_ask_spread_pct: spread, ..raw };

        let result = classify(&Snapshot::new(raw).unwrap(), &config);
        prop_assert_eq!(result.action, Action::DoNothing);
        prop_assert_eq!(result.confidence, Confidence::Low);
        prop_assert_eq!(result.reasons.len(), 1);
    }

    #[test]
    fn prop_short_dte_rejected_unless_hedging(
        raw in raw_snapshot(),
        dte in 1i64..7,
        spread in 0.0f64..=1.0,
        objective in prop_oneof![Just("speculate"), Just("income")],
    ) {
        let config = PostureConfig::default();
        let raw = RawSnapshot {
            days_to_expiry: dte,
            bid_ask_spread_pct: spread,
            objective: objective.to_string(),
            ..raw
        };
        let result = classify(&Snapshot::new(raw).unwrap(), &config);
        prop_assert_eq!(result.action, Action::DoNothing);
        prop_assert_eq!(result.confidence, Confidence::Low);
        prop_assert_eq!(result.reasons.len(), 1);
    }

    #[test]
    fn prop_hedge_objective_always_hedges(raw in raw_snapshot(), spread in 0.0f64..=1.0) {
        let config = PostureConfig::default();
        let raw = RawSnapshot {
            bid_ask_spread_pct: spread,
            objective: "hedge".to_string(),
            ..raw
        };
        let result = classify(&Snapshot::new(raw).unwrap(), &config);
        prop_assert_eq!(result.action, Action::Hedge);
    }

    #[test]
    fn prop_classify_is_idempotent(raw in raw_snapshot()) {
        let config = PostureConfig::default();
        let snap = Snapshot::new(raw).unwrap();
        prop_assert_eq!(classify(&snap, &config), classify(&snap, &config));
    }

    #[test]
    fn prop_reasons_never_empty(raw in raw_snapshot()) {
        let result = classify(&Snapshot::new(raw).unwrap(), &PostureConfig::default());
        prop_assert!(!result.reasons.is_empty());
    }

    #[test]
    fn prop_high_confidence_requires_active_action(raw in raw_snapshot()) {
        let result = classify(&Snapshot::new(raw).unwrap(), &PostureConfig::default());
        if result.confidence == Confidence::High {
            prop_assert!(result.action.is_active());
            prop_assert!(matches!(result.regime, Some(VolRegime::Low | VolRegime::High)));
        }
    }

    #[test]
    fn prop_regime_bands(iv_rank in 0.0f64..=100.0) {
        let t = PostureConfig::default().volatility;
        let regime = VolRegime::from_iv_rank(iv_rank, &t);
        let expected = if iv_rank <= t.iv_rank_low {
            VolRegime::Low
        } else if iv_rank >= t.iv_rank_high {
            VolRegime::High
        } else {
            VolRegime::Mid
        };
        prop_assert_eq!(regime, expected);
    }
}

#[test]
fn test_regime_boundaries() {
    let t = PostureConfig::default().volatility;
    assert_eq!(VolRegime::from_iv_rank(t.iv_rank_low, &t), VolRegime::Low);
    assert_eq!(VolRegime::from_iv_rank(t.iv_rank_low + 1.0, &t), VolRegime::Mid);
    assert_eq!(VolRegime::from_iv_rank(t.iv_rank_high, &t), VolRegime::High);
    assert_eq!(VolRegime::from_iv_rank(t.iv_rank_high - 1.0, &t), VolRegime::Mid);
}
