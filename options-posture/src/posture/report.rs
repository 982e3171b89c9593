//! Rendering of classification results.
//!
//! Both renderers keep reasons in classifier order.

use std::fmt;

use crate::validation::Snapshot;

use super::types::Classification;

const RULE: &str = "------------------------------";

/// Console report for a snapshot and its classification.
pub struct Report<'a> {
    pub snapshot: &'a Snapshot,
    pub result: &'a Classification,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.snapshot;

        writeln!(f)?;
        writeln!(f, "Options Regime Classification")?;
        writeln!(f, "{}", RULE)?;
        if let Some(symbol) = snapshot.symbol() {
            writeln!(f, "Symbol: {}", symbol)?;
        }
        writeln!(f, "Objective: {}", snapshot.objective().as_str())?;
        writeln!(f, "IV Rank: {:.0}", snapshot.iv_rank())?;
        writeln!(f, "DTE: {}", snapshot.days_to_expiry())?;
        writeln!(f, "Bid–ask spread: {:.2}%", snapshot.bid_ask_spread_pct())?;

        writeln!(f)?;
        writeln!(f, "Suggested posture: {}", self.result.action)?;
        writeln!(f, "Confidence: {}", self.result.confidence)?;
        writeln!(f)?;
        writeln!(f, "Reasons:")?;
        for reason in &self.result.reasons {
            writeln!(f, "- {}", reason)?;
        }
        Ok(())
    }
}

/// Render the console report to a string.
pub fn render_text(snapshot: &Snapshot, result: &Classification) -> String {
    Report { snapshot, result }.to_string()
}

/// Pretty JSON for a classification.
pub fn render_json(result: &Classification) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::posture::{Action, Confidence};
    use crate::data::RawSnapshot;
    use crate::regime::VolRegime;

    fn snapshot(symbol: Option<&str>) -> Snapshot {
        Snapshot::new(RawSnapshot {
            price: 100.0,
            trend: "up".to_string(),
            days_to_expiry: 35,
            upcoming_event: false,
            iv: 0.30,
            iv_rank: 50.0,
            delta: 0.30,
            theta: -0.03,
            vega: 0.10,
            bid_ask_spread_pct: 0.4,
            objective: "income".to_string(),
            symbol: symbol.map(str::to_string),
            option_type: None,
            strike: None,
        })
        .unwrap()
    }

    fn result() -> Classification {
        Classification {
            action: Action::DoNothing,
            confidence: Confidence::Medium,
            regime: Some(VolRegime::Mid),
            reasons: vec!["first".to_string(), "second".to_string(), "third".to_string()],
        }
    }

    #[test]
    fn test_text_layout() {
        let text = render_text(&snapshot(Some("SPY")), &result());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "Options Regime Classification");
        assert_eq!(lines[2], RULE);
        assert_eq!(lines[3], "Symbol: SPY");
        assert_eq!(lines[4], "Objective: income");
        assert_eq!(lines[5], "IV Rank: 50");
        assert_eq!(lines[6], "DTE: 35");
        assert_eq!(lines[7], "Bid–ask spread: 0.40%");
        assert!(text.contains("Suggested posture: DO NOTHING"));
        assert!(text.contains("Confidence: medium"));
    }

    #[test]
    fn test_text_omits_missing_symbol() {
        let text = render_text(&snapshot(None), &result());
        assert!(!text.contains("Symbol:"));
    }

    #[test]
    fn test_text_preserves_reason_order() {
        let text = render_text(&snapshot(None), &result());
        let first = text.find("- first").unwrap();
        let second = text.find("- second").unwrap();
        let third = text.find("- third").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_report_display_matches_render_text() {
        let snap = snapshot(Some("SPY"));
        let result = result();
        let report = Report { snapshot: &snap, result: &result };
        assert_eq!(format!("{}", report), render_text(&snap, &result));
        assert!(report.to_string().ends_with("- third\n"));
    }

    #[test]
    fn test_report_writes_into_any_formatter() {
        let snap = snapshot(None);
        let result = result();
        let mut out = String::new();
        fmt::write(&mut out, format_args!("{}", Report { snapshot: &snap, result: &result }))
            .unwrap();
        assert!(out.starts_with("\nOptions Regime Classification\n"));
        assert_eq!(out.lines().filter(|l| l.starts_with("- ")).count(), 3);
    }

    #[test]
    fn test_json_fields() {
        let json = render_json(&result()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["action"], "DO NOTHING");
        assert_eq!(value["confidence"], "medium");
        assert_eq!(value["regime"], "mid");
        assert_eq!(value["reasons"][2], "third");
    }
}
