//! Referral types produced by the screening rules.

use serde::{Deserialize, Serialize};

/// ICOPE functional domain a rule screens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    /// A. Cognitive decline.
    Cognition,
    /// B. Limited mobility.
    Mobility,
    /// C. Malnutrition.
    Nutrition,
    /// D. Visual impairment.
    Vision,
    /// E. Hearing loss.
    Hearing,
    /// F. Depressive symptoms.
    Mood,
}

impl Domain {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Domain::Cognition => "認知功能",
            Domain::Mobility => "行動功能",
            Domain::Nutrition => "營養不良",
            Domain::Vision => "視力障礙",
            Domain::Hearing => "聽力障礙",
            Domain::Mood => "憂鬱",
        }
    }

    /// The fixed follow-up recommendation emitted when this domain triggers.
    pub fn recommendation(&self) -> &'static str {
        match self {
            Domain::Cognition => "請進行BHT-AD8量表評估",
            Domain::Mobility => "請進行SPPB量表評估",
            Domain::Nutrition => "請進行MNA-SF量表評估",
            Domain::Vision => "請依長者狀況轉介眼科檢查",
            Domain::Hearing => "請依長者狀況轉介醫療院所接受聽力檢測",
            Domain::Mood => "請進行GDS-15量表評估",
        }
    }
}

/// A follow-up referral for one triggered domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Referral {
    /// The domain whose rule triggered.
    pub domain: Domain,
    /// The fixed recommendation text.
    pub recommendation: String,
}

impl Referral {
    /// Create the referral for a domain.
    pub fn for_domain(domain: Domain) -> Self {
        Self {
            domain,
            recommendation: domain.recommendation().to_string(),
        }
    }
}

/// Affirmation shown when no rule triggered.
pub const ALL_CLEAR: &str = "無需進一步量表評估";

/// Result of evaluating all six screening rules against one record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningReport {
    /// Triggered referrals, in rule evaluation order.
    pub referrals: Vec<Referral>,
}

impl ScreeningReport {
    /// Whether no domain triggered.
    pub fn is_clear(&self) -> bool {
        self.referrals.is_empty()
    }

    /// The recommendation strings, in rule order.
    pub fn recommendations(&self) -> Vec<&str> {
        self.referrals
            .iter()
            .map(|r| r.recommendation.as_str())
            .collect()
    }

    /// Whether a specific domain triggered.
    pub fn triggered(&self, domain: Domain) -> bool {
        self.referrals.iter().any(|r| r.domain == domain)
    }

    /// One-line summary: the all-clear affirmation, or a referral count.
    pub fn summary(&self) -> String {
        if self.is_clear() {
            ALL_CLEAR.to_string()
        } else {
            format!("{} 項需後續評估", self.referrals.len())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_is_clear() {
        let report = ScreeningReport::default();
        assert!(report.is_clear());
        assert_eq!(report.summary(), ALL_CLEAR);
    }

    #[test]
    fn test_referral_carries_fixed_text() {
        let referral = Referral::for_domain(Domain::Cognition);
        assert_eq!(referral.recommendation, "請進行BHT-AD8量表評估");
    }

    #[test]
    fn test_triggered_lookup() {
        let report = ScreeningReport {
            referrals: vec![Referral::for_domain(Domain::Hearing)],
        };
        assert!(report.triggered(Domain::Hearing));
        assert!(!report.triggered(Domain::Vision));
        assert_eq!(report.summary(), "1 項需後續評估");
    }
}
