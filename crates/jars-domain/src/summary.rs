//! Derived allocation amounts.

use serde::{Deserialize, Serialize};

use crate::jar::Jar;

/// Monetary amount per jar plus their total.
///
/// A summary is only ever produced whole by a derivation step; nothing
/// updates a single field in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub necessities: f64,
    pub education: f64,
    pub long_term_savings: f64,
    pub financial_freedom: f64,
    pub play: f64,
    pub give: f64,
    pub total: f64,
}

impl Summary {
    pub const ZERO: Summary = Summary {
        necessities: 0.0,
        education: 0.0,
        long_term_savings: 0.0,
        financial_freedom: 0.0,
        play: 0.0,
        give: 0.0,
        total: 0.0,
    };

    /// Builds a summary from per-jar amounts given in engine order.
    pub fn from_amounts(amounts: [f64; 6], total: f64) -> Self {
        let [necessities, education, long_term_savings, financial_freedom, play, give] = amounts;
        Self {
            necessities,
            education,
            long_term_savings,
            financial_freedom,
            play,
            give,
            total,
        }
    }

    pub fn amount(&self, jar: Jar) -> f64 {
        match jar {
            Jar::Necessities => self.necessities,
            Jar::Education => self.education,
            Jar::LongTermSavings => self.long_term_savings,
            Jar::FinancialFreedom => self.financial_freedom,
            Jar::Play => self.play,
            Jar::Give => self.give,
        }
    }

    /// Iterates `(jar, amount)` pairs in engine order.
    pub fn amounts(&self) -> impl Iterator<Item = (Jar, f64)> + '_ {
        Jar::ALL.into_iter().map(move |jar| (jar, self.amount(jar)))
    }

    pub fn is_zero(&self) -> bool {
        self.total == 0.0 && self.amounts().all(|(_, amount)| amount == 0.0)
    }
}

impl Default for Summary {
    fn default() -> Self {
        Self::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_amounts_follows_engine_order() {
        let summary = Summary::from_amounts([1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 21.0);
        let collected: Vec<(Jar, f64)> = summary.amounts().collect();
        assert_eq!(collected[0], (Jar::Necessities, 1.0));
        assert_eq!(collected[2], (Jar::LongTermSavings, 3.0));
        assert_eq!(collected[5], (Jar::Give, 6.0));
        assert_eq!(summary.total, 21.0);
    }

    #[test]
    fn zero_summary_reports_zero() {
        assert!(Summary::default().is_zero());
        assert!(!Summary::from_amounts([0.0, 0.0, 0.0, 0.0, 0.0, 1.0], 1.0).is_zero());
    }
}
