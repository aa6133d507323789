//! The user's allocation plan: income plus one weight per jar.

use serde::{Deserialize, Serialize};

use crate::jar::Jar;

/// Income and the fraction of it assigned to each jar.
///
/// Weights are fractions (`0.55` means 55%). The engine stores whatever it is
/// given; range and sum checks belong to the validator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub income: f64,
    pub necessities: f64,
    pub education: f64,
    pub long_term_savings: f64,
    pub financial_freedom: f64,
    pub play: f64,
    pub give: f64,
}

impl Configuration {
    /// Zero income with the recommended weights, which sum to exactly 1.
    pub const DEFAULT: Configuration = Configuration {
        income: 0.0,
        necessities: Jar::Necessities.default_weight(),
        education: Jar::Education.default_weight(),
        long_term_savings: Jar::LongTermSavings.default_weight(),
        financial_freedom: Jar::FinancialFreedom.default_weight(),
        play: Jar::Play.default_weight(),
        give: Jar::Give.default_weight(),
    };

    pub fn with_income(income: f64) -> Self {
        Self {
            income,
            ..Self::DEFAULT
        }
    }

    pub fn weight(&self, jar: Jar) -> f64 {
        match jar {
            Jar::Necessities => self.necessities,
            Jar::Education => self.education,
            Jar::LongTermSavings => self.long_term_savings,
            Jar::FinancialFreedom => self.financial_freedom,
            Jar::Play => self.play,
            Jar::Give => self.give,
        }
    }

    pub fn set_weight(&mut self, jar: Jar, weight: f64) {
        let slot = match jar {
            Jar::Necessities => &mut self.necessities,
            Jar::Education => &mut self.education,
            Jar::LongTermSavings => &mut self.long_term_savings,
            Jar::FinancialFreedom => &mut self.financial_freedom,
            Jar::Play => &mut self.play,
            Jar::Give => &mut self.give,
        };
        *slot = weight;
    }

    /// Iterates `(jar, weight)` pairs in engine order.
    pub fn weights(&self) -> impl Iterator<Item = (Jar, f64)> + '_ {
        Jar::ALL.into_iter().map(move |jar| (jar, self.weight(jar)))
    }

    pub fn weight_sum(&self) -> f64 {
        self.weights().map(|(_, weight)| weight).sum()
    }

    /// Fraction of income not assigned to any jar. Negative when over-allocated.
    pub fn unallocated(&self) -> f64 {
        1.0 - self.weight_sum()
    }

    /// Restores every weight to its default, keeping the income.
    pub fn restore_default_weights(&mut self) {
        *self = Self::with_income(self.income);
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_sum_to_one() {
        let config = Configuration::default();
        assert_eq!(config.income, 0.0);
        assert_eq!(config.weight_sum(), 1.0);
        assert_eq!(config.unallocated(), 0.0);
    }

    #[test]
    fn set_weight_only_touches_the_named_jar() {
        let mut config = Configuration::default();
        config.set_weight(Jar::Play, 0.2);

        assert_eq!(config.play, 0.2);
        for jar in Jar::ALL.into_iter().filter(|jar| *jar != Jar::Play) {
            assert_eq!(config.weight(jar), jar.default_weight());
        }
    }

    #[test]
    fn restore_default_weights_keeps_income() {
        let mut config = Configuration::with_income(500.0);
        config.set_weight(Jar::Necessities, 0.9);
        config.set_weight(Jar::Give, 0.0);

        config.restore_default_weights();

        assert_eq!(config, Configuration::with_income(500.0));
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let json = serde_json::to_value(Configuration::with_income(10.0)).unwrap();
        assert_eq!(json["income"], 10.0);
        assert_eq!(json["longTermSavings"], 0.1);
        assert_eq!(json["financialFreedom"], 0.1);
    }
}
