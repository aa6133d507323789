//! Engine state: configuration plus its last derived summary.

use serde::{Deserialize, Serialize};

use crate::{config::Configuration, summary::Summary};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct JarsState {
    pub config: Configuration,
    pub summary: Summary,
}

/// Default configuration with a zeroed summary; every session starts here.
pub const DEFAULT_STATE: JarsState = JarsState {
    config: Configuration::DEFAULT,
    summary: Summary::ZERO,
};

impl JarsState {
    pub fn new(config: Configuration) -> Self {
        Self {
            config,
            summary: Summary::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_matches_default_impl() {
        assert_eq!(JarsState::default(), DEFAULT_STATE);
        assert!(DEFAULT_STATE.summary.is_zero());
    }

    #[test]
    fn state_round_trips_through_json() {
        let json = serde_json::json!({
            "config": {
                "income": 1200.0,
                "necessities": 0.5,
                "education": 0.1,
                "longTermSavings": 0.15,
                "financialFreedom": 0.1,
                "play": 0.1,
                "give": 0.05
            },
            "summary": {
                "necessities": 0.0,
                "education": 0.0,
                "longTermSavings": 0.0,
                "financialFreedom": 0.0,
                "play": 0.0,
                "give": 0.0,
                "total": 0.0
            }
        });
        let state: JarsState = serde_json::from_value(json).unwrap();
        assert_eq!(state.config.income, 1200.0);
        assert_eq!(state.config.long_term_savings, 0.15);
        assert!(state.summary.is_zero());
    }
}
