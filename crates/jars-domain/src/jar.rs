//! The six fixed jars and their static metadata.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// One of the six spending/saving categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Jar {
    Necessities,
    Education,
    LongTermSavings,
    FinancialFreedom,
    Play,
    Give,
}

impl Jar {
    /// Engine order. Derivation and total summation walk the jars in this order.
    pub const ALL: [Jar; 6] = [
        Jar::Necessities,
        Jar::Education,
        Jar::LongTermSavings,
        Jar::FinancialFreedom,
        Jar::Play,
        Jar::Give,
    ];

    /// Order used when presenting a summary or chart.
    pub const DISPLAY_ORDER: [Jar; 6] = [
        Jar::Necessities,
        Jar::LongTermSavings,
        Jar::Education,
        Jar::FinancialFreedom,
        Jar::Play,
        Jar::Give,
    ];

    /// Stable camelCase key, matching the serialized field names.
    pub const fn key(self) -> &'static str {
        match self {
            Jar::Necessities => "necessities",
            Jar::Education => "education",
            Jar::LongTermSavings => "longTermSavings",
            Jar::FinancialFreedom => "financialFreedom",
            Jar::Play => "play",
            Jar::Give => "give",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Jar::Necessities => "Necessities",
            Jar::Education => "Education",
            Jar::LongTermSavings => "Long Term Savings",
            Jar::FinancialFreedom => "Financial Freedom",
            Jar::Play => "Play",
            Jar::Give => "Give",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Jar::Necessities => "🛒",
            Jar::Education => "📚",
            Jar::LongTermSavings => "🏦",
            Jar::FinancialFreedom => "🚀",
            Jar::Play => "🎉",
            Jar::Give => "🎁",
        }
    }

    /// Fraction of income the method recommends for this jar.
    pub const fn default_weight(self) -> f64 {
        match self {
            Jar::Necessities => 0.55,
            Jar::Education => 0.10,
            Jar::LongTermSavings => 0.10,
            Jar::FinancialFreedom => 0.10,
            Jar::Play => 0.10,
            Jar::Give => 0.05,
        }
    }

    /// Typical percentage range, shown as an input hint.
    pub const fn suggested_range(self) -> &'static str {
        match self {
            Jar::Necessities => "40 - 55",
            Jar::Education => "10",
            Jar::LongTermSavings => "10 - 15",
            Jar::FinancialFreedom => "10 - 20",
            Jar::Play => "10 - 20",
            Jar::Give => "5",
        }
    }

    /// Position of the jar in [`Jar::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Jar::Necessities => 0,
            Jar::Education => 1,
            Jar::LongTermSavings => 2,
            Jar::FinancialFreedom => 3,
            Jar::Play => 4,
            Jar::Give => 5,
        }
    }

    pub fn keys() -> impl Iterator<Item = &'static str> {
        Jar::ALL.iter().map(|jar| jar.key())
    }
}

impl fmt::Display for Jar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string does not name one of the six jars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownJar(pub String);

impl fmt::Display for UnknownJar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown jar `{}`", self.0)
    }
}

impl std::error::Error for UnknownJar {}

impl FromStr for Jar {
    type Err = UnknownJar;

    /// Accepts the camelCase key as well as snake_case, kebab-case and
    /// space-separated spellings, ignoring case.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized: String = value
            .trim()
            .chars()
            .filter(|ch| !matches!(ch, '_' | '-' | ' '))
            .map(|ch| ch.to_ascii_lowercase())
            .collect();
        Jar::ALL
            .into_iter()
            .find(|jar| jar.key().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| UnknownJar(value.trim().to_string()))
    }
}
