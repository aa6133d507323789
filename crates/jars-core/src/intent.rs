//! Intents accepted by the allocation engine, plus their tagged wire form.

use std::fmt;

use jars_domain::Jar;
use serde::{Deserialize, Serialize};

use crate::CoreError;

pub const TAG_SET_INCOME: &str = "SET_INCOME";
pub const TAG_RESET: &str = "RESET";
pub const TAG_RECOMPUTE: &str = "RECOMPUTE";

/// A discrete request to change the configuration or re-derive the summary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    SetIncome(f64),
    SetWeight { jar: Jar, weight: f64 },
    Reset,
    Recompute,
}

impl Intent {
    pub fn set_weight(jar: Jar, weight: f64) -> Self {
        Intent::SetWeight { jar, weight }
    }

    /// Wire tag, e.g. `SET_LONG_TERM_SAVINGS`.
    pub fn tag(&self) -> &'static str {
        match self {
            Intent::SetIncome(_) => TAG_SET_INCOME,
            Intent::SetWeight { jar, .. } => weight_tag(*jar),
            Intent::Reset => TAG_RESET,
            Intent::Recompute => TAG_RECOMPUTE,
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Intent::SetIncome(value) => Some(*value),
            Intent::SetWeight { weight, .. } => Some(*weight),
            Intent::Reset | Intent::Recompute => None,
        }
    }

    /// Returns `true` for intents that change the configuration.
    pub fn mutates_config(&self) -> bool {
        !matches!(self, Intent::Recompute)
    }

    /// Every tag the engine understands.
    pub fn tags() -> Vec<&'static str> {
        let mut tags = vec![TAG_SET_INCOME];
        tags.extend(Jar::ALL.into_iter().map(weight_tag));
        tags.push(TAG_RESET);
        tags.push(TAG_RECOMPUTE);
        tags
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(value) => write!(f, "{}({})", self.tag(), value),
            None => f.write_str(self.tag()),
        }
    }
}

fn weight_tag(jar: Jar) -> &'static str {
    match jar {
        Jar::Necessities => "SET_NECESSITIES",
        Jar::Education => "SET_EDUCATION",
        Jar::LongTermSavings => "SET_LONG_TERM_SAVINGS",
        Jar::FinancialFreedom => "SET_FINANCIAL_FREEDOM",
        Jar::Play => "SET_PLAY",
        Jar::Give => "SET_GIVE",
    }
}

/// Older spellings still accepted on decode, paired with the tag they mean.
pub const TAG_ALIASES: [(&str, &str); 3] = [
    ("SET_LONGTERMSAVINGS", "SET_LONG_TERM_SAVINGS"),
    ("SET_FINANCIALFREEDOM", "SET_FINANCIAL_FREEDOM"),
    ("CALC_SUMMARY", TAG_RECOMPUTE),
];

fn canonical_tag(tag: &str) -> &str {
    TAG_ALIASES
        .iter()
        .find(|(alias, _)| *alias == tag)
        .map_or(tag, |&(_, canonical)| canonical)
}

/// Tagged intent as it arrives from outside the process, e.g.
/// `{"type": "SET_PLAY", "value": 0.15}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawIntent {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

impl RawIntent {
    pub fn new(kind: impl Into<String>, value: Option<f64>) -> Self {
        Self {
            kind: kind.into(),
            value,
        }
    }
}

impl TryFrom<RawIntent> for Intent {
    type Error = CoreError;

    fn try_from(raw: RawIntent) -> Result<Self, Self::Error> {
        let tag = canonical_tag(raw.kind.trim());
        let payload = |tag: &str| {
            let value = raw
                .value
                .ok_or_else(|| CoreError::InvalidIntent(format!("{tag} requires a value")))?;
            ensure_finite(tag, value)
        };

        match tag {
            TAG_SET_INCOME => Ok(Intent::SetIncome(payload(tag)?)),
            TAG_RESET => Ok(Intent::Reset),
            TAG_RECOMPUTE => Ok(Intent::Recompute),
            other => match Jar::ALL.into_iter().find(|jar| weight_tag(*jar) == other) {
                Some(jar) => Ok(Intent::set_weight(jar, payload(other)?)),
                None => Err(CoreError::InvalidIntent(format!(
                    "unrecognized intent type `{}`",
                    raw.kind
                ))),
            },
        }
    }
}

impl From<Intent> for RawIntent {
    fn from(intent: Intent) -> Self {
        RawIntent::new(intent.tag(), intent.value())
    }
}

pub(crate) fn ensure_finite(tag: &str, value: f64) -> Result<f64, CoreError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CoreError::InvalidIntent(format!(
            "{tag} requires a finite number, got {value}"
        )))
    }
}
