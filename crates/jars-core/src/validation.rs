//! Configuration validator.
//!
//! Gates user input before it reaches the engine. Percentages arrive in the
//! 0–100 form users type and leave as 0–1 weights; the sum rule is checked on
//! the weights. Out-of-range input is rejected and reported, never clamped.

use std::{collections::HashMap, fmt};

use jars_domain::{Configuration, Jar};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::Intent;

/// Upper bound accepted for income.
pub const MAX_INCOME: f64 = 10_000_000_000_000.0;

/// Slack allowed above 1.0 when summing weights, absorbing binary float noise.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Distance from a whole number of hundredths still read as a 2-decimal
/// percentage.
const HUNDREDTHS_EPSILON: f64 = 1e-6;

static TWO_DECIMALS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+(\.\d{1,2})?$").expect("decimal pattern compiles"));

/// The input field a validation issue refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Income,
    Jar(Jar),
}

impl Field {
    pub fn key(self) -> &'static str {
        match self {
            Field::Income => "income",
            Field::Jar(jar) => jar.key(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Income => "Income",
            Field::Jar(jar) => jar.label(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One field-level failure, worded for the end user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: Field,
    pub message: String,
}

impl FieldIssue {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every issue found in one validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Validation failed: {}", summarize(.issues))]
pub struct ValidationFailed {
    pub issues: Vec<FieldIssue>,
}

impl ValidationFailed {
    pub fn single(field: Field, message: impl Into<String>) -> Self {
        Self {
            issues: vec![FieldIssue::new(field, message)],
        }
    }

    pub fn issues_for(&self, field: Field) -> impl Iterator<Item = &FieldIssue> + '_ {
        self.issues.iter().filter(move |issue| issue.field == field)
    }

    pub fn has_issue_for(&self, field: Field) -> bool {
        self.issues_for(field).next().is_some()
    }
}

fn summarize(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(FieldIssue::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Raw form contents: what the user typed for income and each jar percentage.
#[derive(Debug, Clone, Default)]
pub struct FormInput {
    pub income: String,
    pub percentages: HashMap<Jar, String>,
}

impl FormInput {
    pub fn new(income: impl Into<String>) -> Self {
        Self {
            income: income.into(),
            percentages: HashMap::new(),
        }
    }

    pub fn with_percentage(mut self, jar: Jar, raw: impl Into<String>) -> Self {
        self.percentages.insert(jar, raw.into());
        self
    }

    /// Pre-fills every field from an existing configuration.
    pub fn from_configuration(config: &Configuration) -> Self {
        let percentages = config
            .weights()
            .map(|(jar, weight)| (jar, percentage_text(weight)))
            .collect();
        Self {
            income: format!("{}", config.income),
            percentages,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Validator;

impl Validator {
    pub fn new() -> Self {
        Self
    }

    /// Parses an income entry: a number in `[0, MAX_INCOME]` with at most two
    /// decimal places.
    pub fn parse_income(&self, raw: &str) -> Result<f64, ValidationFailed> {
        let field = Field::Income;
        let value = parse_number(field, raw)?;
        if value < 0.0 {
            return Err(ValidationFailed::single(
                field,
                "Income must be a positive number",
            ));
        }
        if value > MAX_INCOME {
            return Err(ValidationFailed::single(
                field,
                "Income must be less than 10,000,000,000,000",
            ));
        }
        check_decimals(field, value)?;
        Ok(value)
    }

    /// Parses a 0–100 percentage entry and returns it as a 0–1 weight.
    pub fn parse_percentage(&self, jar: Jar, raw: &str) -> Result<f64, ValidationFailed> {
        let field = Field::Jar(jar);
        let value = parse_number(field, raw)?;
        if !(0.0..=100.0).contains(&value) {
            return Err(ValidationFailed::single(
                field,
                format!("{} must be between 0 and 100", jar.label()),
            ));
        }
        check_decimals(field, value)?;
        Ok(value / 100.0)
    }

    /// Checks the ranges and the weight-sum rule of a whole configuration.
    pub fn check_configuration(&self, config: &Configuration) -> Result<(), ValidationFailed> {
        let mut issues = Vec::new();
        if let Err(err) = check_income(config.income) {
            issues.extend(err.issues);
        }
        for (jar, weight) in config.weights() {
            if let Err(err) = check_weight(jar, weight) {
                issues.extend(err.issues);
            }
        }
        if issues.is_empty() {
            if let Err(err) = check_weight_sum(config) {
                issues.extend(err.issues);
            }
        }
        if issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationFailed { issues })
        }
    }

    /// Checks the configuration `intent` would produce from `config`.
    pub fn check_intent(
        &self,
        config: &Configuration,
        intent: &Intent,
    ) -> Result<(), ValidationFailed> {
        match *intent {
            Intent::SetIncome(income) => check_income(income),
            Intent::SetWeight { jar, weight } => {
                check_weight(jar, weight)?;
                let mut prospective = *config;
                prospective.set_weight(jar, weight);
                check_weight_sum(&prospective)
            }
            Intent::Reset | Intent::Recompute => Ok(()),
        }
    }

    /// Validates a whole form at once and returns the intents that apply it,
    /// income first and then one weight per jar in engine order.
    pub fn check_form(&self, form: &FormInput) -> Result<Vec<Intent>, ValidationFailed> {
        let mut issues = Vec::new();
        let mut intents = Vec::with_capacity(Jar::ALL.len() + 1);
        let mut prospective = Configuration::DEFAULT;

        match self.parse_income(&form.income) {
            Ok(income) => {
                prospective.income = income;
                intents.push(Intent::SetIncome(income));
            }
            Err(err) => issues.extend(err.issues),
        }

        for jar in Jar::ALL {
            let Some(raw) = form.percentages.get(&jar) else {
                issues.push(FieldIssue::new(
                    Field::Jar(jar),
                    format!("{} is required", jar.label()),
                ));
                continue;
            };
            match self.parse_percentage(jar, raw) {
                Ok(weight) => {
                    prospective.set_weight(jar, weight);
                    intents.push(Intent::set_weight(jar, weight));
                }
                Err(err) => issues.extend(err.issues),
            }
        }

        if issues.is_empty() {
            check_weight_sum(&prospective)?;
            Ok(intents)
        } else {
            Err(ValidationFailed { issues })
        }
    }
}

/// Renders a weight as the percentage a user would type (`0.55` -> `"55"`).
pub fn percentage_text(weight: f64) -> String {
    let percent = (weight * 10_000.0).round() / 100.0;
    format!("{}", percent)
}

fn parse_number(field: Field, raw: &str) -> Result<f64, ValidationFailed> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(positive_zero(value)),
        _ => Err(ValidationFailed::single(
            field,
            format!("{} must be a number", field.label()),
        )),
    }
}

fn check_decimals(field: Field, value: f64) -> Result<(), ValidationFailed> {
    // Display renders the shortest round-tripping form, never an exponent.
    if TWO_DECIMALS.is_match(&positive_zero(value).to_string()) {
        Ok(())
    } else {
        Err(ValidationFailed::single(
            field,
            format!(
                "{} must be a number with up to 2 decimal places",
                field.label()
            ),
        ))
    }
}

fn check_income_range(income: f64) -> Result<(), ValidationFailed> {
    let field = Field::Income;
    if !income.is_finite() {
        return Err(ValidationFailed::single(field, "Income must be a number"));
    }
    if income < 0.0 {
        return Err(ValidationFailed::single(
            field,
            "Income must be a positive number",
        ));
    }
    if income > MAX_INCOME {
        return Err(ValidationFailed::single(
            field,
            "Income must be less than 10,000,000,000,000",
        ));
    }
    Ok(())
}

/// Range and decimal checks for an income that is already a number.
fn check_income(income: f64) -> Result<(), ValidationFailed> {
    check_income_range(income)?;
    check_decimals(Field::Income, income)
}

/// Range check for a 0–1 weight, plus the two-decimal rule on its percentage.
fn check_weight(jar: Jar, weight: f64) -> Result<(), ValidationFailed> {
    let field = Field::Jar(jar);
    if !weight.is_finite() || !(0.0..=1.0).contains(&weight) {
        return Err(ValidationFailed::single(
            field,
            format!("{} must be between 0 and 100", jar.label()),
        ));
    }
    // Hundredths of a percent; `0.55 * 10_000.0` lands a hair off 5500.
    let hundredths = weight * 10_000.0;
    if (hundredths - hundredths.round()).abs() > HUNDREDTHS_EPSILON {
        return Err(ValidationFailed::single(
            field,
            format!(
                "{} must be a number with up to 2 decimal places",
                field.label()
            ),
        ));
    }
    Ok(())
}

/// `-0` renders as `"-0"`; treat it as plain zero.
fn positive_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

fn check_weight_sum(config: &Configuration) -> Result<(), ValidationFailed> {
    if config.weight_sum() <= 1.0 + WEIGHT_SUM_TOLERANCE {
        return Ok(());
    }
    let issues = Jar::ALL
        .into_iter()
        .map(|jar| {
            FieldIssue::new(
                Field::Jar(jar),
                "The sum of all jar percentages must not exceed 100%",
            )
        })
        .collect();
    Err(ValidationFailed { issues })
}
