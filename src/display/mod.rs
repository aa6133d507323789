//! Presentation helpers: number formatting, themed labels and chart data.
//!
//! Nothing here feeds back into the engine; every function tolerates empty
//! or zeroed input.

use colored::Color;
use jars_config::{DisplaySettings, Theme};
use jars_core::share_of_total;
use jars_domain::{Jar, Summary};

/// Colors assigned to chart slices, cycled in display order.
pub const PALETTE: [Color; 5] = [
    Color::Cyan,
    Color::Green,
    Color::Yellow,
    Color::Magenta,
    Color::Blue,
];

pub const INCOME_ICON: &str = "💰";

/// Formats an amount with at most `max_fraction_digits` decimals (half away
/// from zero), trailing zeros trimmed and the integer part grouped.
pub fn format_amount(value: f64, settings: &DisplaySettings) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let digits = settings.max_fraction_digits as usize;
    let scale = 10f64.powi(digits as i32);
    let rounded = (value * scale).round() / scale;
    let mut body = format!("{:.*}", digits, rounded.abs());
    if body.contains('.') {
        let trimmed = body.trim_end_matches('0').trim_end_matches('.').len();
        body.truncate(trimmed);
    }

    let (int_part, fraction) = match body.split_once('.') {
        Some((int_part, fraction)) => (int_part.to_string(), Some(fraction.to_string())),
        None => (body.clone(), None),
    };
    let mut out = String::new();
    if rounded < 0.0 {
        out.push('-');
    }
    out.push_str(&group_digits(&int_part, settings.grouping_separator));
    if let Some(fraction) = fraction {
        out.push(settings.decimal_separator);
        out.push_str(&fraction);
    }
    out
}

/// Formats a 0–1 weight as a percentage, e.g. `0.125` -> `12.5%`.
pub fn format_percentage(weight: f64, settings: &DisplaySettings) -> String {
    format!("{}%", format_amount(weight * 100.0, settings))
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (count, ch) in digits.chars().enumerate() {
        if count != 0 && (digits.len() - count) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

pub fn jar_label(jar: Jar, theme: Theme) -> String {
    match theme {
        Theme::Iconic => format!("{} {}", jar.icon(), jar.label()),
        Theme::Plain => jar.label().to_string(),
    }
}

pub fn income_label(theme: Theme) -> String {
    match theme {
        Theme::Iconic => format!("{} Income", INCOME_ICON),
        Theme::Plain => "Income".to_string(),
    }
}

/// One jar's slice of the allocation chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSlice {
    pub jar: Jar,
    pub value: f64,
    /// Fraction of the summary total, zero when the total is zero.
    pub share: f64,
    pub color: Color,
}

impl ChartSlice {
    /// Horizontal bar proportional to the share, `width` cells at 100%.
    pub fn bar(&self, width: usize) -> String {
        let share = if self.share.is_finite() {
            self.share.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let cells = (share * width as f64).round() as usize;
        "█".repeat(cells)
    }
}

/// Chart data for a summary, one slice per jar in display order.
pub fn chart_slices(summary: &Summary) -> Vec<ChartSlice> {
    Jar::DISPLAY_ORDER
        .into_iter()
        .enumerate()
        .map(|(index, jar)| ChartSlice {
            jar,
            value: summary.amount(jar),
            share: share_of_total(summary, jar),
            color: PALETTE[index % PALETTE.len()],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_digits_in_threes() {
        assert_eq!(group_digits("1", ','), "1");
        assert_eq!(group_digits("123", ','), "123");
        assert_eq!(group_digits("1234", ','), "1,234");
        assert_eq!(group_digits("1234567", '.'), "1.234.567");
    }

    #[test]
    fn bar_is_clamped() {
        let slice = ChartSlice {
            jar: Jar::Play,
            value: 10.0,
            share: 1.5,
            color: Color::Cyan,
        };
        assert_eq!(slice.bar(4).chars().count(), 4);
    }
}
