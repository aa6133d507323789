//! Text renderings of the configuration and summary.

use colored::Colorize;
use jars_config::Config;
use jars_domain::{Configuration, Jar, Summary};

use crate::cli::table::{Alignment, Table, TableColumn};
use crate::display::{chart_slices, format_amount, format_percentage, income_label, jar_label};

const CHART_WIDTH: usize = 24;

/// Amount and share per jar in display order, with the total as footer.
pub fn summary_table(summary: &Summary, config: &Config) -> String {
    let mut table = Table::new(vec![
        TableColumn::new("Jar", Alignment::Left),
        TableColumn::new("Amount", Alignment::Right),
        TableColumn::new("Share", Alignment::Right),
    ]);
    for slice in chart_slices(summary) {
        table.push_row(vec![
            jar_label(slice.jar, config.theme),
            format_amount(slice.value, &config.display),
            format_percentage(slice.share, &config.display),
        ]);
    }
    table.push_footer(vec![
        "Total".to_string(),
        format_amount(summary.total, &config.display),
        String::new(),
    ]);
    table.render()
}

/// One bar per jar, sized by its share of the total.
pub fn chart_lines(summary: &Summary, config: &Config) -> Vec<String> {
    if summary.total == 0.0 {
        return vec!["Nothing allocated yet.".to_string()];
    }
    let slices = chart_slices(summary);
    let label_width = slices
        .iter()
        .map(|slice| slice.jar.label().len())
        .max()
        .unwrap_or(0);
    slices
        .iter()
        .map(|slice| {
            let bar = slice.bar(CHART_WIDTH);
            let bar = if config.use_color() {
                bar.color(slice.color).to_string()
            } else {
                bar
            };
            format!(
                "{:<width$} {} {}",
                slice.jar.label(),
                bar,
                format_percentage(slice.share, &config.display),
                width = label_width
            )
        })
        .collect()
}

/// Income, each jar's percentage with its suggested range, and how much of
/// the income is still unassigned.
pub fn configuration_table(configuration: &Configuration, config: &Config) -> String {
    let mut table = Table::new(vec![
        TableColumn::new("Field", Alignment::Left),
        TableColumn::new("Value", Alignment::Right),
        TableColumn::new("Suggested", Alignment::Right),
    ]);
    table.push_row(vec![
        income_label(config.theme),
        format_amount(configuration.income, &config.display),
        String::new(),
    ]);
    for jar in Jar::DISPLAY_ORDER {
        table.push_row(vec![
            jar_label(jar, config.theme),
            format_percentage(configuration.weight(jar), &config.display),
            format!("{}%", jar.suggested_range()),
        ]);
    }
    table.push_footer(vec![
        "Allocated".to_string(),
        format_percentage(configuration.weight_sum(), &config.display),
        String::new(),
    ]);
    table.push_footer(vec![
        "Unallocated".to_string(),
        format_percentage(configuration.unallocated(), &config.display),
        String::new(),
    ]);
    table.render()
}
