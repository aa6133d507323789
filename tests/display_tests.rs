use six_jars::cli::views::{chart_lines, configuration_table, summary_table};
use six_jars::display::{chart_slices, format_amount, format_percentage, PALETTE};
use six_jars::jars_config::{Config, DisplaySettings, Theme};
use six_jars::jars_core::derive_summary;
use six_jars::jars_domain::{Configuration, Jar, Summary};

fn plain_config() -> Config {
    let mut config = Config::default();
    config.theme = Theme::Plain;
    config.ui_color_enabled = false;
    config
}

#[test]
fn amounts_use_two_fraction_digits_and_grouping() {
    let settings = DisplaySettings::default();

    assert_eq!(format_amount(10_000.0, &settings), "10,000");
    assert_eq!(format_amount(54.9973, &settings), "55");
    assert_eq!(format_amount(1_234.5, &settings), "1,234.5");
    assert_eq!(format_amount(0.0, &settings), "0");
    assert_eq!(format_amount(-1_234.567, &settings), "-1,234.57");
    assert_eq!(format_percentage(0.125, &settings), "12.5%");
}

#[test]
fn amounts_follow_custom_separators_and_digits() {
    let mut settings = DisplaySettings::default();
    settings.decimal_separator = ',';
    settings.grouping_separator = '.';
    assert_eq!(format_amount(1_234_567.891, &settings), "1.234.567,89");

    settings.max_fraction_digits = 4;
    assert_eq!(format_amount(99.9951, &settings), "99,9951");

    settings.max_fraction_digits = 0;
    assert_eq!(format_amount(99.5, &settings), "100");
}

#[test]
fn chart_slices_follow_display_order_and_cycle_colors() {
    let summary = derive_summary(&Configuration::with_income(1_000.0));
    let slices = chart_slices(&summary);

    let jars: Vec<Jar> = slices.iter().map(|slice| slice.jar).collect();
    assert_eq!(jars, Jar::DISPLAY_ORDER);
    assert_eq!(slices[0].share, 0.55);
    assert_eq!(slices[5].color, PALETTE[0]);
    assert_eq!(slices[0].bar(20).chars().count(), 11);
}

#[test]
fn empty_summary_renders_without_dividing_by_zero() {
    let config = plain_config();
    let slices = chart_slices(&Summary::ZERO);

    assert!(slices.iter().all(|slice| slice.share == 0.0));
    assert!(slices.iter().all(|slice| slice.bar(10).is_empty()));
    assert_eq!(
        chart_lines(&Summary::ZERO, &config),
        ["Nothing allocated yet."]
    );
}

#[test]
fn summary_table_lists_every_jar_and_the_total() {
    let config = plain_config();
    let summary = derive_summary(&Configuration::with_income(10_000.0));
    let table = summary_table(&summary, &config);

    for jar in Jar::ALL {
        assert!(table.contains(jar.label()), "missing {jar}");
    }
    assert!(table.contains("5,500"));
    assert!(table.lines().last().unwrap().starts_with("Total"));
    assert!(table.lines().last().unwrap().contains("10,000"));
}

#[test]
fn configuration_table_reports_unallocated_share() {
    let config = plain_config();
    let mut configuration = Configuration::with_income(2_000.0);
    configuration.set_weight(Jar::Play, 0.05);

    let table = configuration_table(&configuration, &config);
    let last = table.lines().last().unwrap();

    assert!(table.contains("Income"));
    assert!(table.contains("2,000"));
    assert!(last.starts_with("Unallocated"));
    assert!(last.ends_with("5%"));
}

#[test]
fn iconic_theme_prefixes_labels() {
    let mut config = plain_config();
    config.theme = Theme::Iconic;
    let table = configuration_table(&Configuration::DEFAULT, &config);

    assert!(table.contains("💰 Income"));
    assert!(table.contains("🛒 Necessities"));
}
