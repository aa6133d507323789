use jars_core::{Field, FormInput, Intent, Validator, MAX_INCOME};
use jars_domain::{Configuration, Jar};

fn full_form(income: &str, percentages: [&str; 6]) -> FormInput {
    Jar::ALL
        .into_iter()
        .zip(percentages)
        .fold(FormInput::new(income), |form, (jar, raw)| {
            form.with_percentage(jar, raw)
        })
}

#[test]
fn income_accepts_two_decimal_places() {
    let validator = Validator::new();
    assert_eq!(validator.parse_income("1234.56").unwrap(), 1234.56);
    assert_eq!(validator.parse_income(" 0 ").unwrap(), 0.0);
    assert_eq!(validator.parse_income("10000000000000").unwrap(), MAX_INCOME);
}

#[test]
fn income_rejections_carry_field_messages() {
    let validator = Validator::new();

    let err = validator.parse_income("-1").unwrap_err();
    assert_eq!(err.issues[0].field, Field::Income);
    assert_eq!(err.issues[0].message, "Income must be a positive number");

    let err = validator.parse_income("10000000000000.01").unwrap_err();
    assert_eq!(
        err.issues[0].message,
        "Income must be less than 10,000,000,000,000"
    );

    let err = validator.parse_income("12.345").unwrap_err();
    assert_eq!(
        err.issues[0].message,
        "Income must be a number with up to 2 decimal places"
    );

    let err = validator.parse_income("lots").unwrap_err();
    assert_eq!(err.issues[0].message, "Income must be a number");
}

#[test]
fn percentages_become_fractions() {
    let validator = Validator::new();
    assert_eq!(validator.parse_percentage(Jar::Necessities, "55").unwrap(), 0.55);
    assert_eq!(validator.parse_percentage(Jar::Give, "12.5").unwrap(), 0.125);
    assert_eq!(validator.parse_percentage(Jar::Play, "0").unwrap(), 0.0);
}

#[test]
fn percentage_out_of_range_is_rejected_not_clamped() {
    let validator = Validator::new();

    let err = validator.parse_percentage(Jar::Play, "101").unwrap_err();
    assert_eq!(err.issues[0].field, Field::Jar(Jar::Play));
    assert_eq!(err.issues[0].message, "Play must be between 0 and 100");

    let err = validator
        .parse_percentage(Jar::LongTermSavings, "10.125")
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Validation failed: longTermSavings: Long Term Savings must be a number with up to 2 decimal places"
    );
}

#[test]
fn intent_pushing_sum_over_one_is_rejected_for_every_jar() {
    let validator = Validator::new();
    let config = Configuration::default();

    let err = validator
        .check_intent(&config, &Intent::set_weight(Jar::Play, 0.2))
        .unwrap_err();

    assert_eq!(err.issues.len(), 6);
    for jar in Jar::ALL {
        assert!(err.has_issue_for(Field::Jar(jar)));
    }
}

#[test]
fn intent_lowering_a_weight_passes() {
    let validator = Validator::new();
    let config = Configuration::default();

    assert!(validator
        .check_intent(&config, &Intent::set_weight(Jar::Necessities, 0.4))
        .is_ok());
    assert!(validator.check_intent(&config, &Intent::Reset).is_ok());
    assert!(validator
        .check_intent(&config, &Intent::SetIncome(-5.0))
        .is_err());
}

#[test]
fn configuration_check_reports_each_bad_field() {
    let validator = Validator::new();
    let mut config = Configuration::with_income(-10.0);
    config.set_weight(Jar::Education, 1.2);

    let err = validator.check_configuration(&config).unwrap_err();

    assert!(err.has_issue_for(Field::Income));
    assert!(err.has_issue_for(Field::Jar(Jar::Education)));
    assert!(!err.has_issue_for(Field::Jar(Jar::Give)));
    assert!(validator
        .check_configuration(&Configuration::with_income(10.0))
        .is_ok());
}

#[test]
fn form_yields_intents_in_engine_order() {
    let validator = Validator::new();
    let form = full_form("4000", ["50", "10", "15", "10", "10", "5"]);

    let intents = validator.check_form(&form).expect("valid form");

    assert_eq!(intents[0], Intent::SetIncome(4000.0));
    assert_eq!(intents[3], Intent::set_weight(Jar::LongTermSavings, 0.15));
    assert_eq!(intents.len(), 7);
}

#[test]
fn form_collects_every_issue() {
    let validator = Validator::new();
    let form = FormInput::new("abc")
        .with_percentage(Jar::Necessities, "55")
        .with_percentage(Jar::Education, "200");

    let err = validator.check_form(&form).unwrap_err();

    assert!(err.has_issue_for(Field::Income));
    assert!(err.has_issue_for(Field::Jar(Jar::Education)));
    assert!(!err.has_issue_for(Field::Jar(Jar::Necessities)));
    let missing: Vec<_> = err.issues_for(Field::Jar(Jar::Give)).collect();
    assert_eq!(missing[0].message, "Give is required");
}

#[test]
fn form_over_one_hundred_percent_is_rejected() {
    let validator = Validator::new();
    let form = full_form("1000", ["60", "10", "10", "10", "10", "5"]);

    let err = validator.check_form(&form).unwrap_err();

    assert_eq!(
        err.issues[0].message,
        "The sum of all jar percentages must not exceed 100%"
    );
}

#[test]
fn prefilled_form_round_trips_defaults() {
    let validator = Validator::new();
    let form = FormInput::from_configuration(&Configuration::with_income(250.0));

    assert_eq!(form.percentages[&Jar::Necessities], "55");
    let intents = validator.check_form(&form).expect("defaults are valid");
    assert_eq!(intents[0], Intent::SetIncome(250.0));
}

#[test]
fn intent_checks_apply_the_two_decimal_rule() {
    let validator = Validator::new();
    let config = Configuration::with_income(100.0);

    let err = validator
        .check_intent(&config, &Intent::SetIncome(10.555))
        .unwrap_err();
    assert_eq!(
        err.issues[0].message,
        "Income must be a number with up to 2 decimal places"
    );

    let err = validator
        .check_intent(&config, &Intent::set_weight(Jar::Play, 0.012345))
        .unwrap_err();
    assert_eq!(err.issues[0].field, Field::Jar(Jar::Play));
    assert_eq!(
        err.issues[0].message,
        "Play must be a number with up to 2 decimal places"
    );

    assert!(validator
        .check_intent(&config, &Intent::set_weight(Jar::Play, 0.0725))
        .is_ok());
    assert!(validator
        .check_intent(&config, &Intent::set_weight(Jar::Necessities, 0.55))
        .is_ok());
}

#[test]
fn configuration_check_applies_the_two_decimal_rule() {
    let validator = Validator::new();
    let mut config = Configuration::with_income(99.995);
    config.set_weight(Jar::Give, 0.00001);

    let err = validator.check_configuration(&config).unwrap_err();

    assert!(err.has_issue_for(Field::Income));
    assert!(err.has_issue_for(Field::Jar(Jar::Give)));
    assert!(!err.has_issue_for(Field::Jar(Jar::Play)));
}

#[test]
fn negative_zero_reads_as_zero() {
    let validator = Validator::new();

    let income = validator.parse_income("-0").unwrap();
    assert_eq!(income, 0.0);
    assert!(income.is_sign_positive());
    assert_eq!(validator.parse_percentage(Jar::Play, "-0.00").unwrap(), 0.0);
    assert!(validator
        .check_intent(&Configuration::DEFAULT, &Intent::SetIncome(-0.0))
        .is_ok());
}
