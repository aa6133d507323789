use six_jars::{
    init,
    jars_core::{FormInput, Intent, JarsSession, Validator},
    jars_domain::Jar,
};

#[test]
fn allocation_session_smoke() {
    init();

    let validator = Validator::new();
    let mut session = JarsSession::new();

    let form = FormInput::from_configuration(session.config())
        .with_percentage(Jar::Play, "5")
        .with_percentage(Jar::Give, "10");
    let form = FormInput {
        income: "10000".to_string(),
        ..form
    };
    let intents = validator.check_form(&form).expect("valid form");
    session.submit_all(&intents).expect("submit");

    assert_eq!(session.config().play, 0.05);
    assert_eq!(session.summary().necessities, 5_500.0);
    assert_eq!(session.summary().play, 500.0);
    assert_eq!(session.summary().give, 1_000.0);
    assert_eq!(session.summary().total, 10_000.0);

    let rejected = session.submit(&validator, Intent::set_weight(Jar::Play, 0.5));
    assert!(rejected.is_err());
    assert_eq!(session.config().play, 0.05);
}
