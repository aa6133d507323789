use six_jars::cli::{CliMode, CommandError, LoopControl, ShellContext};
use six_jars::jars_config::ConfigManager;
use six_jars::jars_core::{CoreError, Field, JarsSession};
use six_jars::jars_domain::{Configuration, Jar, JarsState};
use tempfile::tempdir;

fn script_context(dir: &tempfile::TempDir) -> ShellContext {
    let manager = ConfigManager::new(dir.path().join("config.json"));
    ShellContext::with_manager(CliMode::Script, manager).expect("context")
}

#[test]
fn calc_refuses_an_invalid_configuration() {
    let dir = tempdir().unwrap();
    let mut context = script_context(&dir);
    let mut config = Configuration::with_income(1000.0);
    config.set_weight(Jar::Play, 5.0);
    context.session = JarsSession::with_state(JarsState::new(config));

    let err = context.dispatch("calc", &[]).unwrap_err();

    assert!(matches!(
        err,
        CommandError::Core(CoreError::Validation(ref failed))
            if failed.has_issue_for(Field::Jar(Jar::Play))
    ));
    assert!(context.session.summary().is_zero());
}

#[test]
fn intent_command_runs_the_validator_gate() {
    let dir = tempdir().unwrap();
    let mut context = script_context(&dir);
    context.dispatch("income", &["1000"]).expect("income");

    let err = context
        .dispatch("intent", &[r#"{"type":"SET_PLAY","value":5}"#])
        .unwrap_err();
    assert!(matches!(err, CommandError::Core(CoreError::Validation(_))));
    assert_eq!(context.session.config().play, 0.1);
    assert_eq!(context.session.summary().total, 1000.0);

    let err = context
        .dispatch("intent", &[r#"{"type":"SET_INCOME","value":10.555}"#])
        .unwrap_err();
    assert!(matches!(err, CommandError::Core(CoreError::Validation(_))));
    assert_eq!(context.session.config().income, 1000.0);
}

#[test]
fn intent_command_accepts_older_tag_spellings() {
    let dir = tempdir().unwrap();
    let mut context = script_context(&dir);

    let control = context
        .dispatch("intent", &[r#"{"type":"SET_LONGTERMSAVINGS","value":0.05}"#])
        .expect("alias tag");

    assert_eq!(control, LoopControl::Continue);
    assert_eq!(context.session.config().long_term_savings, 0.05);
}

#[test]
fn exit_stops_the_loop() {
    let dir = tempdir().unwrap();
    let mut context = script_context(&dir);

    assert_eq!(context.dispatch("exit", &[]).expect("exit"), LoopControl::Exit);
    assert!(!context.running);
}
