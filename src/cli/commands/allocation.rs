use dialoguer::Input;
use jars_core::{unallocated_amount, CoreError, FormInput, Intent, RawIntent, ValidationFailed};
use jars_domain::Jar;

use crate::cli::errors::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::{closest_match, CommandEntry};
use crate::cli::shell_context::ShellContext;
use crate::cli::views;
use crate::display::{format_amount, format_percentage};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "income",
            "Set the income to split across the jars",
            "income <amount>",
            cmd_income,
        ),
        CommandEntry::new(
            "set",
            "Set one jar's percentage of the income",
            "set <jar> <percent>",
            cmd_set,
        ),
        CommandEntry::new(
            "reset",
            "Restore the default percentages and clear the summary",
            "reset",
            cmd_reset,
        ),
        CommandEntry::new(
            "calc",
            "Recompute the summary from the current configuration",
            "calc",
            cmd_calc,
        ),
        CommandEntry::new(
            "summary",
            "Show the amount held by each jar",
            "summary [--json]",
            cmd_summary,
        ),
        CommandEntry::new(
            "jars",
            "Show the income and every jar percentage",
            "jars [--json]",
            cmd_jars,
        ),
        CommandEntry::new(
            "form",
            "Fill in income and all percentages, then apply them together",
            "form",
            cmd_form,
        ),
        CommandEntry::new(
            "intent",
            "Dispatch a raw tagged intent",
            "intent '{\"type\":\"SET_PLAY\",\"value\":0.1}'",
            cmd_intent,
        ),
    ]
}

fn wants_json(args: &[&str]) -> Result<bool, CommandError> {
    match args {
        [] => Ok(false),
        ["--json"] => Ok(true),
        _ => Err(CommandError::InvalidArguments(format!(
            "unexpected argument `{}`",
            args.join(" ")
        ))),
    }
}

fn parse_jar(raw: &str) -> Result<Jar, CommandError> {
    raw.parse::<Jar>().map_err(|err| {
        let hint = closest_match(raw, Jar::keys())
            .map(|key| format!(" Did you mean `{key}`?"))
            .unwrap_or_else(|| {
                format!(" Jars: {}.", Jar::keys().collect::<Vec<_>>().join(", "))
            });
        CommandError::InvalidArguments(format!("{err}.{hint}"))
    })
}

fn validation(err: ValidationFailed) -> CommandError {
    CommandError::Core(CoreError::Validation(err))
}

/// Prints the summary when the last change already recomputed it.
fn show_if_recomputed(context: &ShellContext) {
    if context.config.auto_recompute {
        print_summary(context);
    } else {
        output::info("Run `calc` to update the summary.");
    }
}

fn print_summary(context: &ShellContext) {
    let summary = context.session.summary();
    output::info(views::summary_table(summary, &context.config));
    let unallocated = unallocated_amount(context.session.state());
    if !summary.is_zero() && unallocated > 0.0 {
        output::info(format!(
            "Unallocated: {}",
            format_amount(unallocated, &context.config.display)
        ));
    }
}

fn cmd_income(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [raw] = args else {
        return Err(CommandError::usage("income <amount>"));
    };
    let income = context.validator.parse_income(raw).map_err(validation)?;
    context.apply_intent(Intent::SetIncome(income))?;
    output::success(format!(
        "Income set to {}.",
        format_amount(income, &context.config.display)
    ));
    show_if_recomputed(context);
    Ok(())
}

fn cmd_set(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [jar, raw] = args else {
        return Err(CommandError::usage("set <jar> <percent>"));
    };
    let jar = parse_jar(jar)?;
    let weight = context
        .validator
        .parse_percentage(jar, raw)
        .map_err(validation)?;
    context.apply_intent(Intent::set_weight(jar, weight))?;
    output::success(format!(
        "{} set to {}.",
        jar.label(),
        format_percentage(weight, &context.config.display)
    ));
    show_if_recomputed(context);
    Ok(())
}

fn cmd_reset(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if !args.is_empty() {
        return Err(CommandError::usage("reset"));
    }
    if !context.confirm("Restore the default percentages?", false)? {
        output::info("Operation cancelled.");
        return Ok(());
    }
    context.session.reset()?;
    output::success("Percentages restored to the defaults; the summary was cleared.");
    Ok(())
}

fn cmd_calc(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if !args.is_empty() {
        return Err(CommandError::usage("calc"));
    }
    recompute_checked(context)?;
    print_summary(context);
    Ok(())
}

/// Recomputes only when the current configuration passes validation.
fn recompute_checked(context: &mut ShellContext) -> CommandResult {
    context
        .validator
        .check_configuration(context.session.config())
        .map_err(validation)?;
    let total = context.session.recompute()?.total;
    tracing::info!(total, "summary recomputed");
    Ok(())
}

fn cmd_summary(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if wants_json(args)? {
        output::info(serde_json::to_string_pretty(context.session.summary())?);
        return Ok(());
    }
    print_summary(context);
    output::section("Chart");
    for line in views::chart_lines(context.session.summary(), &context.config) {
        output::info(line);
    }
    Ok(())
}

fn cmd_jars(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if wants_json(args)? {
        output::info(serde_json::to_string_pretty(context.session.config())?);
        return Ok(());
    }
    output::info(views::configuration_table(
        context.session.config(),
        &context.config,
    ));
    Ok(())
}

fn cmd_form(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if !args.is_empty() {
        return Err(CommandError::usage("form"));
    }
    if !context.is_interactive() {
        return Err(CommandError::InteractiveOnly);
    }

    let validator = context.validator;
    let current = FormInput::from_configuration(context.session.config());

    let income = Input::<String>::with_theme(&context.theme)
        .with_prompt("Income")
        .default(current.income.clone())
        .validate_with(|input: &String| validator.parse_income(input).map(|_| ()))
        .interact_text()?;
    let mut form = FormInput::new(income);

    for jar in Jar::DISPLAY_ORDER {
        let initial = current.percentages.get(&jar).cloned().unwrap_or_default();
        let raw = Input::<String>::with_theme(&context.theme)
            .with_prompt(format!(
                "{} % (suggested {})",
                jar.label(),
                jar.suggested_range()
            ))
            .default(initial)
            .validate_with(|input: &String| {
                validator.parse_percentage(jar, input).map(|_| ())
            })
            .interact_text()?;
        form = form.with_percentage(jar, raw);
    }

    let intents = validator.check_form(&form).map_err(validation)?;
    context.session.submit_all(&intents)?;
    output::success("Configuration applied.");
    print_summary(context);
    Ok(())
}

fn cmd_intent(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        return Err(CommandError::usage("intent '<json>'"));
    }
    let raw: RawIntent = serde_json::from_str(&args.join(" "))?;
    let intent = Intent::try_from(raw)?;
    match intent {
        Intent::SetIncome(_) | Intent::SetWeight { .. } => context.apply_intent(intent)?,
        Intent::Reset => {
            context.session.reset()?;
        }
        Intent::Recompute => recompute_checked(context)?,
    }
    output::success(format!("Applied {intent}."));
    Ok(())
}
