use colored::Colorize;
use jars_config::Config;
use once_cell::sync::OnceCell;
use std::fmt;
use std::sync::RwLock;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Section,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutputPreferences {
    /// Text labels only: no colour, no icons in message prefixes.
    pub plain_output: bool,
    pub high_contrast: bool,
}

impl OutputPreferences {
    pub fn from_config(config: &Config) -> Self {
        Self {
            plain_output: config.accessibility.plain_output,
            high_contrast: config.accessibility.high_contrast,
        }
    }
}

static PREFERENCES: OnceCell<RwLock<OutputPreferences>> = OnceCell::new();

/// Applies display preferences from `config` to every later message.
pub fn configure(config: &Config) {
    set_preferences(OutputPreferences::from_config(config));
    if config.use_color() {
        colored::control::unset_override();
    } else {
        colored::control::set_override(false);
    }
}

pub fn set_preferences(prefs: OutputPreferences) {
    let lock = PREFERENCES.get_or_init(|| RwLock::new(OutputPreferences::default()));
    if let Ok(mut guard) = lock.write() {
        *guard = prefs;
    }
}

pub fn current_preferences() -> OutputPreferences {
    PREFERENCES
        .get_or_init(|| RwLock::new(OutputPreferences::default()))
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

fn label(kind: MessageKind, plain: bool) -> &'static str {
    match (kind, plain) {
        (MessageKind::Info, _) => "",
        (MessageKind::Success, false) => "✓ ",
        (MessageKind::Success, true) => "OK: ",
        (MessageKind::Warning, false) => "! ",
        (MessageKind::Warning, true) => "WARNING: ",
        (MessageKind::Error, false) => "✗ ",
        (MessageKind::Error, true) => "ERROR: ",
        (MessageKind::Section, _) => "",
    }
}

/// Renders a message as it would be printed, without the trailing newline.
pub fn render(kind: MessageKind, message: impl fmt::Display) -> String {
    let prefs = current_preferences();
    let text = match kind {
        MessageKind::Section => format!("=== {} ===", message.to_string().trim()),
        _ => format!("{}{}", label(kind, prefs.plain_output), message),
    };

    if prefs.plain_output {
        return text;
    }

    if prefs.high_contrast {
        return match kind {
            MessageKind::Info => text,
            _ => text.bold().to_string(),
        };
    }

    match kind {
        MessageKind::Info => text,
        MessageKind::Success => text.bright_green().to_string(),
        MessageKind::Warning => text.bright_yellow().to_string(),
        MessageKind::Error => text.bright_red().to_string(),
        MessageKind::Section => text.bold().to_string(),
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let rendered = render(kind, message);
    match kind {
        MessageKind::Section => println!("\n{}", rendered),
        MessageKind::Error => eprintln!("{}", rendered),
        _ => println!("{}", rendered),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}
