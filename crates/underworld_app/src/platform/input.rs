//! Line-oriented user-input surface.
//!
//! Each line is `<command> [argument]`; the command selects a handler from
//! [`COMMANDS`], which turns the argument into a core message.

use chrono::Local;
use thiserror::Error;
use underworld_core::{ContactKind, FormField, FormFlag, Key, KeyPress, Msg};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Msg(Msg),
    /// Explicit `quit`: stop right away.
    Quit,
    /// stdin closed: finish outstanding sends and timers, then stop.
    EndOfInput,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown command {0:?}")]
    UnknownCommand(String),
    #[error("{command}: {reason}")]
    BadArgument {
        command: &'static str,
        reason: String,
    },
}

type Handler = fn(&str) -> Result<Msg, String>;

/// Dispatch table from command word to handler, fixed at startup.
const COMMANDS: &[(&str, Handler)] = &[
    ("nav", |arg| Ok(Msg::NavClicked { page: arg.to_string() })),
    ("quick", |arg| {
        Ok(Msg::QuickActionClicked {
            page: arg.to_string(),
        })
    }),
    ("key", key),
    ("search", |arg| Ok(Msg::SearchInputChanged(arg.to_string()))),
    ("pick", |arg| {
        let index: usize = arg
            .parse()
            .map_err(|_| format!("expected a result number, got {arg:?}"))?;
        let index = index.checked_sub(1).ok_or("results are numbered from 1")?;
        Ok(Msg::SearchResultSelected { index })
    }),
    ("field", field),
    ("check", check),
    ("kind", |arg| match arg {
        "hire" => Ok(Msg::ContactKindSelected(ContactKind::Hire)),
        "consult" => Ok(Msg::ContactKindSelected(ContactKind::Consult)),
        other => Err(format!("expected hire or consult, got {other:?}")),
    }),
    ("submit", |_| {
        Ok(Msg::FormSubmitted {
            timestamp: Local::now().format("%d/%m/%Y, %H:%M:%S").to_string(),
        })
    }),
    ("clear", |_| Ok(Msg::FormCleared)),
    ("theme", |_| Ok(Msg::ThemeToggled)),
    ("help", |_| Ok(Msg::HelpOpened)),
    ("help-close", |_| Ok(Msg::HelpCloseClicked)),
    ("help-backdrop", |_| Ok(Msg::HelpBackdropClicked)),
    ("dismiss", |_| Ok(Msg::NotificationCloseClicked)),
    ("read", |arg| {
        Ok(Msg::StoryReadClicked {
            title: arg.to_string(),
        })
    }),
    ("story", |_| Ok(Msg::StoryToggled)),
];

pub fn parse_line(line: &str) -> Result<Option<Input>, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, arg) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    if word == "quit" {
        return Ok(Some(Input::Quit));
    }

    let &(command, handler) = COMMANDS
        .iter()
        .find(|(name, _)| *name == word)
        .ok_or_else(|| InputError::UnknownCommand(word.to_string()))?;
    handler(arg)
        .map(|msg| Some(Input::Msg(msg)))
        .map_err(|reason| InputError::BadArgument { command, reason })
}

/// Names of all commands, for the usage hint.
pub fn command_names() -> impl Iterator<Item = &'static str> {
    COMMANDS.iter().map(|(name, _)| *name).chain(["quit"])
}

/// `key ctrl+ArrowLeft`, `key ctrl+2`, `key a`.
fn key(arg: &str) -> Result<Msg, String> {
    if arg.is_empty() {
        return Err("expected a key name".to_string());
    }
    let (ctrl, name) = match arg.strip_prefix("ctrl+") {
        Some(name) => (true, name),
        None => (false, arg),
    };
    Ok(Msg::KeyPressed(KeyPress::new(Key::from_name(name), ctrl)))
}

/// `field <name> <value...>`; an absent value clears the field.
fn field(arg: &str) -> Result<Msg, String> {
    let (name, value) = arg.split_once(' ').unwrap_or((arg, ""));
    let field = FormField::parse(name).ok_or_else(|| format!("unknown field {name:?}"))?;
    Ok(Msg::FormFieldChanged {
        field,
        value: value.to_string(),
    })
}

/// `check <confidential|urgent> on|off`.
fn check(arg: &str) -> Result<Msg, String> {
    let (name, state) = arg.split_once(' ').unwrap_or((arg, ""));
    let flag = FormFlag::parse(name).ok_or_else(|| format!("unknown checkbox {name:?}"))?;
    let checked = match state.trim() {
        "on" => true,
        "off" => false,
        other => return Err(format!("expected on or off, got {other:?}")),
    };
    Ok(Msg::FormFlagChanged { flag, checked })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(line: &str) -> Msg {
        match parse_line(line) {
            Ok(Some(Input::Msg(msg))) => msg,
            other => panic!("{line:?} parsed to {other:?}"),
        }
    }

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(parse_line("   "), Ok(None));
    }

    #[test]
    fn navigation_commands_carry_the_raw_id() {
        assert_eq!(
            parsed("nav stories"),
            Msg::NavClicked {
                page: "stories".to_string()
            }
        );
        assert_eq!(
            parsed("quick"),
            Msg::QuickActionClicked {
                page: String::new()
            }
        );
    }

    #[test]
    fn keys_parse_ctrl_prefix() {
        assert_eq!(
            parsed("key ctrl+ArrowLeft"),
            Msg::KeyPressed(KeyPress::ctrl(Key::ArrowLeft))
        );
        assert_eq!(
            parsed("key 2"),
            Msg::KeyPressed(KeyPress::new(Key::Digit(2), false))
        );
    }

    #[test]
    fn field_values_keep_inner_spaces() {
        assert_eq!(
            parsed("field message Hire me please"),
            Msg::FormFieldChanged {
                field: FormField::Message,
                value: "Hire me please".to_string()
            }
        );
    }

    #[test]
    fn pick_is_one_based() {
        assert_eq!(parsed("pick 1"), Msg::SearchResultSelected { index: 0 });
        assert!(matches!(
            parse_line("pick 0"),
            Err(InputError::BadArgument { command: "pick", .. })
        ));
    }

    #[test]
    fn unknown_words_are_reported() {
        assert_eq!(
            parse_line("fly home"),
            Err(InputError::UnknownCommand("fly".to_string()))
        );
        assert_eq!(parse_line("quit"), Ok(Some(Input::Quit)));
    }

    #[test]
    fn submit_stamps_local_time() {
        let Msg::FormSubmitted { timestamp } = parsed("submit") else {
            panic!("expected submit");
        };
        assert!(!timestamp.is_empty());
    }
}
