//! Line parser for the terminal front end.

use thiserror::Error;

use crate::application::DecisionCommand;
use crate::domain::foundation::{Side, ValidationError, Weight};

pub const HELP: &str = "\
Commands:
  topic <text>                set the question you are deciding
  pro [weight] <text>         add a pro (weight 1-10, default 3)
  con [weight] <text>         add a con
  edit pro|con <n> <text>     change the text of item n
  weight pro|con <n> <w>      change the weight of item n
  rm pro|con <n>              remove item n
  done pro|con                mark a list as finished
  undo pro|con                reopen a list
  recommend                   ask the duck
  share                       make a shareable link
  open <link>                 load a shared link
  show                        redraw everything
  reset                       clear the topic and all items
  help                        this text
  quit                        leave";

/// One parsed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Ready to dispatch as-is.
    Command(DecisionCommand),
    /// Item addressed by 1-based position; needs resolving to an id.
    Edit { side: Side, position: usize, text: String },
    Reweigh { side: Side, position: usize, weight: i64 },
    Remove { side: Side, position: usize },
    Show,
    Help,
    Quit,
    Blank,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Unknown command '{0}'. Type 'help' for a list.")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("{0}")]
    Side(#[from] ValidationError),
}

/// Parses one input line.
pub fn parse(line: &str) -> Result<Input, InputError> {
    let (keyword, rest) = split_word(line);

    let input = match keyword.to_ascii_lowercase().as_str() {
        "" => Input::Blank,
        "topic" => Input::Command(DecisionCommand::SetTopic(rest.to_string())),
        "pro" | "con" => {
            let side = keyword.parse::<Side>()?;
            let (first, remainder) = split_word(rest);
            let (weight, text) = if is_number(first) {
                (Some(first.to_string()), remainder)
            } else {
                (None, rest)
            };
            Input::Command(DecisionCommand::AddEntry {
                side,
                text: text.to_string(),
                weight,
            })
        }
        "edit" => {
            const USAGE: &str = "edit pro|con <n> <text>";
            let (side, position, text) = side_and_position(rest, USAGE)?;
            Input::Edit {
                side,
                position,
                text: text.to_string(),
            }
        }
        "weight" => {
            const USAGE: &str = "weight pro|con <n> <w>";
            let (side, position, rest) = side_and_position(rest, USAGE)?;
            if rest.trim().is_empty() {
                return Err(InputError::Usage(USAGE));
            }
            // Same leniency as `pro`/`con`: clamp, truncate, default.
            let weight = Weight::parse_or_default(Some(rest));
            Input::Reweigh {
                side,
                position,
                weight: i64::from(weight.value()),
            }
        }
        "rm" | "remove" | "del" => {
            let (side, position, _) = side_and_position(rest, "rm pro|con <n>")?;
            Input::Remove { side, position }
        }
        "done" | "undo" => {
            if rest.is_empty() {
                return Err(InputError::Usage("done|undo pro|con"));
            }
            Input::Command(DecisionCommand::SetLocked {
                side: rest.parse()?,
                locked: keyword.eq_ignore_ascii_case("done"),
            })
        }
        "recommend" | "rec" => Input::Command(DecisionCommand::Recommend),
        "share" => Input::Command(DecisionCommand::Share),
        "open" => {
            if rest.is_empty() {
                return Err(InputError::Usage("open <link>"));
            }
            Input::Command(DecisionCommand::OpenLink(rest.to_string()))
        }
        "reset" => Input::Command(DecisionCommand::Reset),
        "show" => Input::Show,
        "help" | "?" => Input::Help,
        "quit" | "exit" | "q" => Input::Quit,
        _ => return Err(InputError::Unknown(keyword.to_string())),
    };
    Ok(input)
}

fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim();
    match s.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (s, ""),
    }
}

fn is_number(s: &str) -> bool {
    !s.is_empty() && s.parse::<f64>().map(f64::is_finite).unwrap_or(false)
}

fn side_and_position<'a>(
    s: &'a str,
    usage: &'static str,
) -> Result<(Side, usize, &'a str), InputError> {
    let (side, rest) = split_word(s);
    let (position, rest) = split_word(rest);
    if side.is_empty() || position.is_empty() {
        return Err(InputError::Usage(usage));
    }
    let side = side.parse::<Side>()?;
    let position = position
        .parse::<usize>()
        .ok()
        .filter(|n| *n >= 1)
        .ok_or(InputError::Usage(usage))?;
    Ok((side, position, rest))
}
