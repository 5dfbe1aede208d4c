use crate::core::Coord;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use derive_more::{Display, Error};
use std::io::{self, Write};
use std::time::Duration;

/// A line typed at the move prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play(Coord),
    Resign,
}

#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    #[display("expected coordinate as Row,Col")]
    Shape,
    #[display("{value:?} is not a valid {axis} number")]
    Number { axis: &'static str, value: String },
}

pub fn parse_command(input: &str) -> Result<Command, InputError> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("resign") {
        return Ok(Command::Resign);
    }

    let mut parts = input.split(',');
    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(InputError::Shape);
    };
    let row = parse_axis("row", row)?;
    let col = parse_axis("column", col)?;
    Ok(Command::Play(Coord::new(row, col)))
}

fn parse_axis(axis: &'static str, value: &str) -> Result<usize, InputError> {
    let value = value.trim();
    value.parse().map_err(|_| InputError::Number {
        axis,
        value: value.to_string(),
    })
}

/// Reads one line in raw mode. `Ok(None)` when the user pressed Esc or Ctrl-C.
pub fn read_line_raw(prompt: &str) -> anyhow::Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    loop {
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind == KeyEventKind::Release {
            continue;
        }
        match key.code {
            KeyCode::Enter => {
                print!("\r\n");
                return Ok(Some(input));
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                print!("\r\n");
                return Ok(None);
            }
            KeyCode::Char(c) => {
                input.push(c);
                print!("{}", c);
                io::stdout().flush()?;
            }
            KeyCode::Backspace => {
                if input.pop().is_some() {
                    print!("\u{0008} \u{0008}");
                    io::stdout().flush()?;
                }
            }
            KeyCode::Esc => {
                print!("\r\n");
                return Ok(None);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(
            parse_command("4,5"),
            Ok(Command::Play(Coord::new(4, 5)))
        );
        assert_eq!(
            parse_command("  7 , 10 \n"),
            Ok(Command::Play(Coord::new(7, 10)))
        );
    }

    #[test]
    fn test_parse_resign() {
        assert_eq!(parse_command("resign\n"), Ok(Command::Resign));
        assert_eq!(parse_command(" RESIGN "), Ok(Command::Resign));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_command("4"), Err(InputError::Shape));
        assert_eq!(parse_command("1,2,3"), Err(InputError::Shape));
        assert_eq!(parse_command(""), Err(InputError::Shape));
        assert_eq!(
            parse_command("a,2"),
            Err(InputError::Number {
                axis: "row",
                value: "a".to_string()
            })
        );
        let err = parse_command("3,-1").unwrap_err();
        assert_eq!(err.to_string(), "\"-1\" is not a valid column number");
    }
}
