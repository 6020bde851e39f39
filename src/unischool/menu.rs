//! # Menu Choices
//!
//! The menu is fixed: three systems and an exit entry, numbered 1 through 4.
//! Users type the number; [`Selection::parse`] turns one typed token into
//! something the API can dispatch on.
//!
//! ## Tokens, Not Lines
//!
//! Input is read the way a blocking scanner reads integers: tokens are
//! separated by any whitespace, blank lines are skipped while waiting, and a
//! single line may hold several answers. `"1 4\n"` and `"1\n\n4\n"` both
//! answer two consecutive prompts. [`ChoiceReader`] implements this over any
//! [`BufRead`].
//!
//! ## Classification
//!
//! | Token        | Selection                 |
//! |--------------|---------------------------|
//! | `1`..`4`     | `Choice(..)`              |
//! | `0`, `-3`, `99999999999999999999` | `OutOfRange(..)` |
//! | `abc`, `2.5` | `NotANumber(..)`          |

use crate::error::Result;
use std::collections::VecDeque;
use std::fmt;
use std::io::{BufRead, Read};
use tracing::warn;

pub const FIRST_CHOICE: i64 = 1;
pub const LAST_CHOICE: i64 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuChoice {
    Attendance,
    Grading,
    Library,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 4] = [
        MenuChoice::Attendance,
        MenuChoice::Grading,
        MenuChoice::Library,
        MenuChoice::Exit,
    ];

    pub fn number(self) -> i64 {
        match self {
            MenuChoice::Attendance => 1,
            MenuChoice::Grading => 2,
            MenuChoice::Library => 3,
            MenuChoice::Exit => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Attendance => "Attendance System",
            MenuChoice::Grading => "Grading System",
            MenuChoice::Library => "Library System",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl TryFrom<i64> for MenuChoice {
    type Error = i64;

    fn try_from(n: i64) -> std::result::Result<Self, Self::Error> {
        match n {
            1 => Ok(MenuChoice::Attendance),
            2 => Ok(MenuChoice::Grading),
            3 => Ok(MenuChoice::Library),
            4 => Ok(MenuChoice::Exit),
            other => Err(other),
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

/// Outcome of reading one token at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Choice(MenuChoice),
    /// An integer literal with no menu entry.
    OutOfRange(String),
    NotANumber(String),
}

impl Selection {
    pub fn parse(token: &str) -> Self {
        let token = token.trim();
        match token.parse::<i64>() {
            Ok(n) => match MenuChoice::try_from(n) {
                Ok(choice) => Selection::Choice(choice),
                Err(_) => Selection::OutOfRange(token.to_string()),
            },
            // Still an integer, just wider than i64.
            Err(_) if is_integer_literal(token) => Selection::OutOfRange(token.to_string()),
            Err(_) => Selection::NotANumber(token.to_string()),
        }
    }
}

fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// The menu as shown before every prompt, without the prompt line itself.
pub fn menu_text() -> String {
    let mut text = String::from("Please select a system: \n");
    for choice in MenuChoice::ALL {
        text.push_str(&choice.to_string());
        text.push('\n');
    }
    text
}

pub const PROMPT: &str = "\nEnter your choice: ";

/// Longest input line kept; anything past it on the same line is dropped.
pub const MAX_LINE_BYTES: u64 = 4096;

/// Whitespace-separated token reader over a line-oriented source.
pub struct ChoiceReader<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> ChoiceReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    /// Next token, blocking on further lines as needed. `None` once input is exhausted.
    ///
    /// Bytes that are not UTF-8 are kept as replacement characters, so they
    /// reach the menu as non-numeric tokens.
    pub fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = Vec::new();
            let read = (&mut self.input)
                .take(MAX_LINE_BYTES)
                .read_until(b'\n', &mut line)?;
            if read == 0 {
                return Ok(None);
            }
            if read as u64 == MAX_LINE_BYTES && line.last() != Some(&b'\n') {
                self.skip_rest_of_line()?;
            }
            self.pending.extend(
                line.split(|b| b.is_ascii_whitespace())
                    .filter(|t| !t.is_empty())
                    .map(|t| String::from_utf8_lossy(t).into_owned()),
            );
        }
    }

    fn skip_rest_of_line(&mut self) -> Result<()> {
        let mut discarded = 0usize;
        loop {
            let (consumed, done) = {
                let buf = self.input.fill_buf()?;
                if buf.is_empty() {
                    break;
                }
                match buf.iter().position(|&b| b == b'\n') {
                    Some(i) => (i + 1, true),
                    None => (buf.len(), false),
                }
            };
            self.input.consume(consumed);
            discarded += consumed;
            if done {
                break;
            }
        }
        warn!(discarded, "input line too long, rest of line dropped");
        Ok(())
    }

    pub fn next_selection(&mut self) -> Result<Option<Selection>> {
        Ok(self.next_token()?.map(|t| Selection::parse(&t)))
    }
}
