//! # Interactive Session
//!
//! The command dispatch loop: show the menu, read one choice, hand it to
//! [`SchoolApi`], render what comes back, repeat. The loop ends when the
//! user picks Exit or when input runs out.
//!
//! [`run`] is generic over its reader and writer. The binary passes locked
//! stdin/stdout; tests pass a `Cursor` and a `Vec<u8>`.

use crate::api::SchoolApi;
use crate::commands::{CmdMessage, MessageLevel};
use crate::error::Result;
use crate::menu::{menu_text, ChoiceReader, MenuChoice, Selection, PROMPT};
use colored::Colorize;
use std::io::{BufRead, Write};
use tracing::debug;

pub const BANNER: &str = "WELCOME TO UNIFIED SCHOOL MANAGEMENT APPLICATION!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    pub show_banner: bool,
    /// Apply terminal styling to messages
    pub styled: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            show_banner: true,
            styled: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user picked Exit.
    Exited,
    /// Input ended before Exit was picked.
    InputClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionReport {
    /// Adapter invocations.
    pub dispatched: usize,
    /// Selections answered with an invalid-choice or invalid-input message.
    pub rejected: usize,
    pub end: SessionEnd,
}

pub fn run<R: BufRead, W: Write>(
    api: &SchoolApi,
    input: R,
    mut output: W,
    options: SessionOptions,
) -> Result<SessionReport> {
    let mut reader = ChoiceReader::new(input);
    let mut dispatched = 0;
    let mut rejected = 0;

    if options.show_banner {
        let banner = if options.styled {
            BANNER.bold().to_string()
        } else {
            BANNER.to_string()
        };
        writeln!(output, "{}\n", banner)?;
    }

    let end = loop {
        write!(output, "{}{}", menu_text(), PROMPT)?;
        output.flush()?;

        let Some(selection) = reader.next_selection()? else {
            writeln!(output)?;
            break SessionEnd::InputClosed;
        };

        match &selection {
            Selection::Choice(MenuChoice::Exit) => {}
            Selection::Choice(_) => dispatched += 1,
            Selection::OutOfRange(_) | Selection::NotANumber(_) => rejected += 1,
        }

        let result = api.dispatch(&selection);
        for message in &result.messages {
            write_message(&mut output, message, options.styled)?;
        }

        if result.is_exit() {
            break SessionEnd::Exited;
        }
    };
    output.flush()?;

    let report = SessionReport {
        dispatched,
        rejected,
        end,
    };
    debug!(?report, "session finished");
    Ok(report)
}

fn write_message<W: Write>(output: &mut W, message: &CmdMessage, styled: bool) -> Result<()> {
    let content = &message.content;
    let rendered = if styled {
        match message.level {
            MessageLevel::Info => content.dimmed().to_string(),
            MessageLevel::Success => content.green().to_string(),
            MessageLevel::Warning => content.yellow().to_string(),
        }
    } else {
        content.clone()
    };

    match message.level {
        MessageLevel::Warning => writeln!(output, "\n{}\n", rendered)?,
        MessageLevel::Info | MessageLevel::Success => writeln!(output, "{}", rendered)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::exit::EXIT_MESSAGE;
    use crate::systems::{ATTENDANCE_CONFIRMATION, GRADING_CONFIRMATION, LIBRARY_CONFIRMATION};
    use std::io::Cursor;

    const INVALID_CHOICE: &str = "Invalid choice. Please select a number between 1 and 4.";
    const INVALID_INPUT: &str = "Invalid input. Please enter a number between 1 and 4.";

    fn session(input: &str) -> (String, SessionReport) {
        let api = SchoolApi::standard();
        let mut out = Vec::new();
        let report = run(
            &api,
            Cursor::new(input.to_string()),
            &mut out,
            SessionOptions::default(),
        )
        .unwrap();
        (String::from_utf8(out).unwrap(), report)
    }

    /// Lines that are neither menu, prompt, banner, nor blank.
    fn responses(out: &str) -> Vec<&str> {
        let menu = menu_text();
        let noise: Vec<&str> = menu.lines().collect();
        out.lines()
            .map(|l| l.strip_prefix(PROMPT.trim_start()).unwrap_or(l))
            .filter(|l| !l.trim().is_empty())
            .filter(|l| !noise.contains(l) && *l != BANNER)
            .collect()
    }

    #[test]
    fn attendance_then_exit() {
        let (out, report) = session("1\n4\n");
        assert_eq!(responses(&out), vec![ATTENDANCE_CONFIRMATION, EXIT_MESSAGE]);
        assert_eq!(report.end, SessionEnd::Exited);
        assert_eq!(report.dispatched, 1);
        assert_eq!(report.rejected, 0);
    }

    #[test]
    fn invalid_then_grading_then_exit() {
        let (out, report) = session("5\n2\n4\n");
        assert_eq!(
            responses(&out),
            vec![INVALID_CHOICE, GRADING_CONFIRMATION, EXIT_MESSAGE]
        );
        assert_eq!(report.rejected, 1);
        assert_eq!(report.dispatched, 1);
    }

    #[test]
    fn every_system_prints_its_confirmation() {
        let (out, _) = session("1\n2\n3\n4\n");
        assert_eq!(
            responses(&out),
            vec![
                ATTENDANCE_CONFIRMATION,
                GRADING_CONFIRMATION,
                LIBRARY_CONFIRMATION,
                EXIT_MESSAGE
            ]
        );
    }

    #[test]
    fn exit_stops_reading() {
        let (out, report) = session("4\n1\n2\n");
        assert_eq!(responses(&out), vec![EXIT_MESSAGE]);
        assert_eq!(report.dispatched, 0);
        assert_eq!(out.matches(PROMPT).count(), 1);
    }

    #[test]
    fn exit_after_long_history() {
        let (out, report) = session("0 -2 9 x 3 3 1 4");
        let lines = responses(&out);
        assert_eq!(lines.last(), Some(&EXIT_MESSAGE));
        assert_eq!(report.end, SessionEnd::Exited);
        assert_eq!(report.rejected, 4);
        assert_eq!(report.dispatched, 3);
    }

    #[test]
    fn non_numeric_input_reprompts() {
        let (out, report) = session("hello\n3\n4\n");
        assert_eq!(
            responses(&out),
            vec![INVALID_INPUT, LIBRARY_CONFIRMATION, EXIT_MESSAGE]
        );
        assert_eq!(report.rejected, 1);
        assert_eq!(out.matches(PROMPT).count(), 3);
    }

    #[test]
    fn end_of_input_closes_session() {
        let (out, report) = session("2\n");
        assert_eq!(responses(&out), vec![GRADING_CONFIRMATION]);
        assert_eq!(report.end, SessionEnd::InputClosed);
    }

    #[test]
    fn empty_input_shows_one_menu() {
        let (out, report) = session("");
        assert!(out.starts_with(BANNER));
        assert_eq!(out.matches(PROMPT).count(), 1);
        assert_eq!(report.end, SessionEnd::InputClosed);
    }

    #[test]
    fn invalid_choice_is_padded_with_blank_lines() {
        let (out, _) = session("7\n4\n");
        assert!(out.contains(&format!("{}\n{}\n\n", PROMPT, INVALID_CHOICE)));
    }

    #[test]
    fn output_layout_matches_the_menu() {
        let (out, _) = session("4\n");
        let expected = format!(
            "{}\n\n{}{}{}\n",
            BANNER,
            menu_text(),
            PROMPT,
            EXIT_MESSAGE
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn banner_can_be_suppressed() {
        let api = SchoolApi::standard();
        let mut out = Vec::new();
        let options = SessionOptions {
            show_banner: false,
            styled: false,
        };
        run(&api, Cursor::new("4\n"), &mut out, options).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(!out.contains(BANNER));
        assert!(out.starts_with("Please select a system:"));
    }

    #[test]
    fn styled_output_keeps_the_text() {
        colored::control::set_override(true);
        let api = SchoolApi::standard();
        let mut out = Vec::new();
        let options = SessionOptions {
            show_banner: true,
            styled: true,
        };
        run(&api, Cursor::new("1\n4\n"), &mut out, options).unwrap();
        colored::control::unset_override();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains(ATTENDANCE_CONFIRMATION));
        assert!(out.contains(EXIT_MESSAGE));
        assert!(out.contains("\u{1b}["));
    }

    #[test]
    fn invalid_utf8_reprompts_instead_of_failing() {
        let api = SchoolApi::standard();
        let mut out = Vec::new();
        let report = run(
            &api,
            Cursor::new(vec![0xff, 0xfe, b'\n', b'4', b'\n']),
            &mut out,
            SessionOptions::default(),
        )
        .unwrap();

        let out = String::from_utf8(out).unwrap();
        assert_eq!(responses(&out), vec![INVALID_INPUT, EXIT_MESSAGE]);
        assert_eq!(report.rejected, 1);
        assert_eq!(report.end, SessionEnd::Exited);
    }
}
