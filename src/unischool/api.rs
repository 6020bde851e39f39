//! # API Facade
//!
//! [`SchoolApi`] is the single entry point the session talks to. It owns one
//! adapter per menu entry and routes a parsed [`Selection`] to the matching
//! command in [`crate::commands`].
//!
//! The adapters are held as `Box<dyn SchoolManagementApp>`: the facade only
//! depends on the uniform capability, never on a concrete subsystem. Use
//! [`SchoolApi::standard`] for the stock wiring, or [`SchoolApi::new`] to
//! supply any adapters (tests do this to observe dispatch).
//!
//! Like the commands below it, the facade performs no I/O.

use crate::adapters::{AttendanceAdapter, GradingAdapter, LibraryAdapter, SchoolManagementApp};
use crate::commands::{self, CmdResult};
use crate::menu::{MenuChoice, Selection};
use crate::systems::{AttendanceSystem, GradingSystem, LibrarySystem};
use tracing::debug;

pub struct SchoolApi {
    attendance: Box<dyn SchoolManagementApp>,
    grading: Box<dyn SchoolManagementApp>,
    library: Box<dyn SchoolManagementApp>,
}

impl SchoolApi {
    pub fn new(
        attendance: impl SchoolManagementApp + 'static,
        grading: impl SchoolManagementApp + 'static,
        library: impl SchoolManagementApp + 'static,
    ) -> Self {
        Self {
            attendance: Box::new(attendance),
            grading: Box::new(grading),
            library: Box::new(library),
        }
    }

    /// Each subsystem created once and handed to its adapter.
    pub fn standard() -> Self {
        Self::new(
            AttendanceAdapter::new(AttendanceSystem::new()),
            GradingAdapter::new(GradingSystem::new()),
            LibraryAdapter::new(LibrarySystem::new()),
        )
    }

    pub fn adapter(&self, choice: MenuChoice) -> Option<&dyn SchoolManagementApp> {
        match choice {
            MenuChoice::Attendance => Some(self.attendance.as_ref()),
            MenuChoice::Grading => Some(self.grading.as_ref()),
            MenuChoice::Library => Some(self.library.as_ref()),
            MenuChoice::Exit => None,
        }
    }

    pub fn choose(&self, choice: MenuChoice) -> CmdResult {
        debug!(?choice, "dispatching");
        match self.adapter(choice) {
            Some(adapter) => commands::integrate::run(adapter),
            None => commands::exit::run(),
        }
    }

    pub fn dispatch(&self, selection: &Selection) -> CmdResult {
        match selection {
            Selection::Choice(choice) => self.choose(*choice),
            Selection::OutOfRange(token) => commands::invalid::choice(token),
            Selection::NotANumber(token) => commands::invalid::input(token),
        }
    }
}

impl Default for SchoolApi {
    fn default() -> Self {
        Self::standard()
    }
}
