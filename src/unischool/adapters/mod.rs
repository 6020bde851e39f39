//! # Adapter Layer
//!
//! This module defines the uniform capability the application speaks: the
//! [`SchoolManagementApp`] trait. The subsystems in [`crate::systems`] each
//! expose a differently-named operation (`mark_attendance`, `record_grades`,
//! `manage_books`); an adapter wraps one of them and presents it as
//! [`SchoolManagementApp::integrate`].
//!
//! ## Implementations
//!
//! - [`attendance::AttendanceAdapter`] over [`crate::systems::AttendanceSystem`]
//! - [`grading::GradingAdapter`] over [`crate::systems::GradingSystem`]
//! - [`library::LibraryAdapter`] over [`crate::systems::LibrarySystem`]
//!
//! ## Binding
//!
//! An adapter takes ownership of its subsystem in `new` and keeps it in a
//! private field. There is no setter: the binding holds for the adapter's
//! whole lifetime. Adapters share no state with each other.
//!
//! The trait is object safe so the API can hold the three adapters side by
//! side as `Box<dyn SchoolManagementApp>`, and tests can slot in their own.

pub mod attendance;
pub mod grading;
pub mod library;

pub use attendance::AttendanceAdapter;
pub use grading::GradingAdapter;
pub use library::LibraryAdapter;

/// Uniform interface over the school subsystems.
pub trait SchoolManagementApp {
    /// Run the wrapped subsystem's operation and return its confirmation unchanged.
    fn integrate(&self) -> String;

    /// Short name of the wrapped subsystem, used in log events.
    fn name(&self) -> &'static str;
}
