use crate::adapters::SchoolManagementApp;
use crate::commands::{CmdMessage, CmdResult};

/// Invoke one adapter and report its confirmation verbatim.
pub fn run<A: SchoolManagementApp + ?Sized>(adapter: &A) -> CmdResult {
    CmdResult::default().with_message(CmdMessage::success(adapter.integrate()))
}
