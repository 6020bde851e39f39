use crate::commands::{CmdMessage, CmdResult};
use crate::menu::{FIRST_CHOICE, LAST_CHOICE};
use tracing::warn;

/// An integer with no menu entry.
pub fn choice(token: &str) -> CmdResult {
    warn!(token = %token, "menu choice out of range");
    CmdResult::default().with_message(CmdMessage::warning(format!(
        "Invalid choice. Please select a number between {} and {}.",
        FIRST_CHOICE, LAST_CHOICE
    )))
}

/// Something that is not an integer at all.
pub fn input(token: &str) -> CmdResult {
    warn!(token = %token, "non-numeric menu input");
    CmdResult::default().with_message(CmdMessage::warning(format!(
        "Invalid input. Please enter a number between {} and {}.",
        FIRST_CHOICE, LAST_CHOICE
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{Flow, MessageLevel};

    #[test]
    fn out_of_range_keeps_looping() {
        let result = choice("7");
        assert_eq!(result.flow, Flow::Continue);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(
            result.messages[0].content,
            "Invalid choice. Please select a number between 1 and 4."
        );
    }

    #[test]
    fn non_numeric_keeps_looping() {
        let result = input("abc");
        assert_eq!(result.flow, Flow::Continue);
        assert_eq!(
            result.messages[0].content,
            "Invalid input. Please enter a number between 1 and 4."
        );
    }
}
