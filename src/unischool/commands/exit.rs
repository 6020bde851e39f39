use crate::commands::{CmdMessage, CmdResult, Flow};

pub const EXIT_MESSAGE: &str = "Exiting the program...";

pub fn run() -> CmdResult {
    CmdResult::default()
        .with_message(CmdMessage::info(EXIT_MESSAGE))
        .with_flow(Flow::Exit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_the_loop_with_a_message() {
        let result = run();
        assert!(result.is_exit());
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].content, EXIT_MESSAGE);
    }
}
