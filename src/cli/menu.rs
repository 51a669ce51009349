use std::io::{self, BufRead, Write};

use vip_results_sync::ports::command_handler::Command;

pub const MENU_PROMPT: &str = "
Choose an action:
1. Clear sheet contents only (A6:CA10000)
2. Run full script (clear and update)
3. Exit
Enter your choice (1, 2, or 3): ";

pub const INVALID_CHOICE: &str = "Invalid choice. Please enter 1, 2, or 3.";

pub fn parse_choice(input: &str) -> Option<Command> {
    match input.trim() {
        "1" => Some(Command::ClearOnly),
        "2" => Some(Command::FullRun),
        "3" => Some(Command::Exit),
        _ => None,
    }
}

/// Prompts until a valid choice is entered. End of input counts as exit.
pub fn prompt_command<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<Command> {
    loop {
        write!(output, "{MENU_PROMPT}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(Command::Exit);
        }

        match parse_choice(&line) {
            Some(command) => return Ok(command),
            None => writeln!(output, "{INVALID_CHOICE}")?,
        }
    }
}
