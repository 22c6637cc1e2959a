//! Interactive mode selection.

use std::io::{self, BufRead, Write};

/// Question printed before reading the mode.
pub const PROMPT: &str =
    "Do you want to play Skippy Turtle manually (1) or watch the AI do its work (2): ";

/// Message printed for anything but `1` or `2`.
pub const INVALID_INPUT: &str = "I didn't get that, please try again";

/// How the game is played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// A human controls the turtle with the space bar.
    Manual,
    /// A population of networks learns to play.
    Agents,
}

/// Parses the answer to [`PROMPT`], ignoring surrounding whitespace.
pub fn parse_mode(answer: &str) -> Option<Mode> {
    match answer.trim() {
        "1" => Some(Mode::Manual),
        "2" => Some(Mode::Agents),
        _ => None,
    }
}

/// Prints [`PROMPT`] to `output` and reads one line from `input`.
///
/// # Returns
///
/// The chosen mode, or `None` if the answer was not understood.
pub fn prompt_mode(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<Option<Mode>> {
    write!(output, "{PROMPT}")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(parse_mode(&answer))
}
