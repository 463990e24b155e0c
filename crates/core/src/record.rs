//! Serialized record shape for the persistence layer.
//!
//! The core does no file I/O, but it owns the exact field layout the
//! external JSONL emitter writes: an input conversation (fixed system
//! message plus one user message holding the rendered puzzle) and an
//! `ideal` field equal to the withheld query answer.

use crate::puzzle::{Puzzle, RenderOptions};
use serde::Serialize;

/// Fixed system message for every sample.
pub const SYSTEM_PROMPT: &str =
    "You are a pattern recognition bot, you only reply with the answer.";

/// Instruction banner prepended to the rendered puzzle in the user message.
pub const USER_INSTRUCTION: &str = "You are a pattern recognition bot, \
     figure out the pattern and reply with just the solution, \
     ensure that your reply starts with your solution.";

/// One conversation message.
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub role: &'static str,
    pub content: String,
}

/// One evaluation sample: the conversation shown to the model and the
/// expected answer.
#[derive(Debug, Clone, Serialize)]
pub struct Sample {
    pub input: Vec<Message>,
    pub ideal: String,
}

impl Sample {
    /// Build the sample for one puzzle: instruction banner, optional
    /// generator-supplied instructions, rendered examples, withheld answer.
    pub fn from_puzzle(puzzle: &Puzzle, options: &RenderOptions) -> Self {
        let mut text = String::from(USER_INSTRUCTION);
        text.push('\n');
        if let Some(instructions) = puzzle.additional_instructions() {
            text.push_str(instructions);
            text.push('\n');
        }
        text.push_str(&puzzle.render(options));

        Sample {
            input: vec![
                Message {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                Message {
                    role: "user",
                    content: text,
                },
            ],
            ideal: puzzle.answer(),
        }
    }
}
