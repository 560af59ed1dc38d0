#![allow(clippy::missing_errors_doc)]
//! Interactive yes/no prompts

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Whether an answer counts as "yes": its first non-blank character is `y` or `Y`
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim_start().chars().next(), Some('y' | 'Y'))
}

/// Ask `question` on `output` and read one line of `input`
///
/// Defaults to "no" on empty input or end of input.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<bool> {
    write!(output, "{question} [y/N] ").context("Failed to write prompt")?;
    output.flush().context("Failed to flush prompt")?;

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .context("Failed to read answer from stdin")?;

    Ok(is_yes(&answer))
}
