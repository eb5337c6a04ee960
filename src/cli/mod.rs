pub mod command;
pub mod run;

pub use run::run_app;

use crate::cli::command::MenuChoice;
use crate::errors::AppError;
use std::io::{BufRead, Write};

pub const BANNER: &str = "ContactEase Solutions";

pub fn show_menu<W: Write>(output: &mut W) -> Result<(), AppError> {
    writeln!(output)?;
    writeln!(output, "{}", BANNER)?;
    for choice in MenuChoice::ALL {
        writeln!(output, "{}", choice.label())?;
    }
    Ok(())
}

/// Prints `label` and reads one line.
///
/// Returns `None` once the input is exhausted. Only the line terminator is
/// stripped, so names keep any spaces the user typed.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<Option<String>, AppError> {
    write!(output, "{}", label)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}

/// Prompts for each label in turn. `None` if input runs out part way.
pub fn prompt_fields<R: BufRead, W: Write, const N: usize>(
    input: &mut R,
    output: &mut W,
    labels: [&str; N],
) -> Result<Option<[String; N]>, AppError> {
    let mut values: [String; N] = std::array::from_fn(|_| String::new());

    for (value, label) in values.iter_mut().zip(labels) {
        match prompt(input, output, label)? {
            Some(line) => *value = line,
            None => return Ok(None),
        }
    }
    Ok(Some(values))
}
