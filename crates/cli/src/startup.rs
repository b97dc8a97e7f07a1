//! One-time startup dialogue.
//!
//! Runs before the interactive loop: the credential notice shown when no API
//! key is configured, and the single-shot model override prompt.

use std::io::{self, BufRead, Write};

/// Shown when the credential variable is unset; the process then exits
/// without entering the loop.
pub const MISSING_CREDENTIAL_NOTICE: &str = "Please enter your OpenAI API Key. \
    You can get it from https://platform.openai.com/account/api-keys";

/// Ask the operator whether to override the default model.
///
/// A literal `y` opens a free-text prompt for the model identifier; anything
/// else (including EOF or an empty identifier) keeps the default. The
/// returned name is fixed for the rest of the session.
pub fn prompt_for_model<R: BufRead, W: Write>(
    default_model: &str,
    input: &mut R,
    output: &mut W,
) -> io::Result<String> {
    write!(
        output,
        "This program is using the {} model. Do you want to use a different model? (y/n): ",
        default_model
    )?;
    output.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        return Ok(default_model.to_string());
    }

    if answer.trim() != "y" {
        return Ok(default_model.to_string());
    }

    write!(output, "Please enter your desired model: ")?;
    output.flush()?;

    let mut model = String::new();
    input.read_line(&mut model)?;
    let model = model.trim();

    if model.is_empty() {
        Ok(default_model.to_string())
    } else {
        Ok(model.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt(default_model: &str, input: &str) -> (String, String) {
        let mut reader = input.as_bytes();
        let mut output = Vec::new();
        let model = prompt_for_model(default_model, &mut reader, &mut output).unwrap();
        (model, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_decline_keeps_default() {
        let (model, output) = prompt("gpt-4o-mini", "n\n");
        assert_eq!(model, "gpt-4o-mini");
        assert!(output.contains("This program is using the gpt-4o-mini model."));
        assert!(!output.contains("desired model"));
    }

    #[test]
    fn test_accept_reads_model() {
        let (model, output) = prompt("gpt-4o-mini", "y\ncustom-model\n");
        assert_eq!(model, "custom-model");
        assert!(output.contains("Please enter your desired model: "));
    }

    #[test]
    fn test_only_literal_y_accepts() {
        let (model, _) = prompt("gpt-4o-mini", "Y\nother-model\n");
        assert_eq!(model, "gpt-4o-mini");
    }

    #[test]
    fn test_empty_answer_keeps_default() {
        let (model, _) = prompt("gpt-4o-mini", "\n");
        assert_eq!(model, "gpt-4o-mini");
    }

    #[test]
    fn test_eof_keeps_default() {
        let (model, _) = prompt("gpt-4o-mini", "");
        assert_eq!(model, "gpt-4o-mini");
    }

    #[test]
    fn test_empty_model_falls_back() {
        let (model, _) = prompt("gpt-4o-mini", "y\n\n");
        assert_eq!(model, "gpt-4o-mini");
    }
}
