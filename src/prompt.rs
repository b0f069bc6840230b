use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Line-oriented prompting over any reader/writer pair.
///
/// All prompts return `None` once input is exhausted.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Prompt with a message and return the trimmed line.
    pub fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message).context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush output")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt with a default value. Returns the default if input is empty.
    pub fn prompt_with_default(&mut self, message: &str, default: &str) -> Result<Option<String>> {
        let input = self.prompt(&format!("{} [{}]: ", message, default))?;
        Ok(input.map(|s| if s.is_empty() { default.to_string() } else { s }))
    }

    /// Yes/no question. Empty input picks the default.
    pub fn prompt_yes_no(&mut self, message: &str, default_yes: bool) -> Result<Option<bool>> {
        let hint = if default_yes { "Y/n" } else { "y/N" };
        let input = self.prompt(&format!("{} [{}]: ", message, hint))?;
        Ok(input.map(|s| {
            let s = s.to_lowercase();
            if s.is_empty() {
                default_yes
            } else {
                s == "y" || s == "yes"
            }
        }))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompter(input: &str) -> Prompter<&[u8], Vec<u8>> {
        Prompter::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn test_prompt_trims_and_echoes_message() {
        let mut p = prompter("  hello world \n");
        assert_eq!(p.prompt("Say: ").unwrap(), Some("hello world".to_string()));
        assert_eq!(String::from_utf8(p.into_output()).unwrap(), "Say: ");
    }

    #[test]
    fn test_prompt_eof() {
        let mut p = prompter("");
        assert_eq!(p.prompt("> ").unwrap(), None);
    }

    #[test]
    fn test_prompt_with_default() {
        let mut p = prompter("\nordered\n");
        assert_eq!(p.prompt_with_default("Policy", "greedy").unwrap(), Some("greedy".to_string()));
        assert_eq!(p.prompt_with_default("Policy", "greedy").unwrap(), Some("ordered".to_string()));
    }

    #[test]
    fn test_prompt_yes_no() {
        let mut p = prompter("\nYES\nn\nmaybe\n");
        assert_eq!(p.prompt_yes_no("Ok?", true).unwrap(), Some(true));
        assert_eq!(p.prompt_yes_no("Ok?", false).unwrap(), Some(true));
        assert_eq!(p.prompt_yes_no("Ok?", true).unwrap(), Some(false));
        assert_eq!(p.prompt_yes_no("Ok?", true).unwrap(), Some(false));
        assert_eq!(p.prompt_yes_no("Ok?", true).unwrap(), None);
    }
}
