use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// Where menu answers come from. `None` means the user wants to stop.
pub trait Input {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

pub struct Terminal {
    editor: DefaultEditor,
}

impl Terminal {
    pub fn new() -> Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl Input for Terminal {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                let line = line.trim();
                if line == "exit" || line == "quit" {
                    return Ok(None);
                }
                if !line.is_empty() {
                    self.editor.add_history_entry(line)?;
                }
                Ok(Some(line.to_string()))
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                Ok(None)
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }
}

/// Canned answers, consumed front to back. Runs dry like CTRL-D.
#[cfg(test)]
pub struct Script {
    lines: std::collections::VecDeque<String>,
}

#[cfg(test)]
impl Script {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Script {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
impl Input for Script {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

/// Asks until the answer parses, or returns `None` when input ends.
pub fn ask<T, I>(input: &mut I, prompt: &str, out: &mut impl std::io::Write) -> Result<Option<T>>
where
    T: std::str::FromStr,
    I: Input + ?Sized,
{
    loop {
        let Some(line) = input.read_line(prompt)? else {
            return Ok(None);
        };
        match line.trim().parse() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => writeln!(out, "Invalid input: {:?}", line)?,
        }
    }
}
