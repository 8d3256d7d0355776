//! Interactive read loop around the assistant.

use std::io::{BufRead, Write};

use anyhow::Context;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::assistant::Assistant;
use crate::models::Reply;

pub const PROMPT: &str = "You: ";
pub const EXIT_WORDS: [&str; 3] = ["exit", "quit", "bye"];
pub const FAREWELL: &str = "AI: Thank you for sharing with me. Take care of yourself 💙";
pub const NUDGE: &str = "AI: You can type anything, even a small sentence. I’m listening. 🙂";

const SEPARATOR_WIDTH: usize = 60;

#[derive(Debug, PartialEq, Eq)]
pub enum Turn<'a> {
    Exit,
    Empty,
    Message(&'a str),
}

pub fn parse_turn(line: &str) -> Turn<'_> {
    let line = line.trim();
    if line.is_empty() {
        Turn::Empty
    } else if EXIT_WORDS.iter().any(|word| line.eq_ignore_ascii_case(word)) {
        Turn::Exit
    } else {
        Turn::Message(line)
    }
}

/// Where chat lines come from. `Ok(None)` means the user is gone.
pub trait LineSource {
    fn next_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>>;
}

/// Line editing with in-memory history, for terminals.
pub struct EditorInput {
    editor: DefaultEditor,
}

impl EditorInput {
    pub fn new() -> anyhow::Result<Self> {
        let editor = DefaultEditor::new().context("failed to initialize line editor")?;
        Ok(Self { editor })
    }
}

impl LineSource for EditorInput {
    fn next_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                let line = line.trim().to_string();
                if !line.is_empty() {
                    self.editor
                        .add_history_entry(line.as_str())
                        .context("failed to record history entry")?;
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err).context("failed to read input"),
        }
    }
}

/// Plain buffered reads, for pipes and tests.
pub struct PipedInput<R, W> {
    reader: R,
    prompt_out: W,
}

impl<R: BufRead, W: Write> PipedInput<R, W> {
    pub fn new(reader: R, prompt_out: W) -> Self {
        Self { reader, prompt_out }
    }
}

impl<R: BufRead, W: Write> LineSource for PipedInput<R, W> {
    fn next_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        write!(self.prompt_out, "{prompt}")?;
        self.prompt_out.flush()?;

        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .context("failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

pub fn write_banner<W: Write>(out: &mut W) -> std::io::Result<()> {
    let rule = "═".repeat(44);
    writeln!(out, "╔{rule}╗")?;
    writeln!(out, "║  AI Mental Health Support Assistant 💬     ║")?;
    writeln!(out, "╚{rule}╝")?;
    writeln!(out, "Hi, I’m here to listen. You can type how you feel.")?;
    writeln!(out, "Type 'exit' anytime to stop.")?;
    writeln!(out)
}

pub fn write_reply<W: Write>(out: &mut W, reply: &Reply) -> std::io::Result<()> {
    match reply {
        Reply::Safety(message) => {
            writeln!(out)?;
            writeln!(out, "AI: {message}")?;
            writeln!(out)
        }
        Reply::Supportive { text, .. } => {
            writeln!(out)?;
            writeln!(out, "AI:")?;
            writeln!(out, "{text}")?;
            writeln!(out)?;
            writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
            writeln!(out)
        }
    }
}

pub fn run<S: LineSource, W: Write>(
    assistant: &Assistant,
    input: &mut S,
    out: &mut W,
) -> anyhow::Result<()> {
    write_banner(out)?;
    out.flush()?;

    let mut turns = 0usize;
    loop {
        let Some(line) = input.next_line(PROMPT)? else {
            writeln!(out)?;
            writeln!(out, "{FAREWELL}")?;
            break;
        };

        match parse_turn(&line) {
            Turn::Exit => {
                writeln!(out)?;
                writeln!(out, "{FAREWELL}")?;
                break;
            }
            Turn::Empty => writeln!(out, "{NUDGE}")?,
            Turn::Message(text) => {
                turns += 1;
                write_reply(out, &assistant.respond(text))?;
            }
        }
        out.flush()?;
    }

    out.flush()?;
    tracing::info!(turns, "chat session ended");
    Ok(())
}
