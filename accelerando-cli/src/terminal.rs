//! Interactive play over stdin/stdout.
use accelerando_game::{ChoiceRequest, INTERRUPT_FAREWELL, Operator, OperatorInterrupt, parse_choice};
use anyhow::Context;
use colored::Colorize;
use std::io::{BufRead, ErrorKind, Write};

const INTERRUPT_NOTICE: &str = "\n\nGame interrupted by user.\n";

/// Route Ctrl-C to the same farewell as closing input, then exit cleanly.
///
/// A read blocked on stdin resumes after the signal, so the handler cannot
/// hand control back to the session. Nothing is saved on this path.
pub fn install_interrupt_handler() -> anyhow::Result<()> {
    ctrlc::set_handler(|| {
        let mut out = std::io::stdout();
        let _ = writeln!(out, "{INTERRUPT_NOTICE}{INTERRUPT_FAREWELL}");
        let _ = out.flush();
        std::process::exit(0);
    })
    .context("failed to install Ctrl-C handler")
}

/// Line-oriented operator over any reader/writer pair.
///
/// End of input counts as the operator cancelling.
pub struct TerminalOperator<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalOperator<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn emit(&mut self, text: &str) {
        let written = self
            .output
            .write_all(text.as_bytes())
            .and_then(|()| self.output.flush());
        if let Err(err) = written {
            log::warn!("Could not write to terminal: {err}");
        }
    }

    fn read_line(&mut self) -> Result<String, OperatorInterrupt> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => {
                self.emit(INTERRUPT_NOTICE);
                Err(OperatorInterrupt)
            }
            Ok(_) => Ok(line),
            // The bad line is consumed; an empty answer re-prompts.
            Err(err) if err.kind() == ErrorKind::InvalidData => {
                log::debug!("Ignoring undecodable input: {err}");
                Ok(String::new())
            }
            Err(err) => {
                log::warn!("Could not read from terminal: {err}");
                Err(OperatorInterrupt)
            }
        }
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }
}

fn paint(text: &str) -> String {
    text.lines()
        .map(|line| {
            let trimmed = line.trim_start();
            if trimmed.starts_with('✓') {
                line.green().to_string()
            } else if trimmed.starts_with('✗') {
                line.red().to_string()
            } else if trimmed.starts_with('○') {
                line.yellow().to_string()
            } else if trimmed.starts_with('⚠') {
                line.yellow().bold().to_string()
            } else if trimmed.starts_with("===") || trimmed.contains("EVENT:") {
                line.bright_cyan().bold().to_string()
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl<R: BufRead, W: Write> Operator for TerminalOperator<R, W> {
    fn show(&mut self, text: &str) {
        let painted = paint(text);
        self.emit(&format!("{painted}\n"));
    }

    fn choose(&mut self, request: &ChoiceRequest<'_>) -> Result<u8, OperatorInterrupt> {
        let mut menu = String::from("\n");
        for (idx, label) in request.options.iter().enumerate() {
            menu.push_str(&format!("{}. {label}\n", (idx + 1).to_string().bold()));
        }
        self.emit(&menu);
        let max = request.max();
        loop {
            self.emit(&format!("\nEnter choice (1-{max}): "));
            let line = self.read_line()?;
            match parse_choice(&line, max) {
                Ok(choice) => return Ok(choice),
                Err(err) => self.emit(&format!("{}\n", err.to_string().yellow())),
            }
        }
    }

    fn pause(&mut self, prompt: &str) -> Result<(), OperatorInterrupt> {
        self.emit(&format!("{prompt}\n"));
        self.read_line().map(|_| ())
    }
}
