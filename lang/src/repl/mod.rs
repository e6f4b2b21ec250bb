//! The read-scan-print loop.
//!
//! [Repl] prompts for a line, lexes it, and writes every token it gets back, one per output line,
//! until the input runs out. There is no evaluation and nothing is remembered between lines.
//!

pub mod error;

pub use error::ReplError;

use std::io::BufRead;
use std::io::Write;

use crate::toolchain::diagnostics::DiagnosticConsumer;
use crate::toolchain::diagnostics::LogDiagnosticConsumer;
use crate::toolchain::lexer;
use crate::toolchain::source::LineSource;

/// Written before every attempt to read a line.
pub const PROMPT: &str = ">> ";

pub struct Repl<R, W> {
    lines: LineSource<R>,
    output: W,
    diags: LogDiagnosticConsumer,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(input: R, output: W) -> Repl<R, W> {
        Repl {
            lines: LineSource::new(input),
            output,
            diags: LogDiagnosticConsumer::new("monkey_lang::lexer"),
        }
    }

    /// Runs until the input is exhausted or can no longer be read, both of which end the loop
    /// normally. Only failing to write the output is an error.
    pub fn run(&mut self) -> Result<(), ReplError> {
        let result = loop {
            match self.step() {
                Ok(true) => continue,
                Ok(false) => break Ok(()),
                Err(e) => break Err(e),
            }
        };
        self.diags.flush();
        result
    }

    /// One loop iteration: prompt, read a line, and dump its tokens. Returns `false` once there
    /// are no more lines.
    pub fn step(&mut self) -> Result<bool, ReplError> {
        self.output.write_all(PROMPT.as_bytes())?;
        self.output.flush()?;

        let line = match self.lines.next() {
            Some(line) => line,
            None => return Ok(false),
        };

        let mut count = 0usize;
        let mut cursor = lexer::tokenize(&line, &mut self.diags);
        loop {
            let token = cursor.next_token();
            log::trace!("scanned {}", token);
            writeln!(self.output, "{:?}", token)?;
            count += 1;
            if token.is_end() {
                break;
            }
        }
        log::trace!("line {:?} produced {} tokens", line, count);
        Ok(true)
    }

    /// Number of diagnostics the lexer has raised over all lines so far.
    pub fn diagnostic_count(&self) -> usize {
        self.diags.count()
    }

    /// Number of times the collected diagnostics have been flushed.
    pub fn diagnostic_flushes(&self) -> usize {
        self.diags.flush_count()
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Runs a [Repl] reading from `input` and writing to `output` until the input is exhausted.
pub fn start<R: BufRead, W: Write>(input: R, output: W) -> Result<(), ReplError> {
    Repl::new(input, output).run()
}
