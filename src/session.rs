// src/session.rs
// THE QUERY LOOP
// One line in, answers out, until "bye" or end of input.

use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::dispatcher::{Dispatcher, Outcome};
use crate::query::tokenize;

pub const WELCOME: &str = "Welcome to the information database!";
pub const PROMPT: &str = "Your query? ";
pub const FAREWELL: &str = "So long!";

pub struct QuerySession<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> QuerySession<'a> {
    pub fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Failed lookups are reported on `output` and the loop carries on.
    /// Only I/O errors end the session early.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> io::Result<()> {
        writeln!(output, "{}\n", WELCOME)?;

        let mut line = String::new();
        loop {
            writeln!(output)?;
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }

            match self.dispatcher.search(&tokenize(&line)) {
                Ok(Outcome::Terminate) => break,
                Ok(Outcome::Answers(answers)) => {
                    for answer in answers {
                        writeln!(output, "{}", answer)?;
                    }
                }
                Err(e) => {
                    warn!("lookup failed: {}", e);
                    writeln!(output, "Lookup failed: {}", e)?;
                }
            }
        }

        writeln!(output, "\n{}\n", FAREWELL)?;
        output.flush()
    }
}
