//! The interactive lesson: prompt, run an operation, print what happened.
//!
//! Operation failures never escape this module. Each one is matched at its
//! call site, printed, tallied, and the session moves on to the next section.
//! Only failures of the terminal itself surface as `io::Error`.

use crate::array_gen::squares;
use crate::calculator::divide;
use crate::error::LessonError;
use crate::file_round_trip::{process_file, PAYLOAD};
use crate::math_ops::{factorial, fibonacci};
use colored::Colorize;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use tracing::{info, warn};

/// Outcome counts for one session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub succeeded: u32,
    pub failed: u32,
    pub skipped: u32,
}

#[derive(Debug, Clone, Copy)]
enum Tone {
    Success,
    Failure,
    Skip,
}

pub struct Shell<R, W> {
    input: R,
    output: W,
    color: bool,
    summary: SessionSummary,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input,
            output,
            color,
            summary: SessionSummary::default(),
        }
    }

    /// Run all four sections in order and print the summary line.
    pub fn run(mut self) -> io::Result<SessionSummary> {
        writeln!(self.output, "{}", self.banner())?;

        self.math_section()?;
        self.division_section()?;
        self.array_section()?;
        self.file_section()?;

        let SessionSummary {
            succeeded,
            failed,
            skipped,
        } = self.summary;
        writeln!(
            self.output,
            "\nSummary: {succeeded} succeeded, {failed} failed, {skipped} skipped"
        )?;
        self.output.flush()?;
        Ok(self.summary)
    }

    fn banner(&self) -> String {
        let title = "=== Error Handling Basics ===";
        if self.color {
            title.bold().to_string()
        } else {
            title.to_string()
        }
    }

    fn math_section(&mut self) -> io::Result<()> {
        info!(section = "math", "starting section");
        let Some(n) = self.read_number::<i64>("\nEnter a number for factorial and Fibonacci: ")?
        else {
            return Ok(());
        };

        self.report("Factorial", factorial(n), |value| format!("Factorial of {n}: {value}"))?;
        self.report("Fibonacci", fibonacci(n), |value| format!("Fibonacci of {n}: {value}"))
    }

    fn division_section(&mut self) -> io::Result<()> {
        info!(section = "division", "starting section");
        let Some(a) = self.read_number::<f64>("\nEnter the numerator: ")? else {
            return Ok(());
        };
        let Some(b) = self.read_number::<f64>("Enter the denominator: ")? else {
            return Ok(());
        };

        self.report("Division", divide(a, b), |value| format!("{a} / {b} = {value}"))
    }

    fn array_section(&mut self) -> io::Result<()> {
        info!(section = "array", "starting section");
        let Some(size) = self.read_number::<i64>("\nEnter the array size: ")? else {
            return Ok(());
        };

        self.report("Array", squares(size), |values| {
            format!("Squares: {}", join(&values))
        })
    }

    fn file_section(&mut self) -> io::Result<()> {
        info!(section = "file", "starting section");
        let path = self.prompt("\nEnter a file path to write: ")?;

        match process_file(&path) {
            Ok(Some(read)) => {
                self.summary.succeeded += 1;
                let text = format!("Wrote:\n{PAYLOAD}\nRead back:\n{read}");
                self.say(&text, Tone::Success)
            }
            Ok(None) => {
                self.summary.skipped += 1;
                self.say("No path given, file round trip skipped", Tone::Skip)
            }
            Err(err) => self.fail("File", &err),
        }
    }

    fn report<T>(
        &mut self,
        label: &str,
        result: Result<T, LessonError>,
        render: impl FnOnce(T) -> String,
    ) -> io::Result<()> {
        match result {
            Ok(value) => {
                self.summary.succeeded += 1;
                let text = render(value);
                self.say(&text, Tone::Success)
            }
            Err(err) => self.fail(label, &err),
        }
    }

    fn fail(&mut self, label: &str, err: &LessonError) -> io::Result<()> {
        self.summary.failed += 1;
        warn!(operation = label, kind = ?err.kind(), error = %err, "operation failed");
        let text = format!("{label} error: {err}");
        self.say(&text, Tone::Failure)
    }

    /// Prompt and parse one value. Unparsable input is reported and counted
    /// as a skipped section, signalled by `Ok(None)`.
    fn read_number<T>(&mut self, prompt: &str) -> io::Result<Option<T>>
    where
        T: FromStr,
        T::Err: Display,
    {
        let raw = self.prompt(prompt)?;
        match raw.parse::<T>() {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                self.summary.skipped += 1;
                let text = format!("Invalid input '{raw}' ({err}), section skipped");
                self.say(&text, Tone::Skip)?;
                Ok(None)
            }
        }
    }

    /// End of input reads as an empty line.
    fn prompt(&mut self, text: &str) -> io::Result<String> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    fn say(&mut self, text: &str, tone: Tone) -> io::Result<()> {
        let line = if self.color {
            match tone {
                Tone::Success => text.green().to_string(),
                Tone::Failure => text.red().to_string(),
                Tone::Skip => text.yellow().to_string(),
            }
        } else {
            text.to_string()
        };
        writeln!(self.output, "{line}")
    }
}

fn join(values: &[i64]) -> String {
    values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
