use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::{
    Bindings, Expression,
    error::{Error, ProviderError},
    interpreter::provider::{Layered, PromptProvider},
    token::render,
};

/// How a [`Session`] evaluates each line.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Values used before any prompting happens.
    pub presets:      Bindings,
    /// Ask for variables missing from `presets` instead of failing.
    pub prompt:       bool,
    /// Print the postfix form of each expression before its result.
    pub show_postfix: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self { presets:      Bindings::new(),
               prompt:       true,
               show_postfix: false, }
    }
}

/// Counts of what a session has done so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Number of expressions evaluated, successful or not.
    pub evaluated: usize,
    /// Number of expressions that produced no result.
    pub failed:    usize,
}

/// Evaluates expressions one line at a time, writing `=> value` for each
/// success and the error message for each failure.
///
/// Prompts for unbound variables are answered from whichever reader is
/// passed as `answers`; for the interactive loop that is the same reader the
/// expressions come from.
///
/// # Example
/// ```
/// use std::io::Cursor;
///
/// use postfixer::session::{Session, SessionOptions};
///
/// let mut session = Session::new(SessionOptions::default());
/// let mut out = Vec::new();
/// let summary = session.run_repl(&mut Cursor::new("x + 5\n3\n1 / 0\nexit\n2 * 2\n"), &mut out)
///                      .unwrap();
///
/// assert_eq!(summary.evaluated, 2);
/// assert_eq!(summary.failed, 1);
/// assert_eq!(String::from_utf8(out).unwrap(),
///            "Enter the value of 'x': => 8\nError: division by zero\n");
/// ```
#[derive(Debug, Default)]
pub struct Session {
    options: SessionOptions,
    summary: Summary,
}

impl Session {
    #[must_use]
    pub const fn new(options: SessionOptions) -> Self {
        Self { options,
               summary: Summary { evaluated: 0,
                                  failed:    0, }, }
    }

    #[must_use]
    pub const fn summary(&self) -> Summary {
        self.summary
    }

    /// Evaluates one expression, reading prompt answers from `answers`.
    ///
    /// Returns the value, or `None` if the expression failed; the failure
    /// message has then already been written to `output`.
    ///
    /// # Errors
    /// Only I/O errors on `output` are returned.
    pub fn evaluate_line<R, W>(&mut self,
                               expression: &str,
                               answers: &mut R,
                               output: &mut W)
                               -> io::Result<Option<f64>>
        where R: BufRead,
              W: Write
    {
        self.summary.evaluated += 1;

        let parsed = match Expression::parse(expression) {
            Ok(parsed) => parsed,
            Err(error) => {
                self.report_failure(expression, &error.into(), output)?;
                return Ok(None);
            },
        };

        if self.options.show_postfix {
            writeln!(output, "postfix: {}", render(parsed.postfix()))?;
        }

        match self.evaluate_parsed(&parsed, answers, output) {
            Ok(value) => {
                writeln!(output, "=> {value}")?;
                Ok(Some(value))
            },
            Err(Error::Provider(ProviderError::Io(e))) => Err(e),
            Err(error) => {
                self.report_failure(expression, &error, output)?;
                Ok(None)
            },
        }
    }

    fn report_failure<W>(&mut self,
                         expression: &str,
                         error: &Error,
                         output: &mut W)
                         -> io::Result<()>
        where W: Write
    {
        debug!(expression, kind = ?error.kind(), "expression failed");
        self.summary.failed += 1;
        writeln!(output, "{error}")
    }

    fn evaluate_parsed<R, W>(&self,
                             parsed: &Expression,
                             answers: &mut R,
                             output: &mut W)
                             -> Result<f64, Error>
        where R: BufRead,
              W: Write
    {
        if self.options.prompt {
            let mut provider = Layered::new(&self.options.presets,
                                            PromptProvider::new(answers, &mut *output));
            parsed.evaluate(&mut provider)
        } else {
            parsed.evaluate(&mut self.options.presets.clone())
        }
    }

    /// Runs an interactive loop over `input`.
    ///
    /// Each line is an expression, except that blank lines are skipped and a
    /// line reading `exit` (in any case) ends the loop. Answers to variable
    /// prompts are read from `input` as well.
    ///
    /// # Errors
    /// Returns I/O errors from reading `input` or writing `output`.
    pub fn run_repl<R, W>(&mut self, input: &mut R, output: &mut W) -> io::Result<Summary>
        where R: BufRead,
              W: Write
    {
        let mut line = String::new();
        loop {
            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            let expression = line.trim();
            if expression.is_empty() {
                continue;
            }
            if expression.eq_ignore_ascii_case("exit") {
                info!("exit requested");
                break;
            }
            self.evaluate_line(expression, input, output)?;
        }
        Ok(self.summary)
    }

    /// Evaluates every line of a batch.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    ///
    /// # Errors
    /// Returns I/O errors from reading `answers` or writing `output`.
    pub fn run_batch<'a, I, R, W>(&mut self,
                                  lines: I,
                                  answers: &mut R,
                                  output: &mut W)
                                  -> io::Result<Summary>
        where I: IntoIterator<Item = &'a str>,
              R: BufRead,
              W: Write
    {
        for line in lines {
            let expression = line.trim();
            if expression.is_empty() || expression.starts_with('#') {
                continue;
            }
            self.evaluate_line(expression, answers, output)?;
        }
        info!(evaluated = self.summary.evaluated, failed = self.summary.failed, "batch done");
        Ok(self.summary)
    }
}
