use lineq_error::Error as EquationError;
use rustyline::error::ReadlineError;

/// Utility enum to package errors that can occur while playing.
#[derive(Debug)]
pub enum Error {
    /// An equation could not be parsed, generated, or solved.
    Equation(EquationError),

    /// The line editor failed to read a line.
    Readline(ReadlineError),
}

impl Error {
    /// Report this error to stderr, using `input` as the source of the equation.
    pub fn report_to_stderr(&self, input: &str) {
        match self {
            Self::Equation(err) => {
                if let Err(io_err) = err.report_to_stderr(input) {
                    log::error!("could not print the error report: {}", io_err);
                }
            },
            Self::Readline(err) => eprintln!("{}", err),
        }
    }
}

impl From<EquationError> for Error {
    fn from(err: EquationError) -> Self {
        Self::Equation(err)
    }
}

impl From<ReadlineError> for Error {
    fn from(err: ReadlineError) -> Self {
        Self::Readline(err)
    }
}
