use std::io;

#[derive(Debug)]
/// Represents the errors that abort evaluation.
///
/// The language reports type, name and range problems as diagnostics, so the
/// only fatal failures left are on the interpreter's I/O streams.
pub enum RuntimeError {
    /// Writing program output failed.
    Output {
        /// The underlying I/O error.
        source: io::Error,
        /// The source line of the statement that was writing.
        line:   usize,
    },
    /// Reading a line for `input` failed.
    Input {
        /// The underlying I/O error.
        source: io::Error,
        /// The source line of the `input` call.
        line:   usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Output { source, line } => {
                write!(f, "Error on line {line}: Failed to write output: {source}.")
            },
            Self::Input { source, line } => {
                write!(f, "Error on line {line}: Failed to read input: {source}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Output { source, .. } | Self::Input { source, .. } => Some(source),
        }
    }
}
