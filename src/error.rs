use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Problems with a line of feedback typed by the user.
///
/// None of these touch the session state; the user is simply asked again.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected 5 <LETTER>:<MARK> tokens, found {found}")]
    WrongTokenCount { found: usize },

    #[error("token \"{0}\" is missing the ':' separator")]
    MissingSeparator(String),

    #[error("\"{0}\" is not a single letter A-Z")]
    InvalidLetter(String),

    #[error("unknown mark \"{0}\" (use C for charcoal, Y for yellow, G for green)")]
    UnknownMark(String),

    #[error("\"{0}\" is not a 5-letter guess")]
    InvalidGuess(String),

    #[error("input is not valid UTF-8")]
    InvalidEncoding,
}

/// Application-level failures surfaced by the binary.
#[derive(Debug, Error)]
pub enum HelperError {
    #[error("failed to load word list from '{}'", path.display())]
    WordList {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to open log file '{}'", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("logger already initialised")]
    Logger(#[from] log::SetLoggerError),

    #[error("terminal error")]
    Terminal(#[from] io::Error),
}
