use crate::debug_log;
use crate::error::ParseError;
use crate::feedback::FeedbackEvent;
use crate::game_state::{GameInterface, UserAction, WelcomeInfo, parse_input};
use crate::wordbank::LOGO;
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;

const RULE_WIDTH: usize = 68;
const START_WORD_COLUMNS: usize = 5;
pub const DEFAULT_COLUMNS: u16 = 10;

/// Wordle Helper CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<PathBuf>,

    /// Path to a newline-delimited list of suggested starting words
    #[arg(short = 's', long = "start-words")]
    pub start_words_path: Option<PathBuf>,

    /// Words per row when listing candidates
    #[arg(
        short = 'c',
        long = "columns",
        default_value_t = DEFAULT_COLUMNS,
        value_parser = clap::value_parser!(u16).range(1..=40)
    )]
    pub columns: u16,

    /// Use the full-screen terminal interface
    #[arg(long)]
    pub tui: bool,

    /// Append log records to this file instead of stderr
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,

    /// Do not print the logo
    #[arg(long = "no-logo")]
    pub no_logo: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Lays `words` out `columns` per row, separated by single spaces.
#[must_use]
pub fn format_columns(words: &[String], columns: usize) -> String {
    words
        .chunks(columns.max(1))
        .map(|row| row.join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

fn heading(title: &str) -> String {
    format!("{title}\n{}", "-".repeat(title.len()))
}

/// Line-based front end: prompts on `writer`, reads lines from `reader`.
pub struct CliInterface<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    columns: usize,
    show_logo: bool,
}

impl<R: BufRead, W: Write> CliInterface<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            columns: usize::from(DEFAULT_COLUMNS),
            show_logo: true,
        }
    }

    #[must_use]
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns.max(1);
        self
    }

    #[must_use]
    pub fn with_logo(mut self, show_logo: bool) -> Self {
        self.show_logo = show_logo;
        self
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = writeln!(self.writer, "{text}") {
            debug_log!("CliInterface::emit() - write failed: {}", e);
        }
    }

    fn prompt(&mut self) {
        let result = write!(self.writer, "\nEnter Guess (<LETTER>:<COLOR>): ")
            .and_then(|()| self.writer.flush());
        if let Err(e) = result {
            debug_log!("CliInterface::prompt() - write failed: {}", e);
        }
    }

    fn print_logo(&mut self) {
        let rule = "-".repeat(RULE_WIDTH);
        self.emit(&rule);
        self.emit(LOGO.trim_end());
        self.emit(&format!("\n{rule}\n"));
    }
}

impl<R: BufRead, W: Write> GameInterface for CliInterface<R, W> {
    fn display_welcome(&mut self, info: &WelcomeInfo) {
        if self.show_logo {
            self.print_logo();
        }
        self.emit(&format!("Loaded {} words.", info.word_count));
        if !info.start_words.is_empty() {
            self.emit(&heading("Best Starting Words:"));
            self.emit(&format_columns(&info.start_words, START_WORD_COLUMNS));
        }
        self.emit("Enter feedback as <LETTER>:<COLOR> pairs (C=charcoal, Y=yellow, G=green),");
        self.emit("e.g. \"I:C R:Y A:G T:C E:Y\". Type 'ng' for a new game or 'exit' to quit.");
    }

    fn read_action(&mut self) -> Result<UserAction, ParseError> {
        self.prompt();
        let mut input = Vec::new();
        match self.reader.read_until(b'\n', &mut input) {
            Ok(0) => Ok(UserAction::Exit),
            // The whole line is consumed, so the next read starts clean.
            Ok(_) => match String::from_utf8(input) {
                Ok(line) => parse_input(&line),
                Err(_) => Err(ParseError::InvalidEncoding),
            },
            Err(e) => {
                debug_log!("CliInterface::read_action() - read failed: {}", e);
                Ok(UserAction::Exit)
            }
        }
    }

    fn display_parse_error(&mut self, error: &ParseError) {
        self.emit(&format!("Invalid feedback: {error}"));
    }

    fn display_feedback(&mut self, event: &FeedbackEvent) {
        self.emit(&format!("Guess: {event}"));
    }

    fn display_candidates(&mut self, candidates: &[String]) {
        self.emit(&heading(&format!("Valid Words ({}):", candidates.len())));
        if !candidates.is_empty() {
            let listing = format_columns(candidates, self.columns);
            self.emit(&listing);
        }
    }

    fn display_no_candidates_message(&mut self) {
        self.emit("No candidates remain. Check your inputs or type 'ng' for a new game.");
    }

    fn display_solution_found(&mut self, solution: &str) {
        self.emit(&format!("Solution found: {solution}"));
    }

    fn display_new_game_message(&mut self, word_count: usize) {
        self.emit(&format!("\nNew game started. Loaded {word_count} words."));
    }

    fn display_exit_message(&mut self) {
        self.emit("\nExiting.");
    }
}
