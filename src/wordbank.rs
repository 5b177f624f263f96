use crate::WORD_LENGTH;
use crate::error::HelperError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");
pub const EMBEDDED_START_WORDS: &str = include_str!("resources/start_words.txt");
pub const LOGO: &str = include_str!("resources/logo.txt");

const APP_DIR: &str = "wordle-helper";

/// Trimmed and uppercased, or `None` for blanks, comments and anything but
/// five ASCII letters.
pub(crate) fn normalise(line: &str) -> Option<String> {
    let word = line.trim();
    if word.is_empty() || word.starts_with('#') {
        return None;
    }
    let word = word.to_uppercase();
    (word.len() == WORD_LENGTH && word.chars().all(|c| c.is_ascii_alphabetic())).then_some(word)
}

fn finish(mut words: Vec<String>) -> Vec<String> {
    words.sort();
    words.dedup();
    words
}

/// Uppercased, sorted, deduplicated five-letter words; anything else is skipped.
#[must_use]
pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    finish(data.lines().filter_map(normalise).collect())
}

/// File counterpart of [`load_wordbank_from_str`].
///
/// # Errors
/// Returns [`HelperError::WordList`] if the file cannot be opened or read.
pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, HelperError> {
    let path = path.as_ref();
    let to_error = |source| HelperError::WordList {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(to_error)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = normalise(&line.map_err(to_error)?) {
            words.push(word);
        }
    }
    Ok(finish(words))
}

/// `<data dir>/wordle-helper/words.txt`, the optional per-user word list.
#[must_use]
pub fn get_user_wordbank_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_DIR).join("words.txt"))
}

/// `<cache dir>/wordle-helper/wordle-helper.log`, or the same under the
/// temp dir when the platform has no cache dir.
#[must_use]
pub fn get_default_log_path() -> PathBuf {
    log_path_under(dirs::cache_dir())
}

fn log_path_under(cache_dir: Option<PathBuf>) -> PathBuf {
    cache_dir
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR)
        .join("wordle-helper.log")
}

/// Picks the word list: an explicit path, then the user's list if present,
/// then the embedded one.
///
/// # Errors
/// Propagates read failures of whichever file was chosen.
pub fn resolve_wordbank(explicit: Option<&Path>) -> Result<Vec<String>, HelperError> {
    if let Some(path) = explicit {
        return load_wordbank_from_file(path);
    }
    if let Some(path) = get_user_wordbank_path()
        && path.is_file()
    {
        return load_wordbank_from_file(path);
    }
    Ok(load_wordbank_from_str(EMBEDDED_WORDBANK))
}

/// Starting-word suggestions, from `explicit` or the embedded list.
///
/// # Errors
/// Propagates read failures of the explicit file.
pub fn resolve_start_words(explicit: Option<&Path>) -> Result<Vec<String>, HelperError> {
    match explicit {
        Some(path) => load_wordbank_from_file(path),
        None => Ok(load_wordbank_from_str(EMBEDDED_START_WORDS)),
    }
}
