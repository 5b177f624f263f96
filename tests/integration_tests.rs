// Integration tests for the wordle-helper application
// These tests verify that all modules work together correctly

use std::io::Cursor;
use wordle_helper::cli::CliInterface;
use wordle_helper::wordbank::{EMBEDDED_WORDBANK, resolve_wordbank};
use wordle_helper::*;

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn play(wordbank: &[String], input: &str) -> (Session, String) {
    let mut session = Session::new(wordbank);
    let mut interface =
        CliInterface::new(Cursor::new(input.to_string()), Vec::new()).with_logo(false);
    game_loop(&mut session, &[], &mut interface);
    let output = String::from_utf8(interface.into_writer()).unwrap();
    (session, output)
}

#[test]
fn test_crane_slate_trace_round_trip() {
    // T absent, R correct@1, A correct@2, C absent, E present but not @4
    let event: FeedbackEvent = "T:C R:G A:G C:C E:Y".parse().unwrap();
    let mut state = ConstraintState::new();
    state.update(&event);

    let mut first = LetterSet::ALPHABET;
    first.remove('T');
    first.remove('C');
    let mut last = first;
    last.remove('E');
    assert_eq!(
        state.position_sets(),
        &[
            first,
            LetterSet::singleton('R'),
            LetterSet::singleton('A'),
            first,
            last
        ]
    );
    assert_eq!(state.required_chars(), "ARE".chars().collect::<LetterSet>());

    let mut filter = CandidateFilter::new(&words(&["CRANE", "SLATE", "TRACE"]));
    filter.update(&state);
    assert!(filter.candidates().is_empty());
}

#[test]
fn test_end_to_end_game_on_embedded_wordbank() {
    let wordbank = load_wordbank_from_str(EMBEDDED_WORDBANK);
    // Answer: BRAKE
    let input = "C:C R:G A:G N:C E:G\nB:G R:G A:G V:C E:G\nexit\n";
    let (session, output) = play(&wordbank, input);

    assert!(session.candidates().contains(&"BRAKE".to_string()));
    assert!(session.candidates().iter().all(|w| w.starts_with("BRA") && w.ends_with('E')));
    assert!(!session.candidates().contains(&"BRAVE".to_string()));
    assert_eq!(session.history().len(), 2);
    assert!(output.contains("Guess: BRAVE[GGGCG]"));
}

#[test]
fn test_lowercase_and_uppercase_games_agree() {
    let wordbank = load_wordbank_from_str(EMBEDDED_WORDBANK);
    let (upper, _) = play(&wordbank, "S:C L:C A:Y T:C E:Y\nR:G O:C U:C N:C D:C\n");
    let (lower, _) = play(&wordbank, "s:c l:c a:y t:c e:y\nr:g o:c u:c n:c d:c\n");
    assert_eq!(upper.constraints(), lower.constraints());
    assert_eq!(upper.candidates(), lower.candidates());
    assert!(!upper.candidates().is_empty());
}

#[test]
fn test_reset_restores_everything() {
    let wordbank = words(&["CRANE", "SLATE", "TRACE", "BRAKE"]);
    let (session, output) = play(&wordbank, "S:G L:G A:G T:G E:G\nng\n");
    assert!(output.contains("Solution found: SLATE"));
    assert!(output.contains("New game started. Loaded 4 words."));

    assert_eq!(session.candidates(), words(&["BRAKE", "CRANE", "SLATE", "TRACE"]).as_slice());
    assert_eq!(session.constraints(), &ConstraintState::new());
    assert!(session.history().is_empty());
}

#[test]
fn test_malformed_lines_never_mutate_state() {
    let wordbank = words(&["CRANE", "SLATE"]);
    let input = concat!(
        "ng ng\n",
        "A:G B:C C:C D:C\n",
        "AB:G B:C C:C D:C E:C\n",
        "A-G B:C C:C D:C E:C\n",
        "A:Z B:C C:C D:C E:C\n",
    );
    let (session, output) = play(&wordbank, input);
    assert_eq!(output.matches("Invalid feedback").count(), 5);
    assert_eq!(session.constraints(), &ConstraintState::new());
    assert_eq!(session.candidates().len(), 2);
}

#[test]
fn test_repeated_letter_guess_keeps_answer() {
    // Answer HOTEL, guess LEVEL: first E and first L absent, E@3 and L@4 correct.
    let wordbank = words(&["HOTEL", "LEVEL", "MOTEL", "REPEL", "HOVEL"]);
    let mut session = Session::new(&wordbank);
    let remaining = session.apply("L:C E:C V:C E:G L:G".parse().unwrap()).to_vec();
    assert_eq!(remaining, words(&["HOTEL", "MOTEL"]));
}

#[test]
fn test_custom_wordbank_file_to_game() {
    use std::fs::File;
    use std::io::Write;

    let path = std::env::temp_dir().join("wordle_helper_integration_wordbank.txt");
    {
        let mut file = File::create(&path).unwrap();
        writeln!(file, "apple").unwrap();
        writeln!(file, "grape").unwrap();
        writeln!(file, "lemon").unwrap();
        writeln!(file, "melon").unwrap();
        writeln!(file, "peach").unwrap();
    }

    let wordbank = resolve_wordbank(Some(path.as_path())).unwrap();
    assert_eq!(wordbank.len(), 5);

    let (session, output) = play(&wordbank, "M:Y E:G L:Y O:G N:G\n");
    assert_eq!(session.candidates(), words(&["LEMON"]).as_slice());
    assert!(output.contains("Solution found: LEMON"));

    std::fs::remove_file(&path).unwrap();
}
