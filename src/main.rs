use std::error::Error as _;
use std::io;
use std::process::ExitCode;
use wordle_helper::cli::{Cli, CliInterface, parse_cli};
use wordle_helper::error::HelperError;
use wordle_helper::game_state::{Session, game_loop};
use wordle_helper::logging::init_logger;
use wordle_helper::tui::TuiInterface;
use wordle_helper::wordbank::{get_default_log_path, resolve_start_words, resolve_wordbank};

fn run(cli: &Cli) -> Result<(), HelperError> {
    let log_file = match (&cli.log_file, cli.tui) {
        (Some(path), _) => Some(path.clone()),
        (None, true) => Some(get_default_log_path()),
        (None, false) => None,
    };
    init_logger(log_file.as_deref())?;

    let wordbank = resolve_wordbank(cli.wordbank_path.as_deref())?;
    let start_words = resolve_start_words(cli.start_words_path.as_deref())?;
    log::info!(
        "loaded {} words and {} starting words",
        wordbank.len(),
        start_words.len()
    );

    let mut session = Session::new(&wordbank);
    let columns = usize::from(cli.columns);
    if cli.tui {
        let mut interface = TuiInterface::new(columns)?;
        game_loop(&mut session, &start_words, &mut interface);
    } else {
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock(), io::stdout())
            .with_columns(columns)
            .with_logo(!cli.no_logo);
        game_loop(&mut session, &start_words, &mut interface);
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = parse_cli();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:?}");
            eprintln!("Error: {e}");
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}
