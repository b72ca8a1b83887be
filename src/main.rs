//! Pick random words from a word list and design a crossword board that uses all of them.

use argh::FromArgs;
use crossword_designer::lexicon::Lexicon;
use crossword_designer::render::Columns;
use crossword_designer::{Design, Designer, LexiconError};
use log::{error, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::process::ExitCode;
use std::time::Instant;

const OUTPUT_WIDTH: usize = 90;

/// Step limit for each attempt when several run and `--step-limit` isn't given. The first
/// successful attempt is only reported once every lower-numbered attempt has finished, so none
/// of them may search forever.
const DEFAULT_ATTEMPT_STEP_LIMIT: u64 = 1_000_000;

/// crossword designer
#[derive(Debug, Clone, FromArgs)]
struct Options {
    /// the word source to draw words from
    #[argh(positional)]
    filename: String,

    /// read the word source as a lemma list (`sort-order frequency word part-of-speech`)
    #[argh(switch, long = "lemmas")]
    lemmas: bool,

    /// number of rows on the board
    #[argh(option, long = "rows", default = "15")]
    rows: usize,

    /// number of columns on the board
    #[argh(option, long = "columns", default = "15")]
    columns: usize,

    /// number of words to place
    #[argh(option, short = 'k', long = "words", default = "10")]
    words: usize,

    /// seed for the random word selection
    #[argh(option, long = "seed", default = "0")]
    seed: u64,

    /// number of word selections to try, in parallel; the lowest-numbered success is reported
    #[argh(option, long = "attempts", default = "1")]
    attempts: u64,

    /// give up on a selection after this many search steps (default: unlimited for a single
    /// attempt, 1000000 per attempt otherwise)
    #[argh(option, long = "step-limit")]
    step_limit: Option<u64>,

    /// don't log anything besides the solution
    #[argh(switch, short = 'q', long = "quiet")]
    quiet: bool,

    /// log every search step (very verbose; needs RUST_LOG=trace)
    #[argh(switch, long = "log-steps")]
    log_steps: bool,

    /// log the board each time a row is accepted (needs RUST_LOG=debug)
    #[argh(switch, long = "log-states")]
    log_states: bool,

    /// log how long each search took
    #[argh(switch, long = "log-elapsed")]
    log_elapsed: bool,
}

fn load(options: &Options) -> Result<Lexicon, LexiconError> {
    if options.lemmas {
        Lexicon::load_lemmas(&options.filename)
    } else {
        Lexicon::load_word_list(&options.filename)
    }
}

fn step_limit(options: &Options) -> Option<u64> {
    match options.step_limit {
        Some(limit) => Some(limit),
        None if options.attempts > 1 => Some(DEFAULT_ATTEMPT_STEP_LIMIT),
        None => None,
    }
}

/// Draw a word multiset for attempt number `index` and search for a board. Returns the words and
/// the board on success.
fn attempt(options: &Options, lexicon: &Lexicon, index: u64) -> Option<(Vec<String>, Design)> {
    let mut rng = StdRng::seed_from_u64(options.seed.wrapping_add(index));
    let words = lexicon.choose(options.words, &mut rng);

    let mut designer = match Designer::new(options.rows, options.columns) {
        Ok(designer) => designer,
        Err(err) => {
            error!("{}", err);
            return None;
        }
    };
    if !options.quiet {
        designer.config().log_steps = options.log_steps;
        designer.config().log_states = options.log_states;
        designer.config().log_elapsed = options.log_elapsed;
    }
    designer.config().step_limit = step_limit(options);

    match designer.design(&words) {
        Ok(design @ Design::Solved(_)) => Some((words, design)),
        Ok(Design::Unsolvable) => {
            info!("Attempt {}: no board for {:?}", index, words);
            None
        }
        Ok(Design::GaveUp { steps }) => {
            info!("Attempt {}: gave up after {} steps on {:?}", index, steps, words);
            None
        }
        Err(err) => {
            error!("Attempt {}: {}", index, err);
            None
        }
    }
}

fn main() -> ExitCode {
    let options = argh::from_env::<Options>();

    let default_level = if options.quiet { "warn" } else { "info" };
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_level),
    )
    .format_timestamp(None)
    .try_init();

    if let Err(err) = Designer::new(options.rows, options.columns) {
        error!("{}", err);
        return ExitCode::from(1);
    }

    let lexicon = match load(&options) {
        Ok(lexicon) => lexicon.fitting(options.rows.max(options.columns)),
        Err(err) => {
            error!("{}", err);
            return ExitCode::from(1);
        }
    };
    if lexicon.is_empty() && options.words > 0 {
        error!("No usable words in {}", options.filename);
        return ExitCode::from(1);
    }
    info!(
        "Using board size {}x{} and {} words, from {} candidates.",
        options.rows,
        options.columns,
        options.words,
        lexicon.len()
    );

    let start_time = Instant::now();
    let found = (0..options.attempts.max(1))
        .into_par_iter()
        .find_map_first(|i| attempt(&options, &lexicon, i));
    if options.log_elapsed && !options.quiet {
        info!("Total time: {}ms", start_time.elapsed().as_millis());
    }

    match found {
        Some((words, Design::Solved(board))) => {
            let mut columns = Columns::new(OUTPUT_WIDTH);
            columns.push_board(&board);
            columns.push_list("Words", &words[..]);
            print!("{}", columns);

            let mut runs = board.runs();
            let mut expected = words.clone();
            runs.sort();
            expected.sort();
            if runs != expected {
                warn!("Board spells {:?}, but the words were {:?}", runs, expected);
            }
            ExitCode::SUCCESS
        }
        _ => {
            println!("No board could be designed.");
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
fn options(args: &[&str]) -> Options {
    match Options::from_args(&["crossword_designer"], args) {
        Ok(options) => options,
        Err(early_exit) => panic!("{}", early_exit.output),
    }
}

#[test]
fn test_step_limit_defaults() {
    assert_eq!(step_limit(&options(&["words.txt"])), None);
    assert_eq!(
        step_limit(&options(&["words.txt", "--attempts", "4"])),
        Some(DEFAULT_ATTEMPT_STEP_LIMIT)
    );
    assert_eq!(
        step_limit(&options(&["words.txt", "--attempts", "4", "--step-limit", "50"])),
        Some(50)
    );
    assert_eq!(
        step_limit(&options(&["words.txt", "--step-limit", "50"])),
        Some(50)
    );
}
