//! Design crossword-style letter grids from a multiset of words.
//!
//! Given an `R x C` board and a multiset of words, the designer writes one word (or nothing)
//! into each row, so that every word gets used exactly once and every run of two or more
//! letters, across or down, is one of the words. Single letters don't count as words.
//!
//! The search goes row by row. Each row is tried with every remaining word at every offset,
//! and then left blank. Whenever a row completes some run down a column, that run must be one
//! of the words still available, and it uses that word up. Branches where this fails are
//! abandoned immediately.
//!
//! ## Designing a board
//!
//! ```
//! use crossword_designer::{Design, Designer};
//!
//! let mut designer = Designer::new(3, 2).unwrap();
//! let design = designer.design(&["at", "to", "at", "to"]).unwrap();
//!
//! match design {
//!     Design::Solved(board) => {
//!         assert_eq!(board.to_string(), "at\nto\n##\n");
//!         // Every run on the board, across and down
//!         assert_eq!(board.runs(), ["at", "to", "at", "to"]);
//!     }
//!     _ => panic!("no board could be designed"),
//! }
//! ```
//!
//! Blank cells are shown as [`BLANK`]. Words may not contain it:
//!
//! ```
//! use crossword_designer::{Designer, InputError};
//!
//! let mut designer = Designer::new(3, 3).unwrap();
//! assert!(matches!(
//!     designer.design(&["a#b"]),
//!     Err(InputError::BlankInWord { .. })
//! ));
//! ```
//!
//! A search can't always succeed. That isn't an error, just an `Unsolvable` design:
//!
//! ```
//! use crossword_designer::{Design, Designer};
//!
//! // Neither word fits in a 2x2 board
//! let mut designer = Designer::new(2, 2).unwrap();
//! assert_eq!(designer.design(&["cat", "dog"]).unwrap(), Design::Unsolvable);
//! ```
//!
//! Searches can take a very long time. To bound them, set a step limit:
//!
//! ```
//! use crossword_designer::{Design, Designer};
//!
//! let mut designer = Designer::new(6, 6).unwrap();
//! designer.config().step_limit = Some(1000);
//! let design = designer.design(&["tree", "tee", "rue", "eel", "let", "lee", "ere"]).unwrap();
//! assert!(matches!(design, Design::Solved(_) | Design::GaveUp { .. } | Design::Unsolvable));
//! ```

mod board;
mod candidates;
mod designer;
mod error;
mod placement;

pub mod lexicon;
pub mod render;

pub use board::Board;
pub use candidates::{Candidates, MarkedBag, WordBag};
pub use designer::{Design, Designer};
pub use error::{InputError, LexiconError};
pub use placement::generate_placements;

/// The symbol for a cell with no letter in it.
pub const BLANK: char = '#';

/************************
 *     Config           *
 ************************/

// When running `main`, this is loaded from command line args.
// See `Options` in `main.rs`.
/// Configuration options. Set these using `Designer::config()`.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Log every search step (at `trace` level)
    pub log_steps: bool,
    /// Log the board each time a row is accepted (at `debug` level)
    pub log_states: bool,
    /// Log how long the search took
    pub log_elapsed: bool,
    /// Give up after visiting this many search steps
    pub step_limit: Option<u64>,
}
