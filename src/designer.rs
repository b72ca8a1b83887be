use crate::board::Board;
use crate::candidates::{Candidates, MarkedBag};
use crate::error::InputError;
use crate::placement::generate_placements;
use crate::{Config, BLANK};
use log::{debug, info, trace};
use std::time::Instant;

/// The outcome of a design attempt that got to search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Design {
    /// Every word was placed, and every run on the board is one of the words.
    Solved(Board),
    /// The whole search space was explored without finding a board.
    Unsolvable,
    /// `Config::step_limit` ran out before the search finished.
    GaveUp { steps: u64 },
}

/// Places words into a board one row at a time, backtracking when a column spells something
/// that isn't an available word.
pub struct Designer {
    board: Board,
    config: Config,
    steps: u64,
    gave_up: bool,
}

impl Designer {
    /// A designer for an all-blank `rows x columns` board.
    pub fn new(rows: usize, columns: usize) -> Result<Designer, InputError> {
        if rows == 0 || columns == 0 {
            return Err(InputError::ZeroDimension { rows, columns });
        }
        Ok(Designer {
            board: Board::new(rows, columns),
            config: Config::default(),
            steps: 0,
            gave_up: false,
        })
    }

    pub fn config(&mut self) -> &mut Config {
        &mut self.config
    }

    /// The board as last written. Only meaningful after a `Design::Solved`.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The number of search nodes visited by the last design.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Design a board that uses every word in `words` (a multiset: repeats must each be placed).
    pub fn design<S: AsRef<str>>(&mut self, words: &[S]) -> Result<Design, InputError> {
        self.design_with(MarkedBag::new(words.iter().map(|w| w.as_ref().to_owned())))
    }

    /// Like `design`, with a caller-chosen multiset representation.
    pub fn design_with<C: Candidates>(&mut self, candidates: C) -> Result<Design, InputError> {
        validate_words(&candidates)?;

        let start_time = Instant::now();
        self.board = Board::new(self.board.rows(), self.board.columns());
        let solved = self.solve(candidates, 0);
        if self.config.log_elapsed {
            info!(
                "Searched {} steps in {}ms",
                self.steps,
                start_time.elapsed().as_millis()
            );
        }

        Ok(if solved {
            Design::Solved(self.board.clone())
        } else if self.gave_up {
            Design::GaveUp { steps: self.steps }
        } else {
            Design::Unsolvable
        })
    }

    /// Fill rows `row..` so that every word in `remaining` gets placed. Returns false if there's
    /// no way to do so given the rows above. On success the board holds the solution.
    ///
    /// Starts a fresh step count, so a limit hit by an earlier search doesn't carry over. A `row`
    /// past the bottom of the board behaves like the bottom.
    pub fn solve<C: Candidates>(&mut self, remaining: C, row: usize) -> bool {
        self.steps = 0;
        self.gave_up = false;
        self.search(remaining, row.min(self.board.rows()))
    }

    fn search<C: Candidates>(&mut self, remaining: C, row: usize) -> bool {
        if self.out_of_steps() {
            return false;
        }
        if self.config.log_steps {
            trace!("Row {:3}, words left = {:?}", row, remaining);
        }

        if row >= self.board.rows() {
            return remaining.is_empty();
        }
        if remaining.is_empty() {
            return self.skip_row(remaining, row);
        }

        let columns = self.board.columns();
        for i in 0..remaining.len() {
            let rest = remaining.without(i);
            for line in generate_placements(remaining.word(i), columns) {
                self.board.set_row(row, &line);
                let mut rest = rest.clone();
                if self.board.reconcile_and_consume(&mut rest, row) {
                    self.log_state(row);
                    if self.search(rest, row + 1) {
                        return true;
                    }
                    if self.gave_up {
                        return false;
                    }
                }
            }
        }

        self.skip_row(remaining, row)
    }

    /// Leave `row` blank, which may still complete column runs above it.
    fn skip_row<C: Candidates>(&mut self, mut remaining: C, row: usize) -> bool {
        self.board.blank_row(row);
        if !self.board.reconcile_and_consume(&mut remaining, row) {
            return false;
        }
        self.log_state(row);
        self.search(remaining, row + 1)
    }

    fn out_of_steps(&mut self) -> bool {
        if self.gave_up {
            return true;
        }
        self.steps += 1;
        if let Some(limit) = self.config.step_limit {
            if self.steps > limit {
                debug!("Giving up after {} steps", limit);
                self.gave_up = true;
            }
        }
        self.gave_up
    }

    fn log_state(&self, row: usize) {
        if self.config.log_states {
            let rows = (0..=row)
                .map(|i| self.board.get_row(i).iter().collect::<String>())
                .collect::<Vec<_>>();
            debug!("Accepted row {}:\n{}", row, rows.join("\n"));
        }
    }
}

fn validate_words<C: Candidates>(candidates: &C) -> Result<(), InputError> {
    for (index, word) in candidates.to_vec().into_iter().enumerate() {
        if word.is_empty() {
            return Err(InputError::EmptyWord { index });
        }
        if word.contains(BLANK) {
            return Err(InputError::BlankInWord { word, blank: BLANK });
        }
    }
    Ok(())
}

#[cfg(test)]
fn rows_of(board: &Board) -> Vec<String> {
    (0..board.rows())
        .map(|i| board.get_row(i).iter().collect())
        .collect()
}

#[cfg(test)]
fn solved(design: Design) -> Vec<String> {
    match design {
        Design::Solved(board) => rows_of(&board),
        other => panic!("expected a solution, got {:?}", other),
    }
}

#[test]
fn test_single_word() {
    let mut designer = Designer::new(3, 3).unwrap();
    let rows = solved(designer.design(&["cat"]).unwrap());
    assert_eq!(rows, ["cat", "###", "###"]);
}

#[test]
fn test_empty_board() {
    let mut designer = Designer::new(1, 1).unwrap();
    let rows = solved(designer.design::<&str>(&[]).unwrap());
    assert_eq!(rows, ["#"]);
}

#[test]
fn test_word_fills_row() {
    let mut designer = Designer::new(2, 4).unwrap();
    let rows = solved(designer.design(&["tree"]).unwrap());
    assert_eq!(rows, ["tree", "####"]);
}

#[test]
fn test_leftover_words_fail() {
    // Two words, but the only place for the second would spell "cc", "aa" and "tt" down the
    // columns.
    let mut designer = Designer::new(2, 3).unwrap();
    assert_eq!(designer.design(&["cat", "cat"]).unwrap(), Design::Unsolvable);

    // No word fits at all
    let mut designer = Designer::new(2, 2).unwrap();
    assert_eq!(designer.design(&["cat"]).unwrap(), Design::Unsolvable);
}

#[test]
fn test_skips_rows() {
    let mut designer = Designer::new(3, 3).unwrap();
    let rows = solved(designer.design(&["cat", "cot"]).unwrap());
    assert_eq!(rows, ["cat", "###", "cot"]);
}

#[test]
fn test_crossing_words() {
    // A word square: the columns spell the rows again
    let mut designer = Designer::new(2, 2).unwrap();
    let rows = solved(designer.design(&["at", "to", "at", "to"]).unwrap());
    assert_eq!(rows, ["at", "to"]);

    // Same square, but the columns only end at the blank last row
    let mut designer = Designer::new(3, 2).unwrap();
    let rows = solved(designer.design(&["at", "to", "at", "to"]).unwrap());
    assert_eq!(rows, ["at", "to", "##"]);

    // Without the crossing words, the rows can't sit next to each other
    let mut designer = Designer::new(2, 2).unwrap();
    assert_eq!(designer.design(&["at", "to"]).unwrap(), Design::Unsolvable);
}

#[test]
fn test_invalid_input() {
    assert_eq!(
        Designer::new(0, 3).err(),
        Some(InputError::ZeroDimension { rows: 0, columns: 3 })
    );

    let mut designer = Designer::new(3, 3).unwrap();
    assert_eq!(
        designer.design(&["cat", ""]),
        Err(InputError::EmptyWord { index: 1 })
    );
    assert_eq!(
        designer.design(&["c#t"]),
        Err(InputError::BlankInWord {
            word: "c#t".to_owned(),
            blank: BLANK
        })
    );
}

#[test]
fn test_step_limit() {
    let mut designer = Designer::new(4, 4).unwrap();
    designer.config().step_limit = Some(5);
    let design = designer.design(&["abc", "bcd", "cde", "def", "efg"]).unwrap();
    assert!(matches!(design, Design::GaveUp { .. }));

    designer.config().step_limit = None;
    let design = designer.design(&["cat"]).unwrap();
    assert!(matches!(design, Design::Solved(_)));
}

#[test]
fn test_solve_after_giving_up() {
    use crate::candidates::WordBag;

    let mut designer = Designer::new(4, 4).unwrap();
    designer.config().step_limit = Some(5);
    let design = designer.design(&["abc", "bcd", "cde", "def", "efg"]).unwrap();
    assert!(matches!(design, Design::GaveUp { .. }));

    designer.config().step_limit = None;
    assert!(designer.solve(WordBag::new(["cat"]), 0));
    assert_eq!(rows_of(designer.board())[0], "cat#");
}

#[test]
fn test_solve_past_last_row() {
    use crate::candidates::WordBag;

    let mut designer = Designer::new(2, 2).unwrap();
    assert!(!designer.solve(WordBag::new(["at"]), 3));
    assert!(designer.solve(WordBag::default(), 3));
}

#[test]
fn test_bags_design_alike() {
    use crate::candidates::WordBag;

    let cases: &[(usize, usize, &[&str])] = &[
        (3, 3, &["cat", "cot"]),
        (2, 2, &["at", "to", "at", "to"]),
        (3, 2, &["at", "to", "at", "to"]),
        (2, 3, &["cat", "cat"]),
        (4, 4, &["to", "on", "no", "ox", "so"]),
    ];
    for (rows, columns, words) in cases {
        let mut designer = Designer::new(*rows, *columns).unwrap();
        let copied = designer.design_with(WordBag::new(words.iter().copied()));
        let copied_steps = designer.steps();
        let marked = designer.design_with(MarkedBag::new(words.iter().copied()));
        assert_eq!(copied, marked);
        assert_eq!(copied_steps, designer.steps());
    }
}
