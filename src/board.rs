use crate::candidates::Candidates;
use crate::BLANK;
use std::fmt;

/// A `rows x columns` grid of letters and [`BLANK`]s.
///
/// Rows are written whole by the search, top to bottom. Every cell always holds a symbol; a new
/// board is entirely blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<Vec<char>>,
}

impl Board {
    /// An all-blank board. Panics on a zero dimension; `Designer::new` checks this first.
    pub fn new(rows: usize, columns: usize) -> Board {
        assert!(rows > 0 && columns > 0, "Board: zero dimension");
        Board {
            rows,
            columns,
            cells: vec![vec![BLANK; columns]; rows],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Overwrite row `row` with `line`, which must be exactly `columns` long.
    pub fn set_row(&mut self, row: usize, line: &[char]) {
        assert_eq!(
            line.len(),
            self.columns,
            "Board: line of length {} written into a row of length {}",
            line.len(),
            self.columns
        );
        self.cells[row].copy_from_slice(line);
    }

    pub fn blank_row(&mut self, row: usize) {
        self.cells[row].fill(BLANK);
    }

    pub fn get_row(&self, row: usize) -> &[char] {
        &self.cells[row]
    }

    pub fn column(&self, column: usize) -> Vec<char> {
        self.cells.iter().map(|row| row[column]).collect()
    }

    /// The run in `column` that is complete as of `row`, if any.
    ///
    /// Only looks at rows `0..=row`. If the cell at `row` is a letter and more rows follow, the
    /// run might continue downward, so the column yields nothing yet. Otherwise the run is the
    /// last non-blank stretch of the scanned column: the one that ended just above a blank at
    /// `row`, or that ends at `row` on the final row. Earlier runs in the column were already
    /// complete at an earlier row and are not repeated.
    pub fn column_runs_up_to(&self, column: usize, row: usize) -> Vec<String> {
        let is_final_row = row + 1 == self.rows;
        if !is_final_row && self.cells[row][column] != BLANK {
            return Vec::new();
        }

        let scanned = (0..=row).map(|i| self.cells[i][column]).collect::<Vec<_>>();
        let trailing = match scanned.last() {
            Some(&BLANK) => &scanned[..scanned.len() - 1],
            _ => &scanned[..],
        };
        let run = trailing
            .split(|ch| *ch == BLANK)
            .last()
            .unwrap_or(&[]);

        if run.len() > 1 {
            vec![run.iter().collect()]
        } else {
            Vec::new()
        }
    }

    /// [`Board::column_runs_up_to`] for every column, in column order.
    pub fn all_column_runs_up_to(&self, row: usize) -> Vec<String> {
        (0..self.columns)
            .flat_map(|column| self.column_runs_up_to(column, row))
            .collect()
    }

    /// Check that every column run completed at `row` is an available word, consuming one
    /// occurrence of each. Stops at the first run that isn't available; `candidates` is then
    /// partially consumed and should be discarded.
    pub fn reconcile_and_consume<C: Candidates>(&self, candidates: &mut C, row: usize) -> bool {
        for run in self.all_column_runs_up_to(row) {
            if !candidates.take(&run) {
                return false;
            }
        }
        true
    }

    /// Every maximal run of length > 1 on the finished board: all rows, then all columns.
    pub fn runs(&self) -> Vec<String> {
        let mut runs = Vec::new();
        for row in &self.cells {
            runs.extend(runs_in_line(row));
        }
        for column in 0..self.columns {
            runs.extend(runs_in_line(&self.column(column)));
        }
        runs
    }
}

fn runs_in_line(line: &[char]) -> impl Iterator<Item = String> + '_ {
    line.split(|ch| *ch == BLANK)
        .filter(|run| run.len() > 1)
        .map(|run| run.iter().collect())
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
fn board_from(lines: &[&str]) -> Board {
    let mut board = Board::new(lines.len(), lines[0].chars().count());
    for (i, line) in lines.iter().enumerate() {
        board.set_row(i, &line.chars().collect::<Vec<_>>());
    }
    board
}

#[test]
fn test_rows() {
    let mut board = Board::new(2, 3);
    assert_eq!(board.get_row(1), ['#', '#', '#']);
    board.set_row(1, &['a', '#', 'b']);
    assert_eq!(board.get_row(1), ['a', '#', 'b']);
    assert_eq!(board.column(2), ['#', 'b']);
    board.blank_row(1);
    assert_eq!(board.to_string(), "###\n###\n");
}

#[test]
#[should_panic]
fn test_short_row() {
    Board::new(2, 3).set_row(0, &['a', 'b']);
}

#[test]
fn test_column_runs_deferred() {
    let board = board_from(&["c#", "a#", "t#", "##"]);
    // The run in column 0 may still grow
    assert!(board.column_runs_up_to(0, 1).is_empty());
    assert!(board.column_runs_up_to(0, 2).is_empty());
    // ...until a blank ends it
    assert_eq!(board.column_runs_up_to(0, 3), ["cat"]);
    // Two blanks in a row complete nothing
    assert!(board.column_runs_up_to(1, 3).is_empty());
}

#[test]
fn test_column_runs_final_row() {
    let board = board_from(&["a#", "#t", "to", "oe"]);
    assert_eq!(board.column_runs_up_to(0, 3), ["to"]);
    assert_eq!(board.column_runs_up_to(1, 3), ["toe"]);
    assert_eq!(board.all_column_runs_up_to(3), ["to", "toe"]);
    // The single letters above are not runs
    assert!(board.all_column_runs_up_to(1).is_empty());
}

#[test]
fn test_column_runs_only_new() {
    // Runs completed at earlier rows are not yielded again: row 5 gives "be" but not "at".
    let board = board_from(&["a", "t", "#", "b", "e", "#"]);
    assert_eq!(board.column_runs_up_to(0, 2), ["at"]);
    assert_eq!(board.column_runs_up_to(0, 5), ["be"]);
}

#[test]
fn test_column_runs_never_single() {
    let board = board_from(&["a#a", "#b#", "c#c"]);
    for row in 0..3 {
        for run in board.all_column_runs_up_to(row) {
            assert!(run.chars().count() > 1);
        }
    }
}

#[test]
fn test_reconcile() {
    use crate::candidates::WordBag;

    let board = board_from(&["at#", "#to", "###"]);

    let mut bag = WordBag::new(["to", "at", "zoo"]);
    // Nothing is complete before the blank row
    assert!(board.reconcile_and_consume(&mut bag, 1));
    assert_eq!(bag.len(), 3);

    // Column 1 spells "tt", which isn't available
    assert!(!board.reconcile_and_consume(&mut bag, 2));

    let board = board_from(&["at#", "#o#", "###"]);
    let mut bag = WordBag::new(["to", "at", "zoo"]);
    assert!(board.reconcile_and_consume(&mut bag, 2));
    assert_eq!(bag.to_vec(), ["at", "zoo"]);
}

#[test]
fn test_reconcile_order_independent() {
    use crate::candidates::WordBag;

    let board = board_from(&["ta", "oh", "##"]);
    let runs = board.all_column_runs_up_to(2);
    assert_eq!(runs, ["to", "ah"]);

    let mut forward = WordBag::new(["ah", "to", "to"]);
    let mut backward = forward.clone();
    for run in &runs {
        assert!(forward.take(run));
    }
    for run in runs.iter().rev() {
        assert!(backward.take(run));
    }
    assert_eq!(forward, backward);

    let mut bag = WordBag::new(["ah", "to", "to"]);
    assert!(board.reconcile_and_consume(&mut bag, 2));
    assert_eq!(bag, forward);
}

#[test]
fn test_board_runs() {
    let board = board_from(&["cat#", "a#ox", "b#we"]);
    assert_eq!(board.runs(), ["cat", "ox", "we", "cab", "tow", "xe"]);
}
