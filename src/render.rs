//! Lay out boards and word lists side by side.

use crate::board::Board;
use std::fmt;

const PADDING: usize = 4;

/// Blocks placed left to right while they fit within `max_width` columns. A block that would
/// overflow starts a new band below.
pub struct Columns {
    max_width: usize,
    blocks: Vec<Block>,
}

struct Block {
    lines: Vec<String>,
    width: usize,
}

impl Block {
    fn new(lines: Vec<String>) -> Block {
        let width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
        Block { lines, width }
    }
}

impl Columns {
    pub fn new(max_width: usize) -> Columns {
        Columns {
            max_width,
            blocks: Vec::new(),
        }
    }

    /// The board framed by a border, blanks included.
    pub fn push_board(&mut self, board: &Board) {
        let border = format!("+{}+", "-".repeat(board.columns()));
        let mut lines = vec![border.clone()];
        for row in 0..board.rows() {
            lines.push(format!("|{}|", board.get_row(row).iter().collect::<String>()));
        }
        lines.push(border);
        self.blocks.push(Block::new(lines));
    }

    /// A titled, numbered list.
    pub fn push_list(&mut self, title: &str, items: &[impl AsRef<str>]) {
        let number_width = items.len().to_string().len();
        let mut lines = vec![format!("{}:", title)];
        for (i, item) in items.iter().enumerate() {
            lines.push(format!("{:>w$}. {}", i + 1, item.as_ref(), w = number_width));
        }
        self.blocks.push(Block::new(lines));
    }

    pub fn push_text(&mut self, text: &str) {
        self.blocks
            .push(Block::new(text.lines().map(str::to_owned).collect()));
    }

    /// Group blocks into bands that each fit in `max_width` (a lone block always fits).
    fn bands(&self) -> Vec<&[Block]> {
        let mut bands = Vec::new();
        let mut start = 0;
        let mut width = 0;
        for (i, block) in self.blocks.iter().enumerate() {
            let block_width = block.width + PADDING;
            if i > start && width + block_width > self.max_width {
                bands.push(&self.blocks[start..i]);
                start = i;
                width = 0;
            }
            width += block_width;
        }
        if start < self.blocks.len() {
            bands.push(&self.blocks[start..]);
        }
        bands
    }
}

impl fmt::Display for Columns {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (band_index, band) in self.bands().into_iter().enumerate() {
            if band_index > 0 {
                writeln!(f)?;
            }
            let height = band.iter().map(|block| block.lines.len()).max().unwrap_or(0);
            for row in 0..height {
                let mut line = String::new();
                for (i, block) in band.iter().enumerate() {
                    let text = block.lines.get(row).map(String::as_str).unwrap_or("");
                    line.push_str(&" ".repeat(PADDING));
                    line.push_str(text);
                    // Pad to the block's width unless nothing follows
                    if i + 1 < band.len() {
                        line.push_str(&" ".repeat(block.width - text.chars().count()));
                    }
                }
                writeln!(f, "{}", line.trim_end())?;
            }
        }
        Ok(())
    }
}

#[test]
fn test_side_by_side() {
    let mut columns = Columns::new(40);
    columns.push_text("cat\n###\ncot");
    columns.push_text("cat\ncot");
    assert_eq!(
        columns.to_string(),
        "    cat    cat\n    ###    cot\n    cot\n"
    );
}

#[test]
fn test_wraps() {
    let mut columns = Columns::new(12);
    columns.push_text("abcde");
    columns.push_text("fghij");
    assert_eq!(columns.to_string(), "    abcde\n\n    fghij\n");
}

#[test]
fn test_board_and_words() {
    let mut board = Board::new(2, 3);
    board.set_row(0, &['c', 'a', 't']);

    let mut columns = Columns::new(80);
    columns.push_board(&board);
    columns.push_list("Words", &["cat"]);
    assert_eq!(
        columns.to_string(),
        "    +---+    Words:\n    |cat|    1. cat\n    |###|\n    +---+\n"
    );
}
