use std::{io, path::PathBuf};
use thiserror::Error;

/// Input that can't be searched at all. This is distinct from a search that finds no board.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("Board dimensions must be positive (got {rows}x{columns})")]
    ZeroDimension { rows: usize, columns: usize },

    #[error("Empty word at position {index}")]
    EmptyWord { index: usize },

    #[error("Word '{word}' contains the blank marker '{blank}'")]
    BlankInWord { word: String, blank: char },
}

#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("Failed to read word source {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed lemma entry on line {line}: '{text}'")]
    Malformed { line: usize, text: String },
}
