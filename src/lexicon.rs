//! Where the words come from: a word list on disk, narrowed down to the words that could fit a
//! board, then sampled.

use crate::error::LexiconError;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fs;
use std::path::Path;

/// Parts of speech kept from a lemma list: adverbs, verbs, adjectives and nouns.
const LEMMA_PARTS_OF_SPEECH: [&str; 4] = ["adv", "v", "a", "n"];

/// A list of candidate words, all lowercase and purely alphabetic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    words: Vec<String>,
}

impl Lexicon {
    pub fn new(words: impl IntoIterator<Item = impl AsRef<str>>) -> Lexicon {
        Lexicon {
            words: words
                .into_iter()
                .filter_map(|word| normalize(word.as_ref()))
                .collect(),
        }
    }

    /// Parse a lemma list, as from the British National Corpus. Each line is
    /// `sort-order frequency word part-of-speech`, separated by whitespace.
    pub fn from_lemma_str(text: &str) -> Result<Lexicon, LexiconError> {
        let mut words = Vec::new();
        for (i, line) in text.lines().enumerate() {
            let fields = line.split_whitespace().collect::<Vec<_>>();
            if fields.is_empty() {
                continue;
            }
            if fields.len() < 4 {
                return Err(LexiconError::Malformed {
                    line: i + 1,
                    text: line.to_owned(),
                });
            }
            if LEMMA_PARTS_OF_SPEECH.contains(&fields[3]) {
                words.extend(normalize(fields[2]));
            }
        }
        Ok(Lexicon { words })
    }

    pub fn load_lemmas(path: impl AsRef<Path>) -> Result<Lexicon, LexiconError> {
        let lexicon = Lexicon::from_lemma_str(&read(path.as_ref())?)?;
        debug!("Loaded {} lemmas from {}", lexicon.len(), path.as_ref().display());
        Ok(lexicon)
    }

    /// One word per line.
    pub fn from_word_list_str(text: &str) -> Lexicon {
        Lexicon::new(text.lines())
    }

    pub fn load_word_list(path: impl AsRef<Path>) -> Result<Lexicon, LexiconError> {
        let lexicon = Lexicon::from_word_list_str(&read(path.as_ref())?);
        debug!("Loaded {} words from {}", lexicon.len(), path.as_ref().display());
        Ok(lexicon)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The words of at least two and at most `max_len` letters. Longer words can never be placed
    /// on a board that narrow, and single letters never form a run.
    pub fn fitting(&self, max_len: usize) -> Lexicon {
        Lexicon {
            words: self
                .words
                .iter()
                .filter(|word| (2..=max_len).contains(&word.chars().count()))
                .cloned()
                .collect(),
        }
    }

    /// `count` words drawn at random, with replacement. Empty if the lexicon is.
    pub fn choose(&self, count: usize, rng: &mut impl Rng) -> Vec<String> {
        if self.words.is_empty() {
            return Vec::new();
        }
        (0..count)
            .filter_map(|_| self.words.choose(&mut *rng).cloned())
            .collect()
    }
}

fn read(path: &Path) -> Result<String, LexiconError> {
    fs::read_to_string(path).map_err(|source| LexiconError::Io {
        path: path.to_owned(),
        source,
    })
}

fn normalize(word: &str) -> Option<String> {
    let word = word.trim().to_lowercase();
    if !word.is_empty() && word.chars().all(char::is_alphabetic) {
        Some(word)
    } else {
        None
    }
}

#[test]
fn test_lemmas() {
    let text = "\
1 6187267 the det
2 4239632 be v
5 1040 Quickly adv

7 2000 a.m. adv
8 900 green a
9 800 cat n
10 700 of prep
";
    let lexicon = Lexicon::from_lemma_str(text).unwrap();
    assert_eq!(lexicon.words(), ["be", "quickly", "green", "cat"]);
}

#[test]
fn test_malformed_lemma() {
    match Lexicon::from_lemma_str("1 100 cat n\n2 dog\n") {
        Err(LexiconError::Malformed { line, text }) => {
            assert_eq!(line, 2);
            assert_eq!(text, "2 dog");
        }
        other => panic!("expected a malformed entry, got {:?}", other),
    }
}

#[test]
fn test_word_list_files() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "Cat\n  dog \ncan't\n\nox").unwrap();
    let lexicon = Lexicon::load_word_list(file.path()).unwrap();
    assert_eq!(lexicon.words(), ["cat", "dog", "ox"]);

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "1 10 tree n\n2 9 run v").unwrap();
    let lexicon = Lexicon::load_lemmas(file.path()).unwrap();
    assert_eq!(lexicon.words(), ["tree", "run"]);

    let missing = file.path().with_extension("missing");
    assert!(matches!(
        Lexicon::load_word_list(&missing),
        Err(LexiconError::Io { .. })
    ));
}

#[test]
fn test_fitting() {
    let lexicon = Lexicon::new(["a", "to", "cat", "tree", "house"]);
    assert_eq!(lexicon.fitting(4).words(), ["to", "cat", "tree"]);
    assert!(lexicon.fitting(1).is_empty());
}

#[test]
fn test_choose() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let lexicon = Lexicon::new(["to", "cat", "tree"]);
    let chosen = lexicon.choose(10, &mut StdRng::seed_from_u64(7));
    assert_eq!(chosen.len(), 10);
    assert!(chosen.iter().all(|word| lexicon.words().contains(word)));

    // Same seed, same words
    assert_eq!(chosen, lexicon.choose(10, &mut StdRng::seed_from_u64(7)));

    assert!(Lexicon::default()
        .choose(3, &mut StdRng::seed_from_u64(7))
        .is_empty());
}
