use bitvec::{bitvec, vec::BitVec};
use std::fmt;
use std::sync::Arc;

/// The multiset of words still available to the current branch of the search.
///
/// Each branch works on its own copy (`Clone`), so siblings never see each other's
/// consumption. Positions are stable for the lifetime of a value: `word(i)` is the i-th
/// remaining word in multiset order.
pub trait Candidates: Clone + fmt::Debug {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The word at remaining position `i`. Panics if `i >= len()`.
    fn word(&self, i: usize) -> &str;

    /// A copy of this multiset with the word at position `i` consumed.
    fn without(&self, i: usize) -> Self;

    /// Consume one occurrence of `word`. Returns false if there is none.
    fn take(&mut self, word: &str) -> bool;

    fn to_vec(&self) -> Vec<String> {
        (0..self.len()).map(|i| self.word(i).to_owned()).collect()
    }
}

/************************
 *     WordBag          *
 ************************/

/// A multiset stored as a plain vector of words. Copying it copies every word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordBag(Vec<String>);

impl WordBag {
    pub fn new(words: impl IntoIterator<Item = impl Into<String>>) -> WordBag {
        WordBag(words.into_iter().map(Into::into).collect())
    }
}

impl Candidates for WordBag {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn word(&self, i: usize) -> &str {
        &self.0[i]
    }

    fn without(&self, i: usize) -> WordBag {
        let mut bag = self.clone();
        bag.0.remove(i);
        bag
    }

    fn take(&mut self, word: &str) -> bool {
        match self.0.iter().position(|w| w == word) {
            Some(i) => {
                self.0.remove(i);
                true
            }
            None => false,
        }
    }
}

/************************
 *     MarkedBag        *
 ************************/

/// A multiset over a shared, immutable word list. Consumption clears a bit, so copying a
/// `MarkedBag` copies one bit per word instead of the words themselves.
#[derive(Clone)]
pub struct MarkedBag {
    words: Arc<[String]>,
    /// `available[i]` iff `words[i]` has not been consumed.
    available: BitVec,
}

impl MarkedBag {
    pub fn new(words: impl IntoIterator<Item = impl Into<String>>) -> MarkedBag {
        let words = words.into_iter().map(Into::into).collect::<Arc<[String]>>();
        let available = bitvec![1; words.len()];
        MarkedBag { words, available }
    }

    fn index_of(&self, i: usize) -> usize {
        match self.available.iter_ones().nth(i) {
            Some(index) => index,
            None => panic!("MarkedBag: position {} out of {}", i, self.len()),
        }
    }
}

impl Candidates for MarkedBag {
    fn len(&self) -> usize {
        self.available.count_ones()
    }

    fn is_empty(&self) -> bool {
        self.available.not_any()
    }

    fn word(&self, i: usize) -> &str {
        &self.words[self.index_of(i)]
    }

    fn without(&self, i: usize) -> MarkedBag {
        let mut bag = self.clone();
        let index = self.index_of(i);
        bag.available.set(index, false);
        bag
    }

    fn take(&mut self, word: &str) -> bool {
        let found = self
            .available
            .iter_ones()
            .find(|index| self.words[*index] == word);
        match found {
            Some(index) => {
                self.available.set(index, false);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for MarkedBag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.to_vec()).finish()
    }
}

#[cfg(test)]
fn exercise<C: Candidates>(mut bag: C) -> Vec<(bool, Vec<String>)> {
    let mut trace = Vec::new();
    for word in ["to", "cat", "to", "to", "dog", "cat"] {
        let found = bag.take(word);
        trace.push((found, bag.to_vec()));
    }
    trace
}

#[test]
fn test_word_bag() {
    let mut bag = WordBag::new(["cat", "to", "cat"]);
    assert_eq!(bag.len(), 3);
    assert_eq!(bag.word(2), "cat");

    let rest = bag.without(0);
    assert_eq!(rest.to_vec(), ["to", "cat"]);
    // The original is untouched
    assert_eq!(bag.len(), 3);

    assert!(bag.take("cat"));
    assert_eq!(bag.to_vec(), ["to", "cat"]);
    assert!(!bag.take("dog"));
    assert!(bag.take("cat"));
    assert!(bag.take("to"));
    assert!(bag.is_empty());
}

#[test]
fn test_marked_bag() {
    let mut bag = MarkedBag::new(["cat", "to", "cat"]);
    assert_eq!(bag.len(), 3);

    let rest = bag.without(1);
    assert_eq!(rest.to_vec(), ["cat", "cat"]);
    assert_eq!(rest.word(1), "cat");
    assert_eq!(bag.to_vec(), ["cat", "to", "cat"]);

    assert!(bag.take("cat"));
    assert_eq!(bag.word(0), "to");
    assert_eq!(format!("{:?}", bag), r#"["to", "cat"]"#);
    assert!(!bag.take("dog"));
    assert!(bag.take("cat"));
    assert!(bag.take("to"));
    assert!(bag.is_empty());
}

#[test]
fn test_bags_agree() {
    let words = ["cat", "to", "to", "dog", "eel"];
    assert_eq!(
        exercise(WordBag::new(words)),
        exercise(MarkedBag::new(words))
    );

    for i in 0..words.len() {
        assert_eq!(
            WordBag::new(words).without(i).to_vec(),
            MarkedBag::new(words).without(i).to_vec()
        );
    }
}
