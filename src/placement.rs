use crate::BLANK;

/// Every way of writing `word` contiguously into a line of `line_len` cells, padded with
/// [`BLANK`] on either side. Ordered by left offset, ascending.
///
/// A word that doesn't fit produces no placements.
pub fn generate_placements(word: &str, line_len: usize) -> Vec<Vec<char>> {
    let letters = word.chars().collect::<Vec<_>>();
    if letters.len() > line_len {
        return Vec::new();
    }

    let padding = line_len - letters.len();
    (0..=padding)
        .map(|offset| {
            let mut line = vec![BLANK; line_len];
            line[offset..offset + letters.len()].copy_from_slice(&letters);
            line
        })
        .collect()
}

#[test]
fn test_placements() {
    let lines = generate_placements("cat", 5)
        .into_iter()
        .map(|line| line.into_iter().collect::<String>())
        .collect::<Vec<_>>();
    assert_eq!(lines, ["cat##", "#cat#", "##cat"]);
}

#[test]
fn test_placements_exact_fit() {
    let lines = generate_placements("cat", 3);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0], ['c', 'a', 't']);
}

#[test]
fn test_placements_too_long() {
    assert!(generate_placements("cat", 2).is_empty());
    assert!(generate_placements("a", 0).is_empty());
}

#[test]
fn test_placement_counts() {
    for word in ["a", "to", "word", "letters"] {
        let len = word.chars().count();
        for line_len in 0..10 {
            let placements = generate_placements(word, line_len);
            if line_len < len {
                assert!(placements.is_empty());
                continue;
            }
            assert_eq!(placements.len(), line_len - len + 1);
            for (offset, line) in placements.iter().enumerate() {
                assert_eq!(line.len(), line_len);
                let text = line.iter().collect::<String>();
                // The word sits at `offset`, and everything else is blank.
                assert_eq!(text.find(word), Some(offset));
                assert_eq!(
                    line.iter().filter(|ch| **ch == BLANK).count(),
                    line_len - len
                );
            }
        }
    }
}
