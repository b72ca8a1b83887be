use crossword_designer::lexicon::Lexicon;
use crossword_designer::{Board, Design, Designer, MarkedBag, WordBag};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rows_of(board: &Board) -> Vec<String> {
    (0..board.rows())
        .map(|i| board.get_row(i).iter().collect())
        .collect()
}

fn sorted(mut words: Vec<String>) -> Vec<String> {
    words.sort();
    words
}

/// Every run on a solved board is one of the words, and every word is one of the runs.
fn assert_round_trip(board: &Board, words: &[&str]) {
    let words = sorted(words.iter().map(|w| w.to_string()).collect());
    assert_eq!(sorted(board.runs()), words, "board:\n{}", board);
}

#[test]
fn single_word_on_top_row() {
    let mut designer = Designer::new(3, 3).unwrap();
    match designer.design(&["cat"]).unwrap() {
        Design::Solved(board) => {
            assert_eq!(rows_of(&board), ["cat", "###", "###"]);
            assert_round_trip(&board, &["cat"]);
        }
        other => panic!("no solution: {:?}", other),
    }
}

#[test]
fn empty_one_by_one() {
    let mut designer = Designer::new(1, 1).unwrap();
    let words: [&str; 0] = [];
    match designer.design(&words).unwrap() {
        Design::Solved(board) => assert_eq!(board.to_string(), "#\n"),
        other => panic!("no solution: {:?}", other),
    }
}

#[test]
fn last_row_left_blank() {
    let mut designer = Designer::new(2, 4).unwrap();
    match designer.design(&["tree"]).unwrap() {
        Design::Solved(board) => assert_eq!(rows_of(&board), ["tree", "####"]),
        other => panic!("no solution: {:?}", other),
    }
}

#[test]
fn word_too_long_for_board() {
    let mut designer = Designer::new(3, 3).unwrap();
    assert_eq!(designer.design(&["house"]).unwrap(), Design::Unsolvable);
}

#[test]
fn too_many_words_for_rows() {
    // Three rows can hold at most two words without their letters touching.
    let mut designer = Designer::new(3, 3).unwrap();
    assert_eq!(
        designer.design(&["cat", "cot", "cut"]).unwrap(),
        Design::Unsolvable
    );
}

#[test]
fn crossings_round_trip() {
    let cases: &[(usize, usize, &[&str])] = &[
        (3, 3, &["cat", "cot"]),
        (2, 2, &["at", "to", "at", "to"]),
        (3, 2, &["at", "to", "at", "to"]),
        (3, 3, &["at", "to", "at", "to"]),
        (4, 3, &["ox", "ox", "no", "on"]),
    ];
    for (rows, columns, words) in cases {
        let mut designer = Designer::new(*rows, *columns).unwrap();
        match designer.design(words).unwrap() {
            Design::Solved(board) => assert_round_trip(&board, words),
            other => panic!("no solution for {:?}: {:?}", words, other),
        }
    }
}

#[test]
fn random_selections_round_trip() {
    let lexicon = Lexicon::new([
        "at", "to", "on", "no", "so", "ox", "an", "it", "is", "ten", "net", "ant", "tan", "one",
        "eon", "nit", "tin", "sit", "its",
    ]);
    let mut solved = 0;
    for seed in 0..20 {
        let words = lexicon.choose(3, &mut StdRng::seed_from_u64(seed));
        let words = words.iter().map(String::as_str).collect::<Vec<_>>();

        let mut designer = Designer::new(5, 4).unwrap();
        designer.config().step_limit = Some(200_000);
        if let Design::Solved(board) = designer.design(&words).unwrap() {
            assert_round_trip(&board, &words);
            solved += 1;
        }
    }
    // Three short words always fit on separate rows of a 5x4 board
    assert_eq!(solved, 20);
}

#[test]
fn copied_and_marked_bags_agree() {
    let words = ["ox", "ox", "no", "on", "so"];
    let mut designer = Designer::new(4, 3).unwrap();
    let copied = designer.design_with(WordBag::new(words)).unwrap();
    let marked = designer.design_with(MarkedBag::new(words)).unwrap();
    assert_eq!(copied, marked);
}
