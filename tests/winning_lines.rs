use tictactoe_rs::board::Board;
use tictactoe_rs::cells::Mark;
use tictactoe_rs::rules::{is_won, winner, LINES};

fn board_with_line(line: [usize; 3], mark: Mark) -> Board {
    let mut board = Board::new();
    for index in line {
        board.set(index, mark).unwrap();
    }
    board
}

#[test]
fn top_row_wins() {
    let board = board_with_line([0, 1, 2], Mark::X);
    assert_eq!(winner(&board), Some(Mark::X));
}

#[test]
fn middle_row_wins() {
    let board = board_with_line([3, 4, 5], Mark::X);
    assert_eq!(winner(&board), Some(Mark::X));
}

#[test]
fn bottom_row_wins() {
    let board = board_with_line([6, 7, 8], Mark::X);
    assert_eq!(winner(&board), Some(Mark::X));
}

#[test]
fn left_column_wins() {
    let board = board_with_line([0, 3, 6], Mark::X);
    assert_eq!(winner(&board), Some(Mark::X));
}

#[test]
fn middle_column_wins() {
    let board = board_with_line([1, 4, 7], Mark::X);
    assert_eq!(winner(&board), Some(Mark::X));
}

#[test]
fn right_column_wins() {
    let board = board_with_line([2, 5, 8], Mark::X);
    assert_eq!(winner(&board), Some(Mark::X));
}

#[test]
fn main_diagonal_wins() {
    let board = board_with_line([0, 4, 8], Mark::X);
    assert_eq!(winner(&board), Some(Mark::X));
}

#[test]
fn anti_diagonal_wins() {
    let board = board_with_line([2, 4, 6], Mark::X);
    assert_eq!(winner(&board), Some(Mark::X));
}

#[test]
fn every_line_wins_for_either_mark() {
    for line in LINES {
        for mark in Mark::ALL {
            let board = board_with_line(line, mark);
            assert_eq!(winner(&board), Some(mark), "line {line:?} mark {mark}");
        }
    }
}

#[test]
fn three_equal_empty_cells_are_not_a_line() {
    // Empty cells compare equal to each other; that must never count.
    let board = Board::new();
    assert_eq!(winner(&board), None);
    assert!(!is_won(&board));
}

#[test]
fn two_in_a_line_is_not_a_win() {
    let mut board = Board::new();
    board.set(0, Mark::X).unwrap();
    board.set(1, Mark::X).unwrap();
    assert_eq!(winner(&board), None);
}

#[test]
fn mixed_marks_never_win() {
    // X O X / X O O / O X X: every line is mixed.
    let mut board = Board::new();
    for (i, mark) in [
        Mark::X,
        Mark::O,
        Mark::X,
        Mark::X,
        Mark::O,
        Mark::O,
        Mark::O,
        Mark::X,
        Mark::X,
    ]
    .into_iter()
    .enumerate()
    {
        board.set(i, mark).unwrap();
    }
    assert_eq!(winner(&board), None);
    assert!(!is_won(&board));
}
