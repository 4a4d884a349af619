//! Pure predicates over a board snapshot. Nothing here mutates state; the
//! turn state machine in [`crate::game`] decides what to do with the
//! answers.

use crate::board::Board;
use crate::cells::Mark;

/// The eight winning lines: three rows, three columns, two diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// True iff `index` addresses a real cell and that cell is unmarked.
///
/// Out-of-range indices are always invalid. The position codec cannot
/// produce one, but the predicate rejects them on its own.
pub fn is_valid_placement(board: &Board, index: usize) -> bool {
    match board.get(index) {
        Ok(cell) => cell.is_empty(),
        Err(_) => false,
    }
}

/// The mark holding a completed line, if any.
///
/// Each line is tested pairwise against its first cell, which must itself
/// be non-empty.
pub fn winner(board: &Board) -> Option<Mark> {
    let cells = board.cells();
    for [a, b, c] in LINES {
        let first = cells[a];
        if !first.is_empty() && first == cells[b] && first == cells[c] {
            return first.mark();
        }
    }
    None
}

/// True iff any winning line is completely held by one mark.
pub fn is_won(board: &Board) -> bool {
    winner(board).is_some()
}

/// True iff zero empty cells remain.
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// True iff no further moves are possible: a completed line or a full
/// board. When both hold at once the game counts as won, not drawn; the
/// state machine checks the win first.
pub fn is_terminal(board: &Board) -> bool {
    is_won(board) || is_full(board)
}
