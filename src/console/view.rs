use crate::board::Board;
use crate::cells::Cell;
use crate::position::Position;
use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};

/// Presentation knobs for the console renderer.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct RenderOptions {
    /// Reset the screen before each render. On by default for interactive
    /// play; turn off when output is piped or captured.
    pub clear_screen: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { clear_screen: true }
    }
}

/// The character shown for a cell: its mark, or its position letter while
/// unmarked, so players always see which letters are still open.
fn cell_char(cell: Cell, pos: Position) -> char {
    match cell.mark() {
        Some(mark) => mark.to_char(),
        None => pos.symbol(),
    }
}

/// Renders the grid, three cells per row with column separators:
///
/// ```text
///   a  |  b  |  c
/// -----|-----|-----
///   d  |  e  |  f
/// -----|-----|-----
///   g  |  h  |  i
/// ```
pub fn render_board(board: &Board) -> String {
    let cells = board.cells();
    let mut out = String::new();
    for row in 0..Board::SIDE {
        let base = row * Board::SIDE;
        for col in 0..Board::SIDE {
            let index = base + col;
            if col > 0 {
                out.push('|');
            }
            out.push_str("  ");
            out.push(cell_char(cells[index], Position::ALL[index]));
            out.push_str("  ");
        }
        out.push('\n');
        if row + 1 < Board::SIDE {
            out.push_str("-----|-----|-----\n");
        }
    }
    out
}

/// Writes the board to `w`: blank line, optional screen reset, blank line,
/// the grid, trailing blank line.
pub fn draw<W: Write>(w: &mut W, board: &Board, opts: RenderOptions) -> io::Result<()> {
    writeln!(w)?;
    if opts.clear_screen {
        crossterm::execute!(w, Clear(ClearType::All), MoveTo(0, 0))?;
    }
    writeln!(w)?;
    write!(w, "{}", render_board(board))?;
    writeln!(w)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cells::Mark;

    #[test]
    fn empty_board_shows_position_letters() {
        let board = Board::new();
        let expected = concat!(
            "  a  |  b  |  c  \n",
            "-----|-----|-----\n",
            "  d  |  e  |  f  \n",
            "-----|-----|-----\n",
            "  g  |  h  |  i  \n",
        );
        assert_eq!(render_board(&board), expected);
    }

    #[test]
    fn marks_replace_letters() {
        let mut board = Board::new();
        board.set(0, Mark::X).unwrap();
        board.set(4, Mark::O).unwrap();
        let rendered = render_board(&board);
        assert!(rendered.starts_with("  X  |  b  |  c  \n"));
        assert!(rendered.contains("  d  |  O  |  f  \n"));
        assert!(!rendered.contains('a'));
        assert!(rendered.contains('i'));
    }

    #[test]
    fn draw_without_clear_is_plain_text() {
        let board = Board::new();
        let mut out: Vec<u8> = Vec::new();
        let opts = RenderOptions { clear_screen: false };
        draw(&mut out, &board, opts).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains('\u{1b}'));
        assert!(text.contains("  a  |  b  |  c  "));
        assert!(text.ends_with("  g  |  h  |  i  \n\n"));
    }
}
