use crate::console::view::{self, RenderOptions};
use crate::engine::GameEngine;
use crate::game::{Game, GameState};
use crate::position::Position;
use std::io::{self, BufRead, Write};

/// Printed before every read, including retries after rejected input.
pub const PROMPT: &str = "Please choose a position:";

/// Runs a full two-player game over the given streams.
///
/// Renders once up front, then loops: prompt, read a line, decode the
/// first non-whitespace character, attempt the play. Rejected input --
/// an unknown symbol or an occupied cell -- re-prompts with no retry cap
/// and no re-render; an accepted move re-renders. On a win the winner is
/// announced; a draw ends quietly with the final board.
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    opts: RenderOptions,
) -> io::Result<GameState> {
    let mut game = Game::new();
    run_with(&mut game, input, output, opts)
}

/// Same loop over a caller-supplied engine.
pub fn run_with<E, R, W>(
    engine: &mut E,
    input: &mut R,
    output: &mut W,
    opts: RenderOptions,
) -> io::Result<GameState>
where
    E: GameEngine,
    R: BufRead,
    W: Write,
{
    view::draw(output, engine.board(), opts)?;

    while !engine.is_over() {
        writeln!(output, "{PROMPT}")?;
        output.flush()?;

        let line = match read_line(input)? {
            Some(line) => line,
            None => {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed before the game finished",
                ))
            }
        };
        let pos = match line.parse::<Position>() {
            Ok(pos) => pos,
            Err(_) => continue,
        };
        if engine.play(pos).is_err() {
            continue;
        }
        view::draw(output, engine.board(), opts)?;
    }

    if let Some(winner) = engine.winner() {
        writeln!(output, "PLAYER {} WINS!", winner.number())?;
    }
    output.flush()?;
    Ok(engine.state())
}

/// One line from the source; `None` once the source is exhausted.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = String::new();
    let n = input.read_line(&mut buf)?;
    Ok((n > 0).then_some(buf))
}
