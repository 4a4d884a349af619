// Minimal game engine API boundary. This trait exposes the core moves and
// queries so front ends (console today, other UIs or drivers later) can run
// a game without depending on library internals. It is implemented for the
// core `Game` type.

use crate::board::Board;
use crate::cells::Player;
use crate::game::{GameState, PlayError};
use crate::position::Position;

pub trait GameEngine {
    // The one action a seat can take
    fn play(&mut self, pos: Position) -> Result<GameState, PlayError>;

    // Queries
    fn board(&self) -> &Board;
    fn current(&self) -> Player;
    fn state(&self) -> GameState;
    fn winner(&self) -> Option<Player>;
    fn is_over(&self) -> bool;
    fn can_play(&self, pos: Position) -> bool;
}

impl GameEngine for crate::game::Game {
    fn play(&mut self, pos: Position) -> Result<GameState, PlayError> {
        self.play(pos)
    }

    fn board(&self) -> &Board {
        self.board()
    }
    fn current(&self) -> Player {
        self.current()
    }
    fn state(&self) -> GameState {
        self.state()
    }
    fn winner(&self) -> Option<Player> {
        self.winner()
    }
    fn is_over(&self) -> bool {
        self.is_over()
    }
    fn can_play(&self, pos: Position) -> bool {
        self.can_play(pos)
    }
}
