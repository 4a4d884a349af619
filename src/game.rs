use crate::board::{Board, BoardError};
use crate::cells::Player;
use crate::position::Position;
use crate::rules;

/// Where a game stands. `Won` and `Draw` are terminal: once entered, no
/// further moves are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameState {
    InProgress,
    /// Won by the player who placed the completing mark.
    Won(Player),
    Draw,
}

impl GameState {
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameState::InProgress)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlayError {
    #[error("the game is already over")]
    GameOver,
    #[error("cell '{0}' is already marked")]
    Occupied(Position),
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// The turn state machine: one board, two alternating seats, and the
/// current [`GameState`].
///
/// ```
/// use tictactoe_rs::cells::Player;
/// use tictactoe_rs::game::{Game, GameState};
/// use tictactoe_rs::position::Position;
///
/// let mut game = Game::new();
/// // X takes the top row while O answers in the middle row.
/// for symbol in ['a', 'd', 'b', 'e', 'c'] {
///     let pos = Position::try_from(symbol).unwrap();
///     game.play(pos).unwrap();
/// }
/// assert_eq!(game.state(), GameState::Won(Player::One));
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) current: Player,
    pub(crate) state: GameState,
    moves: Vec<Position>,
}

impl Game {
    /// A fresh game: empty board, Player One (X) to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: Player::One,
            state: GameState::InProgress,
            moves: Vec::new(),
        }
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is. After a win this is still the
    /// winning mover; the turn is only handed over while the game runs.
    pub fn current(&self) -> Player {
        self.current
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Returns the accepted moves in play order.
    pub fn moves(&self) -> &[Position] {
        &self.moves
    }

    /// True once the game has reached `Won` or `Draw`.
    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// The winning player, if the game has been won.
    pub fn winner(&self) -> Option<Player> {
        match self.state {
            GameState::Won(p) => Some(p),
            _ => None,
        }
    }

    /// True iff `pos` would be accepted right now.
    pub fn can_play(&self, pos: Position) -> bool {
        !self.is_over() && rules::is_valid_placement(&self.board, pos.index())
    }

    /// Applies the current player's mark at `pos`.
    ///
    /// The win check runs before the draw check and before turn
    /// alternation, so a move that completes a line on a full board wins,
    /// and `Won` carries the mover.
    ///
    /// # Errors
    ///
    /// `GameOver` in a terminal state, `Occupied` when the cell already
    /// holds a mark. Both leave the game untouched.
    pub fn play(&mut self, pos: Position) -> Result<GameState, PlayError> {
        if self.is_over() {
            return Err(PlayError::GameOver);
        }
        if !rules::is_valid_placement(&self.board, pos.index()) {
            return Err(PlayError::Occupied(pos));
        }

        self.board.set(pos.index(), self.current.mark())?;
        self.moves.push(pos);

        if rules::is_won(&self.board) {
            self.state = GameState::Won(self.current);
        } else if rules::is_full(&self.board) {
            self.state = GameState::Draw;
        } else {
            self.current = self.current.opponent();
        }
        Ok(self.state)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
