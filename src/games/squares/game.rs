//! Turn orchestration for one live game.
//!
//! A [`GameSession`] owns the board, both players, whose turn it is and the
//! outcome so far. After every accepted placement it re-evaluates the board
//! and, while the game is undecided and an automated player is to move, keeps
//! playing automated turns. Control returns to the caller only when a human
//! must move or the game is over.
//!
//! Lifecycle:
//!
//! - not started: no session value exists yet
//! - in progress: `outcome()` is [`Outcome::InProgress`]
//! - finished: `outcome()` is `Won` or `Draw`; every further move is refused

use super::action::{ConfigurationError, GameError, Move};
use super::board::Board;
use super::rules::{compute_next_move, evaluate};
use super::types::{Outcome, Phase, Player};
use tracing::{debug, error, info, instrument, warn};

/// A single game between two players.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    players: [Player; 2],
    /// Index into `players` of whoever moves next.
    turn_index: usize,
    outcome: Outcome,
    /// Every placement so far, in order.
    history: Vec<Move>,
}

impl GameSession {
    /// Starts a game on an empty `size`×`size` board. The first player moves
    /// first; if it is automated, its turns are played right away.
    #[instrument]
    pub fn start(size: usize, first: Player, second: Player) -> Result<Self, GameError> {
        let board = Board::new(size).map_err(|e| {
            warn!(size, error = %e, "Rejecting board size");
            GameError::InvalidConfiguration(ConfigurationError::BoardSize(e))
        })?;

        if first.color() == second.color() {
            warn!(color = %first.color(), "Both players chose the same color");
            return Err(GameError::InvalidConfiguration(
                ConfigurationError::DuplicateColor(first.color()),
            ));
        }

        let mut session = Self {
            board,
            players: [first, second],
            turn_index: 0,
            outcome: Outcome::InProgress,
            history: Vec::new(),
        };
        info!(size, %first, %second, "Game started");

        session.run_automated_turns()?;
        Ok(session)
    }

    /// Places the current human player's token at zero-based `(x, y)`, then
    /// plays any automated turns that follow.
    ///
    /// Returns every placement made by this call, the human's first. On
    /// `GameOver`, `WrongTurn` or `IllegalMove` nothing changes.
    #[instrument(skip(self))]
    pub fn submit_human_move(&mut self, x: usize, y: usize) -> Result<Vec<Move>, GameError> {
        if self.outcome.is_terminal() {
            warn!(outcome = ?self.outcome, "Move after game end");
            return Err(GameError::GameOver);
        }

        let player = self.players[self.turn_index];
        if player.is_automated() {
            warn!(%player, "Human move on an automated turn");
            return Err(GameError::WrongTurn(player));
        }

        self.board.check_placement(x, y).map_err(|e| {
            warn!(error = %e, "Illegal human move");
            GameError::IllegalMove(e)
        })?;

        let first_new = self.history.len();
        self.apply(Move::new(x, y, player.color()))?;
        self.run_automated_turns()?;

        Ok(self.history[first_new..].to_vec())
    }

    /// Plays automated turns until a human is to move or the game ends.
    fn run_automated_turns(&mut self) -> Result<(), GameError> {
        while self.outcome == Outcome::InProgress {
            let player = self.players[self.turn_index];
            if !player.is_automated() {
                break;
            }

            let action = compute_next_move(&self.board, player.color()).ok_or_else(|| {
                error!(%player, "No automated move on an in-progress board");
                GameError::EngineInvariantViolation(format!(
                    "no move generated for {} while the game is in progress",
                    player.color()
                ))
            })?;

            self.apply(action).map_err(|e| {
                error!(%action, error = %e, "Generated move was rejected");
                GameError::EngineInvariantViolation(format!("generated move {} rejected: {}", action, e))
            })?;
        }
        Ok(())
    }

    /// Places a move, re-evaluates and passes the turn if the game goes on.
    fn apply(&mut self, action: Move) -> Result<(), GameError> {
        self.board
            .place(action.x, action.y, action.color)
            .map_err(GameError::IllegalMove)?;
        self.history.push(action);
        self.outcome = evaluate(&self.board);

        if self.outcome.is_terminal() {
            info!(%action, outcome = %self.outcome, "Game finished");
        } else {
            self.turn_index = 1 - self.turn_index;
            debug!(%action, next = %self.players[self.turn_index], "Move placed");
        }
        Ok(())
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Both players, first mover first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Index of the player to move. Frozen once the game ends.
    pub fn turn_index(&self) -> usize {
        self.turn_index
    }

    /// The player to move, `None` once the game is over.
    pub fn current_player(&self) -> Option<Player> {
        (!self.outcome.is_terminal()).then(|| self.players[self.turn_index])
    }

    /// Outcome so far.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Lifecycle stage derived from the outcome.
    pub fn phase(&self) -> Phase {
        Phase::from(self.outcome)
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// All placements so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }
}
