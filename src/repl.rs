//! Line-oriented command interpreter.
//!
//! Holds at most one [`GameSession`] and translates text commands into
//! orchestrator calls. Coordinates typed by the user are 1-based; the
//! engine works with 0-based ones.

use crate::games::squares::{
    Board, Color, ConfigurationError, GameError, GameSession, Outcome, Phase, Player, PlayerKind,
};
use anyhow::Result;
use derive_more::Display;
use std::io::{BufRead, Write};
use tracing::{debug, error, info, instrument};

const HELP: &str = "\
GAME N, TYPE1 C1, TYPE2 C2  - start new game (TYPE: user|comp, C: w|b)
MOVE X, Y  - make user move (1-based coordinates)
BOARD - print board
HELP - this help
EXIT - exit";

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start a new game, replacing any current one.
    Game {
        /// Board side length as typed; may be out of range.
        size: i64,
        /// Player moving first.
        first: Player,
        /// Player moving second.
        second: Player,
    },
    /// Human move at 1-based `(x, y)`.
    Move {
        /// Column, 1-based as typed.
        x: i64,
        /// Row, 1-based as typed.
        y: i64,
    },
    /// Print the board.
    Board,
    /// Print the command list.
    Help,
    /// Leave the interpreter.
    Exit,
}

/// A line that is not a valid command.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum CommandError {
    /// Unknown keyword.
    #[display("Incorrect command")]
    Unknown,
    /// Known keyword with the wrong number of arguments. Holds the name
    /// shown to the user.
    #[display("Incorrect {} format", _0)]
    Format(&'static str),
    /// An argument that does not parse.
    #[display("Incorrect command: {}", _0)]
    Argument(String),
}

impl std::error::Error for CommandError {}

fn parse_player(param: &str) -> Result<Player, CommandError> {
    let tokens: Vec<&str> = param.split_whitespace().collect();
    let [kind, color] = tokens.as_slice() else {
        return Err(CommandError::Argument(format!("Invalid player: {}", param)));
    };

    let kind = match kind.to_lowercase().as_str() {
        "user" => PlayerKind::Human,
        "comp" => PlayerKind::Automated,
        other => return Err(CommandError::Argument(format!("Unknown type: {}", other))),
    };
    let color = color
        .chars()
        .next()
        .and_then(Color::from_marker)
        .ok_or_else(|| CommandError::Argument(format!("Unknown color: {}", color)))?;

    Ok(Player::new(kind, color))
}

fn parse_number<T: std::str::FromStr>(s: &str) -> Result<T, CommandError> {
    s.trim()
        .parse()
        .map_err(|_| CommandError::Argument(format!("Not a number: {}", s.trim())))
}

impl Command {
    /// Parses one trimmed, non-empty line. Keywords are case-insensitive.
    #[instrument]
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (keyword, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

        match keyword.to_uppercase().as_str() {
            "EXIT" if rest.trim().is_empty() => Ok(Command::Exit),
            "HELP" if rest.trim().is_empty() => Ok(Command::Help),
            "BOARD" if rest.trim().is_empty() => Ok(Command::Board),
            "GAME" => {
                let parts: Vec<&str> = rest.split(',').collect();
                if parts.len() < 3 {
                    return Err(CommandError::Format("command"));
                }
                Ok(Command::Game {
                    size: parse_number(parts[0])?,
                    first: parse_player(parts[1].trim())?,
                    second: parse_player(parts[2].trim())?,
                })
            }
            "MOVE" => {
                let parts: Vec<&str> = rest.split(',').collect();
                if parts.len() < 2 {
                    return Err(CommandError::Format("MOVE"));
                }
                Ok(Command::Move {
                    x: parse_number(parts[0])?,
                    y: parse_number(parts[1])?,
                })
            }
            _ => Err(CommandError::Unknown),
        }
    }
}

/// Whether the interpreter should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// Stop.
    Exit,
}

fn kind_label(player: Player) -> &'static str {
    match player.kind() {
        PlayerKind::Human => "user",
        PlayerKind::Automated => "comp",
    }
}

/// 1-based user coordinate to 0-based board coordinate.
fn zero_based(v: i64) -> Option<usize> {
    v.checked_sub(1).and_then(|v| usize::try_from(v).ok())
}

/// Command interpreter writing to `W`.
#[derive(Debug)]
pub struct Repl<W: Write> {
    out: W,
    session: Option<GameSession>,
}

impl<W: Write> Repl<W> {
    /// Creates an interpreter with no game started.
    pub fn new(out: W) -> Self {
        Self { out, session: None }
    }

    /// The current game, if one was started.
    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    /// Consumes the interpreter, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Handles one input line.
    ///
    /// User mistakes are printed and never returned as errors. Only I/O
    /// failures and engine invariant violations end the session.
    #[instrument(skip(self))]
    pub fn handle_line(&mut self, line: &str) -> Result<Flow> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Flow::Continue);
        }

        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(e) => {
                debug!(error = %e, "Rejected command");
                writeln!(self.out, "{}", e)?;
                return Ok(Flow::Continue);
            }
        };

        match command {
            Command::Exit => return Ok(Flow::Exit),
            Command::Help => writeln!(self.out, "{}", HELP)?,
            Command::Board => self.print_board()?,
            Command::Game { size, first, second } => self.start_game(size, first, second)?,
            Command::Move { x, y } => self.make_move(x, y)?,
        }
        Ok(Flow::Continue)
    }

    fn start_game(&mut self, size: i64, first: Player, second: Player) -> Result<()> {
        let Ok(size) = usize::try_from(size) else {
            writeln!(self.out, "Board size must be > 2")?;
            return Ok(());
        };

        match GameSession::start(size, first, second) {
            Ok(session) => {
                info!(size, %first, %second, "New game from command line");
                let opening = session.history().len();
                self.session = Some(session);
                writeln!(self.out, "New game started")?;
                self.report(opening, true)
            }
            Err(GameError::InvalidConfiguration(ConfigurationError::BoardSize(_))) => {
                writeln!(self.out, "Board size must be > 2")?;
                Ok(())
            }
            Err(GameError::InvalidConfiguration(ConfigurationError::DuplicateColor(_))) => {
                writeln!(self.out, "Players must have different colors")?;
                Ok(())
            }
            Err(e) => self.fail(e),
        }
    }

    fn make_move(&mut self, x1: i64, y1: i64) -> Result<()> {
        let Some(session) = self.session.as_mut() else {
            writeln!(self.out, "Game not started")?;
            return Ok(());
        };
        if session.is_over() {
            writeln!(self.out, "Game already finished")?;
            return Ok(());
        }
        let (Some(x), Some(y)) = (zero_based(x1), zero_based(y1)) else {
            writeln!(self.out, "Invalid move")?;
            return Ok(());
        };

        match session.submit_human_move(x, y) {
            Ok(placed) => self.report(placed.len(), false),
            Err(GameError::WrongTurn(_)) => {
                writeln!(self.out, "Not user's turn")?;
                Ok(())
            }
            Err(GameError::IllegalMove(_)) => {
                writeln!(self.out, "Invalid move")?;
                Ok(())
            }
            Err(GameError::GameOver) => {
                writeln!(self.out, "Game already finished")?;
                Ok(())
            }
            Err(e) => self.fail(e),
        }
    }

    /// Narrates the last `count` placements, showing the board after each
    /// one, and announces the end. With `opening` the board as it stood
    /// before those placements is shown first.
    fn report(&mut self, count: usize, opening: bool) -> Result<()> {
        let Some(session) = self.session.as_ref() else {
            return Ok(());
        };
        let players = *session.players();
        let history = session.history();
        let (earlier, placed) = history.split_at(history.len() - count);

        // Replay so each step can be drawn as it was.
        let mut board = Board::new(session.board().size())?;
        for action in earlier {
            board.place(action.x, action.y, action.color)?;
        }
        if opening {
            write_board(&mut self.out, &board, Some(players[0]))?;
        }

        for (i, action) in placed.iter().enumerate() {
            board.place(action.x, action.y, action.color)?;
            let mover = players.iter().find(|p| p.color() == action.color).copied();
            if mover.is_some_and(Player::is_automated) {
                writeln!(self.out, "COMP MOVE: {} ({}, {})", action.color, action.x + 1, action.y + 1)?;
            } else {
                writeln!(self.out, "Move made: {} at ({}, {})", action.color, action.x + 1, action.y + 1)?;
            }

            let last = i + 1 == placed.len();
            let next = if last && session.is_over() {
                None
            } else {
                players.iter().find(|p| p.color() != action.color).copied()
            };
            write_board(&mut self.out, &board, next)?;
        }

        match session.phase() {
            Phase::Finished(Outcome::Won(color)) => writeln!(self.out, "Game finished. {} wins!", color)?,
            Phase::Finished(_) => writeln!(self.out, "Game finished. Draw")?,
            Phase::InProgress => {}
        }
        Ok(())
    }

    fn print_board(&mut self) -> Result<()> {
        let Some(session) = self.session.as_ref() else {
            writeln!(self.out, "Game not started")?;
            return Ok(());
        };
        write_board(&mut self.out, session.board(), session.current_player())
    }

    fn fail(&mut self, e: GameError) -> Result<()> {
        error!(error = %e, "Session aborted");
        writeln!(self.out, "Fatal: {}", e)?;
        Err(e.into())
    }
}

/// Board between blank lines, then whose turn it is unless the game is over.
fn write_board<W: Write>(out: &mut W, board: &Board, next: Option<Player>) -> Result<()> {
    writeln!(out)?;
    write!(out, "{}", board)?;
    writeln!(out)?;
    if let Some(player) = next {
        writeln!(out, "Current turn: {} ({})", player.color(), kind_label(player))?;
    }
    Ok(())
}

/// Runs the interpreter until `EXIT` or end of input.
#[instrument(skip_all)]
pub fn run_repl<R: BufRead, W: Write>(mut input: R, output: W) -> Result<()> {
    let mut repl = Repl::new(output);
    writeln!(repl.out, "=== SQUARE GAME CLI ===")?;
    writeln!(repl.out, "Type HELP for commands")?;

    let mut line = String::new();
    loop {
        write!(repl.out, "> ")?;
        repl.out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        if repl.handle_line(&line)? == Flow::Exit {
            break;
        }
    }

    writeln!(repl.out, "Bye")?;
    Ok(())
}
