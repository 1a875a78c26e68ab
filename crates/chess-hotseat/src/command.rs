//! Parsing of the lines players type.

use chess_core::{ParseError, PieceKind, Square};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("{0}")]
    Parse(#[from] ParseError),
    #[error("expected {0}")]
    Usage(&'static str),
    #[error("unknown command '{0}', type 'help' for a list")]
    Unknown(String),
}

/// A player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move between two squares, e.g. `6,4 4,4` or `move 6,4 4,4`.
    Move { from: Square, to: Square },
    /// Tap a grid cell by row-major index, e.g. `tap 52`.
    Tap(usize),
    /// Choose the promotion piece, e.g. `promote queen` or `promote n`.
    Promote(PieceKind),
    /// Redraw the board.
    Show,
    /// List captured pieces.
    Captured,
    /// Start over.
    NewGame,
    Help,
    Quit,
    /// Blank line.
    Empty,
}

impl Command {
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let input = input.trim();
        let mut parts = input.split_whitespace();

        let Some(cmd) = parts.next() else {
            return Ok(Command::Empty);
        };

        match cmd {
            "move" | "m" => Self::parse_move(parts.next(), parts.next()),
            "tap" | "t" => {
                let index = parts.next().ok_or(CommandError::Usage("tap <0-63>"))?;
                index
                    .parse()
                    .map(Command::Tap)
                    .map_err(|_| CommandError::Usage("tap <0-63>"))
            }
            "promote" | "p" => {
                let kind = parts
                    .next()
                    .ok_or(CommandError::Usage("promote <queen|rook|bishop|knight>"))?;
                Ok(Command::Promote(kind.parse()?))
            }
            "board" | "show" => Ok(Command::Show),
            "captured" => Ok(Command::Captured),
            "new" => Ok(Command::NewGame),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            _ if cmd.contains(',') => Self::parse_move(Some(cmd), parts.next()),
            _ => Err(CommandError::Unknown(input.to_string())),
        }
    }

    fn parse_move(from: Option<&str>, to: Option<&str>) -> Result<Self, CommandError> {
        match (from, to) {
            (Some(from), Some(to)) => Ok(Command::Move {
                from: from.parse()?,
                to: to.parse()?,
            }),
            _ => Err(CommandError::Usage("<row,col> <row,col>")),
        }
    }
}

pub const HELP: &str = "\
commands:
  <row,col> <row,col>   move a piece, e.g. 6,4 4,4
  tap <0-63>            tap a grid cell (row * 8 + col)
  promote <piece>       choose queen, rook, bishop or knight
  board                 redraw the board
  captured              list captured pieces
  new                   start a new game
  quit                  leave";
