//! One hotseat session: applies player commands to a game and describes
//! the result as text.

use chess_core::Color;
use chess_rules::{Game, GameConfig, GameEvent, TapResult};

use crate::command::{Command, HELP};
use crate::config::HotseatConfig;
use crate::render::{render, RenderOptions};

/// What the front end should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print this text and keep reading.
    Text(String),
    /// Print this text and exit.
    Quit(String),
}

pub struct Session {
    game: Game,
    config: HotseatConfig,
}

impl Session {
    pub fn new(config: HotseatConfig) -> Self {
        let game = Game::with_config(GameConfig {
            enforce_turns: config.enforce_turns,
        });
        Session { game, config }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    fn options(&self) -> RenderOptions {
        RenderOptions {
            unicode: self.config.unicode,
            show_coordinates: self.config.show_coordinates,
        }
    }

    /// Board plus a status line saying whose turn it is.
    pub fn status(&self) -> String {
        let board = render(self.game.board(), self.game.selected(), self.options());
        let prompt = match self.game.pending_promotion() {
            Some(square) => format!(
                "{} promotes on {}: type 'promote <piece>'",
                self.game.side_to_move(),
                square
            ),
            None => format!("{} to move", self.game.side_to_move()),
        };
        format!("{}{}", board, prompt)
    }

    pub fn handle(&mut self, command: Command) -> Reply {
        let result = match command {
            Command::Empty => return Reply::Text(String::new()),
            Command::Help => return Reply::Text(HELP.to_string()),
            Command::Quit => return Reply::Quit("bye".to_string()),
            Command::Show => return Reply::Text(self.status()),
            Command::Captured => return Reply::Text(self.captured()),
            Command::NewGame => {
                self.game.new_game();
                return Reply::Text(self.status());
            }
            Command::Move { from, to } => self.game.make_move(from, to).map(Some),
            Command::Promote(kind) => self.game.promote(kind).map(Some),
            Command::Tap(index) => match self.game.tap(index) {
                Ok(TapResult::Moved(events)) => Ok(Some(events)),
                Ok(TapResult::Rejected(err)) => Err(err),
                Ok(TapResult::Selected(_) | TapResult::Deselected | TapResult::Ignored) => Ok(None),
                Err(err) => Err(err),
            },
        };

        match result {
            Ok(Some(mut events)) => {
                events.extend(self.auto_promote());
                let mut lines: Vec<String> = events.iter().map(describe).collect();
                lines.push(self.status());
                Reply::Text(lines.join("\n"))
            }
            Ok(None) => Reply::Text(self.status()),
            Err(err) => {
                tracing::info!(%err, "command rejected");
                Reply::Text(format!("rejected: {}", err))
            }
        }
    }

    /// Resolves a pending promotion when the config names a piece.
    fn auto_promote(&mut self) -> Vec<GameEvent> {
        match (self.config.auto_promote, self.game.pending_promotion()) {
            (Some(kind), Some(_)) => match self.game.promote(kind) {
                Ok(events) => events,
                Err(err) => {
                    tracing::warn!(%err, %kind, "automatic promotion failed");
                    Vec::new()
                }
            },
            _ => Vec::new(),
        }
    }

    fn captured(&self) -> String {
        Color::ALL
            .into_iter()
            .map(|color| {
                let kinds: Vec<String> = self
                    .game
                    .captured(color)
                    .iter()
                    .map(|p| p.kind().to_string())
                    .collect();
                if kinds.is_empty() {
                    format!("{} lost: nothing", color)
                } else {
                    format!("{} lost: {}", color, kinds.join(", "))
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn describe(event: &GameEvent) -> String {
    match event {
        GameEvent::Moved { from, to, piece } => {
            format!("{} {} {} -> {}", piece.color, piece.kind, from, to)
        }
        GameEvent::Captured { piece } => format!("captured {} {}", piece.color, piece.kind),
        GameEvent::RookCastled { from, to } => format!("castled: rook {} -> {}", from, to),
        GameEvent::EnPassant { captured_at } => {
            format!("en passant, pawn removed from {}", captured_at)
        }
        GameEvent::PromotionRequired { square } => format!("pawn on {} must be promoted", square),
        GameEvent::Promoted { square, kind } => format!("pawn on {} promoted to {}", square, kind),
    }
}
