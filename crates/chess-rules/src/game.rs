//! Game session management.
//!
//! The [`Game`] struct owns one [`Board`] and serializes everything a host
//! does to it:
//! - Turn order (optional, see [`GameConfig`])
//! - Pending promotion choices, which block further moves
//! - Two-tap selection for grid-based front ends
//! - An archive of captured pieces per color
//! - [`GameEvent`]s describing every square that changed

use chess_core::{Color, Move, PieceKind, PieceView, Square};

use crate::promotion::resolve_promotion;
use crate::validator::attempt_move;
use crate::{Board, GameError, Piece, RulesError};

/// Session settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Reject moves by the side that is not on turn.
    pub enforce_turns: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            enforce_turns: true,
        }
    }
}

/// Notifications for the host, in the order they happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A piece moved from one square to another.
    Moved { from: Square, to: Square, piece: PieceView },
    /// A piece left the board.
    Captured { piece: PieceView },
    /// The rook jumped beside the king while castling.
    RookCastled { from: Square, to: Square },
    /// A pawn was captured en passant; its square is now empty.
    EnPassant { captured_at: Square },
    /// A pawn reached its last row; call [`Game::promote`] next.
    PromotionRequired { square: Square },
    /// A pawn was replaced by the chosen piece.
    Promoted { square: Square, kind: PieceKind },
}

/// What a tap on the board grid did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TapResult {
    /// A piece is now selected.
    Selected(Square),
    /// The selection was cleared.
    Deselected,
    /// The selected piece moved.
    Moved(Vec<GameEvent>),
    /// The selected piece could not move there; the selection was cleared.
    Rejected(GameError),
    /// Nothing selectable was tapped.
    Ignored,
}

/// A two-player game on one board.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    config: GameConfig,
    side_to_move: Color,
    pending_promotion: Option<Square>,
    selected: Option<Square>,
    /// Captured pieces, indexed by the captured piece's color.
    captured: [Vec<Piece>; 2],
    ply: u32,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with the standard starting position.
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// Creates a new game with custom settings.
    pub fn with_config(config: GameConfig) -> Self {
        Self::from_board(Board::new_game(), config)
    }

    /// Creates a game from an arbitrary board, White to move.
    pub fn from_board(board: Board, config: GameConfig) -> Self {
        Game {
            board,
            config,
            side_to_move: Color::White,
            pending_promotion: None,
            selected: None,
            captured: [Vec::new(), Vec::new()],
            ply: 0,
        }
    }

    /// Discards the current game and starts over from the standard position.
    pub fn new_game(&mut self) {
        *self = Self::with_config(self.config);
        tracing::debug!("new game started");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Square of the pawn waiting for a promotion choice, if any.
    pub fn pending_promotion(&self) -> Option<Square> {
        self.pending_promotion
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Pieces of `color` that have been captured, oldest first.
    pub fn captured(&self, color: Color) -> &[Piece] {
        &self.captured[color.index()]
    }

    /// Number of completed moves (a promotion completes the move it belongs to).
    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// Renders the piece on `square`, if any.
    pub fn piece_at(&self, square: Square) -> Option<PieceView> {
        self.board.view_at(square)
    }

    /// Moves the piece on `from` to `to`.
    pub fn make_move(&mut self, from: Square, to: Square) -> Result<Vec<GameEvent>, GameError> {
        if let Some(square) = self.pending_promotion {
            return Err(GameError::PromotionPending(square));
        }
        let mover = self
            .board
            .piece_at(from)
            .map(Piece::view)
            .ok_or(RulesError::NoPieceAtSource(from))?;
        if self.config.enforce_turns && mover.color != self.side_to_move {
            return Err(GameError::NotYourTurn(self.side_to_move));
        }

        let (accepted, pending) = attempt_move(&self.board, from, to).into_result()?;
        let mv = accepted.mv;
        let mut events = vec![GameEvent::Moved {
            from,
            to,
            piece: PieceView { square: to, ..mover },
        }];
        events.extend(Self::side_effects(mv, accepted.captured.as_ref()));

        self.board = accepted.board;
        self.selected = None;
        if let Some(piece) = accepted.captured {
            self.captured[piece.color().index()].push(piece);
        }

        if pending {
            self.pending_promotion = Some(to);
            events.push(GameEvent::PromotionRequired { square: to });
        } else {
            self.finish_turn();
        }
        Ok(events)
    }

    fn side_effects(mv: Move, captured: Option<&Piece>) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if let Some(piece) = captured {
            events.push(GameEvent::Captured { piece: piece.view() });
        }
        if let Some(captured_at) = mv.en_passant_victim() {
            events.push(GameEvent::EnPassant { captured_at });
        }
        if let Some((from, to)) = mv.rook_move() {
            events.push(GameEvent::RookCastled { from, to });
        }
        events
    }

    /// Completes a pending promotion with the chosen piece kind.
    pub fn promote(&mut self, kind: PieceKind) -> Result<Vec<GameEvent>, GameError> {
        let square = self
            .pending_promotion
            .ok_or(GameError::NoPendingPromotion)?;
        self.board = resolve_promotion(&self.board, square, kind)?;
        self.pending_promotion = None;
        self.finish_turn();
        Ok(vec![GameEvent::Promoted { square, kind }])
    }

    /// Handles a tap on grid cell `index` (row-major, 0-63).
    ///
    /// The first tap selects one of the mover's pieces, tapping it again
    /// deselects it, tapping another own piece switches the selection, and
    /// any other tap tries to move the selected piece there.
    pub fn tap(&mut self, index: usize) -> Result<TapResult, GameError> {
        let square = Square::from_index(index).ok_or(RulesError::OutOfRange {
            row: i32::try_from(index / 8).unwrap_or(i32::MAX),
            col: (index % 8) as i32,
        })?;
        if let Some(pending) = self.pending_promotion {
            return Err(GameError::PromotionPending(pending));
        }

        let tapped = self.board.piece_at(square).map(Piece::color);
        let current = self.selected;
        let result = match current {
            Some(selected) if selected == square => {
                self.selected = None;
                TapResult::Deselected
            }
            Some(selected) => {
                let selected_color = self.board.piece_at(selected).map(Piece::color);
                if tapped.is_some() && tapped == selected_color {
                    self.selected = Some(square);
                    TapResult::Selected(square)
                } else {
                    self.selected = None;
                    match self.make_move(selected, square) {
                        Ok(events) => TapResult::Moved(events),
                        Err(err) => TapResult::Rejected(err),
                    }
                }
            }
            None => match tapped {
                Some(color) if self.may_move(color) => {
                    self.selected = Some(square);
                    TapResult::Selected(square)
                }
                _ => TapResult::Ignored,
            },
        };
        Ok(result)
    }

    fn may_move(&self, color: Color) -> bool {
        !self.config.enforce_turns || color == self.side_to_move
    }

    fn finish_turn(&mut self) {
        self.side_to_move = self.side_to_move.opposite();
        self.ply += 1;
    }
}
