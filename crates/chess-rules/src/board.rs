//! Board state: an arena of pieces, the 8x8 placement grid, and per-color rosters.
//!
//! The board is a passive container. It never decides legality; the rules
//! read it and the validator mutates it through the crate-private API below.

use chess_core::{Color, PieceKind, PieceView, Square, BOARD_LENGTH};

use crate::piece::{Piece, PieceId};
use crate::RulesError;

const CELLS: usize = BOARD_LENGTH as usize * BOARD_LENGTH as usize;

/// Complete board state for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Piece arena, indexed by `PieceId`. Captured pieces leave a `None`.
    slots: Vec<Option<Piece>>,
    /// Placement grid in row-major order.
    grid: [Option<PieceId>; CELLS],
    /// In-play pieces per color, in placement order.
    rosters: [Vec<PieceId>; 2],
    /// Square of the pawn that advanced two squares on the last move, if any.
    en_passant: Option<Square>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new_game()
    }
}

impl Board {
    /// Creates a board with no pieces.
    pub fn empty() -> Self {
        Board {
            slots: Vec::new(),
            grid: [None; CELLS],
            rosters: [Vec::new(), Vec::new()],
            en_passant: None,
        }
    }

    /// Creates the standard starting position.
    pub fn new_game() -> Self {
        let mut board = Board::empty();
        for color in [Color::Black, Color::White] {
            for (col, kind) in (0u8..).zip(PieceKind::BACK_RANK) {
                board.place_unchecked(kind, color, color.home_row(), col);
            }
            for col in 0..BOARD_LENGTH {
                board.place_unchecked(PieceKind::Pawn, color, color.pawn_row(), col);
            }
        }
        board
    }

    fn place_unchecked(&mut self, kind: PieceKind, color: Color, row: u8, col: u8) {
        if let Some(square) = Square::new(row, col) {
            // Setup squares are distinct and on the board.
            let _ = self.place(kind, color, square);
        }
    }

    /// Places a new, unmoved piece on an empty square.
    pub fn place(
        &mut self,
        kind: PieceKind,
        color: Color,
        square: Square,
    ) -> Result<PieceId, RulesError> {
        if self.grid[square.index()].is_some() {
            return Err(RulesError::SquareOccupied(square));
        }
        let id = self.allocate(kind, color, square, false);
        self.rosters[color.index()].push(id);
        Ok(id)
    }

    fn allocate(
        &mut self,
        kind: PieceKind,
        color: Color,
        square: Square,
        has_moved: bool,
    ) -> PieceId {
        let id = PieceId(self.slots.len() as u32);
        self.slots.push(Some(Piece {
            id,
            kind,
            color,
            square,
            has_moved,
        }));
        self.grid[square.index()] = Some(id);
        id
    }

    /// Returns the piece on `square`, if any.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.grid[square.index()].and_then(|id| self.piece(id))
    }

    /// Returns the id of the piece on `square`, if any.
    #[inline]
    pub fn piece_id_at(&self, square: Square) -> Option<PieceId> {
        self.grid[square.index()]
    }

    /// Returns the piece with the given id if it is still in play.
    #[inline]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.grid[square.index()].is_none()
    }

    /// Returns the rendering view of the piece on `square`, if any.
    pub fn view_at(&self, square: Square) -> Option<PieceView> {
        self.piece_at(square).map(Piece::view)
    }

    /// Returns views of every occupied square in grid order.
    pub fn views(&self) -> Vec<PieceView> {
        Square::all().filter_map(|sq| self.view_at(sq)).collect()
    }

    /// Iterates over one color's pieces in placement order.
    pub fn roster(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.rosters[color.index()]
            .iter()
            .filter_map(move |&id| self.piece(id))
    }

    /// Iterates over all pieces in play, White first.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.roster(Color::White).chain(self.roster(Color::Black))
    }

    /// Number of pieces in play.
    pub fn piece_count(&self) -> usize {
        self.rosters[0].len() + self.rosters[1].len()
    }

    /// Square of the pawn that may be captured en passant on this move.
    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant
    }

    /// Relocates a piece to an empty square and marks it as moved.
    pub(crate) fn move_piece(&mut self, id: PieceId, to: Square) -> Result<(), RulesError> {
        if let Some(occupant) = self.grid[to.index()] {
            if occupant != id {
                return Err(RulesError::SquareOccupied(to));
            }
        }
        let piece = self
            .slots
            .get_mut(id.index())
            .and_then(Option::as_mut)
            .ok_or_else(|| not_in_play(id))?;
        let from = piece.square;
        piece.square = to;
        piece.has_moved = true;
        self.grid[from.index()] = None;
        self.grid[to.index()] = Some(id);
        Ok(())
    }

    /// Removes the piece on `square` from the grid, its roster and the arena.
    pub(crate) fn remove_at(&mut self, square: Square) -> Option<Piece> {
        let id = self.grid[square.index()].take()?;
        let piece = self.slots.get_mut(id.index()).and_then(Option::take)?;
        self.rosters[piece.color.index()].retain(|&other| other != id);
        if self.en_passant == Some(square) {
            self.en_passant = None;
        }
        Some(piece)
    }

    /// Swaps the piece on `square` for a new, already-moved piece of `kind`.
    ///
    /// The replacement keeps the old piece's color and roster position.
    pub(crate) fn replace_at(
        &mut self,
        square: Square,
        kind: PieceKind,
    ) -> Result<PieceId, RulesError> {
        let old_id = self.grid[square.index()].ok_or(RulesError::NoPieceAtSource(square))?;
        let old = self
            .slots
            .get_mut(old_id.index())
            .and_then(Option::take)
            .ok_or_else(|| not_in_play(old_id))?;
        let new_id = self.allocate(kind, old.color, square, true);
        let roster = &mut self.rosters[old.color.index()];
        match roster.iter_mut().find(|id| **id == old_id) {
            Some(slot) => *slot = new_id,
            None => roster.push(new_id),
        }
        Ok(new_id)
    }

    #[inline]
    pub(crate) fn set_en_passant(&mut self, square: Option<Square>) {
        self.en_passant = square;
    }

    /// Checks the invariants of a freshly mutated board, logging any breach.
    pub(crate) fn verified(self) -> Result<Self, RulesError> {
        match self.check_invariants() {
            Ok(()) => Ok(self),
            Err(err) => {
                tracing::error!(%err, "board invariants broken");
                Err(err)
            }
        }
    }

    /// Verifies that grid, piece positions and rosters agree.
    pub fn check_invariants(&self) -> Result<(), RulesError> {
        let fail = |msg: String| Err(RulesError::InternalInconsistency(msg));

        for square in Square::all() {
            let Some(id) = self.grid[square.index()] else {
                continue;
            };
            let Some(piece) = self.piece(id) else {
                return fail(format!("{} references captured {:?}", square, id));
            };
            if piece.square != square {
                return fail(format!("{:?} on {} believes it is on {}", id, square, piece.square));
            }
            if !self.rosters[piece.color.index()].contains(&id) {
                return fail(format!("{:?} on {} missing from {} roster", id, square, piece.color));
            }
        }

        for color in Color::ALL {
            for &id in &self.rosters[color.index()] {
                match self.piece(id) {
                    Some(piece) if piece.color == color => {
                        if self.grid[piece.square.index()] != Some(id) {
                            return fail(format!("{:?} in roster but not on {}", id, piece.square));
                        }
                    }
                    Some(_) => return fail(format!("{:?} in the wrong roster", id)),
                    None => return fail(format!("captured {:?} still in {} roster", id, color)),
                }
            }
        }

        let live = self.slots.iter().flatten().count();
        if live != self.piece_count() {
            return fail(format!("{} live pieces but {} roster entries", live, self.piece_count()));
        }

        if let Some(square) = self.en_passant {
            if !matches!(self.piece_at(square), Some(p) if p.kind == PieceKind::Pawn) {
                return fail(format!("en passant target {} holds no pawn", square));
            }
        }

        Ok(())
    }
}

fn not_in_play(id: PieceId) -> RulesError {
    RulesError::InternalInconsistency(format!("{:?} is not in play", id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn new_game_layout() {
        let board = Board::new_game();
        assert_eq!(board.piece_count(), 32);
        assert_eq!(board.roster(Color::White).count(), 16);
        assert_eq!(board.roster(Color::Black).count(), 16);

        for (col, kind) in (0u8..).zip(PieceKind::BACK_RANK) {
            let white = board.view_at(sq(7, col)).unwrap();
            assert_eq!((white.kind, white.color), (kind, Color::White));
            let black = board.view_at(sq(0, col)).unwrap();
            assert_eq!((black.kind, black.color), (kind, Color::Black));

            assert_eq!(
                board.view_at(sq(6, col)).map(|v| (v.kind, v.color)),
                Some((PieceKind::Pawn, Color::White))
            );
            assert_eq!(
                board.view_at(sq(1, col)).map(|v| (v.kind, v.color)),
                Some((PieceKind::Pawn, Color::Black))
            );
        }
        for row in 2..6 {
            for col in 0..8 {
                assert!(board.is_empty(sq(row, col)));
            }
        }
        assert!(board.pieces().all(|p| !p.has_moved()));
        assert_eq!(board.en_passant_target(), None);
        board.check_invariants().unwrap();
    }

    #[test]
    fn kings_on_column_four() {
        let board = Board::new_game();
        for (color, row) in [(Color::White, 7), (Color::Black, 0)] {
            let view = board.view_at(sq(row, 4)).unwrap();
            assert_eq!((view.kind, view.color), (PieceKind::King, color));
        }
    }

    #[test]
    fn place_rejects_occupied_square() {
        let mut board = Board::empty();
        board.place(PieceKind::Rook, Color::White, sq(4, 4)).unwrap();
        assert_eq!(
            board.place(PieceKind::Knight, Color::Black, sq(4, 4)),
            Err(RulesError::SquareOccupied(sq(4, 4)))
        );
        assert_eq!(board.piece_count(), 1);
    }

    #[test]
    fn move_piece_keeps_grid_and_position_in_sync() {
        let mut board = Board::empty();
        let id = board.place(PieceKind::Queen, Color::White, sq(7, 3)).unwrap();
        board.move_piece(id, sq(3, 3)).unwrap();

        assert!(board.is_empty(sq(7, 3)));
        assert_eq!(board.piece_id_at(sq(3, 3)), Some(id));
        let queen = board.piece(id).unwrap();
        assert_eq!(queen.square(), sq(3, 3));
        assert!(queen.has_moved());
        board.check_invariants().unwrap();
    }

    #[test]
    fn move_piece_refuses_occupied_destination() {
        let mut board = Board::empty();
        let id = board.place(PieceKind::Rook, Color::White, sq(7, 0)).unwrap();
        board.place(PieceKind::Pawn, Color::Black, sq(3, 0)).unwrap();
        assert_eq!(
            board.move_piece(id, sq(3, 0)),
            Err(RulesError::SquareOccupied(sq(3, 0)))
        );
    }

    #[test]
    fn remove_drops_from_grid_roster_and_arena() {
        let mut board = Board::new_game();
        let id = board.piece_id_at(sq(1, 3)).unwrap();
        let removed = board.remove_at(sq(1, 3)).unwrap();

        assert_eq!(removed.kind(), PieceKind::Pawn);
        assert_eq!(removed.color(), Color::Black);
        assert!(board.piece(id).is_none());
        assert!(board.is_empty(sq(1, 3)));
        assert_eq!(board.roster(Color::Black).count(), 15);
        assert!(board.remove_at(sq(1, 3)).is_none());
        board.check_invariants().unwrap();
    }

    #[test]
    fn replace_keeps_roster_position() {
        let mut board = Board::empty();
        board.place(PieceKind::King, Color::White, sq(7, 4)).unwrap();
        let pawn = board.place(PieceKind::Pawn, Color::White, sq(0, 2)).unwrap();
        board.place(PieceKind::Rook, Color::White, sq(7, 7)).unwrap();

        let queen = board.replace_at(sq(0, 2), PieceKind::Queen).unwrap();
        assert_ne!(queen, pawn);
        assert!(board.piece(pawn).is_none());

        let kinds: Vec<PieceKind> = board.roster(Color::White).map(Piece::kind).collect();
        assert_eq!(kinds, vec![PieceKind::King, PieceKind::Queen, PieceKind::Rook]);
        assert!(board.piece(queen).unwrap().has_moved());
        board.check_invariants().unwrap();
    }

    #[test]
    fn removing_en_passant_pawn_clears_target() {
        let mut board = Board::empty();
        board.place(PieceKind::Pawn, Color::Black, sq(3, 5)).unwrap();
        board.set_en_passant(Some(sq(3, 5)));
        board.remove_at(sq(3, 5));
        assert_eq!(board.en_passant_target(), None);
    }

    #[test]
    fn invariant_check_detects_stray_en_passant() {
        let mut board = Board::empty();
        board.set_en_passant(Some(sq(3, 5)));
        assert!(matches!(
            board.check_invariants(),
            Err(RulesError::InternalInconsistency(_))
        ));
    }

    #[test]
    fn verified_surfaces_desynced_piece() {
        let mut board = Board::empty();
        let id = board.place(PieceKind::Knight, Color::White, sq(7, 1)).unwrap();
        assert!(board.clone().verified().is_ok());

        if let Some(Some(knight)) = board.slots.get_mut(id.index()) {
            knight.square = sq(5, 2);
        }
        assert!(matches!(
            board.verified(),
            Err(RulesError::InternalInconsistency(_))
        ));
    }

    #[test]
    fn views_in_grid_order() {
        let board = Board::new_game();
        let views = board.views();
        assert_eq!(views.len(), 32);
        assert_eq!(views[0].square, sq(0, 0));
        assert_eq!(views[31].square, sq(7, 7));
    }
}
