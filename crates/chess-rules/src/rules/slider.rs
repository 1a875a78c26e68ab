//! Bishop, rook and queen: pieces that slide along an unobstructed line.

use chess_core::{MoveKind, Square};

use super::landing;
use crate::{Board, Piece};

pub(super) fn bishop(board: &Board, piece: &Piece, to: Square) -> Option<MoveKind> {
    let (drow, dcol) = piece.square().delta_to(to);
    if drow.abs() != dcol.abs() {
        return None;
    }
    slide(board, piece, to)
}

pub(super) fn rook(board: &Board, piece: &Piece, to: Square) -> Option<MoveKind> {
    let (drow, dcol) = piece.square().delta_to(to);
    if (drow == 0) == (dcol == 0) {
        return None;
    }
    slide(board, piece, to)
}

pub(super) fn queen(board: &Board, piece: &Piece, to: Square) -> Option<MoveKind> {
    rook(board, piece, to).or_else(|| bishop(board, piece, to))
}

/// Checks the squares strictly between source and destination, then the
/// landing square. The caller has already verified the line is straight.
fn slide(board: &Board, piece: &Piece, to: Square) -> Option<MoveKind> {
    if !path_clear(board, piece.square(), to) {
        return None;
    }
    landing(board, piece, to)
}

/// Returns true if no piece stands strictly between `from` and `to` on the
/// straight or diagonal line joining them.
pub(super) fn path_clear(board: &Board, from: Square, to: Square) -> bool {
    let (drow, dcol) = from.delta_to(to);
    let (step_row, step_col) = (drow.signum(), dcol.signum());
    let mut current = from;
    loop {
        current = match current.offset(step_row, step_col) {
            Some(next) => next,
            None => return false,
        };
        if current == to {
            return true;
        }
        if !board.is_empty(current) {
            return false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::classify;
    use chess_core::{Color, PieceKind};

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    fn lone(kind: PieceKind, at: Square) -> Board {
        let mut board = Board::empty();
        board.place(kind, Color::White, at).unwrap();
        board
    }

    fn reachable(board: &Board, from: Square) -> usize {
        let piece = board.piece_at(from).unwrap();
        Square::all()
            .filter(|&to| classify(board, piece, to).is_some())
            .count()
    }

    #[test]
    fn open_board_reach() {
        let center = sq(3, 3);
        assert_eq!(reachable(&lone(PieceKind::Bishop, center), center), 13);
        assert_eq!(reachable(&lone(PieceKind::Rook, center), center), 14);
        assert_eq!(reachable(&lone(PieceKind::Queen, center), center), 27);
    }

    #[test]
    fn bishop_needs_diagonal() {
        let board = lone(PieceKind::Bishop, sq(7, 2));
        let bishop = board.piece_at(sq(7, 2)).unwrap();
        assert_eq!(classify(&board, bishop, sq(2, 7)), Some(MoveKind::Quiet));
        assert_eq!(classify(&board, bishop, sq(5, 2)), None);
        assert_eq!(classify(&board, bishop, sq(5, 3)), None);
    }

    #[test]
    fn rook_blocked_by_intermediate_piece() {
        let mut board = lone(PieceKind::Rook, sq(7, 0));
        board.place(PieceKind::Pawn, Color::Black, sq(4, 0)).unwrap();
        let rook = board.piece_at(sq(7, 0)).unwrap();
        assert_eq!(classify(&board, rook, sq(5, 0)), Some(MoveKind::Quiet));
        assert_eq!(classify(&board, rook, sq(4, 0)), Some(MoveKind::Capture));
        assert_eq!(classify(&board, rook, sq(3, 0)), None);
        assert_eq!(classify(&board, rook, sq(0, 0)), None);
    }

    #[test]
    fn queen_blocked_diagonally() {
        let mut board = lone(PieceKind::Queen, sq(7, 3));
        board.place(PieceKind::Pawn, Color::White, sq(6, 4)).unwrap();
        let queen = board.piece_at(sq(7, 3)).unwrap();
        assert_eq!(classify(&board, queen, sq(6, 4)), None);
        assert_eq!(classify(&board, queen, sq(4, 6)), None);
        assert_eq!(classify(&board, queen, sq(4, 0)), Some(MoveKind::Quiet));
    }

    #[test]
    fn sliders_stuck_in_start_position() {
        let board = Board::new_game();
        for from in [sq(7, 0), sq(7, 2), sq(7, 3), sq(0, 5), sq(0, 7)] {
            assert_eq!(reachable(&board, from), 0, "piece on {} should be boxed in", from);
        }
    }

    #[test]
    fn adjacent_path_is_clear() {
        let board = Board::new_game();
        assert!(path_clear(&board, sq(6, 0), sq(5, 0)));
        assert!(!path_clear(&board, sq(7, 0), sq(5, 0)));
    }
}
