//! Text rendering of the board.

use chess_core::{Color, PieceKind, PieceView, Square, BOARD_LENGTH};
use chess_rules::Board;

/// How the board is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub unicode: bool,
    pub show_coordinates: bool,
}

fn glyph(view: PieceView, unicode: bool) -> char {
    if !unicode {
        return view.kind.symbol(view.color);
    }
    match (view.color, view.kind) {
        (Color::White, PieceKind::King) => '♔',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::Black, PieceKind::King) => '♚',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Pawn) => '♟',
    }
}

/// Draws the board with row 0 at the top, light squares as `.` and dark
/// squares as `:`. The selected square, if any, is bracketed.
pub fn render(board: &Board, selected: Option<Square>, options: RenderOptions) -> String {
    let mut out = String::new();
    if options.show_coordinates {
        out.push_str("   ");
        for col in 0..BOARD_LENGTH {
            out.push_str(&format!(" {} ", col));
        }
        out.push('\n');
    }
    for row in 0..BOARD_LENGTH {
        if options.show_coordinates {
            out.push_str(&format!(" {} ", row));
        }
        for col in 0..BOARD_LENGTH {
            let Some(square) = Square::new(row, col) else {
                continue;
            };
            let cell = match board.view_at(square) {
                Some(view) => glyph(view, options.unicode),
                None if square.is_light() => '.',
                None => ':',
            };
            if selected == Some(square) {
                out.push_str(&format!("[{}]", cell));
            } else {
                out.push_str(&format!(" {} ", cell));
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: RenderOptions = RenderOptions {
        unicode: false,
        show_coordinates: false,
    };

    #[test]
    fn start_position_ascii() {
        let text = render(&Board::new_game(), None, PLAIN);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], " r  n  b  q  k  b  n  r ");
        assert_eq!(lines[1], " p  p  p  p  p  p  p  p ");
        assert_eq!(lines[2], " .  :  .  :  .  :  .  : ");
        assert_eq!(lines[3], " :  .  :  .  :  .  :  . ");
        assert_eq!(lines[7], " R  N  B  Q  K  B  N  R ");
    }

    #[test]
    fn selection_and_coordinates() {
        let options = RenderOptions {
            unicode: true,
            show_coordinates: true,
        };
        let text = render(&Board::new_game(), Square::new(7, 4), options);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "    0  1  2  3  4  5  6  7 ");
        assert!(lines[8].starts_with(" 7 "));
        assert!(lines[8].contains("[♔]"));
        assert!(lines[1].contains('♚'));
    }
}
