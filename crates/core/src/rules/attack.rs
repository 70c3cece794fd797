//! Attack detection and the check / checkmate oracle.

use crate::board::{Board, Color, PieceKind, Square};

impl Board {
    /// Whether any piece of `by` has a geometrically valid move onto
    /// `square`. Reuses normal move geometry, so a pawn attacks its capture
    /// diagonals, not the square ahead of it. This is a lower layer than
    /// check detection and must never recurse into it.
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        for from in Board::squares() {
            if let Some(piece) = self.piece_at(from) {
                if piece.color == by && self.is_geometrically_legal(piece, from, square) {
                    return true;
                }
            }
        }
        false
    }

    /// Locates the king of `color`, if present. Returning `Option` keeps a
    /// corrupted king-less board distinguishable by callers.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        Board::squares().find(|&square| {
            self.piece_at(square)
                .is_some_and(|piece| piece.kind == PieceKind::King && piece.color == color)
        })
    }

    /// Whether the king of `color` is attacked by the opposing color. A
    /// board with no king of `color` is reported as not in check.
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(king) => self.is_square_attacked(king, color.opponent()),
            None => false,
        }
    }

    /// Exhaustive checkmate test: in check, and every geometrically valid
    /// move of every piece of `color`, simulated on an independent copy,
    /// still leaves the king attacked. Bounded (pieces x destinations x
    /// attack scan) and meant for interactive use, not tree search.
    pub fn is_checkmate(&self, color: Color) -> bool {
        if !self.is_in_check(color) {
            return false;
        }

        for from in Board::squares() {
            let Some(piece) = self.piece_at(from) else {
                continue;
            };
            if piece.color != color {
                continue;
            }
            for to in Board::squares() {
                if !self.is_geometrically_legal(piece, from, to) {
                    continue;
                }
                let mut simulated = self.clone();
                if simulated.apply_move(from, to) && !simulated.is_in_check(color) {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Piece;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    fn empty_board() -> Board {
        let mut board = Board::new();
        for square in Board::squares() {
            board.set_piece(square, None);
        }
        board
    }

    #[test]
    fn pawn_attacks_diagonals_only() {
        let mut board = empty_board();
        board.set_piece(sq(4, 4), Some(Piece::new(PieceKind::Pawn, Color::White)));

        assert!(board.is_square_attacked(sq(3, 3), Color::White));
        assert!(board.is_square_attacked(sq(3, 5), Color::White));
        assert!(!board.is_square_attacked(sq(3, 4), Color::White));
    }

    #[test]
    fn fresh_board_has_no_check() {
        let board = Board::new();
        assert!(!board.is_in_check(Color::White));
        assert!(!board.is_in_check(Color::Black));
        assert!(!board.is_checkmate(Color::White));
        assert!(!board.is_checkmate(Color::Black));
    }

    #[test]
    fn king_square_finds_both_kings() {
        let board = Board::new();
        assert_eq!(board.king_square(Color::Black), Some(sq(0, 4)));
        assert_eq!(board.king_square(Color::White), Some(sq(7, 4)));
    }

    #[test]
    fn missing_king_is_not_in_check() {
        let mut board = empty_board();
        board.set_piece(sq(0, 0), Some(Piece::new(PieceKind::Queen, Color::Black)));
        assert_eq!(board.king_square(Color::White), None);
        assert!(!board.is_in_check(Color::White));
        assert!(!board.is_checkmate(Color::White));
    }

    #[test]
    fn rook_gives_check_along_open_file() {
        let mut board = empty_board();
        board.set_piece(sq(7, 4), Some(Piece::new(PieceKind::King, Color::White)));
        board.set_piece(sq(0, 4), Some(Piece::new(PieceKind::Rook, Color::Black)));
        assert!(board.is_in_check(Color::White));

        // interpose a pawn and the check disappears
        board.set_piece(sq(3, 4), Some(Piece::new(PieceKind::Pawn, Color::White)));
        assert!(!board.is_in_check(Color::White));
    }

    #[test]
    fn fools_mate_is_checkmate() {
        // 1.f3 e5 2.g4 Qh4#
        let mut board = Board::new();
        assert!(board.apply_move(sq(6, 5), sq(5, 5)));
        assert!(board.apply_move(sq(1, 4), sq(3, 4)));
        assert!(board.apply_move(sq(6, 6), sq(4, 6)));
        assert!(board.apply_move(sq(0, 3), sq(4, 7)));

        assert!(board.is_in_check(Color::White));
        assert!(board.is_checkmate(Color::White));
        assert!(!board.is_checkmate(Color::Black));
    }

    #[test]
    fn check_with_escape_is_not_checkmate() {
        // Bare white king in the middle, checked by a rook, plenty of flight
        // squares.
        let mut board = empty_board();
        board.set_piece(sq(4, 4), Some(Piece::new(PieceKind::King, Color::White)));
        board.set_piece(sq(4, 0), Some(Piece::new(PieceKind::Rook, Color::Black)));
        board.set_piece(sq(0, 0), Some(Piece::new(PieceKind::King, Color::Black)));

        assert!(board.is_in_check(Color::White));
        assert!(!board.is_checkmate(Color::White));
    }

    #[test]
    fn back_rank_mate() {
        let mut board = empty_board();
        board.set_piece(sq(7, 7), Some(Piece::new(PieceKind::King, Color::White)));
        board.set_piece(sq(6, 6), Some(Piece::new(PieceKind::Pawn, Color::White)));
        board.set_piece(sq(6, 7), Some(Piece::new(PieceKind::Pawn, Color::White)));
        board.set_piece(sq(7, 0), Some(Piece::new(PieceKind::Rook, Color::Black)));
        board.set_piece(sq(0, 0), Some(Piece::new(PieceKind::King, Color::Black)));

        assert!(board.is_checkmate(Color::White));
    }

    #[test]
    fn capture_of_checker_escapes_mate() {
        let mut board = empty_board();
        board.set_piece(sq(7, 7), Some(Piece::new(PieceKind::King, Color::White)));
        board.set_piece(sq(6, 6), Some(Piece::new(PieceKind::Pawn, Color::White)));
        board.set_piece(sq(6, 7), Some(Piece::new(PieceKind::Pawn, Color::White)));
        board.set_piece(sq(7, 0), Some(Piece::new(PieceKind::Rook, Color::Black)));
        // a white rook that can take the checker
        board.set_piece(sq(5, 0), Some(Piece::new(PieceKind::Rook, Color::White)));
        board.set_piece(sq(0, 4), Some(Piece::new(PieceKind::King, Color::Black)));

        assert!(board.is_in_check(Color::White));
        assert!(!board.is_checkmate(Color::White));
    }
}
