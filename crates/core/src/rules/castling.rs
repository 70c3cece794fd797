//! Castling: permission checks and the compound king+rook relocation.

use crate::board::{Board, CastleSide, Color, Square, KING_COL};

impl Board {
    /// All four castling conditions: the side is not in check, neither the
    /// king nor the relevant rook has moved, the squares strictly between
    /// them are empty, and none of the king's start, transit, or destination
    /// squares is attacked by the opponent.
    pub fn can_castle(&self, color: Color, side: CastleSide) -> bool {
        if self.is_in_check(color) {
            return false;
        }
        if self.king_moved(color) || self.rook_moved(color, side) {
            return false;
        }

        let row = color.back_rank();
        let rook_col = side.rook_col();

        let (lo, hi) = if rook_col > KING_COL {
            (KING_COL + 1, rook_col - 1)
        } else {
            (rook_col + 1, KING_COL - 1)
        };
        for col in lo..=hi {
            let square = Square::new(row, col).expect("back rank column");
            if self.piece_at(square).is_some() {
                return false;
            }
        }

        let direction: i32 = match side {
            CastleSide::Kingside => 1,
            CastleSide::Queenside => -1,
        };
        let opponent = color.opponent();
        for step in 0..=2 {
            let col = (KING_COL as i32 + step * direction) as u8;
            let square = Square::new(row, col).expect("king path column");
            if self.is_square_attacked(square, opponent) {
                return false;
            }
        }

        true
    }

    /// Relocates the king to column 6 (kingside) or 2 (queenside) and the
    /// rook to column 5 or 3 on the back rank, clears both origin squares,
    /// and sets both moved flags. Callers must have established
    /// [`Board::can_castle`] first.
    pub fn perform_castling(&mut self, color: Color, side: CastleSide) {
        let row = color.back_rank();
        let (king_to, rook_to) = match side {
            CastleSide::Kingside => (6, 5),
            CastleSide::Queenside => (2, 3),
        };

        let king_from = Square::new(row, KING_COL).expect("back rank square");
        let rook_from = Square::new(row, side.rook_col()).expect("back rank square");
        let king_to = Square::new(row, king_to).expect("back rank square");
        let rook_to = Square::new(row, rook_to).expect("back rank square");

        let king = self.piece_at(king_from);
        let rook = self.piece_at(rook_from);
        if let (Some(king), Some(rook)) = (king, rook) {
            self.set_piece(king_to, Some(king));
            self.set_piece(rook_to, Some(rook));
            self.set_piece(king_from, None);
            self.set_piece(rook_from, None);
            self.king_moved[color.index()] = true;
            self.rook_moved[color.index()][side.index()] = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Piece, PieceKind};

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    /// Starting position with the squares between the white king and both
    /// rooks cleared.
    fn castling_ready() -> Board {
        let mut board = Board::new();
        for col in [1, 2, 3, 5, 6] {
            board.set_piece(sq(7, col), None);
        }
        board
    }

    #[test]
    fn fresh_board_cannot_castle() {
        let board = Board::new();
        assert!(!board.can_castle(Color::White, CastleSide::Kingside));
        assert!(!board.can_castle(Color::White, CastleSide::Queenside));
    }

    #[test]
    fn clear_path_allows_castling() {
        let board = castling_ready();
        assert!(board.can_castle(Color::White, CastleSide::Kingside));
        assert!(board.can_castle(Color::White, CastleSide::Queenside));
    }

    #[test]
    fn king_moved_flag_forbids_castling() {
        let mut board = castling_ready();
        board.king_moved[Color::White.index()] = true;
        assert!(!board.can_castle(Color::White, CastleSide::Kingside));
        assert!(!board.can_castle(Color::White, CastleSide::Queenside));
    }

    #[test]
    fn rook_moved_flag_forbids_that_side_only() {
        let mut board = castling_ready();
        board.rook_moved[Color::White.index()][CastleSide::Kingside.index()] = true;
        assert!(!board.can_castle(Color::White, CastleSide::Kingside));
        assert!(board.can_castle(Color::White, CastleSide::Queenside));
    }

    #[test]
    fn occupied_square_between_forbids_castling() {
        let mut board = castling_ready();
        board.set_piece(sq(7, 1), Some(Piece::new(PieceKind::Knight, Color::White)));
        // b1 blocks only the queenside
        assert!(board.can_castle(Color::White, CastleSide::Kingside));
        assert!(!board.can_castle(Color::White, CastleSide::Queenside));
    }

    #[test]
    fn cannot_castle_while_in_check() {
        let mut board = castling_ready();
        board.set_piece(sq(6, 4), None);
        board.set_piece(sq(1, 4), None);
        board.set_piece(sq(3, 4), Some(Piece::new(PieceKind::Rook, Color::Black)));
        assert!(board.is_in_check(Color::White));
        assert!(!board.can_castle(Color::White, CastleSide::Kingside));
    }

    #[test]
    fn attacked_transit_square_forbids_castling() {
        let mut board = castling_ready();
        board.set_piece(sq(6, 5), None);
        // black rook hits f1, the square the king passes through
        board.set_piece(sq(3, 5), Some(Piece::new(PieceKind::Rook, Color::Black)));
        assert!(!board.can_castle(Color::White, CastleSide::Kingside));
        assert!(board.can_castle(Color::White, CastleSide::Queenside));
    }

    #[test]
    fn attacked_destination_square_forbids_castling() {
        let mut board = castling_ready();
        board.set_piece(sq(6, 6), None);
        // black rook hits g1, the king's destination
        board.set_piece(sq(3, 6), Some(Piece::new(PieceKind::Rook, Color::Black)));
        assert!(!board.can_castle(Color::White, CastleSide::Kingside));
        assert!(board.can_castle(Color::White, CastleSide::Queenside));
    }

    #[test]
    fn perform_castling_places_king_and_rook() {
        let mut board = castling_ready();
        board.perform_castling(Color::White, CastleSide::Kingside);

        assert_eq!(
            board.piece_at(sq(7, 6)),
            Some(Piece::new(PieceKind::King, Color::White))
        );
        assert_eq!(
            board.piece_at(sq(7, 5)),
            Some(Piece::new(PieceKind::Rook, Color::White))
        );
        assert!(board.piece_at(sq(7, 4)).is_none());
        assert!(board.piece_at(sq(7, 7)).is_none());
        assert!(board.king_moved(Color::White));
        assert!(board.rook_moved(Color::White, CastleSide::Kingside));
    }

    #[test]
    fn black_queenside_castling() {
        let mut board = Board::new();
        for col in [1, 2, 3] {
            board.set_piece(sq(0, col), None);
        }
        assert!(board.can_castle(Color::Black, CastleSide::Queenside));

        board.perform_castling(Color::Black, CastleSide::Queenside);
        assert_eq!(
            board.piece_at(sq(0, 2)),
            Some(Piece::new(PieceKind::King, Color::Black))
        );
        assert_eq!(
            board.piece_at(sq(0, 3)),
            Some(Piece::new(PieceKind::Rook, Color::Black))
        );
    }
}
