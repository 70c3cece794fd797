//! The move applicator: the single authoritative mutation path for a board.

use crate::board::{Board, CastleSide, Piece, PieceKind, Square};

impl Board {
    /// Validates and applies a move, returning whether it was accepted. On
    /// rejection the board is left untouched: every check runs before any
    /// mutation.
    ///
    /// Check-safety is deliberately not enforced here. The applicator is a
    /// mechanical executor of geometrically legal moves; callers veto moves
    /// that leave their own king attacked by simulating on a copy (see
    /// [`crate::game::GameSession::try_move`]).
    pub fn apply_move(&mut self, from: Square, to: Square) -> bool {
        let Some(piece) = self.piece_at(from) else {
            return false;
        };

        // A king moving two columns is a castling request.
        let col_diff = to.col() as i32 - from.col() as i32;
        if piece.kind == PieceKind::King && col_diff.abs() == 2 {
            let side = if col_diff > 0 {
                CastleSide::Kingside
            } else {
                CastleSide::Queenside
            };
            if self.can_castle(piece.color, side) {
                self.perform_castling(piece.color, side);
                self.en_passant_target = None;
                return true;
            }
            return false;
        }

        if !self.is_geometrically_legal(piece, from, to) {
            return false;
        }

        // En passant: landing on the target square captures the pawn that
        // sits directly behind it from the mover's perspective.
        if piece.kind == PieceKind::Pawn && self.en_passant_target == Some(to) {
            let captured_row = to.row() as i32 - piece.color.pawn_direction();
            if let Some(captured) = Square::new(captured_row as u8, to.col()) {
                self.set_piece(captured, None);
            }
        }

        self.set_piece(to, Some(piece));
        self.set_piece(from, None);

        // Promotion is always to a queen.
        if piece.kind == PieceKind::Pawn && to.row() == piece.color.promotion_row() {
            self.set_piece(to, Some(Piece::new(PieceKind::Queen, piece.color)));
        }

        match piece.kind {
            PieceKind::King => {
                self.king_moved[piece.color.index()] = true;
            }
            PieceKind::Rook => {
                // Rooks leaving a home column burn that wing's castling
                // rights.
                if from.col() == CastleSide::Queenside.rook_col() {
                    self.rook_moved[piece.color.index()][CastleSide::Queenside.index()] = true;
                } else if from.col() == CastleSide::Kingside.rook_col() {
                    self.rook_moved[piece.color.index()][CastleSide::Kingside.index()] = true;
                }
            }
            _ => {}
        }

        // A double pawn push arms en passant on the skipped square; every
        // other move disarms it.
        let row_diff = (to.row() as i32 - from.row() as i32).abs();
        if piece.kind == PieceKind::Pawn && row_diff == 2 {
            let skipped_row = to.row() as i32 - piece.color.pawn_direction();
            self.en_passant_target = Square::new(skipped_row as u8, to.col());
        } else {
            self.en_passant_target = None;
        }

        true
    }
}
